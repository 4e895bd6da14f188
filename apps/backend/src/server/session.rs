//! One TCP connection: name prompt, seating, then line relay both ways.

use std::net::SocketAddr;
use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_util::codec::{Framed, LinesCodec};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::registry::TableRegistry;
use super::table_task::TableHandle;
use crate::error::AppError;
use crate::protocol::{parse_line, Inbound};

pub const MAX_LINE: usize = 1024;
const JOIN_ATTEMPTS: usize = 3;

type Conn = Framed<TcpStream, LinesCodec>;

pub async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    registry: Arc<TableRegistry>,
) -> Result<(), AppError> {
    let conn_id = Uuid::new_v4();
    debug!(%conn_id, %peer, "connection accepted");
    let mut conn = Framed::new(stream, LinesCodec::new_with_max_length(MAX_LINE));
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<String>();

    conn.send("Welcome to Tien Len. What is your name?").await?;
    let Some((name, table)) = seat_player(&mut conn, &registry, out_tx).await? else {
        debug!(%conn_id, "disconnected before joining");
        return Ok(());
    };
    info!(%conn_id, %peer, name, table_id = table.id(), "player seated");

    let result = relay(&mut conn, &name, &table, &mut out_rx).await;
    if let Err(err) = table.leave(&name).await {
        debug!(%conn_id, error = %err, "leave after table stopped");
    }
    info!(%conn_id, name, "connection closed");
    result
}

/// Ask for a name until the player is seated or hangs up.
async fn seat_player(
    conn: &mut Conn,
    registry: &Arc<TableRegistry>,
    outbox: mpsc::UnboundedSender<String>,
) -> Result<Option<(String, TableHandle)>, AppError> {
    while let Some(line) = conn.next().await {
        let name = line?.trim().to_string();
        if name.is_empty() {
            conn.send("Please enter a name.").await?;
            continue;
        }
        match join_open_table(registry, &name, outbox.clone()).await {
            Ok(table) => return Ok(Some((name, table))),
            Err(err) if err.is_rejection() => {
                conn.send(format!("{err} Please choose another name.")).await?
            }
            Err(err) => return Err(err),
        }
    }
    Ok(None)
}

async fn join_open_table(
    registry: &Arc<TableRegistry>,
    name: &str,
    outbox: mpsc::UnboundedSender<String>,
) -> Result<TableHandle, AppError> {
    for _ in 0..JOIN_ATTEMPTS {
        let table = registry.open_table()?;
        match table.join(name, outbox.clone()).await {
            Ok(_) => return Ok(table),
            Err(err) if err.is_rejection() && table.is_open() => return Err(err),
            Err(err) => {
                debug!(table_id = table.id(), error = %err, "table filled or closed while joining")
            }
        }
    }
    Err(AppError::internal("no table accepted the player"))
}

async fn relay(
    conn: &mut Conn,
    name: &str,
    table: &TableHandle,
    out_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), AppError> {
    loop {
        tokio::select! {
            line = conn.next() => {
                let Some(line) = line else { return Ok(()) };
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!(name, error = %err, "dropping connection");
                        return Ok(());
                    }
                };
                match parse_line(&line) {
                    Ok(Inbound::Exit) => {
                        conn.send("Goodbye.").await?;
                        return Ok(());
                    }
                    Ok(inbound) => table.line(name, inbound).await?,
                    Err(err) => conn.send(err.to_string()).await?,
                }
            }
            Some(out) = out_rx.recv() => conn.send(out).await?,
        }
    }
}
