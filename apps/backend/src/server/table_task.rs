//! One task per table: the only owner of a [`Table`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, trace, warn};

use super::registry::TableRegistry;
use crate::domain::{Audience, SeatId};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::protocol::{hand_grid, render_event, Inbound, Viewer};
use crate::services::{Table, TableEvent, TableId};

/// Buffered messages per table before senders wait.
const TABLE_QUEUE: usize = 64;

/// Lines bound for one connection.
pub type Outbox = mpsc::UnboundedSender<String>;

pub enum TableMsg {
    Join {
        name: String,
        outbox: Outbox,
        reply: oneshot::Sender<Result<SeatId, DomainError>>,
    },
    Line {
        name: String,
        inbound: Inbound,
    },
    Leave {
        name: String,
    },
}

/// Cheap, cloneable address of a running table task.
#[derive(Clone)]
pub struct TableHandle {
    id: TableId,
    tx: mpsc::Sender<TableMsg>,
    open: Arc<AtomicBool>,
}

impl TableHandle {
    pub fn id(&self) -> TableId {
        self.id
    }

    /// In the lobby with a free seat, as of the last processed message.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    async fn send(&self, msg: TableMsg) -> Result<(), AppError> {
        self.tx
            .send(msg)
            .await
            .map_err(|_| AppError::internal(format!("table {} has stopped", self.id)))
    }

    pub async fn join(&self, name: &str, outbox: Outbox) -> Result<SeatId, AppError> {
        let (reply, rx) = oneshot::channel();
        self.send(TableMsg::Join {
            name: name.to_string(),
            outbox,
            reply,
        })
        .await?;
        let seat = rx
            .await
            .map_err(|_| AppError::internal(format!("table {} dropped a join", self.id)))??;
        Ok(seat)
    }

    pub async fn line(&self, name: &str, inbound: Inbound) -> Result<(), AppError> {
        self.send(TableMsg::Line {
            name: name.to_string(),
            inbound,
        })
        .await
    }

    pub async fn leave(&self, name: &str) -> Result<(), AppError> {
        self.send(TableMsg::Leave {
            name: name.to_string(),
        })
        .await
    }
}

struct Member {
    name: String,
    outbox: Outbox,
}

struct TableTask {
    table: Table,
    members: Vec<Member>,
    open: Arc<AtomicBool>,
}

/// Start the task for `table` and return its handle.
pub fn spawn_table(table: Table, registry: Arc<TableRegistry>) -> TableHandle {
    let (tx, rx) = mpsc::channel(TABLE_QUEUE);
    let open = Arc::new(AtomicBool::new(table.is_open()));
    let handle = TableHandle {
        id: table.id(),
        tx,
        open: open.clone(),
    };
    let task = TableTask {
        table,
        members: Vec::new(),
        open,
    };
    tokio::spawn(task.run(rx, registry));
    handle
}

impl TableTask {
    async fn run(mut self, mut rx: mpsc::Receiver<TableMsg>, registry: Arc<TableRegistry>) {
        let id = self.table.id();
        info!(table_id = id, "table opened");
        while let Some(msg) = rx.recv().await {
            let mut outbox: Vec<(Audience, TableEvent)> = Vec::new();
            match msg {
                TableMsg::Join {
                    name,
                    outbox: out,
                    reply,
                } => {
                    let result = self.table.join(&name, &mut outbox);
                    if result.is_ok() {
                        self.members.push(Member { name, outbox: out });
                    }
                    let _ = reply.send(result);
                }
                TableMsg::Line { name, inbound } => self.on_line(&name, inbound, &mut outbox),
                TableMsg::Leave { name } => {
                    if let Err(err) = self.table.leave(&name, &mut outbox) {
                        debug!(table_id = id, name, error = %err, "leave ignored");
                    }
                    self.members.retain(|m| m.name != name);
                }
            }
            self.deliver(outbox);
            self.open.store(self.table.is_open(), Ordering::Release);

            if self.members.is_empty() {
                break;
            }
        }
        self.open.store(false, Ordering::Release);
        registry.remove(id);
        info!(table_id = id, "table closed");
    }

    fn on_line(&mut self, name: &str, inbound: Inbound, outbox: &mut Vec<(Audience, TableEvent)>) {
        let Some(seat) = self.table.seat_of(name) else {
            warn!(table_id = self.table.id(), name, "line from a player not seated here");
            return;
        };
        match inbound {
            Inbound::Start => {
                if let Err(err) = self.table.start(name, outbox) {
                    self.send_to(name, vec![err.to_string()]);
                }
            }
            Inbound::Hand => {
                let lines = match self.table.hand_of(seat) {
                    Some(cards) => hand_grid(&cards).to_vec(),
                    None => vec!["No match is running.".to_string()],
                };
                self.send_to(name, lines);
            }
            Inbound::Exit => {}
            other => {
                if let Some(command) = other.into_command() {
                    // Rejections reach the seat through the outbox.
                    let _ = self.table.handle(seat, command, outbox);
                }
            }
        }
    }

    fn send_to(&self, name: &str, lines: Vec<String>) {
        if let Some(member) = self.members.iter().find(|m| m.name == name) {
            for line in lines {
                let _ = member.outbox.send(line);
            }
        }
    }

    /// Render each event for every seat in its audience.
    fn deliver(&self, events: Vec<(Audience, TableEvent)>) {
        let names = self.table.players();
        for (audience, event) in events {
            trace!(
                table_id = self.table.id(),
                event = %serde_json::to_string(&event).unwrap_or_default(),
                "table event"
            );
            for (seat, name) in names.iter().enumerate() {
                if !audience.includes(seat) {
                    continue;
                }
                let hand = self.table.hand_of(seat).unwrap_or_default();
                let viewer = Viewer {
                    seat,
                    names,
                    hand: &hand,
                };
                self.send_to(name, render_event(&event, &viewer));
            }
        }
    }
}
