pub mod notify;
pub mod table;

pub use notify::{LobbyEvent, Notifier, TableEvent};
pub use table::{Command, Table, TableConfig, TableId};
