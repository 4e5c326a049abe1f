pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::CsvRosterStore;
pub use app::{Console, Session};
pub use config::{AppConfig, CliConfig};
pub use crate::core::{menu::MenuOption, roster::RosterService};
pub use domain::model::{batting_average, LineupRow, Player, Position};
pub use domain::ports::RosterStore;
pub use utils::error::{Result, RosterError};
