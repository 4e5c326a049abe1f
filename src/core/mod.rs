pub mod menu;
pub mod roster;

pub use crate::domain::model::{batting_average, LineupRow, Player, Position};
pub use crate::domain::ports::{ConfigProvider, RosterStore};
pub use crate::utils::error::Result;
