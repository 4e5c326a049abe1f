use crate::domain::model::Player;
use crate::domain::ports::RosterStore;
use crate::utils::error::Result;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 以逗號分隔檔儲存名單，欄位順序：name, position, at_bats, hits (無標題列)
#[derive(Debug, Clone)]
pub struct CsvRosterStore {
    path: PathBuf,
}

impl CsvRosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_row(record: &StringRecord) -> Option<Player> {
        if record.len() < 4 {
            return None;
        }

        let at_bats = record[2].trim().parse::<i64>().ok()?;
        let hits = record[3].trim().parse::<i64>().ok()?;

        Some(Player {
            name: record[0].trim().to_string(),
            position: record[1].trim().to_uppercase(),
            at_bats,
            hits,
        })
    }
}

impl RosterStore for CsvRosterStore {
    fn load(&self) -> Result<Vec<Player>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("📁 Roster file {} not found, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut players = Vec::new();
        for (line, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    tracing::debug!(line = line + 1, "skipping unreadable row: {}", e);
                    continue;
                }
            };

            match Self::parse_row(&record) {
                Some(player) => {
                    if player.hits > player.at_bats {
                        tracing::warn!(
                            name = %player.name,
                            "row {} has more hits than at bats",
                            line + 1
                        );
                    }
                    players.push(player);
                }
                None => tracing::debug!(line = line + 1, "skipping malformed row: {:?}", record),
            }
        }

        tracing::debug!("Loaded {} players from {}", players.len(), self.path.display());
        Ok(players)
    }

    fn save(&self, players: &[Player]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        for player in players {
            writer.serialize(player)?;
        }
        writer.flush()?;

        tracing::debug!("Saved {} players to {}", players.len(), self.path.display());
        Ok(())
    }
}
