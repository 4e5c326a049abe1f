use crate::domain::model::{LineupRow, Player, Position};
use crate::utils::error::Result;
use crate::utils::validation::{validate_lineup_number, validate_stats};

/// 持有記憶體中的打序，所有編輯操作都經過這裡
#[derive(Debug, Clone, Default)]
pub struct RosterService {
    players: Vec<Player>,
}

impl RosterService {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// 依目前順序產生打序列表，每次呼叫都從頭開始
    pub fn lineup(&self) -> impl Iterator<Item = LineupRow<'_>> + '_ {
        self.players
            .iter()
            .enumerate()
            .map(|(idx, player)| LineupRow::new(idx + 1, player))
    }

    pub fn get(&self, number: usize) -> Result<&Player> {
        let idx = validate_lineup_number(number, self.players.len())?;
        Ok(&self.players[idx])
    }

    pub fn add(&mut self, name: &str, position: &str, at_bats: u32, hits: u32) -> Result<String> {
        let position: Position = position.parse()?;
        validate_stats(at_bats, hits)?;

        let player = Player::new(name.trim(), position, at_bats, hits);
        tracing::debug!(name = %player.name, position = %position, at_bats, hits, "adding player");
        let name = player.name.clone();
        self.players.push(player);
        Ok(name)
    }

    pub fn remove(&mut self, number: usize) -> Result<Player> {
        let idx = validate_lineup_number(number, self.players.len())?;
        let removed = self.players.remove(idx);
        tracing::debug!(name = %removed.name, number, "removed player");
        Ok(removed)
    }

    /// 抽出 `current` 的球員後，插入到縮短後名單的 `new` 位置
    pub fn move_player(&mut self, current: usize, new: usize) -> Result<String> {
        let len = self.players.len();
        let from = validate_lineup_number(current, len)?;
        let to = validate_lineup_number(new, len)?;

        let player = self.players.remove(from);
        let name = player.name.clone();
        self.players.insert(to, player);
        tracing::debug!(name = %name, current, new, "moved player");
        Ok(name)
    }

    pub fn edit_position(&mut self, number: usize, position: &str) -> Result<String> {
        let idx = validate_lineup_number(number, self.players.len())?;
        let position: Position = position.parse()?;

        let player = &mut self.players[idx];
        player.position = position.code().to_string();
        tracing::debug!(name = %player.name, position = %position, "updated position");
        Ok(player.name.clone())
    }

    pub fn edit_stats(&mut self, number: usize, at_bats: u32, hits: u32) -> Result<String> {
        let idx = validate_lineup_number(number, self.players.len())?;
        validate_stats(at_bats, hits)?;

        let player = &mut self.players[idx];
        player.at_bats = i64::from(at_bats);
        player.hits = i64::from(hits);
        tracing::debug!(name = %player.name, at_bats, hits, "updated stats");
        Ok(player.name.clone())
    }
}
