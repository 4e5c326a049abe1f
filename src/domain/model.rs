use crate::utils::error::RosterError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 守備位置代碼 (封閉集合)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    LeftField,
    CenterField,
    RightField,
    Pitcher,
}

impl Position {
    pub const ALL: [Position; 9] = [
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
        Position::LeftField,
        Position::CenterField,
        Position::RightField,
        Position::Pitcher,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::Shortstop => "SS",
            Position::LeftField => "LF",
            Position::CenterField => "CF",
            Position::RightField => "RF",
            Position::Pitcher => "P",
        }
    }
}

impl FromStr for Position {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Position::ALL
            .into_iter()
            .find(|p| p.code() == normalized)
            .ok_or_else(|| RosterError::InvalidPosition {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 球員紀錄。`position` 與數字欄位保留讀檔時的原值，舊資料可能不符規則
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub position: String,
    pub at_bats: i64,
    pub hits: i64,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Position, at_bats: u32, hits: u32) -> Self {
        Self {
            name: name.into(),
            position: position.code().to_string(),
            at_bats: i64::from(at_bats),
            hits: i64::from(hits),
        }
    }

    pub fn average(&self) -> f64 {
        batting_average(self.at_bats, self.hits)
    }

    /// 顯示用：只取名字的第一個 token
    pub fn display_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

/// 打擊率，打數為 0 時定義為 0.0
pub fn batting_average(at_bats: i64, hits: i64) -> f64 {
    if at_bats == 0 {
        return 0.0;
    }
    hits as f64 / at_bats as f64
}

/// 打序表中的一列
#[derive(Debug, Clone, PartialEq)]
pub struct LineupRow<'a> {
    pub number: usize,
    pub name: &'a str,
    pub position: &'a str,
    pub at_bats: i64,
    pub hits: i64,
    pub average: f64,
}

impl<'a> LineupRow<'a> {
    pub fn new(number: usize, player: &'a Player) -> Self {
        Self {
            number,
            name: player.display_name(),
            position: &player.position,
            at_bats: player.at_bats,
            hits: player.hits,
            average: player.average(),
        }
    }
}

impl fmt::Display for LineupRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<2} {:<20} {:<5} {:>6} {:>6} {:>7.3}",
            self.number, self.name, self.position, self.at_bats, self.hits, self.average
        )
    }
}
