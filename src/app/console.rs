use crate::domain::model::Position;
use crate::utils::error::{Result, RosterError};
use std::fmt::Display;
use std::io::{BufRead, Write};

const INVALID_INTEGER: &str = "Invalid integer. Please try again.";
const INVALID_POSITION: &str = "Invalid position. Please try again.";

/// 終端機輸入輸出，負責提示與重新輸入
pub struct Console<R, W> {
    input: R,
    output: W,
}

pub fn parse_int(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| RosterError::MalformedInput {
            input: input.to_string(),
        })
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// 顯示提示並讀取一行；輸入結束時回傳 `InputClosed`
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(RosterError::InputClosed);
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_int(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!("{}", e);
                    self.line(INVALID_INTEGER)?;
                }
            }
        }
    }

    /// 打數、安打數：必須是非負整數
    pub fn read_count(&mut self, prompt: &str) -> Result<u32> {
        loop {
            let value = self.read_int(prompt)?;
            match u32::try_from(value) {
                Ok(count) => return Ok(count),
                Err(_) => self.line(INVALID_INTEGER)?,
            }
        }
    }

    /// 負數一律視為 0，交給名單驗證範圍
    pub fn read_lineup_number(&mut self, prompt: &str) -> Result<usize> {
        let value = self.read_int(prompt)?;
        Ok(usize::try_from(value).unwrap_or(0))
    }

    pub fn read_position(&mut self, prompt: &str) -> Result<Position> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<Position>() {
                Ok(position) => return Ok(position),
                Err(e) => {
                    tracing::debug!("{}", e);
                    self.line(INVALID_POSITION)?;
                }
            }
        }
    }
}
