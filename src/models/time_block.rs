use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Weekday;

/// One weekly recurring interval of a course ("aula").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    pub id: String,
    #[serde(default, alias = "materiaId")]
    pub course_id: String,
    #[serde(alias = "diaSemana")]
    pub weekday: u8,
    #[serde(alias = "horarioInicio")]
    pub start_time: String,
    #[serde(alias = "horarioFim")]
    pub end_time: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockShapeError {
    #[error("weekday {0} is not in 0..=6")]
    Weekday(u8),

    #[error("invalid clock time: {0:?}")]
    Time(String),

    #[error("start {start} is not before end {end}")]
    Order { start: String, end: String },
}

impl TimeBlock {
    /// Shape check applied to user-entered and imported blocks.
    pub fn validate(&self) -> Result<(), BlockShapeError> {
        if Weekday::from_index(self.weekday).is_none() {
            return Err(BlockShapeError::Weekday(self.weekday));
        }
        let start = parse_clock(&self.start_time)?;
        let end = parse_clock(&self.end_time)?;
        if start >= end {
            return Err(BlockShapeError::Order {
                start: self.start_time.clone(),
                end: self.end_time.clone(),
            });
        }
        Ok(())
    }
}

/// Times are stored zero-padded so that string order matches clock order.
fn parse_clock(value: &str) -> Result<NaiveTime, BlockShapeError> {
    if !is_zero_padded_clock(value) {
        return Err(BlockShapeError::Time(value.to_string()));
    }
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| BlockShapeError::Time(value.to_string()))
}

/// Exactly `DD:DD`; chrono alone would accept space-padded fields.
fn is_zero_padded_clock(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlockRequest {
    pub weekday: Option<u8>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlockRequest {
    pub weekday: Option<u8>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
