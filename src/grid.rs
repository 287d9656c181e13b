//! Placement of time-blocks on the weekly grid.
//!
//! The timeline runs from 06:00 to 23:00 in 5-minute rows (12 per hour,
//! 204 in total). Grid row 1 holds the day headers and grid column 1 the
//! hour labels, so a block at position `p` on weekday `d` lands on row
//! `p + 2` and column `d + 2`.

use serde::Serialize;
use thiserror::Error;

use crate::models::{Course, TimeBlock, Weekday};

pub const FIRST_HOUR: u16 = 6;
pub const LAST_HOUR: u16 = 23;
pub const ROWS_PER_HOUR: u16 = 12;
pub const TOTAL_ROWS: u16 = (LAST_HOUR - FIRST_HOUR) * ROWS_PER_HOUR;

const HEADER_ROWS: u16 = 1;
const GUTTER_COLUMNS: u8 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("malformed clock time: {0:?}")]
    Malformed(String),

    #[error("clock time {0} is outside 06:00-23:00")]
    OutOfRange(String),

    #[error("block {0} has no positive duration")]
    EmptySpan(String),

    #[error("weekday {0} has no column")]
    Weekday(u8),
}

/// Row index of a clock time: `(hours - 6) * 12 + minutes / 5`.
pub fn position_of(time: &str) -> Result<u16, GridError> {
    let malformed = || GridError::Malformed(time.to_string());

    let (hours, minutes) = time.split_once(':').ok_or_else(malformed)?;
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !digits(hours) || !digits(minutes) {
        return Err(malformed());
    }
    let hours: u16 = hours.parse().map_err(|_| malformed())?;
    let minutes: u16 = minutes.parse().map_err(|_| malformed())?;
    if minutes >= 60 {
        return Err(malformed());
    }

    let in_range = (FIRST_HOUR..LAST_HOUR).contains(&hours) || (hours == LAST_HOUR && minutes == 0);
    if !in_range {
        return Err(GridError::OutOfRange(time.to_string()));
    }

    Ok((hours - FIRST_HOUR) * ROWS_PER_HOUR + minutes / 5)
}

/// Half-open row interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowSpan {
    pub start: u16,
    pub end: u16,
}

impl RowSpan {
    pub fn len(&self) -> u16 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn overlaps(&self, other: &RowSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

pub fn span_of(block: &TimeBlock) -> Result<RowSpan, GridError> {
    let start = position_of(&block.start_time)?;
    let end = position_of(&block.end_time)?;
    if end <= start {
        return Err(GridError::EmptySpan(block.id.clone()));
    }
    Ok(RowSpan { start, end })
}

/// Render coordinates of one block, 1-based like CSS grid lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub course_id: String,
    pub block_id: String,
    pub column: u8,
    pub row: u16,
    pub row_span: u16,
    pub code: String,
    pub name: String,
    pub color: String,
    pub time_range: String,
}

pub fn place(course: &Course, block: &TimeBlock) -> Result<Placement, GridError> {
    let day = Weekday::from_index(block.weekday).ok_or(GridError::Weekday(block.weekday))?;
    let span = span_of(block)?;
    Ok(Placement {
        course_id: course.id.clone(),
        block_id: block.id.clone(),
        column: day.index() + GUTTER_COLUMNS + 1,
        row: span.start + HEADER_ROWS + 1,
        row_span: span.len(),
        code: course.code.clone(),
        name: course.name.clone(),
        color: course.color.clone(),
        time_range: format!("{} - {}", block.start_time, block.end_time),
    })
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    pub placements: Vec<Placement>,
    /// Ids of blocks that cannot be drawn.
    pub skipped: Vec<String>,
}

pub fn layout(schedule: &[Course]) -> Layout {
    let mut out = Layout::default();
    for course in schedule {
        for block in &course.blocks {
            match place(course, block) {
                Ok(placement) => out.placements.push(placement),
                Err(e) => {
                    tracing::debug!("not rendering block: {}", e);
                    out.skipped.push(block.id.clone());
                }
            }
        }
    }
    out
}

/// Two blocks sharing a weekday whose rows intersect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub weekday: u8,
    pub first: String,
    pub second: String,
}

pub fn conflicts(schedule: &[Course]) -> Vec<Conflict> {
    let spans: Vec<(&TimeBlock, RowSpan)> = schedule
        .iter()
        .flat_map(|c| c.blocks.iter())
        .filter_map(|b| span_of(b).ok().map(|s| (b, s)))
        .collect();

    let mut found = Vec::new();
    for (i, (a, sa)) in spans.iter().enumerate() {
        for (b, sb) in &spans[i + 1..] {
            if a.weekday == b.weekday && sa.overlaps(sb) {
                found.push(Conflict {
                    weekday: a.weekday,
                    first: a.id.clone(),
                    second: b.id.clone(),
                });
            }
        }
    }
    found
}

/// Hour label in the gutter and the grid rows it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourRow {
    pub label: String,
    pub row: u16,
    pub span: u16,
}

pub fn hour_rows() -> Vec<HourRow> {
    (FIRST_HOUR..LAST_HOUR)
        .map(|hour| HourRow {
            label: format!("{}:00", hour),
            row: (hour - FIRST_HOUR) * ROWS_PER_HOUR + HEADER_ROWS + 1,
            span: ROWS_PER_HOUR,
        })
        .collect()
}
