//! Translation of compact institutional time-codes ("código SIGAA") into
//! time-blocks.
//!
//! A code is a whitespace-separated list of tokens shaped
//! `<weekday><shift><slots>`, e.g. `"2N1 4N123"`. Parsing is best-effort:
//! anything that cannot be interpreted is dropped so that partially typed
//! input still yields the blocks it does describe.

use crate::ids::fresh_id;
use crate::models::TimeBlock;

/// Morning, afternoon and evening ("turno").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

/// `(start, end)` of one numbered slot.
pub type Slot = (&'static str, &'static str);

const MORNING: [Slot; 6] = [
    ("06:00", "06:50"),
    ("07:00", "07:50"),
    ("08:00", "08:50"),
    ("09:00", "09:50"),
    ("10:00", "10:50"),
    ("11:00", "11:50"),
];

const AFTERNOON: [Slot; 6] = [
    ("12:00", "12:50"),
    ("13:00", "13:50"),
    ("14:00", "14:50"),
    ("15:00", "15:50"),
    ("16:00", "16:50"),
    ("17:00", "17:50"),
];

const EVENING: [Slot; 6] = [
    ("18:00", "18:50"),
    ("18:50", "19:40"),
    ("19:40", "20:30"),
    ("20:30", "21:20"),
    ("21:20", "22:10"),
    ("22:10", "23:00"),
];

impl Shift {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'M' => Some(Shift::Morning),
            'T' => Some(Shift::Afternoon),
            'N' => Some(Shift::Evening),
            _ => None,
        }
    }

    pub fn slots(self) -> &'static [Slot; 6] {
        match self {
            Shift::Morning => &MORNING,
            Shift::Afternoon => &AFTERNOON,
            Shift::Evening => &EVENING,
        }
    }

    /// Slots are numbered from 1.
    pub fn slot(self, digit: char) -> Option<Slot> {
        let n = digit.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| self.slots().get(i)).copied()
    }
}

/// `'2'` is Monday (index 1) through `'7'` Saturday (index 6).
pub fn weekday_from_char(c: char) -> Option<u8> {
    match c {
        '2'..='7' => c.to_digit(10).map(|d| d as u8 - 1),
        _ => None,
    }
}

pub fn translate(code: &str, course_id: &str) -> Vec<TimeBlock> {
    code.split_whitespace()
        .flat_map(|token| translate_token(token, course_id))
        .collect()
}

fn translate_token(token: &str, course_id: &str) -> Vec<TimeBlock> {
    let mut chars = token.chars();
    let weekday = chars.next().and_then(weekday_from_char);
    let shift = chars.next().and_then(Shift::from_char);

    let (Some(weekday), Some(shift)) = (weekday, shift) else {
        return Vec::new();
    };

    chars
        .filter_map(|digit| shift.slot(digit))
        .map(|(start, end)| TimeBlock {
            id: fresh_id(),
            course_id: course_id.to_string(),
            weekday,
            start_time: start.to_string(),
            end_time: end.to_string(),
        })
        .collect()
}
