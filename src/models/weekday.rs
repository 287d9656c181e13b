use serde::{Deserialize, Serialize};

/// Day of the week as stored in a [`TimeBlock`](crate::models::TimeBlock).
///
/// Indices are Sunday-based: `0 = Sunday` through `6 = Saturday`. The
/// translator's weekday characters `'2'..='7'` land on Monday..Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Sunday => "Domingo",
            Weekday::Monday => "Segunda-feira",
            Weekday::Tuesday => "Terça-feira",
            Weekday::Wednesday => "Quarta-feira",
            Weekday::Thursday => "Quinta-feira",
            Weekday::Friday => "Sexta-feira",
            Weekday::Saturday => "Sábado",
        }
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.index()
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Weekday::from_index(value).ok_or_else(|| format!("weekday {} is not in 0..=6", value))
    }
}
