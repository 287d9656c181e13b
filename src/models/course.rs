use serde::{Deserialize, Serialize};

use crate::models::TimeBlock;

pub const DEFAULT_COLOR: &str = "#000000";

/// Display colours offered when creating a course, as `(value, label)`.
pub const PALETTE: [(&str, &str); 6] = [
    ("#2196f3", "Azul"),
    ("#4caf50", "Verde"),
    ("#f44336", "Vermelho"),
    ("#ff9800", "Laranja"),
    ("#9c27b0", "Roxo"),
    ("#607d8b", "Cinza"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    #[serde(alias = "codigo")]
    pub code: String,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default = "default_color", alias = "cor")]
    pub color: String,
    #[serde(default, alias = "aulas")]
    pub blocks: Vec<TimeBlock>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourseRequest {
    pub code: String,
    pub name: String,
    pub color: Option<String>,
    #[serde(default)]
    pub blocks: Vec<TimeBlock>,
    /// Compact time-code; when present its blocks are appended to `blocks`.
    pub sigaa_code: Option<String>,
}
