//! Human-readable export file and its import counterpart.
//!
//! This is plain pretty-printed JSON, not the compressed share token; the
//! two formats are not interchangeable.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{BlockShapeError, Course};

pub const EXPORT_FILE_NAME: &str = "grade-horaria.json";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file is not a schedule: {0}")]
    Json(#[from] serde_json::Error),

    #[error("course {course} has an invalid block: {source}")]
    Block {
        course: String,
        #[source]
        source: BlockShapeError,
    },

    #[error("course id {0} appears more than once")]
    DuplicateCourse(String),

    #[error("block id {0} appears more than once")]
    DuplicateBlock(String),
}

pub fn export_json(schedule: &[Course]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(schedule)
}

/// Parses an export file. Nothing is applied here; callers replace their
/// schedule only on `Ok`.
pub fn import_json(text: &str) -> Result<Vec<Course>, ImportError> {
    let courses: Vec<Course> = serde_json::from_str(text.trim_start_matches('\u{feff}'))?;

    let mut course_ids = HashSet::new();
    let mut block_ids = HashSet::new();
    for course in &courses {
        if !course_ids.insert(course.id.as_str()) {
            return Err(ImportError::DuplicateCourse(course.id.clone()));
        }
        for block in &course.blocks {
            if !block_ids.insert(block.id.as_str()) {
                return Err(ImportError::DuplicateBlock(block.id.clone()));
            }
            block.validate().map_err(|source| ImportError::Block {
                course: course.id.clone(),
                source,
            })?;
        }
    }
    Ok(courses)
}
