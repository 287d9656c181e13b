pub mod course;
pub mod time_block;
pub mod weekday;

pub use course::{Course, NewCourseRequest, DEFAULT_COLOR, PALETTE};
pub use time_block::{BlockShapeError, NewBlockRequest, TimeBlock, UpdateBlockRequest};
pub use weekday::Weekday;

/// The unit of persistence, export and sharing.
pub type Schedule = Vec<Course>;
