use uuid::Uuid;

/// Fresh identifier for a course or time-block. Random v4, never reused.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}
