pub mod schedule_service;

pub use schedule_service::{DayColumn, LayoutView, ScheduleService, layout_view};
