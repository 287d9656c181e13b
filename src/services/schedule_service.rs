use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::AppError;
use crate::grid::{self, Conflict, HourRow, Placement};
use crate::ids::fresh_id;
use crate::models::{
    Course, DEFAULT_COLOR, NewBlockRequest, NewCourseRequest, Schedule, TimeBlock, UpdateBlockRequest,
    Weekday,
};
use crate::store::ScheduleStore;
use crate::{codec, transfer, translator};

const DEFAULT_BLOCK_START: &str = "08:00";
const DEFAULT_BLOCK_END: &str = "10:00";

/// Owns the in-memory schedule. Every change is saved to the store before it
/// becomes visible; a failed save leaves the schedule as it was.
pub struct ScheduleService {
    schedule: Mutex<Schedule>,
    store: Arc<dyn ScheduleStore>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutView {
    pub days: Vec<DayColumn>,
    pub hours: Vec<HourRow>,
    pub placements: Vec<Placement>,
    pub skipped: Vec<String>,
    pub conflicts: Vec<Conflict>,
}

#[derive(Debug, Serialize)]
pub struct DayColumn {
    pub weekday: u8,
    pub label: &'static str,
    pub column: u8,
}

impl ScheduleService {
    /// Reads the saved schedule once; from here on the service is the only writer.
    pub async fn init(store: Arc<dyn ScheduleStore>) -> Result<Self, AppError> {
        let schedule = store.load().await?;
        info!("loaded schedule with {} courses", schedule.len());
        Ok(Self {
            schedule: Mutex::new(schedule),
            store,
        })
    }

    pub async fn list(&self) -> Schedule {
        self.schedule.lock().await.clone()
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.load().await.map(|_| ())
    }

    async fn commit<T>(
        &self,
        change: impl FnOnce(&mut Schedule) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut current = self.schedule.lock().await;
        let mut next = current.clone();
        let out = change(&mut next)?;
        self.store.save(&next).await?;
        *current = next;
        Ok(out)
    }

    pub async fn add_course(&self, req: NewCourseRequest) -> Result<Course, AppError> {
        let id = fresh_id();

        let mut blocks = Vec::with_capacity(req.blocks.len());
        for mut block in req.blocks {
            block.validate()?;
            block.id = fresh_id();
            block.course_id = id.clone();
            blocks.push(block);
        }
        if let Some(code) = req.sigaa_code.as_deref() {
            blocks.extend(translator::translate(code, &id));
        }

        let course = Course {
            id,
            code: req.code,
            name: req.name,
            color: req.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            blocks,
        };

        let added = course.clone();
        self.commit(move |schedule| {
            schedule.push(course);
            Ok(())
        })
        .await?;

        info!("added course {} with {} blocks", added.id, added.blocks.len());
        Ok(added)
    }

    pub async fn remove_course(&self, course_id: &str) -> Result<(), AppError> {
        self.commit(|schedule| {
            let before = schedule.len();
            schedule.retain(|c| c.id != course_id);
            if schedule.len() == before {
                return Err(AppError::NotFound);
            }
            Ok(())
        })
        .await
    }

    pub async fn add_block(&self, course_id: &str, req: NewBlockRequest) -> Result<TimeBlock, AppError> {
        let block = TimeBlock {
            id: fresh_id(),
            course_id: course_id.to_string(),
            weekday: req.weekday.unwrap_or(Weekday::Monday.index()),
            start_time: req.start_time.unwrap_or_else(|| DEFAULT_BLOCK_START.to_string()),
            end_time: req.end_time.unwrap_or_else(|| DEFAULT_BLOCK_END.to_string()),
        };
        block.validate()?;

        self.commit(|schedule| {
            let course = find_course(schedule, course_id)?;
            course.blocks.push(block.clone());
            Ok(block)
        })
        .await
    }

    pub async fn update_block(
        &self,
        course_id: &str,
        block_id: &str,
        req: UpdateBlockRequest,
    ) -> Result<TimeBlock, AppError> {
        self.commit(|schedule| {
            let course = find_course(schedule, course_id)?;
            let block = course
                .blocks
                .iter_mut()
                .find(|b| b.id == block_id)
                .ok_or(AppError::NotFound)?;

            let mut updated = block.clone();
            if let Some(weekday) = req.weekday {
                updated.weekday = weekday;
            }
            if let Some(start) = req.start_time {
                updated.start_time = start;
            }
            if let Some(end) = req.end_time {
                updated.end_time = end;
            }
            updated.validate()?;

            *block = updated.clone();
            Ok(updated)
        })
        .await
    }

    pub async fn remove_block(&self, course_id: &str, block_id: &str) -> Result<(), AppError> {
        self.commit(|schedule| {
            let course = find_course(schedule, course_id)?;
            let before = course.blocks.len();
            course.blocks.retain(|b| b.id != block_id);
            if course.blocks.len() == before {
                return Err(AppError::NotFound);
            }
            Ok(())
        })
        .await
    }

    /// Replaces the whole schedule with the contents of an export file.
    /// A file that does not parse leaves the current schedule untouched.
    pub async fn import(&self, text: &str) -> Result<usize, AppError> {
        let imported = transfer::import_json(text).map_err(|e| {
            warn!("rejected import: {}", e);
            e
        })?;
        let count = imported.len();
        self.commit(move |schedule| {
            *schedule = imported;
            Ok(())
        })
        .await?;

        info!("imported {} courses", count);
        Ok(count)
    }

    pub async fn export(&self) -> Result<String, AppError> {
        let schedule = self.schedule.lock().await;
        Ok(transfer::export_json(&schedule)?)
    }

    pub async fn clear(&self) -> Result<(), AppError> {
        let mut current = self.schedule.lock().await;
        self.store.clear().await?;
        current.clear();
        info!("cleared saved schedule");
        Ok(())
    }

    pub async fn share_token(&self) -> Result<String, AppError> {
        let schedule = self.schedule.lock().await;
        Ok(codec::encode(&schedule)?)
    }

    pub async fn layout(&self) -> LayoutView {
        let schedule = self.schedule.lock().await;
        layout_view(&schedule)
    }
}

pub fn layout_view(schedule: &[Course]) -> LayoutView {
    let layout = grid::layout(schedule);
    LayoutView {
        days: Weekday::ALL
            .iter()
            .map(|day| DayColumn {
                weekday: day.index(),
                label: day.label(),
                column: day.index() + 2,
            })
            .collect(),
        hours: grid::hour_rows(),
        placements: layout.placements,
        skipped: layout.skipped,
        conflicts: grid::conflicts(schedule),
    }
}

fn find_course<'a>(schedule: &'a mut Schedule, course_id: &str) -> Result<&'a mut Course, AppError> {
    schedule
        .iter_mut()
        .find(|c| c.id == course_id)
        .ok_or(AppError::NotFound)
}
