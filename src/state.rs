use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::ScheduleService;

#[derive(Clone)]
pub struct AppState {
    pub schedule: Arc<ScheduleService>,
    pub config: Arc<AppConfig>,
}
