use crate::config::{BuildMode, Config};
use crate::utils::date::{self, WeekStart};
use chrono::NaiveDate;

/// Per-invocation view settings, built once from the config and the clock
/// and handed by reference to every loader and view builder.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub today: NaiveDate,
    pub week_start: WeekStart,
    pub mode: BuildMode,
    pub recent_limit: usize,
    pub use_colors: bool,
}

impl AppContext {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            today: date::today(),
            week_start: cfg.week_start,
            mode: cfg.build_mode,
            recent_limit: cfg.recent_limit,
            use_colors: cfg.use_colors(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self {
            today: date::today(),
            week_start: WeekStart::default(),
            mode: BuildMode::default(),
            recent_limit: 5,
            use_colors: false,
        }
    }
}
