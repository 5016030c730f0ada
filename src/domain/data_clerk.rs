use crate::adapters::clock::SystemClock;
use crate::domain::ports::{Clock, FileLog};
use chrono::NaiveTime;
use tracing::info;

/// Processing is only allowed before this time of day.
pub const STOP_TIME: NaiveTime = match NaiveTime::from_hms_opt(20, 0, 0) {
    Some(t) => t,
    None => panic!("invalid stop time"),
};

/// Clears the file log when data is processed before [`STOP_TIME`].
pub struct DataClerk {
    file_log: Box<dyn FileLog>,
    clock: Box<dyn Clock>,
}

impl DataClerk {
    /// Clerk reading the local wall clock.
    pub fn new(file_log: Box<dyn FileLog>) -> Self {
        Self::with_clock(file_log, Box::new(SystemClock))
    }

    pub fn with_clock(file_log: Box<dyn FileLog>, clock: Box<dyn Clock>) -> Self {
        Self { file_log, clock }
    }

    /// Returns whether the log was cleared.
    pub fn process_data(&self) -> bool {
        let now = self.clock.now();
        if now < STOP_TIME {
            info!(%now, "ready to process the data");
            self.file_log.clear_the_log();
            true
        } else {
            false
        }
    }
}
