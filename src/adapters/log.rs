use crate::domain::ports::FileLog;
use tracing::info;

/// File log that reports clears through `tracing` instead of touching files
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFileLog;

impl FileLog for TracingFileLog {
    fn clear_the_log(&self) {
        info!("log cleared");
    }
}
