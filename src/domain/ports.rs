use anyhow::Result;
use chrono::NaiveTime;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Highest-value capability consumed by the topic manager
#[cfg_attr(test, automock)]
pub trait NumberFinder: Send + Sync {
    /// Returns the largest value, or `None` for an empty slice.
    fn find_highest(&self, numbers: &[i64]) -> Option<i64>;
}

/// Line writer port (implemented by Infrastructure)
#[cfg_attr(test, automock)]
pub trait LineWriter: Send + Sync {
    fn write_line(&self, text: &str, filename: &Path) -> Result<()>;
}

/// Line-oriented data source port
#[cfg_attr(test, automock)]
pub trait DataSource: Send + Sync {
    fn load_data(&self, fname: &Path) -> Vec<String>;
}

/// Log maintenance port used by the data clerk
#[cfg_attr(test, automock)]
pub trait FileLog: Send + Sync {
    fn clear_the_log(&self);
}

/// Wall-clock port
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}
