use crate::domain::ports::DataSource;
use std::path::Path;

/// Counts characters across all lines produced by a [`DataSource`].
pub struct BasicDataProcessor {
    data_source: Box<dyn DataSource>,
}

impl BasicDataProcessor {
    pub fn new(data_source: Box<dyn DataSource>) -> Self {
        Self { data_source }
    }

    pub fn load_data(&self, fname: &Path) -> usize {
        self.data_source
            .load_data(fname)
            .iter()
            .map(|line| line.chars().count())
            .sum()
    }
}
