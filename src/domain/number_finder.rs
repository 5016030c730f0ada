use crate::domain::ports::NumberFinder;

/// Default finder: single pass over the slice, keeping the highest value seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestNumberFinder;

impl HighestNumberFinder {
    pub fn new() -> Self {
        Self
    }
}

impl NumberFinder for HighestNumberFinder {
    fn find_highest(&self, numbers: &[i64]) -> Option<i64> {
        let (&first, rest) = numbers.split_first()?;
        let mut highest_so_far = first;
        for &val in rest {
            if val > highest_so_far {
                highest_so_far = val;
            }
        }
        Some(highest_so_far)
    }
}
