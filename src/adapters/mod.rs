pub mod clock;
pub mod fs;
pub mod log;
