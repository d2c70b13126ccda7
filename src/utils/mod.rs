pub mod constants;
pub mod progress;
pub mod timestamp;

pub use constants::*;
pub use progress::ProgressReporter;
pub use timestamp::parse_timestamp;
