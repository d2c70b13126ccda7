pub mod pipeline;
pub mod track_summary;
pub mod transformer;

pub use pipeline::CleaningPipeline;
pub use track_summary::{BirdSummary, TrackSummary};
pub use transformer::Transformer;
