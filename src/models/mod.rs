pub mod dataset;
pub mod schema;
pub mod value;

pub use dataset::Dataset;
pub use schema::TrackSchema;
pub use value::Value;
