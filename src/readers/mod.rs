pub mod track_reader;

pub use track_reader::TrackReader;
