//! Column contract of a cleaned tracking file.

pub const ID: &str = "id";
pub const TIMESTAMP: &str = "timestamp";
pub const LONGITUDE: &str = "longitude";
pub const LATITUDE: &str = "latitude";
pub const SPEED: &str = "speed";
pub const ALTITUDE: &str = "altitude";
pub const BIRD_ID: &str = "birdId";
pub const BIRD_NAME: &str = "birdName";

/// Fixed rename, projection and completeness tables applied to an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackSchema {
    /// Source export column -> canonical column.
    pub rename_map: &'static [(&'static str, &'static str)],
    /// Canonical output columns, in output order.
    pub output_columns: &'static [&'static str],
    /// Canonical columns that must hold a value for a row to be kept.
    pub required_columns: &'static [&'static str],
}

impl TrackSchema {
    /// Movebank study export layout.
    pub const MOVEBANK: TrackSchema = TrackSchema {
        rename_map: &[
            ("individual-local-identifier", BIRD_ID),
            ("individual-taxon-canonical-name", BIRD_NAME),
            ("ground-speed", SPEED),
            ("event-id", ID),
            ("timestamp", TIMESTAMP),
            ("location-long", LONGITUDE),
            ("location-lat", LATITUDE),
            ("height-above-ellipsoid", ALTITUDE),
        ],
        output_columns: &[ID, TIMESTAMP, LONGITUDE, LATITUDE, SPEED, ALTITUDE, BIRD_ID, BIRD_NAME],
        required_columns: &[TIMESTAMP, LONGITUDE, LATITUDE, BIRD_ID],
    };

    pub fn is_required(&self, column: &str) -> bool {
        self.required_columns.contains(&column)
    }

    /// Export column that is renamed to `canonical`, if any.
    pub fn source_name(&self, canonical: &str) -> Option<&'static str> {
        self.rename_map
            .iter()
            .find(|(_, to)| *to == canonical)
            .map(|(from, _)| *from)
    }

    pub fn output_header(&self) -> String {
        self.output_columns.join(",")
    }
}

impl Default for TrackSchema {
    fn default() -> Self {
        Self::MOVEBANK
    }
}
