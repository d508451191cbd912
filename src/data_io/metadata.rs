use chrono::{DateTime, Utc};

/// Provenance note written to the `history` global attribute
pub fn default_history() -> String {
    format!("Created by: {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Global attributes of a forcing file
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadata {
    pub description: String,
    pub contact: String,
    pub history: String,
    pub creation_date: DateTime<Utc>,
}

impl FileMetadata {
    /// Metadata stamped with the current time
    pub fn new(description: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            contact: contact.into(),
            history: default_history(),
            creation_date: Utc::now(),
        }
    }

    pub fn creation_date_string(&self) -> String {
        self.creation_date.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }

    /// (name, value) pairs in the order they are written
    pub fn attributes(&self) -> [(&'static str, String); 4] {
        [
            ("description", self.description.clone()),
            ("history", self.history.clone()),
            ("creation_date", self.creation_date_string()),
            ("contact", self.contact.clone()),
        ]
    }
}

/// Single site placed on a 1x1 grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GridLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
