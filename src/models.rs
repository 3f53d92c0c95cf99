// src/models.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::Utc;

/// Minimum password length accepted by the interactive surfaces.
pub const MIN_LENGTH: usize = 4;
/// Maximum password length accepted by the interactive surfaces.
pub const MAX_LENGTH: usize = 50;

/// Label stored when the user leaves the purpose blank.
pub const DEFAULT_PURPOSE: &str = "(unspecified)";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    pub length: usize,
    pub use_lower: bool,
    pub use_upper: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        PasswordConfig {
            length: 16,
            use_lower: true,
            use_upper: true,
            use_digits: true,
            use_symbols: true,
        }
    }
}

impl PasswordConfig {
    /// Number of character classes enabled in this configuration.
    pub fn enabled_class_count(&self) -> usize {
        [self.use_lower, self.use_upper, self.use_digits, self.use_symbols]
            .iter()
            .filter(|&&enabled| enabled)
            .count()
    }
}

/// A generated password together with the metadata needed to display and
/// manage it later. `id` is the lookup key for update/delete; `created_at`
/// is display metadata in sortable second-precision RFC 3339.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRecord {
    // Files written before surrogate ids existed carry no id field;
    // serde(default) lets them still load.
    #[serde(default)]
    pub id: String,
    pub password: String,
    pub purpose: String,
    pub config: PasswordConfig,
    pub created_at: String,
}

impl GeneratedRecord {
    pub fn new(password: String, purpose: &str, config: PasswordConfig) -> Self {
        let purpose = purpose.trim();
        Self {
            id: Uuid::new_v4().to_string(),
            password,
            purpose: if purpose.is_empty() {
                DEFAULT_PURPOSE.to_string()
            } else {
                purpose.to_string()
            },
            config,
            created_at: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        }
    }
}

/// The durable history document: records in insertion order, oldest first.
/// The top-level key is "passwords", matching every history file this tool
/// has ever written.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct PasswordHistory {
    #[serde(rename = "passwords")]
    pub records: Vec<GeneratedRecord>,
}

impl PasswordHistory {
    pub fn new() -> Self {
        PasswordHistory::default()
    }

    pub fn add_record(&mut self, record: GeneratedRecord) {
        self.records.push(record);
    }
}
