use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::settings::bool_or;

/// The parts of the server's configuration that affect client settings.
///
/// Each flag is read on its own. A flag that is missing or isn't a boolean is treated the same as
/// `false`, which blocks only the corresponding client feature.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Whether the server can generate preview thumbnails.
    pub use_thumbnails: bool,
    /// Whether the server collects extended marker statistics.
    pub extended_marker_stats: bool,
}

impl ServerConfig {
    /// Reads the config from a response body. Unknown fields are ignored.
    pub fn from_record(record: &Value) -> Self {
        Self {
            use_thumbnails: bool_or(record, "useThumbnails", false),
            extended_marker_stats: bool_or(record, "extendedMarkerStats", false),
        }
    }
}

impl<'de> Deserialize<'de> for ServerConfig {
    fn deserialize<D>(deserializer: D) -> Result<ServerConfig, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = Value::deserialize(deserializer)?;
        Ok(Self::from_record(&record))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::settings::ClientSettings;

    #[test]
    fn missing_flags_are_false() {
        let config: ServerConfig = serde_json::from_value(json!({
            "useThumbnails": true,
            "autoOpen": false,
        }))
        .unwrap();
        assert_eq!(
            config,
            ServerConfig {
                use_thumbnails: true,
                extended_marker_stats: false,
            }
        );
    }

    #[test]
    fn bad_flag_only_blocks_its_own_feature() {
        let config: ServerConfig = serde_json::from_value(json!({
            "useThumbnails": true,
            "extendedMarkerStats": null,
        }))
        .unwrap();
        let mut settings = ClientSettings::default();
        settings.apply_server_config(&config);
        assert!(!settings.thumbnails_blocked_by_server());
        assert!(settings.use_thumbnails());
        assert!(settings.extended_marker_stats_blocked());

        let config = ServerConfig::from_record(&json!({
            "useThumbnails": "yes",
            "extendedMarkerStats": true,
        }));
        assert_eq!(
            config,
            ServerConfig {
                use_thumbnails: false,
                extended_marker_stats: true,
            }
        );
    }

    #[test]
    fn non_object_body_blocks_everything() {
        for body in [json!(true), json!([]), json!("config")] {
            assert_eq!(ServerConfig::from_record(&body), ServerConfig::default());
        }
    }
}
