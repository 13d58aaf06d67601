//! Viewer configuration.

use serde::{Deserialize, Serialize};

use crate::primitives::Color;

/// Declarative configuration for a
/// [`SectionViewer`](crate::SectionViewer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Maximum number of hosted sections; zero means unlimited.
    pub max_sections: usize,

    /// Background applied to the viewer surface and every section.
    pub background: Option<Color>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_sections: 0,
            background: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_unlimited() {
        let config = ViewerConfig::default();
        assert_eq!(config.max_sections, 0);
        assert!(config.background.is_none());
    }

    #[test]
    fn deserializes_partial_config() {
        let config: ViewerConfig = serde_json::from_str(r#"{ "max_sections": 8 }"#).unwrap();
        assert_eq!(config.max_sections, 8);
        assert!(config.background.is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let config = ViewerConfig {
            max_sections: 4,
            background: Some(Color::rgb8(30, 30, 46)),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ViewerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
