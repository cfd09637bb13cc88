//! Layout configuration.

use crate::Rgb;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Direction in which a layout engine ranks the graph, parents before children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankDir {
    /// Top to bottom.
    #[serde(rename = "TB")]
    TopBottom,
    /// Left to right.
    #[default]
    #[serde(rename = "LR")]
    LeftRight,
    /// Bottom to top.
    #[serde(rename = "BT")]
    BottomTop,
    /// Right to left.
    #[serde(rename = "RL")]
    RightLeft,
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self {
            Self::TopBottom => "TB",
            Self::LeftRight => "LR",
            Self::BottomTop => "BT",
            Self::RightLeft => "RL",
        };
        f.write_str(dir)
    }
}

/// Static configuration of the [`crate::LayoutDescriber`].
///
/// Missing fields take their default when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Fill of the block with the lowest difficulty.
    pub low_color: Rgb,
    /// Fill of the block with the highest difficulty.
    pub high_color: Rgb,
    /// Number of hash characters shown in labels.
    pub short_hash_len: usize,
    /// Ranking direction handed to the layout engine.
    pub rank_dir: RankDir,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            low_color: Rgb::LIGHT_BLUE,
            high_color: Rgb::DARK_BLUE,
            short_hash_len: 6,
            rank_dir: RankDir::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: LayoutConfig = serde_json::from_str(r##"{"high_color": "#000000"}"##).unwrap();
        assert_eq!(config.high_color, Rgb::new(0, 0, 0));
        assert_eq!(config.low_color, Rgb::LIGHT_BLUE);
        assert_eq!(config.short_hash_len, 6);
        assert_eq!(config.rank_dir, RankDir::LeftRight);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(serde_json::from_str::<LayoutConfig>(r#"{"colour": "red"}"#).is_err());
    }

    #[test]
    fn test_rank_dir_names() {
        let dir: RankDir = serde_json::from_str("\"TB\"").unwrap();
        assert_eq!(dir, RankDir::TopBottom);
        assert_eq!(RankDir::RightLeft.to_string(), "RL");
    }
}
