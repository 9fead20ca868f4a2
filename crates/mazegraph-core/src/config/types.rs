//! Configuration type definitions

use crate::graph::AlgorithmKind;
use serde::{Deserialize, Serialize};

/// Current maze file format version
pub const MAZE_FORMAT_VERSION: u32 = 1;

/// On-disk description of a maze
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MazeConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Number of columns
    pub width: u32,

    /// Number of rows
    pub height: u32,

    /// Weight of every move without an explicit entry in `weights`
    #[serde(default = "default_weight")]
    pub default_weight: i64,

    /// Inner walls
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub walls: Vec<WallConfig>,

    /// Per-direction weight overrides
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weights: Vec<WeightConfig>,

    /// Defaults for the run command
    #[serde(default)]
    pub run: RunConfig,
}

/// Side of a juncture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Up,
    Right,
    Down,
    Left,
}

/// A wall on one side of a juncture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallConfig {
    pub x: u32,
    pub y: u32,
    pub side: Side,
}

/// Weight for leaving a juncture through one side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub x: u32,
    pub y: u32,
    pub side: Side,
    pub weight: i64,
}

/// Defaults applied when the command line leaves them out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<AlgorithmKind>,

    /// `[x, y]` of the start juncture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<[u32; 2]>,

    /// `[x, y]` of the end juncture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<[u32; 2]>,
}

fn default_version() -> u32 {
    MAZE_FORMAT_VERSION
}

fn default_weight() -> i64 {
    1
}
