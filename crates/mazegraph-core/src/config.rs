//! Maze configuration files
//!
//! A maze is described by a TOML document. Dimensions are required; walls,
//! weight overrides and run defaults are optional.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_maze;
use crate::error::{GraphError, Result};
use crate::maze::Juncture;

pub use types::{MazeConfig, RunConfig, Side, WallConfig, WeightConfig, MAZE_FORMAT_VERSION};

impl MazeConfig {
    /// Load a maze description from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read maze", path.display(), e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            width = config.width,
            height = config.height,
            walls = config.walls.len(),
            "maze_config_loaded"
        );
        Ok(config)
    }

    /// Parse and validate a maze description
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MazeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the description can be turned into a maze
    pub fn validate(&self) -> Result<()> {
        if self.version > MAZE_FORMAT_VERSION {
            bail_maze!(
                "unsupported format version {} (newest supported: {})",
                self.version,
                MAZE_FORMAT_VERSION
            );
        }
        if self.width == 0 || self.height == 0 {
            bail_maze!(
                "dimensions must be positive, got {}x{}",
                self.width,
                self.height
            );
        }
        for wall in &self.walls {
            self.check_in_bounds("wall", wall.x, wall.y)?;
        }
        for weight in &self.weights {
            self.check_in_bounds("weight", weight.x, weight.y)?;
        }
        if let Some(start) = self.run.start {
            self.check_in_bounds("run.start", start[0], start[1])?;
        }
        if let Some(end) = self.run.end {
            self.check_in_bounds("run.end", end[0], end[1])?;
        }
        Ok(())
    }

    /// Start juncture from `[run]`, defaulting to the upper left corner
    pub fn start(&self) -> Juncture {
        self.run
            .start
            .map(|[x, y]| Juncture::new(x, y))
            .unwrap_or(Juncture::new(0, 0))
    }

    /// End juncture from `[run]`, defaulting to the lower right corner
    pub fn end(&self) -> Juncture {
        self.run.end.map(|[x, y]| Juncture::new(x, y)).unwrap_or(Juncture::new(
            self.width.saturating_sub(1),
            self.height.saturating_sub(1),
        ))
    }

    fn check_in_bounds(&self, what: &str, x: u32, y: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            bail_maze!(
                "{} at ({}, {}) lies outside the {}x{} grid",
                what,
                x,
                y,
                self.width,
                self.height
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AlgorithmKind;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
width = 3
height = 2
default_weight = 2

[[walls]]
x = 0
y = 0
side = "right"

[[weights]]
x = 1
y = 1
side = "left"
weight = 5

[run]
algorithm = "dijkstra"
start = [0, 1]
"#;

    #[test]
    fn test_parse_full_document() {
        let config = MazeConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.version, MAZE_FORMAT_VERSION);
        assert_eq!(config.width, 3);
        assert_eq!(config.default_weight, 2);
        assert_eq!(
            config.walls,
            vec![WallConfig {
                x: 0,
                y: 0,
                side: Side::Right
            }]
        );
        assert_eq!(config.weights[0].weight, 5);
        assert_eq!(config.run.algorithm, Some(AlgorithmKind::Dijkstra));
        assert_eq!(config.start(), Juncture::new(0, 1));
        assert_eq!(config.end(), Juncture::new(2, 1));
    }

    #[test]
    fn test_minimal_document_uses_defaults() {
        let config = MazeConfig::from_toml_str("width = 1\nheight = 1\n").unwrap();
        assert_eq!(config.default_weight, 1);
        assert!(config.walls.is_empty());
        assert_eq!(config.run, RunConfig::default());
        assert_eq!(config.start(), Juncture::new(0, 0));
        assert_eq!(config.end(), Juncture::new(0, 0));
    }

    #[test]
    fn test_missing_dimensions_is_toml_error() {
        let err = MazeConfig::from_toml_str("width = 3\n").unwrap_err();
        assert!(matches!(err, GraphError::Toml(_)));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = MazeConfig::from_toml_str("width = 0\nheight = 4\n").unwrap_err();
        assert!(matches!(err, GraphError::InvalidMaze { .. }));
    }

    #[test]
    fn test_wall_outside_grid_rejected() {
        let content = "width = 2\nheight = 2\n[[walls]]\nx = 2\ny = 0\nside = \"up\"\n";
        let err = MazeConfig::from_toml_str(content).unwrap_err();
        assert!(err.to_string().contains("wall at (2, 0)"));
    }

    #[test]
    fn test_future_version_rejected() {
        let err = MazeConfig::from_toml_str("version = 9\nwidth = 1\nheight = 1\n").unwrap_err();
        assert!(matches!(err, GraphError::InvalidMaze { .. }));
    }

    #[test]
    fn test_unknown_side_rejected() {
        let content = "width = 2\nheight = 2\n[[walls]]\nx = 0\ny = 0\nside = \"north\"\n";
        assert!(MazeConfig::from_toml_str(content).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("maze.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let config = MazeConfig::load(&path).unwrap();
        assert_eq!(config.height, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = MazeConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read maze"));
    }
}
