//! Rectangular mazes and their conversion into graphs
//!
//! A maze is a `width x height` grid of junctures with `(0, 0)` in the upper
//! left corner. Walls sit between two adjacent junctures and block movement
//! in both directions; the outer border is always closed. Each juncture
//! carries a traversal weight per direction.

pub mod graph;

use crate::config::{MazeConfig, Side};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

pub use graph::build_maze_graph;

/// A cell of the maze, used as the graph vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Juncture {
    pub x: u32,
    pub y: u32,
}

impl Juncture {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Juncture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Movement direction between adjacent junctures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, in the order the graph adapter probes them
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

impl From<Side> for Direction {
    fn from(side: Side) -> Self {
        match side {
            Side::Up => Direction::Up,
            Side::Right => Direction::Right,
            Side::Down => Direction::Down,
            Side::Left => Direction::Left,
        }
    }
}

/// Walls and weights of a rectangular grid
#[derive(Debug, Clone)]
pub struct Maze {
    width: u32,
    height: u32,
    default_weight: i64,
    walls: HashSet<(Juncture, Direction)>,
    weights: HashMap<(Juncture, Direction), i64>,
}

impl Maze {
    /// An open maze: no inner walls, every move costs `default_weight`
    pub fn new(width: u32, height: u32, default_weight: i64) -> Self {
        Self {
            width,
            height,
            default_weight,
            walls: HashSet::new(),
            weights: HashMap::new(),
        }
    }

    /// Build a maze from a validated configuration
    pub fn from_config(config: &MazeConfig) -> Result<Self> {
        config.validate()?;

        let mut maze = Maze::new(config.width, config.height, config.default_weight);
        for wall in &config.walls {
            maze.add_wall(Juncture::new(wall.x, wall.y), wall.side.into());
        }
        for weight in &config.weights {
            maze.set_weight(
                Juncture::new(weight.x, weight.y),
                weight.side.into(),
                weight.weight,
            );
        }
        Ok(maze)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, juncture: Juncture) -> bool {
        juncture.x < self.width && juncture.y < self.height
    }

    /// Bottom-right corner, the conventional exit
    pub fn exit(&self) -> Juncture {
        Juncture::new(self.width.saturating_sub(1), self.height.saturating_sub(1))
    }

    /// Adjacent juncture in `direction`, if it lies inside the grid
    pub fn neighbor(&self, juncture: Juncture, direction: Direction) -> Option<Juncture> {
        let Juncture { x, y } = juncture;
        let next = match direction {
            Direction::Up => Juncture::new(x, y.checked_sub(1)?),
            Direction::Right => Juncture::new(x.checked_add(1)?, y),
            Direction::Down => Juncture::new(x, y.checked_add(1)?),
            Direction::Left => Juncture::new(x.checked_sub(1)?, y),
        };
        self.contains(next).then_some(next)
    }

    /// Place a wall on one side of a juncture
    ///
    /// The wall is shared with the neighbor on that side, so it blocks both
    /// directions.
    pub fn add_wall(&mut self, juncture: Juncture, direction: Direction) {
        self.walls.insert((juncture, direction));
        if let Some(other) = self.neighbor(juncture, direction) {
            self.walls.insert((other, direction.opposite()));
        }
    }

    /// Whether movement from `juncture` in `direction` is blocked
    pub fn is_wall(&self, juncture: Juncture, direction: Direction) -> bool {
        self.neighbor(juncture, direction).is_none() || self.walls.contains(&(juncture, direction))
    }

    /// Set the cost of leaving `juncture` in `direction`
    pub fn set_weight(&mut self, juncture: Juncture, direction: Direction, weight: i64) {
        self.weights.insert((juncture, direction), weight);
    }

    pub fn weight(&self, juncture: Juncture, direction: Direction) -> i64 {
        self.weights
            .get(&(juncture, direction))
            .copied()
            .unwrap_or(self.default_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_juncture_display() {
        assert_eq!(Juncture::new(2, 5).to_string(), "(2, 5)");
    }

    #[test]
    fn test_border_is_closed() {
        let maze = Maze::new(2, 2, 1);
        let origin = Juncture::new(0, 0);
        assert!(maze.is_wall(origin, Direction::Up));
        assert!(maze.is_wall(origin, Direction::Left));
        assert!(!maze.is_wall(origin, Direction::Right));
        assert!(!maze.is_wall(origin, Direction::Down));
        assert!(maze.is_wall(Juncture::new(1, 1), Direction::Right));
        assert!(maze.is_wall(Juncture::new(1, 1), Direction::Down));
    }

    #[test]
    fn test_walls_block_both_sides() {
        let mut maze = Maze::new(3, 1, 1);
        maze.add_wall(Juncture::new(0, 0), Direction::Right);
        assert!(maze.is_wall(Juncture::new(0, 0), Direction::Right));
        assert!(maze.is_wall(Juncture::new(1, 0), Direction::Left));
        assert!(!maze.is_wall(Juncture::new(1, 0), Direction::Right));
    }

    #[test]
    fn test_weights_are_directional() {
        let mut maze = Maze::new(2, 1, 1);
        maze.set_weight(Juncture::new(0, 0), Direction::Right, 9);
        assert_eq!(maze.weight(Juncture::new(0, 0), Direction::Right), 9);
        assert_eq!(maze.weight(Juncture::new(1, 0), Direction::Left), 1);
    }

    #[test]
    fn test_neighbor_stays_in_grid() {
        let maze = Maze::new(2, 3, 1);
        assert_eq!(
            maze.neighbor(Juncture::new(1, 1), Direction::Down),
            Some(Juncture::new(1, 2))
        );
        assert_eq!(maze.neighbor(Juncture::new(1, 2), Direction::Down), None);
        assert_eq!(maze.neighbor(Juncture::new(0, 0), Direction::Up), None);
        assert_eq!(maze.exit(), Juncture::new(1, 2));
    }
}
