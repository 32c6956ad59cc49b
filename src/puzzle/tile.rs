//! Edge-labelled tiles and the rotation algebra over them
//!
//! A tile stores its four base labels once and never changes afterwards.
//! Rotated views are computed on demand from the base labels and a
//! [`Rotation`], so two search branches can never observe each other's
//! orientation choices.

use std::fmt;

use crate::io::configuration::BLANK_LABEL;

/// Compass direction of a tile edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row - 1
    North,
    /// Towards column + 1
    East,
    /// Towards row + 1
    South,
    /// Towards column - 1
    West,
}

impl Direction {
    /// All directions in clockwise order starting at north
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Direction facing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Clockwise position of this direction (north = 0)
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Neighbouring cell in this direction, if it lies inside a `rows` x `cols` board
    pub const fn step(self, row: usize, col: usize, rows: usize, cols: usize) -> Option<(usize, usize)> {
        match self {
            Self::North => {
                if row == 0 {
                    None
                } else {
                    Some((row - 1, col))
                }
            }
            Self::East => {
                if col + 1 >= cols {
                    None
                } else {
                    Some((row, col + 1))
                }
            }
            Self::South => {
                if row + 1 >= rows {
                    None
                } else {
                    Some((row + 1, col))
                }
            }
            Self::West => {
                if col == 0 {
                    None
                } else {
                    Some((row, col - 1))
                }
            }
        }
    }

    const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }
}

/// Clockwise right-angle rotation applied to a placed tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Rotation {
    /// Base orientation
    #[default]
    R0,
    /// Quarter turn clockwise
    R90,
    /// Half turn
    R180,
    /// Three quarter turns clockwise
    R270,
}

impl Rotation {
    /// All rotations in ascending order of angle
    pub const ALL: [Self; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Rotation angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// Number of clockwise quarter turns
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }

    /// Parse a rotation from its angle in degrees
    pub const fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Self::R0),
            90 => Some(Self::R90),
            180 => Some(Self::R180),
            270 => Some(Self::R270),
            _ => None,
        }
    }

    /// Rotation that undoes this one
    pub const fn inverse(self) -> Self {
        match self {
            Self::R0 => Self::R0,
            Self::R90 => Self::R270,
            Self::R180 => Self::R180,
            Self::R270 => Self::R90,
        }
    }

    /// Compose two rotations
    pub const fn then(self, other: Self) -> Self {
        match (self.quarter_turns() + other.quarter_turns()) % 4 {
            0 => Self::R0,
            1 => Self::R90,
            2 => Self::R180,
            _ => Self::R270,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// An immutable edge-labelled unit square
///
/// Identity is the tile's position in the input order. Labels are stored
/// clockwise from north.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    id: usize,
    edges: [String; 4],
}

impl Tile {
    /// Create a tile from its base labels
    pub fn new(
        id: usize,
        north: impl Into<String>,
        east: impl Into<String>,
        south: impl Into<String>,
        west: impl Into<String>,
    ) -> Self {
        Self {
            id,
            edges: [north.into(), east.into(), south.into(), west.into()],
        }
    }

    /// Position of this tile in the input order
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Base label on the given side, ignoring rotation
    pub fn base_edge(&self, direction: Direction) -> &str {
        self.edges
            .get(direction.index())
            .map_or(BLANK_LABEL, String::as_str)
    }

    /// Label facing `direction` once the tile is turned by `rotation`
    ///
    /// A clockwise quarter turn moves the west label to the north, so the
    /// label now facing `direction` is the base label `quarter_turns`
    /// positions counter-clockwise from it.
    pub fn edge(&self, rotation: Rotation, direction: Direction) -> &str {
        let source = Direction::from_index(direction.index() + 4 - rotation.quarter_turns());
        self.base_edge(source)
    }

    /// Whether the label facing `direction` under `rotation` is blank
    pub fn is_blank(&self, rotation: Rotation, direction: Direction) -> bool {
        self.edge(rotation, direction) == BLANK_LABEL
    }

    /// All four labels under `rotation`, clockwise from north
    pub fn edges(&self, rotation: Rotation) -> [&str; 4] {
        Direction::ALL.map(|direction| self.edge(rotation, direction))
    }

    /// Rotations that each show a different arrangement of labels, ascending
    ///
    /// Rotations that merely repeat an earlier view of a symmetric tile are
    /// left out; `R0` is always first.
    pub fn distinct_rotations(&self) -> Vec<Rotation> {
        let mut views: Vec<[&str; 4]> = Vec::with_capacity(4);
        let mut rotations = Vec::with_capacity(4);
        for rotation in Rotation::ALL {
            let view = self.edges(rotation);
            if !views.contains(&view) {
                views.push(view);
                rotations.push(rotation);
            }
        }
        rotations
    }

    /// New tile with the same identity whose base labels are this tile turned by `rotation`
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let [north, east, south, west] = self.edges(rotation);
        Self::new(self.id, north, east, south, west)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [north, east, south, west] = self.edges(Rotation::R0);
        write!(f, "tile {north} {east} {south} {west}")
    }
}
