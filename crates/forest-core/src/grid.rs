//! The forest grid
//!
//! Row-major tile storage, fixed size, built once per session. Row 0 is the
//! top; the goal always sits in the top-right corner.

use core::fmt;

use crate::direction::Direction;
use crate::rng::RandomSource;
use crate::tile::{Tile, TileKind};

/// A cell coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Build a grid of background tiles with the goal in the top-right corner
    /// and the player tile stamped at `player`.
    ///
    /// Callers validate dimensions first (see `GameConfig::validate`).
    pub fn new<R: RandomSource>(width: usize, height: usize, player: Position, rng: &mut R) -> Self {
        let tiles = (0..width * height).map(|_| Tile::background(&mut *rng)).collect();
        let mut grid = Self {
            width,
            height,
            tiles,
        };
        grid.set(player, Tile::player());
        let goal = grid.goal();
        grid.set(goal, Tile::goal());
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The fixed exit cell: top row, last column.
    pub fn goal(&self) -> Position {
        Position::new(self.width.saturating_sub(1), 0)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos).then(|| pos.y * self.width + pos.x)
    }

    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    /// Replace the tile at `pos`. Out-of-bounds positions are ignored.
    pub fn set(&mut self, pos: Position, tile: Tile) {
        if let Some(i) = self.index(pos) {
            self.tiles[i] = tile;
        }
    }

    /// The cell one step from `pos`, or `None` past the edge.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.delta();
        let x = pos.x.checked_add_signed(dx as isize)?;
        let y = pos.y.checked_add_signed(dy as isize)?;
        let next = Position::new(x, y);
        self.in_bounds(next).then_some(next)
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width.max(1))
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.kind() == kind).count()
    }
}
