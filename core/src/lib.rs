use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod snapshot;
mod types;

/// Smallest accepted board side.
pub const MIN_SIDE: Coord = 10;

/// Smallest accepted mine count.
pub const MIN_MINES: CellCount = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Builds a playable configuration, silently correcting bad requests.
    ///
    /// Each side is raised to at least [`MIN_SIDE`]. The mine count is raised
    /// to [`MIN_MINES`], then capped at `w * h - 1` where `w * h` is the
    /// *requested* area, so a tiny request can end up below the floor.
    pub fn new((size_x, size_y): Coord2, mines: CellCount) -> Self {
        let requested_cells = mult(size_x, size_y);
        let size = (size_x.max(MIN_SIDE), size_y.max(MIN_SIDE));
        let ceiling = requested_cells.saturating_sub(1);
        let clamped_mines = mines.max(MIN_MINES).min(ceiling);

        if size != (size_x, size_y) {
            log::warn!(
                "Board size raised to minimum, requested {}x{}, using {}x{}",
                size_x,
                size_y,
                size.0,
                size.1
            );
        }
        if clamped_mines != mines {
            log::warn!(
                "Mine count adjusted, requested {} but using {}",
                mines,
                clamped_mines
            );
        }

        Self::new_unchecked(size, clamped_mines)
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((MIN_SIDE, MIN_SIDE), MIN_MINES)
    }
}

/// Where the mines are, independent of any play state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Wraps a mask of shape `(height, width)`.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (
            cols.try_into().unwrap_or(Coord::MAX),
            rows.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub(crate) fn mask(&self) -> &Array2<bool> {
        &self.mine_mask
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Outcome of toggling a flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Placed,
    Removed,
}

impl FlagOutcome {
    /// Whether the flag state of the cell changed
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Placed => true,
            Self::Removed => true,
        }
    }
}

/// Outcome of clicking a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// The cell carried a safe flag, which was taken off instead of revealing.
    Unflagged,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Unflagged => true,
            Revealed => true,
            HitMine => true,
        }
    }

    /// Whether the click counts as a successful move.
    ///
    /// Hitting a mine changes the board but is reported as a failed move.
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Unflagged | Self::Revealed)
    }
}
