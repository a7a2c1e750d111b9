use serde::{Deserialize, Serialize};

/// Stored state of a single board cell.
///
/// Mine identity survives flagging: a flagged mine is `FlaggedMine`, a flagged
/// safe cell is `Flagged`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Hidden,
    Revealed(u8),
    Mine,
    Flagged,
    FlaggedMine,
}

impl Cell {
    pub const fn has_mine(self) -> bool {
        matches!(self, Self::Mine | Self::FlaggedMine)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged | Self::FlaggedMine)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Hidden
    }
}

/// What the player is allowed to see of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Revealed(u8),
    Flag,
    Mine,
}

impl CellView {
    /// Projects a stored cell, showing mines only once the game is lost.
    pub const fn project(cell: Cell, lost: bool) -> Self {
        match cell {
            Cell::Hidden => Self::Hidden,
            Cell::Revealed(count) => Self::Revealed(count),
            Cell::Mine if lost => Self::Mine,
            Cell::Mine => Self::Hidden,
            Cell::Flagged | Cell::FlaggedMine => Self::Flag,
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagged_mine_never_leaks_mine() {
        assert_eq!(CellView::project(Cell::FlaggedMine, false), CellView::Flag);
        assert_eq!(CellView::project(Cell::FlaggedMine, true), CellView::Flag);
    }

    #[test]
    fn mines_show_only_after_loss() {
        assert_eq!(CellView::project(Cell::Mine, false), CellView::Hidden);
        assert_eq!(CellView::project(Cell::Mine, true), CellView::Mine);
    }
}
