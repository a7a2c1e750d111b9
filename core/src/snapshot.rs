use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs to draw one frame, taken from a [`Board`] at once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord2,
    pub total_mines: CellCount,
    pub remaining_flags: CellCount,
    pub lost: bool,
    pub won: bool,
    pub triggered_mine: Option<Coord2>,
    pub cells: Array2<CellView>,
    /// Flags sitting on mines; all `false` until the game ends.
    pub correct_flags: Array2<bool>,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let mut cells = Array2::from_elem(size.to_nd_index(), CellView::Hidden);
        let mut correct_flags = Array2::from_elem(size.to_nd_index(), false);

        let (x_end, y_end) = size;
        for x in 0..x_end {
            for y in 0..y_end {
                let coords = (x, y);
                cells[coords.to_nd_index()] = board.visible_state(coords);
                correct_flags[coords.to_nd_index()] = board.is_flag_correctly_placed(coords);
            }
        }

        Self {
            size,
            total_mines: board.total_mines(),
            remaining_flags: board.remaining_flags(),
            lost: board.is_lost(),
            won: board.is_won(),
            triggered_mine: board.triggered_mine(),
            cells,
            correct_flags,
        }
    }

    /// Out-of-bounds cells read as hidden, like [`Board::visible_state`].
    pub fn view_at(&self, coords: Coord2) -> CellView {
        self.cells
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(CellView::Hidden)
    }

    pub fn is_flag_correct(&self, coords: Coord2) -> bool {
        self.correct_flags
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn is_finished(&self) -> bool {
        self.lost || self.won
    }
}
