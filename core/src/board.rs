use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};

use crate::*;

/// A single game from construction to win or loss.
///
/// The board never ends interaction by itself: once [`Board::is_lost`] or
/// [`Board::is_won`] reports a terminal state it is up to the caller to stop
/// issuing commands. Only reveals are refused after a loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    available_flags: CellCount,
    found_mines: CellCount,
    lost: bool,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Creates a randomly mined board, clamping the request as [`GameConfig::new`] does.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self::with_config(GameConfig::new((width, height), mines))
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::generate(config, ShuffleGenerator::from_entropy())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::generate(config, ShuffleGenerator::new(seed))
    }

    pub fn generate(config: GameConfig, generator: impl MineGenerator) -> Self {
        Self::from_layout(generator.generate(config))
    }

    /// Builds a board from an explicit layout; no clamping is applied.
    pub fn from_layout(layout: MineLayout) -> Self {
        let cells = layout
            .mask()
            .map(|&is_mine| if is_mine { Cell::Mine } else { Cell::Hidden });
        let config = layout.game_config();
        Self {
            config,
            cells,
            available_flags: config.mines,
            found_mines: 0,
            lost: false,
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn width(&self) -> Coord {
        self.config.width()
    }

    pub fn height(&self) -> Coord {
        self.config.height()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn remaining_flags(&self) -> CellCount {
        self.available_flags
    }

    pub fn found_mines(&self) -> CellCount {
        self.found_mines
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn is_won(&self) -> bool {
        self.found_mines == self.config.mines
    }

    pub fn is_finished(&self) -> bool {
        self.is_lost() || self.is_won()
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Stored state of a cell, `None` when out of bounds.
    ///
    /// This exposes mine positions; renderers should use [`Board::visible_state`].
    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.validate_coords(coords)
            .ok()
            .map(|coords| self.cells[coords.to_nd_index()])
    }

    /// What the player sees at `coords`.
    ///
    /// Out-of-bounds cells and unflagged mines read as hidden until the game
    /// is lost; flagged cells always read as a flag.
    pub fn visible_state(&self, coords: Coord2) -> CellView {
        match self.cell_at(coords) {
            Some(cell) => CellView::project(cell, self.lost),
            None => CellView::Hidden,
        }
    }

    /// Only meaningful at the end of a game, always `false` before.
    pub fn is_flag_correctly_placed(&self, coords: Coord2) -> bool {
        self.is_finished() && self.cell_at(coords) == Some(Cell::FlaggedMine)
    }

    /// Boolean form of [`Board::reveal`]: `true` when the click revealed or
    /// un-flagged something, `false` for no-ops, errors, and hitting a mine.
    pub fn on_click(&mut self, x: Coord, y: Coord) -> bool {
        self.reveal((x, y))
            .is_ok_and(|outcome| outcome.is_accepted())
    }

    /// Boolean form of [`Board::toggle_flag`].
    pub fn interact_flag(&mut self, x: Coord, y: Coord) -> bool {
        self.toggle_flag((x, y))
            .is_ok_and(|outcome| outcome.has_update())
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.validate_coords(coords)?;
        self.check_not_lost()?;

        // a flagged cell is un-flagged instead of revealed
        let was_flagged = self.cells[coords.to_nd_index()].is_flagged();
        if was_flagged {
            self.toggle_flag(coords)?;
        }

        Ok(match self.cells[coords.to_nd_index()] {
            Cell::Mine | Cell::FlaggedMine => {
                self.lose(coords);
                HitMine
            }
            _ if was_flagged => Unflagged,
            Cell::Hidden => {
                self.flood_reveal(coords);
                Revealed
            }
            Cell::Revealed(_) | Cell::Flagged => NoChange,
        })
    }

    /// Places or removes a flag.
    ///
    /// Placing needs a flag in stock; removing is always allowed, even when
    /// every flag is on the board. Works after the game has ended too.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use FlagOutcome::*;

        let coords = self.validate_coords(coords)?;
        let index = coords.to_nd_index();
        let can_place = self.available_flags > 0;

        let outcome = match self.cells[index] {
            Cell::Hidden if can_place => {
                self.cells[index] = Cell::Flagged;
                self.available_flags -= 1;
                Placed
            }
            Cell::Mine if can_place => {
                self.cells[index] = Cell::FlaggedMine;
                self.available_flags -= 1;
                self.found_mines = self.found_mines.saturating_add(1);
                Placed
            }
            Cell::Flagged => {
                self.cells[index] = Cell::Hidden;
                self.available_flags = self.available_flags.saturating_add(1);
                Removed
            }
            Cell::FlaggedMine => {
                self.cells[index] = Cell::Mine;
                self.available_flags = self.available_flags.saturating_add(1);
                self.found_mines = self.found_mines.saturating_sub(1);
                Removed
            }
            Cell::Hidden | Cell::Mine | Cell::Revealed(_) => NoChange,
        };

        if outcome == Placed && self.is_won() {
            log::debug!("All {} mines flagged, game won", self.config.mines);
        }
        Ok(outcome)
    }

    /// Mines among the eight surrounding cells, flagged or not.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let count = NeighborIter::surrounding(coords, self.size())
            .filter(|&pos| self.cells[pos.to_nd_index()].has_mine())
            .count();
        // at most eight neighbours
        count as u8
    }

    /// Opens `origin` and spreads through orthogonal neighbours.
    ///
    /// `origin` is always opened. Any other cell is opened only when at most
    /// one mine surrounds it, and the wave only continues from zero cells.
    fn flood_reveal(&mut self, origin: Coord2) -> CellCount {
        let mut revealed: CellCount = 0;
        let mut visited = BTreeSet::from([origin]);
        let mut to_visit = VecDeque::from([origin]);

        while let Some(coords) = to_visit.pop_front() {
            let adjacent_mines = self.adjacent_mine_count(coords);
            if coords != origin && adjacent_mines > 1 {
                continue;
            }

            self.cells[coords.to_nd_index()] = Cell::Revealed(adjacent_mines);
            revealed += 1;

            if adjacent_mines == 0 {
                for neighbor in NeighborIter::orthogonal(coords, self.size()) {
                    if self.cells[neighbor.to_nd_index()] == Cell::Hidden
                        && visited.insert(neighbor)
                    {
                        to_visit.push_back(neighbor);
                    }
                }
            }
        }

        log::trace!("Revealed {} cells from {:?}", revealed, origin);
        revealed
    }

    fn lose(&mut self, coords: Coord2) {
        if self.lost {
            return;
        }

        log::debug!("Mine hit at {:?}, game lost", coords);
        self.lost = true;
        self.triggered_mine = Some(coords);
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (size_x, size_y) = self.size();
        if coords.0 < size_x && coords.1 < size_y {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn check_not_lost(&self) -> Result<()> {
        if self.lost {
            Err(GameError::AlreadyLost)
        } else {
            Ok(())
        }
    }
}
