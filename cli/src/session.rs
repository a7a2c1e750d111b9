use std::io::{BufRead, Write};

use nsweeper_core::{Board, BoardSnapshot, GameConfig};

use crate::command::Command;
use crate::render::render;

const HELP: &str = "\
Commands:
  r X Y, reveal X Y      open the cell at column X, row Y
  f X Y, flag X Y        place or remove a flag
  n [W H M], new [W H M] start a new game, optionally resized
  h, help                show this help
  q, quit                leave the game";

/// One interactive run: the current board plus what is needed to reset it.
pub struct Session {
    board: Board,
    seed: Option<u64>,
    games: u64,
}

impl Session {
    /// A seeded session derives a distinct, reproducible seed for every new game.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        Self {
            board: Self::make_board(config, seed, 0),
            seed,
            games: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn make_board(config: GameConfig, seed: Option<u64>, games: u64) -> Board {
        match seed {
            Some(seed) => Board::with_seed(config, seed.wrapping_add(games)),
            None => Board::with_config(config),
        }
    }

    fn reset(&mut self, config: Option<GameConfig>) {
        let config = config.unwrap_or_else(|| self.board.config());
        self.games += 1;
        self.board = Self::make_board(config, self.seed, self.games);
        log::info!(
            "New game {}: {}x{} with {} mines",
            self.games,
            config.width(),
            config.height(),
            config.mines
        );
    }

    /// Reads commands until `quit` or end of input, redrawing after every move.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "{HELP}\n")?;
        write!(out, "{}", render(&BoardSnapshot::from_board(&self.board)))?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    log::debug!("Rejected input {:?}: {}", line, err);
                    writeln!(out, "{err}")?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Help => {
                    writeln!(out, "{HELP}")?;
                    continue;
                }
                Command::New(config) => self.reset(config),
                Command::Reveal(_) | Command::Flag(_) if self.board.is_finished() => {
                    writeln!(out, "The game is over, type `new` to play again.")?;
                    continue;
                }
                Command::Reveal((x, y)) => {
                    if !self.board.on_click(x, y) && !self.board.is_lost() {
                        writeln!(out, "Nothing to reveal at {x} {y}.")?;
                    }
                }
                Command::Flag((x, y)) => {
                    if !self.board.interact_flag(x, y) {
                        writeln!(out, "Cannot flag {x} {y}.")?;
                    }
                }
            }

            write!(out, "{}", render(&BoardSnapshot::from_board(&self.board)))?;
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nsweeper_core::{Cell, Coord2};

    fn run(session: &mut Session, input: &str) -> String {
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn find(board: &Board, wanted: Cell) -> Coord2 {
        let (width, height) = board.size();
        (0..width)
            .flat_map(|x| (0..height).map(move |y| (x, y)))
            .find(|&coords| board.cell_at(coords) == Some(wanted))
            .unwrap()
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let first = Session::new(GameConfig::default(), Some(5));
        let second = Session::new(GameConfig::default(), Some(5));
        assert_eq!(first.board(), second.board());
    }

    #[test]
    fn reports_bad_commands_and_keeps_going() {
        let mut session = Session::new(GameConfig::default(), Some(1));
        let output = run(&mut session, "dig 1 1\nr 1\nq\nr 0 0\n");

        assert!(output.contains("Unknown command `dig`"));
        assert!(output.contains("`reveal` takes X Y, got 1 argument(s)"));
        assert!(!session.board().cell_at((0, 0)).is_some_and(|cell| cell.is_revealed()));
    }

    #[test]
    fn losing_blocks_further_moves_until_new_game() {
        let mut session = Session::new(GameConfig::default(), Some(3));
        let (x, y) = find(session.board(), Cell::Mine);
        let (sx, sy) = find(session.board(), Cell::Hidden);

        let output = run(&mut session, &format!("r {x} {y}\nr {sx} {sy}\n"));
        assert!(output.contains("Boom! You lost."));
        assert!(output.contains("The game is over"));
        assert!(session.board().is_lost());

        run(&mut session, "new 12 11 20\n");
        assert!(!session.board().is_lost());
        assert_eq!(session.board().size(), (12, 11));
        assert_eq!(session.board().total_mines(), 20);
    }

    #[test]
    fn flag_command_updates_stock() {
        let mut session = Session::new(GameConfig::default(), Some(9));
        let (x, y) = find(session.board(), Cell::Hidden);

        let output = run(&mut session, &format!("f {x} {y}\n"));
        assert!(output.contains("Flags left: 9  Mines: 10"));
        assert_eq!(session.board().cell_at((x, y)), Some(Cell::Flagged));
    }
}
