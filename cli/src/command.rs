use core::str::FromStr;
use nsweeper_core::{CellCount, Coord, Coord2, GameConfig};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    /// Start over, optionally with a different configuration.
    New(Option<GameConfig>),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`{command}` takes {expected}, got {got} argument(s)")]
    ArgumentCount {
        command: &'static str,
        expected: &'static str,
        got: usize,
    },
    #[error("`{0}` is not a valid number")]
    InvalidNumber(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        match name.as_str() {
            "r" | "reveal" => parse_coords("reveal", &args).map(Command::Reveal),
            "f" | "flag" => parse_coords("flag", &args).map(Command::Flag),
            "n" | "new" => match args.as_slice() {
                [] => Ok(Command::New(None)),
                [width, height, mines] => {
                    let size = (parse_number(width)?, parse_number(height)?);
                    let mines: CellCount = parse_number(mines)?;
                    Ok(Command::New(Some(GameConfig::new(size, mines))))
                }
                _ => Err(CommandError::ArgumentCount {
                    command: "new",
                    expected: "no arguments or WIDTH HEIGHT MINES",
                    got: args.len(),
                }),
            },
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(name)),
        }
    }
}

fn parse_coords(command: &'static str, args: &[&str]) -> Result<Coord2, CommandError> {
    match args {
        [x, y] => Ok((parse_number::<Coord>(x)?, parse_number::<Coord>(y)?)),
        _ => Err(CommandError::ArgumentCount {
            command,
            expected: "X Y",
            got: args.len(),
        }),
    }
}

fn parse_number<T: FromStr>(word: &str) -> Result<T, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_with_aliases() {
        assert_eq!("r 3 4".parse::<Command>(), Ok(Command::Reveal((3, 4))));
        assert_eq!("  REVEAL 0 9 ".parse::<Command>(), Ok(Command::Reveal((0, 9))));
        assert_eq!("f 2 7".parse::<Command>(), Ok(Command::Flag((2, 7))));
        assert_eq!("flag 12 1".parse::<Command>(), Ok(Command::Flag((12, 1))));
    }

    #[test]
    fn parses_new_game_with_clamped_config() {
        assert_eq!("n".parse::<Command>(), Ok(Command::New(None)));
        assert_eq!(
            "new 16 16 40".parse::<Command>(),
            Ok(Command::New(Some(GameConfig::new((16, 16), 40))))
        );
        assert_eq!(
            "new 3 3 1".parse::<Command>(),
            Ok(Command::New(Some(GameConfig::new_unchecked((10, 10), 8))))
        );
    }

    #[test]
    fn parses_control_commands() {
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "dig 1 2".parse::<Command>(),
            Err(CommandError::Unknown("dig".to_string()))
        );
        assert_eq!(
            "r 1".parse::<Command>(),
            Err(CommandError::ArgumentCount {
                command: "reveal",
                expected: "X Y",
                got: 1
            })
        );
        assert_eq!(
            "f 1 -2".parse::<Command>(),
            Err(CommandError::InvalidNumber("-2".to_string()))
        );
        assert_eq!(
            "r 300 0".parse::<Command>(),
            Err(CommandError::InvalidNumber("300".to_string()))
        );
        assert!(matches!(
            "new 10 10".parse::<Command>(),
            Err(CommandError::ArgumentCount { got: 2, .. })
        ));
    }
}
