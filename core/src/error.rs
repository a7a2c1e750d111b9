use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already lost, no new reveals are accepted")]
    AlreadyLost,
}

pub type Result<T> = core::result::Result<T, GameError>;
