use crate::*;
pub use shuffle::*;

mod shuffle;

/// Strategy for deciding where the mines of a new board go.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}
