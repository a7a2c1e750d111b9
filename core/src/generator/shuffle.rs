use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::*;

/// Uniform placement: shuffle every cell index and mine the first `mines` of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShuffleGenerator {
    seed: u64,
}

impl ShuffleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from the operating system so that every board differs.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for ShuffleGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let total_cells = usize::from(config.total_cells());
        let mines = usize::from(config.mines);

        if mines >= total_cells {
            log::warn!(
                "Minefield has no safe cell, requested {} mines for {} cells",
                mines,
                total_cells
            );
        }

        let mut indices: Vec<usize> = (0..total_cells).collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        {
            let cells = mine_mask
                .as_slice_mut()
                .expect("layout should be standard");
            for &index in indices.iter().take(mines) {
                cells[index] = true;
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} board, seed {}",
            mines.min(total_cells),
            config.width(),
            config.height(),
            self.seed
        );
        MineLayout::from_mine_mask(mine_mask)
    }
}
