//! Seeded randomness for bots.
//!
//! Bots never reach for a global RNG. Each one owns a `GameRng`, so a bot
//! game replays move for move from its seed and the opponent's moves. A
//! bot-versus-bot match seeds one `GameRng` and hands every seat a `fork`.
//!
//! ```
//! use havannah::core::GameRng;
//!
//! let moves = ["a1", "b2", "c3", "d4"];
//! let mut first = GameRng::new(7);
//! let mut replay = GameRng::new(7);
//! assert_eq!(first.choose(&moves), replay.choose(&moves));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A ChaCha8 stream that remembers its seed and numbers its forks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Stream for the next seat of a match.
    ///
    /// The n-th fork of a seed is always the same stream. Forking does not
    /// advance this stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(spread(self.seed.wrapping_add(self.forks.wrapping_mul(0x9E37_79B9_7F4A_7C15))))
    }

    /// Pick one element uniformly, or `None` from an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.inner)
    }

    /// Shuffle in place, e.g. a list of cells into a random move order.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

/// SplitMix64 finalizer: nearby inputs land far apart.
fn spread(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::Coordinate;

    fn picks(rng: &mut GameRng, cells: &[Coordinate], count: usize) -> Vec<Coordinate> {
        (0..count).filter_map(|_| rng.choose(cells).copied()).collect()
    }

    #[test]
    fn test_same_seed_picks_same_cells() {
        let cells = Board::default().coordinates();
        let mut first = GameRng::new(42);
        let mut replay = GameRng::new(42);

        assert_eq!(picks(&mut first, &cells, 50), picks(&mut replay, &cells, 50));
    }

    #[test]
    fn test_match_seats_get_their_own_streams() {
        let cells = Board::default().coordinates();
        let mut table = GameRng::new(9);
        let mut one = table.fork();
        let mut two = table.fork();

        assert_ne!(one.seed(), two.seed());
        assert_ne!(one.seed(), table.seed());
        assert_ne!(picks(&mut one, &cells, 20), picks(&mut two, &cells, 20));

        // replaying the match hands out the same seats again
        let mut again = GameRng::new(9);
        assert_eq!(again.fork().seed(), one.seed());
        assert_eq!(again.fork().seed(), two.seed());
    }

    #[test]
    fn test_no_choice_from_no_moves() {
        let mut rng = GameRng::new(1);
        let none: [Coordinate; 0] = [];
        assert_eq!(rng.choose(&none), None);
    }

    #[test]
    fn test_shuffled_move_order_is_reproducible() {
        let board = Board::new(4).unwrap();
        let mut order = board.coordinates();
        let mut replay = order.clone();

        GameRng::new(5).shuffle(&mut order);
        GameRng::new(5).shuffle(&mut replay);
        assert_eq!(order, replay);

        order.sort_unstable_by_key(|c| board.index_of(*c));
        assert_eq!(order, board.coordinates());
    }
}
