use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cell::Cell;

/// Every cell of a `size`×`size` board exactly once, in random order.
///
/// Callers consume the sequence with `pop`, so the last element comes first.
pub fn generate_moves<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<Cell> {
    let mut moves = Vec::with_capacity(size * size);
    for i in 0..size as i32 {
        for j in 0..size as i32 {
            moves.push(Cell::new(i, j));
        }
    }
    moves.shuffle(rng);
    moves
}
