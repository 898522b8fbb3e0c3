use std::{collections::hash_map::DefaultHasher, hash::Hasher};

use lazy_static::lazy_static;

use crate::prelude::*;

/// One seed per color and role, plus one for tiles.
const NUM_SEEDS: usize = 2 * 6 + 1;
const TILE_SEED: usize = NUM_SEEDS - 1;

lazy_static! {
    /// The per-kind seeds that hex keys are derived from.
    ///
    /// Tile sets have no fixed size, so per-hex keys are mixed on demand.
    static ref SEEDS: [u64; NUM_SEEDS] =
    {
        let mut table = [0u64; NUM_SEEDS];
        let mut hasher = DefaultHasher::new();

        for (i, seed) in table.iter_mut().enumerate()
        {
            hasher.write_u64(i as u64);
            *seed = hasher.finish();
        }
        table
    };
}

/// A position hash over the tile set and the piece set.
///
/// The move history is not part of it.
pub type ZobristHash = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// An implementor for zobrist hashes.
pub struct ZobristTable
{
    pieces: ZobristHash,
    tiles:  ZobristHash,
}

impl ZobristTable
{
    /// Gets the hash associated with the current state.
    pub fn get(&self) -> ZobristHash
    {
        self.pieces ^ self.tiles
    }

    /// Hashes a piece into or out of its hex. The operation is symmetric.
    pub fn hash(&mut self, piece: &Piece) -> &mut Self
    {
        let seed = SEEDS[6 * piece.color as usize + piece.role as usize];
        self.pieces ^= mix(seed, piece.position);
        self
    }

    /// Forgets everything hashed so far.
    pub fn reset(&mut self) -> &mut Self
    {
        *self = ZobristTable::default();
        self
    }

    /// Hashes a tile into or out of the tile set.
    pub fn tile(&mut self, hex: Hex) -> &mut Self
    {
        self.tiles ^= mix(SEEDS[TILE_SEED], hex);
        self
    }
}

/// Derives the key for a seed at a hex.
fn mix(seed: u64, hex: Hex) -> u64
{
    let mut hasher = DefaultHasher::new();
    hasher.write_u64(seed);
    hasher.write_i32(hex.q());
    hasher.write_i32(hex.r());
    hasher.finish()
}
