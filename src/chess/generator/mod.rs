use dashmap::DashMap;

use crate::prelude::*;

mod pseudo;

pub(crate) use pseudo::attacks;

/// Identifies one piece in one position.
type CacheKey = (ZobristHash, Piece);

/// Produces the moves a piece may make.
///
/// The generator holds no board of its own: every legality pass simulates on a private copy of the board it was given, so a
/// single generator can be shared freely between threads.
pub struct MoveGenerator
{
    /// Remembers legal moves per position; `None` when caching is disabled.
    cache:    Option<DashMap<CacheKey, Vec<Move>>>,
    capacity: usize,
}

impl Default for MoveGenerator
{
    fn default() -> Self
    {
        MoveGenerator::new()
    }
}

impl std::fmt::Debug for MoveGenerator
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "MoveGenerator {{ cached: {}, capacity: {} }}", self.cached(), self.capacity)
    }
}

impl MoveGenerator
{
    /// The candidate moves of the piece that capture something, ignoring whether they would expose its own king.
    pub fn attacks(&self, board: &Board, piece: &Piece) -> Vec<Move>
    {
        pseudo::attacks(board, piece)
    }

    /// The legal moves of the piece: its candidate moves, minus any that would leave its own king attacked.
    ///
    /// Each retained move is flagged [MoveFlag::Check] if it leaves the opposing king attacked. If the piece does not stand
    /// on the board as described, there are no moves.
    pub fn available_moves(&self, board: &Board, piece: &Piece) -> Vec<Move>
    {
        if board.piece_at(piece.position) != Some(piece)
        {
            log::warn!("asked for the moves of {}, which is not on the board", piece);
            return Vec::new();
        }

        let Some(cache) = &self.cache
        else
        {
            return self.legal_moves(board, piece);
        };

        let key = (board.zobrist(), *piece);
        if let Some(hit) = cache.get(&key)
        {
            return hit.value().clone();
        }

        let moves = self.legal_moves(board, piece);
        if cache.len() >= self.capacity
        {
            log::debug!("move cache reached {} entries, clearing", self.capacity);
            cache.clear();
        }
        cache.insert(key, moves.clone());
        moves
    }

    /// The legal moves of every piece of the given color, in piece order.
    pub fn available_moves_for(&self, board: &Board, color: Color) -> Vec<Move>
    {
        board
            .pieces_of(color)
            .flat_map(|piece| self.available_moves(board, piece))
            .collect()
    }

    /// How many positions are currently cached.
    pub fn cached(&self) -> usize
    {
        self.cache.as_ref().map(|cache| cache.len()).unwrap_or(0)
    }

    /// Forgets every cached position.
    pub fn clear_cache(&self)
    {
        if let Some(cache) = &self.cache
        {
            cache.clear();
        }
    }

    /// A generator without a cache.
    pub fn new() -> Self
    {
        MoveGenerator {
            cache:    None,
            capacity: 0,
        }
    }

    /// The candidate moves of the piece, from its movement pattern and the occupancy of the board alone.
    pub fn pseudo_moves(&self, board: &Board, piece: &Piece) -> Vec<Move>
    {
        pseudo::pseudo_moves(board, piece)
    }

    /// A generator that remembers up to `capacity` positions. A capacity of zero disables the cache.
    pub fn with_cache(capacity: usize) -> Self
    {
        if capacity == 0
        {
            return MoveGenerator::new();
        }

        MoveGenerator {
            cache: Some(DashMap::with_capacity(capacity)),
            capacity,
        }
    }
}

impl MoveGenerator
{
    /// Filters the candidate moves by playing each one on a scratch copy of the board and taking it back.
    fn legal_moves(&self, board: &Board, piece: &Piece) -> Vec<Move>
    {
        let candidates = pseudo::pseudo_moves(board, piece);
        let mut scratch = board.clone();
        let mut legal = Vec::with_capacity(candidates.len());

        for mv in candidates
        {
            if let Err(err) = scratch.apply_move(&mv)
            {
                log::warn!("generated a move the board rejects: {}", err);
                continue;
            }

            let exposed = scratch.is_check(piece.color);
            let gives_check = !exposed && scratch.is_check(piece.color.opposite());

            if let Err(err) = scratch.undo_move(&mv)
            {
                log::warn!("could not take back a simulated move, recopying: {}", err);
                scratch.deep_copy_from(board);
            }

            log::trace!("simulated {}: exposed {}, gives check {}", mv, exposed, gives_check);

            if !exposed
            {
                let mut kept = mv;
                if gives_check
                {
                    kept.flags.insert(MoveFlag::Check);
                }
                legal.push(kept);
            }
        }

        legal
    }
}
