use std::collections::HashSet;

use crate::prelude::*;

mod checks;
mod ensures;
mod history;
mod printers;
mod zobrist;

pub use history::History;
pub use zobrist::ZobristHash;
use zobrist::ZobristTable;

#[derive(Clone, Default)]
/// The authoritative state of a game: where play may happen, what stands where, and how it got there.
pub struct Board
{
    /// The playable hexes, in the order the puzzle supplied them. Fixed once the board is initialized.
    tiles: Vec<Hex>,

    /// We also keep a fast set of the same hexes for membership tests during move generation.
    field: HashSet<Hex>,

    /// The pieces in play. Their order carries no meaning, but no two of them ever share a hex.
    pieces: Vec<Piece>,

    /// The moves applied so far, with a redo stack for moves taken back.
    history: History,

    /// A utility to calculate zobrist hashes for this board.
    zobrist: ZobristTable,
}

impl PartialEq for Board
{
    fn eq(&self, other: &Self) -> bool
    {
        // Cheapest first; the piece comparison ignores order.
        self.zobrist == other.zobrist
            && self.field == other.field
            && self.history.moves() == other.history.moves()
            && self.pieces.len() == other.pieces.len()
            && self.pieces.iter().collect::<HashSet<_>>() == other.pieces.iter().collect::<HashSet<_>>()
    }
}

impl Eq for Board {}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.pretty(f)
        }
        else
        {
            self.debug(f)
        }
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "Board of {} tiles", self.tiles.len())?;
        for piece in &self.pieces
        {
            write!(f, "\n\t{}: {} {}", piece.position, piece.color, piece.role.long())?;
        }
        Ok(())
    }
}

impl std::hash::Hash for Board
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H)
    {
        self.zobrist.get().hash(state)
    }
}

impl Board
{
    /// Applies a move to the board.
    ///
    /// The mover must stand on `from` with the move's color and role, `to` must be a tile, and the capture flag must agree
    /// with what stands on `to`. If any of that fails, the board is left exactly as it was.
    pub fn apply_move(&mut self, mv: &Move) -> Result<()>
    {
        let index = self.ensure_applicable(mv).map_err(|err| {
            let base = Error::new(err.kind, format!("Cannot apply move {}.", mv));
            log::warn!("rejected move {}: {}", mv, err);
            err.chain(base)
        })?;

        self.apply_unchecked(index, mv);
        Ok(())
    }

    /// Determines whether the hex is one of this board's tiles.
    pub fn contains(&self, hex: Hex) -> bool
    {
        self.field.contains(&hex)
    }

    /// Overwrites this board with an independent copy of another, reusing this board's allocations.
    pub fn deep_copy_from(&mut self, other: &Board)
    {
        self.tiles.clone_from(&other.tiles);
        self.field.clone_from(&other.field);
        self.pieces.clone_from(&other.pieces);
        self.history.clone_from(&other.history);
        self.zobrist = other.zobrist;
    }

    /// Creates and initializes a board in one step.
    pub fn from_parts(tiles: &[Hex], pieces: &[Piece]) -> Result<Board>
    {
        let mut board = Board::new();
        board.init_board(tiles, pieces)?;
        Ok(board)
    }

    /// Gets the history of this game.
    pub fn history(&self) -> &History
    {
        &self.history
    }

    /// Replaces the tiles and pieces with copies of the given ones and forgets every move.
    ///
    /// Fails without touching the board if a tile is listed twice, two pieces share a hex, or a piece stands off the tiles.
    pub fn init_board(&mut self, tiles: &[Hex], pieces: &[Piece]) -> Result<()>
    {
        Board::ensure_layout(tiles, pieces).map_err(|err| {
            let base = Error::new(Kind::InvalidState, "Cannot initialize the board from this layout.".into());
            err.chain(base)
        })?;

        self.tiles = tiles.to_vec();
        self.field = tiles.iter().copied().collect();
        self.pieces = pieces.to_vec();
        self.history.clear();

        self.zobrist.reset();
        for tile in &self.tiles
        {
            self.zobrist.tile(*tile);
        }
        for piece in &self.pieces
        {
            self.zobrist.hash(piece);
        }

        log::debug!("initialized board with {} tiles and {} pieces", self.tiles.len(), self.pieces.len());
        Ok(())
    }

    /// Whether [Board::init_board] has given this board any tiles.
    pub fn is_initialized(&self) -> bool
    {
        !self.tiles.is_empty()
    }

    /// Determines whether the hex is a tile and nothing stands on it.
    pub fn is_tile_available(&self, pos: Hex) -> bool
    {
        self.contains(pos) && self.piece_at(pos).is_none()
    }

    /// Determines whether a piece of the other color stands on the hex.
    pub fn is_tile_occupied_by_opponent(&self, pos: Hex, color: Color) -> bool
    {
        self.piece_at(pos).map(|piece| piece.color != color).unwrap_or(false)
    }

    /// Finds the kings of the given color. Puzzles may have none, or more than one.
    pub fn kings(&self, color: Color) -> impl Iterator<Item = &Piece>
    {
        self.pieces_of(color).filter(|piece| piece.role == Role::King)
    }

    /// Gets the most recently applied move, if any.
    pub fn last_move(&self) -> Option<Move>
    {
        self.history.prev()
    }

    /// Gets the applied moves, oldest first.
    pub fn moves(&self) -> &[Move]
    {
        self.history.moves()
    }

    /// Creates an empty, uninitialized board.
    pub fn new() -> Board
    {
        Board::default()
    }

    /// Gets the piece standing on the hex, if any.
    pub fn piece_at(&self, pos: Hex) -> Option<&Piece>
    {
        self.pieces.iter().find(|piece| piece.position == pos)
    }

    /// Gets every piece in play.
    pub fn pieces(&self) -> &[Piece]
    {
        &self.pieces
    }

    /// Gets the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece>
    {
        self.pieces.iter().filter(move |piece| piece.color == color)
    }

    /// If a move was undone and nothing else has been played since, plays it again.
    pub fn redo_move(&mut self) -> Result<Move>
    {
        let Some(mv) = self.history.next()
        else
        {
            return Err(Error::new(Kind::NothingToRedo, "No move to redo.".into()));
        };

        self.apply_move(&mv).map_err(Error::internal)?;
        Ok(mv)
    }

    /// Gets the playable hexes, in their original order.
    pub fn tiles(&self) -> &[Hex]
    {
        &self.tiles
    }

    /// Takes back the most recent move.
    ///
    /// The move must equal the last one applied; otherwise nothing changes and the mismatch is reported.
    pub fn undo_move(&mut self, mv: &Move) -> Result<()>
    {
        let (index, last) = self.ensure_undoable(mv).map_err(|err| {
            let base = Error::new(err.kind, format!("Cannot undo move {}.", mv));
            log::warn!("refused to undo {}: {}", mv, err);
            err.chain(base)
        })?;

        self.undo_unchecked(index, &last);
        Ok(())
    }

    /// Gets the key corresponding to this position.
    pub fn zobrist(&self) -> ZobristHash
    {
        self.zobrist.get()
    }
}

/// Private implementation for this board.
impl Board
{
    /// Plays the move onto the board. Assumes [Board::ensure_applicable].
    fn apply_unchecked(&mut self, mut index: usize, mv: &Move)
    {
        let mut played = *mv;

        if mv.is_capture()
        {
            if let Some(at) = self.pieces.iter().position(|piece| piece.position == mv.to)
            {
                let captured = self.pieces.remove(at);
                self.zobrist.hash(&captured);

                // The history always knows what was taken, even if the caller left it out.
                played.captured = Some(captured.role);

                if at < index
                {
                    index -= 1;
                }
            }
        }

        let mover = &mut self.pieces[index];
        self.zobrist.hash(mover);
        mover.position = mv.to;
        self.zobrist.hash(mover);

        log::debug!("applied {}", played);
        self.history.play(played);
    }

    /// Finds the index of a piece by value.
    fn index_of(&self, piece: &Piece) -> Option<usize>
    {
        self.pieces.iter().position(|p| p == piece)
    }

    /// Reverses the move on the board. Assumes [Board::ensure_undoable].
    fn undo_unchecked(&mut self, index: usize, last: &Move)
    {
        let mover = &mut self.pieces[index];
        self.zobrist.hash(mover);
        mover.position = last.from;
        self.zobrist.hash(mover);

        if let (true, Some(role)) = (last.is_capture(), last.captured)
        {
            let restored = Piece::new(last.color.opposite(), role, last.to);
            self.zobrist.hash(&restored);
            self.pieces.push(restored);
        }

        log::debug!("undid {}", last);
        self.history.undo();
    }
}
