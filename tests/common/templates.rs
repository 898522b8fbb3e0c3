use hexchess::prelude::*;
use itertools::Itertools;

/// Builds a board on the radius-4 hexagon from piece notation such as `wK(0,0)`.
pub fn board(pieces: &[&str]) -> Board
{
    board_with_radius(4, pieces)
}

/// Builds a board on a hexagon of the given radius from piece notation.
pub fn board_with_radius(radius: i32, pieces: &[&str]) -> Board
{
    let pieces = pieces.iter().map(|s| piece(s)).collect::<Vec<Piece>>();
    let possibly_board = Board::from_parts(&hex::map(radius), &pieces);
    assert!(possibly_board.is_ok(), "\tdue to {}", possibly_board.unwrap_err());
    possibly_board.unwrap()
}

/// Parses a hex, panicking on bad test input.
pub fn hex(s: &str) -> Hex
{
    s.parse::<Hex>().unwrap()
}

/// Parses a piece, panicking on bad test input.
pub fn piece(s: &str) -> Piece
{
    s.parse::<Piece>().unwrap()
}

/// The pieces of a board, in a canonical order.
pub fn sorted_pieces(board: &Board) -> Vec<Piece>
{
    board.pieces().iter().copied().sorted_by_key(|piece| (piece.position, piece.color, piece.role)).collect()
}

/// The destinations of some moves, in a canonical order.
pub fn targets(moves: &[Move]) -> Vec<Hex>
{
    moves.iter().map(|mv| mv.to).sorted().collect()
}

/// Asserts that every legal move of every piece keeps its own king safe.
pub fn assert_legal_moves_are_safe(board: &Board)
{
    let generator = MoveGenerator::new();
    for piece in board.pieces()
    {
        for mv in generator.available_moves(board, piece)
        {
            let mut copy = board.clone();
            copy.apply_move(&mv).unwrap();
            assert!(!copy.is_check(piece.color), "{} leaves its own king in check", mv);
        }
    }
}
