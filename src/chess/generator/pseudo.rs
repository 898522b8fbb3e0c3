use crate::prelude::*;

/// What a piece finds on a hex it tries to move to.
enum Landing
{
    /// The hex is not a tile of this board.
    Off,
    Empty,
    Friend,
    Enemy(Role),
}

/// Looks at a destination from the perspective of the moving piece.
fn landing(board: &Board, piece: &Piece, to: Hex) -> Landing
{
    if !board.contains(to)
    {
        return Landing::Off;
    }

    match board.piece_at(to)
    {
        | None => Landing::Empty,
        | Some(occupant) if occupant.color == piece.color => Landing::Friend,
        | Some(occupant) => Landing::Enemy(occupant.role),
    }
}

/// Generates every candidate move of the piece by walking its role's motions in order. Own-king safety is not considered.
pub fn pseudo_moves(board: &Board, piece: &Piece) -> Vec<Move>
{
    let mut moves = Vec::new();
    for motion in piece.role.motions()
    {
        match motion
        {
            | Motion::Slide(vectors) => slide_into(board, piece, vectors, &mut moves),
            | Motion::Leap(vectors) => leap_into(board, piece, vectors, &mut moves),
            | Motion::March => march_into(board, piece, &mut moves),
        }
    }
    moves
}

/// The candidate moves of the piece that capture something.
pub fn attacks(board: &Board, piece: &Piece) -> Vec<Move>
{
    pseudo_moves(board, piece).into_iter().filter(|mv| mv.is_capture()).collect()
}

/// Takes each vector once, landing on empty tiles or enemies.
fn leap_into(board: &Board, piece: &Piece, vectors: &[Hex], moves: &mut Vec<Move>)
{
    for vector in vectors
    {
        let to = piece.position + *vector;
        match landing(board, piece, to)
        {
            | Landing::Empty => moves.push(Move::quiet(piece, to)),
            | Landing::Enemy(role) => moves.push(Move::capture(piece, to, role)),
            | Landing::Off | Landing::Friend => (),
        }
    }
}

/// Steps forward onto an empty tile, and captures on either forward flank.
fn march_into(board: &Board, piece: &Piece, moves: &mut Vec<Move>)
{
    let ahead = piece.position.neighbour(piece.color.forward());
    if let Landing::Empty = landing(board, piece, ahead)
    {
        moves.push(Move::quiet(piece, ahead));
    }

    for vector in piece.color.pawn_captures()
    {
        let to = piece.position + vector;
        if let Landing::Enemy(role) = landing(board, piece, to)
        {
            moves.push(Move::capture(piece, to, role));
        }
    }
}

/// Repeats each vector until the walk leaves the tiles or meets a piece. An enemy is captured and ends the walk.
fn slide_into(board: &Board, piece: &Piece, vectors: &[Hex], moves: &mut Vec<Move>)
{
    for vector in vectors
    {
        let mut to = piece.position + *vector;
        loop
        {
            match landing(board, piece, to)
            {
                | Landing::Empty => moves.push(Move::quiet(piece, to)),
                | Landing::Enemy(role) =>
                {
                    moves.push(Move::capture(piece, to, role));
                    break;
                }
                | Landing::Off | Landing::Friend => break,
            }
            to += *vector;
        }
    }
}
