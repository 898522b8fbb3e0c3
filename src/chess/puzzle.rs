use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A starting position: the tiles in play, the pieces on them, and optionally the line of moves that solves it.
pub struct Puzzle
{
    pub tiles:    Vec<Hex>,
    pub pieces:   Vec<Piece>,
    pub solution: Vec<Move>,
}

impl Puzzle
{
    /// The smallest interesting puzzle: a radius-4 hexagon with two kings side by side.
    pub fn basic() -> Puzzle
    {
        Puzzle {
            tiles:    hex::map(4),
            pieces:   vec![
                Piece::new(Color::White, Role::King, Hex::ORIGIN),
                Piece::new(Color::Black, Role::King, Hex::axial(1, 0)),
            ],
            solution: Vec::new(),
        }
    }

    /// Sets up a fresh board with this puzzle's tiles and pieces.
    pub fn board(&self) -> Result<Board>
    {
        Board::from_parts(&self.tiles, &self.pieces)
    }

    pub fn new(tiles: Vec<Hex>, pieces: Vec<Piece>, solution: Vec<Move>) -> Puzzle
    {
        Puzzle { tiles, pieces, solution }
    }

    /// Replays the solution from the starting position, requiring every move to be legal when it is played.
    ///
    /// Returns the final position.
    pub fn verify_solution(&self, generator: &MoveGenerator) -> Result<Board>
    {
        let mut board = self.board()?;

        for (i, mv) in self.solution.iter().enumerate()
        {
            let base = Error::new(Kind::InvalidMove, format!("Move {} of the solution, {}, is not legal.", i + 1, mv));

            let Some(piece) = board.piece_at(mv.from).copied()
            else
            {
                let err = Error::new(Kind::MissingPiece, format!("No piece stands on hex {}.", mv.from));
                return Err(err.chain(base));
            };

            let Some(legal) = generator
                .available_moves(&board, &piece)
                .into_iter()
                .find(|candidate| candidate.matches(mv))
            else
            {
                let err = Error::new(Kind::InvalidMove, format!("{} has no such move.", piece));
                return Err(err.chain(base));
            };

            board.apply_move(&legal).map_err(|err| err.chain(base))?;
        }

        Ok(board)
    }
}

impl From<&Board> for Puzzle
{
    /// Captures the current position as a puzzle with no solution.
    fn from(board: &Board) -> Self
    {
        Puzzle {
            tiles:    board.tiles().to_vec(),
            pieces:   board.pieces().to_vec(),
            solution: Vec::new(),
        }
    }
}
