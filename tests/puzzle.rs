mod common;
use common::*;

#[cfg(test)]
mod puzzles
{
    use hexchess::prelude::*;

    use super::*;

    #[test]
    fn basic_notation()
    {
        let _setup = setup::setup();

        let parsed = "Hex4;wK(0,0) bK(1,0)".parse::<Puzzle>().unwrap();
        assert_eq!(parsed, Puzzle::basic());
        assert_eq!(Puzzle::basic().to_string(), "Hex4;wK(0,0,0) bK(1,0,-1)");
        assert_eq!(Puzzle::basic().to_string().parse::<Puzzle>().unwrap(), Puzzle::basic());
    }

    #[test]
    fn explicit_tiles()
    {
        let _setup = setup::setup();

        let puzzle = "(0,0) (0,1) (0,2);wR(0,0) bK(0,2)".parse::<Puzzle>().unwrap();
        assert_eq!(puzzle.tiles.len(), 3);
        assert_eq!(puzzle.to_string(), "(0,0,0) (0,1,-1) (0,2,-2);wR(0,0,0) bK(0,2,-2)");

        let board = puzzle.board().unwrap();
        assert!(!board.contains(Hex::axial(1, 0)));
    }

    #[test]
    fn malformed_puzzles()
    {
        let _setup = setup::setup();

        assert_eq!("Hex4;wK(0,0) qK(1,0)".parse::<Puzzle>().unwrap_err().kind, Kind::ParseError);
        assert!("Hexagon;wK(0,0)".parse::<Puzzle>().is_err());
        assert!("(0,0) junk;wK(0,0)".parse::<Puzzle>().is_err());
        assert!("Hex4;wK(0,0);(0,0)-(0,1)".parse::<Puzzle>().is_err());

        // Radii that would overflow or exhaust memory.
        assert_eq!("Hex2147483647;wK(0,0)".parse::<Puzzle>().unwrap_err().kind, Kind::ParseError);
        assert_eq!("Hex100000;wK(0,0)".parse::<Puzzle>().unwrap_err().kind, Kind::ParseError);
        assert_eq!("Hex99999999999;wK(0,0)".parse::<Puzzle>().unwrap_err().kind, Kind::ParseError);
        assert_eq!("(2147483647,2);wK(0,0)".parse::<Puzzle>().unwrap_err().kind, Kind::ParseError);
        assert!("Hex64;wK(0,0)".parse::<Puzzle>().is_ok());

        // Well-formed text, but not a position.
        let stacked = "Hex2;wK(0,0) bK(0,0)".parse::<Puzzle>().unwrap();
        assert!(stacked.board().is_err());
    }

    #[test]
    fn solution_replays()
    {
        let _setup = setup::setup();
        let generator = MoveGenerator::new();

        let puzzle = "Hex4;wK(0,0) bR(0,3) wR(2,0) bK(-3,0);wR(2,0)-(0,2);bR(0,3)xR(0,2)".parse::<Puzzle>().unwrap();
        assert_eq!(puzzle.solution.len(), 2);

        let end = puzzle.verify_solution(&generator).unwrap();
        assert_eq!(end.moves().len(), 2);
        assert_eq!(end.piece_at(Hex::axial(0, 2)), Some(&templates::piece("bR(0,2)")));
        assert!(end.is_check(Color::White));
    }

    #[test]
    fn illegal_solution_is_refused()
    {
        let _setup = setup::setup();
        let generator = MoveGenerator::new();

        // The rook may not wander off while its king is in check.
        let puzzle = "Hex4;wK(0,0) bR(0,3) wR(2,0);wR(2,0)-(3,0)".parse::<Puzzle>().unwrap();
        assert_eq!(puzzle.verify_solution(&generator).unwrap_err().kind, Kind::InvalidMove);

        let ghost = "Hex4;wK(0,0);wQ(1,1)-(1,2)".parse::<Puzzle>().unwrap();
        assert!(ghost.verify_solution(&generator).is_err());
    }

    #[test]
    fn from_board()
    {
        let _setup = setup::setup();
        let board = templates::board(&["wK(0,0)", "bK(1,0)"]);
        let puzzle = Puzzle::from(&board);

        assert!(puzzle.solution.is_empty());
        assert_eq!(puzzle.to_string(), Puzzle::basic().to_string());
        assert_eq!(puzzle.board().unwrap(), board);
    }
}
