mod common;
use common::*;

#[cfg(test)]
mod parsing
{
    use hexchess::prelude::*;

    use super::*;

    #[test]
    fn pieces()
    {
        let _setup = setup::setup();

        let king = templates::piece("wK(0,0)");
        assert_eq!(king, Piece::new(Color::White, Role::King, Hex::ORIGIN));
        assert_eq!(king.to_string(), "wK(0,0,0)");
        assert_eq!(templates::piece("bN(1,2,-3)").opponent(), Color::White);

        assert!("xK(0,0)".parse::<Piece>().is_err());
        assert!("wZ(0,0)".parse::<Piece>().is_err());
        assert!("wK(0,0,1)".parse::<Piece>().is_err());
    }

    #[test]
    fn colors_and_roles()
    {
        let _setup = setup::setup();

        assert_eq!("white".parse::<Color>().unwrap(), Color::White);
        assert_eq!("b".parse::<Color>().unwrap(), Color::Black);
        assert!("red".parse::<Color>().is_err());

        for role in Role::all()
        {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
        assert_eq!(Role::Knight.long(), "Knight");
    }

    #[test]
    fn move_strings()
    {
        let _setup = setup::setup();
        let rook = templates::piece("wR(0,0)");

        let quiet = Move::quiet(&rook, Hex::axial(0, 2));
        assert_eq!(quiet.to_string(), "wR(0,0,0)-(0,2,-2)");

        let capture = Move::capture(&rook, Hex::axial(0, 2), Role::Knight);
        assert_eq!(capture.to_string(), "wR(0,0,0)xN(0,2,-2)");
        assert_eq!(capture.to_string().parse::<Move>().unwrap().captured, Some(Role::Knight));

        assert_eq!("wR(0,0)-(0,2)".parse::<Move>().unwrap(), quiet);
        assert_eq!(Move::NONE.to_string(), "none");
        assert_eq!(Move::default(), Move::NONE);

        let checking = "wR(0,0)xN(0,2)+".parse::<Move>().unwrap();
        assert!(checking.flags.contains(MoveFlag::Check));
        assert!(checking.is_capture());
    }

    #[test]
    fn malformed_moves()
    {
        let _setup = setup::setup();

        assert!("(0,0)-(0,1)".parse::<MoveString>().is_ok());
        assert!("wR(0,0)-(0,0)".parse::<MoveString>().is_err());
        assert!("wR(0,0)~(0,1)".parse::<MoveString>().is_err());
        assert!("wR(0,0)-(0,1)?".parse::<MoveString>().is_err());

        // Without a board, the piece must be named.
        assert!("(0,0)-(0,1)".parse::<Move>().is_err());
        assert!("wR(0,0)x(0,1)".parse::<Move>().is_err());
    }

    #[test]
    fn resolve_against_a_board()
    {
        let _setup = setup::setup();
        let board = Puzzle::basic().board().unwrap();
        let resolve = |s: &str| Move::resolve(&s.parse::<MoveString>().unwrap(), &board);

        let step = resolve("(0,0)-(0,1)").unwrap();
        assert_eq!((step.color, step.role, step.is_capture()), (Color::White, Role::King, false));

        let take = resolve("(0,0)x(1,0)").unwrap();
        assert_eq!(take.captured, Some(Role::King));

        assert_eq!(resolve("(0,0)-(1,0)").unwrap_err().kind, Kind::InvalidMove);
        assert_eq!(resolve("(0,0)x(0,1)").unwrap_err().kind, Kind::InvalidMove);
        assert_eq!(resolve("(2,2)-(2,1)").unwrap_err().kind, Kind::InvalidMove);
        assert_eq!(resolve("bK(0,0)-(0,1)").unwrap_err().kind, Kind::InvalidMove);
        assert!(resolve("(0,0)xQ(1,0)").is_err());
    }

    #[test]
    fn flags()
    {
        let _setup = setup::setup();

        let mut flags = MoveFlags::EMPTY;
        assert!(flags.is_empty());
        assert_eq!(flags.to_string(), "None");

        flags.insert(MoveFlag::Capture);
        flags.insert(MoveFlag::Check);
        assert!(flags.contains(MoveFlag::Check));
        assert!(!flags.contains(MoveFlag::Promotion));
        assert_eq!(flags.list().as_slice(), &[MoveFlag::Capture, MoveFlag::Check]);
        assert_eq!(flags.to_string(), "Capture|Check");

        flags.remove(MoveFlag::Capture);
        assert_eq!(flags, MoveFlags::from(MoveFlag::Check));
        assert_eq!([MoveFlag::Check].into_iter().collect::<MoveFlags>(), flags);
    }
}
