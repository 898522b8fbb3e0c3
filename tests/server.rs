mod common;
use common::*;

#[cfg(test)]
mod session
{
    use hexchess::prelude::*;

    use super::*;

    fn server() -> Server
    {
        Server::new(ServerOptions {
            seed: Some(7),
            cache_entries: 16,
            ..Default::default()
        })
    }

    #[test]
    fn recoverable_errors_keep_the_session()
    {
        let _setup = setup::setup();
        let mut server = server();

        assert!(server.command("info").is_ok());
        assert!(server.command("frobnicate").is_ok());
        assert!(server.command("play (0,0)-(0,1)").is_ok());
        assert!(server.board().is_none());
        assert!(server.command("").is_ok());
    }

    #[test]
    fn coordinates_out_of_range_are_recoverable()
    {
        let _setup = setup::setup();
        let mut server = server();
        server.command("newpuzzle").unwrap();

        for cmd in [
            "validmoves (2147483647,2)",
            "attacks (-2147483648,0)",
            "play wK(0,0)-(2147483647,2)",
            "tile 1e30 1e30",
            "tile NaN 0",
            "tile inf -inf",
            "newpuzzle Hex2147483647;wK(0,0)",
        ]
        {
            assert!(server.command(cmd).is_ok(), "{}", cmd);
        }

        assert_eq!(server.board().unwrap().pieces().len(), 2);
        assert!(server.board().unwrap().moves().is_empty());
    }

    #[test]
    fn play_undo_redo()
    {
        let _setup = setup::setup();
        let mut server = server();

        server.command("newpuzzle").unwrap();
        assert_eq!(server.board().unwrap().pieces().len(), 2);

        server.command("play (0,0)x(1,0)").unwrap();
        assert_eq!(server.board().unwrap().pieces().len(), 1);

        server.command("undo").unwrap();
        assert_eq!(server.board().unwrap().pieces().len(), 2);

        server.command("redo").unwrap();
        assert_eq!(server.board().unwrap().moves().len(), 1);

        for cmd in ["pieces", "position", "history", "check white", "validmoves (0,0)", "attacks (1,0)", "tile 0.1 0.1"]
        {
            assert!(server.command(cmd).is_ok());
        }
    }

    #[test]
    fn illegal_moves_are_refused()
    {
        let _setup = setup::setup();
        let mut server = server();

        server.command("newpuzzle Hex4;wK(0,0) bR(0,3) wR(2,0)").unwrap();
        server.command("play wR(2,0)-(3,0)").unwrap();
        assert!(server.board().unwrap().moves().is_empty());

        server.command("play wR(2,0)-(0,2)").unwrap();
        assert_eq!(server.board().unwrap().moves().len(), 1);
    }

    #[test]
    fn random_moves_are_legal()
    {
        let _setup = setup::setup();
        let mut server = server();

        server.command("newpuzzle Hex4;wK(0,-3) wN(0,0) bK(0,3) bB(1,1)").unwrap();
        for color in ["white", "black", "white", "black"]
        {
            server.command(&format!("randommove {}", color)).unwrap();
        }

        let board = server.board().unwrap();
        assert_eq!(board.moves().len(), 4);
        for (mv, color) in board.moves().iter().zip([Color::White, Color::Black, Color::White, Color::Black])
        {
            assert_eq!(mv.color, color);
        }
    }
}
