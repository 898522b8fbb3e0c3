use clap::Parser;
use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::prelude::*;

#[derive(Clone, Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct ServerOptions
{
    #[arg(long, default_value_t = 4096)]
    /// maximum number of positions in the legal-move cache (0 disables it)
    pub cache_entries: usize,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long)]
    /// puzzle string to load at start-up
    pub puzzle: Option<String>,

    #[arg(short, long)]
    /// seed for randommove, for reproducible sessions
    pub seed: Option<u64>,
}

/// Drives one authoritative board from a line-oriented text protocol.
pub struct Server
{
    options:   ServerOptions,
    board:     Option<Board>,
    generator: MoveGenerator,
    rng:       StdRng,
}

impl Server
{
    /// Gets the board being played on, if a puzzle has been loaded.
    pub fn board(&self) -> Option<&Board>
    {
        self.board.as_ref()
    }

    /// Runs one command line, printing its response. Only fatal errors are returned.
    pub fn command(&mut self, line: &str) -> Result<()>
    {
        let args: Vec<&str> = line.split_whitespace().collect();
        let cmd = *args.first().unwrap_or(&"");
        let rest = if args.is_empty() { &args[..] } else { &args[1..] };
        self.apply(cmd, rest)
    }

    /// Creates a new server with the given capabilities.
    pub fn new(options: ServerOptions) -> Self
    {
        let rng = match options.seed
        {
            | Some(seed) => StdRng::seed_from_u64(seed),
            | None => StdRng::from_entropy(),
        };

        Server {
            generator: MoveGenerator::with_cache(options.cache_entries),
            options: options.clone(),
            board: None,
            rng,
        }
    }

    /// Serves commands from stdin until it closes or a fatal error occurs.
    pub fn run(&mut self) -> Result<()>
    {
        if let Some(puzzle) = self.options.puzzle.clone()
        {
            self.command(&format!("newpuzzle {}", puzzle))?;
        }

        loop
        {
            let mut cmdstr: String = String::new();
            if std::io::stdin().read_line(&mut cmdstr)? == 0
            {
                log::info!("input closed, shutting down");
                return Ok(());
            }

            self.command(&cmdstr)?;
        }
    }
}

impl Server
{
    /// Matches the command to the server's functionality.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()>
    {
        let result = match cmd
        {
            | "" => Ok(()),
            | "attacks" => self.attacks(args),
            | "check" => self.check(args),
            | "history" => self.history(),
            | "info" => self.info(),
            | "newpuzzle" => self.new_puzzle(args),
            | "pieces" => self.pieces(),
            | "play" => self.play_move(args),
            | "position" => self.position(),
            | "randommove" => self.random_move(args),
            | "redo" => self.redo(),
            | "tile" => self.tile(args),
            | "undo" => self.undo(),
            | "validmoves" => self.valid_moves(args),
            | _ => Err(Error::new(Kind::UnrecognizedCommand, cmd.into())),
        };

        match result
        {
            | Ok(_) =>
            {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            }
            | Err(err) => match err.fatal()
            {
                | true =>
                {
                    let _ = self.err(&err);
                    Err(err)
                }
                | false =>
                {
                    log::warn!("encountered recoverable error:\n{err}");
                    self.err(&err)
                }
            },
        }
    }

    /// Lists the capturing moves of the piece on the given hex, pins included.
    fn attacks(&self, args: &[&str]) -> Result<()>
    {
        let board = self.ensure_started()?;
        let piece = self.piece_arg(board, args)?;
        println!("{}", Server::move_list(&self.generator.attacks(board, &piece)));
        Ok(())
    }

    /// Reports whether the given side's king is attacked.
    fn check(&self, args: &[&str]) -> Result<()>
    {
        let Some(arg) = args.first()
        else
        {
            return Err(Error::new(Kind::ParseError, "You must provide a color.".into()));
        };

        let color = arg.parse::<Color>()?;
        let board = self.ensure_started()?;
        println!("{}", board.is_check(color));
        Ok(())
    }

    /// Ensures there is a board loaded on this server.
    fn ensure_started(&self) -> Result<&Board>
    {
        match self.board.as_ref()
        {
            | Some(b) => Ok(b),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Ensures there is a board loaded on this server.
    fn ensure_started_mut(&mut self) -> Result<&mut Board>
    {
        match self.board.as_mut()
        {
            | Some(b) => Ok(b),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Prints an error to the output stream.
    fn err(&self, err: &Error) -> Result<()>
    {
        println!("err\n{}", err);
        self.ok()
    }

    /// Prints the moves played so far.
    fn history(&self) -> Result<()>
    {
        let board = self.ensure_started()?;
        println!("{}", Server::move_list(board.moves()));
        Ok(())
    }

    /// Prints the server's ID.
    fn info(&self) -> Result<()>
    {
        println!("id {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        Ok(())
    }

    /// Finds the legal move matching the given one, so that its flags are the engine's rather than the caller's.
    fn legal_match(&self, board: &Board, mv: &Move) -> Result<Move>
    {
        self.generator
            .available_moves(board, &mv.mover())
            .into_iter()
            .find(|candidate| candidate.matches(mv))
            .ok_or_else(|| Error::new(Kind::InvalidMove, format!("Move {} is not legal in this position.", mv)))
    }

    /// Formats moves for output.
    fn move_list(moves: &[Move]) -> String
    {
        if moves.is_empty()
        {
            "none".into()
        }
        else
        {
            moves.iter().join(";")
        }
    }

    /// Loads a puzzle, or the basic puzzle when none is given.
    fn new_puzzle(&mut self, args: &[&str]) -> Result<()>
    {
        let puzzle = if args.is_empty()
        {
            Puzzle::basic()
        }
        else
        {
            args.join(" ").parse::<Puzzle>()?
        };

        self.board = Some(puzzle.board()?);
        println!("{}", puzzle);
        Ok(())
    }

    /// Prints the ok footer to the output stream.
    fn ok(&self) -> Result<()>
    {
        println!("ok");
        Ok(())
    }

    /// Finds the piece on the hex given as the first argument.
    fn piece_arg(&self, board: &Board, args: &[&str]) -> Result<Piece>
    {
        let Some(arg) = args.first()
        else
        {
            return Err(Error::new(Kind::ParseError, "You must provide a hex.".into()));
        };

        let hex = arg.parse::<Hex>()?;
        board
            .piece_at(hex)
            .copied()
            .ok_or_else(|| Error::new(Kind::MissingPiece, format!("No piece stands on hex {}.", hex)))
    }

    /// Lists the pieces in play.
    fn pieces(&self) -> Result<()>
    {
        let board = self.ensure_started()?;
        println!("{}", board);
        Ok(())
    }

    /// Plays the given move on the current board, if it is legal.
    fn play_move(&mut self, args: &[&str]) -> Result<()>
    {
        if args.is_empty()
        {
            return Err(Error::new(Kind::ParseError, "You must provide a MoveString.".into()));
        }

        let movestr = args.join(" ").parse::<MoveString>()?;
        let board = self.ensure_started()?;
        let mv = Move::resolve(&movestr, board)?;
        let legal = self.legal_match(board, &mv)?;

        self.ensure_started_mut()?.apply_move(&legal)?;
        println!("{}", legal);
        Ok(())
    }

    /// Prints the whole position.
    fn position(&self) -> Result<()>
    {
        let board = self.ensure_started()?;
        println!("{:#?}", board);
        Ok(())
    }

    /// Plays a uniformly random legal move for the given side.
    fn random_move(&mut self, args: &[&str]) -> Result<()>
    {
        let Some(arg) = args.first()
        else
        {
            return Err(Error::new(Kind::ParseError, "You must provide a color.".into()));
        };

        let color = arg.parse::<Color>()?;
        let board = self.ensure_started()?;
        let moves = self.generator.available_moves_for(board, color);

        let Some(mv) = moves.choose(&mut self.rng).copied()
        else
        {
            return Err(Error::new(Kind::InvalidState, format!("{} has no legal moves.", color)));
        };

        self.ensure_started_mut()?.apply_move(&mv)?;
        println!("{}", mv);
        Ok(())
    }

    /// Replays the most recently undone move.
    fn redo(&mut self) -> Result<()>
    {
        let mv = self.ensure_started_mut()?.redo_move()?;
        println!("{}", mv);
        Ok(())
    }

    /// Finds the hex under a point of the drawn board.
    fn tile(&self, args: &[&str]) -> Result<()>
    {
        let [x, y] = args
        else
        {
            return Err(Error::new(Kind::ParseError, "You must provide two coordinates.".into()));
        };

        let x = x.parse::<f32>().map_err(|_| Error::for_parse::<f32>(x.to_string()))?;
        let y = y.parse::<f32>().map_err(|_| Error::for_parse::<f32>(y.to_string()))?;
        let hex = Hex::from_pixel(Point::new(x, y))?;

        let board = self.ensure_started()?;
        match (board.contains(hex), board.piece_at(hex))
        {
            | (false, _) => println!("{} off", hex),
            | (true, None) => println!("{} empty", hex),
            | (true, Some(piece)) => println!("{} {}", hex, piece),
        }
        Ok(())
    }

    /// Takes back the last move.
    fn undo(&mut self) -> Result<()>
    {
        let board = self.ensure_started_mut()?;
        let Some(last) = board.last_move()
        else
        {
            return Err(Error::new(Kind::NothingToUndo, "No move has been played.".into()));
        };

        board.undo_move(&last)?;
        println!("{}", last);
        Ok(())
    }

    /// Lists the legal moves of the piece on the given hex.
    fn valid_moves(&self, args: &[&str]) -> Result<()>
    {
        let board = self.ensure_started()?;
        let piece = self.piece_arg(board, args)?;
        println!("{}", Server::move_list(&self.generator.available_moves(board, &piece)));
        Ok(())
    }
}
