use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

lazy_static! {
    static ref MOVE_PATTERN: Regex = Regex::new(
        r"^(?<piece>(?<color>[wb])(?<role>[PRNBQK]))?(?<from>\([^()]*\))(?:(?<quiet>-)|x(?<captured>[PRNBQK])?)(?<to>\([^()]*\))(?<suffix>[+#]?)$"
    )
    .unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents a syntactically-valid move string.
///
/// The full form names the mover and any captured role, as in `wR(0,0,0)xN(0,2,-2)+`. Against a board, the mover and
/// the captured role may be left out, as in `(0,0)x(0,2)`.
///
/// You can't prove validity of a particular string in a vacuum, you need a board.
pub struct MoveString(String);

/// The pieces of a move string, as written.
struct Parts
{
    piece:   Option<(Color, Role)>,
    from:    Hex,
    to:      Hex,
    capture: Option<Option<Role>>,
    flags:   MoveFlags,
}

impl MoveString
{
    fn parts(&self) -> Result<Parts>
    {
        let s = self.0.as_str();
        let Some(caps) = MOVE_PATTERN.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let piece = match (caps.name("color"), caps.name("role"))
        {
            | (Some(color), Some(role)) =>
            {
                let color = color.as_str().parse::<Color>().map_err(|err| err.chain_parse::<Self>(s.into()))?;
                let role = role.as_str().parse::<Role>().map_err(|err| err.chain_parse::<Self>(s.into()))?;
                Some((color, role))
            }
            | _ => None,
        };

        let from = caps["from"].parse::<Hex>().map_err(|err| err.chain_parse::<Self>(s.into()))?;
        let to = caps["to"].parse::<Hex>().map_err(|err| err.chain_parse::<Self>(s.into()))?;

        if from == to
        {
            let err = Error::new(Kind::ParseError, format!("A move cannot start and end on hex {}.", from));
            return Err(err.chain_parse::<Self>(s.into()));
        }

        let capture = if caps.name("quiet").is_some()
        {
            None
        }
        else
        {
            let captured = caps
                .name("captured")
                .map(|role| role.as_str().parse::<Role>())
                .transpose()
                .map_err(|err| err.chain_parse::<Self>(s.into()))?;
            Some(captured)
        };

        let flags = match &caps["suffix"]
        {
            | "+" => MoveFlag::Check.into(),
            | "#" => MoveFlag::Checkmate.into(),
            | _ => MoveFlags::EMPTY,
        };

        Ok(Parts {
            piece,
            from,
            to,
            capture,
            flags,
        })
    }
}

impl FromStr for MoveString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let movestr = MoveString(s.trim().to_owned());
        movestr.parts()?;
        Ok(movestr)
    }
}

impl AsRef<str> for MoveString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}

impl std::fmt::Display for MoveString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl From<Move> for MoveString
{
    fn from(value: Move) -> MoveString
    {
        if value.is_none()
        {
            return MoveString("none".into());
        }

        let separator = match (value.is_capture(), value.captured)
        {
            | (true, Some(role)) => format!("x{}", role),
            | (true, None) => "x".into(),
            | (false, _) => "-".into(),
        };

        let suffix = if value.flags.contains(MoveFlag::Checkmate)
        {
            "#"
        }
        else if value.flags.contains(MoveFlag::Check)
        {
            "+"
        }
        else
        {
            ""
        };

        MoveString(format!(
            "{}{}{}{}{}{}",
            value.color.short(),
            value.role,
            value.from,
            separator,
            value.to,
            suffix
        ))
    }
}

/// Reads a move in full notation, without a board.
impl FromStr for Move
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let parts = s.parse::<MoveString>()?.parts()?;

        let Some((color, role)) = parts.piece
        else
        {
            let err = Error::new(Kind::ParseError, "Without a board, a move must name its piece.".into());
            return Err(err.chain_parse::<Self>(s.into()));
        };

        let mover = Piece::new(color, role, parts.from);
        let mut mv = match parts.capture
        {
            | None => Move::quiet(&mover, parts.to),
            | Some(Some(captured)) => Move::capture(&mover, parts.to, captured),
            | Some(None) =>
            {
                let err = Error::new(Kind::ParseError, "Without a board, a capture must name the captured role.".into());
                return Err(err.chain_parse::<Self>(s.into()));
            }
        };

        parts.flags.list().into_iter().for_each(|flag| mv.flags.insert(flag));
        Ok(mv)
    }
}

impl Move
{
    /// Attempts to disambiguate a MoveString into a Move using a board context.
    ///
    /// Whatever the string leaves out is read off the board; whatever it spells out must agree with the board.
    pub fn resolve(movestr: &MoveString, board: &Board) -> Result<Move>
    {
        let parts = movestr.parts()?;
        let base = Error::new(Kind::InvalidMove, format!("Move {} does not fit the position.", movestr));

        let Some(mover) = board.piece_at(parts.from).copied()
        else
        {
            let err = Error::new(Kind::MissingPiece, format!("No piece stands on hex {}.", parts.from));
            return Err(err.chain(base));
        };

        if let Some((color, role)) = parts.piece
        {
            if color != mover.color || role != mover.role
            {
                let err = Error::new(
                    Kind::MismatchError,
                    format!("Hex {} holds {}, not {}{}.", parts.from, mover, color.short(), role),
                );
                return Err(err.chain(base));
            }
        }

        let occupant = board.piece_at(parts.to).copied();
        let mut mv = match (parts.capture, occupant)
        {
            | (None, None) => Move::quiet(&mover, parts.to),
            | (None, Some(occupant)) =>
            {
                let err = Error::new(
                    Kind::InvalidMove,
                    format!("Hex {} is occupied by {}, so the move must be written as a capture.", parts.to, occupant),
                );
                return Err(err.chain(base));
            }
            | (Some(_), None) =>
            {
                let err = Error::new(Kind::InvalidMove, format!("There is nothing to capture on hex {}.", parts.to));
                return Err(err.chain(base));
            }
            | (Some(expected), Some(occupant)) =>
            {
                if occupant.color == mover.color
                {
                    let err = Error::new(Kind::InvalidMove, format!("{} cannot capture friendly piece {}.", mover, occupant));
                    return Err(err.chain(base));
                }

                if let Some(role) = expected
                {
                    if role != occupant.role
                    {
                        return Err(Error::mismatch::<Role>(role, occupant.role).chain(base));
                    }
                }

                Move::capture(&mover, parts.to, occupant.role)
            }
        };

        parts.flags.list().into_iter().for_each(|flag| mv.flags.insert(flag));
        Ok(mv)
    }
}
