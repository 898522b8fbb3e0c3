use crate::prelude::*;

mod flags;

pub use flags::{MoveFlag, MoveFlags};

#[derive(Clone, Copy, Debug)]
/// A transition of one piece from one hex to another.
///
/// Moves are values: once built they do not refer back to the board or the piece they came from.
pub struct Move
{
    pub color:    Color,
    pub role:     Role,
    pub from:     Hex,
    pub to:       Hex,
    pub flags:    MoveFlags,
    /// The role of the piece standing on `to`; only set when the move captures.
    pub captured: Option<Role>,
}

impl Move
{
    /// The "no move available" value. Its hexes are the sentinel, so it is never a real transition.
    pub const NONE: Move = Move {
        color:    Color::White,
        role:     Role::King,
        from:     Hex::NONE,
        to:       Hex::NONE,
        flags:    MoveFlags::EMPTY,
        captured: None,
    };

    /// A move that takes whatever stands on the destination.
    pub fn capture(piece: &Piece, to: Hex, captured: Role) -> Move
    {
        Move {
            flags: MoveFlag::Capture.into(),
            captured: Some(captured),
            ..Move::quiet(piece, to)
        }
    }

    pub fn is_capture(&self) -> bool
    {
        self.flags.contains(MoveFlag::Capture)
    }

    /// Whether this is the [Move::NONE] value.
    pub fn is_none(&self) -> bool
    {
        self.from.is_none() || self.to.is_none()
    }

    /// Whether two moves carry the same piece between the same hexes, whatever their flags say.
    pub fn matches(&self, other: &Move) -> bool
    {
        self.color == other.color && self.role == other.role && self.from == other.from && self.to == other.to
    }

    /// The piece as it stands before the move.
    pub fn mover(&self) -> Piece
    {
        Piece::new(self.color, self.role, self.from)
    }

    /// A move onto an empty hex.
    pub fn quiet(piece: &Piece, to: Hex) -> Move
    {
        Move {
            color: piece.color,
            role: piece.role,
            from: piece.position,
            to,
            flags: MoveFlags::EMPTY,
            captured: None,
        }
    }
}

/// Two moves are the same move when they agree on everything but the captured role,
/// which is derived from the board rather than chosen by the mover.
impl PartialEq for Move
{
    fn eq(&self, other: &Self) -> bool
    {
        self.color == other.color && self.role == other.role && self.from == other.from && self.to == other.to && self.flags == other.flags
    }
}

impl Eq for Move {}

impl std::hash::Hash for Move
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H)
    {
        self.color.hash(state);
        self.role.hash(state);
        self.from.hash(state);
        self.to.hash(state);
        self.flags.hash(state);
    }
}

impl Default for Move
{
    fn default() -> Self
    {
        Move::NONE
    }
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let s: MoveString = (*self).into();
        s.fmt(f)
    }
}
