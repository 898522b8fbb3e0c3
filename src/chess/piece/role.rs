use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One ingredient of how a piece travels.
pub enum Motion
{
    /// Repeats each vector until leaving the board or meeting a piece.
    Slide(&'static [Hex]),

    /// Takes each vector exactly once, ignoring anything in between.
    Leap(&'static [Hex]),

    /// Steps forward onto empty tiles and captures on the forward flanks; the vectors depend on color.
    March,
}

static PAWN: [Motion; 1] = [Motion::March];
static ROOK: [Motion; 1] = [Motion::Slide(&ORTHOGONALS)];
static KNIGHT: [Motion; 1] = [Motion::Leap(&KNIGHT_OFFSETS)];
static BISHOP: [Motion; 1] = [Motion::Slide(&DIAGONALS)];
static QUEEN: [Motion; 2] = [Motion::Slide(&ORTHOGONALS), Motion::Slide(&DIAGONALS)];
static KING: [Motion; 2] = [Motion::Leap(&ORTHOGONALS), Motion::Leap(&DIAGONALS)];

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// The six kinds of chess piece.
pub enum Role
{
    Pawn   = 0,
    Rook   = 1,
    Knight = 2,
    Bishop = 3,
    Queen  = 4,
    King   = 5,
}

impl Role
{
    /// Returns the roles in discriminant order.
    pub const fn all() -> [Role; 6]
    {
        [Self::Pawn, Self::Rook, Self::Knight, Self::Bishop, Self::Queen, Self::King]
    }

    /// The notation letter for this role.
    pub fn letter(&self) -> char
    {
        match self
        {
            | Self::Pawn => 'P',
            | Self::Rook => 'R',
            | Self::Knight => 'N',
            | Self::Bishop => 'B',
            | Self::Queen => 'Q',
            | Self::King => 'K',
        }
    }

    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::Pawn => "Pawn",
            | Self::Rook => "Rook",
            | Self::Knight => "Knight",
            | Self::Bishop => "Bishop",
            | Self::Queen => "Queen",
            | Self::King => "King",
        }
    }

    /// How this role moves, as data: the generator walks these in order.
    pub fn motions(&self) -> &'static [Motion]
    {
        match self
        {
            | Self::Pawn => &PAWN,
            | Self::Rook => &ROOK,
            | Self::Knight => &KNIGHT,
            | Self::Bishop => &BISHOP,
            | Self::Queen => &QUEEN,
            | Self::King => &KING,
        }
    }
}

impl std::fmt::Display for Role
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Role
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "P" => Ok(Self::Pawn),
            | "R" => Ok(Self::Rook),
            | "N" => Ok(Self::Knight),
            | "B" => Ok(Self::Bishop),
            | "Q" => Ok(Self::Queen),
            | "K" => Ok(Self::King),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
