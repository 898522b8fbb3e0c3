use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// The two sides of a game.
pub enum Color
{
    White = 0,
    Black = 1,
}

impl Color
{
    /// Both colors, white first.
    pub const fn all() -> [Color; 2]
    {
        [Self::White, Self::Black]
    }

    /// The direction this side's pawns advance in.
    pub fn forward(&self) -> Direction
    {
        match self
        {
            | Self::White => Direction::North,
            | Self::Black => Direction::South,
        }
    }

    /// Gets the other side.
    pub fn opposite(&self) -> Self
    {
        match self
        {
            | Self::White => Self::Black,
            | Self::Black => Self::White,
        }
    }

    /// The two offsets a pawn of this side captures along: the orthogonals on either side of its forward direction.
    pub fn pawn_captures(&self) -> [Hex; 2]
    {
        let forward = self.forward();
        [forward.counterclockwise().vector(), forward.clockwise().vector()]
    }

    /// Returns the short name for this color, for use in piece and move notation.
    pub fn short(&self) -> &'static str
    {
        match self
        {
            | Self::White => "w",
            | Self::Black => "b",
        }
    }
}

impl std::fmt::Display for Color
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::White => "White",
            | Self::Black => "Black",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Color
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "White" | "white" | "w" => Ok(Self::White),
            | "Black" | "black" | "b" => Ok(Self::Black),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
