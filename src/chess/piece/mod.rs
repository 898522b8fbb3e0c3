use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

mod color;
mod role;

pub use color::Color;
pub use role::{Motion, Role};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A piece standing on the board.
///
/// Pieces are plain values: two pieces are the same piece when their color, role and position agree.
///
/// For example, the white king on the origin is wK(0,0,0).
pub struct Piece
{
    pub color:    Color,
    pub role:     Role,
    pub position: Hex,
}

impl Piece
{
    pub fn new(color: Color, role: Role, position: Hex) -> Piece
    {
        Piece { color, role, position }
    }

    /// The color this piece can capture.
    pub fn opponent(&self) -> Color
    {
        self.color.opposite()
    }
}

impl std::fmt::Display for Piece
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}{}{}", self.color.short(), self.role, self.position)
    }
}

lazy_static! {
    static ref PIECE_PATTERN: Regex = Regex::new(r"^(?<color>[wb])(?<role>[PRNBQK])(?<hex>\(.*\))$").unwrap();
}

impl FromStr for Piece
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let Some(caps) = PIECE_PATTERN.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let color = caps["color"].parse::<Color>().map_err(|err| err.chain_parse::<Self>(s.into()))?;
        let role = caps["role"].parse::<Role>().map_err(|err| err.chain_parse::<Self>(s.into()))?;
        let position = caps["hex"].parse::<Hex>().map_err(|err| err.chain_parse::<Self>(s.into()))?;

        Ok(Piece { color, role, position })
    }
}
