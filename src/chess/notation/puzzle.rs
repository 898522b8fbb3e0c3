use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

/// The largest radius a `Hex<radius>` tile section may ask for.
const MAX_RADIUS: i32 = 64;

lazy_static! {
    static ref MAP_PATTERN: Regex = Regex::new(r"^Hex(?<radius>[0-9]+)$").unwrap();
    static ref HEX_TOKEN: Regex = Regex::new(r"\([^()]*\)").unwrap();
    static ref PIECE_TOKEN: Regex = Regex::new(r"[wb][PRNBQK]\([^()]*\)").unwrap();
}

/// Splits a section into the tokens matched by the pattern, provided nothing but whitespace sits between them.
fn tokens<'a>(section: &'a str, pattern: &Regex) -> Option<Vec<&'a str>>
{
    let leftover = pattern.replace_all(section, " ");
    if !leftover.trim().is_empty()
    {
        return None;
    }
    Some(pattern.find_iter(section).map(|m| m.as_str()).collect())
}

/// Writes the tile set compactly when it is a full hex map, and hex by hex otherwise.
fn tiles_to_string(tiles: &[Hex]) -> String
{
    let Some(radius) = tiles.iter().map(|hex| hex.length()).max()
    else
    {
        return String::new();
    };

    let full = hex::map(radius);
    if full.len() == tiles.len() && full.iter().sorted().eq(tiles.iter().sorted())
    {
        format!("Hex{}", radius)
    }
    else
    {
        tiles.iter().join(" ")
    }
}

/// A puzzle string has the form `tiles;pieces[;move...]`.
///
/// The tiles are either `Hex<radius>` for every hex within that radius of the origin, or a list such as `(0,0) (1,0)`.
/// The pieces are a list such as `wK(0,0) bK(1,0)`. Each further section is one move of the solution, in full notation.
impl std::fmt::Display for Puzzle
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{};{}", tiles_to_string(&self.tiles), self.pieces.iter().join(" "))?;
        for mv in &self.solution
        {
            write!(f, ";{}", mv)?;
        }
        Ok(())
    }
}

impl FromStr for Puzzle
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let mut sections = s.trim().split(';');

        // The tiles.

        let tiles_section = sections.next().unwrap_or("").trim();
        let tiles = if let Some(caps) = MAP_PATTERN.captures(tiles_section)
        {
            let radius = caps["radius"]
                .parse::<i32>()
                .map_err(|_| Error::for_parse::<i32>(caps["radius"].into()).chain_parse::<Self>(s.into()))?;
            if radius > MAX_RADIUS
            {
                let err = Error::new(Kind::ParseError, format!("Radius {} is larger than {}.", radius, MAX_RADIUS));
                return Err(err.chain_parse::<Self>(s.into()));
            }
            hex::map(radius)
        }
        else
        {
            let Some(found) = tokens(tiles_section, &HEX_TOKEN)
            else
            {
                let err = Error::new(Kind::ParseError, format!("'{}' is neither a hex map nor a list of hexes.", tiles_section));
                return Err(err.chain_parse::<Self>(s.into()));
            };

            found
                .into_iter()
                .map(|token| token.parse::<Hex>())
                .collect::<Result<Vec<Hex>>>()
                .map_err(|err| err.chain_parse::<Self>(s.into()))?
        };

        // The initial placement.

        let pieces_section = sections.next().unwrap_or("").trim();
        let Some(found) = tokens(pieces_section, &PIECE_TOKEN)
        else
        {
            let err = Error::new(Kind::ParseError, format!("'{}' is not a list of pieces.", pieces_section));
            return Err(err.chain_parse::<Self>(s.into()));
        };

        let pieces = found
            .into_iter()
            .map(|token| token.parse::<Piece>())
            .collect::<Result<Vec<Piece>>>()
            .map_err(|err| err.chain_parse::<Self>(s.into()))?;

        // The solution line, if any.

        let solution = sections
            .map(str::trim)
            .filter(|section| !section.is_empty())
            .map(|section| section.parse::<Move>())
            .collect::<Result<Vec<Move>>>()
            .map_err(|err| err.chain_parse::<Self>(s.into()))?;

        Ok(Puzzle { tiles, pieces, solution })
    }
}
