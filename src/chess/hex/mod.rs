use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

mod direction;
mod pixel;

pub use direction::{Diagonal, Direction, DIAGONALS, KNIGHT_OFFSETS, ORTHOGONALS};
pub use pixel::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A point on a hexagonal grid in cube coordinates.
///
/// The three components always sum to zero, except for the [Hex::NONE] sentinel, which breaks the invariant so that no real
/// coordinate ever compares equal to it.
pub struct Hex
{
    q: i32,
    r: i32,
    s: i32,
}

/// The largest magnitude any component of a real coordinate may have.
pub const LIMIT: i32 = 1 << 20;

impl Hex
{
    /// The centre of every board.
    pub const ORIGIN: Hex = Hex::axial(0, 0);

    /// A sentinel that stands in for "no position".
    pub const NONE: Hex = Hex {
        q: i32::MAX,
        r: i32::MAX,
        s: i32::MAX,
    };

    /// Builds a coordinate from its two axial components, deriving the third.
    pub const fn axial(q: i32, r: i32) -> Hex
    {
        Hex { q, r, s: -q - r }
    }

    /// Like [Hex::axial], but fails instead of overflowing when a component lies beyond [LIMIT].
    pub fn checked_axial(q: i32, r: i32) -> Result<Hex>
    {
        Hex::bounded(q as i64, r as i64, -(q as i64) - r as i64)
    }

    /// Builds a coordinate from all three cube components, which must sum to zero and lie within [LIMIT].
    pub fn new(q: i32, r: i32, s: i32) -> Result<Hex>
    {
        if q as i64 + r as i64 + s as i64 != 0
        {
            return Err(Error::new(
                Kind::InvalidCoordinate,
                format!("({},{},{}) does not satisfy q + r + s = 0.", q, r, s),
            ));
        }
        Hex::bounded(q as i64, r as i64, s as i64)
    }

    fn bounded(q: i64, r: i64, s: i64) -> Result<Hex>
    {
        if [q, r, s].iter().any(|component| component.abs() > LIMIT as i64)
        {
            return Err(Error::new(
                Kind::InvalidCoordinate,
                format!("({},{},{}) lies further than {} from the origin.", q, r, s, LIMIT),
            ));
        }

        Ok(Hex {
            q: q as i32,
            r: r as i32,
            s: s as i32,
        })
    }

    pub fn q(&self) -> i32
    {
        self.q
    }

    pub fn r(&self) -> i32
    {
        self.r
    }

    pub fn s(&self) -> i32
    {
        self.s
    }

    /// Returns the neighbour diagonally across the given edge pair.
    pub fn diagonal_neighbour(&self, diagonal: Diagonal) -> Hex
    {
        *self + diagonal.vector()
    }

    /// The number of single steps between two hexes.
    pub fn distance(&self, other: Hex) -> i32
    {
        (*self - other).length()
    }

    /// Whether the vector lies along one of the six diagonal lines, at any multiple.
    pub fn is_diagonal_vector(&self) -> bool
    {
        let mut parts = [self.q.abs(), self.r.abs(), self.s.abs()];
        parts.sort_unstable();

        let [low, mid, high] = parts;
        low > 0 && low == mid && high == 2 * low
    }

    /// Whether this is the sentinel rather than a real coordinate.
    pub fn is_none(&self) -> bool
    {
        *self == Hex::NONE
    }

    /// Whether the vector lies along one of the six orthogonal lines, which is true exactly when a component vanishes.
    pub fn is_straight_vector(&self) -> bool
    {
        self.q == 0 || self.r == 0 || self.s == 0
    }

    /// The distance from the origin.
    pub fn length(&self) -> i32
    {
        (self.q.abs() + self.r.abs() + self.s.abs()) / 2
    }

    /// Returns the orthogonal neighbour in the given direction.
    pub fn neighbour(&self, direction: Direction) -> Hex
    {
        *self + direction.vector()
    }

    /// Multiplies every component by a constant.
    pub fn scale(&self, k: i32) -> Hex
    {
        Hex {
            q: self.q * k,
            r: self.r * k,
            s: self.s * k,
        }
    }

    /// Classifies the hex into one of three shades so that no two neighbours share one.
    pub fn tile_kind(&self) -> u8
    {
        (self.q + 2 * self.r).rem_euclid(3) as u8
    }
}

/// Gets the six orthogonal neighbours of this hex, in clockwise order from north.
pub fn neighbours(h: Hex) -> [Hex; 6]
{
    Direction::all().map(|d| h.neighbour(d))
}

/// Returns every hex within the given radius of the origin, in q-major order. The radius is clamped to [0, [LIMIT]].
pub fn map(radius: i32) -> Vec<Hex>
{
    let radius = radius.clamp(0, LIMIT);
    (-radius..=radius)
        .flat_map(|q| {
            let low = (-radius).max(-q - radius);
            let high = radius.min(-q + radius);
            (low..=high).map(move |r| Hex::axial(q, r))
        })
        .collect()
}

impl Add for Hex
{
    type Output = Hex;

    fn add(self, rhs: Hex) -> Self::Output
    {
        Hex {
            q: self.q + rhs.q,
            r: self.r + rhs.r,
            s: self.s + rhs.s,
        }
    }
}

impl AddAssign for Hex
{
    fn add_assign(&mut self, rhs: Hex)
    {
        *self = *self + rhs;
    }
}

impl Sub for Hex
{
    type Output = Hex;

    fn sub(self, rhs: Hex) -> Self::Output
    {
        Hex {
            q: self.q - rhs.q,
            r: self.r - rhs.r,
            s: self.s - rhs.s,
        }
    }
}

impl Mul<i32> for Hex
{
    type Output = Hex;

    fn mul(self, rhs: i32) -> Self::Output
    {
        self.scale(rhs)
    }
}

impl Neg for Hex
{
    type Output = Hex;

    fn neg(self) -> Self::Output
    {
        Hex {
            q: -self.q,
            r: -self.r,
            s: -self.s,
        }
    }
}

impl std::fmt::Display for Hex
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if self.is_none()
        {
            write!(f, "(none)")
        }
        else
        {
            write!(f, "({},{},{})", self.q, self.r, self.s)
        }
    }
}

lazy_static! {
    static ref HEX_PATTERN: Regex = Regex::new(r"^\(\s*(?<q>-?[0-9]+)\s*,\s*(?<r>-?[0-9]+)\s*(,\s*(?<s>-?[0-9]+)\s*)?\)$").unwrap();
}

impl FromStr for Hex
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let Some(caps) = HEX_PATTERN.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let component = |name: &str| {
            caps[name]
                .parse::<i32>()
                .map_err(|_| Error::for_parse::<i32>(caps[name].into()).chain_parse::<Self>(s.into()))
        };

        let q = component("q")?;
        let r = component("r")?;

        if caps.name("s").is_some()
        {
            let third = component("s")?;
            Hex::new(q, r, third).map_err(|err| err.chain_parse::<Self>(s.into()))
        }
        else
        {
            Hex::checked_axial(q, r).map_err(|err| err.chain_parse::<Self>(s.into()))
        }
    }
}
