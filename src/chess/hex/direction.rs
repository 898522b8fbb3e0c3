use crate::prelude::*;

/// The six unit vectors across the edges of a hex, in the order of [Direction::all].
pub const ORTHOGONALS: [Hex; 6] = [
    Hex::axial(0, 1),
    Hex::axial(1, 0),
    Hex::axial(1, -1),
    Hex::axial(0, -1),
    Hex::axial(-1, 0),
    Hex::axial(-1, 1),
];

/// The six unit vectors across the vertices of a hex, in the order of [Diagonal::all].
pub const DIAGONALS: [Hex; 6] = [
    Hex::axial(1, 1),
    Hex::axial(2, -1),
    Hex::axial(1, -2),
    Hex::axial(-1, -1),
    Hex::axial(-2, 1),
    Hex::axial(-1, 2),
];

/// The twelve knight leaps: one orthogonal step followed by one diagonal step that does not continue the same line.
///
/// Listed clockwise from just east of north.
pub const KNIGHT_OFFSETS: [Hex; 12] = [
    Hex::axial(1, 2),
    Hex::axial(2, 1),
    Hex::axial(3, -1),
    Hex::axial(3, -2),
    Hex::axial(2, -3),
    Hex::axial(1, -3),
    Hex::axial(-1, -2),
    Hex::axial(-2, -1),
    Hex::axial(-3, 1),
    Hex::axial(-3, 2),
    Hex::axial(-2, 3),
    Hex::axial(-1, 3),
];

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// An orthogonal direction on a flat-topped hexagonal grid.
pub enum Direction
{
    North     = 0,
    Northeast = 1,
    Southeast = 2,
    South     = 3,
    Southwest = 4,
    Northwest = 5,
}

impl Direction
{
    #[inline]
    /// Returns a list of all directions in clockwise order.
    pub const fn all() -> [Direction; 6]
    {
        [Self::North, Self::Northeast, Self::Southeast, Self::South, Self::Southwest, Self::Northwest]
    }

    /// Returns the direction clockwise of this one.
    pub fn clockwise(&self) -> Direction
    {
        Direction::all()[(*self as usize + 1) % 6]
    }

    /// Returns the direction counterclockwise to this one.
    pub fn counterclockwise(&self) -> Direction
    {
        Direction::all()[(*self as usize + 5) % 6]
    }

    /// Returns the inverse of this direction.
    pub fn inverse(&self) -> Direction
    {
        Direction::all()[(*self as usize + 3) % 6]
    }

    /// Returns the name of this direction.
    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::North => "north",
            | Self::Northeast => "northeast",
            | Self::Southeast => "southeast",
            | Self::South => "south",
            | Self::Southwest => "southwest",
            | Self::Northwest => "northwest",
        }
    }

    /// If the two hexes are neighbours, returns the direction to the target hex.
    pub fn to(from: Hex, to: Hex) -> Option<Direction>
    {
        Direction::all().into_iter().find(|direction| from.neighbour(*direction) == to)
    }

    /// The unit vector for this direction.
    pub fn vector(&self) -> Hex
    {
        ORTHOGONALS[*self as usize]
    }
}

impl std::fmt::Display for Direction
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::North => "N",
            | Self::Northeast => "NE",
            | Self::Southeast => "SE",
            | Self::South => "S",
            | Self::Southwest => "SW",
            | Self::Northwest => "NW",
        };

        write!(f, "{repr}")
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A diagonal direction, pointing through a vertex of the hex rather than an edge.
pub enum Diagonal
{
    Northeast = 0,
    East      = 1,
    Southeast = 2,
    Southwest = 3,
    West      = 4,
    Northwest = 5,
}

impl Diagonal
{
    #[inline]
    /// Returns a list of all diagonals in clockwise order.
    pub const fn all() -> [Diagonal; 6]
    {
        [Self::Northeast, Self::East, Self::Southeast, Self::Southwest, Self::West, Self::Northwest]
    }

    /// Returns the opposite diagonal.
    pub fn inverse(&self) -> Diagonal
    {
        Diagonal::all()[(*self as usize + 3) % 6]
    }

    /// Returns the name of this diagonal.
    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::Northeast => "northeast",
            | Self::East => "east",
            | Self::Southeast => "southeast",
            | Self::Southwest => "southwest",
            | Self::West => "west",
            | Self::Northwest => "northwest",
        }
    }

    /// The unit vector for this diagonal.
    pub fn vector(&self) -> Hex
    {
        DIAGONALS[*self as usize]
    }
}
