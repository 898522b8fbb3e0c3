use super::LIMIT;
use crate::prelude::*;

const SQRT3: f32 = 1.732_050_8;

/// The circumradius of one tile in display units.
const RADIUS: f32 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// A point in display space, with y pointing up.
pub struct Point
{
    pub x: f32,
    pub y: f32,
}

impl Point
{
    pub fn new(x: f32, y: f32) -> Point
    {
        Point { x, y }
    }
}

/// Projection between the flat-topped grid and display space.
///
/// Only the presentation and input layers need these; move generation never looks at pixels.
impl Hex
{
    /// Finds the hex whose tile contains the given point. Points that are not finite, or that fall past [LIMIT], have
    /// no hex.
    pub fn from_pixel(point: Point) -> Result<Hex>
    {
        let q = point.x / (1.5 * RADIUS);
        let r = point.y / (SQRT3 * RADIUS) - q / 2.0;
        round(q, r, -q - r).map_err(|err| {
            let base = Error::new(Kind::InvalidCoordinate, format!("No tile lies under ({}, {}).", point.x, point.y));
            err.chain(base)
        })
    }

    /// Projects the centre of this hex into display space.
    pub fn to_pixel(&self) -> Point
    {
        let q = self.q() as f32;
        let r = self.r() as f32;

        Point {
            x: RADIUS * (1.5 * q),
            y: RADIUS * (SQRT3 / 2.0 * q + SQRT3 * r),
        }
    }
}

/// Rounds fractional cube components to the nearest hex, repairing whichever component drifted the most.
fn round(q: f32, r: f32, s: f32) -> Result<Hex>
{
    if [q, r, s].iter().any(|component| !component.is_finite() || component.abs() > LIMIT as f32)
    {
        return Err(Error::new(
            Kind::InvalidCoordinate,
            format!("({}, {}, {}) is not a finite cube position within {}.", q, r, s, LIMIT),
        ));
    }

    let (rq, rr, rs) = (q.round(), r.round(), s.round());
    let (dq, dr, ds) = ((rq - q).abs(), (rr - r).abs(), (rs - s).abs());

    if dq > dr && dq > ds
    {
        Hex::checked_axial(-(rr as i32) - rs as i32, rr as i32)
    }
    else if dr > ds
    {
        Hex::checked_axial(rq as i32, -(rq as i32) - rs as i32)
    }
    else
    {
        Hex::checked_axial(rq as i32, rr as i32)
    }
}
