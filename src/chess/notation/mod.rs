mod moves;
mod puzzle;

pub use moves::MoveString;
