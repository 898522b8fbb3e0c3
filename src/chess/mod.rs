pub mod board;
pub mod generator;
pub mod hex;
pub mod moves;
pub mod notation;
pub mod piece;
pub mod puzzle;

pub use board::*;
pub use generator::MoveGenerator;
pub use hex::*;
pub use moves::*;
pub use notation::*;
pub use piece::*;
pub use puzzle::*;
