use crate::{chess::generator, prelude::*};

/// Attack geometry and check detection for this board.
impl Board
{
    /// Whether the attacker's movement geometry alone could ever strike the defender, ignoring anything in between.
    ///
    /// This is a cheap prefilter; sliders still need a clear line, which only move generation can confirm.
    pub fn is_attackable_relation(attacker: &Piece, defender: &Piece) -> bool
    {
        if attacker.color == defender.color
        {
            return false;
        }

        let offset = defender.position - attacker.position;
        if offset == Hex::ORIGIN
        {
            return false;
        }

        match attacker.role
        {
            | Role::Pawn => attacker.color.pawn_captures().contains(&offset),
            | Role::Rook => offset.is_straight_vector(),
            | Role::Knight => KNIGHT_OFFSETS.contains(&offset),
            | Role::Bishop => offset.is_diagonal_vector(),
            | Role::Queen => offset.is_straight_vector() || offset.is_diagonal_vector(),
            | Role::King => ORTHOGONALS.contains(&offset) || DIAGONALS.contains(&offset),
        }
    }

    /// Whether any king of the given color is attacked by the other side. A side without a king is never in check.
    ///
    /// Attacks are pin-blind: an enemy piece that could not legally move still gives check.
    pub fn is_check(&self, color: Color) -> bool
    {
        self.pieces_of(color.opposite())
            .filter(|attacker| self.kings(color).any(|king| Board::is_attackable_relation(attacker, king)))
            .any(|attacker| {
                generator::attacks(self, attacker)
                    .iter()
                    .any(|mv| mv.captured == Some(Role::King))
            })
    }

    /// Mate detection is not implemented yet; no position is ever reported as checkmate.
    pub fn is_checkmate(&self, _color: Color) -> bool
    {
        false
    }
}
