use multiset::HashMultiSet;

use crate::prelude::*;

impl Board
{
    /// Ensures a move can be applied, and returns the index of the piece making it.
    pub(super) fn ensure_applicable(&self, mv: &Move) -> Result<usize>
    {
        self.ensure_real(mv)?;
        self.ensure_tile(mv.to)?;
        let index = self.ensure_mover(mv)?;
        self.ensure_capture(mv)?;
        Ok(index)
    }

    /// Ensures a move is the last one applied, and returns the index of the piece that made it along with the move as it
    /// was recorded.
    pub(super) fn ensure_undoable(&self, mv: &Move) -> Result<(usize, Move)>
    {
        let Some(last) = self.history.prev()
        else
        {
            return Err(Error::new(Kind::NothingToUndo, "No move has been applied to this board.".into()));
        };

        if last != *mv
        {
            let err = Error::mismatch::<Move>(last, *mv);
            return Err(err.chain(Error::new(Kind::MismatchError, "Only the last move can be undone.".into())));
        }

        // Past this point, the board disagrees with its own history.

        let landed = Piece::new(last.color, last.role, last.to);
        let Some(index) = self.index_of(&landed)
        else
        {
            let err = Error::new(Kind::InvalidState, format!("Expected {} after the last move, but it is gone.", landed));
            return Err(Error::internal(err));
        };

        if self.piece_at(last.from).is_some()
        {
            let err = Error::new(Kind::InvalidState, format!("Hex {} was vacated by the last move, but is occupied.", last.from));
            return Err(Error::internal(err));
        }

        if last.is_capture() && last.captured.is_none()
        {
            let err = Error::new(Kind::InvalidState, format!("The history does not know what {} captured.", last));
            return Err(Error::internal(err));
        }

        Ok((index, last))
    }

    /// Ensures a puzzle layout is well-formed.
    pub(super) fn ensure_layout(tiles: &[Hex], pieces: &[Piece]) -> Result<()>
    {
        if let Some(hex) = tiles.iter().find(|hex| hex.is_none())
        {
            return Err(Error::new(Kind::InvalidCoordinate, format!("Tile {} is not a coordinate.", hex)));
        }

        let tile_counts = tiles.iter().copied().collect::<HashMultiSet<Hex>>();
        if let Some(hex) = tiles.iter().find(|hex| tile_counts.count_of(hex) > 1)
        {
            return Err(Error::new(Kind::InvalidState, format!("Tile {} is listed more than once.", hex)));
        }

        if let Some(piece) = pieces.iter().find(|piece| tile_counts.count_of(&piece.position) == 0)
        {
            return Err(Error::new(Kind::InvalidState, format!("Piece {} does not stand on a tile.", piece)));
        }

        let occupied = pieces.iter().map(|piece| piece.position).collect::<HashMultiSet<Hex>>();
        if let Some(piece) = pieces.iter().find(|piece| occupied.count_of(&piece.position) > 1)
        {
            return Err(Error::new(
                Kind::InvalidState,
                format!("Hex {} holds more than one piece.", piece.position),
            ));
        }

        Ok(())
    }

    #[inline]
    /// Ensures the capture flag agrees with what stands on the destination.
    fn ensure_capture(&self, mv: &Move) -> Result<()>
    {
        match (mv.is_capture(), self.piece_at(mv.to))
        {
            | (false, None) => Ok(()),
            | (false, Some(occupant)) => Err(Error::new(
                Kind::InvalidMove,
                format!("Hex {} is already occupied by {}.", mv.to, occupant),
            )),
            | (true, None) => Err(Error::new(
                Kind::InvalidMove,
                format!("The move captures on hex {}, but nothing stands there.", mv.to),
            )),
            | (true, Some(occupant)) if occupant.color == mv.color => Err(Error::new(
                Kind::InvalidMove,
                format!("{} cannot capture friendly piece {}.", mv.mover(), occupant),
            )),
            | (true, Some(occupant)) => match mv.captured
            {
                | Some(role) if role != occupant.role => Err(Error::mismatch::<Role>(role, occupant.role)),
                | _ => Ok(()),
            },
        }
    }

    #[inline]
    /// Ensures the piece the move describes stands where the move starts, and returns its index.
    fn ensure_mover(&self, mv: &Move) -> Result<usize>
    {
        let mover = mv.mover();
        self.index_of(&mover).ok_or_else(|| {
            let found = self
                .piece_at(mv.from)
                .map(|piece| format!("{}", piece))
                .unwrap_or("nothing".into());
            Error::new(Kind::MissingPiece, format!("Expected {} on hex {}, but found {}.", mover, mv.from, found))
        })
    }

    #[inline]
    /// Ensures the move is not the "no move" value.
    fn ensure_real(&self, mv: &Move) -> Result<()>
    {
        if mv.is_none()
        {
            Err(Error::new(Kind::InvalidMove, "The empty move cannot be applied.".into()))
        }
        else
        {
            Ok(())
        }
    }

    #[inline]
    /// Ensures the hex is one of this board's tiles.
    fn ensure_tile(&self, hex: Hex) -> Result<()>
    {
        if self.contains(hex)
        {
            Ok(())
        }
        else
        {
            Err(Error::new(Kind::InvalidMove, format!("Hex {} is not a tile on this board.", hex)))
        }
    }
}
