use itertools::Itertools;

use crate::prelude::*;

impl Board
{
    /// Standard debug.
    pub(super) fn debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "Board {{ {:?}, {:?}, {:?}, {:?} }}",
            self.tiles, self.pieces, self.history, self.zobrist
        )
    }

    /// Pretty print.
    pub(super) fn pretty(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let pieces = self
            .pieces
            .iter()
            .sorted_by_key(|piece| piece.position)
            .map(|piece| format!("{}", piece))
            .collect::<Vec<String>>();

        write!(
            f,
            "Board {{ {} tiles, {:?} }}\n{}\nwith {:#?}\nwith Pieces {:#?}",
            self.tiles.len(),
            self.zobrist,
            self.render(),
            self.history,
            pieces
        )
    }

    /// Draws the tiles as a sheared grid with north at the top: uppercase letters for white, lowercase for black.
    fn render(&self) -> String
    {
        let Some((qmin, qmax)) = self.tiles.iter().map(|hex| hex.q()).minmax().into_option()
        else
        {
            return "(no tiles)".into();
        };
        let Some((rmin, rmax)) = self.tiles.iter().map(|hex| hex.r()).minmax().into_option()
        else
        {
            return "(no tiles)".into();
        };

        (rmin..=rmax)
            .rev()
            .map(|r| {
                let indent = " ".repeat((r - rmin) as usize);
                let cells = (qmin..=qmax)
                    .map(|q| {
                        let hex = Hex::axial(q, r);
                        match (self.contains(hex), self.piece_at(hex))
                        {
                            | (false, _) => ' ',
                            | (true, None) => '.',
                            | (true, Some(piece)) if piece.color == Color::White => piece.role.letter(),
                            | (true, Some(piece)) => piece.role.letter().to_ascii_lowercase(),
                        }
                    })
                    .join(" ");
                format!("{}{}", indent, cells).trim_end().to_string()
            })
            .join("\n")
    }
}
