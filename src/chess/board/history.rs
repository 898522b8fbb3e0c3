use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A linear move history.
///
/// The history can undo moves from the present back to the start.
///
/// It can also redo moves until a new move is made at any point in the history.
pub struct History
{
    past:   Vec<Move>,
    future: Vec<Move>,
}

impl History
{
    /// Forgets every move, past and future.
    pub fn clear(&mut self)
    {
        self.past.clear();
        self.future.clear();
    }

    /// Determines whether or not the history is empty.
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// A read-only iter to past moves, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Move>
    {
        self.past.iter()
    }

    /// Gets the length of the history, which is useful for controlling undos.
    pub fn len(&self) -> usize
    {
        self.past.len()
    }

    /// The past moves, oldest first.
    pub fn moves(&self) -> &[Move]
    {
        &self.past
    }

    #[allow(clippy::should_implement_trait)]
    /// Gets the next move to be played in this line, if one exists.
    pub fn next(&self) -> Option<Move>
    {
        self.future.last().copied()
    }

    /// Plays a move, which clears the future if this move doesn't match.
    pub fn play(&mut self, mv: Move)
    {
        match self.future.last()
        {
            // We are consistent with the history (the move is a redo), so we can just step forwards like normal.
            | Some(next) if *next == mv => self.redo(),
            // Otherwise, we broke the linear history, so it needs to be cleared.
            | _ =>
            {
                self.future.clear();
                self.past.push(mv);
            }
        }
    }

    /// Gets the last move played in this line, if one exists.
    pub fn prev(&self) -> Option<Move>
    {
        self.past.last().copied()
    }

    /// Steps forward in the history if possible.
    pub fn redo(&mut self)
    {
        if let Some(mv) = self.future.pop()
        {
            self.past.push(mv);
        }
    }

    /// Steps backward in the history if possible.
    pub fn undo(&mut self)
    {
        if let Some(mv) = self.past.pop()
        {
            self.future.push(mv);
        }
    }
}
