use arrayvec::ArrayVec;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A fact recorded about a move.
pub enum MoveFlag
{
    Capture   = 0,
    Promotion = 1,
    Check     = 2,
    Checkmate = 3,
    Stalemate = 4,
}

impl MoveFlag
{
    pub const fn all() -> [MoveFlag; 5]
    {
        [Self::Capture, Self::Promotion, Self::Check, Self::Checkmate, Self::Stalemate]
    }

    fn bit(&self) -> u8
    {
        1 << (*self as u8)
    }
}

impl std::fmt::Display for MoveFlag
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{:?}", self)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// A set of [MoveFlag]s.
///
/// Bits:
///
/// 0 - 4: one per flag, in discriminant order
///
/// 5 - 7: empty
pub struct MoveFlags(u8);

impl MoveFlags
{
    pub const EMPTY: MoveFlags = MoveFlags(0);

    /// Whether the flag is in the set.
    pub fn contains(&self, flag: MoveFlag) -> bool
    {
        self.0 & flag.bit() != 0
    }

    /// Adds a flag to the set.
    pub fn insert(&mut self, flag: MoveFlag)
    {
        self.0 |= flag.bit();
    }

    pub fn is_empty(&self) -> bool
    {
        self.0 == 0
    }

    /// Lists the flags in the set, in discriminant order.
    pub fn list(&self) -> ArrayVec<MoveFlag, 5>
    {
        MoveFlag::all().into_iter().filter(|flag| self.contains(*flag)).collect()
    }

    /// Takes a flag out of the set.
    pub fn remove(&mut self, flag: MoveFlag)
    {
        self.0 &= !flag.bit();
    }

    /// Returns a copy of the set with the flag added.
    pub fn with(mut self, flag: MoveFlag) -> MoveFlags
    {
        self.insert(flag);
        self
    }
}

impl From<MoveFlag> for MoveFlags
{
    fn from(value: MoveFlag) -> Self
    {
        MoveFlags::EMPTY.with(value)
    }
}

impl FromIterator<MoveFlag> for MoveFlags
{
    fn from_iter<T: IntoIterator<Item = MoveFlag>>(iter: T) -> Self
    {
        iter.into_iter().fold(MoveFlags::EMPTY, MoveFlags::with)
    }
}

impl std::fmt::Display for MoveFlags
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if self.is_empty()
        {
            return write!(f, "None");
        }

        let names = self.list().iter().map(|flag| flag.to_string()).collect::<Vec<_>>();
        write!(f, "{}", names.join("|"))
    }
}
