/// A gate label as recognized by the grammar, before its dimension is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedGate {
    /// `Z` or `Z<power>`
    Z(i64),
    /// `[+]`
    Plus,
    /// `[++]`
    PlusSquared,
    /// `[+++]`
    PlusCubed,
    /// `X(i,j)`
    Flip(usize, usize),
    /// `CX(c, i, j)`
    ControlledFlip(usize, usize, usize),
}
