/// Single index axis used for category and clue positions.
pub type Ix = u8;

/// Identifier the trivia service assigns to a category.
pub type CategoryId = u64;

/// Address of one clue on the board, `(category, clue)`.
pub type CellAddress = (Ix, Ix);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for CellAddress {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}
