use std::fmt;

/// Identifier of a cell, unique within one maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct CellIndex(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct ColumnIndex(pub usize);

/// Number of cells in one row of a rectangular grid.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct RowLength(pub usize);

macro_rules! display_inner {
    ($($unit:ident),*) => ($(
        impl fmt::Display for $unit {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    )*)
}
display_inner!(CellIndex, RowIndex, ColumnIndex, RowLength);

/// Row-major index of the cell at `row`, `column`, or `None` if it does not fit in a `usize`.
///
/// `column` is not checked against `row_length`.
#[inline]
pub fn row_major_index(row: RowIndex,
                       column: ColumnIndex,
                       row_length: RowLength)
                       -> Option<CellIndex> {
    let (RowIndex(r), ColumnIndex(c), RowLength(width)) = (row, column, row_length);
    r.checked_mul(width)
        .and_then(|row_start| row_start.checked_add(c))
        .map(CellIndex)
}

/// Row and column of a row-major `index`. Panics if `row_length` is zero.
#[inline]
pub fn row_column(index: CellIndex, row_length: RowLength) -> (RowIndex, ColumnIndex) {
    let (CellIndex(i), RowLength(width)) = (index, row_length);
    (RowIndex(i / width), ColumnIndex(i % width))
}
