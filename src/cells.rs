use std::fmt;

use crate::roles::Role;
use crate::units::{self, CellIndex, ColumnIndex, RowIndex, RowLength};
use crate::walls::WallFlags;

/// One square of a maze: where it is, which walls it has and what it is for.
///
/// A `Cell` never changes after construction. The `*_replaced` methods hand back a new value.
/// Nothing here checks that the index is unique within a maze or that the role agrees with the
/// walls; a `Role::Wall` cell with no walls is representable.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Cell {
    index: CellIndex,
    row: RowIndex,
    column: ColumnIndex,
    walls: WallFlags,
    role: Role,
}

impl Cell {
    /// A cell with no particular role (`Role::None`).
    pub fn new(index: CellIndex, row: RowIndex, column: ColumnIndex, walls: WallFlags) -> Cell {
        Cell::with_role(index, row, column, walls, Role::default())
    }

    pub fn with_role(index: CellIndex,
                     row: RowIndex,
                     column: ColumnIndex,
                     walls: WallFlags,
                     role: Role)
                     -> Cell {
        Cell {
            index,
            row,
            column,
            walls,
            role,
        }
    }

    /// A cell whose row and column follow from its row-major `index` in rows of `row_length`.
    ///
    /// Panics if `row_length` is zero.
    pub fn at_row_major(index: CellIndex, row_length: RowLength, walls: WallFlags) -> Cell {
        let (row, column) = units::row_column(index, row_length);
        Cell::new(index, row, column, walls)
    }

    #[inline]
    pub fn index(&self) -> CellIndex {
        self.index
    }

    #[inline]
    pub fn row(&self) -> RowIndex {
        self.row
    }

    #[inline]
    pub fn column(&self) -> ColumnIndex {
        self.column
    }

    #[inline]
    pub fn position(&self) -> (RowIndex, ColumnIndex) {
        (self.row, self.column)
    }

    #[inline]
    pub fn walls(&self) -> WallFlags {
        self.walls
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn walls_replaced(&self, walls: WallFlags) -> Cell {
        Cell { walls, ..*self }
    }

    pub fn role_replaced(&self, role: Role) -> Cell {
        Cell { role, ..*self }
    }

    pub fn is_corner(&self) -> bool {
        self.walls.corner()
    }

    pub fn is_dead_end(&self) -> bool {
        self.walls.dead_end()
    }

    pub fn is_intersection(&self) -> bool {
        self.walls.intersection()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "#{} ({}, {}) [{}] {}",
               self.index,
               self.row,
               self.column,
               self.walls,
               self.role)
    }
}
