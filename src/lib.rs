//! **maze_model** holds the value types a maze is made of: the walls around a cell, the role a
//! cell plays and the cell itself.
//!
//! ```
//! use maze_model::cells::Cell;
//! use maze_model::roles::Role;
//! use maze_model::units::{CellIndex, ColumnIndex, RowIndex};
//! use maze_model::walls::WallFlags;
//!
//! let walls = WallFlags::TOP | WallFlags::LEFT;
//! assert!(walls.corner());
//!
//! let entrance = Cell::with_role(CellIndex(0), RowIndex(0), ColumnIndex(0), WallFlags::EMPTY, Role::Entrance);
//! assert!(entrance.is_intersection());
//! ```

pub mod cells;
pub mod errors;
pub mod roles;
pub mod units;
pub mod walls;
