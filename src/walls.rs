use std::convert::TryFrom;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not, Sub};
use std::str::FromStr;

use bitflags::bitflags;
use itertools::Itertools;

use crate::errors::{Error, ErrorKind, Result};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    struct Walls: u8 {
        const TOP = 1;
        const BOTTOM = 1 << 1;
        const RIGHT = 1 << 2;
        const LEFT = 1 << 3;
    }
}

/// The walls present around one grid cell.
///
/// Any subset of the four sides is valid, so the representable values are exactly 0 to 15.
/// `from_bits_truncate` is the unchecked way in from a raw `u8` (unknown bits are dropped);
/// `WallFlags::try_from` is the checked one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallFlags(Walls);

// Two adjacent walls. TOP | BOTTOM and LEFT | RIGHT are corridors, not corners.
const CORNERS: [WallFlags; 4] = [WallFlags(Walls::TOP.union(Walls::LEFT)),
                                 WallFlags(Walls::TOP.union(Walls::RIGHT)),
                                 WallFlags(Walls::BOTTOM.union(Walls::LEFT)),
                                 WallFlags(Walls::BOTTOM.union(Walls::RIGHT))];

const EMPTY_NAME: &str = "EMPTY";

/// One side of a square cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Side {
    Top,
    Bottom,
    Right,
    Left,
}

impl Side {
    /// All sides, in the same order as the wall flag bits.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Right, Side::Left];

    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Right => Side::Left,
            Side::Left => Side::Right,
        }
    }
}

impl From<Side> for WallFlags {
    fn from(side: Side) -> WallFlags {
        match side {
            Side::Top => WallFlags::TOP,
            Side::Bottom => WallFlags::BOTTOM,
            Side::Right => WallFlags::RIGHT,
            Side::Left => WallFlags::LEFT,
        }
    }
}

impl WallFlags {
    /// No walls at all.
    pub const EMPTY: WallFlags = WallFlags(Walls::empty());
    pub const TOP: WallFlags = WallFlags(Walls::TOP);
    pub const BOTTOM: WallFlags = WallFlags(Walls::BOTTOM);
    pub const RIGHT: WallFlags = WallFlags(Walls::RIGHT);
    pub const LEFT: WallFlags = WallFlags(Walls::LEFT);

    /// All four walls.
    #[inline]
    pub const fn all() -> WallFlags {
        WallFlags(Walls::all())
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0.bits()
    }

    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> WallFlags {
        WallFlags(Walls::from_bits_truncate(bits))
    }

    #[inline]
    pub const fn contains(self, other: WallFlags) -> bool {
        self.0.contains(other.0)
    }

    #[inline]
    pub const fn intersects(self, other: WallFlags) -> bool {
        self.0.intersects(other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub const fn is_all(self) -> bool {
        self.0.is_all()
    }

    /// Exactly two walls that meet at a right angle.
    #[inline]
    pub fn corner(self) -> bool {
        CORNERS.contains(&self)
    }

    /// Three walls, one way out.
    #[inline]
    pub fn dead_end(self) -> bool {
        self.wall_count() == 3
    }

    /// At most one wall, so at least three ways to go.
    #[inline]
    pub fn intersection(self) -> bool {
        self.wall_count() < 2
    }

    /// Number of walls present (the population count of the bits).
    #[inline]
    pub fn wall_count(self) -> u32 {
        self.bits().count_ones()
    }

    /// The open sides: every declared wall that is not present.
    pub fn openings(self) -> WallFlags {
        !self
    }

    pub fn has_wall(self, side: Side) -> bool {
        self.contains(WallFlags::from(side))
    }

    pub fn with_wall(self, side: Side) -> WallFlags {
        self | WallFlags::from(side)
    }

    pub fn without_wall(self, side: Side) -> WallFlags {
        self - WallFlags::from(side)
    }

    /// The sides that have a wall, in flag declaration order.
    pub fn sides(self) -> impl Iterator<Item = Side> {
        let all: &'static [Side; 4] = &Side::ALL;
        all.iter().cloned().filter(move |&side| self.has_wall(side))
    }
}

impl BitOr for WallFlags {
    type Output = WallFlags;

    fn bitor(self, other: WallFlags) -> WallFlags {
        WallFlags(self.0 | other.0)
    }
}

impl BitOrAssign for WallFlags {
    fn bitor_assign(&mut self, other: WallFlags) {
        self.0 |= other.0;
    }
}

impl BitAnd for WallFlags {
    type Output = WallFlags;

    fn bitand(self, other: WallFlags) -> WallFlags {
        WallFlags(self.0 & other.0)
    }
}

impl Sub for WallFlags {
    type Output = WallFlags;

    fn sub(self, other: WallFlags) -> WallFlags {
        WallFlags(self.0 - other.0)
    }
}

/// Complement within the four declared walls.
impl Not for WallFlags {
    type Output = WallFlags;

    fn not(self) -> WallFlags {
        WallFlags(self.0.complement())
    }
}

impl Default for WallFlags {
    fn default() -> WallFlags {
        WallFlags::EMPTY
    }
}

impl TryFrom<u8> for WallFlags {
    type Error = Error;

    fn try_from(bits: u8) -> Result<WallFlags> {
        Walls::from_bits(bits)
            .map(WallFlags)
            .ok_or_else(|| ErrorKind::InvalidWallBits(bits).into())
    }
}

/// `EMPTY`, or the present walls joined as `TOP | LEFT`.
impl fmt::Display for WallFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            f.pad(EMPTY_NAME)
        } else {
            let names = self.0.iter_names().map(|(name, _)| name).join(" | ");
            f.pad(&names)
        }
    }
}

impl fmt::Debug for WallFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WallFlags({})", self)
    }
}

/// Parses `|` separated wall names, ignoring case and surrounding whitespace.
impl FromStr for WallFlags {
    type Err = Error;

    fn from_str(s: &str) -> Result<WallFlags> {
        s.split('|').try_fold(WallFlags::EMPTY, |walls, part| {
            let name = part.trim().to_ascii_uppercase();
            if name == EMPTY_NAME {
                return Ok(walls);
            }
            match Walls::from_name(&name) {
                Some(flag) => Ok(walls | WallFlags(flag)),
                None => Err(Error::from(ErrorKind::UnknownWallName(part.trim().to_owned()))),
            }
        })
    }
}


#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, Arbitrary, Gen};

    use super::*;

    impl Arbitrary for WallFlags {
        fn arbitrary(g: &mut Gen) -> WallFlags {
            WallFlags::from_bits_truncate(u8::arbitrary(g))
        }
    }

    fn every_pattern() -> Vec<WallFlags> {
        (0..16u8).map(|bits| WallFlags::try_from(bits).expect("bits within range")).collect()
    }

    #[test]
    fn corners_are_exactly_the_adjacent_pairs() {
        let corners: Vec<u8> = every_pattern()
            .into_iter()
            .filter(|walls| walls.corner())
            .map(|walls| walls.bits())
            .collect();
        assert_eq!(corners, vec![5, 6, 9, 10]);

        assert!((WallFlags::TOP | WallFlags::LEFT).corner());
        assert!((WallFlags::BOTTOM | WallFlags::RIGHT).corner());
        assert!(!(WallFlags::TOP | WallFlags::BOTTOM).corner());
        assert!(!(WallFlags::LEFT | WallFlags::RIGHT).corner());
        assert!(!WallFlags::all().corner());
    }

    #[test]
    fn dead_ends_have_three_walls() {
        for walls in every_pattern() {
            assert_eq!(walls.dead_end(), walls.bits().count_ones() == 3);
        }
        assert!((WallFlags::TOP | WallFlags::BOTTOM | WallFlags::RIGHT).dead_end());
        assert!(!(WallFlags::TOP | WallFlags::BOTTOM).dead_end());
        assert!(!WallFlags::EMPTY.dead_end());
    }

    #[test]
    fn intersections_have_at_most_one_wall() {
        for walls in every_pattern() {
            assert_eq!(walls.intersection(), walls.bits().count_ones() <= 1);
        }
        assert!(WallFlags::EMPTY.intersection());
        assert!(WallFlags::TOP.intersection());
        assert!(!(WallFlags::TOP | WallFlags::BOTTOM).intersection());
    }

    #[test]
    fn intersection_classifies_while_bitand_intersects() {
        let corner = WallFlags::TOP | WallFlags::LEFT;
        assert!(!corner.intersection());
        assert!(WallFlags::LEFT.intersection());
        assert_eq!(corner & WallFlags::LEFT, WallFlags::LEFT);
        assert_eq!(corner & WallFlags::BOTTOM, WallFlags::EMPTY);
        assert!(corner.intersects(WallFlags::TOP | WallFlags::BOTTOM));
        assert!(!corner.intersects(WallFlags::BOTTOM | WallFlags::RIGHT));
    }

    #[test]
    fn set_operators_stay_within_the_four_walls() {
        let mut walls = WallFlags::TOP;
        walls |= WallFlags::RIGHT;
        assert_eq!(walls, WallFlags::TOP | WallFlags::RIGHT);
        assert_eq!(walls - WallFlags::TOP, WallFlags::RIGHT);
        assert_eq!(!walls, WallFlags::BOTTOM | WallFlags::LEFT);
        assert_eq!((!WallFlags::EMPTY).bits(), 15);
        assert!((!WallFlags::EMPTY).is_all());
    }

    #[test]
    fn debug_names_the_walls() {
        assert_eq!(format!("{:?}", WallFlags::TOP | WallFlags::LEFT), "WallFlags(TOP | LEFT)");
        assert_eq!(format!("{:?}", WallFlags::EMPTY), "WallFlags(EMPTY)");
    }

    #[test]
    fn combination_is_commutative_and_idempotent() {
        assert_eq!(WallFlags::TOP | WallFlags::LEFT, WallFlags::LEFT | WallFlags::TOP);
        assert_eq!(WallFlags::TOP | WallFlags::TOP, WallFlags::TOP);
        assert_eq!(WallFlags::EMPTY | WallFlags::RIGHT, WallFlags::RIGHT);
    }

    #[test]
    fn membership() {
        let walls = WallFlags::TOP | WallFlags::LEFT;
        assert!(walls.contains(WallFlags::TOP));
        assert!(walls.contains(WallFlags::LEFT));
        assert!(!walls.contains(WallFlags::BOTTOM));
        assert!(walls.has_wall(Side::Left));
        assert!(!walls.has_wall(Side::Right));
    }

    #[test]
    fn flag_bit_values() {
        assert_eq!(WallFlags::EMPTY.bits(), 0);
        assert_eq!(WallFlags::TOP.bits(), 1);
        assert_eq!(WallFlags::BOTTOM.bits(), 2);
        assert_eq!(WallFlags::RIGHT.bits(), 4);
        assert_eq!(WallFlags::LEFT.bits(), 8);
        assert_eq!(WallFlags::all().bits(), 15);
        assert_eq!(WallFlags::default(), WallFlags::EMPTY);
    }

    #[test]
    fn checked_conversion_rejects_unknown_bits() {
        assert_eq!(WallFlags::try_from(9).unwrap(), WallFlags::TOP | WallFlags::LEFT);
        for bits in 16..=255u8 {
            let err = WallFlags::try_from(bits).unwrap_err();
            match *err.kind() {
                ErrorKind::InvalidWallBits(b) => assert_eq!(b, bits),
                ref other => panic!("unexpected error kind {:?}", other),
            }
        }
        assert_eq!(WallFlags::from_bits_truncate(0b1_0011), WallFlags::TOP | WallFlags::BOTTOM);
    }

    #[test]
    fn openings_are_the_missing_walls() {
        assert_eq!(WallFlags::EMPTY.openings(), WallFlags::all());
        assert_eq!(WallFlags::all().openings(), WallFlags::EMPTY);
        assert_eq!((WallFlags::TOP | WallFlags::BOTTOM | WallFlags::RIGHT).openings(),
                   WallFlags::LEFT);
    }

    #[test]
    fn side_edits_produce_new_values() {
        let walls = WallFlags::TOP;
        let walled = walls.with_wall(Side::Left);
        assert_eq!(walls, WallFlags::TOP);
        assert_eq!(walled, WallFlags::TOP | WallFlags::LEFT);
        assert_eq!(walled.without_wall(Side::Top), WallFlags::LEFT);
        assert_eq!(walled.without_wall(Side::Bottom), walled);
    }

    #[test]
    fn sides_in_declaration_order() {
        let sides: Vec<Side> = (WallFlags::LEFT | WallFlags::TOP | WallFlags::RIGHT).sides().collect();
        assert_eq!(sides, vec![Side::Top, Side::Right, Side::Left]);
        assert_eq!(WallFlags::EMPTY.sides().count(), 0);
    }

    #[test]
    fn opposite_sides() {
        for &side in Side::ALL.iter() {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
            assert!(!(WallFlags::from(side) | WallFlags::from(side.opposite())).corner());
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(WallFlags::EMPTY.to_string(), "EMPTY");
        assert_eq!(WallFlags::RIGHT.to_string(), "RIGHT");
        assert_eq!((WallFlags::LEFT | WallFlags::TOP).to_string(), "TOP | LEFT");
        assert_eq!(WallFlags::all().to_string(), "TOP | BOTTOM | RIGHT | LEFT");
    }

    #[test]
    fn parse_names() {
        assert_eq!(" top|Left ".parse::<WallFlags>().unwrap(), WallFlags::TOP | WallFlags::LEFT);
        assert_eq!("BOTTOM | RIGHT".parse::<WallFlags>().unwrap(),
                   WallFlags::BOTTOM | WallFlags::RIGHT);
        assert_eq!("empty".parse::<WallFlags>().unwrap(), WallFlags::EMPTY);
        assert_eq!("EMPTY | TOP".parse::<WallFlags>().unwrap(), WallFlags::TOP);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "TOP | diagonal".parse::<WallFlags>().unwrap_err();
        match *err.kind() {
            ErrorKind::UnknownWallName(ref name) => assert_eq!(name, "diagonal"),
            ref other => panic!("unexpected error kind {:?}", other),
        }
        assert!("".parse::<WallFlags>().is_err());
        assert!("TOP |".parse::<WallFlags>().is_err());
    }

    #[test]
    fn classification_properties() {
        fn p(walls: WallFlags) -> bool {
            let count = walls.bits().count_ones();
            walls.dead_end() == (count == 3) && walls.intersection() == (count <= 1) &&
            !(walls.corner() && (walls.dead_end() || walls.intersection()))
        }
        quickcheck(p as fn(WallFlags) -> bool)
    }

    #[test]
    fn walls_and_openings_partition_the_sides() {
        fn p(walls: WallFlags) -> bool {
            let openings = walls.openings();
            (walls | openings).is_all() && (walls & openings).is_empty() &&
            walls.wall_count() + openings.wall_count() == 4
        }
        quickcheck(p as fn(WallFlags) -> bool)
    }

    #[test]
    fn display_parses_back() {
        fn p(walls: WallFlags) -> bool {
            walls.to_string().parse::<WallFlags>().ok() == Some(walls)
        }
        quickcheck(p as fn(WallFlags) -> bool)
    }
}
