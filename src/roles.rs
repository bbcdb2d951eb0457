use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ErrorKind, Result};

/// What a maze cell is for. A cell has exactly one role; roles do not combine.
///
/// The discriminants are the role's numeric value, starting with `None` at 0.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
#[repr(u8)]
pub enum Role {
    None = 0,
    Enemy = 1,
    Entrance = 2,
    Exit = 3,
    Exterior = 4,
    Reward = 5,
    Wall = 6,
}

impl Role {
    /// Every role, in numeric order.
    pub const ALL: [Role; 7] = [Role::None,
                                Role::Enemy,
                                Role::Entrance,
                                Role::Exit,
                                Role::Exterior,
                                Role::Reward,
                                Role::Wall];

    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::None => "NONE",
            Role::Enemy => "ENEMY",
            Role::Entrance => "ENTRANCE",
            Role::Exit => "EXIT",
            Role::Exterior => "EXTERIOR",
            Role::Reward => "REWARD",
            Role::Wall => "WALL",
        }
    }
}

impl Default for Role {
    fn default() -> Role {
        Role::None
    }
}

impl TryFrom<u8> for Role {
    type Error = Error;

    fn try_from(value: u8) -> Result<Role> {
        Role::ALL
            .get(value as usize)
            .cloned()
            .ok_or_else(|| ErrorKind::InvalidRoleValue(value).into())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Role> {
        let name = s.trim();
        Role::ALL
            .iter()
            .cloned()
            .find(|role| role.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ErrorKind::UnknownRoleName(name.to_owned()).into())
    }
}
