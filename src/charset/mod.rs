//! Character classes and the flags used to select them.

mod set;

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

pub use set::CharSet;

const UPPERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERS: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!#%)*+,-.:=>?@]^_}~";
const AMBIGUOUS: &str = "0O1Il5S";

/// A named, fixed set of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppers,
    Lowers,
    Digits,
    Symbols,
    Ambiguous,
}

impl CharacterClass {
    /// Every class, in flag order.
    pub const ALL: [CharacterClass; 5] = [
        CharacterClass::Uppers,
        CharacterClass::Lowers,
        CharacterClass::Digits,
        CharacterClass::Symbols,
        CharacterClass::Ambiguous,
    ];

    pub const fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppers => UPPERS,
            CharacterClass::Lowers => LOWERS,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
            CharacterClass::Ambiguous => AMBIGUOUS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppers => "Uppers",
            CharacterClass::Lowers => "Lowers",
            CharacterClass::Digits => "Digits",
            CharacterClass::Symbols => "Symbols",
            CharacterClass::Ambiguous => "Ambiguous",
        }
    }

    pub const fn flag(self) -> Classes {
        match self {
            CharacterClass::Uppers => Classes::UPPERS,
            CharacterClass::Lowers => Classes::LOWERS,
            CharacterClass::Digits => Classes::DIGITS,
            CharacterClass::Symbols => Classes::SYMBOLS,
            CharacterClass::Ambiguous => Classes::AMBIGUOUS,
        }
    }

    pub fn set(self) -> CharSet {
        CharSet::from(self.chars())
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bitwise-OR-able selection of character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Classes(u32);

impl Classes {
    pub const NONE: Classes = Classes(0);
    pub const UPPERS: Classes = Classes(1);
    pub const LOWERS: Classes = Classes(1 << 1);
    pub const DIGITS: Classes = Classes(1 << 2);
    pub const SYMBOLS: Classes = Classes(1 << 3);
    /// Meant for `exclude`: characters easily confused with one another.
    pub const AMBIGUOUS: Classes = Classes(1 << 4);

    pub const LETTERS: Classes = Classes(Self::UPPERS.0 | Self::LOWERS.0);
    pub const ALL: Classes = Classes(Self::LETTERS.0 | Self::DIGITS.0 | Self::SYMBOLS.0);

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.flag().0 != 0
    }

    /// Enabled classes, in flag order.
    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }

    /// Union of the characters of every enabled class.
    pub fn chars(self) -> CharSet {
        self.iter().flat_map(|class| class.chars().chars()).collect()
    }
}

impl BitOr for Classes {
    type Output = Classes;

    fn bitor(self, rhs: Classes) -> Classes {
        Classes(self.0 | rhs.0)
    }
}

impl BitOrAssign for Classes {
    fn bitor_assign(&mut self, rhs: Classes) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Classes {
    type Output = Classes;

    fn bitand(self, rhs: Classes) -> Classes {
        Classes(self.0 & rhs.0)
    }
}

impl From<CharacterClass> for Classes {
    fn from(class: CharacterClass) -> Self {
        class.flag()
    }
}
