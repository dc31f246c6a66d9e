//! Bitmask types selecting prefix fields and output targets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Fields rendered in front of each message.
///
/// Individual fields can be combined with `|`. [`FormatFlags::NONE`] renders
/// the bare message, [`FormatFlags::ALL`] renders the canonical layout
/// `[time] [LEVEL  ] [file func() lineN] `.
///
/// # Example
///
/// ```
/// use sinklog::FormatFlags;
///
/// let flags = FormatFlags::TIME | FormatFlags::LEVEL;
/// assert!(flags.contains(FormatFlags::LEVEL));
/// assert!(!flags.contains(FormatFlags::LINENO));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct FormatFlags(u8);

impl FormatFlags {
    pub const NONE: FormatFlags = FormatFlags(0);
    pub const TIME: FormatFlags = FormatFlags(0b0_0001);
    pub const LEVEL: FormatFlags = FormatFlags(0b0_0010);
    pub const FILENAME: FormatFlags = FormatFlags(0b0_0100);
    pub const FUNCNAME: FormatFlags = FormatFlags(0b0_1000);
    pub const LINENO: FormatFlags = FormatFlags(0b1_0000);
    pub const ALL: FormatFlags = FormatFlags(0b1_1111);

    /// Build from raw bits, discarding bits that name no field.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        FormatFlags(bits & Self::ALL.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: FormatFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_all(self) -> bool {
        self.0 == Self::ALL.0
    }
}

impl Default for FormatFlags {
    fn default() -> Self {
        FormatFlags::ALL
    }
}

impl BitOr for FormatFlags {
    type Output = FormatFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        FormatFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for FormatFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FormatFlags {
    type Output = FormatFlags;

    fn bitand(self, rhs: Self) -> Self::Output {
        FormatFlags(self.0 & rhs.0)
    }
}

impl From<u8> for FormatFlags {
    fn from(bits: u8) -> Self {
        FormatFlags::from_bits_truncate(bits)
    }
}

impl From<FormatFlags> for u8 {
    fn from(flags: FormatFlags) -> Self {
        flags.0
    }
}

impl fmt::Debug for FormatFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(FormatFlags, &str); 5] = [
            (FormatFlags::TIME, "TIME"),
            (FormatFlags::LEVEL, "LEVEL"),
            (FormatFlags::FILENAME, "FILENAME"),
            (FormatFlags::FUNCNAME, "FUNCNAME"),
            (FormatFlags::LINENO, "LINENO"),
        ];

        if self.is_empty() {
            return write!(f, "FormatFlags(NONE)");
        }
        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "FormatFlags({})", names.join(" | "))
    }
}

/// Sinks a record is written to.
///
/// Each target is checked on its own, so a record goes to the terminal, the
/// file, both, or (with [`OutputTarget::NONE`]) nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct OutputTarget(u8);

impl OutputTarget {
    pub const NONE: OutputTarget = OutputTarget(0);
    pub const TERMINAL: OutputTarget = OutputTarget(0b01);
    pub const FILE: OutputTarget = OutputTarget(0b10);
    pub const BOTH: OutputTarget = OutputTarget(0b11);

    pub const fn contains(self, other: OutputTarget) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn writes_terminal(self) -> bool {
        self.contains(Self::TERMINAL)
    }

    #[inline]
    pub const fn writes_file(self) -> bool {
        self.contains(Self::FILE)
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        OutputTarget::BOTH
    }
}

impl BitOr for OutputTarget {
    type Output = OutputTarget;

    fn bitor(self, rhs: Self) -> Self::Output {
        OutputTarget(self.0 | rhs.0)
    }
}

impl From<u8> for OutputTarget {
    fn from(bits: u8) -> Self {
        OutputTarget(bits & Self::BOTH.0)
    }
}

impl From<OutputTarget> for u8 {
    fn from(target: OutputTarget) -> Self {
        target.0
    }
}
