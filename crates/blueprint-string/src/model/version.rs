//! Packed game version numbers.
//!
//! The game stores its version as four 16-bit fields packed into one
//! integer, most significant first: `major << 48 | minor << 32 | patch << 16 | build`.

use std::fmt;

/// A game version unpacked into its four fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GameVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
    pub build: u16,
}

impl GameVersion {
    /// Creates a version from its fields.
    pub const fn new(major: u16, minor: u16, patch: u16, build: u16) -> Self {
        Self { major, minor, patch, build }
    }

    /// Unpacks a version integer. Every bit pattern is accepted.
    pub const fn from_packed(packed: u64) -> Self {
        Self {
            major: (packed >> 48) as u16,
            minor: (packed >> 32) as u16,
            patch: (packed >> 16) as u16,
            build: packed as u16,
        }
    }

    /// Packs the fields back into the wire integer.
    pub const fn to_packed(self) -> u64 {
        (self.major as u64) << 48
            | (self.minor as u64) << 32
            | (self.patch as u64) << 16
            | self.build as u64
    }

    /// The four fields in order, most significant first.
    pub const fn fields(self) -> [u16; 4] {
        [self.major, self.minor, self.patch, self.build]
    }
}

impl From<u64> for GameVersion {
    fn from(packed: u64) -> Self {
        Self::from_packed(packed)
    }
}

impl From<GameVersion> for u64 {
    fn from(version: GameVersion) -> Self {
        version.to_packed()
    }
}

/// Renders trailing zero fields dropped, keeping at least one field.
impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields();
        let len = fields.iter().rposition(|&v| v != 0).map_or(1, |i| i + 1);
        for (i, field) in fields[..len].iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Renders a packed version integer as a dotted string, e.g. `"1.1.61"`.
pub fn parse_version(packed: u64) -> String {
    GameVersion::from_packed(packed).to_string()
}
