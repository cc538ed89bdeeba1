//! Compression parameters for the token's zlib stream.
//!
//! The game's own codec fixes most of these; a profile that strays from them
//! produces streams the game or other tools cannot read, so profiles are
//! checked before any compression happens.

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::limits::{
    MAX_LEVEL, MAX_MEM_LEVEL, MIN_LEVEL, MIN_MEM_LEVEL, STRATEGY_DEFAULT, WINDOW_BITS,
};

/// zlib deflate parameters.
///
/// Field names follow zlib's `deflateInit2` so persisted profiles read the
/// same as other tools' settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionProfile {
    /// Raw deflate without zlib header and checksum. Must be `false`.
    pub raw: bool,
    /// Base-2 log of the window size. Must be 15.
    pub window_bits: u8,
    /// zlib strategy. Must be 0 (default).
    pub strategy: u8,
    /// Compression level, 8 or 9.
    pub level: u32,
    /// zlib memory level, 4 through 9. Sizes the encoder's hash table and
    /// block buffer, so different values give different streams.
    pub mem_level: u8,
}

impl Default for CompressionProfile {
    fn default() -> Self {
        Self {
            raw: false,
            window_bits: WINDOW_BITS,
            strategy: STRATEGY_DEFAULT,
            level: MAX_LEVEL,
            mem_level: 5,
        }
    }
}

impl CompressionProfile {
    /// Returns the default profile (level 9, memLevel 5).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the given level.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Returns a copy with the given memLevel.
    pub fn with_mem_level(mut self, mem_level: u8) -> Self {
        self.mem_level = mem_level;
        self
    }

    /// Checks every field against the fixed wire constraints, reporting the
    /// first one that fails.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.raw {
            return Err(ProfileError::RawDeflate);
        }
        if self.window_bits != WINDOW_BITS {
            return Err(ProfileError::WindowBits {
                found: self.window_bits,
            });
        }
        if self.strategy != STRATEGY_DEFAULT {
            return Err(ProfileError::Strategy {
                found: self.strategy,
            });
        }
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&self.level) {
            return Err(ProfileError::Level { found: self.level });
        }
        if !(MIN_MEM_LEVEL..=MAX_MEM_LEVEL).contains(&self.mem_level) {
            return Err(ProfileError::MemLevel {
                found: self.mem_level,
            });
        }
        Ok(())
    }
}
