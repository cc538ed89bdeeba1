//! Format constants and decoder limits.

/// Leading character of every supported token.
pub const FORMAT_MARKER: char = '0';

/// Deflate window size required by the game's codec.
pub const WINDOW_BITS: u8 = 15;

/// The only accepted zlib strategy (`Z_DEFAULT_STRATEGY`).
pub const STRATEGY_DEFAULT: u8 = 0;

/// Lowest accepted compression level.
pub const MIN_LEVEL: u32 = 8;

/// Highest accepted compression level.
pub const MAX_LEVEL: u32 = 9;

/// Lowest accepted zlib memLevel.
pub const MIN_MEM_LEVEL: u8 = 4;

/// Highest accepted zlib memLevel.
pub const MAX_MEM_LEVEL: u8 = 9;

/// Number of icon slots a document can display.
pub const MAX_ICONS: usize = 4;

/// Upper bound on the inflated JSON payload (256 MiB).
pub const MAX_DOCUMENT_SIZE: usize = 256 * 1024 * 1024;
