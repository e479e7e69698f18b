pub mod convert;
pub mod pal_asm;
pub mod pal_gpl;
pub mod palette;

/// Smallest accepted 8-bit channel value.
pub const MIN_RGB: i64 = 0;
/// Largest accepted 8-bit channel value.
pub const MAX_RGB: i64 = 255;

/// 8-bit channel values are divided by this to get their 6-bit counterpart.
const COLOR_DIVISOR: u8 = 4;
