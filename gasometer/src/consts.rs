pub const G_VERYLOW: u64 = 3;
pub const G_LOW: u64 = 5;
pub const G_EXP: u64 = 10;
pub const G_EXPBYTE: u64 = 50;
pub const G_MEMORY: u64 = 3;

/// Byte width of one stack slot. EXP bills its exponent by the width of
/// the slot it was popped from, not by the value's minimal encoding.
pub const WORD_BYTES: u64 = 32;
