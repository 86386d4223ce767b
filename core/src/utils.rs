use primitive_types::U256;

/// Precalculated `usize::MAX` for `U256`.
pub const USIZE_MAX: U256 = U256([usize::MAX as u64, 0, 0, 0]);
