use crate::ExitError;
use alloc::vec::Vec;

/// A sequencial memory. It uses Rust's `Vec` for internal representation.
/// The buffer starts empty and only ever grows, in whole 32-byte words,
/// so its length is always a multiple of 32. Bytes never written are zero.
#[derive(Clone, Debug, Default)]
pub struct Memory {
	data: Vec<u8>,
}

impl Memory {
	/// Create a new, empty memory.
	#[must_use]
	pub const fn new() -> Self {
		Self { data: Vec::new() }
	}

	/// Get the length of the current memory range.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Return true if the memory has never been grown.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Return the full memory.
	#[inline]
	#[must_use]
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Grow the memory, making it cover the region `offset..(offset + len)`,
	/// with 32 bytes as the step. Growth is monotonic; if the region is
	/// already covered this is a no-op. A zero `len` never grows.
	///
	/// # Errors
	/// `ExitError::InvalidRange` when the end of the region does not fit
	/// the addressable space.
	pub fn resize_offset(&mut self, offset: usize, len: usize) -> Result<(), ExitError> {
		if len == 0 {
			return Ok(());
		}

		let end = offset.checked_add(len).ok_or(ExitError::InvalidRange)?;
		if end > self.data.len() {
			let new_len = next_multiple_of_32(end).ok_or(ExitError::InvalidRange)?;
			self.data.resize(new_len, 0);
		}

		Ok(())
	}

	/// Set memory region at given offset. The caller grows the memory
	/// first; a region that is still out of range is rejected.
	///
	/// # Errors
	/// Return `ExitError`
	pub fn set(&mut self, offset: usize, value: &[u8]) -> Result<(), ExitError> {
		let end = offset.checked_add(value.len()).ok_or(ExitError::InvalidRange)?;
		if end > self.data.len() {
			return Err(ExitError::InvalidRange);
		}

		self.data[offset..end].copy_from_slice(value);
		Ok(())
	}
}

/// Rounds up `x` to the closest multiple of 32. If `x % 32 == 0` then `x`
/// is returned.
#[inline]
fn next_multiple_of_32(x: usize) -> Option<usize> {
	if x % 32 == 0 {
		return Some(x);
	}
	x.checked_add(32 - x % 32)
}
