use super::Control;
use crate::{ExitError, Machine};
use primitive_types::U256;

pub fn push(state: &mut Machine, n: usize, position: usize) -> Control {
	let end = position + 1 + n;
	if end > state.code.len() {
		return Control::Exit(ExitError::MalformedImmediate.into());
	}

	// The immediate lands in the low-order bytes of the word, leading
	// bytes zero.
	push_u256!(
		state,
		U256::from_big_endian(&state.code[(position + 1)..end])
	);
	Control::Continue(1 + n)
}

pub fn mstore(state: &mut Machine) -> Control {
	pop_u256!(state, index);
	pop_h256!(state, value);
	let index = as_usize_or_fail!(index);
	try_or_fail!(state.memory.resize_offset(index, 32));
	try_or_fail!(state.memory.set(index, &value[..]));
	Control::Continue(1)
}

pub fn mstore8(state: &mut Machine) -> Control {
	pop_u256!(state, index, value);
	let index = as_usize_or_fail!(index);
	try_or_fail!(state.memory.resize_offset(index, 1));
	let value = (value.low_u32() & 0xff) as u8;
	try_or_fail!(state.memory.set(index, &[value]));
	Control::Continue(1)
}
