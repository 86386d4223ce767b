/// Opcode enum. One-to-one corresponding to an `u8` value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Opcode(pub u8);

impl Opcode {
	/// `ADD`
	pub const ADD: Opcode = Opcode(0x01);
	/// `MUL`
	pub const MUL: Opcode = Opcode(0x02);
	/// `SDIV`
	pub const SDIV: Opcode = Opcode(0x05);
	/// `EXP`
	pub const EXP: Opcode = Opcode(0x0a);
	/// `MSTORE`
	pub const MSTORE: Opcode = Opcode(0x52);
	/// `MSTORE8`
	pub const MSTORE8: Opcode = Opcode(0x53);
	/// `PUSH1`
	pub const PUSH1: Opcode = Opcode(0x60);
	/// `PUSH2`
	pub const PUSH2: Opcode = Opcode(0x61);
	/// `PUSH3`
	pub const PUSH3: Opcode = Opcode(0x62);
	/// `PUSH32`
	pub const PUSH32: Opcode = Opcode(0x7f);

	#[inline]
	#[must_use]
	pub const fn as_u8(&self) -> u8 {
		self.0
	}

	#[inline]
	#[must_use]
	pub const fn as_usize(&self) -> usize {
		self.0 as usize
	}

	/// Immediate operand width for PUSH-class opcodes, `None` for
	/// everything else.
	#[must_use]
	pub const fn push_width(&self) -> Option<usize> {
		match *self {
			Opcode::PUSH1 => Some(1),
			Opcode::PUSH2 => Some(2),
			Opcode::PUSH3 => Some(3),
			Opcode::PUSH32 => Some(32),
			_ => None,
		}
	}
}
