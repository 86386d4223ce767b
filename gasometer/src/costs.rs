use crate::consts;
use minievm_core::Opcode;

/// Static cost of a single opcode, `None` when the byte is not a known
/// instruction. The whole charge is determined at dispatch; no opcode in
/// this machine carries an operand-dependent cost.
#[must_use]
pub fn opcode_cost(opcode: Opcode) -> Option<u64> {
	match opcode {
		Opcode::ADD | Opcode::MSTORE | Opcode::MSTORE8 => Some(consts::G_VERYLOW),
		Opcode::PUSH1 | Opcode::PUSH2 | Opcode::PUSH3 | Opcode::PUSH32 => Some(consts::G_VERYLOW),
		Opcode::MUL | Opcode::SDIV => Some(consts::G_LOW),
		Opcode::EXP => Some(exp_cost()),
		_ => None,
	}
}

/// EXP charges a base fee plus a per-byte fee over the exponent slot
/// width, which is fixed at 32 bytes.
#[must_use]
pub const fn exp_cost() -> u64 {
	consts::G_EXP + consts::G_EXPBYTE * consts::WORD_BYTES
}

/// Memory expansion charge for a final memory of `len` bytes, applied once
/// per run: `words^2 / 512 + 3 * words` over the word count.
#[must_use]
pub fn memory_gas(len: usize) -> u64 {
	let words = (len as u64 + 31) / 32;
	words.saturating_mul(words) / 512 + consts::G_MEMORY.saturating_mul(words)
}
