#![cfg_attr(not(feature = "std"), no_std)]

mod consts;
mod costs;

pub use crate::costs::{exp_cost, memory_gas, opcode_cost};

use minievm_core::{ExitError, Opcode};

/// Running gas total for one execution. The counter only ever grows and is
/// never enforced as a limit; it is reported alongside success and error
/// alike.
#[derive(Clone, Debug, Default)]
pub struct Gasometer {
	used_gas: u64,
}

impl Gasometer {
	#[must_use]
	pub const fn new() -> Self {
		Self { used_gas: 0 }
	}

	/// Total gas recorded so far.
	#[inline]
	#[must_use]
	pub const fn used_gas(&self) -> u64 {
		self.used_gas
	}

	/// Record an explicit cost.
	#[inline]
	pub fn record_cost(&mut self, cost: u64) {
		self.used_gas = self.used_gas.saturating_add(cost);
	}

	/// Record the cost of `opcode`. The charge lands before the opcode
	/// executes, so a failing instruction still pays.
	///
	/// # Errors
	/// `ExitError::InvalidInstruction` for an unknown byte; nothing is
	/// charged in that case.
	pub fn record_opcode(&mut self, opcode: Opcode) -> Result<(), ExitError> {
		match costs::opcode_cost(opcode) {
			Some(cost) => {
				self.record_cost(cost);
				Ok(())
			}
			None => Err(ExitError::InvalidInstruction),
		}
	}

	/// Record the one-time memory expansion charge for the final memory
	/// length.
	pub fn record_memory(&mut self, len: usize) {
		self.record_cost(costs::memory_gas(len));
	}
}

#[cfg(test)]
mod tests {
	use super::{memory_gas, opcode_cost, Gasometer};
	use minievm_core::{ExitError, Opcode};

	#[test]
	fn static_costs() {
		assert_eq!(opcode_cost(Opcode::ADD), Some(3));
		assert_eq!(opcode_cost(Opcode::MUL), Some(5));
		assert_eq!(opcode_cost(Opcode::SDIV), Some(5));
		assert_eq!(opcode_cost(Opcode::MSTORE), Some(3));
		assert_eq!(opcode_cost(Opcode::MSTORE8), Some(3));
		for push in [Opcode::PUSH1, Opcode::PUSH2, Opcode::PUSH3, Opcode::PUSH32] {
			assert_eq!(opcode_cost(push), Some(3));
		}
	}

	#[test]
	fn exp_bills_the_full_slot_width() {
		assert_eq!(opcode_cost(Opcode::EXP), Some(10 + 50 * 32));
	}

	#[test]
	fn unknown_bytes_have_no_cost() {
		assert_eq!(opcode_cost(Opcode(0x00)), None);
		assert_eq!(opcode_cost(Opcode(0xfe)), None);
		assert_eq!(opcode_cost(Opcode(0xff)), None);

		let mut gasometer = Gasometer::new();
		assert_eq!(
			gasometer.record_opcode(Opcode(0xff)),
			Err(ExitError::InvalidInstruction)
		);
		assert_eq!(gasometer.used_gas(), 0);
	}

	#[test]
	fn memory_gas_formula() {
		assert_eq!(memory_gas(0), 0);
		assert_eq!(memory_gas(32), 3);
		assert_eq!(memory_gas(64), 6);
		// Partial words round up.
		assert_eq!(memory_gas(33), 6);
		// The quadratic term kicks in past 512 bytes' worth of words.
		let words = 1024u64;
		assert_eq!(memory_gas(32 * 1024), words * words / 512 + 3 * words);
	}

	#[test]
	fn gasometer_accumulates() {
		let mut gasometer = Gasometer::new();
		gasometer.record_opcode(Opcode::PUSH1).unwrap();
		gasometer.record_opcode(Opcode::PUSH1).unwrap();
		gasometer.record_opcode(Opcode::MSTORE).unwrap();
		gasometer.record_memory(64);
		assert_eq!(gasometer.used_gas(), 3 + 3 + 3 + 6);
	}
}
