use crate::hasher::MemoryHasher;
use log::{debug, trace};
use minievm_core::{ExitError, ExitReason, Machine};
use minievm_gasometer::Gasometer;
use primitive_types::H256;

/// Result of a completed run: the digest of the final memory image and the
/// total gas charged, including the one-time memory expansion cost.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Execution {
	pub digest: H256,
	pub used_gas: u64,
}

impl Execution {
	/// Lowercase hex rendering of the digest.
	#[must_use]
	pub fn digest_hex(&self) -> String {
		hex::encode(self.digest.as_bytes())
	}
}

/// Drives one machine to completion, charging the gasometer as it goes.
/// Each run owns its machine and gasometer exclusively; independent runs
/// never share state.
pub struct Executor {
	machine: Machine,
	gasometer: Gasometer,
}

impl Executor {
	/// Set up a fresh execution context for `code`.
	#[must_use]
	pub fn new(code: Vec<u8>) -> Self {
		Self {
			machine: Machine::new(code),
			gasometer: Gasometer::new(),
		}
	}

	/// The underlying machine, for inspecting stack and memory.
	pub fn machine(&self) -> &Machine {
		&self.machine
	}

	/// Gas charged so far. After a failed run this is the total that had
	/// accumulated when the error surfaced.
	pub fn used_gas(&self) -> u64 {
		self.gasometer.used_gas()
	}

	/// Run the program to completion. Every opcode is billed at dispatch,
	/// before it executes; an instruction that fails afterwards keeps its
	/// charge. On success the final memory expansion charge is applied and
	/// the memory image is hashed.
	///
	/// # Errors
	/// The first handler failure aborts the run; the accumulated gas
	/// remains readable through [`Executor::used_gas`].
	pub fn run<H: MemoryHasher>(&mut self, hasher: &H) -> Result<Execution, ExitError> {
		loop {
			let opcode = match self.machine.inspect() {
				Some(opcode) => opcode,
				None => break,
			};

			if let Err(error) = self.gasometer.record_opcode(opcode) {
				self.machine.exit(error.into());
				return Err(error);
			}
			trace!(
				"executing {:?}, gas charged so far {}",
				opcode,
				self.gasometer.used_gas()
			);

			match self.machine.step() {
				Ok(()) => (),
				Err(ExitReason::Succeed(_)) => break,
				Err(ExitReason::Error(error)) => return Err(error),
			}
		}

		// A machine that already halted with an error never finalizes.
		if let Err(ExitReason::Error(error)) = self.machine.position() {
			return Err(error);
		}

		self.gasometer.record_memory(self.machine.memory().len());
		let digest = hasher.hash(self.machine.memory().data());
		debug!(
			"halted successfully, memory length {}, total gas {}",
			self.machine.memory().len(),
			self.gasometer.used_gas()
		);

		Ok(Execution {
			digest,
			used_gas: self.gasometer.used_gas(),
		})
	}
}
