#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod eval;
mod memory;
mod opcode;
mod stack;
mod utils;

pub use crate::error::{ExitError, ExitReason, ExitSucceed};
pub use crate::memory::Memory;
pub use crate::opcode::Opcode;
pub use crate::stack::Stack;

use crate::eval::{eval, Control};
use alloc::vec::Vec;

/// Maximum number of elements the operand stack may hold.
pub const STACK_LIMIT: usize = 1024;

/// Core execution layer. One machine owns the ephemeral state of a single
/// run: the operand stack, the auto-expanding memory and the program
/// counter. Nothing survives the run.
pub struct Machine {
	/// Program code.
	code: Vec<u8>,
	/// Program counter.
	position: Result<usize, ExitReason>,
	/// Memory.
	memory: Memory,
	/// Stack.
	stack: Stack,
}

impl Machine {
	/// Create a fresh machine for `code`.
	#[must_use]
	pub fn new(code: Vec<u8>) -> Self {
		Self {
			code,
			position: Ok(0),
			memory: Memory::new(),
			stack: Stack::new(STACK_LIMIT),
		}
	}

	/// Reference to the operand stack.
	pub fn stack(&self) -> &Stack {
		&self.stack
	}

	/// Mutable reference to the operand stack.
	pub fn stack_mut(&mut self) -> &mut Stack {
		&mut self.stack
	}

	/// Reference to the memory.
	pub fn memory(&self) -> &Memory {
		&self.memory
	}

	/// Mutable reference to the memory.
	pub fn memory_mut(&mut self) -> &mut Memory {
		&mut self.memory
	}

	/// Program counter, or the reason the machine halted.
	pub fn position(&self) -> Result<usize, ExitReason> {
		self.position
	}

	/// Force the machine to halt with `reason`.
	pub fn exit(&mut self, reason: ExitReason) {
		self.position = Err(reason);
	}

	/// Opcode at the current program counter, if the machine is still
	/// running and the counter is within the code.
	pub fn inspect(&self) -> Option<Opcode> {
		let position = self.position.ok()?;
		self.code.get(position).map(|v| Opcode(*v))
	}

	/// Run the machine until it halts.
	pub fn run(&mut self) -> ExitReason {
		loop {
			match self.step() {
				Ok(()) => (),
				Err(reason) => return reason,
			}
		}
	}

	/// Execute a single instruction. Reaching the end of the code halts
	/// with `ExitSucceed::Stopped`.
	pub fn step(&mut self) -> Result<(), ExitReason> {
		let position = match self.position {
			Ok(position) => position,
			Err(reason) => return Err(reason),
		};

		let opcode = match self.code.get(position) {
			Some(v) => Opcode(*v),
			None => {
				self.position = Err(ExitSucceed::Stopped.into());
				return Err(ExitSucceed::Stopped.into());
			}
		};

		match eval(self, opcode, position) {
			Control::Continue(bytes) => {
				self.position = Ok(position + bytes);
				Ok(())
			}
			Control::Exit(reason) => {
				self.position = Err(reason);
				Err(reason)
			}
		}
	}
}
