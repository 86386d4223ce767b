//! A minimal Ethereum-style bytecode interpreter. Programs are a linear
//! stream of PUSH, MSTORE and fixed-width modular arithmetic opcodes; a
//! completed run reports the Keccak-256 digest of the final memory image
//! and the total gas charged.
//!
//! ```
//! let execution = minievm::run_bytecode("6001602052").unwrap();
//! assert_eq!(execution.used_gas, 15);
//! ```

mod executor;
mod hasher;

pub use crate::executor::{Execution, Executor};
pub use crate::hasher::{Keccak256Hasher, MemoryHasher};
pub use minievm_core::{
	ExitError, ExitReason, ExitSucceed, Machine, Memory, Opcode, Stack, STACK_LIMIT,
};
pub use minievm_gasometer::Gasometer;

use core::fmt;

/// Errors surfaced by [`run_bytecode`].
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
	/// The outer hex string is malformed; nothing was executed and no gas
	/// was charged.
	Decoding(hex::FromHexError),
	/// Execution halted. The gas accumulated up to the halt is preserved.
	Execution { error: ExitError, used_gas: u64 },
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Decoding(e) => write!(f, "malformed hex input: {e}"),
			Self::Execution { error, used_gas } => {
				write!(f, "{error} (gas used: {used_gas})")
			}
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Decoding(e) => Some(e),
			Self::Execution { error, .. } => Some(error),
		}
	}
}

/// Decode a hex instruction stream (no `0x` prefix) and execute it against
/// a fresh context, hashing the final memory image with Keccak-256.
///
/// # Errors
/// [`Error::Decoding`] before any execution state exists, otherwise
/// [`Error::Execution`] carrying the gas charged up to the halt.
pub fn run_bytecode(input: &str) -> Result<Execution, Error> {
	let code = hex::decode(input).map_err(Error::Decoding)?;
	let mut executor = Executor::new(code);
	executor
		.run(&Keccak256Hasher)
		.map_err(|error| Error::Execution {
			error,
			used_gas: executor.used_gas(),
		})
}
