use minievm::{run_bytecode, Error, Executor, ExitError, MemoryHasher};
use primitive_types::H256;

const KECCAK_EMPTY: &str = "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";

/// Stub digest: records the input length in the first word of the output.
struct LenHasher;

impl MemoryHasher for LenHasher {
	fn hash(&self, data: &[u8]) -> H256 {
		H256::from_low_u64_be(data.len() as u64)
	}
}

#[test]
fn empty_program() {
	let execution = run_bytecode("").unwrap();
	assert_eq!(execution.used_gas, 0);
	assert_eq!(execution.digest_hex(), KECCAK_EMPTY);
}

#[test]
fn single_push_leaves_memory_empty() {
	// PUSH1 0x01: one fixed charge, no memory, digest of the empty image.
	let execution = run_bytecode("6001").unwrap();
	assert_eq!(execution.used_gas, 3);
	assert_eq!(execution.digest_hex(), KECCAK_EMPTY);
}

#[test]
fn mstore_at_offset_32() {
	// PUSH1 0x01, PUSH1 0x20, MSTORE: two pushes and the store cost 9,
	// the final 64-byte memory adds 4/512 + 3*2 = 6.
	let execution = run_bytecode("6001602052").unwrap();
	assert_eq!(execution.used_gas, 15);

	let mut executor = Executor::new(hex::decode("6001602052").unwrap());
	executor.run(&LenHasher).unwrap();
	let memory = executor.machine().memory().data();
	assert_eq!(memory.len(), 64);
	assert_eq!(memory[63], 0x01);
	assert!(memory[..63].iter().all(|b| *b == 0));
}

#[test]
fn mstore_at_offset_0() {
	// PUSH1 0x01, PUSH1 0x00, MSTORE: 9 fixed plus 1/512 + 3*1 = 3.
	let execution = run_bytecode("6001600052").unwrap();
	assert_eq!(execution.used_gas, 12);
}

#[test]
fn mstore8_bills_like_mstore() {
	// PUSH1 0xff, PUSH1 0x1f, MSTORE8: memory grows to one word.
	let execution = run_bytecode("60ff601f53").unwrap();
	assert_eq!(execution.used_gas, 12);

	let mut executor = Executor::new(hex::decode("60ff601f53").unwrap());
	executor.run(&LenHasher).unwrap();
	let memory = executor.machine().memory().data();
	assert_eq!(memory.len(), 32);
	assert_eq!(memory[31], 0xff);
}

#[test]
fn exp_charges_ten_plus_fifty_per_slot_byte() {
	// PUSH1 0x02, PUSH1 0x0a, EXP: the exponent slot is a full 32-byte
	// word, so EXP costs 10 + 50 * 32 regardless of the value pushed.
	let execution = run_bytecode("6002600a0a").unwrap();
	assert_eq!(execution.used_gas, 3 + 3 + 1610);
}

#[test]
fn arithmetic_gas_totals() {
	// PUSH1 2, PUSH1 3, ADD => 3 + 3 + 3.
	assert_eq!(run_bytecode("6002600301").unwrap().used_gas, 9);
	// PUSH1 2, PUSH1 3, MUL => 3 + 3 + 5.
	assert_eq!(run_bytecode("6002600302").unwrap().used_gas, 11);
	// PUSH1 0 (divisor), PUSH1 5, SDIV => 3 + 3 + 5, and never an error.
	assert_eq!(run_bytecode("6000600505").unwrap().used_gas, 11);
}

#[test]
fn invalid_instruction_reports_accumulated_gas() {
	// A bad byte up front: nothing was charged.
	match run_bytecode("ff") {
		Err(Error::Execution { error, used_gas }) => {
			assert_eq!(error, ExitError::InvalidInstruction);
			assert_eq!(used_gas, 0);
		}
		other => panic!("unexpected result: {other:?}"),
	}

	// One push lands before the bad byte.
	match run_bytecode("6001fe") {
		Err(Error::Execution { error, used_gas }) => {
			assert_eq!(error, ExitError::InvalidInstruction);
			assert_eq!(used_gas, 3);
		}
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn truncated_push_immediate() {
	// PUSH32 with two bytes of immediate left: the push is billed at
	// dispatch, then fails before touching the stack.
	match run_bytecode("7f0102") {
		Err(Error::Execution { error, used_gas }) => {
			assert_eq!(error, ExitError::MalformedImmediate);
			assert_eq!(used_gas, 3);
		}
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn stack_underflow_keeps_the_opcode_charge() {
	match run_bytecode("52") {
		Err(Error::Execution { error, used_gas }) => {
			assert_eq!(error, ExitError::StackUnderflow);
			assert_eq!(used_gas, 3);
		}
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn stack_overflow_bills_the_failed_push() {
	let code = "6001".repeat(1025);
	match run_bytecode(&code) {
		Err(Error::Execution { error, used_gas }) => {
			assert_eq!(error, ExitError::StackOverflow);
			// 1024 successful pushes plus the attempted 1025th.
			assert_eq!(used_gas, 3 * 1025);
		}
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn hex_decoding_failures_precede_execution() {
	assert!(matches!(run_bytecode("zz"), Err(Error::Decoding(_))));
	// Odd number of digits.
	assert!(matches!(run_bytecode("600"), Err(Error::Decoding(_))));
}

#[test]
fn runs_are_deterministic() {
	let first = run_bytecode("6001602052600260030160001a0a").err();
	let second = run_bytecode("6001602052600260030160001a0a").err();
	assert_eq!(first, second);

	let first = run_bytecode("6001602052").unwrap();
	let second = run_bytecode("6001602052").unwrap();
	assert_eq!(first, second);
}

#[test]
fn digest_backend_is_pluggable() {
	let mut executor = Executor::new(hex::decode("6001602052").unwrap());
	let execution = executor.run(&LenHasher).unwrap();
	// The stub saw the 64-byte final memory image.
	assert_eq!(execution.digest, H256::from_low_u64_be(64));
	assert_eq!(execution.used_gas, 15);
}
