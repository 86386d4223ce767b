#[macro_use]
mod macros;
mod arithmetic;
mod misc;

use crate::{ExitError, ExitReason, Machine, Opcode};

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Control {
	Continue(usize),
	Exit(ExitReason),
}

#[inline]
pub fn eval(state: &mut Machine, opcode: Opcode, position: usize) -> Control {
	static TABLE: [fn(state: &mut Machine, opcode: Opcode, position: usize) -> Control; 256] = {
		fn eval_invalid(_state: &mut Machine, _opcode: Opcode, _position: usize) -> Control {
			Control::Exit(ExitError::InvalidInstruction.into())
		}
		let mut table = [eval_invalid as _; 256];
		macro_rules! table_elem {
			($operation:ident, $state:ident, $definition:expr) => {
				table_elem!($operation, $state, _pc, $definition)
			};
			($operation:ident, $state:ident, $pc:ident, $definition:expr) => {
				#[allow(non_snake_case)]
				fn $operation($state: &mut Machine, _opcode: Opcode, $pc: usize) -> Control {
					$definition
				}
				table[Opcode::$operation.as_usize()] = $operation as _;
			};
		}
		table_elem!(ADD, state, op2_u256_tuple!(state, overflowing_add));
		table_elem!(MUL, state, op2_u256_tuple!(state, overflowing_mul));
		table_elem!(SDIV, state, op2_u256_fn!(state, self::arithmetic::div));
		table_elem!(EXP, state, op2_u256_fn!(state, self::arithmetic::exp));
		table_elem!(MSTORE, state, self::misc::mstore(state));
		table_elem!(MSTORE8, state, self::misc::mstore8(state));
		table_elem!(PUSH1, state, position, self::misc::push(state, 1, position));
		table_elem!(PUSH2, state, position, self::misc::push(state, 2, position));
		table_elem!(PUSH3, state, position, self::misc::push(state, 3, position));
		table_elem!(PUSH32, state, position, self::misc::push(state, 32, position));
		table
	};
	TABLE[opcode.as_usize()](state, opcode, position)
}
