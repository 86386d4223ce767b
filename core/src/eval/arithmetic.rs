use primitive_types::U256;

/// Integer division, truncating toward zero. Division by zero yields zero
/// rather than an error. Despite the opcode's historical name the operands
/// carry no sign interpretation here.
pub fn div(op1: U256, op2: U256) -> U256 {
	if op2 == U256::zero() {
		U256::zero()
	} else {
		op1 / op2
	}
}

/// `op1 ^ op2` by square-and-multiply, wrapping modulo 2^256.
pub fn exp(op1: U256, op2: U256) -> U256 {
	let mut op1 = op1;
	let mut op2 = op2;
	let mut r = U256::one();

	while op2 != U256::zero() {
		if op2 & U256::one() != U256::zero() {
			r = r.overflowing_mul(op1).0;
		}
		op2 = op2 >> 1;
		op1 = op1.overflowing_mul(op1).0;
	}

	r
}
