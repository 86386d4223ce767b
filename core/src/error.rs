use core::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExitReason {
	Succeed(ExitSucceed),
	Error(ExitError),
}

impl ExitReason {
	#[must_use]
	pub fn is_succeed(&self) -> bool {
		matches!(self, Self::Succeed(_))
	}

	#[must_use]
	pub fn is_error(&self) -> bool {
		matches!(self, Self::Error(_))
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExitSucceed {
	/// The machine consumed the whole instruction stream.
	Stopped,
}

impl From<ExitSucceed> for ExitReason {
	fn from(exit: ExitSucceed) -> Self {
		Self::Succeed(exit)
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExitError {
	/// A pop was attempted on an empty stack.
	StackUnderflow,
	/// A push would exceed the stack bound.
	StackOverflow,
	/// An unrecognized opcode byte was encountered.
	InvalidInstruction,
	/// A PUSH immediate extends past the end of the instruction stream.
	MalformedImmediate,
	/// A memory range does not fit the addressable space.
	InvalidRange,
}

impl From<ExitError> for ExitReason {
	fn from(exit: ExitError) -> Self {
		Self::Error(exit)
	}
}

impl fmt::Display for ExitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::StackUnderflow => write!(f, "stack is empty, cannot pop"),
			Self::StackOverflow => write!(f, "cannot push, stack is already full"),
			Self::InvalidInstruction => write!(f, "invalid instruction found"),
			Self::MalformedImmediate => write!(f, "push immediate runs past the end of the code"),
			Self::InvalidRange => write!(f, "memory range is not addressable"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for ExitError {}
