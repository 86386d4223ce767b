use primitive_types::H256;
use sha3::{Digest, Keccak256};

/// Digest over the final memory image. The algorithm itself is opaque to
/// the interpreter; the trait exists so tests can substitute a stub.
pub trait MemoryHasher {
	fn hash(&self, data: &[u8]) -> H256;
}

/// Keccak-256, the digest the EVM hashes memory with.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256Hasher;

impl MemoryHasher for Keccak256Hasher {
	fn hash(&self, data: &[u8]) -> H256 {
		H256::from_slice(Keccak256::digest(data).as_slice())
	}
}

#[cfg(test)]
mod tests {
	use super::{Keccak256Hasher, MemoryHasher};

	#[test]
	fn keccak_of_empty_input() {
		let digest = Keccak256Hasher.hash(&[]);
		assert_eq!(
			hex::encode(digest.as_bytes()),
			"c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
		);
	}

	#[test]
	fn keccak_of_zero_word() {
		let digest = Keccak256Hasher.hash(&[0u8; 32]);
		assert_eq!(
			hex::encode(digest.as_bytes()),
			"290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563"
		);
	}
}
