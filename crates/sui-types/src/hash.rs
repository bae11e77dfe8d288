//! SHA3-256, used for address derivation and transaction digests.

use fastcrypto::hash::{HashFunction, Sha3_256};

pub const DIGEST_LENGTH: usize = 32;

pub fn sha3_256(data: impl AsRef<[u8]>) -> [u8; DIGEST_LENGTH] {
    Sha3_256::digest(data).digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha3_256_known_answers() {
        assert_eq!(
            hex::encode(sha3_256(b"")),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
        assert_eq!(
            hex::encode(sha3_256(b"abc")),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }
}
