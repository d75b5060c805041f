//! Message hash computation
//!
//! Every message is identified by a keccak256 hash over its full envelope.
//! The destination domain is part of the hash, so a message relayed on the
//! wrong domain never matches the one dispatched.
//!
//! # Byte Layout
//! - Bytes 0-31:   destination domain (u64, big-endian, left-padded)
//! - Bytes 32-63:  source domain (u64, big-endian, left-padded)
//! - Bytes 64-95:  nonce (u64, big-endian, left-padded)
//! - Then `sender`, `target` and `message`, each as a 32-byte length word
//!   followed by the raw bytes

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Compute the identity hash of a cross-domain message.
pub fn compute_message_hash(
    destination: u64,
    source: u64,
    nonce: u64,
    sender: &str,
    target: &str,
    message: &[u8],
) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(&u64_word(destination));
    hasher.update(&u64_word(source));
    hasher.update(&u64_word(nonce));
    for field in [sender.as_bytes(), target.as_bytes(), message] {
        hasher.update(&u64_word(field.len() as u64));
        hasher.update(field);
    }
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Convert a 32-byte hash to a 0x-prefixed hex string
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// keccak256("hello") = 0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8
    #[test]
    fn test_keccak256_basic() {
        let result = keccak256(b"hello");
        assert_eq!(
            bytes32_to_hex(&result),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_message_hash_matches_manual_encoding() {
        let mut data = Vec::new();
        data.extend_from_slice(&u64_word(2));
        data.extend_from_slice(&u64_word(1));
        data.extend_from_slice(&u64_word(7));
        for field in [&b"alice"[..], &b"bob"[..], &b"{}"[..]] {
            data.extend_from_slice(&u64_word(field.len() as u64));
            data.extend_from_slice(field);
        }

        assert_eq!(
            compute_message_hash(2, 1, 7, "alice", "bob", b"{}"),
            keccak256(&data)
        );
    }

    #[test]
    fn test_message_hash_binds_every_field() {
        let base = compute_message_hash(2, 1, 0, "sender", "target", b"payload");

        assert_ne!(base, compute_message_hash(3, 1, 0, "sender", "target", b"payload"));
        assert_ne!(base, compute_message_hash(2, 4, 0, "sender", "target", b"payload"));
        assert_ne!(base, compute_message_hash(2, 1, 1, "sender", "target", b"payload"));
        assert_ne!(base, compute_message_hash(2, 1, 0, "other", "target", b"payload"));
        assert_ne!(base, compute_message_hash(2, 1, 0, "sender", "other", b"payload"));
        assert_ne!(base, compute_message_hash(2, 1, 0, "sender", "target", b"other"));
    }

    /// Length prefixes keep field boundaries unambiguous
    #[test]
    fn test_message_hash_field_boundaries() {
        assert_ne!(
            compute_message_hash(2, 1, 0, "ab", "c", b""),
            compute_message_hash(2, 1, 0, "a", "bc", b"")
        );
    }

    #[test]
    fn test_u64_word_left_padding() {
        let word = u64_word(42);
        assert_eq!(&word[0..24], &[0u8; 24]);
        assert_eq!(word[31], 42);
    }
}
