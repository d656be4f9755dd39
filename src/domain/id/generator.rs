//! Random identifier generation
//!
//! Identifiers are 128 random bits rendered in a lowercase base32 alphabet
//! that avoids visually ambiguous characters.

use rand::Rng;
use uuid::Uuid;

/// Base32 alphabet used for identifiers and random strings
pub const ID_ALPHABET: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

/// Length of an encoded identifier
pub const ID_LENGTH: usize = 26;

/// Generate a new random identifier (26 characters)
pub fn new_id() -> String {
    encode_base32(Uuid::new_v4().as_bytes())
}

/// Generate a random string of exactly `length` characters from [`ID_ALPHABET`]
pub fn new_random_string(length: usize) -> String {
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Encode bytes as unpadded base32 using [`ID_ALPHABET`]
fn encode_base32(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut buffer: u16 = 0;
    let mut bits: u32 = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | u16::from(byte);
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            out.push(ID_ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }

        buffer &= (1u16 << bits) - 1;
    }

    if bits > 0 {
        out.push(ID_ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }

    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_new_id_length() {
        for _ in 0..1000 {
            let id = new_id();
            assert!(id.len() <= ID_LENGTH, "ids shouldn't be longer than 26 chars");
        }
    }

    #[test]
    fn test_new_id_is_exactly_id_length() {
        assert_eq!(new_id().len(), ID_LENGTH);
    }

    #[test]
    fn test_new_id_uses_alphabet() {
        let id = new_id();
        assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_new_id_uniqueness() {
        let ids: HashSet<String> = (0..1000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_new_random_string_length() {
        for _ in 0..1000 {
            assert_eq!(new_random_string(32).len(), 32);
        }
    }

    #[test]
    fn test_new_random_string_zero_length() {
        assert_eq!(new_random_string(0), "");
    }

    #[test]
    fn test_new_random_string_uses_alphabet() {
        let value = new_random_string(256);
        assert!(value.bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_encode_base32_known_values() {
        // 0x00 -> 00000|000 -> "yy"
        assert_eq!(encode_base32(&[0x00]), "yy");
        // 0xff -> 11111|111(00) -> alphabet[31], alphabet[28]
        assert_eq!(encode_base32(&[0xff]), "9h");
        assert_eq!(encode_base32(&[]), "");
    }

    #[test]
    fn test_encode_base32_sixteen_bytes() {
        assert_eq!(encode_base32(&[0u8; 16]), "y".repeat(26));
    }
}
