//! Light, symmetric obfuscation of frame bytes.
//!
//! None of this is encryption in any meaningful sense: every byte is rotated
//! by 1 to 7 bits, either by a constant amount or by an amount taken from a
//! repeating key. It only makes the frame unreadable to a decoder that does
//! not know the parameters, and it makes the signature check fail for one.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Obfuscation {
    #[default]
    None,
    /// Rotate every byte left by a fixed amount in `1..=7`
    Caesar(u8),
    /// Rotate byte `i` left by `key[i % key.len()] % 7 + 1`
    Vigenere(String),
}

/// 8-bit circular shift; `shift` is taken modulo 8
pub fn rotate_left(byte: u8, shift: u32) -> u8 {
    byte.rotate_left(shift)
}

pub fn rotate_right(byte: u8, shift: u32) -> u8 {
    byte.rotate_right(shift)
}

// Key units are UTF-16 code units, so the shift for a non-ASCII key
// character matches what other implementations of the format compute.
fn key_shifts(key: &str) -> impl Iterator<Item = u32> + '_ {
    key.encode_utf16().map(|unit| (unit % 7) as u32 + 1).cycle()
}

fn transform(bytes: &[u8], obfuscation: &Obfuscation, rotate: fn(u8, u32) -> u8) -> Vec<u8> {
    match obfuscation {
        Obfuscation::None => bytes.to_vec(),
        Obfuscation::Caesar(shift) => bytes.iter().map(|&b| rotate(b, *shift as u32)).collect(),
        Obfuscation::Vigenere(key) => bytes
            .iter()
            .zip(key_shifts(key))
            .map(|(&b, shift)| rotate(b, shift))
            .collect(),
    }
}

pub fn encrypt(bytes: &[u8], obfuscation: &Obfuscation) -> Vec<u8> {
    transform(bytes, obfuscation, rotate_left)
}

pub fn decrypt(bytes: &[u8], obfuscation: &Obfuscation) -> Vec<u8> {
    transform(bytes, obfuscation, rotate_right)
}
