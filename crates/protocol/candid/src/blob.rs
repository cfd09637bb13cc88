//! Blob literal decoding.
//!
//! Candid prints `blob` values as a quoted string where every byte is written as a
//! backslash followed by two hex digits, e.g. `blob "\3a\ff\00"`.

/// Decodes the body of a blob literal into a canonical (lowercase) hex string.
///
/// Only `\xx` escape tokens are extracted, in order. Every other character is ignored,
/// so an empty literal, or one without any escapes, decodes to an empty string.
pub fn decode_blob(literal: &str) -> String {
    let bytes = literal.as_bytes();
    let mut hex = String::with_capacity(bytes.len() / 3 * 2);

    let mut i = 0;
    while i + 2 < bytes.len() {
        if bytes[i] == b'\\' && bytes[i + 1].is_ascii_hexdigit() && bytes[i + 2].is_ascii_hexdigit()
        {
            hex.push(bytes[i + 1].to_ascii_lowercase() as char);
            hex.push(bytes[i + 2].to_ascii_lowercase() as char);
            i += 3;
        } else {
            i += 1;
        }
    }
    hex
}

/// Encodes a hex string as the body of a blob literal, escaping every byte.
///
/// A trailing odd nibble is dropped, as are any non-hex characters.
pub fn encode_blob(hex: &str) -> String {
    let digits: Vec<char> =
        hex.chars().filter(char::is_ascii_hexdigit).map(|c| c.to_ascii_lowercase()).collect();
    let mut literal = String::with_capacity(digits.len() / 2 * 3);
    for pair in digits.chunks_exact(2) {
        literal.push('\\');
        literal.extend(pair);
    }
    literal
}
