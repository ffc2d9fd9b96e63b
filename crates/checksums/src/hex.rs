const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Renders `bytes` as lower-case hexadecimal, two characters per byte.
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
        out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::to_hex;

    #[test]
    fn empty_input_renders_empty_string() {
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn bytes_render_with_leading_zeros() {
        assert_eq!(to_hex(&[0x00, 0x0f, 0xa0, 0xff]), "000fa0ff");
    }
}
