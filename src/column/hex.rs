/// Decodes a packed buffer written as hex digits, two per byte, byte `0`
/// first. A single leading `0x` is accepted.
///
/// # Examples
/// ```
/// use bitcolumn::column::parse_hex;
///
/// assert_eq!(parse_hex("0x05ff"), Ok(vec![0x05, 0xff]));
/// assert!(parse_hex("5").is_err());
/// ```
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    if let Some(offset) = digits.bytes().position(|b| !b.is_ascii_hexdigit()) {
        return Err(format!("invalid hex digit at offset {offset} in {s:?}"));
    }
    if !digits.len().is_multiple_of(2) {
        return Err(format!("odd number of hex digits in {s:?}"));
    }

    // all ascii from here, so byte offsets are char boundaries
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| format!("invalid hex byte at offset {i} in {s:?}: {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_bytes_in_order() {
        assert_eq!(parse_hex(""), Ok(vec![]));
        assert_eq!(parse_hex("05"), Ok(vec![0x05]));
        assert_eq!(parse_hex("ff01"), Ok(vec![0xff, 0x01]));
        assert_eq!(parse_hex("0xAbCd"), Ok(vec![0xab, 0xcd]));
        assert_eq!(parse_hex("0x"), Ok(vec![]));
    }

    #[test]
    fn rejects_odd_length() {
        assert!(parse_hex("5").is_err());
        assert!(parse_hex("0x050").is_err());
    }

    #[test]
    fn rejects_sign_characters() {
        for input in ["+f", "-f", "+0ff", "0x+f"] {
            assert!(parse_hex(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn strips_prefix_only_once() {
        assert!(parse_hex("0x0x05").is_err());
    }

    #[test]
    fn rejects_non_ascii_and_non_hex() {
        for input in ["é0", "0é", "zz", "0g", " 05", "05 "] {
            assert!(parse_hex(input).is_err(), "{input:?} should be rejected");
        }
    }
}
