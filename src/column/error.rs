use std::fmt;

use thiserror::Error;

/// Context captured when a bit index falls outside the packed buffer.
///
/// Carries everything needed to diagnose a malformed column after the fact:
/// the decomposed indices, a copy of the buffer and the size of the mask table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfRange {
    pub index: usize,
    pub byte_index: usize,
    pub bit_index: usize,
    pub value: Vec<u8>,
    pub mask_table_len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bit index {} out of range: byte index {} >= buffer length {}",
            self.index,
            self.byte_index,
            self.value.len()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitColumnError {
    #[error("invalid length: {length} (buffer holds {capacity} bits)")]
    InvalidArgument { length: usize, capacity: usize },

    #[error("{0}")]
    IndexOutOfRange(OutOfRange),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_names_length_and_capacity() {
        let err = BitColumnError::InvalidArgument {
            length: 9,
            capacity: 8,
        };
        assert_eq!(err.to_string(), "invalid length: 9 (buffer holds 8 bits)");
    }

    #[test]
    fn out_of_range_message_names_indices() {
        let err = BitColumnError::IndexOutOfRange(OutOfRange {
            index: 17,
            byte_index: 2,
            bit_index: 1,
            value: vec![0x05, 0x00],
            mask_table_len: 8,
        });
        assert_eq!(
            err.to_string(),
            "bit index 17 out of range: byte index 2 >= buffer length 2"
        );
    }
}
