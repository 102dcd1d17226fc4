use std::fmt;

use serde::{Deserialize, Serialize};

use super::{BitColumnError, OutOfRange};

const BIT_MASKS: [u8; 8] = [
    1,
    1 << 1,
    1 << 2,
    1 << 3,
    1 << 4,
    1 << 5,
    1 << 6,
    1 << 7,
];

/// A fixed-length column of bits packed into an owned buffer of bytes,
/// as found in a `BIT(n)` field of a row.
///
/// Logical bit `i` lives in byte `i / 8`, at position `i % 8` counted from the
/// least significant bit. The number of logical bits is fixed at construction;
/// individual bits can be set in place but never cleared.
///
/// The type carries no synchronization: mutation goes through `&mut self`.
///
/// # Examples
///
/// ```
/// use bitcolumn::column::BitColumn;
///
/// let mut column = BitColumn::value_of(8, vec![0b0000_0101]).unwrap();
/// assert!(column.get(0).unwrap());
/// assert!(!column.get(1).unwrap());
///
/// column.set(1).unwrap();
/// assert_eq!(column.render(), "00000111");
/// assert_eq!(column.count_set_bits(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBitColumn")]
pub struct BitColumn {
    /*private*/ length: usize,
    /*private*/ value: Box<[u8]>,
}

/// Unvalidated wire shape, checked by [`BitColumn::value_of`] on the way in.
#[derive(Deserialize)]
struct RawBitColumn {
    length: usize,
    value: Box<[u8]>,
}

impl TryFrom<RawBitColumn> for BitColumn {
    type Error = BitColumnError;

    fn try_from(raw: RawBitColumn) -> Result<Self, Self::Error> {
        BitColumn::value_of(raw.length, raw.value)
    }
}

impl BitColumn {
    /// Builds a column of `length` bits on top of `value`, taking ownership of
    /// the buffer.
    ///
    /// The buffer may be larger than needed; bits past `length` are kept but
    /// are not part of the column.
    ///
    /// # Errors
    ///
    /// Returns [`BitColumnError::InvalidArgument`] if `length` exceeds the bit
    /// capacity of `value`.
    ///
    /// # Examples
    /// ```
    /// use bitcolumn::column::BitColumn;
    ///
    /// assert!(BitColumn::value_of(8, vec![0u8]).is_ok());
    /// assert!(BitColumn::value_of(9, vec![0u8]).is_err());
    /// ```
    pub fn value_of(length: usize, value: impl Into<Box<[u8]>>) -> Result<Self, BitColumnError> {
        let value = value.into();
        if length.div_ceil(8) > value.len() {
            return Err(BitColumnError::InvalidArgument {
                length,
                capacity: value.len().saturating_mul(8),
            });
        }
        Ok(BitColumn { length, value })
    }

    /// Constructs a column of `length` bits over the smallest buffer that
    /// holds them, all initialized to zero.
    pub fn zeroed(length: usize) -> Self {
        let bytes_needed: usize = length.div_ceil(8);
        BitColumn {
            length,
            value: vec![0u8; bytes_needed].into_boxed_slice(),
        }
    }

    /// Number of logical bits in the column, fixed at construction.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` for a zero-length column.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` if the bit at `index` is set.
    ///
    /// Indices between `len()` and the end of the buffer read the padding
    /// bits that are physically present.
    ///
    /// # Errors
    ///
    /// Returns [`BitColumnError::IndexOutOfRange`] if `index` falls past the
    /// end of the buffer. The error carries the indices and buffer contents;
    /// see [`crate::diagnostics::report`] to log them.
    pub fn get(&self, index: usize) -> Result<bool, BitColumnError> {
        let (byte_index, bit_index) = self.locate(index)?;
        Ok(self.value[byte_index] & BIT_MASKS[bit_index] != 0)
    }

    /// Sets the bit at `index` to `1`. Bits already set stay set.
    ///
    /// # Errors
    ///
    /// Same as [`BitColumn::get`]; the buffer is left untouched on failure.
    ///
    /// # Examples
    /// ```
    /// use bitcolumn::column::BitColumn;
    ///
    /// let mut column = BitColumn::zeroed(4);
    /// column.set(2).unwrap();
    /// assert!(column.get(2).unwrap());
    /// assert!(column.set(8).is_err());
    /// ```
    pub fn set(&mut self, index: usize) -> Result<(), BitColumnError> {
        let (byte_index, bit_index) = self.locate(index)?;
        self.value[byte_index] |= BIT_MASKS[bit_index];
        Ok(())
    }

    /// Number of set bits among the `len()` logical bits. Padding bits past
    /// `len()` are not counted.
    pub fn count_set_bits(&self) -> usize {
        self.iter().filter(|&bit| bit).count()
    }

    /// Iterates over the logical bits, from index `0` up to `len() - 1`.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = bool> + '_ {
        // length.div_ceil(8) <= value.len() holds since construction
        (0..self.length).map(|index| self.value[index >> 3] & BIT_MASKS[index & 7] != 0)
    }

    /// The packed buffer backing this column.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Mutable access to the packed buffer, for bulk writes.
    ///
    /// Writes through this slice bypass the bit-index contract of
    /// [`BitColumn::set`], padding bits included.
    pub fn value_mut(&mut self) -> &mut [u8] {
        &mut self.value
    }

    /// Consumes the column and hands back its packed buffer, padding bits
    /// included.
    pub fn into_value(self) -> Box<[u8]> {
        self.value
    }

    /// Renders the column as `len()` characters of `'0'` and `'1'`, most
    /// significant bit (index `len() - 1`) first.
    ///
    /// # Examples
    /// ```
    /// use bitcolumn::column::BitColumn;
    ///
    /// let column = BitColumn::value_of(10, vec![0b0000_0101, 0b0000_0010]).unwrap();
    /// assert_eq!(column.render(), "1000000101");
    /// ```
    pub fn render(&self) -> String {
        let mut rendered = String::with_capacity(self.length);
        for bit in self.iter().rev() {
            rendered.push(if bit { '1' } else { '0' });
        }
        rendered
    }

    fn locate(&self, index: usize) -> Result<(usize, usize), BitColumnError> {
        let byte_index = index >> 3;
        let bit_index = index - (byte_index << 3);

        if byte_index >= self.value.len() {
            return Err(BitColumnError::IndexOutOfRange(OutOfRange {
                index,
                byte_index,
                bit_index,
                value: self.value.to_vec(),
                mask_table_len: BIT_MASKS.len(),
            }));
        }
        Ok((byte_index, bit_index))
    }
}

impl fmt::Display for BitColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
