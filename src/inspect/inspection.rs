use std::fmt::Write;

use thiserror::Error;
use tracing::debug;

use crate::column::{BitColumn, BitColumnError};

#[derive(Debug, Error)]
pub enum InspectError {
    #[error(transparent)]
    Column(#[from] BitColumnError),

    #[error("failed to serialize column: {0}")]
    Json(#[from] serde_json::Error),
}

/// One run of the inspector: a column to build, bits to set, bits to query.
#[derive(Debug, Clone, Default)]
pub struct Inspection {
    pub length: usize,
    /// Packed buffer; a zeroed buffer of minimal size when `None`.
    pub bytes: Option<Vec<u8>>,
    pub set: Vec<usize>,
    pub get: Vec<usize>,
    pub json: bool,
}

impl Inspection {
    /// Runs the inspection and returns the text to print.
    ///
    /// Every write and every query is checked before any output is produced,
    /// in both text and JSON mode. The JSON form carries the column only.
    pub fn run(&self) -> Result<String, InspectError> {
        let mut column = match &self.bytes {
            Some(bytes) => BitColumn::value_of(self.length, bytes.clone())?,
            None => BitColumn::zeroed(self.length),
        };
        debug!(
            length = column.len(),
            bytes = column.value().len(),
            "column loaded"
        );

        for &index in &self.set {
            column.set(index)?;
        }

        let queried = self
            .get
            .iter()
            .map(|&index| column.get(index).map(|bit| (index, bit)))
            .collect::<Result<Vec<_>, BitColumnError>>()?;

        if self.json {
            return Ok(serde_json::to_string(&column)?);
        }

        let mut out = String::new();
        // writing into a String never fails
        let _ = writeln!(out, "{column}");
        let _ = write!(out, "set bits: {}", column.count_set_bits());
        for (index, bit) in queried {
            let _ = write!(out, "\nbit {index}: {}", u8::from(bit));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inspection(length: usize, bytes: Option<Vec<u8>>) -> Inspection {
        Inspection {
            length,
            bytes,
            ..Default::default()
        }
    }

    #[test]
    fn text_output_lists_render_count_and_queries() {
        let mut job = inspection(8, Some(vec![0x05]));
        job.set = vec![7];
        job.get = vec![0, 1];
        assert_eq!(
            job.run().unwrap(),
            "10000101\nset bits: 3\nbit 0: 1\nbit 1: 0"
        );
    }

    #[test]
    fn missing_bytes_means_zeroed_column() {
        assert_eq!(inspection(3, None).run().unwrap(), "000\nset bits: 0");
    }

    #[test]
    fn json_output_is_the_serialized_column() {
        let mut job = inspection(12, None);
        job.set = vec![0, 11];
        job.json = true;
        assert_eq!(job.run().unwrap(), r#"{"length":12,"value":[1,8]}"#);
    }

    #[test]
    fn bad_query_fails_in_both_modes() {
        for json in [false, true] {
            let mut job = inspection(8, None);
            job.get = vec![999];
            job.json = json;
            match job.run() {
                Err(InspectError::Column(BitColumnError::IndexOutOfRange(ctx))) => {
                    assert_eq!(ctx.byte_index, 124, "json = {json}");
                }
                other => panic!("json = {json}: expected IndexOutOfRange, got {other:?}"),
            }
        }
    }

    #[test]
    fn bad_write_fails_before_output() {
        let mut job = inspection(8, None);
        job.set = vec![8];
        job.json = true;
        assert!(matches!(
            job.run(),
            Err(InspectError::Column(BitColumnError::IndexOutOfRange(_)))
        ));
    }

    #[test]
    fn length_past_buffer_is_rejected() {
        assert!(matches!(
            inspection(9, Some(vec![0xff])).run(),
            Err(InspectError::Column(BitColumnError::InvalidArgument { .. }))
        ));
    }
}
