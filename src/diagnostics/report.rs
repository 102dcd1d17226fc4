use tracing::{error, warn};

use crate::column::{BitColumnError, OutOfRange};

/// Emits one `error` event describing `err`, with its context as fields.
pub fn report(err: &BitColumnError) {
    match err {
        BitColumnError::IndexOutOfRange(ctx) => report_out_of_range(ctx),
        BitColumnError::InvalidArgument { length, capacity } => {
            warn!(length, capacity, "rejected bit column: {err}")
        }
    }
}

fn report_out_of_range(ctx: &OutOfRange) {
    error!(
        index = ctx.index,
        byte_index = ctx.byte_index,
        bit_index = ctx.bit_index,
        value = %format_value(&ctx.value),
        mask_table_len = ctx.mask_table_len,
        "bit column access out of range"
    );
}

/// Buffer contents as comma separated decimal bytes.
pub fn format_value(value: &[u8]) -> String {
    value
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
