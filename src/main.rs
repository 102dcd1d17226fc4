use bitcolumn::{
    column::parse_hex,
    diagnostics::{init_logging, report},
    inspect::{InspectError, Inspection},
};
use clap::Parser;
use std::process::ExitCode;
use tracing::info;

/// Inspect a packed BIT(n) column value
#[derive(Parser, Debug)]
#[command(name = "bitcolumn")]
#[command(about = "Decode and inspect a packed bit column", long_about = None)]
struct Args {
    /// Number of logical bits in the column
    #[arg(short, long)]
    length: usize,

    /// Packed buffer as hex, byte holding bits 0..8 first (e.g. "05" or "ff01").
    /// Defaults to a zeroed buffer just large enough for the column
    #[arg(short, long, value_parser = parse_hex_bytes)]
    bytes: Option<HexBytes>,

    /// Bit indices to set before printing (comma-separated list, e.g. "0,3,9")
    #[arg(short, long, value_delimiter = ',')]
    set: Vec<usize>,

    /// Bit indices to query (comma-separated list)
    #[arg(short, long, value_delimiter = ',')]
    get: Vec<usize>,

    /// Print the column as JSON instead of the text summary.
    /// Queried indices are still checked
    #[arg(long)]
    json: bool,
}

// clap would read a bare Vec<u8> as a list of values
#[derive(Clone, Debug)]
struct HexBytes(Vec<u8>);

fn parse_hex_bytes(s: &str) -> Result<HexBytes, String> {
    parse_hex(s).map(HexBytes)
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let job = Inspection {
        length: args.length,
        bytes: args.bytes.map(|HexBytes(bytes)| bytes),
        set: args.set,
        get: args.get,
        json: args.json,
    };

    match job.run() {
        Ok(out) => {
            println!("{out}");
            info!(length = job.length, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let InspectError::Column(column_err) = &e {
                report(column_err);
            }
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
