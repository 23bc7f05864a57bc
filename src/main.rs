use std::io::Write;

use clap::Parser;
use sequenced_merge::{
    messages::{MergeRequest, MergeResponse},
    service,
    writer::MessageWriter,
};

/// Merge two sorted integer sequences.
#[derive(Parser, Debug)]
#[command(name = "seqmerge", version)]
struct Args {
    /// Comma separated, non-decreasing
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    left: Vec<i64>,

    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    right: Vec<i64>,

    /// Read newline-delimited JSON requests from stdin instead
    #[arg(long, conflicts_with_all = ["left", "right"])]
    stdin: bool,

    /// Print the result as a JSON response line
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .init();
}

/// Merges `--left` and `--right` and writes the result to `out`.
fn run_once<W: Write>(args: Args, mut out: W) -> anyhow::Result<()> {
    let result = service::handle_request(MergeRequest {
        left: args.left,
        right: args.right,
    });
    if args.json {
        MessageWriter::new(out).send(MergeResponse::Merged(result))?;
    } else {
        writeln!(out, "{:?}", result.merged)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    if args.stdin {
        let handled = service::serve(std::io::stdin().lock(), std::io::stdout().lock())?;
        log::info!("Processed {handled} requests");
        return Ok(());
    }
    run_once(args, std::io::stdout().lock())
}
