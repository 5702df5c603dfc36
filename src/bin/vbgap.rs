use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use vbgap::{analyze_with, AnalyzeOptions};

/// Gap + variable-byte compression of a document id list.
///
/// Reads a comma-separated, strictly ascending list of document ids and
/// prints its gap list, VB byte stream, sizes and decode latency.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Ids such as "5,9,20". Read from stdin when omitted.
    ids: Option<String>,

    /// Reject truncated or oversized numbers while decoding.
    #[arg(long, default_value_t = false, env = "VBGAP_STRICT")]
    strict: bool,

    /// Log directive used when RUST_LOG is unset.
    #[arg(long, default_value_t = String::from("warn"), env = "VBGAP_LOG")]
    log: String,
}

fn setup_logging(directives: &str) {
    let main_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives)))
        .with(main_layer)
        .init()
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(&args.log);

    let input = match args.ids {
        Some(ids) => ids,
        None => {
            let mut buf = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("error: failed to read stdin: {err}");
                return ExitCode::FAILURE;
            }
            buf
        }
    };

    let options = AnalyzeOptions {
        strict: args.strict,
    };

    match analyze_with(&input, &options) {
        Ok(analysis) => {
            println!("{analysis}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(%err, "analysis failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
