use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use financial_ingest::pipeline::write_template;
use financial_ingest::{IngestConfig, Summary, SummaryStorage, UploadEngine, UploadSession, UploadStatus};

const TEMPLATE_COMMAND: &str = "template";
const JSON_FLAG: &str = "--json";

#[tokio::main]
async fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().collect();
    let json = take_flag(&mut args, JSON_FLAG);

    if args.len() < 2 {
        eprintln!("Usage: financial-ingest [input].csv [log_level:optional] [--json] > [summary]");
        eprintln!("       financial-ingest template > financial_data_template.csv");
        eprintln!("Available log levels: off, error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    if args[1] == TEMPLATE_COMMAND {
        return Ok(write_template(stdout().lock())?);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let mut session = UploadSession::new(UploadEngine::new(IngestConfig::default()), SummaryStorage::new());

    match session.upload(path).await {
        UploadStatus::Success(summary) => {
            eprintln!("Successfully processed {} transactions", summary.transactions().len());

            if json {
                write_json_to_stdout(summary)?;
            } else {
                write_results_to_stdout(summary)?;
            }
        }
        status => {
            eprintln!("{}", status.message());
            exit(1);
        }
    }

    Ok(())
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|arg| arg != flag);
    args.len() != before
}

/// Accepts `off`, `error`, `warn`, `info`, `debug` or `trace` in any case.
fn parse_log_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or_else(|_| {
        eprintln!("Unknown log level '{level}', only upload errors will be logged");
        LevelFilter::ERROR
    })
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the summary, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout(summary: &Summary) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "metric,value")?;
    writeln!(output, "total_revenue,{}", summary.total_revenue())?;
    writeln!(output, "total_expenses,{}", summary.total_expenses())?;
    writeln!(output, "net_profit,{}", summary.net_profit())?;
    writeln!(output, "gst_collected,{}", summary.gst_collected())?;
    writeln!(output, "gst_paid,{}", summary.gst_paid())?;
    writeln!(output, "transactions,{}", summary.transactions().len())?;
    writeln!(output, "last_updated,{}", summary.last_updated().to_rfc3339())?;

    output.flush()?;

    Ok(())
}

fn write_json_to_stdout(summary: &Summary) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, summary)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}
