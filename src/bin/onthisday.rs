// ABOUTME: CLI binary for the onthisday event query.
// ABOUTME: Takes a month and day, prints one line per event (or JSON with --json).

use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;
use onthisday::Client;

#[derive(Parser, Debug)]
#[command(name = "onthisday")]
#[command(about = "List historical events for a day of the year, from Wikipedia")]
struct Args {
    /// Month of year (1-12)
    month: u32,

    /// Day of month (1-31)
    day: u32,

    /// Fetch timeout in milliseconds
    #[arg(long = "timeout-ms", default_value_t = 5000)]
    timeout_ms: u64,

    /// Output the events as a JSON array instead of one line per event
    #[arg(long = "json")]
    json_output: bool,

    /// Base page URL (mainly for testing against a local server)
    #[arg(long = "base-url")]
    base_url: Option<String>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            // Usage and parse errors go to stderr with exit status 1.
            eprint!("{}", e);
            return ExitCode::from(1);
        }
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut builder = Client::builder().timeout(Duration::from_millis(args.timeout_ms));
    if let Some(base_url) = &args.base_url {
        builder = builder.base_url(base_url);
    }
    let client = builder.build();

    let events = match client.query(args.month, args.day).await {
        Ok(events) => events,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    if args.json_output {
        match serde_json::to_string_pretty(&events) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error serializing events: {}", e);
                return ExitCode::from(1);
            }
        }
    } else {
        for event in &events {
            println!("{}", event);
        }
    }

    ExitCode::SUCCESS
}
