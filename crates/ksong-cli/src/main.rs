use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "ksong")]
#[command(about = "Fetch a karaoke song page, extract the song record, and download the audio")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// URL of the song page
    url: String,

    /// Also download the song audio as <song_name>.m4a
    #[arg(short, long)]
    audio: bool,

    /// Output directory for the record and audio files
    #[arg(short = 'O', long, default_value = ksong_scrape::output::DEFAULT_OUTPUT_DIR)]
    output_dir: String,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing HTTP-stack noise at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,hyper_util=info,reqwest=info",
        LogLevel::Trace => "trace,hyper_util=info,reqwest=info",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-03-02 10:15:42.417 +08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    // Logs go to stderr; stdout carries only the extracted record
    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(
                time_format.to_string(),
            ))
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
                time_format.to_string(),
            ))
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::info!(url = %cli.url, audio = cli.audio, "Scraping song page");
    let info = ksong_scrape::scrape(&cli.url, &cli.output_dir, cli.audio).await?;

    println!("{}", ksong_scrape::output::to_json_pretty(&info)?);

    Ok(())
}
