//! CTFF CLI binary.
//!
//! Dictionary-based text compression.
//!
//! # Usage
//!
//! - `ctff <FILE> [DICT]` - compress `FILE`, or decompress it when it ends
//!   in `.ctff`
//! - `ctff compress <FILE> [DICT]` - force compression
//! - `ctff decompress <FILE> [DICT]` - force decompression

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use ctff::{
    codec::Dictionary,
    config::Config,
    files::{self, Mode},
    VERSION,
};

#[derive(Parser)]
#[command(name = "ctff")]
#[command(version = VERSION)]
#[command(about = "CTFF - dictionary-based text compression", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    job: JobArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a text file
    Compress(JobArgs),

    /// Decompress a .ctff file
    Decompress(JobArgs),
}

#[derive(Args)]
struct JobArgs {
    /// Input file
    file: Option<PathBuf>,

    /// Dictionary name (resolved to <dict dir>/<name>.txt)
    dict: Option<String>,

    /// Dictionary directory (default: dict/ next to the executable)
    #[arg(long)]
    dict_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file path (default: input with its extension swapped)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show compression statistics
    #[arg(short, long)]
    stats: bool,

    /// Print statistics as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mode, job) = match cli.command {
        Some(Commands::Compress(job)) => (Some(Mode::Compress), job),
        Some(Commands::Decompress(job)) => (Some(Mode::Decompress), job),
        None => (None, cli.job),
    };

    init_logging(job.verbose);
    run(mode, &job)
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(job: &JobArgs) -> anyhow::Result<Config> {
    let file_config = match &job.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_default()?,
    };
    let mut config = file_config.merge(Config::from_env());

    if let Some(dir) = &job.dict_dir {
        config.dictionary.dir = Some(dir.clone());
    }
    Ok(config)
}

fn run(mode: Option<Mode>, job: &JobArgs) -> anyhow::Result<()> {
    let Some(input) = job.file.as_deref() else {
        anyhow::bail!("No file specified");
    };

    let config = load_config(job)?;
    let mode = mode.unwrap_or_else(|| Mode::detect(input, &config.codec));

    let dict_path = files::resolve_dictionary(&config.dictionary, job.dict.as_deref())?;
    let dictionary = Dictionary::load(&dict_path)?;
    tracing::debug!(
        "Using dictionary {} ({} words)",
        dict_path.display(),
        dictionary.len()
    );

    match mode {
        Mode::Compress => cmd_compress(input, job, &dictionary, &config),
        Mode::Decompress => cmd_decompress(input, job, &dictionary, &config),
    }
}

fn cmd_compress(
    input: &Path,
    job: &JobArgs,
    dictionary: &Dictionary,
    config: &Config,
) -> anyhow::Result<()> {
    let (output, result) =
        files::compress_file(input, job.output.as_deref(), dictionary, config)?;

    if job.json {
        let stats = serde_json::json!({
            "input": input,
            "output": output,
            "original_bytes": result.original_bytes,
            "compressed_bytes": result.compressed_bytes,
            "ratio": result.byte_ratio(),
            "lines": result.lines,
            "exact_words": result.exact_words,
            "prefix_words": result.prefix_words,
            "literal_words": result.literal_words,
            "letters": result.letters,
        });
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else if job.stats {
        eprintln!();
        eprintln!("Compression Statistics:");
        eprintln!("  Output:       {}", output.display());
        eprintln!("  Original:     {} bytes", result.original_bytes);
        eprintln!("  Compressed:   {} bytes", result.compressed_bytes);
        eprintln!("  Ratio:        {:.2}x", result.byte_ratio());
        eprintln!("  Saved:        {:.1}%", result.savings_percent());
        eprintln!(
            "  Words:        {} ({} exact, {} prefix, {} literal)",
            result.words(),
            result.exact_words,
            result.prefix_words,
            result.literal_words
        );
    }

    Ok(())
}

fn cmd_decompress(
    input: &Path,
    job: &JobArgs,
    dictionary: &Dictionary,
    config: &Config,
) -> anyhow::Result<()> {
    let (output, result) =
        files::decompress_file(input, job.output.as_deref(), dictionary, config)?;

    if job.json {
        let stats = serde_json::json!({
            "input": input,
            "output": output,
            "lines": result.lines,
            "caps_section_found": result.caps_section_found,
            "invalid_tokens": result.invalid_tokens,
            "unused_flags": result.unused_flags,
        });
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else if job.stats {
        eprintln!();
        eprintln!("Decompression Statistics:");
        eprintln!("  Output:         {}", output.display());
        eprintln!("  Lines:          {}", result.lines);
        eprintln!("  Invalid tokens: {}", result.invalid_tokens);
        eprintln!("  Unused flags:   {}", result.unused_flags);
    }

    Ok(())
}
