//! A command-line tool that generates files of an exact size filled with random alphanumeric characters.

use clap::{Parser, ValueEnum};
use fillgen_core::checksum::DigestWriter;
use fillgen_core::{GenerationJob, GenerationReport, generate, parse_size};
use log::{error, info};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

// `unreachable_pub` requires the `pub(crate)` spelling inside this binary.
#[allow(clippy::redundant_pub_crate)]
mod preflight;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Size format: <integer><unit>, where unit is K (kilobytes), M (megabytes) or G (gigabytes).\n\nEXAMPLES:\n\n# Generate a 1 GB file, overwriting it if it exists\nfillgen -o -f myfile1Gb.txt -s 1G\n\n# Generate 512 KB in 64 KB blocks and print its SHA-256\nfillgen -f data.txt -s 512K -b 64K --checksum\n\n# Print a JSON summary\nfillgen -f data.txt -s 1M --format json"
)]
struct Cli {
    /// Path of the file to generate
    #[arg(short, long, value_name = "FILE")]
    file: String,

    /// Size of the file to generate, e.g. 10K, 200M, 2G
    #[arg(short, long, value_name = "SIZE")]
    size: String,

    /// Size of each block written to disk
    #[arg(short, long, value_name = "SIZE", default_value = "4K")]
    block_size: String,

    /// Overwrite the file if it already exists
    #[arg(short, long)]
    overwrite: bool,

    /// Do not print progress while generating
    #[arg(short, long)]
    quiet: bool,

    /// Print the SHA-256 digest of the generated content
    #[arg(long)]
    checksum: bool,

    /// How the result is reported on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Progress and a success line
    Text,
    /// A JSON summary, without progress
    Json,
}

/// Machine-readable summary printed with `--format json`.
#[derive(Serialize)]
struct Summary {
    file: PathBuf,
    #[serde(flatten)]
    report: GenerationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha256: Option<String>,
}

fn print_progress(progress: f64) {
    print!("Progress: {progress:.2}%\r");
    // Progress is best effort; a broken stdout surfaces on the final println.
    let _ = std::io::stdout().flush();
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = preflight::reject_root() {
        error!("{e}");
        std::process::exit(1);
    }

    let size = parse_size(&cli.size).unwrap_or_else(|e| {
        error!("Error parsing file size: {e}");
        std::process::exit(1);
    });
    let block_size = parse_size(&cli.block_size).unwrap_or_else(|e| {
        error!("Error parsing block size: {e}");
        std::process::exit(1);
    });
    let block_size = usize::try_from(block_size).unwrap_or_else(|_| {
        error!("Block size of {block_size} bytes is too large for this platform.");
        std::process::exit(1);
    });

    let verbose = !cli.quiet && cli.format == OutputFormat::Text;
    let job = GenerationJob::new(size, block_size, verbose).unwrap_or_else(|e| {
        error!("Invalid block size: {e}");
        std::process::exit(1);
    });

    let path = preflight::normalize_path(&cli.file);
    if path.as_os_str().is_empty() {
        error!("Output file name not specified, use -f to specify it.");
        std::process::exit(1);
    }
    if let Err(e) = preflight::check_target(&path, cli.overwrite) {
        error!("{e}");
        std::process::exit(1);
    }

    info!(
        "Generating '{}' with {size} bytes in blocks of {block_size} bytes.",
        path.display()
    );
    let file = preflight::create_sink(&path).unwrap_or_else(|e| {
        error!("Failed to create file '{}': {e}", path.display());
        std::process::exit(1);
    });

    let mut rng = rand::rng();
    let result = if cli.checksum {
        let mut sink = DigestWriter::new(file);
        generate(&mut sink, &mut rng, &job, print_progress).map(|report| {
            let (_file, digest) = sink.finish();
            (report, Some(digest))
        })
    } else {
        let mut sink = file;
        generate(&mut sink, &mut rng, &job, print_progress).map(|report| (report, None))
    };
    let (report, sha256) = result.unwrap_or_else(|e| {
        error!("Error generating file: {e}");
        std::process::exit(1);
    });
    info!(
        "Wrote {} bytes in {} block(s).",
        report.bytes_written, report.blocks_written
    );

    if cli.format == OutputFormat::Json {
        let summary = Summary {
            file: path,
            report,
            sha256,
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Failed to serialize summary: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if verbose && report.bytes_written > 0 {
        println!();
    }
    println!(
        "File \"{}\" successfully generated with a size of {} bytes.",
        path.display(),
        report.bytes_written
    );
    if let Some(digest) = sha256 {
        println!("SHA-256: {digest}");
    }
}
