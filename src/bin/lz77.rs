use std::fs;
use std::io::{stdout, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::builder::TypedValueParser;
use clap::{ArgGroup, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lz77::lz77::{MAX_WINDOW, MIN_WINDOW};
use lz77::{compress_with, decompress, Window};

const EXTENSION: &str = "lz77";

/// Compress or decompress a file with LZ77.
#[derive(Parser, Debug)]
#[command(name = "lz77", version)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "string"])))]
struct Cli {
    /// File to compress, or to decompress with `-d`.
    input: Option<PathBuf>,

    /// Where to write the result.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use this text as the input instead of a file.
    #[arg(short, long)]
    string: Option<String>,

    /// Decompress instead of compress.
    #[arg(short, long)]
    decompress: bool,

    /// Window size; half of it bounds the search, half the match length.
    #[arg(
        short,
        long,
        default_value_t = MAX_WINDOW,
        value_parser = clap::value_parser!(u16)
            .range(MIN_WINDOW as i64..=MAX_WINDOW as i64)
            .map(usize::from),
    )]
    window: usize,

    /// Report sizes and timing (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn output_path(&self) -> Option<PathBuf> {
        if let Some(output) = &self.output {
            return Some(output.clone());
        }
        let input = self.input.as_deref()?;
        Some(if self.decompress {
            decoded_path(input)
        } else {
            let mut name = input.as_os_str().to_owned();
            name.push(".");
            name.push(EXTENSION);
            PathBuf::from(name)
        })
    }
}

/// `INPUT.lz77` decodes to `INPUT`; anything else gets `.out` appended
fn decoded_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == EXTENSION) {
        input.with_extension("")
    } else {
        let mut name = input.as_os_str().to_owned();
        name.push(".out");
        PathBuf::from(name)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data = match (&cli.string, &cli.input) {
        (Some(text), _) => text.as_bytes().to_vec(),
        (None, Some(path)) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        (None, None) => bail!("no input given"),
    };
    info!(size = data.len(), "original size");

    let start = Instant::now();
    let result = if cli.decompress {
        let result = decompress(&data)?;
        info!(size = result.len(), "decoded size");
        result
    } else {
        let window = Window::new(cli.window)?;
        debug!(
            back_search = window.back_search(),
            look_ahead = window.look_ahead(),
            "window"
        );
        let result = compress_with(&data, window);
        info!(size = result.len(), "encoded size");
        if !data.is_empty() {
            info!(
                ratio = %format!("{:.3}", result.len() as f64 / data.len() as f64),
                "compression ratio"
            );
        }
        result
    };
    info!(
        elapsed = %format!("{:.2}s", start.elapsed().as_secs_f64()),
        "time elapsed"
    );

    match cli.output_path() {
        Some(path) => {
            fs::write(&path, &result)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!(path = %path.display(), "wrote output");
        }
        None => {
            let mut writer = stdout().lock();
            writer.write_all(&result)?;
            writer.flush()?;
        }
    }
    Ok(())
}
