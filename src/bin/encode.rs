use std::io::{stdin, stdout, BufWriter, Read, Write};

use anyhow::Result;
use clap::Parser;

use lz77::lz77::MAX_WINDOW;
use lz77::{token::RecordBytes, Encoder, Window};

/// Compress stdin to stdout.
#[derive(Parser, Debug)]
struct Args {
    #[arg(short, long, default_value_t = MAX_WINDOW)]
    window: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let window = Window::new(args.window)?;

    let mut data = Vec::new();
    stdin().lock().read_to_end(&mut data)?;

    let mut writer = BufWriter::new(stdout().lock());
    for x in RecordBytes::new(Encoder::new(&data, window)) {
        writer.write_all(&[x])?;
    }
    writer.flush()?;
    Ok(())
}
