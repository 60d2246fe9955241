use std::io::{stdin, stdout, BufReader, BufWriter, Read, Write};

use anyhow::Result;

use lz77::Decoder;

/// Decompress stdin to stdout.
fn main() -> Result<()> {
    let reader = BufReader::new(stdin().lock());
    let mut writer = BufWriter::new(stdout().lock());
    let mut decoder = Decoder::new();
    for x in reader.bytes() {
        decoder.push(x?)?;
    }
    writer.write_all(&decoder.finish()?)?;
    writer.flush()?;
    Ok(())
}
