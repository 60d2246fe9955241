//! LZ77 sliding-window compression with a fixed 3-byte record format.
//!
//! The encoder replaces repeated byte runs with `(offset, length, literal)`
//! back-references found by a brute-force scan of the last `window / 2`
//! bytes. Offsets and lengths are single bytes, the stream has no header,
//! and the final record always carries a sentinel literal that the decoder
//! drops.
//!
//! ```
//! let compressed = lz77::compress(b"abracadabra", 30)?;
//! assert_eq!(lz77::decompress(&compressed)?, b"abracadabra");
//! # Ok::<(), lz77::Error>(())
//! ```

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod lz77;
pub mod matcher;
#[cfg(feature = "python")]
mod python;
pub mod token;
pub mod window;

pub use decoder::{decompress, Decoder};
pub use encoder::{compress, compress_with, Encoder};
pub use error::{Error, Result};
pub use lz77::Record;
pub use window::Window;
