use crate::error::Result;
use crate::lz77::{Record, RECORD_LEN};
use crate::matcher::Matcher;
use crate::token::RecordBytes;
use crate::window::Window;

/// Drives the [`Matcher`] across a borrowed input, yielding one [`Record`]
/// per step.
///
/// The last record yielded always carries a sentinel literal: either the
/// final match runs to the end of the input, or an explicit
/// [`Record::SENTINEL`] follows the last real literal.
pub struct Encoder<'a> {
    data: &'a [u8],
    search_pos: usize,
    matcher: Matcher,
    done: bool,
}

impl<'a> Encoder<'a> {
    pub fn new(data: &'a [u8], window: Window) -> Self {
        Self {
            data,
            search_pos: 0,
            matcher: Matcher::new(window),
            done: false,
        }
    }

    /// number of input bytes covered so far
    pub fn len(&self) -> usize {
        self.search_pos.min(self.data.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for Encoder<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.search_pos >= self.data.len() {
            // past the end means the previous match consumed the input
            // and already closed the stream
            self.done = true;
            return if self.search_pos == self.data.len() {
                Some(Record::SENTINEL)
            } else {
                None
            };
        }

        let record = self.matcher.find(self.data, self.search_pos);
        self.search_pos += record.length as usize + 1;
        Some(record)
    }
}

/// Compress `data` with the given window size in `[4, 510]`.
pub fn compress(data: &[u8], window: usize) -> Result<Vec<u8>> {
    Ok(compress_with(data, Window::new(window)?))
}

/// Compress `data` with an already validated [`Window`].
pub fn compress_with(data: &[u8], window: Window) -> Vec<u8> {
    let mut output = Vec::with_capacity(data.len() + RECORD_LEN);
    output.extend(RecordBytes::new(Encoder::new(data, window)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn records(data: &[u8], window: usize) -> Vec<Record> {
        Encoder::new(data, Window::new(window).unwrap()).collect()
    }

    #[test]
    fn test_abracadabra_records() {
        let expected = vec![
            Record::literal(b'a'),
            Record::literal(b'b'),
            Record::literal(b'r'),
            Record {
                offset: 3,
                length: 1,
                literal: b'c',
            },
            Record {
                offset: 5,
                length: 1,
                literal: b'd',
            },
            Record {
                offset: 7,
                length: 4,
                literal: 0,
            },
        ];
        assert_eq!(records(b"abracadabra", 30), expected);
    }

    #[test]
    fn test_abracadabra_bytes() {
        let compressed = compress(b"abracadabra", 30).unwrap();
        assert_eq!(
            compressed,
            [
                0, 0, b'a', 0, 0, b'b', 0, 0, b'r', 3, 1, b'c', 5, 1, b'd', 7, 4, 0
            ]
        );
    }

    #[test]
    fn test_sentinel_appended_after_real_literal() {
        assert_eq!(
            records(b"ab", 30),
            vec![Record::literal(b'a'), Record::literal(b'b'), Record::SENTINEL]
        );
        // a real trailing zero byte is followed by its own sentinel
        assert_eq!(
            records(b"a\0", 30),
            vec![Record::literal(b'a'), Record::literal(0), Record::SENTINEL]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(records(b"", 30), vec![Record::SENTINEL]);
        assert_eq!(compress(b"", 30).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn test_len_tracks_cursor() {
        let window = Window::new(30).unwrap();
        let mut encoder = Encoder::new(b"abab", window);
        assert!(encoder.is_empty());
        encoder.next();
        encoder.next();
        assert_eq!(encoder.len(), 2);
        encoder.next();
        assert_eq!(encoder.len(), 4);
        assert_eq!(encoder.next(), None);
    }

    #[test]
    fn test_invalid_window() {
        assert_eq!(
            compress(b"abc", 3),
            Err(Error::Configuration { window: 3 })
        );
        assert_eq!(
            compress(b"abc", 511),
            Err(Error::Configuration { window: 511 })
        );
    }
}
