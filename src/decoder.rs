use crate::error::{Error, Result};
use crate::lz77::{Record, RECORD_LEN};

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
enum State {
    AwaitOffset,
    AwaitLength,
    AwaitByte,
}

/// Byte-at-a-time decoder for the 3-byte record stream.
///
/// Each record is assembled over three [`push`](Decoder::push) calls and
/// expanded into the output as soon as its literal arrives.
pub struct Decoder {
    state: State,
    offset: u8,
    length: u8,
    buf: Vec<u8>,
    consumed: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: State::AwaitOffset,
            offset: 0,
            length: 0,
            buf: Vec::with_capacity(capacity),
            consumed: 0,
        }
    }

    /// bytes decoded so far, including a pending sentinel literal
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn push(&mut self, x: u8) -> Result<()> {
        self.consumed += 1;
        self.state = match self.state {
            State::AwaitOffset => {
                self.offset = x;
                State::AwaitLength
            }
            State::AwaitLength => {
                self.length = x;
                State::AwaitByte
            }
            State::AwaitByte => {
                self.apply(Record {
                    offset: self.offset,
                    length: self.length,
                    literal: x,
                })?;
                State::AwaitOffset
            }
        };
        Ok(())
    }

    fn apply(&mut self, record: Record) -> Result<()> {
        if record.offset != 0 && record.length != 0 {
            let mut distance = record.offset as usize;
            let mut length = record.length as usize;
            let begin = self
                .buf
                .len()
                .checked_sub(distance)
                .ok_or(Error::CorruptReference {
                    offset: record.offset,
                    available: self.buf.len(),
                })?;
            // an overlapping run doubles what it can copy on each pass
            while length > 0 {
                let n = distance.min(length);
                self.buf.extend_from_within(begin..begin + n);
                length -= n;
                distance += n;
            }
        }
        self.buf.push(record.literal);
        Ok(())
    }

    /// Finish the stream and return the decoded bytes without the trailing
    /// sentinel literal.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        if self.state != State::AwaitOffset {
            return Err(Error::MalformedStream {
                len: self.consumed,
            });
        }
        self.buf.pop();
        Ok(self.buf)
    }
}

/// Decompress a stream produced by [`compress`](crate::compress).
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() % RECORD_LEN != 0 {
        return Err(Error::MalformedStream { len: data.len() });
    }
    let mut decoder = Decoder::with_capacity(data.len());
    for &x in data {
        decoder.push(x)?;
    }
    decoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_abracadabra() {
        let data = [
            0, 0, b'a', 0, 0, b'b', 0, 0, b'r', 3, 1, b'c', 5, 1, b'd', 7, 4, 0,
        ];
        assert_eq!(decompress(&data).unwrap(), b"abracadabra");
    }

    #[test]
    fn test_trailing_byte_dropped() {
        assert_eq!(decompress(&[0, 0, b'a', 0, 0, b'b']).unwrap(), b"a");
        assert_eq!(decompress(&[0, 0, 0]).unwrap(), b"");
        assert_eq!(decompress(&[]).unwrap(), b"");
    }

    #[test]
    fn test_overlapping_copy() {
        // "ab" then copy 5 bytes from 2 back
        let data = [0, 0, b'a', 0, 0, b'b', 2, 5, b'x', 0, 0, 0];
        assert_eq!(decompress(&data).unwrap(), b"abababax");
    }

    #[test]
    fn test_half_record_is_ignored_as_copy() {
        // offset without length, and length without offset, only add the literal
        let data = [3, 0, b'a', 0, 4, b'b', 0, 0, 0];
        assert_eq!(decompress(&data).unwrap(), b"ab");
    }

    #[test]
    fn test_malformed_stream() {
        assert_eq!(
            decompress(&[0, 0, b'a', 0]),
            Err(Error::MalformedStream { len: 4 })
        );

        let mut decoder = Decoder::new();
        decoder.push(0).unwrap();
        decoder.push(0).unwrap();
        assert_eq!(decoder.finish(), Err(Error::MalformedStream { len: 2 }));
    }

    #[test]
    fn test_corrupt_reference() {
        assert_eq!(
            decompress(&[5, 2, 65]),
            Err(Error::CorruptReference {
                offset: 5,
                available: 0
            })
        );
        assert_eq!(
            decompress(&[0, 0, b'a', 2, 1, b'b']),
            Err(Error::CorruptReference {
                offset: 2,
                available: 1
            })
        );
    }

    #[test]
    fn test_push_incrementally() {
        let mut decoder = Decoder::new();
        for x in [0, 0, b'a', 1, 3, b'b'] {
            decoder.push(x).unwrap();
        }
        assert_eq!(decoder.len(), 5);
        assert_eq!(decoder.finish().unwrap(), b"aaaa");
    }
}
