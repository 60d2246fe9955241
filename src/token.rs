use std::slice::ChunksExact;

use crate::error::{Error, Result};
use crate::lz77::{Record, RECORD_LEN};

/// Flattens a stream of [`Record`]s into the wire format, three bytes per
/// record in the order offset, length, literal.
pub struct RecordBytes<I> {
    iter: I,
    queue: Vec<u8>,
}

impl<I> RecordBytes<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            queue: Vec::with_capacity(RECORD_LEN - 1),
        }
    }
}

impl<I: Iterator<Item = Record>> Iterator for RecordBytes<I> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(x) = self.queue.pop() {
            return Some(x);
        }

        let record = self.iter.next()?;
        // queue the remaining bytes in reverse order
        self.queue.push(record.literal);
        self.queue.push(record.length);
        Some(record.offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        let queued = self.queue.len();
        (
            lo.saturating_mul(RECORD_LEN).saturating_add(queued),
            hi.and_then(|hi| hi.checked_mul(RECORD_LEN))
                .and_then(|hi| hi.checked_add(queued)),
        )
    }
}

/// Splits a compressed stream back into [`Record`]s.
pub struct Records<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> Iterator for Records<'a> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        Some(Record::from_bytes([chunk[0], chunk[1], chunk[2]]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Records<'_> {}

/// View a compressed stream as records; fails unless the stream is a whole
/// number of records.
pub fn records(data: &[u8]) -> Result<Records<'_>> {
    if data.len() % RECORD_LEN != 0 {
        return Err(Error::MalformedStream { len: data.len() });
    }
    Ok(Records {
        chunks: data.chunks_exact(RECORD_LEN),
    })
}
