use crate::lz77::Record;
use crate::window::Window;

/// Brute-force longest-match search over a bounded backward window.
///
/// Every candidate start in the last `back_search` bytes is compared against
/// the bytes at the cursor, oldest first. A candidate replaces the current
/// best only when its run is strictly longer, so among runs of equal length
/// the earliest candidate is kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct Matcher {
    window: Window,
}

impl Matcher {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// number of equal bytes between `data[begin..]` and `data[target..]`,
    /// looking at no more than `bound` bytes
    fn match_length(data: &[u8], begin: usize, target: usize, bound: usize) -> usize {
        let mut result = 0;
        for (ix1, ix2) in (begin..).zip(target..target + bound) {
            if data[ix1] != data[ix2] {
                break;
            }
            result += 1;
        }
        result
    }

    /// returns (length, distance) of the best match for `data[pos..]`
    fn best_match(&self, data: &[u8], pos: usize) -> (usize, usize) {
        let mut best_length = 0;
        let mut best_distance = 0;
        let upper_bound = self.window.look_ahead().min(data.len() - pos);
        let first = pos.saturating_sub(self.window.back_search());

        for candidate in first..pos {
            // nothing later can be strictly longer
            if best_length == upper_bound {
                break;
            }
            // the run may not read into the bytes being matched
            let bound = upper_bound.min(pos - candidate);
            let length = Self::match_length(data, candidate, pos, bound);
            if length > best_length {
                best_length = length;
                best_distance = pos - candidate;
            }
        }

        (best_length, best_distance)
    }

    /// Find the record to emit at cursor `pos`.
    ///
    /// The literal is the byte right after the matched run, or `0` when the
    /// run reaches the end of `data`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not an index into `data`.
    pub fn find(&self, data: &[u8], pos: usize) -> Record {
        debug_assert!(pos < data.len());
        let (length, distance) = self.best_match(data, pos);
        if length == 0 {
            return Record::literal(data[pos]);
        }

        debug_assert_ne!(distance, 0);
        debug_assert!(distance <= self.window.back_search());
        debug_assert!(length <= self.window.look_ahead());
        Record {
            offset: distance as u8,
            length: length as u8,
            literal: data.get(pos + length).copied().unwrap_or(0),
        }
    }
}
