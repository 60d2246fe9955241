use crate::error::{Error, Result};
use crate::lz77::{MAX_HALF_WINDOW, MAX_WINDOW, MIN_WINDOW};

/// Resolved search bounds for one compression pass.
///
/// The window is split evenly between how far back the matcher scans and
/// how far ahead a match may extend. Each half is rounded up to even and
/// then clamped so that offsets and lengths stay within one byte.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Window {
    size: usize,
    half: usize,
}

impl Window {
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_WINDOW..=MAX_WINDOW).contains(&size) {
            return Err(Error::Configuration { window: size });
        }
        let mut half = size / 2;
        if half % 2 == 1 {
            half += 1;
        }
        let half = half.min(MAX_HALF_WINDOW);
        if half == 0 {
            return Err(Error::Configuration { window: size });
        }
        Ok(Self { size, half })
    }

    /// the window size as requested
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn back_search(&self) -> usize {
        self.half
    }

    pub fn look_ahead(&self) -> usize {
        self.half
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            size: MAX_WINDOW,
            half: MAX_HALF_WINDOW,
        }
    }
}

impl TryFrom<usize> for Window {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}
