use std::fmt;

/// bytes per serialized record: offset, length, literal
pub const RECORD_LEN: usize = 3;
pub const MIN_WINDOW: usize = 4;
pub const MAX_WINDOW: usize = 510;
/// a half-window must fit in one byte
pub const MAX_HALF_WINDOW: usize = u8::MAX as usize;

/// One `(offset, length, literal)` triplet of the wire format.
///
/// `length == 0` is a literal-only record and always carries `offset == 0`.
/// A record with `length > 0` copies `length` bytes starting `offset` bytes
/// back from the end of the output produced so far, then appends `literal`.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct Record {
    pub offset: u8,
    pub length: u8,
    pub literal: u8,
}

impl Record {
    /// closes a stream; its literal is dropped by the decoder
    pub const SENTINEL: Record = Record {
        offset: 0,
        length: 0,
        literal: 0,
    };

    pub fn literal(x: u8) -> Self {
        Self {
            offset: 0,
            length: 0,
            literal: x,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.length == 0
    }

    pub fn to_bytes(self) -> [u8; RECORD_LEN] {
        [self.offset, self.length, self.literal]
    }

    pub fn from_bytes(xs: [u8; RECORD_LEN]) -> Self {
        Self {
            offset: xs[0],
            length: xs[1],
            literal: xs[2],
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.offset, self.length, self.literal)
    }
}
