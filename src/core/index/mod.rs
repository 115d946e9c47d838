//! Index naming: identifier parsing and range expansion

mod identifier;
mod range;

pub use identifier::{IndexIdentifier, MAX_SEQUENCE, SEQUENCE_WIDTH};
pub use range::{IndexRange, IndexRangeIter, expand};
