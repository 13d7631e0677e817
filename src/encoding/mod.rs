//! Decoding input files of unknown encoding.
//!
//! [`EncodingResolver`] walks an ordered list of candidate encodings and falls
//! back to a statistical [`EncodingDetector`]; [`convert_to_utf8`] writes the
//! result back out as UTF-8.

mod convert;
mod detector;
mod resolver;

pub use convert::convert_to_utf8;
pub use detector::{ChardetDetector, EncodingDetector};
pub use resolver::{Charset, DEFAULT_CANDIDATES, Decoded, EncodingResolver, lookup_label};
