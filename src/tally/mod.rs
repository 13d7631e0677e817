mod accumulator;
mod tokenizer;

pub use accumulator::{GlobalTally, LineTally, TallyRun};
pub use tokenizer::{Matches, Tokenizer};
