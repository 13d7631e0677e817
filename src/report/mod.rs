mod summary;

pub use summary::{ElementCount, Summary};

use crate::tally::TallyRun;

/// Everything a formatter needs to describe a finished run.
#[derive(Debug, Clone, Copy)]
pub struct TallyReport<'a> {
    pub run: &'a TallyRun,
    pub summary: &'a Summary,
    /// Name of the encoding the input was decoded with.
    pub encoding: &'a str,
}
