mod presets;
mod set;

pub use presets::{CUSTOM_CHART_TITLE, ELEMENTS, METALS, Preset};
pub use set::{MAX_SYMBOL_LEN, SymbolSet};
