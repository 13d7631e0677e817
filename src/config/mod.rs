mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, USER_CONFIG_NAME};
pub use model::{
    ChartConfig, Config, DEFAULT_CHART_PATH, DEFAULT_CSV_PATH, DEFAULT_DPI, EncodingConfig,
    OutputConfig, SymbolsConfig,
};
pub use validation::{DPI_RANGE, validate_config_semantics};
