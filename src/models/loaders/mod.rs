pub mod toml_loader;

pub use toml_loader::{load_snapshot_file, parse_snapshot};
