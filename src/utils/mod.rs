pub mod config;
pub mod fd_limit;
pub mod imagesize_toml;
pub mod logger;

pub use config::*;
pub use fd_limit::{FDS_PER_SLOT, cap_concurrency, max_open_fds, max_slots_by_fd_limit};
pub use imagesize_toml::{ImagesizeToml, SettingsSection, load_imagesize_toml, parse_imagesize_toml};
pub use logger::setup_logging;
