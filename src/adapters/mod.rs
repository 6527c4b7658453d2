// Adapters - External system implementations

pub mod fs_download;
pub mod http_submit;
pub mod toml_config;

// Re-export adapters
pub use fs_download::FsDownloadAdapter;
pub use http_submit::HttpSubmissionAdapter;
pub use toml_config::TomlConfigAdapter;
