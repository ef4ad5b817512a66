pub mod config;
pub mod core;
pub mod domain;
pub mod reference;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::{etl::EtlEngine, pipeline::EnrichmentPipeline};
pub use reference::ReferenceData;
pub use utils::error::{EtlError, Result};
