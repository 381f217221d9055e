pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::package::{pack_skill, read_archive_config, unpack_skill, ArtifactConfig};
pub use crate::core::runner::Runner;
pub use crate::core::skill::{validate_skill_directory, SkillMetadata};
pub use crate::utils::error::{Result, SkillError};
