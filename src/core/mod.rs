pub mod package;
pub mod runner;
pub mod skill;

pub use crate::utils::error::Result;
