mod error;
mod file;

pub use crate::error::IniError;
pub use crate::file::{IniFile, Section};
