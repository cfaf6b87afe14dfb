//! Cross-cutting helpers shared by all modules

pub mod date_utils;
pub mod format;
pub mod list_utils;
pub mod settings;
