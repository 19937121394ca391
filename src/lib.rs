// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod learning;
pub mod persistence;
pub mod quiz;

pub use crate::config::DistractorConfig;
pub use crate::core::builder::{IndexBuilder, IndexDiagnostics};
pub use crate::core::engine::{DistractorEngine, IndexState};
pub use crate::core::types::{PhoneticFeatureBundle, PhoneticIndex, VocabularyEntry};
pub use crate::error::{DistractorError, Result};
