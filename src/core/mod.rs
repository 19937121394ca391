// src/core/mod.rs

pub mod builder;
pub mod engine;
pub mod fallback;
pub mod features;
pub mod selector;
pub mod types;
