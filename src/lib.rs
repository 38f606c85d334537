// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub use crate::core::engine::CurationEngine;
