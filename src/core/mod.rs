// src/core/mod.rs
pub mod annotate;
pub mod assign;
pub mod candidates;
pub mod engine;
pub mod frequency;
pub mod schedule;
pub mod scoring;
pub mod seed;
pub mod select;
pub mod types;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;
