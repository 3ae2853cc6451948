#![forbid(unsafe_code)]

//! Merkle tree level model + theme (headless).
//!
//! Design goals:
//! - the level structure is taken as-is from the caller (no hashing, no tree
//!   construction, no well-formedness validation)
//! - deterministic, testable outputs
//! - anything that is not a level structure means "nothing to render", not
//!   an error

pub mod config;
pub mod error;
pub mod theme;
pub mod tree;

pub use config::{TreeRenderConfig, VizConfig};
pub use error::{Error, Result};
pub use tree::MerkleTree;

#[cfg(test)]
mod tests;
