//! Shared infrastructure utilities for Quizzer.
//!
//! This crate provides filesystem helpers that multiple Quizzer crates need
//! but that don't belong in the domain-pure `quizzer-types` crate:
//!
//! - **`atomic_write`**: Crash-safe file persistence (temp + rename)
//! - **`private_dir`**: Owner-only data directory creation

pub mod atomic_write;
pub mod private_dir;

pub use atomic_write::{atomic_write, recover_bak_file};
pub use private_dir::ensure_private_dir;
