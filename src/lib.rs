//! Cube 2048 (workspace facade crate).
//!
//! The rules engine lives in dedicated crates under `crates/`; this package
//! re-exports them as `cube_2048::{core,types}` and adds the headless
//! self-play runner used by the `cube-2048` binary.

pub mod config;
pub mod selfplay;

pub use cube_2048_core as core;
pub use cube_2048_types as types;
