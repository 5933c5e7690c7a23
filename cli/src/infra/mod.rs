//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution,
//! namespace entry, filesystem access, and pod loading.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::output` are forbidden.

pub mod command_runner;
pub mod enter;
pub mod fs;
pub mod pod;

pub use command_runner::TokioCommandRunner;
pub use enter::EnterRunner;
pub use fs::LocalFs;
pub use pod::ManifestPodLoader;
