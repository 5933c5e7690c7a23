//! Application layer — port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain` — never on `crate::infra`
//! or `crate::output`.

pub mod ports;
pub mod services;

pub use ports::{CommandRunner, NamespaceRunner, PodLoader, Reporter, UnitFs};
pub use services::app_rm::{RemovalOutcome, remove_app};
