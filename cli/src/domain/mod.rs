//! Domain layer — pure types, rules, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, or `std::process`. All functions are synchronous and
//! take data in, returning data out.

pub mod error;
pub mod identity;
pub mod pod;
pub mod units;

pub use error::{InputError, PodError, SupervisorError, UnitError};
pub use identity::{Identity, TargetPid, resolve};
pub use pod::Pod;
pub use units::{INACTIVE_SENTINEL, Liveness, SYSTEMCTL, UnitPaths};
