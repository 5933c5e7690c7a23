//! Application services — use-case orchestration.
//!
//! Each service module implements one stage of app removal by composing
//! domain logic with port trait calls. Services import only from
//! `crate::domain` and `crate::application::ports` — never from
//! `crate::infra` or `crate::output`.

pub mod app_rm;
pub mod liveness;
pub mod supervisor;
pub mod unit_cleaner;
