//! Calendar use-case services.
//!
//! # Responsibility
//! - Expose the public "create events" entry point over the layout engine.
//! - Turn caller configuration into validated intervals and surface every
//!   failure to the caller.

pub mod calendar_service;
