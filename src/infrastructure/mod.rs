//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Concrete [`crate::domain::repositories::UrlStore`]
//!   implementations

pub mod persistence;
