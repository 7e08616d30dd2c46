//! Domain layer containing business entities and contracts.
//!
//! This module defines the core model of the shortening service independent
//! of transport and persistence concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//! - [`slugger`] - Slug generation and validation contract
//!
//! # Design Principles
//!
//! - The domain layer has no dependencies on infrastructure or API layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod slugger;
