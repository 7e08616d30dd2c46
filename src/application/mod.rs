//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the slugger and
//! the store, translating store errors into the application taxonomy, and
//! dispatching the asynchronous hit-counter side effect.

pub mod services;
