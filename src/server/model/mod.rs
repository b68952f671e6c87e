//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types describe the
//! input of a single service operation.

pub mod event;
pub mod playlist;
pub mod song;
pub mod token;
pub mod user;
