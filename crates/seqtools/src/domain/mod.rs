//! Domain layer - Pure sequence transformations
//!
//! Every function here borrows its input and returns a freshly allocated
//! sequence. Nothing mutates its arguments.

pub mod build;
pub mod combine;
pub mod numeric;
pub mod ordering;
pub mod removal;
pub mod resize;
pub mod validator;
