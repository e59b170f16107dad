//! Shared Kernel - Domain-crossing minimal core
//!
//! The smallest vocabulary every feature crate agrees on:
//! - Unified application error type with HTTP status mapping
//! - Typed entity ID wrappers
//! - The JSON response envelope used on every route
//!
//! Only things that are hard to change and mean the same thing in every
//! domain belong here.

pub mod envelope;
pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
