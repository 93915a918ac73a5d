//! Core domain types and utilities for the handwave client.
//!
//! This crate provides the foundational types, error handling, and shared
//! identifiers used across the handwave client state layer.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::UserId;
