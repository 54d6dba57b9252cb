//! Domain types for the imburse personal content manager
//!
//! This crate provides the canonical content models shared across the app:
//! - ContentRecord: a stored item (note, code snippet, image, link, ...)
//! - ContentKind: the closed set of content kinds
//!
//! Persistence concerns (id assignment, timestamps, derived fields) live in
//! the store layer; these types only carry what the app layers exchange.

pub mod record;

pub use record::*;
