//! Domains module containing business logic organized by bounded contexts.
//!
//! The server only exposes tools; each tool maps one-to-one onto a
//! Google Tasks API operation.

pub mod tools;
