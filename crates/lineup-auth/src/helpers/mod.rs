//! HTTP-facing helpers for the auth crate

pub mod cookie;
