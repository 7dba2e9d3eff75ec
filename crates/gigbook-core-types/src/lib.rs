//! Core types shared across gigbook facilities
//!
//! This crate provides the canonical field keys and event names used by
//! both the error and logging facilities, so every crate that emits
//! structured events agrees on their shape.

pub mod schema;
