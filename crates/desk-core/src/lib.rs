//! # desk-core
//!
//! Core types and error types for the CS insight desk.
//!
//! This crate provides the foundational types shared across all desk crates:
//! - Entity structs for the records the engine reads (companies, inquiries, QnA)
//! - Status and urgency enums tolerant of unknown and Korean labels
//! - Priority tiers and benchmark performance labels
//! - Derived view types returned by the insight engine
//! - The input `Snapshot` and cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod snapshot;
