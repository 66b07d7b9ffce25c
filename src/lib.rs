//! Decision Ledger - Decision Governance & Knowledge-Linking Core
//!
//! This crate implements an append-only, immutable versioning scheme for
//! organizational decisions: supersession chains, a bounded topic taxonomy,
//! a multi-step revisit workflow, and derived read-only views (timeline,
//! change digest) that reconstruct history deterministically from the chain.

pub mod domain;
pub mod ports;
