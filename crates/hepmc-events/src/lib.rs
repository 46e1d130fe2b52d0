//! Record types and line-level parsing for HepMC::IO_GenEvent ASCII files.
//!
//! This crate contains pure data structures and parsing with no I/O.
//! It is a dependency for the transcoder crate in the workspace.

pub mod classify;
pub mod record;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export classifier types
pub use classify::{classify, LineTag};

// Re-export record types
pub use record::{
    EventHeader, ParseError, ParticleRecord, VertexRecord, ETA_EPSILON, ETA_SENTINEL,
};
