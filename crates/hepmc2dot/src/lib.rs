//! HepMC to DOT transcoder.
//!
//! Converts HepMC::IO_GenEvent ASCII listings into Graphviz DOT digraphs,
//! one digraph per event, streaming record by record. Nothing is buffered
//! beyond the line being processed and the most recent vertex, so inputs
//! with arbitrarily many events convert in constant memory.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   E/V/P lines   ┌───────────┐   node/edge text   ┌──────────┐
//! │ .hepmc     │ ──────────────▶ │ convert   │ ─────────────────▶ │ .dot     │
//! └────────────┘                 └───────────┘                    └──────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`]: Render settings (scale, barcode threshold) and TOML loading
//! - [`dot`]: Pure DOT fragment formatters and edge styling rules
//! - [`writer`]: Event lifecycle and the running current-vertex context
//! - [`convert`]: The line-by-line stream driver

pub mod config;
pub mod convert;
pub mod dot;
pub mod writer;

// Re-export config types
pub use config::{ConfigError, RenderConfig, DUMMY_TRACK_LENGTH};

// Re-export writer types
pub use writer::{DotWriter, WriteError};

// Re-export driver entry points
pub use convert::{convert, convert_files, ConvertError};
