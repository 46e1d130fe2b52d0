//! Event lifecycle and streaming DOT emission.
//!
//! [`DotWriter`] owns the running context of a conversion: whether a
//! digraph is currently open and which vertex was declared most recently.
//! Each record is turned into output text immediately; no graph is held in
//! memory. The writer is consumed by [`DotWriter::finish`], which closes
//! any open digraph and hands the inner handle back, so output is
//! terminated on every exit path rather than left to drop order.

use std::io::{self, Write};
use thiserror::Error;

use hepmc_events::{EventHeader, ParticleRecord, VertexRecord};

use crate::config::{RenderConfig, DUMMY_TRACK_LENGTH};
use crate::dot;

/// Most recently declared vertex, reduced to what particle edges need:
/// its barcode and derived cylindrical coordinates.
#[derive(Debug, Clone, Copy)]
struct CurrentVertex {
    barcode: i64,
    r: f64,
    z: f64,
}

/// Errors from record emission.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A particle record arrived with no vertex declared before it, so the
    /// edge has no source node.
    #[error("particle record has no preceding vertex record")]
    NoProductionVertex,
}

/// Streaming DOT writer for a sequence of HepMC records.
///
/// At most one digraph is open at a time; starting a new event closes the
/// previous one. Every fragment written belongs to the currently open
/// digraph.
pub struct DotWriter<W: Write> {
    out: W,
    config: RenderConfig,
    event_open: bool,
    current_vertex: Option<CurrentVertex>,
}

impl<W: Write> DotWriter<W> {
    /// Creates a writer emitting to `out`.
    pub fn new(out: W, config: RenderConfig) -> Self {
        Self {
            out,
            config,
            event_open: false,
            current_vertex: None,
        }
    }

    /// Closes any open digraph and opens one for this event.
    pub fn start_event(&mut self, header: &EventHeader) -> io::Result<()> {
        self.close_if_open()?;
        writeln!(self.out, "digraph event_{} {{", header.event_number)?;
        self.event_open = true;
        Ok(())
    }

    /// Emits a vertex node and makes it the current vertex.
    ///
    /// A vertex past the configured barcode threshold is dropped without
    /// touching the context.
    pub fn record_vertex(&mut self, vertex: &VertexRecord) -> io::Result<()> {
        if self.config.skips(vertex.barcode) {
            tracing::debug!("skipping vertex {} past threshold", vertex.barcode);
            return Ok(());
        }
        let r = vertex.r();
        self.current_vertex = Some(CurrentVertex {
            barcode: vertex.barcode,
            r,
            z: vertex.z,
        });
        let node = dot::vertex_node(vertex.barcode, r, vertex.z, self.config.scale);
        self.out.write_all(node.as_bytes())
    }

    /// Emits the edge for a particle leaving the current vertex.
    ///
    /// A particle without an end vertex first gets a dummy terminal node,
    /// placed [`DUMMY_TRACK_LENGTH`] along its momentum direction from the
    /// current vertex.
    pub fn record_particle(&mut self, particle: &ParticleRecord) -> Result<(), WriteError> {
        if let Some(end_vertex) = particle.end_vertex {
            if self.config.skips(end_vertex) {
                tracing::debug!(
                    "skipping particle {} ending past threshold",
                    particle.barcode
                );
                return Ok(());
            }
        }
        let source = self.current_vertex.ok_or(WriteError::NoProductionVertex)?;
        let source_name = dot::node_name(source.barcode, false);

        let target_name = match particle.end_vertex {
            Some(end_vertex) => dot::node_name(end_vertex, false),
            None => {
                let momentum = particle.momentum();
                let scale = self.config.scale;
                let r = source.r * scale + particle.pt() / momentum * DUMMY_TRACK_LENGTH;
                let z = source.z * scale + particle.pz / momentum * DUMMY_TRACK_LENGTH;
                let node = dot::dummy_node(particle.barcode, r, z);
                self.out.write_all(node.as_bytes())?;
                dot::node_name(particle.barcode, true)
            }
        };

        let edge = dot::particle_edge(&source_name, &target_name, particle);
        self.out.write_all(edge.as_bytes())?;
        Ok(())
    }

    /// Emits the closing delimiter if a digraph is open. Idempotent.
    pub fn close_if_open(&mut self) -> io::Result<()> {
        if self.event_open {
            self.out.write_all(b"}\n")?;
            self.event_open = false;
        }
        Ok(())
    }

    /// Closes any open digraph, flushes, and returns the inner handle.
    pub fn finish(mut self) -> io::Result<W> {
        self.close_if_open()?;
        self.out.flush()?;
        Ok(self.out)
    }
}
