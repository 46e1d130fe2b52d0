//! Line-by-line stream driver.
//!
//! Reads the input in strict file order, classifies each line, dispatches
//! to the writer, and reports how many events were started. Malformed
//! known-tag lines abort the run with their 1-based line number; unknown
//! tags are skipped silently.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use hepmc_events::{classify, EventHeader, LineTag, ParseError, ParticleRecord, VertexRecord};

use crate::config::RenderConfig;
use crate::writer::{DotWriter, WriteError};

/// Errors aborting a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Parse { line: usize, source: ParseError },
    #[error("line {line}: particle record has no preceding vertex record")]
    OrphanParticle { line: usize },
}

/// Converts one HepMC listing into DOT, streaming fragment by fragment.
///
/// Returns the number of event (`E`) records encountered. An input with
/// none of them produces no output at all.
pub fn convert<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: RenderConfig,
) -> Result<u64, ConvertError> {
    let mut writer = DotWriter::new(output, config);
    let mut events = 0u64;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let lineno = index + 1;
        match classify(&line) {
            LineTag::EventStart => {
                let header = EventHeader::parse(&line).map_err(|source| ConvertError::Parse {
                    line: lineno,
                    source,
                })?;
                writer.start_event(&header)?;
                events += 1;
            }
            LineTag::Vertex => {
                let vertex = VertexRecord::parse(&line).map_err(|source| ConvertError::Parse {
                    line: lineno,
                    source,
                })?;
                writer.record_vertex(&vertex)?;
            }
            LineTag::Particle => {
                let particle =
                    ParticleRecord::parse(&line).map_err(|source| ConvertError::Parse {
                        line: lineno,
                        source,
                    })?;
                writer.record_particle(&particle).map_err(|err| match err {
                    WriteError::Io(err) => ConvertError::Io(err),
                    WriteError::NoProductionVertex => {
                        ConvertError::OrphanParticle { line: lineno }
                    }
                })?;
            }
            LineTag::Ignored => {}
        }
    }

    writer.finish()?;
    Ok(events)
}

/// Converts the file at `hepmc_path` into a DOT file at `dot_path`.
///
/// Both handles are scoped to this call; the output is flushed before
/// returning. A failed run leaves whatever was already written in place.
pub fn convert_files(
    hepmc_path: &Path,
    dot_path: &Path,
    config: RenderConfig,
) -> Result<u64, ConvertError> {
    let input = BufReader::new(File::open(hepmc_path)?);
    let output = BufWriter::new(File::create(dot_path)?);
    let events = convert(input, output, config)?;
    tracing::debug!(
        "converted {} events from {} to {}",
        events,
        hepmc_path.display(),
        dot_path.display()
    );
    Ok(events)
}
