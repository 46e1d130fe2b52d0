//! HepMC record types with field extraction and derived kinematics.
//!
//! Field positions follow the HepMC::IO_GenEvent ASCII layout and are
//! 1-based in error messages to match the format documentation. Records
//! carry more fields than we consume; the extras are tolerated and ignored.

use thiserror::Error;

/// Pseudorapidity value reported for particles travelling almost exactly
/// along the beam axis, where eta is formally unbounded. Signed like pz.
pub const ETA_SENTINEL: f64 = 999.0;

/// Threshold below which `E + pz` or `E - pz` is treated as degenerate
/// for the pseudorapidity computation.
pub const ETA_EPSILON: f64 = 1e-10;

/// Error produced when a known-tag line has missing or malformed fields.
///
/// Field extraction failures are fatal for a conversion run; unknown tags
/// never reach this code.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{record} record is missing field {field} ({name})")]
    MissingField {
        record: &'static str,
        field: usize,
        name: &'static str,
    },
    #[error("{record} record field {field} ({name}) is not an integer: {value:?}")]
    InvalidInt {
        record: &'static str,
        field: usize,
        name: &'static str,
        value: String,
    },
    #[error("{record} record field {field} ({name}) is not a number: {value:?}")]
    InvalidFloat {
        record: &'static str,
        field: usize,
        name: &'static str,
        value: String,
    },
}

/// Extracts the 1-based `field` from a split line.
fn field<'a>(
    fields: &[&'a str],
    record: &'static str,
    index: usize,
    name: &'static str,
) -> Result<&'a str, ParseError> {
    fields.get(index - 1).copied().ok_or(ParseError::MissingField {
        record,
        field: index,
        name,
    })
}

fn int_field(
    fields: &[&str],
    record: &'static str,
    index: usize,
    name: &'static str,
) -> Result<i64, ParseError> {
    let raw = field(fields, record, index, name)?;
    raw.parse().map_err(|_| ParseError::InvalidInt {
        record,
        field: index,
        name,
        value: raw.to_string(),
    })
}

fn float_field(
    fields: &[&str],
    record: &'static str,
    index: usize,
    name: &'static str,
) -> Result<f64, ParseError> {
    let raw = field(fields, record, index, name)?;
    raw.parse().map_err(|_| ParseError::InvalidFloat {
        record,
        field: index,
        name,
        value: raw.to_string(),
    })
}

/// Header of an event (`E`) record. Only the event number is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventHeader {
    pub event_number: i64,
}

impl EventHeader {
    /// Parses an `E` line.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let event_number = int_field(&fields, "E", 2, "event_number")?;
        Ok(Self { event_number })
    }
}

/// An interaction vertex (`V`) record.
///
/// The barcode sign is physically meaningful and preserved; node identity
/// downstream uses its absolute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexRecord {
    pub barcode: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl VertexRecord {
    /// Parses a `V` line: field 2 = barcode, fields 4-6 = x, y, z.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        Ok(Self {
            barcode: int_field(&fields, "V", 2, "barcode")?,
            x: float_field(&fields, "V", 4, "x")?,
            y: float_field(&fields, "V", 5, "y")?,
            z: float_field(&fields, "V", 6, "z")?,
        })
    }

    /// Radial distance from the beam axis.
    pub fn r(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// A particle (`P`) record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleRecord {
    pub barcode: i64,
    /// PDG species id; sign distinguishes particle from antiparticle.
    pub species_id: i64,
    pub px: f64,
    pub py: f64,
    pub pz: f64,
    pub energy: f64,
    /// Absolute barcode of the vertex the particle ends at. `None` means
    /// the particle escapes without a further recorded interaction.
    pub end_vertex: Option<i64>,
}

impl ParticleRecord {
    /// Parses a `P` line: field 2 = barcode, field 3 = species id,
    /// fields 4-7 = px, py, pz, E, field 12 = end vertex barcode.
    ///
    /// An end vertex of `0`, or a line short enough that field 12 is
    /// absent, means no end vertex.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let end_vertex = match fields.get(11) {
            None => None,
            Some(_) => match int_field(&fields, "P", 12, "end_vertex")?.unsigned_abs() {
                0 => None,
                bc => Some(bc as i64),
            },
        };
        Ok(Self {
            barcode: int_field(&fields, "P", 2, "barcode")?,
            species_id: int_field(&fields, "P", 3, "species_id")?,
            px: float_field(&fields, "P", 4, "px")?,
            py: float_field(&fields, "P", 5, "py")?,
            pz: float_field(&fields, "P", 6, "pz")?,
            energy: float_field(&fields, "P", 7, "energy")?,
            end_vertex,
        })
    }

    /// Transverse momentum.
    pub fn pt(&self) -> f64 {
        (self.px * self.px + self.py * self.py).sqrt()
    }

    /// Total momentum magnitude.
    pub fn momentum(&self) -> f64 {
        let pt = self.pt();
        (pt * pt + self.pz * self.pz).sqrt()
    }

    /// Pseudorapidity, computed from energy and longitudinal momentum.
    ///
    /// Returns [`ETA_SENTINEL`] with the sign of pz when either `E + pz`
    /// or `E - pz` is within [`ETA_EPSILON`] of zero.
    pub fn eta(&self) -> f64 {
        let num = self.energy + self.pz;
        let den = self.energy - self.pz;
        if num.abs() > ETA_EPSILON && den.abs() > ETA_EPSILON {
            0.5 * (num / den).ln()
        } else {
            ETA_SENTINEL.copysign(self.pz)
        }
    }
}
