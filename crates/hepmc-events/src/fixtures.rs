//! Sample data fixtures for testing.
//!
//! This module provides ready-made HepMC lines for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // hepmc-events = { path = "../hepmc-events", features = ["test-fixtures"] }
//!
//! use hepmc_events::fixtures;
//!
//! let listing = fixtures::sample_event();
//! let vertex = fixtures::vertex_line();
//! ```

/// Returns a complete single-event listing from the fixtures file.
///
/// Contains one `E` record, two vertices, one particle connecting them,
/// two final-state particles without end vertices, and the usual
/// `HepMC::` framing plus a `U` units line that classify as ignored.
pub fn sample_event() -> &'static str {
    include_str!("../tests/fixtures/sample_event.hepmc")
}

/// An `E` record for event number 29.
pub fn event_line() -> &'static str {
    "E 29 -1 -1.00000000e+00 -1.00000000e+00 -1.00000000e+00 1111230000 -243 534 1 2 0 3"
}

/// A `V` record with a negative barcode (-200648) at
/// (x, y, z) = (951.9, -533.2, -1881.7).
pub fn vertex_line() -> &'static str {
    "V -200648 1121 9.51900940e+02 -5.33236511e+02 -1.88166296e+03 2.88058228e+03 0 1 1 2.00877000e+05"
}

/// A `P` record (a pi+) ending at vertex -200334.
pub fn particle_line() -> &'static str {
    "P 200388 211 -2.08521011e+02 2.27627213e+02 1.08288109e+02 3.55670194e+02 1.39570099e+02 1 0 0 -200334 0"
}

/// A `P` record (a neutron) with end vertex 0: a final-state particle.
pub fn final_state_particle_line() -> &'static str {
    "P 200386 2112 -2.51403702e+02 4.56170502e+02 -1.67972778e+02 1.08733311e+03 9.39565369e+02 1 0 0 0 0"
}
