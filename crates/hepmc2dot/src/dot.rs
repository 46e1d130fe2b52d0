//! Pure DOT fragment formatters.
//!
//! Every function here is a deterministic string builder; all state lives
//! in [`crate::writer`]. Positions are written as `pos="z,r!"` pin
//! coordinates (longitudinal position on the x axis, radial distance on
//! the y axis), positions to 3 decimals, label r/z to 2, energy and pT to
//! 0, eta to 1.

use hepmc_events::ParticleRecord;

/// PDG id magnitude of a proton.
const PROTON_ID: i64 = 2212;

/// PDG id magnitude of a photon.
const PHOTON_ID: i64 = 22;

/// Particles with |eta| below this cut are drawn in the central-region
/// color.
const CENTRAL_ETA_CUT: f64 = 2.5;

/// Returns the DOT node name for a barcode.
///
/// Nodes represent either an interaction vertex (`V_<abs>`) or, for a
/// final-state particle, a dummy terminal keyed by the particle's own
/// barcode (`V_dummy_<abs>`).
pub fn node_name(barcode: i64, is_dummy: bool) -> String {
    let dummy = if is_dummy { "dummy_" } else { "" };
    format!("V_{}{}", dummy, barcode.unsigned_abs())
}

/// Formats an interaction vertex node.
///
/// The node name uses the absolute barcode; the label keeps the signed
/// barcode and the unscaled (r, z) pair. Only the pin position is scaled.
pub fn vertex_node(barcode: i64, r: f64, z: f64, scale: f64) -> String {
    format!(
        "    {name} [label=\"vtx {barcode}\\nr={r:.2},z={z:.2}\",pos=\"{zpos:.3},{rpos:.3}!\"];\n",
        name = node_name(barcode, false),
        zpos = z * scale,
        rpos = r * scale,
    )
}

/// Formats a dummy terminal node for a final-state particle.
///
/// The empty label and `shape=none` leave the node borderless; (r, z) are
/// already in output coordinates.
pub fn dummy_node(particle_barcode: i64, r: f64, z: f64) -> String {
    format!(
        "    {name} [shape=none,label=\"\",pos=\"{z:.3},{r:.3}!\"];\n",
        name = node_name(particle_barcode, true),
    )
}

/// Formats the edge for a particle travelling from `source` to `target`.
///
/// The label carries barcode, species id, pT, energy and eta as display
/// metadata.
pub fn particle_edge(source: &str, target: &str, particle: &ParticleRecord) -> String {
    let eta = particle.eta();
    let style = match edge_style(particle.species_id, eta) {
        Some(attrib) => format!("{attrib},"),
        None => String::new(),
    };
    format!(
        "    {source} -> {target} [{style}label=\"p #{barcode}, id={id}\\npT={pt:.0}, E={energy:.0}, &eta;={eta:.1}\"];\n",
        barcode = particle.barcode,
        id = particle.species_id,
        pt = particle.pt(),
        energy = particle.energy,
    )
}

/// Display styling for a particle edge. Presentation hints only.
///
/// Evaluated as an ordered rule list; the last matching rule wins.
fn edge_style(species_id: i64, eta: f64) -> Option<&'static str> {
    let rules = [
        ("fontcolor=blue", species_id.abs() == PROTON_ID),
        ("fontcolor=brown", species_id.abs() == PHOTON_ID),
        ("color=red", eta.abs() < CENTRAL_ETA_CUT),
    ];
    rules
        .iter()
        .filter_map(|&(attrib, matched)| matched.then_some(attrib))
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_particle(species_id: i64, pz: f64, energy: f64) -> ParticleRecord {
        ParticleRecord {
            barcode: 200386,
            species_id,
            px: 30.0,
            py: 40.0,
            pz,
            energy,
            end_vertex: None,
        }
    }

    #[test]
    fn test_node_name_uses_absolute_barcode() {
        assert_eq!(node_name(-200648, false), "V_200648");
        assert_eq!(node_name(200648, false), "V_200648");
    }

    #[test]
    fn test_dummy_node_name() {
        assert_eq!(node_name(1, true), "V_dummy_1");
        assert_eq!(node_name(-1, true), "V_dummy_1");
    }

    #[test]
    fn test_vertex_node_negative_barcode_keeps_sign_in_label() {
        assert_eq!(
            vertex_node(-1, 2.0, 3.0, 1.0),
            "    V_1 [label=\"vtx -1\\nr=2.00,z=3.00\",pos=\"3.000,2.000!\"];\n"
        );
    }

    #[test]
    fn test_vertex_node_positive_barcode() {
        assert_eq!(
            vertex_node(1, 2.0, 3.0, 1.0),
            "    V_1 [label=\"vtx 1\\nr=2.00,z=3.00\",pos=\"3.000,2.000!\"];\n"
        );
    }

    #[test]
    fn test_vertex_node_rounds_coordinates() {
        assert_eq!(
            vertex_node(-1, 2.3456789, 3.4567890, 1.0),
            "    V_1 [label=\"vtx -1\\nr=2.35,z=3.46\",pos=\"3.457,2.346!\"];\n"
        );
    }

    #[test]
    fn test_vertex_node_scales_position_not_label() {
        assert_eq!(
            vertex_node(-1, 2.0, 3.0, 2.0),
            "    V_1 [label=\"vtx -1\\nr=2.00,z=3.00\",pos=\"6.000,4.000!\"];\n"
        );
    }

    #[test]
    fn test_vertex_formatter_is_deterministic() {
        let first = vertex_node(-200648, 1091.08, -1881.66, 1.0);
        let second = vertex_node(-200648, 1091.08, -1881.66, 1.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_dummy_node_format() {
        assert_eq!(
            dummy_node(1, 2.0, 3.0),
            "    V_dummy_1 [shape=none,label=\"\",pos=\"3.000,2.000!\"];\n"
        );
    }

    #[test]
    fn test_particle_edge_metadata() {
        // pT = 50, eta ~ 3.0 (forward): no style rule matches a pion.
        let particle = test_particle(211, 502.49, 505.0);
        assert_eq!(
            particle_edge("V_200648", "V_dummy_200386", &particle),
            "    V_200648 -> V_dummy_200386 [label=\"p #200386, id=211\\npT=50, E=505, &eta;=3.0\"];\n"
        );
    }

    #[test]
    fn test_central_particle_colored_red() {
        let particle = test_particle(211, 0.0, 50.0);
        let edge = particle_edge("V_1", "V_2", &particle);
        assert!(edge.contains("[color=red,label="));
    }

    #[test]
    fn test_forward_proton_colored_blue() {
        let particle = test_particle(2212, 502.49, 505.0);
        let edge = particle_edge("V_1", "V_2", &particle);
        assert!(edge.contains("[fontcolor=blue,label="));
    }

    #[test]
    fn test_central_rule_overrides_proton_rule() {
        let particle = test_particle(-2212, 0.0, 50.0);
        let edge = particle_edge("V_1", "V_2", &particle);
        assert!(edge.contains("[color=red,label="));
    }

    #[test]
    fn test_forward_photon_colored_brown() {
        let particle = test_particle(22, 502.49, 502.5);
        let edge = particle_edge("V_1", "V_2", &particle);
        assert!(edge.contains("[fontcolor=brown,label="));
    }
}
