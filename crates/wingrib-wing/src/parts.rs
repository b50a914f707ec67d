//! Flattening a generated wing into layout parts

use serde::{Deserialize, Serialize};
use wingrib_core::{ensure_clockwise, Point, RawPart};

use crate::generator::WingArtifact;
use crate::planform::spar_length;

/// Which parts to extract besides the ribs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartOptions {
    /// Emit one strip part per spar, cut to its true planform length
    pub include_spars: bool,
}

/// One part per rib, labelled with the rib id
pub fn to_parts(artifact: &WingArtifact) -> Vec<RawPart> {
    to_parts_with(artifact, &PartOptions::default())
}

pub fn to_parts_with(artifact: &WingArtifact, options: &PartOptions) -> Vec<RawPart> {
    let mut parts: Vec<RawPart> = artifact
        .ribs
        .iter()
        .map(|rib| {
            RawPart::new(
                rib.id.clone(),
                rib.outline.clone(),
                rib.cutouts.clone(),
                rib.id.clone(),
            )
        })
        .collect();

    if options.include_spars {
        parts.extend(spar_parts(artifact));
    }
    parts
}

/// Rectangular strip parts `spar-{k}`, one per spar
pub fn spar_parts(artifact: &WingArtifact) -> Vec<RawPart> {
    let spec = &artifact.spec;
    spec.spars
        .iter()
        .enumerate()
        .map(|(k, spar)| {
            let length = spar_length(spec, spar.x_frac);
            let outline = ensure_clockwise(&[
                Point::new(0.0, 0.0),
                Point::new(length, 0.0),
                Point::new(length, spar.stock_size),
                Point::new(0.0, spar.stock_size),
            ]);
            let id = format!("spar-{}", k);
            RawPart::new(id.clone(), outline, Vec::new(), id)
        })
        .collect()
}
