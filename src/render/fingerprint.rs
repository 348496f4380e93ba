use xxhash_rust::xxh3::Xxh3;

use crate::eval::evaluator::FrameGraph;
use crate::foundation::error::{TutorialError, TutorialResult};

const XXH3_SEED: u64 = 0x0c1a_77e5_5eed_2700;

/// Stable per-frame fingerprint used by static-frame elision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct FrameFingerprint {
    pub(crate) hi: u64,
    pub(crate) lo: u64,
}

/// Fingerprint what a frame draws: canvas, background and element tree.
///
/// The frame index and scene-local frame are not hashed, so a held pose elides across time.
pub(crate) fn fingerprint_graph(graph: &FrameGraph) -> TutorialResult<FrameFingerprint> {
    let mut h = Xxh3::with_seed(XXH3_SEED);
    let visual = (&graph.canvas, &graph.background, &graph.root);
    let bytes = serde_json::to_vec(&visual)
        .map_err(|e| TutorialError::serde(format!("fingerprint frame graph: {e}")))?;
    h.update(&bytes);
    let digest = h.digest128();
    Ok(FrameFingerprint {
        hi: (digest >> 64) as u64,
        lo: digest as u64,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;
