use super::*;
use crate::composition::config::CompositionConfig;
use crate::eval::evaluator::Evaluator;
use crate::foundation::core::FrameIndex;

#[test]
fn held_pose_shares_a_fingerprint() {
    let comp = CompositionConfig::default();
    // Both frames are past the end of the timeline: background only.
    let a = Evaluator::eval_frame(&comp, FrameIndex(2700)).unwrap();
    let b = Evaluator::eval_frame(&comp, FrameIndex(2800)).unwrap();
    assert_ne!(a.frame, b.frame);
    assert_eq!(fingerprint_graph(&a).unwrap(), fingerprint_graph(&b).unwrap());
}

#[test]
fn animated_frames_differ() {
    let comp = CompositionConfig::default();
    let a = Evaluator::eval_frame(&comp, FrameIndex(10)).unwrap();
    let b = Evaluator::eval_frame(&comp, FrameIndex(11)).unwrap();
    assert_ne!(fingerprint_graph(&a).unwrap(), fingerprint_graph(&b).unwrap());
}

#[test]
fn fingerprint_is_stable_across_calls() {
    let comp = CompositionConfig::default();
    let g = Evaluator::eval_frame(&comp, FrameIndex(500)).unwrap();
    assert_eq!(fingerprint_graph(&g).unwrap(), fingerprint_graph(&g).unwrap());
}
