//! Frame evaluation: global frame to visual tree.

pub(crate) mod evaluator;
