//! MatchForge Solve Engine
//!
//! This crate provides the Kuhn-Munkres solve implementation:
//! - Row/column reduction of the working matrix
//! - Star/prime label and cover bookkeeping
//! - Zero-position analysis driving the covering loop
//! - Augmenting-path construction
//! - The `SolveSession` phase state machine
//! - Observation hooks for tracing solve progress

pub mod augment;
pub mod cover;
pub mod event;
pub mod labels;
pub mod options;
pub mod reduce;
pub mod render;
pub mod session;
pub mod zeros;

pub use cover::CoverState;
pub use event::{CountingObserver, SolveObserver, StateSnapshot, TraceObserver};
pub use labels::LabelSet;
pub use options::{OptionsError, SolveOptions};
pub use session::SolveSession;
pub use zeros::ZeroMatrix;
