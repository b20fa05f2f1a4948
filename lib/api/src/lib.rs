//! # waynet API
//!
//! The editing surface consumed by an external presentation layer.
//!
//! Rendering and input handling live outside this workspace; what they need
//! from the graph is a way to request mutations and observe whether each one
//! took effect. [`EditCommand`] and [`apply`] provide exactly that, with
//! every invalid request reported as an [`EditOutcome::Ignored`] rather than
//! an error.

pub mod edit;

pub use edit::{apply, EditCommand, EditOutcome};
