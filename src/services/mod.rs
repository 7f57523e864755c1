//! Preference matching and ranking engine
//!
//! Every function here is pure and infallible. Unrecognized or malformed
//! preference values disable their rule (or always match) rather than error.

pub mod era;
pub mod filter;
pub mod mood;
pub mod normalize;
pub mod ranking;
pub mod scoring;

pub use filter::is_eligible;
pub use ranking::rank;
pub use scoring::{score, Score};
