//! Keyword analysis.
//!
//! The scoring core (`signals` through `engine`) is pure and synchronous.
//! `pipeline` wraps it with the async enrichment collaborators and
//! `handlers` exposes it over HTTP.

pub mod difficulty;
pub mod engine;
pub mod handlers;
pub mod industry;
pub mod lenient;
pub mod lexicon;
pub mod models;
pub mod narrative;
pub mod pipeline;
pub mod plan;
pub mod rules;
pub mod scores;
pub mod signals;
