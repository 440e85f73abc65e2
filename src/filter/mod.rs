//! Filter & search engine
//!
//! Reduces a [`crate::model::SupplyChainData`] snapshot by structured
//! criteria or free-text search while preserving referential integrity of
//! the edge set: an edge survives only when both of its endpoint nodes do.

pub mod criteria;
pub mod engine;
pub(crate) mod fields;

pub use criteria::FilterCriteria;
pub use engine::FilterEngine;
