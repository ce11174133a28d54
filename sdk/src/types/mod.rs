//! # Value Types
//!
//! The composite wire values a transaction is assembled from, each with its
//! own tagged binary encoding and construction-time validation:
//!
//! - **asset** -- native currency or issued credits, variant by code length.
//! - **memo** -- optional annotations: none, text, id, hash, return hash.
//! - **price** -- 32-bit fractions with continued-fraction approximation.
//! - **time_bounds** -- transaction validity windows.

pub mod asset;
pub mod memo;
pub mod price;
pub mod time_bounds;

pub use asset::Asset;
pub use memo::Memo;
pub use price::Price;
pub use time_bounds::TimeBounds;
