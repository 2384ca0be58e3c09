//! # Linkpage Model
//!
//! Data model for a link-in-bio page: a [`Profile`] and an ordered
//! collection of [`Block`]s.
//!
//! A block is a closed tagged union. The common fields (`id`, `title`,
//! `visible`, `order`) live on [`Block`]; the per-kind payload lives in
//! [`BlockContent`], one struct per [`BlockKind`].
//!
//! ## Wire form
//!
//! Blocks serialize to a flat camelCase object tagged by `kind`:
//!
//! ```json
//! { "id": "1", "kind": "link", "title": "Portfolio", "visible": true,
//!   "order": 0, "url": "https://example.com", "icon": "globe" }
//! ```
//!
//! Loading a block whose `kind` is outside the known set does not fail;
//! it yields [`BlockContent::Unsupported`] so renderers can degrade.

pub mod block;
pub mod content;
pub mod error;
pub mod ids;
pub mod profile;

pub use block::{Block, BlockKind};
pub use content::*;
pub use error::ModelError;
pub use ids::BlockId;
pub use profile::Profile;
