//! # Linkpage Page
//!
//! The page controller and the live page session.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ Page: profile + canonical block collection  │
//! │  - add / update / delete / toggle / order   │
//! │  - PageMutation + version counter           │
//! └─────────────────────────────────────────────┘
//!          ↑ operations           ↓ blocks
//! ┌─────────────────────────────────────────────┐
//! │ PageSession                                 │
//! │  - one BlockComponent per block             │
//! │  - open BlockEditor (create / edit)         │
//! │  - feed requests and results                │
//! │  - page view → VNode / HTML                 │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use linkpage_page::{Page, PageSession};
//!
//! let mut session = PageSession::new(Page::sample());
//! session.toggle_editing();
//!
//! let editor = session.open_create();
//! editor.set_field("kind", "text")?;
//! editor.set_field("title", "Note")?;
//! editor.set_field("content", "hi")?;
//! session.save_editor()?;
//!
//! let html = session.render_html(&HtmlOptions::default());
//! ```

mod mutations;
mod page;
mod session;
mod view;

pub use mutations::{MutationResult, PageMutation};
pub use page::Page;
pub use session::{PageSession, SessionError};
pub use view::{ACTION_ADD_BLOCK, ACTION_TOGGLE_EDITING, FOOTER_BADGE};
