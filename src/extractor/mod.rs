//! Content classification module.
//!
//! Turns the leaves of the article body into typed content items.
//!
//! # Module Structure
//!
//! - `tags`: Tag catalogs and node predicates
//! - `search`: Bounded ancestor search with a tri-state predicate
//! - `state`: Per-article attribution store and item arena
//! - `handlers`: Classifier chain (quote, heading, link, video, image, text)
//! - `walker`: Document-order leaf iteration
//! - `pipeline`: Root-level orchestration
//!
//! # Usage
//!
//! ```rust,ignore
//! use rs_newspost::extractor::{classify_node, ExtractionState, LeafWalker};
//!
//! let mut state = ExtractionState::new(base_url, opts.quote_classes.clone());
//! state.add_root(root.id);
//!
//! for leaf in LeafWalker::new(&root) {
//!     classify_node(&leaf, &mut state);
//! }
//! let items = state.into_items();
//! ```

pub mod handlers;
pub mod pipeline;
pub mod search;
pub mod state;
pub mod tags;
pub mod walker;

pub use handlers::{classify_node, Classified};
pub use pipeline::parse_news_post_content;
pub use search::{find_ancestor, Search};
pub use state::{ExtractionState, ItemHandle};
pub use walker::LeafWalker;
