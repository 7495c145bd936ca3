// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring and phrase search over a segmented complete-works corpus.
//!
//! A single corpus file is split into works, each work gets its own suffix
//! array, and a query comes back as readable fragments of text around every
//! cluster of matches.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│   index.rs   │◀────│  search/     │
//! │ (segment,   │     │ (SuffixArray │     │ (find, dedup,│
//! │  load)      │     │  Index, SAIS)│     │  chunk, frag)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 ▲
//!                          ┌──────────────┐       │
//!                          │   query.rs   │───────┘
//!                          │ (parse_query)│
//!                          └──────────────┘
//! ```
//!
//! Loading happens once. After that the corpus is immutable and any number of
//! threads can search it concurrently.
//!
//! # Usage
//!
//! ```
//! use quarto::{Corpus, Searcher};
//!
//! let corpus = Corpus::from_text("►THE TEMPEST\r\nFull fathom five thy father lies;\r\n");
//! let searcher = Searcher::new(corpus);
//!
//! let results = searcher.search("\"fathom five\"");
//! assert_eq!(results[0].work_title, "THE TEMPEST");
//! assert_eq!(results[0].fragments, vec!["Full fathom five thy father lies;"]);
//! ```

pub mod corpus;
pub mod error;
pub mod index;
pub mod query;
mod sais;
pub mod search;
#[cfg(feature = "server")]
pub mod server;
pub mod testing;
mod types;
mod utils;

pub use corpus::{segment, Corpus, Segment};
pub use error::LoadError;
pub use index::{SubstringIndex, SuffixArrayIndex};
pub use query::parse_query;
pub use search::{search_corpus, search_work, Searcher};
pub use types::{
    Chunk, SearchResult, Work, DISPLAY_LINE_BREAK, PRE_SUFFIX_SIZE, SECTION_SEPARATOR,
    WORK_SEPARATOR,
};
pub use utils::fold_case;
