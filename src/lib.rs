#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]

//! # Pagewise
//!
//! A minimal, Rust-native offset-pagination add-on for async data sources.
//!
//! ## Features
//!
//! - **Normalized page requests**: absent or zero `page`/`pagesize` inputs
//!   collapse to documented defaults instead of failing the request
//! - **Capability contract**: any async data source can opt into paging by
//!   implementing a single trait
//! - **Stateless next links**: a full page is decorated with an absolute
//!   "next page" URI so clients page forward without server-side cursors
//! - **Dynamic registries**: heterogeneous source collections resolve the
//!   capability at run time; statically typed call sites require it at
//!   compile time
//!
//! ## Quick Start
//!
//! ```rust
//! use pagewise::{PageRequest, PaginationActions, VecSource};
//! use url::Url;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> pagewise::Result<()> {
//! let source = VecSource::new((1..=250_u32).collect());
//! let actions = PaginationActions::new(source, Url::parse("http://api.test/items")?);
//!
//! let page = actions.get_page(PageRequest::new(Some(2), Some(100)), None).await?;
//! assert_eq!(page.results().len(), 100);
//! assert!(page.next().is_some());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Entry Points                             │
//! │  PaginationActions (typed)        actions::* (dynamic bridge)   │
//! │  query map → PageRequest          Source → SupportsPagination?  │
//! └───────────────────────────────┬─────────────────────────────────┘
//!                                 │
//! ┌───────────────┬───────────────┴──────────────┬──────────────────┐
//! │     Page      │           Source             │      Links       │
//! ├───────────────┼──────────────────────────────┼──────────────────┤
//! │ PageRequest   │ SupportsPagination           │ ResultPageWith-  │
//! │ ResultPage    │ count / get_page (+ filter)  │ Next: base URI + │
//! │ defaults 1/100│ VecSource reference impl     │ page=N&pagesize=M│
//! └───────────────┴──────────────────────────────┴──────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Error types
pub mod error;

/// Shared type aliases
pub mod types;

/// Page values and the next-link computation
pub mod page;

/// Data source contracts and the in-memory reference source
pub mod source;

/// Typed pagination actions and the dynamic capability bridge
pub mod actions;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use actions::PaginationActions;
pub use page::{PageRequest, ResultPage, ResultPageWithNext};
pub use source::{ItemFilter, Source, SupportsPagination, VecSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
