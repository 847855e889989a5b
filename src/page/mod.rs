//! Page values and the next-link computation
//!
//! # Overview
//!
//! [`PageRequest`] is an immutable, normalized page/size pair.
//! [`ResultPage`] pairs a request with the slice a source returned for
//! it, and [`ResultPageWithNext`] decorates that with an optional
//! absolute link to the following page. Decoration is the only place
//! with real logic: a full page links forward, a short page is treated
//! as the last.

mod types;

pub use types::{PageRequest, ResultPage, ResultPageWithNext, QUERY_PAGE, QUERY_PAGE_SIZE};
