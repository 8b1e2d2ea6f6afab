//! Page-scraping tools. Fetching and markup stripping live behind
//! [`IPageSource`](concierge_core::traits::IPageSource); these tools only shape
//! the text into payloads.

mod blocked;
mod http;
mod notices;
mod placements;

pub use blocked::detect_block;
pub use http::{strip_markup, HttpPageSource};
pub use notices::NoticesTool;
pub use placements::PlacementsTool;
