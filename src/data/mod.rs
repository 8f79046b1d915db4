//! Data processing between the feed and the gallery.
//!
//! ## Submodules
//!
//! - [`filter`]: Inclusive calendar-date range filtering ([`DateRange`], [`filter()`])
//!
//! ## Data Flow
//!
//! ```text
//! Vec<Record> (feed order)
//!        │
//!        ▼
//! DateRange::parse(start input, end input)
//!        │
//!        ▼
//! filter::filter() ──▶ gallery::render()
//! ```

pub mod filter;

pub use filter::{filter, parse_calendar_date, Bound, DateRange};
