//! Render a whole year as aligned plain-text calendar grids.
//!
//! Every date of the year is placed in a Sunday-aligned slot of its month, and
//! the resulting grid is printed either with one row per month
//! ([`Layout::Horizontal`]) or with one row per slot ([`Layout::Vertical`]).
//! A single date may be highlighted by bracketing it.
//!
//! ```
//! use time::macros::date;
//! use yearcal::{Calendar, Layout};
//!
//! let cal = Calendar::new(2024, Some(date!(2024 - 01 - 01)))?;
//! let text = cal.render(Layout::Horizontal);
//! assert!(text.starts_with("2024 Jan Feb Mar"));
//! assert!(text.contains("Jan     [1] 2  3"));
//! # Ok::<(), time::error::ComponentRange>(())
//! ```
mod calendar;
pub use crate::calendar::*;
