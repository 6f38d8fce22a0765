//! # tacklebox-core
//!
//! Stateless helpers for everyday data wrangling: arrays, calendar dates,
//! strings, numbers, JSON-like objects and a handful of validators.
//!
//! Every helper is a free function over plain values. Nothing is cached and
//! no global state is kept; the few settings that exist live in
//! [`DateConfig`], which the caller owns and passes in.
//!
//! ## Architecture
//!
//! - **Values**: [`Value`] is the dynamic JSON-like tree used by the object
//!   and falsy-filtering helpers
//! - **Collections**: [`arrays`] and [`objects`] for set algebra, chunking,
//!   deep equality and merging
//! - **Text and numbers**: [`strings`], [`numbers`] and [`validators`]
//! - **Time**: [`dates`] over `chrono::NaiveDateTime`, and [`functions`] for
//!   debouncing on tokio
//!
//! ## Quick Start
//!
//! ```rust
//! use tacklebox_core::{arrays, dates, strings, Result};
//!
//! let median = arrays::array_median(&[3.0, 1.0, 2.0])?;
//! assert_eq!(median, 2.0);
//!
//! assert_eq!(strings::camel_case("hello big world"), "helloBigWorld");
//!
//! let date = dates::parse_date("2024-02-29").expect("valid date");
//! assert_eq!(dates::get_day_of_week(date), "Thursday");
//! # Ok::<(), tacklebox_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Helpers that cannot produce a meaningful answer return [`Result`]:
//!
//! ```rust
//! use tacklebox_core::{arrays, Error};
//!
//! match arrays::array_median(&[]) {
//!     Ok(median) => println!("median {median}"),
//!     Err(Error::EmptyInput(what)) => eprintln!("nothing to average: {what}"),
//!     Err(e) => eprintln!("{} error: {e}", e.category()),
//! }
//! ```
//!
//! Numeric helpers that mirror floating point semantics (`gcd`, `factorial`,
//! `average`) return `NaN` instead, and date parsing returns `None`.

/// Array statistics, set algebra, shuffling and chunking
pub mod arrays;
/// Settings for date formatting and parsing
pub mod config;
/// Calendar arithmetic, parsing and formatting
pub mod dates;
/// Error types and result aliases
pub mod error;
/// Debounced function wrappers
pub mod functions;
/// UUIDs, query strings and colors
pub mod general;
/// Number formatting, rounding and integer math
pub mod numbers;
/// Deep equality, cloning and merging of objects
pub mod objects;
/// Case conversion, escaping and padding
pub mod strings;
/// Regex format validators
pub mod validators;
/// Dynamic JSON-like values
pub mod value;

// Re-export commonly used types
pub use config::DateConfig;
pub use error::{Error, Result};
pub use functions::{Debounced, debounce};
pub use general::Rgba;
pub use value::{Map, Value};
