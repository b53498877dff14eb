// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse, format, normalize and apply ISO-8601 durations (`PnYnMnWnDTnHnMnS`).
//!
//! ```
//! use isoperiod::parse;
//!
//! let d = parse("PT12.34H56.78M9.01S").unwrap();
//! assert_eq!(d.to_string(), "PT12H77M19.81S");
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::module_name_repetitions)]

#[cfg(feature = "jiff")]
mod calendar;
mod decimal;
mod duration;
#[cfg(feature = "serde")]
mod encoding;
mod error;
mod formatter;
mod grammar;
mod normalize;
mod parser;

#[cfg(feature = "jiff")]
pub use crate::calendar::PointInTime;
pub use crate::duration::{Duration, MAX_FIELD, NANOS_PER_SECOND};
pub use crate::error::{Error, Unit};
pub use crate::formatter::write_duration;
pub use crate::parser::parse;
