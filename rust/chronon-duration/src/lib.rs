//! A signed, nanosecond-precision elapsed-time value.
//!
//! [`Duration`] stores a whole-second count and a non-negative nanosecond
//! residue, and every constructor and operation normalizes through the same
//! floor-based rule. Arithmetic is exact: anything that would leave the
//! representable range fails with an overflow error instead of wrapping.
//!
//! Durations parse from and format to ISO-8601 style text such as
//! `PT8H6M12.345S` or `P2DT-3H`:
//!
//! ```
//! use chronon_duration::Duration;
//!
//! let d: Duration = "P1DT2H3M4.5S".parse().unwrap();
//! assert_eq!(d, Duration::of_seconds_nanos(93_784, 500_000_000).unwrap());
//! assert_eq!(d.to_string(), "PT26H3M4.5S");
//! ```

pub mod arithmetic;
pub mod conversions;
pub mod duration;
pub mod duration_format;
pub mod duration_parser;


pub use chronon_common::Result;
pub use chronon_common::error::{Error, ErrorKind};
pub use duration::Duration;
pub use duration_format::MAX_FORMATTED_LEN;
pub use duration_parser::DurationParser;

pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub const NANOS_PER_MILLI: i64 = 1_000_000;
pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const MINUTES_PER_HOUR: i64 = 60;
pub const HOURS_PER_DAY: i64 = 24;
pub const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
pub const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * HOURS_PER_DAY;
