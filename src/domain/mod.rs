//! Domain models for pagedate
//!
//! Contains the core value types without any I/O concerns.

mod resolved;
mod source;
mod timestamp;
mod value;

pub use resolved::ResolvedDates;
pub use source::{DateSource, SourceError, SourcePriority};
pub use timestamp::ParsedTimestamp;
pub use value::RawValue;
