//! Validated calendar timestamps
//!
//! A `ParsedTimestamp` is a point in time plus a record of whether the
//! source actually specified a zone/offset. Date-only strings like
//! `2024-09-09` stay "floating" (offset zero, not explicit) and render
//! without an offset suffix, so an author's zone-less date is not silently
//! rebranded as UTC.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated point in time produced by the date parser or a date source.
#[derive(Debug, Clone, Copy)]
pub struct ParsedTimestamp {
    datetime: DateTime<FixedOffset>,
    offset_explicit: bool,
}

impl ParsedTimestamp {
    /// A timestamp whose source specified an offset or zone.
    pub fn zoned(datetime: DateTime<FixedOffset>) -> Self {
        Self {
            datetime,
            offset_explicit: true,
        }
    }

    /// A floating timestamp: the source gave no zone information.
    pub fn floating(naive: NaiveDateTime) -> Self {
        Self {
            datetime: Utc.fix().from_utc_datetime(&naive),
            offset_explicit: false,
        }
    }

    /// A timestamp from a millisecond epoch value (storage-layer stats).
    /// Returns `None` for values outside chrono's representable range.
    pub fn from_epoch_ms(millis: i64) -> Option<Self> {
        let utc = Utc.timestamp_millis_opt(millis).single()?;
        Some(Self::zoned(utc.fixed_offset()))
    }

    /// The current instant, in local time.
    pub fn now() -> Self {
        Self::zoned(Local::now().fixed_offset())
    }

    /// The underlying date-time with its offset.
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.datetime
    }

    /// Whether the source specified the offset (vs a floating/default one).
    pub fn offset_explicit(&self) -> bool {
        self.offset_explicit
    }

    /// Millisecond epoch value of the instant.
    pub fn epoch_ms(&self) -> i64 {
        self.datetime.timestamp_millis()
    }

    /// Rebases an explicit offset onto UTC. Floating timestamps are
    /// returned unchanged since they have no offset to normalize.
    pub fn to_utc(self) -> Self {
        if !self.offset_explicit {
            return self;
        }
        Self::zoned(self.datetime.with_timezone(&Utc).fixed_offset())
    }
}

// Equality is by instant, offset, and explicitness: 10:00+02:00 and
// 08:00Z are the same instant but not the same timestamp.
impl PartialEq for ParsedTimestamp {
    fn eq(&self, other: &Self) -> bool {
        self.datetime == other.datetime
            && self.datetime.offset() == other.datetime.offset()
            && self.offset_explicit == other.offset_explicit
    }
}

impl Eq for ParsedTimestamp {}

impl fmt::Display for ParsedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.offset_explicit {
            write!(f, "{}", self.datetime.to_rfc3339())
        } else {
            write!(f, "{}", self.datetime.format("%Y-%m-%dT%H:%M:%S"))
        }
    }
}

impl Serialize for ParsedTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
