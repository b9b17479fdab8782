//! Human-readable formatting of unix timestamps.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Default format, close to an en-US locale string: `1/2/2024, 3:04:05 PM`.
const DEFAULT_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Display style carried by timestamp markup (`<t:SECONDS:STYLE>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimestampStyle {
    /// `t`: `3:04 PM`
    ShortTime,
    /// `T`: `3:04:05 PM`
    LongTime,
    /// `d`: `01/02/2024`
    ShortDate,
    /// `D`: `January 2, 2024`
    LongDate,
    /// `f`: `January 2, 2024 3:04 PM`
    ShortDateTime,
    /// `F`: `Tuesday, January 2, 2024 3:04 PM`
    LongDateTime,
    /// `R`: relative to now. Rendered with the default format, since a
    /// wall-clock reading would make output time-dependent.
    Relative,
}

impl TimestampStyle {
    /// Parse a style letter. Returns `None` for unknown letters.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "t" => Some(Self::ShortTime),
            "T" => Some(Self::LongTime),
            "d" => Some(Self::ShortDate),
            "D" => Some(Self::LongDate),
            "f" => Some(Self::ShortDateTime),
            "F" => Some(Self::LongDateTime),
            "R" => Some(Self::Relative),
            _ => None,
        }
    }

    fn format(self) -> &'static str {
        match self {
            Self::ShortTime => "%-I:%M %p",
            Self::LongTime => "%-I:%M:%S %p",
            Self::ShortDate => "%m/%d/%Y",
            Self::LongDate => "%B %-d, %Y",
            Self::ShortDateTime => "%B %-d, %Y %-I:%M %p",
            Self::LongDateTime => "%A, %B %-d, %Y %-I:%M %p",
            Self::Relative => DEFAULT_FORMAT,
        }
    }
}

/// Formats unix timestamps in a fixed UTC offset.
///
/// A fixed offset (rather than the host's local zone) keeps rendering a
/// pure function of its inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimestampFormatter {
    offset: FixedOffset,
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }
}

impl TimestampFormatter {
    /// Create a formatter for the given offset from UTC.
    #[must_use]
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Create a formatter from an offset in minutes east of UTC.
    ///
    /// Returns `None` if the offset is out of range (beyond ±24 hours).
    #[must_use]
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(Self::new)
    }

    /// Format `seconds` since the unix epoch.
    ///
    /// Returns `None` if the timestamp is outside the representable range.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatmark_renderer::{TimestampFormatter, TimestampStyle};
    ///
    /// let formatter = TimestampFormatter::default();
    /// assert_eq!(formatter.format(0, None).as_deref(), Some("1/1/1970, 12:00:00 AM"));
    /// assert_eq!(
    ///     formatter.format(0, Some(TimestampStyle::LongDate)).as_deref(),
    ///     Some("January 1, 1970")
    /// );
    /// ```
    #[must_use]
    pub fn format(&self, seconds: i64, style: Option<TimestampStyle>) -> Option<String> {
        let utc = DateTime::from_timestamp(seconds, 0)?;
        let local = utc.with_timezone(&self.offset);
        let pattern = style.map_or(DEFAULT_FORMAT, TimestampStyle::format);
        Some(local.format(pattern).to_string())
    }
}
