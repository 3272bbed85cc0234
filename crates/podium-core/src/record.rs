//! Performance records as supplied by the data source.
//!
//! Records are read-only input: every engine component borrows them and
//! derives what it needs (parsed marks, season keys, calendar days) on the
//! fly.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::event::{is_relay_event, Gender};
use crate::mark::{parse_mark, ParsedMark};
use crate::season::SeasonKey;

macro_rules! loose_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Returns the identifier text.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                loose::required(deserializer).map(Self)
            }
        }
    };
}

loose_id!(
    /// Unique identifier of one performance record.
    RecordId
);

loose_id!(
    /// Identifier of one athlete (or relay entry) across records.
    AthleteId
);

/// One athlete, one event, one date, one result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub id: RecordId,
    pub athlete_id: AthleteId,
    /// Athlete name; comma-separated member names for relays.
    #[serde(default, deserialize_with = "loose::nullable")]
    pub athlete_name: String,
    #[serde(default, deserialize_with = "loose::nullable")]
    pub team: String,
    #[serde(default, deserialize_with = "loose::nullable")]
    pub event: String,
    #[serde(default, deserialize_with = "loose::nullable")]
    pub mark: String,
    /// ISO date or date-time.
    #[serde(default, deserialize_with = "loose::nullable")]
    pub date: String,
    /// Bare season type or `"<year> <type>"`.
    #[serde(default, deserialize_with = "loose::nullable")]
    pub season: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "loose::nullable")]
    pub meet_name: String,
    #[serde(default, deserialize_with = "loose::nullable")]
    pub splits: Vec<f64>,
    #[serde(default, deserialize_with = "loose::optional")]
    pub place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meet_url: Option<String>,
}

impl PerformanceRecord {
    /// Parses this record's mark.
    pub fn parsed_mark(&self) -> ParsedMark {
        parse_mark(&self.mark)
    }

    /// Derives the season instance this record belongs to.
    pub fn season_key(&self) -> SeasonKey {
        SeasonKey::derive(&self.season, self.year.as_deref())
    }

    /// Returns true for relay entries.
    pub fn is_relay(&self) -> bool {
        is_relay_event(&self.event)
    }

    /// Scoring division inferred from the event name.
    pub fn gender(&self) -> Gender {
        Gender::from_event(&self.event)
    }

    /// Calendar day of the record, if the date is readable.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }

    /// Full timestamp of the record, if the date is readable.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date)
    }

    /// Sort key for listings ordered by date and time of day.
    ///
    /// Unreadable dates sort as the Unix epoch, i.e. before everything else.
    pub fn chronological_key(&self) -> NaiveDateTime {
        self.timestamp().unwrap_or(NaiveDateTime::UNIX_EPOCH)
    }

    /// Calendar-day sort key for badge and profile passes; unreadable dates
    /// map to the Unix epoch.
    pub fn day_key(&self) -> NaiveDate {
        self.day().unwrap_or(NaiveDateTime::UNIX_EPOCH.date())
    }
}

/// Reads the calendar day from an ISO date or date-time string.
///
/// ```
/// use chrono::NaiveDate;
/// use podium_core::record::parse_day;
///
/// let day = NaiveDate::from_ymd_opt(2024, 2, 10);
/// assert_eq!(parse_day("2024-02-10"), day);
/// assert_eq!(parse_day("2024-02-10T18:30:00"), day);
/// assert_eq!(parse_day("Feb 10"), None);
/// ```
pub fn parse_day(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    let prefix = date.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Reads a timestamp from an ISO date or date-time string.
///
/// Bare dates read as midnight; offsets are normalized to UTC.
pub fn parse_timestamp(date: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    let date = date.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.naive_utc());
    }
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(date, format).ok())
        .or_else(|| {
            if date.len() == 10 {
                parse_day(date).map(|day| day.and_time(NaiveTime::MIN))
            } else {
                None
            }
        })
}

/// Lenient field readers for exported JSON, where ids and years may be
/// strings or numbers and any field may be `null`.
mod loose {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    impl Scalar {
        fn into_string(self) -> String {
            match self {
                Scalar::Str(s) => s,
                Scalar::Int(i) => i.to_string(),
                Scalar::Float(f) => f.to_string(),
                Scalar::Bool(b) => b.to_string(),
            }
        }
    }

    pub(super) fn required<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Scalar::deserialize(deserializer).map(Scalar::into_string)
    }

    pub(super) fn optional<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let value = Option::<Scalar>::deserialize(deserializer)?;
        Ok(value
            .map(Scalar::into_string)
            .filter(|s| !s.trim().is_empty()))
    }

    pub(super) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
