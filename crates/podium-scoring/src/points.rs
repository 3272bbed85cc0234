//! Championship points.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use podium_config::ScoringConfig;
use serde::{Serialize, Serializer};

/// Points scored by one entry or one team.
///
/// Tie splits make points fractional (`(8 + 6) / 2 = 7`,
/// `(2 + 1) / 2 = 1.5`), so the value is a float.
///
/// # Examples
///
/// ```
/// use podium_scoring::Points;
///
/// let total: Points = [Points::of(10.0), Points::of(1.5)].into_iter().sum();
/// assert_eq!(total, Points::of(11.5));
/// assert_eq!(total.to_string(), "11.5");
/// assert_eq!(Points::of(9.0).to_string(), "9");
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Points {
    value: f64,
}

impl Points {
    /// No points.
    pub const ZERO: Points = Points { value: 0.0 };

    #[inline]
    pub const fn of(value: f64) -> Self {
        Points { value }
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.value > 0.0
    }
}

impl Add for Points {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Points::of(self.value + other.value)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, other: Self) {
        self.value += other.value;
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Points::ZERO, Add::add)
    }
}

impl fmt::Debug for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Points({})", self.value)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.fract() == 0.0 {
            return f.pad(&format!("{:.0}", self.value));
        }
        let rounded = format!("{:.2}", self.value);
        f.pad(rounded.trim_end_matches('0').trim_end_matches('.'))
    }
}

impl Serialize for Points {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

/// Points awarded for places 1..N.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringTable {
    places: Vec<u32>,
}

impl ScoringTable {
    pub fn new(places: Vec<u32>) -> Self {
        Self { places }
    }

    /// Number of scoring places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Sum of all place points: the most one event can award.
    pub fn total(&self) -> Points {
        Points::of(self.places.iter().map(|&p| p as f64).sum())
    }

    /// Points for a 1-based rank; zero beyond the table.
    ///
    /// ```
    /// use podium_scoring::{Points, ScoringTable};
    ///
    /// let table = ScoringTable::default();
    /// assert_eq!(table.for_rank(1), Points::of(10.0));
    /// assert_eq!(table.for_rank(7), Points::ZERO);
    /// ```
    pub fn for_rank(&self, rank: usize) -> Points {
        rank.checked_sub(1)
            .and_then(|i| self.places.get(i))
            .map_or(Points::ZERO, |&p| Points::of(p as f64))
    }

    /// Share of each of `count` athletes tied at `rank`.
    ///
    /// The tied athletes pool the points of the places they occupy and
    /// split them evenly.
    ///
    /// ```
    /// use podium_scoring::{Points, ScoringTable};
    ///
    /// let table = ScoringTable::default();
    /// assert_eq!(table.tie_share(1, 2), Points::of(9.0));
    /// assert_eq!(table.tie_share(5, 3), Points::of(1.0));
    /// ```
    pub fn tie_share(&self, rank: usize, count: usize) -> Points {
        if count == 0 {
            return Points::ZERO;
        }
        let pooled: f64 = (rank..rank + count)
            .map(|r| self.for_rank(r).value())
            .sum();
        Points::of(pooled / count as f64)
    }
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self::new(vec![10, 8, 6, 4, 2, 1])
    }
}

impl From<&ScoringConfig> for ScoringTable {
    fn from(config: &ScoringConfig) -> Self {
        Self::new(config.points.clone())
    }
}
