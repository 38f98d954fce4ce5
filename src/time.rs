/// A signed count of logical time units.
///
/// The scheduler has no notion of wall time; a tick is whatever the driver
/// says it is. Deltas stored in the queue go negative while an event is
/// overdue, so the representation is signed.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialOrd,
    Ord,
    PartialEq,
    Eq,
    Hash,
    derive_more::Add,
    derive_more::Sub,
    derive_more::AddAssign,
    derive_more::SubAssign,
    derive_more::Neg,
    derive_more::Display,
    derive_more::FromStr,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Ticks(i64);

impl Ticks {
    pub const ZERO: Ticks = Self::new(0);
    pub const ONE: Ticks = Self::new(1);
    pub const MAX: Ticks = Self::new(i64::MAX);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn into_i64(self) -> i64 {
        self.0
    }

    /// True for zero or negative offsets, i.e. "due now or overdue".
    pub const fn is_due(self) -> bool {
        self.0 <= 0
    }
}

impl From<i64> for Ticks {
    fn from(val: i64) -> Self {
        Self(val)
    }
}
