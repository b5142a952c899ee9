//! Quantities derived from the consensus parameters: epoch boundaries and the
//! expected number of blocks produced over a period.
use crate::{
    constants::{MILLIS_PER_DAY, MILLIS_PER_MONTH, MILLIS_PER_WEEK, MILLIS_PER_YEAR},
    types::SlotDuration,
};
use chrono::{DateTime, Utc};
use std::fmt;

/// Index of the epoch that contains `time`. Epochs have fixed length and are
/// counted from genesis, so times before genesis have negative indices.
/// Returns [`None`] if the epoch duration is not positive.
pub fn epoch_index_at(
    time: DateTime<Utc>,
    epoch_duration: chrono::Duration,
    genesis_time: DateTime<Utc>,
) -> Option<i64> {
    let epoch_millis = epoch_duration.num_milliseconds();
    if epoch_millis <= 0 {
        return None;
    }
    let offset = time - genesis_time;
    // `num_milliseconds` truncates toward zero.
    let mut offset_millis = offset.num_milliseconds();
    if offset < chrono::Duration::milliseconds(offset_millis) {
        offset_millis -= 1;
    }
    Some(offset_millis.div_euclid(epoch_millis))
}

/// Time at which the epoch with the given index starts. Returns [`None`] if
/// the time is not representable.
pub fn epoch_start(
    index: i64,
    epoch_duration: chrono::Duration,
    genesis_time: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let offset = epoch_duration.num_milliseconds().checked_mul(index)?;
    genesis_time.checked_add_signed(chrono::Duration::try_milliseconds(offset)?)
}

/// A period over which the expected number of blocks is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    /// All periods, from the shortest to the longest.
    pub const ALL: [Period; 4] = [Period::Day, Period::Week, Period::Month, Period::Year];

    /// Length of the period in milliseconds. Months have 30 days and years
    /// have 12 months.
    pub fn millis(self) -> u64 {
        match self {
            Period::Day => MILLIS_PER_DAY,
            Period::Week => MILLIS_PER_WEEK,
            Period::Month => MILLIS_PER_MONTH,
            Period::Year => MILLIS_PER_YEAR,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Day => f.write_str("day"),
            Period::Week => f.write_str("week"),
            Period::Month => f.write_str("month"),
            Period::Year => f.write_str("year"),
        }
    }
}

/// The expected rate of block production, either of the whole network or of a
/// single baker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockRate {
    blocks_per_milli: f64,
}

impl BlockRate {
    /// The network wide rate: each slot has a block with probability equal to
    /// the election difficulty. Returns [`None`] for a zero slot duration.
    pub fn new(election_difficulty: f64, slot_duration: SlotDuration) -> Option<Self> {
        if slot_duration.millis == 0 {
            return None;
        }
        Some(Self {
            blocks_per_milli: election_difficulty / slot_duration.millis as f64,
        })
    }

    /// The rate of a baker with the given lottery power.
    pub fn for_baker(self, lottery_power: f64) -> Self {
        Self {
            blocks_per_milli: lottery_power * self.blocks_per_milli,
        }
    }

    /// Expected number of blocks over the period.
    pub fn expected_blocks(self, period: Period) -> f64 {
        self.blocks_per_milli * period.millis() as f64
    }

    /// The shortest period over which the rounded expected number of blocks
    /// is at least one, together with that rounded number. If there is none,
    /// the longest period is used.
    pub fn display_period(self) -> (Period, f64) {
        let rounded = |period| (period, self.expected_blocks(period).round());
        Period::ALL
            .into_iter()
            .map(rounded)
            .find(|(_, blocks)| *blocks >= 1.0)
            .unwrap_or_else(|| rounded(Period::Year))
    }
}

impl fmt::Display for BlockRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (period, blocks) = self.display_period();
        write!(f, "{blocks} block/{period}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn genesis() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_622_000_000, 0).expect("Valid genesis time")
    }

    #[test]
    fn test_epoch_round_trip() {
        for millis in [1, 999, 3_600_000, 86_400_000] {
            let duration = chrono::Duration::milliseconds(millis);
            for i in [0, 1, 2, 17, 1000, 123_456] {
                let start = epoch_start(i, duration, genesis()).expect("Representable time");
                assert_eq!(epoch_index_at(start, duration, genesis()), Some(i));
            }
        }
    }

    #[test]
    fn test_epoch_index_floors() {
        let duration = chrono::Duration::milliseconds(1000);
        let just_before = genesis() - chrono::Duration::milliseconds(1);
        assert_eq!(epoch_index_at(just_before, duration, genesis()), Some(-1));
        let mid = genesis() + chrono::Duration::milliseconds(1500);
        assert_eq!(epoch_index_at(mid, duration, genesis()), Some(1));
        let before = genesis() - chrono::Duration::milliseconds(1500);
        assert_eq!(epoch_index_at(before, duration, genesis()), Some(-2));
        let half_milli_before = genesis() - chrono::Duration::microseconds(500);
        assert_eq!(
            epoch_index_at(half_milli_before, duration, genesis()),
            Some(-1)
        );
        let nanos_before_second = genesis() - chrono::Duration::nanoseconds(1_000_000_001);
        assert_eq!(
            epoch_index_at(nanos_before_second, duration, genesis()),
            Some(-2)
        );
        let half_milli_after = genesis() + chrono::Duration::microseconds(999_500);
        assert_eq!(
            epoch_index_at(half_milli_after, duration, genesis()),
            Some(0)
        );
        assert_eq!(
            epoch_index_at(mid, chrono::Duration::zero(), genesis()),
            None
        );
    }

    #[test]
    fn test_expected_blocks() {
        let rate = BlockRate::new(0.1, SlotDuration { millis: 250 }).expect("Non-zero slot");
        assert_eq!(
            rate.for_baker(0.01).expected_blocks(Period::Day),
            0.01 * (0.1 / 250.0) * 86_400_000.0
        );
        assert!((rate.expected_blocks(Period::Day) - 34560.0).abs() < 1e-6);
        assert!(BlockRate::new(0.1, SlotDuration { millis: 0 }).is_none());
    }

    #[test]
    fn test_display_period() {
        let rate = BlockRate::new(0.1, SlotDuration { millis: 250 }).expect("Non-zero slot");
        // 34.56 blocks a day.
        assert_eq!(rate.for_baker(0.001).display_period(), (Period::Day, 35.0));
        // 0.3456 a day, 2.4192 a week.
        assert_eq!(rate.for_baker(0.00001).display_period(), (Period::Week, 2.0));
        // Never reaches one block in a year.
        assert_eq!(rate.for_baker(1e-12).display_period(), (Period::Year, 0.0));
        assert_eq!(rate.for_baker(0.001).to_string(), "35 block/day");
    }
}
