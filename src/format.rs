//! Human readable rendering of the values reported by the node.
use crate::{
    estimates,
    types::{network::BakingCommitteeStatus, Amount, BakerPendingChange, YearMonth},
};
use chrono::{DateTime, Datelike, Months, Utc};
use rust_decimal::{prelude::FromPrimitive, Decimal, RoundingStrategy};

/// Display a string of decimal digits as a decimal number with the given
/// number of decimals. The input is handled as a string, so arbitrarily large
/// integers are displayed exactly.
pub fn format_int_as_decimal(digits: &str, decimals: usize) -> String {
    if decimals == 0 {
        return digits.to_string();
    }
    let padded = format!("{digits:0>width$}", width = decimals + 1);
    let (int, fraction) = padded.split_at(padded.len() - decimals);
    format!("{int}.{fraction}")
}

/// Display an amount of microCCD in CCD with unit.
pub fn format_amount(amount: &Amount) -> String { format!("{amount} Ǥ") }

/// Display a number of bytes per second as kB/s.
pub fn format_bytes(bytes_per_second: u64) -> String {
    format!(
        "{} kB/s",
        format_int_as_decimal(&bytes_per_second.to_string(), 3)
    )
}

/// Turn a fraction into a percentage string, with at most 6 decimals.
pub fn format_percentage(fraction: f64) -> String {
    let percentage = fraction * 100.0;
    match Decimal::from_f64(percentage) {
        Some(d) => format!(
            "{}%",
            d.round_dp_with_strategy(6, RoundingStrategy::MidpointAwayFromZero)
                .normalize()
        ),
        None => format!("{percentage}%"),
    }
}

/// Display a boolean as Yes or No.
pub fn format_bool(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}

/// Display a latency in milliseconds.
pub fn format_latency(millis: u64) -> String { format!("{millis}ms") }

/// Format a duration as a list of years, months, days, hours, minutes and
/// seconds, leaving out the units that are zero. Years and months are
/// calendar years and months counted from the unix epoch.
pub fn format_duration(duration: chrono::Duration, hide_seconds: bool) -> String {
    let start = DateTime::<Utc>::from(std::time::UNIX_EPOCH);
    let end = start
        .checked_add_signed(duration.abs())
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    let mut cursor = start;
    let years = count_whole_months(&mut cursor, end, 12);
    let months = count_whole_months(&mut cursor, end, 1);
    let rest = (end - cursor).num_seconds();

    let mut parts = Vec::new();
    for (value, unit) in [
        (years, "year"),
        (months, "month"),
        (rest / 86400, "day"),
        ((rest % 86400) / 3600, "hour"),
        ((rest % 3600) / 60, "minute"),
    ] {
        push_unit(&mut parts, value, unit);
    }
    if !hide_seconds {
        push_unit(&mut parts, rest % 60, "second");
    }
    parts.join(", ")
}

fn count_whole_months(cursor: &mut DateTime<Utc>, end: DateTime<Utc>, step: u32) -> i64 {
    let mut count = 0;
    while let Some(next) = cursor.checked_add_months(Months::new(step)) {
        if next > end {
            break;
        }
        *cursor = next;
        count += 1;
    }
    count
}

fn push_unit(parts: &mut Vec<String>, value: i64, unit: &str) {
    match value {
        0 => {}
        1 => parts.push(format!("1 {unit}")),
        n => parts.push(format!("{n} {unit}s")),
    }
}

/// Format a date with time of day.
pub fn format_date(date: DateTime<Utc>) -> String { date.format("%b %-d, %Y, %H:%M UTC").to_string() }

/// Format a year and month, e.g., `Sep 2023`.
pub fn format_year_month(ym: YearMonth) -> String {
    let date = ym.first_day();
    format!("{} {}", date.format("%b"), date.year())
}

/// Describe a pending change of a baker, including the date at which it
/// takes effect.
pub fn format_pending_change(
    change: &BakerPendingChange,
    epoch_duration: chrono::Duration,
    genesis_time: DateTime<Utc>,
) -> String {
    let at = i64::try_from(change.epoch().epoch)
        .ok()
        .and_then(|epoch| estimates::epoch_start(epoch, epoch_duration, genesis_time))
        .map_or_else(|| "an unknown time".to_string(), format_date);
    match change {
        BakerPendingChange::RemoveBaker { .. } => format!("Removing baker at {at}"),
        BakerPendingChange::ReduceStake { new_stake, .. } => {
            format!("Reducing stake to {} at {at}", format_amount(new_stake))
        }
    }
}

/// Describe whether the node is baking.
pub fn format_baking_status(
    status: BakingCommitteeStatus,
    epoch_duration: chrono::Duration,
) -> String {
    match status {
        BakingCommitteeStatus::ActiveInCommittee => "Yes".into(),
        BakingCommitteeStatus::AddedButNotActiveInCommittee => format!(
            "Will become a baker in less than {}",
            epoch_duration
                .checked_mul(2)
                .map_or_else(|| "unknown".to_string(), |d| format_duration(d, true))
        ),
        BakingCommitteeStatus::AddedButWrongKeys => "Unable to bake: mismatching keys".into(),
        BakingCommitteeStatus::NotInCommittee => "No".into(),
    }
}
