//! Sleep-efficiency scoring
//!
//! Pure time arithmetic over the three reserved answers: bedtime (ordinal
//! 1), wake time (ordinal 2) and hours slept (ordinal 3). The score is the
//! ratio of reported sleep to time in bed, as a percentage rounded to the
//! nearest integer. Nothing is clamped: reported sleep longer than the
//! in-bed window yields a score above 100.

use thiserror::Error;

/// Minutes in a day, for the midnight wraparound.
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Errors from the scoring computation
#[derive(Debug, Error)]
pub enum ScoreError {
    /// A clock string was not parseable as 24-hour HH:MM
    #[error("malformed time of day: {0:?}")]
    MalformedTime(String),

    /// The hours-slept answer was not parseable as a decimal number
    #[error("malformed hours-slept value: {0:?}")]
    MalformedNumber(String),

    /// Bedtime equals wake time, so time in bed is zero and the
    /// efficiency ratio is undefined
    #[error("bedtime and wake time are identical; time in bed is zero")]
    EmptyWindow,
}

/// Parse a colon-separated 24-hour clock string into minutes since midnight.
pub fn parse_clock(value: &str) -> Result<u32, ScoreError> {
    let malformed = || ScoreError::MalformedTime(value.to_string());

    let (hours, minutes) = value.trim().split_once(':').ok_or_else(malformed)?;
    let hours: u32 = hours.parse().map_err(|_| malformed())?;
    let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
    if hours >= 24 || minutes >= 60 {
        return Err(malformed());
    }
    Ok(hours * 60 + minutes)
}

/// Elapsed minutes from bedtime to wake time, wrapping across midnight.
pub fn time_in_bed_minutes(bed_minutes: u32, wake_minutes: u32) -> u32 {
    if wake_minutes >= bed_minutes {
        wake_minutes - bed_minutes
    } else {
        (MINUTES_PER_DAY - bed_minutes) + wake_minutes
    }
}

/// Compute the sleep-efficiency score from the three raw answer strings.
///
/// Rounding is half-away-from-zero. A zero-minute in-bed window (bedtime
/// equal to wake time) is rejected rather than dividing by zero.
pub fn score(bedtime: &str, wake_time: &str, hours_slept: &str) -> Result<i64, ScoreError> {
    let bed_minutes = parse_clock(bedtime)?;
    let wake_minutes = parse_clock(wake_time)?;

    let time_in_bed = time_in_bed_minutes(bed_minutes, wake_minutes);
    if time_in_bed == 0 {
        return Err(ScoreError::EmptyWindow);
    }

    let hours: f64 = hours_slept
        .trim()
        .parse()
        .map_err(|_| ScoreError::MalformedNumber(hours_slept.to_string()))?;
    let slept_minutes = hours * 60.0;

    let efficiency = slept_minutes / f64::from(time_in_bed) * 100.0;
    Ok(efficiency.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_clock_accepts_valid_times() {
        assert_eq!(parse_clock("00:00").unwrap(), 0);
        assert_eq!(parse_clock("23:59").unwrap(), 1439);
        assert_eq!(parse_clock("07:05").unwrap(), 425);
        assert_eq!(parse_clock(" 22:30 ").unwrap(), 1350);
    }

    #[test]
    fn parse_clock_rejects_garbage() {
        assert!(matches!(
            parse_clock("bedtime"),
            Err(ScoreError::MalformedTime(_))
        ));
        assert!(matches!(parse_clock("24:00"), Err(ScoreError::MalformedTime(_))));
        assert!(matches!(parse_clock("12:60"), Err(ScoreError::MalformedTime(_))));
        assert!(matches!(parse_clock("1230"), Err(ScoreError::MalformedTime(_))));
    }

    #[test]
    fn same_day_window_is_simple_difference() {
        let bed = parse_clock("01:00").unwrap();
        let wake = parse_clock("09:30").unwrap();
        assert_eq!(time_in_bed_minutes(bed, wake), 510);
    }

    #[test]
    fn window_wraps_across_midnight() {
        let bed = parse_clock("23:00").unwrap();
        let wake = parse_clock("07:00").unwrap();
        assert_eq!(time_in_bed_minutes(bed, wake), 480);
    }

    #[test]
    fn typical_night_scores_88() {
        // 480 minutes in bed, 420 slept -> round(87.5) = 88 (half away from zero)
        assert_eq!(score("23:00", "07:00", "7").unwrap(), 88);
    }

    #[test]
    fn full_sleep_scores_100() {
        assert_eq!(score("22:30", "06:30", "8").unwrap(), 100);
    }

    #[test]
    fn oversleep_is_not_clamped() {
        // 420 minutes in bed, 540 reported slept -> 129
        assert_eq!(score("23:00", "06:00", "9").unwrap(), 129);
    }

    #[test]
    fn negative_hours_give_negative_score() {
        assert_eq!(score("23:00", "07:00", "-1").unwrap(), -13);
    }

    #[test]
    fn fractional_hours_are_accepted() {
        // 450 slept / 480 in bed = 93.75 -> 94
        assert_eq!(score("23:00", "07:00", "7.5").unwrap(), 94);
    }

    #[test]
    fn identical_bed_and_wake_time_is_rejected() {
        assert!(matches!(
            score("23:00", "23:00", "8"),
            Err(ScoreError::EmptyWindow)
        ));
    }

    #[test]
    fn malformed_hours_is_an_error() {
        assert!(matches!(
            score("23:00", "07:00", "eight"),
            Err(ScoreError::MalformedNumber(_))
        ));
    }
}
