//! Decoding of the ISO-8601 durations found in `contentDetails.duration`.

use crate::YouTubeError;
use chrono::TimeDelta;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;

/// Longest duration accepted for a single video, a little under 25 days.
///
/// Summing `u32::MAX` durations of this length still fits in a `TimeDelta`.
pub const MAX_VIDEO_DURATION_MILLIS: i64 = i64::MAX / u32::MAX as i64;

fn invalid(input: &str, reason: &str) -> YouTubeError {
    YouTubeError::ParseError(format!("invalid duration {:?}: {}", input, reason))
}

/// Parses durations such as `PT1H2M3S`, `P1DT30M`, `PT0.5S`, `P0D` or `P2W`.
///
/// Year and month designators are rejected since they have no fixed length.
/// Fractional seconds are kept to the millisecond. Anything longer than
/// [`MAX_VIDEO_DURATION_MILLIS`] is rejected.
pub fn parse_iso8601_duration(input: &str) -> Result<TimeDelta, YouTubeError> {
    let rest = input
        .strip_prefix('P')
        .ok_or_else(|| invalid(input, "missing leading 'P'"))?;

    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) => {
            if time.is_empty() {
                return Err(invalid(input, "empty time section"));
            }
            (date, Some(time))
        }
        None => (rest, None),
    };

    if date_part.is_empty() && time_part.is_none() {
        return Err(invalid(input, "no components"));
    }

    let mut total: i64 = 0;

    for (number, designator) in components(input, date_part)? {
        let unit = match designator {
            'W' => MILLIS_PER_WEEK,
            'D' => MILLIS_PER_DAY,
            'Y' | 'M' => return Err(invalid(input, "calendar years and months are not supported")),
            other => return Err(invalid(input, &format!("unknown date designator {:?}", other))),
        };
        total = accumulate(input, total, &number, unit, false)?;
    }

    if let Some(time_part) = time_part {
        for (number, designator) in components(input, time_part)? {
            let (unit, fractional) = match designator {
                'H' => (MILLIS_PER_HOUR, false),
                'M' => (MILLIS_PER_MINUTE, false),
                'S' => (MILLIS_PER_SECOND, true),
                other => return Err(invalid(input, &format!("unknown time designator {:?}", other))),
            };
            total = accumulate(input, total, &number, unit, fractional)?;
        }
    }

    if total > MAX_VIDEO_DURATION_MILLIS {
        return Err(invalid(input, "longer than any video"));
    }

    TimeDelta::try_milliseconds(total).ok_or_else(|| invalid(input, "out of range"))
}

/// Splits `1H30M` into `[("1", 'H'), ("30", 'M')]`.
fn components(input: &str, section: &str) -> Result<Vec<(String, char)>, YouTubeError> {
    let mut parsed = Vec::new();
    let mut current_num = String::new();

    for ch in section.chars() {
        if ch.is_ascii_digit() || ch == '.' || ch == ',' {
            current_num.push(if ch == ',' { '.' } else { ch });
        } else {
            if current_num.is_empty() {
                return Err(invalid(input, &format!("designator {:?} without a number", ch)));
            }
            parsed.push((std::mem::take(&mut current_num), ch));
        }
    }

    if !current_num.is_empty() {
        return Err(invalid(input, "trailing number without designator"));
    }

    Ok(parsed)
}

fn accumulate(input: &str, total: i64, number: &str, unit: i64, fractional: bool) -> Result<i64, YouTubeError> {
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) if fractional => (whole, fraction),
        Some(_) => return Err(invalid(input, "fractions are only supported on seconds")),
        None => (number, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid(input, "empty number"));
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid(input, "malformed number"))?
    };

    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(input, "malformed fraction"));
    }

    // milliseconds from the first three fractional digits
    let mut millis: i64 = 0;
    for (position, digit) in fraction.chars().take(3).enumerate() {
        let digit = digit.to_digit(10).ok_or_else(|| invalid(input, "malformed fraction"))? as i64;
        millis += digit * 10_i64.pow(2 - position as u32);
    }

    whole
        .checked_mul(unit)
        .and_then(|value| value.checked_add(millis))
        .and_then(|value| total.checked_add(value))
        .ok_or_else(|| invalid(input, "out of range"))
}

/// Renders a duration as `H:MM:SS`.
pub fn format_duration(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds();
    format!("{}:{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso8601_duration() {
        assert_eq!(parse_iso8601_duration("PT1H30M45S").unwrap(), TimeDelta::seconds(5445));
        assert_eq!(parse_iso8601_duration("PT10M").unwrap(), TimeDelta::seconds(600));
        assert_eq!(parse_iso8601_duration("PT45S").unwrap(), TimeDelta::seconds(45));
        assert_eq!(parse_iso8601_duration("PT4M13S").unwrap(), TimeDelta::seconds(253));
        assert_eq!(parse_iso8601_duration("P1DT2H").unwrap(), TimeDelta::hours(26));
        assert_eq!(parse_iso8601_duration("P2W").unwrap(), TimeDelta::days(14));
        assert_eq!(parse_iso8601_duration("P0D").unwrap(), TimeDelta::zero());
    }

    #[test]
    fn test_fractional_seconds() {
        assert_eq!(parse_iso8601_duration("PT1.5S").unwrap(), TimeDelta::milliseconds(1500));
        assert_eq!(parse_iso8601_duration("PT0,25S").unwrap(), TimeDelta::milliseconds(250));
        assert_eq!(parse_iso8601_duration("PT2.0009S").unwrap(), TimeDelta::seconds(2));
    }

    #[test]
    fn test_invalid_durations() {
        for input in ["", "P", "PT", "1H", "PTH", "PT5", "PT1X", "P1Y", "P1M", "PT1.5M", "PT.S", "PT1.2345.6S", "PT1.2.S"] {
            let result = parse_iso8601_duration(input);
            assert!(
                matches!(result, Err(YouTubeError::ParseError(_))),
                "expected parse error for {:?}, got {:?}",
                input,
                result
            );
        }
    }

    #[test]
    fn test_duration_cap() {
        assert_eq!(parse_iso8601_duration("P24D").unwrap(), TimeDelta::days(24));
        assert!(matches!(parse_iso8601_duration("P25D"), Err(YouTubeError::ParseError(_))));
        assert!(matches!(parse_iso8601_duration("PT5000000000000000S"), Err(YouTubeError::ParseError(_))));
        assert!(matches!(parse_iso8601_duration("PT99999999999999999999S"), Err(YouTubeError::ParseError(_))));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::zero()), "0:00:00");
        assert_eq!(format_duration(TimeDelta::seconds(253)), "0:04:13");
        assert_eq!(format_duration(TimeDelta::seconds(93784)), "26:03:04");
    }
}
