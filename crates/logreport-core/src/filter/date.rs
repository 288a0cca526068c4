use chrono::{NaiveDate, NaiveTime};

/// Parse a calendar date written exactly as `YYYY-MM-DD`.
///
/// Shorter forms such as `2024-1-5` are rejected even though chrono would
/// accept them.
pub fn parse_target_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Extract the calendar date from an ISO-8601 date or date-time.
///
/// Accepts `YYYY-MM-DD` or `YYYYMMDD`, optionally followed by `T`, `t` or a
/// space and a time `HH[:MM[:SS[.f]]]` (or `HH[MM[SS[.f]]]`), optionally
/// followed by `Z` or an offset `±HH[:MM[:SS]]`. The date is taken as
/// written. An offset is validated but never used to shift the value into
/// another timezone, so `2024-01-01T23:30:00-05:00` is on 2024-01-01.
pub fn parse_timestamp_date(value: &str) -> Option<NaiveDate> {
    let (date, rest) = split_date(value)?;

    if rest.is_empty() {
        return Some(date);
    }

    let time = rest
        .strip_prefix(['T', 't', ' '])
        .filter(|time| !time.is_empty())?;

    let (clock, offset) = match time.find(['Z', 'z', '+', '-']) {
        Some(i) => time.split_at(i),
        None => (time, ""),
    };

    parse_clock(clock)?;
    if !is_valid_offset(offset) {
        return None;
    }

    Some(date)
}

/// Split off the leading date, extended (`YYYY-MM-DD`) or basic (`YYYYMMDD`)
fn split_date(value: &str) -> Option<(NaiveDate, &str)> {
    if let Some(date) = value.get(..10).and_then(parse_target_date) {
        return Some((date, &value[10..]));
    }

    let basic = value.get(..8)?;
    if !basic.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(
        basic[..4].parse().ok()?,
        basic[4..6].parse().ok()?,
        basic[6..].parse().ok()?,
    )?;
    Some((date, &value[8..]))
}

/// Parse `HH[:MM[:SS[.f]]]` or the colon-free `HH[MM[SS[.f]]]`
fn parse_clock(clock: &str) -> Option<NaiveTime> {
    let (whole, fraction) = match clock.find(['.', ',']) {
        Some(i) => (&clock[..i], Some(&clock[i + 1..])),
        None => (clock, None),
    };

    if whole.is_empty() || !whole.is_ascii() {
        return None;
    }

    let parts: Vec<&str> = if whole.contains(':') {
        whole.split(':').collect()
    } else if whole.len() % 2 == 0 {
        (0..whole.len()).step_by(2).map(|i| &whole[i..i + 2]).collect()
    } else {
        return None;
    };

    let two_digits = |part: &&str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if parts.len() > 3 || !parts.iter().all(two_digits) {
        return None;
    }

    let field = |i: usize| parts.get(i).map_or(Some(0), |part| part.parse::<u32>().ok());
    let (hour, minute, second) = (field(0)?, field(1)?, field(2)?);

    let nanos = match fraction {
        None => 0,
        Some(digits) => {
            let valid = parts.len() == 3
                && (1..=9).contains(&digits.len())
                && digits.bytes().all(|b| b.is_ascii_digit());
            if !valid {
                return None;
            }
            format!("{:0<9}", digits).parse::<u32>().ok()?
        }
    };

    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
}

/// Empty, `Z`, or a signed offset shorter than a day
fn is_valid_offset(offset: &str) -> bool {
    match offset {
        "" | "Z" | "z" => true,
        _ => offset
            .strip_prefix(['+', '-'])
            .and_then(parse_clock)
            .is_some(),
    }
}
