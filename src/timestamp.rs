use chrono::{SecondsFormat, Utc};

use crate::Error;

// get a character from the bytes as a decimal
macro_rules! get_digit {
    ($bytes:ident, $index:expr) => {
        match $bytes.get($index) {
            Some(c) if c.is_ascii_digit() => (c - b'0') as u32,
            _ => return Err(Error::InvalidTimestamp),
        }
    };
}

/// The current instant as an RFC 3339 string with a microsecond fraction,
/// e.g. `2023-04-07T12:52:00.654321Z`.
pub fn generate_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Check that `buf` holds an RFC 3339 timestamp with an explicit zone
/// designator. The packet stores the caller's string verbatim and emits it
/// untouched, so only the shape is checked, nothing is decoded.
pub(crate) fn validate_timestamp(buf: &[u8]) -> Result<(), Error> {
    let year = get_digit!(buf, 0) * 1000
        + get_digit!(buf, 1) * 100
        + get_digit!(buf, 2) * 10
        + get_digit!(buf, 3);
    if buf.get(4) != Some(&b'-') {
        return Err(Error::InvalidTimestamp);
    }

    let month = get_digit!(buf, 5) * 10 + get_digit!(buf, 6);
    if buf.get(7) != Some(&b'-') {
        return Err(Error::InvalidTimestamp);
    }

    let day = get_digit!(buf, 8) * 10 + get_digit!(buf, 9);

    // maximum days in the month, accounting for leap years in the
    // gregorian calendar
    let max_days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => return Err(Error::InvalidTimestamp),
    };

    if day < 1 || day > max_days {
        return Err(Error::InvalidTimestamp);
    }

    match buf.get(10) {
        Some(&b'T') | Some(&b't') => {}
        _ => return Err(Error::InvalidTimestamp),
    }

    let hour = get_digit!(buf, 11) * 10 + get_digit!(buf, 12);
    if hour > 23 || buf.get(13) != Some(&b':') {
        return Err(Error::InvalidTimestamp);
    }

    let minute = get_digit!(buf, 14) * 10 + get_digit!(buf, 15);
    if minute > 59 || buf.get(16) != Some(&b':') {
        return Err(Error::InvalidTimestamp);
    }

    // 60 is a valid leap second, e.g. `1990-12-31T23:59:60Z`
    let second = get_digit!(buf, 17) * 10 + get_digit!(buf, 18);
    if second > 60 {
        return Err(Error::InvalidTimestamp);
    }

    let mut pos = 19;
    if let Some(&b'.') | Some(&b',') = buf.get(pos) {
        pos += 1;
        let mut count = 0;
        while let Some(c) = buf.get(pos) {
            if !c.is_ascii_digit() {
                break;
            }
            count += 1;
            pos += 1;
        }
        if count == 0 {
            return Err(Error::InvalidTimestamp);
        }
    }

    match buf.get(pos) {
        Some(&b'Z') | Some(&b'z') => pos += 1,
        Some(&b'+') | Some(&b'-') => {
            pos += 1;
            let hours = get_digit!(buf, pos) * 10 + get_digit!(buf, pos + 1);
            if hours > 23 || buf.get(pos + 2) != Some(&b':') {
                return Err(Error::InvalidTimestamp);
            }
            let minutes = get_digit!(buf, pos + 3) * 10 + get_digit!(buf, pos + 4);
            if minutes > 59 {
                return Err(Error::InvalidTimestamp);
            }
            pos += 5;
        }
        _ => return Err(Error::InvalidTimestamp),
    }

    if buf.len() > pos {
        return Err(Error::InvalidTimestamp);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_rfc3339() {
        // https://datatracker.ietf.org/doc/html/rfc3339#section-5.8
        for input in [
            "1985-04-12T23:20:50.52Z",
            "1985-04-12T23:20:50.123456789Z",
            "1996-12-19T16:39:57-08:00",
            "1990-12-31T23:59:59Z",
            "1990-12-31T23:59:60Z",
            "1990-12-31T15:59:59-08:00",
            "1937-01-01T12:00:27.87+00:20",
            "2003-08-24T05:14:15.000003-07:00",
            "2004-02-29T00:00:00Z",
        ] {
            assert!(
                validate_timestamp(input.as_bytes()).is_ok(),
                "input: {input}"
            );
        }
    }

    #[test]
    fn rejects_malformed() {
        for input in [
            "",
            "not-a-time",
            "2003-10-11",
            "2003-10-11 22:14:15Z",     // space separator
            "2003-10-11T22:14:15",      // no zone designator
            "2003-10-11T22:14:15.Z",    // empty fraction
            "2003-13-11T22:14:15Z",     // month 13
            "2003-02-30T22:14:15Z",     // February 30th
            "2003-04-31T22:14:15Z",     // April 31st
            "2100-02-29T00:00:00Z",     // 2100 is not a leap year
            "2003-10-00T22:14:15Z",     // day 0
            "2003-10-11T24:14:15Z",     // hour 24
            "2003-10-11T22:60:15Z",     // minute 60
            "2003-10-11T22:14:61Z",     // second 61
            "2003-10-11T22:14:15+25:00", // zone hour 25
            "2003-10-11T22:14:15+05:60", // zone minute 60
            "2003-10-11T22:14:15Zjunk",  // trailing garbage
        ] {
            assert_eq!(
                validate_timestamp(input.as_bytes()),
                Err(Error::InvalidTimestamp),
                "input: {input}"
            );
        }
    }

    #[test]
    fn generated_timestamp_validates() {
        let ts = generate_timestamp();
        validate_timestamp(ts.as_bytes()).unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
