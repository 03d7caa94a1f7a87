use std::io::{self, Write};
use std::time::Duration;

use crate::config::MILLIS_ONE_DAY;
use crate::matcher::MatchResult;

const MILLIS_ONE_HOUR: u64 = 3_600_000;
const MILLIS_ONE_MINUTE: u64 = 60_000;
const MILLIS_ONE_SECOND: u64 = 1_000;

/// Formats milliseconds as `[D days,]H[:MM[:SS]]`.
///
/// The day prefix only appears past a full day. Trailing minute and second
/// fields are dropped once nothing remains to show; a sub-second remainder
/// still prints its (zero) seconds field.
pub fn format_posix_time(trans_millis: i64) -> String {
    let mut out = String::new();

    let millis = if trans_millis > MILLIS_ONE_DAY {
        let days = trans_millis / MILLIS_ONE_DAY;
        out.push_str(&format!("{days} days,"));
        trans_millis - days * MILLIS_ONE_DAY
    } else {
        trans_millis
    };

    if millis < 0 {
        out.push('-');
    }
    let mut rest = millis.unsigned_abs();

    let hours = rest / MILLIS_ONE_HOUR;
    out.push_str(&hours.to_string());
    rest -= hours * MILLIS_ONE_HOUR;
    if rest == 0 {
        return out;
    }

    let minutes = rest / MILLIS_ONE_MINUTE;
    out.push_str(&format!(":{minutes:02}"));
    rest -= minutes * MILLIS_ONE_MINUTE;
    if rest == 0 {
        return out;
    }

    let seconds = rest / MILLIS_ONE_SECOND;
    out.push_str(&format!(":{seconds:02}"));
    out
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format_posix_time(i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
}

pub fn write_scan_elapsed(out: &mut impl Write, input: &str, elapsed: Duration) -> io::Result<()> {
    writeln!(
        out,
        "jar path:{input},jar file scan time elapsed:{}",
        format_elapsed(elapsed)
    )
}

pub fn write_parse_elapsed(out: &mut impl Write, input: &str, elapsed: Duration) -> io::Result<()> {
    writeln!(
        out,
        "jar path:{input},jar file parse time elapsed:{}",
        format_elapsed(elapsed)
    )
}

pub fn write_matches(out: &mut impl Write, matches: &MatchResult) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(out, "no match class jar.");
    }

    writeln!(out, "match class jar:")?;
    for (i, (jar_path, class_name)) in matches.iter().enumerate() {
        writeln!(out, "   {i} => {}", jar_path.display())?;
        writeln!(out, "         {class_name}")?;
    }
    Ok(())
}

pub fn write_total_elapsed(out: &mut impl Write, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "total time elapsed:{}", format_elapsed(elapsed))
}
