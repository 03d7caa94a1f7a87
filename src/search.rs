use anyhow::Result;
use log::debug;
use std::io::Write;
use std::time::Instant;

use crate::catalog::catalog_batch;
use crate::config::SearchConfig;
use crate::matcher::{MatchResult, record_first_match};
use crate::report;
use crate::scan::scan_jars;

/// Scans every input in order, accumulating matches across all of them, and
/// writes the timing lines and the final report to `out`.
pub fn run_search<W: Write>(config: &SearchConfig, out: &mut W) -> Result<MatchResult> {
    if let Some(method_name) = &config.method_name {
        debug!("method name {method_name:?} accepted but not used for matching");
    }

    let global_start = Instant::now();
    let mut matches = MatchResult::new();

    for input in &config.inputs {
        debug!("scanning {:?} input {}", input.kind, input.path.display());

        let start = Instant::now();
        let jars = scan_jars(&input.path);
        report::write_scan_elapsed(out, &input.raw, start.elapsed())?;

        let start = Instant::now();
        let mut matched = 0usize;
        for record in catalog_batch(&jars) {
            if record_first_match(&mut matches, &record, &config.class_name) {
                matched += 1;
            }
        }
        debug!(
            "{matched} of {} jar(s) matched under {}",
            jars.len(),
            input.raw
        );
        report::write_parse_elapsed(out, &input.raw, start.elapsed())?;
    }

    report::write_matches(out, &matches)?;
    report::write_total_elapsed(out, global_start.elapsed())?;
    out.flush()?;

    Ok(matches)
}
