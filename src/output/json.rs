use crate::error::Result;
use crate::report::SyncReport;

/// Pretty-printed JSON form of a run, for CI tooling
pub fn format_json(report: &SyncReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
