use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::simulation::SimulationReport;

pub fn get_json_data(report: &SimulationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn export_report(report: &SimulationReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io("create export directory", e))?;
    }
    let json_data = get_json_data(report)?;
    let mut f = fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::io("open export file", e))?;
    f.write_all(json_data.as_bytes())
        .map_err(|e| Error::io("write export file", e))?;
    Ok(())
}
