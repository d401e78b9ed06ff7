//! Result export to CSV and JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::metrics::ReplicationResult;

/// Write replication results as a CSV table.
///
/// Per-station columns are emitted dynamically (`final_docked_i`,
/// `mean_docked_i`), so the same writer covers toy and full networks.
pub fn export_to_csv(
    path: &Path,
    results: &[ReplicationResult],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    let stations = results.first().map_or(0, |r| r.final_docked.len());
    let mut header = vec![
        "run_id".to_string(),
        "seed".to_string(),
        "events".to_string(),
        "final_in_transit".to_string(),
    ];
    for i in 0..stations {
        header.push(format!("final_docked_{i}"));
    }
    for i in 0..stations {
        header.push(format!("mean_docked_{i}"));
    }
    writer.write_record(&header)?;

    for result in results {
        let mut record = vec![
            result.run_id.to_string(),
            result.seed.to_string(),
            result.events.to_string(),
            result.final_in_transit.to_string(),
        ];
        for &docked in &result.final_docked {
            record.push(docked.to_string());
        }
        for &mean in &result.mean_docked {
            record.push(format!("{mean:.6}"));
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write replication results as pretty-printed JSON.
pub fn export_to_json(
    path: &Path,
    results: &[ReplicationResult],
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.flush()?;
    Ok(())
}
