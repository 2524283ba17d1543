//! JSON and CSV artefact writers plus the CSV dataset loader.

use std::fs;
use std::path::Path;

use irs_core::errors::{ErrorInfo, IrsError};
use irs_core::to_canonical_json_pretty;
use irs_cosmo::{FlrwTrajectory, ObservationPoint, ObservationSet, RotationCurve};
use irs_signal::SpectralCoherence;
use serde::Serialize;

fn csv_error(path: &Path, err: csv::Error) -> IrsError {
    IrsError::Serde(
        ErrorInfo::new("csv", err.to_string()).with_context("path", path.display().to_string()),
    )
}

fn io_error(path: &Path, err: std::io::Error) -> IrsError {
    IrsError::Io(
        ErrorInfo::new("write", err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Writes pretty canonical JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), IrsError> {
    let bytes = to_canonical_json_pretty(value)?;
    fs::write(path, bytes).map_err(|err| io_error(path, err))
}

/// Writes one CSV row per item, with a header derived from the row type.
pub fn write_csv<T, I>(path: &Path, rows: I) -> Result<(), IrsError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = csv::Writer::from_path(path).map_err(|err| csv_error(path, err))?;
    for row in rows {
        writer.serialize(row).map_err(|err| csv_error(path, err))?;
    }
    writer.flush().map_err(|err| io_error(path, err))
}

#[derive(Serialize)]
struct SpectrumRow {
    frequency_hz: f64,
    coherence: f64,
}

/// Writes `frequency_hz,coherence` rows.
pub fn write_spectrum_csv(path: &Path, spectrum: &SpectralCoherence) -> Result<(), IrsError> {
    write_csv(
        path,
        spectrum.iter().map(|(frequency_hz, coherence)| SpectrumRow {
            frequency_hz,
            coherence,
        }),
    )
}

/// Writes `r,m_baryon,m_extra,v_baryon,v_total` rows.
pub fn write_curve_csv(path: &Path, curve: &RotationCurve) -> Result<(), IrsError> {
    write_csv(path, curve.samples())
}

#[derive(Serialize)]
struct FlrwRow {
    lambda: f64,
    a: f64,
    adot: f64,
}

/// Writes `lambda,a,adot` rows.
pub fn write_flrw_csv(path: &Path, trajectory: &FlrwTrajectory) -> Result<(), IrsError> {
    write_csv(
        path,
        trajectory
            .lambda
            .iter()
            .zip(trajectory.a.iter().zip(trajectory.adot.iter()))
            .map(|(&lambda, (&a, &adot))| FlrwRow { lambda, a, adot }),
    )
}

/// Reads an observation set from a CSV file with header `z,H,sigma_H`.
pub fn load_observations_csv(path: &Path) -> Result<ObservationSet, IrsError> {
    let mut reader = csv::Reader::from_path(path).map_err(|err| csv_error(path, err))?;
    let mut points = Vec::new();
    for record in reader.deserialize::<ObservationPoint>() {
        points.push(record.map_err(|err| csv_error(path, err))?);
    }
    ObservationSet::from_points(points)
}
