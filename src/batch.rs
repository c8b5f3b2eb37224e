//! Headless evaluation of batch files
//!
//! Every job is independent, so the batch fans out over rayon and each job
//! gets its own row; a bad job never aborts the rest.

use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::batch_config::{BatchConfig, MassesJob, TargetJob};
use crate::constants::PhysicalConstants;
use crate::error::Result;
use crate::mixture::{describe_mixture, plan_for_target};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    Target,
    Masses,
}

/// Flattened outcome of one job. Undefined or unavailable values are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub label: String,
    pub kind: JobKind,
    pub sugar_mass: Option<f64>,
    pub water_mass: Option<f64>,
    pub total_mass: Option<f64>,
    pub final_volume: Option<f64>,
    pub density: Option<f64>,
    pub brix: Option<f64>,
    pub error: Option<String>,
}

impl BatchRow {
    fn failed(label: &str, kind: JobKind, error: String) -> Self {
        Self {
            label: label.to_string(),
            kind,
            sugar_mass: None,
            water_mass: None,
            total_mass: None,
            final_volume: None,
            density: None,
            brix: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub name: String,
    pub constants: PhysicalConstants,
    pub rows: Vec<BatchRow>,
}

impl BatchReport {
    pub fn failures(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_ok()).count()
    }
}

fn run_target(job: &TargetJob, constants: &PhysicalConstants) -> Result<BatchRow> {
    let plan = plan_for_target(job.to_ratio()?, job.volume_ml(), constants)?;
    Ok(BatchRow {
        label: job.label.clone(),
        kind: JobKind::Target,
        sugar_mass: Some(plan.masses.sugar_mass),
        water_mass: Some(plan.masses.water_mass),
        total_mass: Some(plan.masses.total_mass),
        final_volume: Some(plan.check_volume),
        density: Some(plan.density),
        brix: Some(plan.brix),
        error: None,
    })
}

fn run_masses(job: &MassesJob, constants: &PhysicalConstants) -> Result<BatchRow> {
    let (sugar, water) = job.masses_g();
    let result = describe_mixture(sugar, water, constants)?;
    Ok(BatchRow {
        label: job.label.clone(),
        kind: JobKind::Masses,
        sugar_mass: Some(sugar),
        water_mass: Some(water),
        total_mass: Some(result.total_mass),
        final_volume: Some(result.final_volume),
        density: result.density,
        brix: result.brix,
        error: None,
    })
}

/// Evaluate every job in `config`. Target jobs come first, then mass jobs,
/// each in file order.
pub fn run_batch(config: &BatchConfig) -> BatchReport {
    let constants = config.physical_constants();

    let targets = config.targets.par_iter().map(|job| {
        run_target(job, &constants).unwrap_or_else(|e| {
            warn!(label = %job.label, error = %e, "target job rejected");
            BatchRow::failed(&job.label, JobKind::Target, e.to_string())
        })
    });
    let masses = config.masses.par_iter().map(|job| {
        run_masses(job, &constants).unwrap_or_else(|e| {
            warn!(label = %job.label, error = %e, "masses job rejected");
            BatchRow::failed(&job.label, JobKind::Masses, e.to_string())
        })
    });
    let rows: Vec<BatchRow> = targets.chain(masses).collect();

    let report = BatchReport {
        name: config.name.clone(),
        constants,
        rows,
    };
    info!(
        batch = %report.name,
        jobs = report.rows.len(),
        failed = report.failures(),
        "batch finished"
    );
    report
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.6}")).unwrap_or_default()
}

/// Quote a free-text CSV field when it needs it.
fn text_cell(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn write_csv<W: Write>(report: &BatchReport, mut out: W) -> io::Result<()> {
    writeln!(
        out,
        "label,kind,sugar_g,water_g,total_g,final_volume_ml,density_g_per_ml,brix,error"
    )?;
    for row in &report.rows {
        let kind = match row.kind {
            JobKind::Target => "target",
            JobKind::Masses => "masses",
        };
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            text_cell(&row.label),
            kind,
            cell(row.sugar_mass),
            cell(row.water_mass),
            cell(row.total_mass),
            cell(row.final_volume),
            cell(row.density),
            cell(row.brix),
            text_cell(row.error.as_deref().unwrap_or("")),
        )?;
    }
    Ok(())
}

/// Export the report to a CSV file, creating parent directories as needed.
pub fn export_csv<P: AsRef<Path>>(report: &BatchReport, path: P) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(report, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), rows = report.rows.len(), "exported batch csv");
    Ok(())
}
