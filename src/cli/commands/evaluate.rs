use anyhow::Result;
use log::{ debug, info };
use serde::Serialize;
use std::path::Path;

use synspec::config::CandidatesConfig;
use synspec::SpecificationConfig;

use crate::cli::ui;
use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct CandidateReport {
    name: String,
    constraints: String,
    optimality: Option<f64>,
    all_sat: bool,
    accepting: bool,
    new_optimum: Option<f64>,
}

#[derive(Debug, Serialize)]
struct EvaluateReport {
    candidates: Vec<CandidateReport>,
    optimum: Option<f64>,
    suboptimal_value: Option<f64>,
    first_feasible: Option<String>,
}

/// Evaluate candidates in order, the way a search driver consumes them
pub fn execute(spec_path: &Path, candidates_path: &Path, format: OutputFormat) -> Result<()> {
    let mut spec = SpecificationConfig::from_file(spec_path)?.build()?;
    let candidates = CandidatesConfig::from_file(candidates_path)?.candidates;
    info!("Evaluating {} candidates against {}", candidates.len(), spec);

    let mut reports = Vec::with_capacity(candidates.len());
    let mut first_feasible = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let name = candidate.name.clone().unwrap_or_else(|| format!("#{}", index));
        let result = candidate.evaluate(&spec)?;
        debug!("Candidate {}: {}", name, result);

        let new_optimum = result.improving_value();
        if let (Some(value), Some(optimality)) = (new_optimum, spec.optimality_mut()) {
            optimality.update_optimum(value)?;
        }
        if !spec.has_optimality() && result.accepting() && first_feasible.is_none() {
            first_feasible = Some(name.clone());
        }

        reports.push(CandidateReport {
            name,
            constraints: result.constraints_result.to_string(),
            optimality: result.optimality_result.as_ref().map(|r| r.value),
            all_sat: result.constraints_result.all_sat,
            accepting: result.accepting(),
            new_optimum,
        });
    }

    let optimum = spec.optimality().and_then(|o| o.optimum);
    let suboptimal_value = spec.optimality().and_then(|o| o.suboptimal_value().ok());
    let report = EvaluateReport { candidates: reports, optimum, suboptimal_value, first_feasible };

    match format {
        OutputFormat::Json => ui::print_json(&report)?,
        OutputFormat::Text => print_text(&report),
    }

    Ok(())
}

fn print_text(report: &EvaluateReport) {
    ui::print_header("Candidate Evaluation");
    for candidate in &report.candidates {
        ui::print_sat(&format!("{} [{}] opt={}", candidate.name, candidate.constraints, ui::optional(candidate.optimality)), candidate.accepting);
        if let Some(value) = candidate.new_optimum {
            ui::print_success(&format!("new optimum {}", value));
        }
    }

    println!();
    match (&report.optimum, &report.first_feasible) {
        (Some(optimum), _) => {
            ui::print_result("Optimum", &optimum.to_string());
            ui::print_result("Suboptimal bound", &ui::optional(report.suboptimal_value));
        }
        (None, Some(name)) => ui::print_success(&format!("feasible candidate: {}", name)),
        (None, None) => ui::print_warning("no candidate satisfied the specification"),
    }
}
