use anyhow::Result;
use log::{ info, warn };
use serde::Serialize;
use std::path::Path;

use synspec::config::FamilyConfig;
use synspec::{ ConstraintsOutcome, Feasibility, Improving, SpecificationConfig };

use crate::cli::ui;
use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct FamilyReport {
    family_size: u64,
    result: String,
    feasibility: Feasibility,
    undecided_constraints: Vec<usize>,
    improving: Improving<Vec<u64>>,
    refine_next: Option<String>,
}

/// Interpret one bounding evaluation of a family
pub fn execute(spec_path: &Path, family_path: &Path, optimum: Option<f64>, format: OutputFormat) -> Result<()> {
    let mut spec = SpecificationConfig::from_file(spec_path)?.build()?;
    if let Some(value) = optimum {
        match spec.optimality_mut() {
            Some(optimality) => optimality.update_optimum(value)?,
            None => warn!("Specification has no optimality objective, ignoring optimum {}", value),
        }
    }

    let config = FamilyConfig::from_file(family_path)?;
    let family = config.family()?;
    let result = config.evaluate(&spec)?;
    info!("Family of {} members: {}", family.size(), result);

    let improving = result.improving(&family);
    let refine_next = result
        .undecided_result()
        .ok()
        .map(|r| format!("{} [{}]", r.property, r));

    let report = FamilyReport {
        family_size: family.size(),
        result: result.to_string(),
        feasibility: result.constraints_result.feasibility(),
        undecided_constraints: result.constraints_result.undecided_constraints().to_vec(),
        improving,
        refine_next,
    };

    match format {
        OutputFormat::Json => ui::print_json(&report)?,
        OutputFormat::Text => print_text(&report),
    }

    Ok(())
}

fn print_text(report: &FamilyReport) {
    ui::print_header("Family Evaluation");
    ui::print_result("Members", &report.family_size.to_string());
    ui::print_result("Bounds", &report.result);
    ui::print_feasibility("Constraints", report.feasibility);
    if !report.undecided_constraints.is_empty() {
        ui::print_result("Undecided", &format!("{:?}", report.undecided_constraints));
    }

    match &report.improving.assignment {
        Some(assignment) => ui::print_result("Improving assignment", &format!("{:?}", assignment)),
        None => ui::print_info("no improving assignment"),
    }
    ui::print_result("Improving value", &ui::optional(report.improving.value));
    ui::print_result("Can improve", &report.improving.can_improve.to_string());
    if let Some(next) = &report.refine_next {
        ui::print_result("Refine next", next);
    }
}
