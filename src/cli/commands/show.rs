use anyhow::Result;
use log::info;
use serde::Serialize;
use std::path::Path;

use synspec::SpecificationConfig;

use crate::cli::ui;
use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct FormulaPair {
    property: String,
    formula: String,
    alternative: String,
}

#[derive(Debug, Serialize)]
struct ShowReport {
    specification: String,
    constraint_indices: Vec<usize>,
    has_optimality: bool,
    formulae: Vec<FormulaPair>,
}

/// Specification display command
pub fn execute(spec_path: &Path, format: OutputFormat) -> Result<()> {
    let spec = SpecificationConfig::from_file(spec_path)?.build()?;
    info!("Loaded specification with {} properties", spec.num_properties());

    let formulae = spec
        .properties()
        .into_iter()
        .zip(spec.formulae())
        .zip(spec.formulae_alt())
        .map(|((property, formula), alt)| FormulaPair {
            property: property.to_string(),
            formula: format!("{} ({})", formula, direction(formula)),
            alternative: format!("{} ({})", alt, direction(alt)),
        })
        .collect();

    let report = ShowReport {
        specification: spec.to_string(),
        constraint_indices: spec.all_constraint_indices(),
        has_optimality: spec.has_optimality(),
        formulae,
    };

    match format {
        OutputFormat::Json => ui::print_json(&report)?,
        OutputFormat::Text => {
            ui::print_header("Specification");
            ui::print_result("Specification", &report.specification);
            for (index, pair) in report.formulae.iter().enumerate() {
                ui::print_result(&format!("Property {}", index), &pair.property);
                ui::print_result("  formula", &pair.formula);
                ui::print_result("  alternative", &pair.alternative);
            }
        }
    }

    Ok(())
}

fn direction(formula: &synspec::Formula) -> String {
    formula.direction.map_or_else(|| "-".to_string(), |d| d.to_string())
}
