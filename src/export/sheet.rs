//! CSV sheet rendering of a calculation.

use csv::{Terminator, WriterBuilder};
use tracing::debug;

use crate::calculation::fixed_2;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationResult, ScenarioResult};

/// Title row of the exported sheet.
pub const CSV_TITLE: &str = "CALCULADORA DE FINIQUITO Y LIQUIDACIÓN LFT 2015";

/// Media type of the exported file.
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

fn export_error(err: impl std::fmt::Display) -> EngineError {
    EngineError::ExportError {
        message: err.to_string(),
    }
}

fn scenario_rows(scenario: &ScenarioResult) -> Vec<[String; 3]> {
    scenario
        .breakdown
        .finiquito
        .iter()
        .chain(scenario.breakdown.liquidacion.iter())
        .map(|item| {
            [
                item.concept.clone(),
                fixed_2(item.amount),
                item.description.clone(),
            ]
        })
        .collect()
}

/// Renders the calculation as the downloadable CSV sheet.
///
/// Rows have variable width: a header block describing the case, the primary
/// scenario's items and total, then the litigation-maximum scenario when
/// present. Fields containing commas or quotes are quoted.
pub fn render_csv(result: &CalculationResult) -> EngineResult<String> {
    let input = &result.input;
    let antiquity = &result.antiquity;

    let mut writer = WriterBuilder::new()
        .flexible(true)
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let header_rows: Vec<Vec<String>> = vec![
        vec![CSV_TITLE.to_string(), String::new()],
        vec!["Empresa".to_string(), input.company_name.clone()],
        vec!["Trabajador".to_string(), input.worker_name.clone()],
        vec!["Fecha Ingreso".to_string(), input.start_date.clone()],
        vec!["Fecha Baja".to_string(), input.end_date.clone()],
        vec![
            "Antigüedad".to_string(),
            format!("{} años, {} días", antiquity.years, antiquity.days_partial),
        ],
        vec![
            "Sueldo Diario".to_string(),
            input.daily_salary.normalize().to_string(),
        ],
        vec![
            "SDI".to_string(),
            input.integrated_daily_salary.normalize().to_string(),
        ],
        vec!["Causa".to_string(), input.cause.code().to_string()],
        vec![String::new(), String::new()],
        vec![
            "ESCENARIO PRINCIPAL".to_string(),
            result.scenario_a.name.clone(),
        ],
        vec!["Concepto".to_string(), "Monto".to_string(), "Detalle".to_string()],
    ];
    for row in &header_rows {
        writer.write_record(row).map_err(export_error)?;
    }

    for row in scenario_rows(&result.scenario_a) {
        writer.write_record(&row).map_err(export_error)?;
    }
    let total_a = fixed_2(result.scenario_a.total);
    writer
        .write_record(["TOTAL A PAGAR", total_a.as_str(), ""])
        .map_err(export_error)?;

    if let Some(scenario_b) = &result.scenario_b {
        writer.write_record(["", "", ""]).map_err(export_error)?;
        writer
            .write_record(["ESCENARIO MÁXIMO (JUICIO)", scenario_b.name.as_str()])
            .map_err(export_error)?;
        for row in scenario_rows(scenario_b) {
            writer.write_record(&row).map_err(export_error)?;
        }
        let total_b = fixed_2(scenario_b.total);
        writer
            .write_record(["TOTAL MÁXIMO", total_b.as_str(), ""])
            .map_err(export_error)?;
    }

    let bytes = writer.into_inner().map_err(export_error)?;
    let rendered = String::from_utf8(bytes).map_err(export_error)?;

    debug!(
        bytes = rendered.len(),
        has_maximum = result.scenario_b.is_some(),
        "Rendered CSV export"
    );

    Ok(rendered)
}

/// Builds the download file name: `calculo_finiquito_<worker>.csv`, with each
/// run of whitespace in the worker's name replaced by one underscore.
///
/// Quotes, backslashes and control characters are dropped so the name can
/// sit inside a quoted `Content-Disposition` filename.
///
/// # Examples
///
/// ```
/// use finiquito_engine::export::export_file_name;
///
/// assert_eq!(export_file_name("Ana  María López"), "calculo_finiquito_Ana_María_López.csv");
/// ```
pub fn export_file_name(worker_name: &str) -> String {
    let mut name = String::with_capacity(worker_name.len());
    let mut in_whitespace = false;

    for ch in worker_name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
        } else if ch == '"' || ch == '\\' || ch.is_control() {
            continue;
        } else {
            name.push(ch);
            in_whitespace = false;
        }
    }

    format!("calculo_finiquito_{}.csv", name)
}
