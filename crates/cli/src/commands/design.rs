//! Commande de conception

use crate::{create_progress_bar, DesignInput, OutputFormat};
use anyhow::Result;
use console::style;
use primered_core::{
    Primer3Config, Primer3Designer, PrimerDesignService, PrimerDetail, PrimerError, PrimerResponse,
};
use std::path::PathBuf;
use std::sync::Arc;
use tabled::{Table, Tabled};

/// Résultat de conception pour une matrice
#[derive(Debug, serde::Serialize)]
pub struct DesignOutcome {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PrimerResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DesignOutcome {
    fn new(id: String, result: std::result::Result<PrimerResponse, PrimerError>) -> Self {
        match result {
            Ok(response) => Self {
                id,
                result: Some(response),
                error: None,
            },
            Err(e) => Self {
                id,
                result: None,
                error: Some(e.to_string()),
            },
        }
    }
}

pub async fn run(
    input: DesignInput,
    primer3: PathBuf,
    timeout: u64,
    format: OutputFormat,
) -> Result<()> {
    let requests = input.requests()?;

    let designer = Arc::new(Primer3Designer::new(Primer3Config {
        executable: primer3,
        timeout_secs: timeout,
    }));
    let service = PrimerDesignService::new(designer).with_settings(input.engine_settings());

    let pb = create_progress_bar(requests.len() as u64, "Conception des amorces...");
    let mut outcomes = Vec::with_capacity(requests.len());

    for request in &requests {
        let id = request.sequence_id.clone().unwrap_or_default();
        pb.set_message(id.clone());
        outcomes.push(DesignOutcome::new(id, service.design_primer(request).await));
        pb.inc(1);
    }
    pb.finish_and_clear();

    match format {
        OutputFormat::Table => print_table(&outcomes),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
    }

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    if failed == outcomes.len() {
        anyhow::bail!("Aucune conception n'a abouti");
    }

    Ok(())
}

#[derive(Tabled)]
struct OligoRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Oligo")]
    kind: String,
    #[tabled(rename = "Sequence")]
    sequence: String,
    #[tabled(rename = "Start")]
    start: usize,
    #[tabled(rename = "Length")]
    length: usize,
    #[tabled(rename = "Tm")]
    tm: String,
    #[tabled(rename = "GC%")]
    gc_percent: String,
    #[tabled(rename = "Penalty")]
    penalty: String,
}

impl OligoRow {
    fn new(id: &str, kind: &str, detail: &PrimerDetail) -> Self {
        Self {
            id: id.to_string(),
            kind: kind.to_string(),
            sequence: detail.sequence.clone(),
            start: detail.start,
            length: detail.length,
            tm: format!("{:.2}", detail.tm),
            gc_percent: format!("{:.1}%", detail.gc_percent),
            penalty: format!("{:.3}", detail.penalty),
        }
    }
}

fn oligo_rows(outcomes: &[DesignOutcome]) -> Vec<OligoRow> {
    outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().map(|r| (o.id.as_str(), r)))
        .flat_map(|(id, response)| {
            let mut rows = vec![
                OligoRow::new(id, "left", &response.left_primer),
                OligoRow::new(id, "right", &response.right_primer),
            ];
            rows.extend(
                response
                    .internal_primers
                    .iter()
                    .map(|p| OligoRow::new(id, "internal", p)),
            );
            rows
        })
        .collect()
}

fn print_table(outcomes: &[DesignOutcome]) {
    let rows = oligo_rows(outcomes);
    if !rows.is_empty() {
        println!("{}", Table::new(rows));
    }

    for outcome in outcomes {
        if let Some(error) = &outcome.error {
            eprintln!("{} {}: {}", style("✗").red(), outcome.id, error);
        }
    }
}
