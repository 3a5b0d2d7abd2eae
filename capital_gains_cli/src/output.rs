use std::path::Path;

use capital_gains_api::{ApiConfig, Blob};
use serde::Serialize;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Summary of a report written to disk.
#[derive(Serialize)]
pub struct SavedReport {
    pub path: String,
    pub bytes: usize,
    pub content_type: Option<String>,
}

impl SavedReport {
    pub fn new(path: &Path, blob: &Blob) -> Self {
        Self {
            path: path.display().to_string(),
            bytes: blob.len(),
            content_type: blob.content_type.clone(),
        }
    }
}

#[derive(Serialize)]
struct ConfigRow<'a> {
    mode: String,
    base_url: Option<&'a str>,
    calculate_url: Option<String>,
}

pub fn print_saved(report: &SavedReport, format: &OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", render_saved(report)),
        OutputFormat::Json => print_json(report),
    }
}

pub fn print_config(config: &ApiConfig, format: &OutputFormat) {
    let row = ConfigRow {
        mode: config.mode().to_string(),
        base_url: config.base_url(),
        calculate_url: config.calculate_url(),
    };
    match format {
        OutputFormat::Text => println!("{}", render_config(&row)),
        OutputFormat::Json => print_json(&row),
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn render_saved(report: &SavedReport) -> String {
    let kind = report.content_type.as_deref().unwrap_or("unknown type");
    format!(
        "Saved {} ({}, {})",
        report.path,
        format_size(report.bytes),
        kind
    )
}

fn render_config(row: &ConfigRow<'_>) -> String {
    format!(
        "Mode:          {}\nBase URL:      {}\nCalculate URL: {}",
        row.mode,
        row.base_url.unwrap_or("<unset>"),
        row.calculate_url.as_deref().unwrap_or("<unset>")
    )
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capital_gains_api::BuildMode;

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(3 * 1024 * 1024 / 2), "1.5 MiB");
    }

    #[test]
    fn render_saved_summary() {
        let report = SavedReport {
            path: "out/capital_gains_results.zip".to_string(),
            bytes: 2048,
            content_type: Some("application/zip".to_string()),
        };
        assert_eq!(
            render_saved(&report),
            "Saved out/capital_gains_results.zip (2.0 KiB, application/zip)"
        );
    }

    #[test]
    fn saved_report_json_shape() {
        let report = SavedReport {
            path: "gains.csv".to_string(),
            bytes: 10,
            content_type: None,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "path": "gains.csv", "bytes": 10, "content_type": null })
        );
    }

    #[test]
    fn render_config_with_unset_url() {
        let config = ApiConfig::resolve(BuildMode::Production, |_| None);
        let row = ConfigRow {
            mode: config.mode().to_string(),
            base_url: config.base_url(),
            calculate_url: config.calculate_url(),
        };
        let text = render_config(&row);
        assert!(text.contains("Mode:          production"));
        assert!(text.contains("Base URL:      <unset>"));
        assert!(text.contains("Calculate URL: <unset>"));
    }
}
