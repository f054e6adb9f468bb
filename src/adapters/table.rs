use crate::core::TableRenderer;
use crate::domain::ports::Table;
use crate::utils::error::{MembershipError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn TableRenderer> {
        match self {
            OutputFormat::Plain => Box::new(PlainTableRenderer),
            OutputFormat::Csv => Box::new(CsvTableRenderer),
            OutputFormat::Json => Box::new(JsonTableRenderer),
        }
    }
}

/// Aligned columns with a dashed rule under the header. Numeric columns are
/// right-aligned, everything else left-aligned.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTableRenderer;

impl TableRenderer for PlainTableRenderer {
    fn render(&self, table: &Table) -> Result<String> {
        let widths: Vec<usize> = table
            .headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                table
                    .rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let numeric: Vec<bool> = (0..table.headers.len())
            .map(|col| {
                let mut cells = table
                    .rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .filter(|cell| !cell.is_empty())
                    .peekable();
                cells.peek().is_some() && cells.all(|cell| cell.parse::<f64>().is_ok())
            })
            .collect();

        let line = |cells: &[String]| -> String {
            let padded: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(col, width)| {
                    let cell = cells.get(col).map(String::as_str).unwrap_or("");
                    if numeric[col] {
                        format!("{:>width$}", cell, width = width)
                    } else {
                        format!("{:<width$}", cell, width = width)
                    }
                })
                .collect();
            padded.join("  ").trim_end().to_string()
        };

        let mut lines = vec![line(&table.headers)];
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );
        lines.extend(table.rows.iter().map(|row| line(row)));

        Ok(lines.join("\n"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableRenderer;

impl TableRenderer for CsvTableRenderer {
    fn render(&self, table: &Table) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| MembershipError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| {
            MembershipError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}

/// One JSON object per row, keyed by header.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTableRenderer;

impl TableRenderer for JsonTableRenderer {
    fn render(&self, table: &Table) -> Result<String> {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = table
            .rows
            .iter()
            .map(|row| {
                table
                    .headers
                    .iter()
                    .zip(row)
                    .map(|(header, cell)| (header.clone(), serde_json::Value::String(cell.clone())))
                    .collect()
            })
            .collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }
}
