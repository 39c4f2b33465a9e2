// NameFinder - core/export.rs
//
// Text, CSV and JSON rendering of search results.
// Core layer: writes to any Write trait object.

use crate::core::model::SearchResult;
use crate::util::error::ExportError;
use std::io::Write;

/// Output format for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `label<TAB>message` line per result.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
    /// Header row plus one row per result.
    Csv,
}

impl OutputFormat {
    /// Parse a format name as written in config.toml (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Write `results` in the chosen format. Returns the number written.
pub fn write_results<'a, I, W>(
    results: I,
    format: OutputFormat,
    writer: W,
) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a SearchResult>,
    W: Write,
{
    match format {
        OutputFormat::Text => export_text(results, writer),
        OutputFormat::Json => export_json(results, writer),
        OutputFormat::Csv => export_csv(results, writer),
    }
}

/// Write each result's display pair as `label\tmessage`.
pub fn export_text<'a, I, W>(results: I, mut writer: W) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a SearchResult>,
    W: Write,
{
    let mut count = 0;
    for result in results {
        let (label, message) = result.display();
        writeln!(writer, "{label}\t{message}")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Export results to CSV.
///
/// Writes: algorithm, query, found, value, comparisons, label, message
pub fn export_csv<'a, I, W>(results: I, writer: W) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a SearchResult>,
    W: Write,
{
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "algorithm",
            "query",
            "found",
            "value",
            "comparisons",
            "label",
            "message",
        ])
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for result in results {
        let (label, message) = result.display();
        let comparisons = result.comparisons.to_string();
        csv_writer
            .write_record([
                result.algorithm.as_str(),
                result.query.as_str(),
                if result.outcome.is_found() { "true" } else { "false" },
                result.outcome.value(),
                comparisons.as_str(),
                label.as_str(),
                message.as_str(),
            ])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Export results to JSON (array of objects).
pub fn export_json<'a, I, W>(results: I, mut writer: W) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a SearchResult>,
    W: Write,
{
    let results: Vec<&SearchResult> = results.into_iter().collect();
    serde_json::to_writer_pretty(&mut writer, &results)
        .map_err(|e| ExportError::Json { source: e })?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(results.len())
}
