//! Record export to JSON, CSV and a plaintext report.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::result::ExtractionRecord;
use crate::Result;

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Text,
}

impl ExportFormat {
    /// File extension without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "text" | "txt" => Ok(Self::Text),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// Render a record in the requested format.
///
/// # Errors
///
/// Returns [`crate::Error::Serialization`] if the record cannot be converted to JSON.
pub fn render(record: &ExtractionRecord, format: ExportFormat, generated_at: &DateTime<Utc>) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(record),
        ExportFormat::Csv => to_csv(record),
        ExportFormat::Text => Ok(to_text(record, generated_at)),
    }
}

/// Pretty-printed JSON with camelCase keys.
///
/// # Errors
///
/// Returns [`crate::Error::Serialization`] if serialization fails.
pub fn to_json(record: &ExtractionRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Two-column CSV: one `path,value` row per non-empty leaf of the record.
///
/// Paths join object keys with `.` and index arrays as `[i]`, for example
/// `socialMedia[0]` or `seoInfo.ogTags.title`. Keys appear in sorted order.
/// Empty strings, arrays and maps produce no rows.
///
/// # Errors
///
/// Returns [`crate::Error::Serialization`] if the record cannot be converted to JSON.
pub fn to_csv(record: &ExtractionRecord) -> Result<String> {
    let value = serde_json::to_value(record)?;

    let mut rows = Vec::new();
    flatten("", &value, &mut rows);

    let mut out = String::from("Data Type,Value\n");
    for (path, leaf) in rows {
        out.push_str(&csv_field(&path));
        out.push(',');
        out.push_str(&csv_field(&leaf));
        out.push('\n');
    }
    Ok(out)
}

fn flatten(path: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                flatten(&child_path, child, rows);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten(&format!("{path}[{i}]"), child, rows);
            }
        }
        Value::String(s) if s.is_empty() => {}
        Value::String(s) => rows.push((path.to_string(), s.clone())),
        Value::Null => {}
        other => rows.push((path.to_string(), other.to_string())),
    }
}

/// Quote a field when it contains a delimiter, quote or line break.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Human-readable report of the headline fields.
#[must_use]
pub fn to_text(record: &ExtractionRecord, generated_at: &DateTime<Utc>) -> String {
    let mut out = format!(
        "Website Data Report\n{}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    for (label, value) in [
        ("Website Title", &record.website_title),
        ("Business Type", &record.business_type),
        ("Description", &record.description),
    ] {
        if !value.is_empty() {
            out.push_str(&format!("{label}: {value}\n\n"));
        }
    }

    let mut contact = false;
    for (label, value) in [
        ("Email", &record.email),
        ("Phone", &record.phone),
        ("Address", &record.address),
    ] {
        if !value.is_empty() {
            out.push_str(&format!("{label}: {value}\n"));
            contact = true;
        }
    }
    if contact {
        out.push('\n');
    }

    write_list(&mut out, "Social Media", &record.social_media);
    write_list(&mut out, "Technologies Used", &record.technologies);
    write_list(&mut out, "Services", &record.services);

    let products: Vec<String> = record
        .products
        .iter()
        .map(|p| match &p.price {
            Some(price) => format!("{} ({price})", p.name),
            None => p.name.clone(),
        })
        .collect();
    write_list(&mut out, "Products", &products);

    let faqs: Vec<String> = record
        .faqs
        .iter()
        .map(|f| format!("{} {}", f.question, f.answer))
        .collect();
    write_list(&mut out, "FAQs", &faqs);

    write_list(&mut out, "Languages", &record.languages);

    if !record.other_info.is_empty() {
        out.push_str("Additional Information:\n");
        for (key, value) in &record.other_info {
            out.push_str(&format!("{key}: {value}\n"));
        }
    }

    out
}

fn write_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("{heading}:\n"));
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
    out.push('\n');
}

/// Download filename for a report generated on `date`.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use rs_siteprofile::export::{suggested_filename, ExportFormat};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(suggested_filename(ExportFormat::Csv, date), "website-data-2024-03-09.csv");
/// ```
#[must_use]
pub fn suggested_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!("website-data-{}.{}", date.format("%Y-%m-%d"), format.extension())
}
