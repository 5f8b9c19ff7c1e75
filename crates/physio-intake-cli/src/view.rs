//! Table rendering, search filtering and date formatting.

use chrono::NaiveDate;
use physio_intake_core::models::PatientRecord;

/// Case-insensitive substring filter over name, phone, address, notes
/// and the serial's decimal form.
pub fn filter_records(records: &[PatientRecord], query: &str) -> Vec<PatientRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&query)
                || p.phone.contains(&query)
                || p.address.to_lowercase().contains(&query)
                || p.notes
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&query))
                || p.sno.to_string().contains(&query)
        })
        .cloned()
        .collect()
}

/// Render `YYYY-MM-DD` as `DD Mon YYYY`, falling through to the raw
/// string when it does not parse.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return "-".into();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

const HEADERS: [&str; 8] = [
    "Sno", "Date", "Name", "Gender", "Phone", "Address", "Referral", "Notes",
];

/// Render the record table with a trailing count line.
pub fn render_table(records: &[PatientRecord]) -> String {
    if records.is_empty() {
        return "No patient records yet.\n".into();
    }

    let rows: Vec<[String; 8]> = records
        .iter()
        .map(|p| {
            [
                p.sno.to_string(),
                format_date(&p.date),
                p.name.clone(),
                p.gender.clone(),
                p.phone.clone(),
                p.address.clone(),
                p.referral_source.clone().unwrap_or_else(|| "-".into()),
                p.notes.clone().unwrap_or_else(|| "-".into()),
            ]
        })
        .collect();

    let mut widths: [usize; 8] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&format!(
        "{} record{}\n",
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    ));
    out
}

fn push_row(out: &mut String, cells: &[String; 8], widths: &[usize; 8]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
