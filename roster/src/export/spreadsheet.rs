//! Spreadsheet (CSV) export
//!
//! One row per seat. The header and column order are the wire format the
//! chapter's spreadsheet template expects; the leading UTF-8 byte-order
//! mark keeps accented names intact when the file is opened in Excel.

use crate::error::ExportError;
use crate::models::SeatAssignment;

const HEADER: [&str; 4] = ["Cadeira", "Nome do Membro", "Empresa", "Referência Pedida"];

/// Render the order as a CSV document, BOM included.
///
/// Quoting of fields containing separators or quotes is handled by the
/// csv writer.
pub fn render_csv(order: &[SeatAssignment]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for assignment in order {
        writer.write_record([
            assignment.seat.to_string(),
            assignment.member_name.clone(),
            assignment.company_name.clone(),
            assignment.activity.clone(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    let body = String::from_utf8(bytes)?;
    Ok(format!("\u{feff}{body}"))
}
