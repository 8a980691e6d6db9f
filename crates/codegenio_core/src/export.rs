//! crates/codegenio_core/src/export.rs
//!
//! CSV progress report for the family/educator dashboard.

use chrono::NaiveDate;

use crate::domain::Profile;

pub const REPORT_HEADER: &str = "Nombre,Puntos de Experiencia (XP),Lecciones Completadas";

/// Builds the report: one row per profile under the header. Names are
/// double-quoted, with embedded quotes doubled.
pub fn progress_report_csv(profiles: &[&Profile]) -> String {
    let mut rows = Vec::with_capacity(profiles.len() + 1);
    rows.push(REPORT_HEADER.to_string());
    rows.extend(profiles.iter().map(|p| {
        format!(
            "\"{}\",{},{}",
            p.name.replace('"', "\"\""),
            p.xp,
            p.completed_lessons.len()
        )
    }));
    rows.join("\n")
}

/// Report file name, stamped with the export date.
pub fn report_file_name(date: NaiveDate) -> String {
    format!(
        "reporte_rendimiento_CodeGenio_{}.csv",
        date.format("%Y-%m-%d")
    )
}
