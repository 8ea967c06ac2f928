//! Table formatting for project lists
//!
//! `list` and `search` share this renderer so both print the same columns
//! and honour the same `--format` values.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fmt::Write as _;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{escape_csv, format_short_id, truncate_str};
use crate::cli::OutputFormat;
use crate::core::shortid::ShortIdIndex;
use crate::entities::project::ProjectRecord;

/// Render `records` in the requested format
///
/// `Auto` renders the aligned table.
pub fn render_projects(
    records: &[&ProjectRecord],
    short_ids: &ShortIdIndex,
    format: OutputFormat,
) -> Result<String> {
    let short = |p: &ProjectRecord| {
        short_ids
            .get_short_id(&p.id)
            .map(|n| format!("@{}", n))
            .unwrap_or_default()
    };

    let mut out = String::new();
    match format {
        OutputFormat::Json => {
            out.push_str(&serde_json::to_string_pretty(records).into_diagnostic()?);
            out.push('\n');
        }
        OutputFormat::Yaml => {
            out.push_str(&serde_yml::to_string(&records).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            out.push_str("short_id,id,student_name,project_title,description,date,link\n");
            for &p in records {
                let _ = writeln!(
                    out,
                    "{},{},{},{},{},{},{}",
                    short(p),
                    p.id,
                    escape_csv(&p.student_name),
                    escape_csv(&p.project_title),
                    escape_csv(&p.description),
                    p.date,
                    escape_csv(&p.link)
                );
            }
        }
        OutputFormat::Id => {
            for &p in records {
                let _ = writeln!(out, "{}", p.id);
            }
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(["Short", "ID", "Student", "Title", "Date"]);
            for &p in records {
                builder.push_record([
                    short(p),
                    format_short_id(&p.id),
                    p.student_name.clone(),
                    p.project_title.clone(),
                    p.date.clone(),
                ]);
            }
            let _ = writeln!(out, "{}", builder.build().with(Style::markdown()));
        }
        OutputFormat::Tsv | OutputFormat::Auto => {
            let _ = writeln!(
                out,
                "{:<6} {:<14} {:<22} {:<32} {:<10}",
                style("SHORT").bold().dim(),
                style("ID").bold(),
                style("STUDENT").bold(),
                style("TITLE").bold(),
                style("DATE").bold()
            );
            let _ = writeln!(out, "{}", "-".repeat(88));
            for &p in records {
                let _ = writeln!(
                    out,
                    "{:<6} {:<14} {:<22} {:<32} {:<10}",
                    style(short(p)).cyan(),
                    format_short_id(&p.id),
                    truncate_str(&p.student_name, 20),
                    truncate_str(&p.project_title, 30),
                    p.date
                );
            }
        }
    }

    Ok(out)
}

/// Whether a format is meant for other programs rather than people
pub fn is_machine_format(format: OutputFormat) -> bool {
    matches!(
        format,
        OutputFormat::Json | OutputFormat::Yaml | OutputFormat::Csv | OutputFormat::Id
    )
}
