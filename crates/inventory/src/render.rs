//! Plain-text rendering of a [`View`].

use std::fmt::Write;

use crate::evaluation::{NoticeKind, View};

const TITLE: &str = "Inventory";

fn notice_prefix(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "[ok]",
        NoticeKind::Warning => "[warn]",
        NoticeKind::Error => "[error]",
        NoticeKind::Info => "[info]",
    }
}

/// Render the page: title, notice, stock table, tier sections, summary.
pub fn render_text(view: &View) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &View) -> std::fmt::Result {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "=".repeat(TITLE.len()))?;
    writeln!(
        out,
        "{} {}",
        notice_prefix(view.notice.kind),
        view.notice.message
    )?;
    writeln!(out)?;

    let name_width = view
        .records
        .iter()
        .map(|r| r.name.as_str().chars().count())
        .chain(std::iter::once("name".len()))
        .max()
        .unwrap_or(0);

    writeln!(out, "{:<name_width$}  {:>8}  tier", "name", "quantity")?;
    for row in &view.records {
        writeln!(
            out,
            "{:<name_width$}  {:>8}  {}",
            row.name.as_str(),
            row.quantity,
            row.tier
        )?;
    }
    writeln!(out)?;

    for (tier, records) in view.tiers.iter() {
        writeln!(out, "{} ({}):", tier, tier.label())?;
        if records.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for record in records {
            writeln!(out, "  - {}: {}", record.name, record.quantity)?;
        }
    }
    writeln!(out)?;

    writeln!(
        out,
        "total units: {}, unique products: {}",
        view.summary.total_units, view.summary.unique_products
    )
}
