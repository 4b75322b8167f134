// fixed-width stdout summary of the mapping report
use std::fmt::Write as _;

use crate::report::MappingReport;

const RULE_WIDTH: usize = 90;

/// Render the human-readable summary table: one row per category with its
/// tier, match count and top indicator, followed by totals.
pub fn render_summary(report: &MappingReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "{:<30} {:<8} {:<10} {:<35}",
        "Category", "Tier", "Indicators", "Top Match"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    for m in &report.mappings {
        let top_match = m
            .indicators
            .first()
            .map(|i| i.title.as_str())
            .unwrap_or("(none)");
        let _ = writeln!(
            out,
            "{:<30} {:<8} {:<10} {:<35}",
            m.display_name,
            m.weight_tier.as_str(),
            m.indicators.len(),
            top_match
        );
    }
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    let _ = writeln!(out);
    let _ = writeln!(out, "Total categories mapped:     {}", report.category_count());
    let _ = writeln!(out, "Total category->indicator pairs: {}", report.pair_count());

    if !report.weight_rollup.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Aggregate weight by indicator type:");
        for (kind, weight) in &report.weight_rollup {
            let _ = writeln!(out, "  {kind:<12} {weight:.4}");
        }
    }

    out
}
