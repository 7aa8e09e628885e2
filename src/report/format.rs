//! Plain-text rendering of a `RunOutput`: data span and inflation setting on
//! top, one row per horizon below, and a recovery table when it was computed.

use crate::app::pipeline::RunOutput;
use crate::domain::InflationModel;
use crate::report::{HorizonSummary, RecoverySummary};

/// Format a run as a header plus one table row per horizon.
pub fn format_run_summary(run: &RunOutput) -> String {
    let mut out = String::new();
    let inflation = &run.config.inflation;

    out.push_str("=== RoI distribution by holding period ===\n");
    out.push_str(&format!(
        "Data: {} - {} ({} months, {} dropped)\n",
        run.span.first, run.span.last, run.span.points, run.config.drop_points
    ));
    out.push_str(&format!(
        "Inflation: {:.2}% p.a. ({})\n",
        inflation.annual_pct,
        match inflation.model {
            InflationModel::Compound => "compound",
            InflationModel::Linear => "linear",
        }
    ));
    out.push('\n');

    out.push_str(&format_table(&run.summaries));

    if run.config.recovery {
        out.push('\n');
        out.push_str(&format_recovery_table(&run.summaries));
    }

    out
}

fn format_table(rows: &[HorizonSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>5} {:>6} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>7}\n",
        "years", "n", "min", "q1", "median", "q3", "max", "bench", "<0"
    ));
    out.push_str(&format!(
        "{:->5} {:->6} {:->9} {:->9} {:->9} {:->9} {:->9} {:->9} {:->7}\n",
        "", "", "", "", "", "", "", "", ""
    ));

    for row in rows {
        match &row.distribution {
            Some(d) => out.push_str(&format!(
                "{:>5} {:>6} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9.3} {:>7}\n",
                row.years,
                d.count,
                pct(d.min),
                pct(d.q1),
                pct(d.median),
                pct(d.q3),
                pct(d.max),
                row.inflation_benchmark,
                pct(d.share_negative),
            )),
            None => out.push_str(&format!("{:>5} {:>6}  (no data)\n", row.years, 0)),
        }
    }

    out
}

fn format_recovery_table(rows: &[HorizonSummary]) -> String {
    let mut out = String::new();
    out.push_str("Recovery of underperforming windows (extra months):\n");
    out.push_str(&format!(
        "{:>5} {:>6} {:>9} {:>11} {:>8} {:>8}\n",
        "years", "under", "recovered", "unrecovered", "median", "max"
    ));

    for row in rows {
        let Some(rec) = &row.recovery else { continue };
        if rec.underperforming == 0 {
            continue;
        }
        let (median, max) = recovery_months(rec);
        out.push_str(&format!(
            "{:>5} {:>6} {:>9} {:>11} {:>8} {:>8}\n",
            row.years, rec.underperforming, rec.recovered, rec.unrecovered, median, max
        ));
    }

    out
}

fn recovery_months(rec: &RecoverySummary) -> (String, String) {
    match &rec.months {
        Some(m) => (format!("{:.1}", m.median), format!("{:.0}", m.max)),
        None => ("-".to_string(), "-".to_string()),
    }
}

fn pct(v: f64) -> String {
    format!("{:.1}%", v * 100.0)
}
