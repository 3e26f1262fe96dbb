//! Report rendering

use anyhow::Result;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use sts_eval_workflow::{
    Analysis, CorrelationRow, EvalReport, OutputFormat, SampleInspection, SampleRow, TfidfDetails,
};

/// Writes reports to stdout as tables or JSON
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn write_report(&self, report: &EvalReport) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(report)?);
            }
            OutputFormat::Table => {
                println!("Found {} STS pairs", report.pairs);
                match report.analysis {
                    Analysis::Pearson => print_pearson(report),
                    Analysis::Nist => {
                        if let Some(sample) = &report.sample {
                            print_sample(sample);
                        }
                    }
                    Analysis::Tfidf => {
                        if let Some(details) = &report.tfidf {
                            print_tfidf(details);
                        }
                        print_section("Correlations");
                        for row in &report.correlations {
                            println!("{}: r={}", row.metric, format_optional(row.r));
                        }
                        println!("{}", correlation_table(&report.correlations));
                    }
                }
            }
        }
        Ok(())
    }

    /// Start a spinner on stderr; table output only
    pub fn spinner(&self, message: &str) -> Option<indicatif::ProgressBar> {
        if self.format != OutputFormat::Table {
            return None;
        }
        let pb = indicatif::ProgressBar::new_spinner();
        if let Ok(style) = indicatif::ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    }
}

fn print_section(title: &str) {
    println!("\n{}", title.bold().cyan());
}

fn styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    let header_cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
    table.set_header(header_cells);
    table
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.3}", v))
}

fn print_pearson(report: &EvalReport) {
    println!("Semantic textual similarity for {}", report.source);
    println!();
    for row in &report.correlations {
        println!("{} correlation: {}", row.metric, format_optional(row.r));
    }

    print_section("Details");
    println!("{}", correlation_table(&report.correlations));
}

fn correlation_table(rows: &[CorrelationRow]) -> Table {
    let mut table = styled_table(&["Metric", "r", "p-value", "95% CI", "Mean", "Std Dev"]);
    for row in rows {
        let r = match row.r {
            Some(r) if r < 0.0 => Cell::new(format!("{:.3}", r)).fg(Color::Red),
            Some(r) => Cell::new(format!("{:.3}", r)).fg(Color::Green),
            None => Cell::new("n/a").fg(Color::Yellow),
        };
        let interval = row
            .confidence_interval
            .map_or_else(|| "n/a".to_string(), |(lo, hi)| format!("[{:.3}, {:.3}]", lo, hi));

        table.add_row(vec![
            Cell::new(&row.metric),
            r,
            Cell::new(row.p_value.map_or_else(|| "n/a".to_string(), |p| format!("{:.3e}", p))),
            Cell::new(interval),
            Cell::new(format!("{:.3}", row.summary.mean)),
            Cell::new(format!("{:.3}", row.summary.std_dev)),
        ]);
    }
    table
}

fn print_sample(sample: &SampleInspection) {
    print_section(&format!("{} for pairs {}..{}", sample.metric, sample.start, sample.end));
    if sample.rows.is_empty() {
        println!("{}", "No pairs in the sample window.".dimmed());
    } else {
        let mut table = styled_table(&["#", "Label", &sample.metric, "Sentences"]);
        for row in &sample.rows {
            table.add_row(vec![
                Cell::new(row.index),
                Cell::new(format!("{:.2}", row.label)),
                Cell::new(format!("{:.2}", row.score)),
                Cell::new(format!("{}\n{}", row.first, row.second)),
            ]);
        }
        println!("{table}");
    }

    if let Some(check) = &sample.symmetry {
        print_section("Symmetry check");
        println!("{}\t{}", check.first, check.second);
        println!(
            "{} {:.4} == {:.4}",
            "✓".green(),
            check.forward,
            check.backward
        );
    }

    print_extreme("Highest", sample.highest.as_ref());
    print_extreme("Lowest", sample.lowest.as_ref());
}

fn print_extreme(title: &str, row: Option<&SampleRow>) {
    if let Some(row) = row {
        print_section(&format!("{} scored pair", title));
        println!("#{}  Label: {:.2}, score: {:.2}", row.index, row.label, row.score);
        println!("{}\n{}", row.first, row.second);
    }
}

fn print_tfidf(details: &TfidfDetails) {
    print_section("Checking the vocabulary");
    println!(
        "{} terms ({} after preprocessing)",
        details.vocabulary_size, details.preprocessed_vocabulary_size
    );
    println!("{:?}", details.vocabulary_preview);

    if let Some(pair) = &details.first_pair {
        print_section("First pair representation");
        for (row, vector) in [&pair.first, &pair.second].iter().enumerate() {
            for (column, value) in vector.entries() {
                println!("  ({}, {})\t{:.6}", row, column, value);
            }
        }
        println!("Similarity: {:.6}", pair.similarity);
    }
}
