// Colored terminal output for reports and corpus statistics.
//
// Used when the report goes to an interactive stdout. Files and pipes get
// the plain text layout from `output::text` instead.

use colored::Colorize;

use crate::pipeline::{CorpusStats, DecadeTerms, DesignatedTerms, RankedTerm, Report};

const BAR_WIDTH: usize = 20;

/// Display the full report: designated year, then every decade.
pub fn display_report(report: &Report) {
    println!(
        "\n{}",
        format!(
            "=== Top {} terms ({} documents, {} distinct terms) ===",
            report.top_k, report.document_count, report.vocabulary_size
        )
        .bold()
    );

    display_designated(&report.designated);
    for decade in &report.decades {
        display_decade(decade);
    }
}

/// Display the section for a single designated year.
pub fn display_designated(section: &DesignatedTerms) {
    println!("\n{}", format!("--- {} ---", section.year).bold());
    match section.document {
        Some(id) => println!("  {}", format!("document #{id}").dimmed()),
        None => {
            println!(
                "  {}",
                format!("No document for year {}", section.year).yellow()
            );
            return;
        }
    }
    display_terms(&section.terms);
}

/// Display the section for one decade.
pub fn display_decade(section: &DecadeTerms) {
    println!(
        "\n{} {}",
        format!("--- {} ---", section.decade).bold(),
        format!("({} documents)", section.document_count).dimmed()
    );
    if section.terms.is_empty() {
        println!("  {}", "no documents in this decade".dimmed());
        return;
    }
    display_terms(&section.terms);
}

fn display_terms(terms: &[RankedTerm]) {
    let top = terms.first().map(|t| t.weight).unwrap_or(0.0);

    for (i, ranked) in terms.iter().enumerate() {
        // Bars are relative to the heaviest term in the section
        let filled = if top > 0.0 {
            ((ranked.weight / top) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled.min(BAR_WIDTH)),
            " ".repeat(BAR_WIDTH.saturating_sub(filled))
        );

        println!(
            "  {:>2}. {:<24} {} {:.6}",
            i + 1,
            ranked.term.bold(),
            bar.bright_blue(),
            ranked.weight
        );
    }
}

/// Display corpus statistics.
pub fn display_stats(stats: &CorpusStats) {
    println!("\n{}", "=== Corpus ===".bold());
    println!("Documents: {}", stats.document_count);
    if stats.empty_documents > 0 {
        println!("  {} empty", stats.empty_documents.to_string().yellow());
    }
    match (stats.first_year, stats.last_year) {
        (Some(first), Some(last)) => println!("Years: {first}–{last}"),
        _ => println!("Years: none"),
    }
    println!("Tokens: {}", stats.token_count);
    println!("Distinct terms: {}", stats.vocabulary_size);

    println!("\nDocuments per decade:");
    for (decade, count) in &stats.decade_counts {
        let line = format!("  {:<8} {:>4}", decade.to_string(), count);
        if *count == 0 {
            println!("{}", line.dimmed());
        } else {
            println!("{line}");
        }
    }
    if stats.unbucketed_documents > 0 {
        println!(
            "  {}",
            format!(
                "{} documents outside the recognized decades",
                stats.unbucketed_documents
            )
            .dimmed()
        );
    }
}
