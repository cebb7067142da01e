// Plain-text report in the banner layout of the historical output.txt.
//
// Each section is a three-line banner followed by one `term weight` line per
// ranked term (term left-aligned in 20 columns) and two blank lines.

use std::io::Write;

use anyhow::Result;

use crate::pipeline::{DecadeTerms, DesignatedTerms, RankedTerm, Report};

const YEAR_BANNER: &str = "#####################################";
const DECADE_BANNER: &str = "########################################################";

pub fn write_report<W: Write>(report: &Report, mut out: W) -> Result<()> {
    write_designated(&report.designated, report.top_k, &mut out)?;
    for decade in &report.decades {
        write_decade(decade, report.top_k, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn write_designated<W: Write>(
    section: &DesignatedTerms,
    top_k: usize,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{YEAR_BANNER}")?;
    writeln!(out, "######### Top {} Terms in {} ######", top_k, section.year)?;
    writeln!(out, "{YEAR_BANNER}")?;
    if section.is_missing() {
        writeln!(out, "(no document for year {})", section.year)?;
    }
    write_terms(&section.terms, out)?;
    write!(out, "\n\n")?;
    Ok(())
}

fn write_decade<W: Write>(section: &DecadeTerms, top_k: usize, out: &mut W) -> Result<()> {
    writeln!(out, "{DECADE_BANNER}")?;
    writeln!(
        out,
        "######### Top {} Terms in decade starting {} #########",
        top_k,
        section.decade.start_year()
    )?;
    writeln!(out, "{DECADE_BANNER}")?;
    write_terms(&section.terms, out)?;
    write!(out, "\n\n")?;
    Ok(())
}

fn write_terms<W: Write>(terms: &[RankedTerm], out: &mut W) -> Result<()> {
    for ranked in terms {
        writeln!(out, "{:<20} {} ", ranked.term, ranked.weight)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decades::Decade;

    fn report() -> Report {
        Report {
            document_count: 2,
            vocabulary_size: 3,
            top_k: 20,
            designated: DesignatedTerms {
                year: 1960,
                document: Some(0),
                terms: vec![RankedTerm {
                    term: "space".to_string(),
                    weight: 0.5,
                }],
            },
            decades: vec![DecadeTerms {
                decade: Decade::of_year(1960),
                document_count: 1,
                terms: vec![],
            }],
        }
    }

    #[test]
    fn test_layout() {
        let mut buf = Vec::new();
        write_report(&report(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("######### Top 20 Terms in 1960 ######\n"));
        assert!(text.contains(&format!("{:<20} 0.5 \n", "space")));
        assert!(text.contains("######### Top 20 Terms in decade starting 1960 #########\n"));
    }

    #[test]
    fn test_missing_document_is_stated() {
        let mut r = report();
        r.designated.document = None;
        r.designated.terms.clear();
        let mut buf = Vec::new();
        write_report(&r, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("(no document for year 1960)"));
    }
}
