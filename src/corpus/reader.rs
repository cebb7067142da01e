// CSV corpus reader.
//
// Each record carries the year in field 1 and the speech text in field 2.
// Anything after the second field is ignored. The csv crate places no limit
// on field size, so multi-hundred-megabyte transcripts load fine.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::document::Document;
use crate::error::CorpusError;

/// Options controlling how a corpus file is parsed.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Treat the first record as a header row and skip it.
    /// Off by default: historical corpora have no header.
    pub has_headers: bool,
}

/// Read a corpus from a CSV file on disk.
pub fn read_corpus(path: &Path, options: &ReadOptions) -> Result<Vec<Document>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open corpus file {}", path.display()))?;

    let documents = read_corpus_from(BufReader::new(file), options)
        .with_context(|| format!("failed to read corpus file {}", path.display()))?;

    info!(
        path = %path.display(),
        documents = documents.len(),
        "Loaded corpus"
    );
    Ok(documents)
}

/// Read a corpus from any CSV byte source. Ids follow record order.
pub fn read_corpus_from<R: Read>(
    source: R,
    options: &ReadOptions,
) -> Result<Vec<Document>, CorpusError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .flexible(true)
        .from_reader(source);

    let mut documents = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let record_number = index as u64 + 1;

        let year_field = record.get(0).ok_or(CorpusError::MissingField {
            record: record_number,
            field: "year",
        })?;
        let year = parse_year(year_field, record_number)?;

        let text = record.get(1).ok_or(CorpusError::MissingField {
            record: record_number,
            field: "text",
        })?;

        debug!(record = record_number, year, bytes = text.len(), "Read record");
        documents.push(Document::new(documents.len(), year, text));
    }

    Ok(documents)
}

fn parse_year(field: &str, record: u64) -> Result<i32, CorpusError> {
    field
        .trim()
        .parse::<i32>()
        .map_err(|_| CorpusError::MalformedYear {
            record,
            value: field.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_year_and_text() {
        let data = "1960,\"Mr. President, Mr. Speaker\"\n1961,second\n";
        let docs = read_corpus_from(data.as_bytes(), &ReadOptions::default()).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].year, 1960);
        assert_eq!(docs[0].raw_text, "Mr. President, Mr. Speaker");
        assert_eq!(docs[1].id, 1);
    }

    #[test]
    fn test_malformed_year_names_record() {
        let data = "1960,ok\nnineteen,bad\n";
        let err = read_corpus_from(data.as_bytes(), &ReadOptions::default()).unwrap_err();
        match err {
            CorpusError::MalformedYear { record, value } => {
                assert_eq!(record, 2);
                assert_eq!(value, "nineteen");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_text_field() {
        let data = "1960\n";
        let err = read_corpus_from(data.as_bytes(), &ReadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            CorpusError::MissingField { record: 1, field: "text" }
        ));
    }

    #[test]
    fn test_header_row_skipped_when_requested() {
        let data = "year,text\n1999,hello\n";
        let options = ReadOptions { has_headers: true };
        let docs = read_corpus_from(data.as_bytes(), &options).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].year, 1999);
    }
}
