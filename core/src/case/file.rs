use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::case::model::Case;
use crate::error::CoreResult;

/// Case file name used by the shell, relative to the working directory.
pub const CASE_FILE_NAME: &str = "cases.txt";

// The format is a raw comma join with no quoting or escaping, so both sides
// disable the csv layer's quote handling. Evidence containing a comma splits
// into extra fields on reload; that corruption is accepted behavior.
pub(crate) fn casefile_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(rdr)
}

pub(crate) fn casefile_writer<W: Write>(wtr: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(wtr)
}

/// Reads cases from the flat format, one line per case.
///
/// Lines with fewer than two comma-separated fields are skipped. The first
/// field is the case id; the remaining non-empty fields become evidence in
/// order. Dropping empty fields is what makes the trailing comma written by
/// `write_cases` invisible on reload; the two rules change together.
pub fn read_cases<R: Read>(rdr: R) -> CoreResult<Vec<Case>> {
    let mut cases = Vec::new();
    for result in casefile_reader(rdr).records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) => {
                tracing::debug!(error = %e, "skipping non-utf8 case file line");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if record.len() < 2 {
            tracing::debug!(
                line = record_line(&record),
                "skipping malformed case file line"
            );
            continue;
        }
        let mut case = Case::new(record.get(0).unwrap_or(""));
        for field in record.iter().skip(1) {
            if !field.is_empty() {
                case.add_evidence(field);
            }
        }
        cases.push(case);
    }
    Ok(cases)
}

/// Writes every case as `caseId,evidence1,...,evidenceN,` with a trailing
/// comma (an empty final field) and a newline.
pub fn write_cases<W: Write>(wtr: W, cases: &[Case]) -> CoreResult<()> {
    let mut wtr = casefile_writer(wtr);
    for case in cases {
        let mut fields: Vec<&str> = Vec::with_capacity(case.evidence.len() + 2);
        fields.push(case.case_id.as_str());
        fields.extend(case.evidence.iter().map(String::as_str));
        fields.push("");
        wtr.write_record(&fields)?;
    }
    wtr.flush()?;
    Ok(())
}

/// The exact bytes `write_cases` produces, as a string. Used to check whether
/// a file already sits in the form the next save would rewrite it into.
pub fn render_casefile(cases: &[Case]) -> CoreResult<String> {
    let mut buf = Vec::new();
    write_cases(&mut buf, cases)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn load_cases(path: impl AsRef<Path>) -> CoreResult<Vec<Case>> {
    read_cases(File::open(path.as_ref())?)
}

pub fn save_cases(path: impl AsRef<Path>, cases: &[Case]) -> CoreResult<()> {
    write_cases(File::create(path.as_ref())?, cases)
}

pub(crate) fn record_line(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_single_case_exact_bytes() {
        let mut case = Case::new("C100");
        case.add_evidence("Knife");
        case.add_evidence("Blood");
        let out = render_casefile(&[case]).unwrap();
        assert_eq!(out, "C100,Knife,Blood,\n");
    }

    #[test]
    fn test_write_case_without_evidence() {
        let out = render_casefile(&[Case::new("C1")]).unwrap();
        assert_eq!(out, "C1,\n");
    }

    #[test]
    fn test_read_drops_trailing_empty_field() {
        let cases = read_cases("C100,Knife,Blood,\n".as_bytes()).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].case_id, "C100");
        assert_eq!(cases[0].evidence, vec!["Knife", "Blood"]);
    }

    #[test]
    fn test_read_without_trailing_comma() {
        let cases = read_cases("C100,Knife,Blood\n".as_bytes()).unwrap();
        assert_eq!(cases[0].evidence, vec!["Knife", "Blood"]);
    }

    #[test]
    fn test_read_skips_zero_comma_line() {
        let cases = read_cases("C100\nC200,Rope,\n".as_bytes()).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].case_id, "C200");
    }

    #[test]
    fn test_read_skips_interior_empty_fields() {
        let cases = read_cases("C1,,Knife,,Blood,\n".as_bytes()).unwrap();
        assert_eq!(cases[0].evidence, vec!["Knife", "Blood"]);
    }

    #[test]
    fn test_read_keeps_evidence_free_case() {
        let cases = read_cases("C1,\n".as_bytes()).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].case_id, "C1");
        assert!(cases[0].evidence.is_empty());
    }

    #[test]
    fn test_read_ignores_blank_lines() {
        let cases = read_cases("C1,Knife,\n\nC2,Rope,\n".as_bytes()).unwrap();
        assert_eq!(cases.len(), 2);
    }

    #[test]
    fn test_comma_in_evidence_corrupts_line_on_reload() {
        let mut case = Case::new("C1");
        case.add_evidence("bag, sealed");
        let bytes = render_casefile(&[case]).unwrap();
        assert_eq!(bytes, "C1,bag, sealed,\n");
        let reloaded = read_cases(bytes.as_bytes()).unwrap();
        assert_eq!(reloaded[0].evidence, vec!["bag", " sealed"]);
    }

    #[test]
    fn test_round_trip_preserves_order_and_duplicates() {
        let mut a = Case::new("C1");
        a.add_evidence("Knife");
        let b = Case::new("C2");
        let mut c = Case::new("C1");
        c.add_evidence("Rope");
        let cases = vec![a, b, c];
        let bytes = render_casefile(&cases).unwrap();
        let reloaded = read_cases(bytes.as_bytes()).unwrap();
        assert_eq!(reloaded, cases);
    }
}
