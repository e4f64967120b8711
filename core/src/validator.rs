use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::case::file;
use crate::case::model::Case;
use crate::error::CoreResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub check_id: String,
    pub severity: String,
    pub result: String, // PASS|FAIL
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CasefileSummary {
    pub path: String,
    pub case_count: usize,
    pub overall: String, // PASS|FAIL
    pub checks: Vec<CheckResult>,
}

impl CasefileSummary {
    pub fn result_for_check(&self, check_id: &str) -> (String, String) {
        for c in &self.checks {
            if c.check_id == check_id {
                return (c.result.clone(), c.message.clone());
            }
        }
        (
            "FAIL".to_string(),
            format!("missing check result for {}", check_id),
        )
    }
}

/// Offline diagnostic for a case file. The loader tolerates malformed lines,
/// empty ids, duplicate ids, and drifted bytes silently; the validator runs a
/// fixed checklist that surfaces each of those hazards. Overall is FAIL iff a
/// BLOCKER check fails. The file failing to open at all is a hard error.
#[derive(Default)]
pub struct CasefileValidator;

impl CasefileValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_file(&self, casefile: &Path) -> CoreResult<CasefileSummary> {
        let raw = fs::read_to_string(casefile)?;
        let cases = file::read_cases(raw.as_bytes())?;
        let scan = scan_lines(&raw);

        let mut checks_out: Vec<CheckResult> = Vec::new();

        // CHK.CASEFILE.LINE_FORMAT
        checks_out.push(check_line_format(&scan));

        // CHK.CASEFILE.CASE_ID_PRESENT
        checks_out.push(check_case_id_present(&scan));

        // CHK.CASEFILE.UNIQUE_CASE_IDS
        checks_out.push(check_unique_case_ids(&cases));

        // CHK.CASEFILE.CANONICAL_FORM (major)
        checks_out.push(check_canonical_form(&raw, &cases)?);

        let overall = if checks_out
            .iter()
            .any(|c| c.severity == "BLOCKER" && c.result != "PASS")
        {
            "FAIL"
        } else {
            "PASS"
        };

        Ok(CasefileSummary {
            path: casefile.display().to_string(),
            case_count: cases.len(),
            overall: overall.to_string(),
            checks: checks_out,
        })
    }
}

struct LineScan {
    // 1-based line numbers the loader would skip (fewer than 2 fields).
    malformed_lines: Vec<u64>,
    // 1-based line numbers whose first field is empty.
    empty_id_lines: Vec<u64>,
}

fn scan_lines(raw: &str) -> LineScan {
    let mut malformed_lines = Vec::new();
    let mut empty_id_lines = Vec::new();
    for result in file::casefile_reader(raw.as_bytes()).records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                malformed_lines.push(e.position().map(|p| p.line()).unwrap_or(0));
                continue;
            }
        };
        let line = file::record_line(&record);
        if record.len() < 2 {
            malformed_lines.push(line);
        } else if record.get(0).unwrap_or("").is_empty() {
            empty_id_lines.push(line);
        }
    }
    LineScan {
        malformed_lines,
        empty_id_lines,
    }
}

fn check_line_format(scan: &LineScan) -> CheckResult {
    if scan.malformed_lines.is_empty() {
        pass("CHK.CASEFILE.LINE_FORMAT")
    } else {
        fail(
            "CHK.CASEFILE.LINE_FORMAT",
            format!(
                "lines skipped on load (fewer than 2 fields): {}",
                join_lines(&scan.malformed_lines)
            ),
        )
    }
}

fn check_case_id_present(scan: &LineScan) -> CheckResult {
    if scan.empty_id_lines.is_empty() {
        pass("CHK.CASEFILE.CASE_ID_PRESENT")
    } else {
        fail(
            "CHK.CASEFILE.CASE_ID_PRESENT",
            format!(
                "lines with an empty case id: {}",
                join_lines(&scan.empty_id_lines)
            ),
        )
    }
}

fn check_unique_case_ids(cases: &[Case]) -> CheckResult {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for case in cases {
        *counts.entry(case.case_id.as_str()).or_default() += 1;
    }
    let duplicates: BTreeSet<&str> = counts
        .iter()
        .filter(|(_, n)| **n > 1)
        .map(|(id, _)| *id)
        .collect();
    if duplicates.is_empty() {
        pass("CHK.CASEFILE.UNIQUE_CASE_IDS")
    } else {
        let ids: Vec<&str> = duplicates.into_iter().collect();
        fail(
            "CHK.CASEFILE.UNIQUE_CASE_IDS",
            format!(
                "duplicate case ids (lookups return only the first): {}",
                ids.join(", ")
            ),
        )
    }
}

// Non-canonical bytes are anything the next save would silently rewrite:
// missing trailing commas, interior empty fields, skipped lines, CRLF endings.
fn check_canonical_form(raw: &str, cases: &[Case]) -> CoreResult<CheckResult> {
    let canonical = file::render_casefile(cases)?;
    if raw == canonical {
        return Ok(CheckResult {
            check_id: "CHK.CASEFILE.CANONICAL_FORM".to_string(),
            severity: "MAJOR".to_string(),
            result: "PASS".to_string(),
            message: "ok".to_string(),
        });
    }
    Ok(CheckResult {
        check_id: "CHK.CASEFILE.CANONICAL_FORM".to_string(),
        severity: "MAJOR".to_string(),
        result: "FAIL".to_string(),
        message: format!(
            "file differs from the canonical save format starting at line {}; the next save rewrites it",
            first_differing_line(raw, &canonical)
        ),
    })
}

fn first_differing_line(actual: &str, expected: &str) -> usize {
    let mut a = actual.lines();
    let mut b = expected.lines();
    let mut line = 1;
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) if x == y => line += 1,
            (None, None) => return line,
            _ => return line,
        }
    }
}

fn join_lines(lines: &[u64]) -> String {
    lines
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn pass(check_id: &str) -> CheckResult {
    CheckResult {
        check_id: check_id.to_string(),
        severity: "BLOCKER".to_string(),
        result: "PASS".to_string(),
        message: "ok".to_string(),
    }
}

fn fail(check_id: &str, msg: String) -> CheckResult {
    CheckResult {
        check_id: check_id.to_string(),
        severity: "BLOCKER".to_string(),
        result: "FAIL".to_string(),
        message: msg,
    }
}
