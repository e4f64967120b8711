use casetrack_core::case::model::Case;
use casetrack_core::case::repository::CaseRepository;
use casetrack_core::error::CoreError;

#[test]
fn open_creates_a_missing_case_file_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("cases.txt");

    let repo = CaseRepository::open(&path);
    assert!(repo.cases().is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn mutations_survive_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.txt");

    let mut repo = CaseRepository::open(&path);
    let mut case = Case::new("C100");
    case.add_evidence("Knife");
    repo.add_case(case).unwrap();
    repo.add_evidence("C100", "Blood").unwrap();

    let reopened = CaseRepository::open(&path);
    assert_eq!(reopened.cases().len(), 1);
    assert_eq!(reopened.cases()[0].case_id, "C100");
    assert_eq!(reopened.cases()[0].evidence, vec!["Knife", "Blood"]);
}

#[test]
fn find_by_id_returns_the_first_of_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.txt");

    let mut repo = CaseRepository::open(&path);
    let mut first = Case::new("C1");
    first.add_evidence("Knife");
    repo.add_case(first).unwrap();
    let mut second = Case::new("C1");
    second.add_evidence("Rope");
    repo.add_case(second).unwrap();

    assert_eq!(repo.find_by_id("C1").unwrap().evidence, vec!["Knife"]);
    assert!(repo.find_by_id("C9").is_none());
}

#[test]
fn add_evidence_goes_to_the_first_matching_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.txt");

    let mut repo = CaseRepository::open(&path);
    repo.add_case(Case::new("C1")).unwrap();
    repo.add_case(Case::new("C1")).unwrap();
    repo.add_evidence("C1", "Knife").unwrap();

    assert_eq!(repo.cases()[0].evidence, vec!["Knife"]);
    assert!(repo.cases()[1].evidence.is_empty());
}

#[test]
fn delete_case_removes_only_the_first_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.txt");

    let mut repo = CaseRepository::open(&path);
    let mut first = Case::new("C1");
    first.add_evidence("Knife");
    repo.add_case(first).unwrap();
    let mut second = Case::new("C1");
    second.add_evidence("Rope");
    repo.add_case(second).unwrap();

    repo.delete_case("C1").unwrap();
    assert_eq!(repo.cases().len(), 1);
    assert_eq!(repo.find_by_id("C1").unwrap().evidence, vec!["Rope"]);

    let reopened = CaseRepository::open(&path);
    assert_eq!(reopened.cases().len(), 1);
}

#[test]
fn empty_case_id_is_rejected_and_the_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.txt");

    let mut repo = CaseRepository::open(&path);
    repo.add_case(Case::new("C1")).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let err = repo.add_case(Case::new("")).unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));
    assert_eq!(repo.cases().len(), 1);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn empty_evidence_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.txt");

    let mut repo = CaseRepository::open(&path);
    repo.add_case(Case::new("C1")).unwrap();

    let err = repo.add_evidence("C1", "").unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));
    assert!(repo.cases()[0].evidence.is_empty());
}

#[test]
fn evidence_for_an_unknown_case_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.txt");

    let mut repo = CaseRepository::open(&path);
    let err = repo.add_evidence("C404", "Knife").unwrap_err();
    assert!(matches!(err, CoreError::CaseNotFound(_)));
}

#[test]
fn deleting_an_unknown_case_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.txt");

    let mut repo = CaseRepository::open(&path);
    repo.add_case(Case::new("C1")).unwrap();

    let err = repo.delete_case("C404").unwrap_err();
    assert!(matches!(err, CoreError::CaseNotFound(_)));
    assert_eq!(repo.cases().len(), 1);
}

#[test]
fn unreadable_case_file_degrades_to_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.txt");
    std::fs::create_dir(&path).unwrap();

    let repo = CaseRepository::open(&path);
    assert!(repo.cases().is_empty());
}
