use crate::case::model::Case;

/// Text listing of every case, in repository order.
pub fn render_case_list(cases: &[Case]) -> String {
    let mut out = String::from("List of Cases:\n");
    for case in cases {
        out.push_str(&format!("Case ID: {}\n", case.case_id));
        out.push_str(&format!("Evidence: {}\n\n", case.evidence.join(", ")));
    }
    out
}

pub fn render_case_details(case: &Case) -> String {
    format!(
        "Case Details for Case ID {}:\nEvidence: {}\n\n",
        case.case_id,
        case.evidence.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_rendering() {
        let mut a = Case::new("C100");
        a.add_evidence("Knife");
        a.add_evidence("Blood");
        let b = Case::new("C200");
        let out = render_case_list(&[a, b]);
        assert_eq!(
            out,
            "List of Cases:\nCase ID: C100\nEvidence: Knife, Blood\n\nCase ID: C200\nEvidence: \n\n"
        );
    }

    #[test]
    fn test_details_rendering() {
        let mut case = Case::new("C100");
        case.add_evidence("Knife");
        let out = render_case_details(&case);
        assert_eq!(out, "Case Details for Case ID C100:\nEvidence: Knife\n\n");
    }
}
