use casetrack_core::validator::CasefileValidator;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: casefile_check <path/to/cases.txt>");
        std::process::exit(2);
    }
    let path = std::path::Path::new(&args[1]);

    let v = CasefileValidator::new();
    match v.validate_file(path) {
        Ok(summary) => {
            println!("{}", serde_json::to_string_pretty(&summary).unwrap());
            if summary.overall == "PASS" {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("validator error: {}", e);
            std::process::exit(1);
        }
    }
}
