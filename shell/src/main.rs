use std::io::{self, BufRead, Write};

use casetrack_core::auth::provider::FixedCredentials;
use casetrack_core::auth::session::CredentialGate;
use casetrack_core::case::file::CASE_FILE_NAME;
use casetrack_core::case::repository::CaseRepository;
use casetrack_core::error::CoreError;
use casetrack_core::manager::CaseManager;
use casetrack_core::policy::DeleteBlockReason;
use casetrack_core::render::{render_case_details, render_case_list};

fn main() {
    init_tracing();

    let repo = CaseRepository::open(CASE_FILE_NAME);
    let gate = CredentialGate::new(Box::new(FixedCredentials::default()));
    let mut manager = CaseManager::new(gate, repo);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    if !login_loop(&mut manager, &mut input) {
        return;
    }

    println!("Forensic Management System");
    println!("Type 'help' for commands.");
    command_loop(&mut manager, &mut input);
}

// Diagnostics go to stderr; stdout is reserved for the user interface.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("CASETRACK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

// Unlimited retries. EOF quits before the command loop is reached.
fn login_loop(manager: &mut CaseManager, input: &mut impl BufRead) -> bool {
    loop {
        let username = match prompt("Username: ", input) {
            Some(v) => v,
            None => return false,
        };
        let password = match prompt("Password: ", input) {
            Some(v) => v,
            None => return false,
        };
        match manager.login(&username, &password) {
            Ok(user) => {
                println!("Logged in as {}", user.username);
                return true;
            }
            Err(_) => println!("Invalid login credentials"),
        }
    }
}

fn command_loop(manager: &mut CaseManager, input: &mut impl BufRead) {
    loop {
        let line = match prompt("> ", input) {
            Some(line) => line,
            None => return,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, arg) = match line.split_once(' ') {
            Some((c, rest)) => (c, rest.trim()),
            None => (line, ""),
        };
        match command {
            "list" => print!("{}", render_case_list(manager.cases())),
            "details" => details(manager, arg),
            "new" => new_case(manager, input),
            "evidence" => add_evidence(manager, arg, input),
            "delete" => delete_case(manager, arg, input),
            "analyze" => analyze(manager, arg),
            "help" => help(),
            "exit" => return,
            other => println!("Unknown command: {} (try 'help')", other),
        }
    }
}

fn details(manager: &CaseManager, case_id: &str) {
    if case_id.is_empty() {
        println!("Please enter a Case ID");
        return;
    }
    match manager.case_details(case_id) {
        Ok(case) => print!("{}", render_case_details(case)),
        Err(e) => report(e),
    }
}

fn new_case(manager: &mut CaseManager, input: &mut impl BufRead) {
    let case_id = match prompt("Enter new Case ID: ", input) {
        Some(v) => v,
        None => return,
    };
    if case_id.is_empty() {
        println!("Invalid Case ID");
        return;
    }
    if let Err(e) = manager.create_case(&case_id) {
        report(e);
        return;
    }
    println!("New Case added. Case ID: {}", case_id);

    // Creating a case prompts for one initial evidence item. The case stays
    // even when that prompt is dismissed or left empty.
    let item = match prompt(&format!("Enter evidence for Case ID {}: ", case_id), input) {
        Some(v) => v,
        None => return,
    };
    if item.is_empty() {
        println!("Invalid evidence");
        return;
    }
    match manager.add_evidence(&case_id, &item) {
        Ok(()) => println!("Evidence added to Case ID {}: {}", case_id, item),
        Err(e) => report(e),
    }
}

fn add_evidence(manager: &mut CaseManager, case_id: &str, input: &mut impl BufRead) {
    if case_id.is_empty() {
        println!("Please enter a Case ID");
        return;
    }
    let item = match prompt(&format!("Enter evidence for Case ID {}: ", case_id), input) {
        Some(v) => v,
        None => return,
    };
    if item.is_empty() {
        println!("Invalid evidence");
        return;
    }
    match manager.add_evidence(case_id, &item) {
        Ok(()) => println!("Evidence added to Case ID {}: {}", case_id, item),
        Err(e) => report(e),
    }
}

fn delete_case(manager: &mut CaseManager, case_id: &str, input: &mut impl BufRead) {
    if case_id.is_empty() {
        println!("Please enter a Case ID");
        return;
    }
    let entered = match prompt("Enter deletion password: ", input) {
        Some(v) => v,
        None => return,
    };
    match manager.delete_case(case_id, &entered) {
        Ok(()) => println!("Case ID {} deleted.", case_id),
        Err(e) => report(e),
    }
}

fn analyze(manager: &mut CaseManager, case_id: &str) {
    if case_id.is_empty() {
        println!("Please enter a Case ID");
        return;
    }
    match manager.analyze_case(case_id) {
        Ok(output) => {
            println!("Analysis Result for Case ID {}:", case_id);
            println!("{}", output.summary());
        }
        Err(e) => report(e),
    }
}

// Core errors surface at the command that triggered them, one fixed line per
// error. Nothing propagates out of the loop.
fn report(err: CoreError) {
    match err {
        CoreError::CaseNotFound(_) => println!("Case ID not found"),
        CoreError::LoginFailed => println!("Invalid login credentials"),
        CoreError::DeletionBlocked(DeleteBlockReason::NOT_AUTHENTICATED) => {
            println!("Login required")
        }
        CoreError::DeletionBlocked(DeleteBlockReason::NOT_ADMIN) => {
            println!("Only admin can delete cases")
        }
        CoreError::DeletionBlocked(DeleteBlockReason::WRONG_PASSWORD) => {
            println!("Incorrect password")
        }
        other => println!("{}", other),
    }
}

fn help() {
    println!("Commands:");
    println!("  list            List every case");
    println!("  details <id>    Show one case");
    println!("  new             Create a case (prompts for id and evidence)");
    println!("  evidence <id>   Add an evidence item to a case");
    println!("  delete <id>     Delete a case (admin only, prompts for password)");
    println!("  analyze <id>    Run the forensic analysis stub");
    println!("  exit            Quit");
}

fn prompt(label: &str, input: &mut impl BufRead) -> Option<String> {
    print!("{}", label);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches('\n').trim_end_matches('\r').to_string()),
        Err(e) => {
            eprintln!("input error: {}", e);
            None
        }
    }
}
