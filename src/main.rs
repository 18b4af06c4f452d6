//! Command-line front end: incident JSON in, PDF report out.
//!
//! Reads the incident from a file argument or stdin, writes the report
//! next to the working directory unless `-o` says otherwise. `--example`
//! prints a realistic incident document to try the pipeline end to end.

use std::env;
use std::io::Read;
use std::path::PathBuf;
use std::process::exit;

use casefile::IncidentRecord;

const EXAMPLE_INCIDENT: &str = r##"
{
  "caseId": "CASE-2847",
  "alertText": "Duplicate gate-in event received for container CMAU1234567 at terminal BUE-03. The second event arrived 90 seconds after the first with an identical payload and moved the container back to YARD status.",
  "classification": {
    "module": "CNTR",
    "entities": ["CMAU1234567"],
    "alertType": "duplicate_event",
    "severity": "high",
    "urgency": "medium"
  },
  "analysis": {
    "bestSopId": "SOP-112",
    "reasoning": "Identical payloads ninety seconds apart match the duplicate gate-in pattern from the terminal integration, not an operational double move.",
    "problemStatement": "Container CMAU1234567 shows two gate-in events and its status regressed to YARD, which blocks the loading list for voyage 23W.",
    "resolutionSummary": "Suppress the second event, restore the container status from the first event, and reconcile the loading list for voyage 23W. Flag the terminal feed for duplicate monitoring."
  },
  "escalation": {
    "contactName": "Jane Doe",
    "contactEmail": "ops-bridge@example.com",
    "contactPhone": "+1 555 0117"
  }
}
"##;

fn print_usage() {
    println!("casefile: incident report PDF generator");
    println!();
    println!("Usage:");
    println!("  casefile [input.json] [-o output.pdf]");
    println!("  casefile --example > incident.json");
    println!("  cat incident.json | casefile");
    println!();
    println!("Reads an incident JSON document and writes a paginated PDF report.");
    println!("Without an input file the incident is read from stdin. Without -o");
    println!("the report is written to incident_report_<case>.pdf in the current");
    println!("directory.");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return;
    }

    if args.iter().any(|a| a == "--example") {
        println!("{}", EXAMPLE_INCIDENT.trim());
        return;
    }

    let output: Option<PathBuf> = args
        .windows(2)
        .find(|w| w[0] == "-o" || w[0] == "--output")
        .map(|w| PathBuf::from(&w[1]));

    // First non-flag argument that is not the -o value is the input file.
    let mut input_path: Option<&str> = None;
    let mut skip_next = false;
    for arg in &args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-o" || arg == "--output" {
            skip_next = true;
            continue;
        }
        if arg.starts_with('-') {
            eprintln!("✗ Unknown flag: {}", arg);
            exit(1);
        }
        input_path = Some(arg.as_str());
        break;
    }

    let json = match input_path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("✗ Could not read {}: {}", path, e);
                exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("✗ Could not read stdin: {}", e);
                exit(1);
            }
            buffer
        }
    };

    let incident = match IncidentRecord::from_json(&json) {
        Ok(incident) => incident,
        Err(e) => {
            eprintln!("✗ {}", e);
            exit(1);
        }
    };

    match casefile::save_report(&incident, output.as_deref()) {
        Ok(path) => println!("✓ Report written to {}", path.display()),
        Err(e) => {
            eprintln!("✗ {}", e);
            exit(1);
        }
    }
}
