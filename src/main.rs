//! openspace :: seat a roster of colleagues and print the arrangement
use openspace::{roster, Workspace};
use std::{env, process};
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() == 2 && args[1] == "-v" {
        println!("openspace-{}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    } else if args.len() != 2 {
        eprintln!("usage: openspace <roster-file>");
        process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let names = match roster::from_path(&args[1]) {
        Ok(names) => names,
        Err(e) => {
            eprintln!("unable to load roster from {}: {e}", args[1]);
            process::exit(1);
        }
    };

    let mut workspace = Workspace::default();

    let report = workspace.organize(names);
    if !report.is_complete() {
        eprintln!("unable to seat {} colleagues", report.unseated.len());
    }

    workspace.display();
}
