//! Standalone utility: verify that a set of TCP ports is free to bind.

use clap::Parser;
use std::process::ExitCode;
use widget_backend::ports::check_ports;

#[derive(Parser)]
#[command(name = "check-ports", about = "Check that the given TCP ports are available")]
struct Args {
    /// Ports to check, e.g. 8000 3000.
    #[arg(required = true)]
    ports: Vec<u16>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match check_ports(&args.ports) {
        Ok(()) => {
            println!("All specified ports are available.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Port {} is occupied. Please choose another port.", err.port);
            ExitCode::FAILURE
        }
    }
}
