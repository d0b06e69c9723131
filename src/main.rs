use clap::Parser;
use wfval::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
