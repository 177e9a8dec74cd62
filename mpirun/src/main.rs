//! `mpirun`: composes the launcher environment and hands off to PRRTE.

use std::process::ExitCode;

fn main() -> ExitCode {
    mpirun::run_cli()
}
