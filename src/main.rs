//! tempconv CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: collect the process arguments, hand
//! them to the runner with the standard streams, and exit.
//! For programmatic option scanning, use the library (`optscan`).

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    cli::run(&args, &mut stdout.lock(), &mut stderr.lock())?;
    Ok(())
}
