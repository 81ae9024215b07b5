use std::io::Write;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use optscan::temperature::{celsius_to_fahrenheit, fahrenheit_to_celsius};
use optscan::{Fetch, OptionTable, parse_all, render_help};

use super::args::{self, CELSIUS, DEFAULT_PROGRAM, FAHRENHEIT, HELP, LOG};
use super::errors::AppError;

fn init_logging() {
    // A second subscriber (e.g. `-l -l`) is not an error worth reporting.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("optscan=trace,tempconv=debug"))
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_temperature(text: &str) -> Result<f64, AppError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| AppError::InvalidTemperature {
            value: text.to_string(),
        })
}

fn convert(
    identifier: char,
    text: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), AppError> {
    let input = match parse_temperature(text) {
        Ok(input) => input,
        Err(e) => {
            warn!("Rejected temperature value: {:?}", text);
            writeln!(err, "Error: {}", e)?;
            return Ok(());
        }
    };

    if identifier == FAHRENHEIT {
        let celsius = fahrenheit_to_celsius(input);
        debug!("{} F -> {} C", input, celsius);
        writeln!(out, "{:.1} Fahrenheit is {:.1} Celsius", input, celsius)?;
    } else {
        let fahrenheit = celsius_to_fahrenheit(input);
        debug!("{} C -> {} F", input, fahrenheit);
        writeln!(out, "{:.1} Celsius is {:.1} Fahrenheit", input, fahrenheit)?;
    }
    Ok(())
}

fn report_anomaly(
    fetch: &Fetch<'_>,
    table: &OptionTable,
    program: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), AppError> {
    match fetch {
        Fetch::Unknown { spelling } => {
            warn!("Unknown option {}", spelling);
            writeln!(err, "Error: Unknown option '{}'", spelling)?;
            render_help(table, program, out)?;
        }
        Fetch::MissingValue { spelling, .. } => {
            warn!("Option {} is missing its value", spelling);
            writeln!(err, "Error: Option '{}' requires a value.", spelling)?;
        }
        Fetch::UnexpectedValue { spelling, value, .. } => {
            warn!("Option {} was given value {:?}", spelling, value);
            writeln!(err, "Error: Option '{}' does not take a value.", spelling)?;
        }
        Fetch::Matched { .. } | Fetch::EndOfInput => {}
    }
    Ok(())
}

/// Scans `argv` (program name first) and acts on each option in order.
///
/// Option anomalies are printed and skipped; only failing writes are errors.
pub fn run<S: AsRef<str>>(
    argv: &[S],
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), AppError> {
    let table = args::options();
    // Look for `-l` with no subscriber installed, so the real scan below is logged.
    if parse_all(&table, argv).contains(LOG) {
        init_logging();
    }

    let report = parse_all(&table, argv);
    let program = argv
        .first()
        .map(|arg| arg.as_ref())
        .unwrap_or(DEFAULT_PROGRAM);

    info!("Processing {} option(s)", report.fetches.len());

    for fetch in &report.fetches {
        match *fetch {
            Fetch::Matched {
                identifier, value, ..
            } if identifier == FAHRENHEIT || identifier == CELSIUS => {
                // Value-required options only match with a value.
                if let Some(text) = value {
                    convert(identifier, text, out, err)?;
                }
            }
            Fetch::Matched { identifier, .. } if identifier == HELP => {
                render_help(&table, program, out)?;
            }
            Fetch::Matched { .. } | Fetch::EndOfInput => {}
            ref anomaly => report_anomaly(anomaly, &table, program, out, err)?,
        }
    }

    for positional in report.positionals {
        warn!("Ignoring positional argument: {:?}", positional.as_ref());
    }

    out.flush()?;
    Ok(())
}
