use optscan::{OptionDescriptor, OptionTable};

pub const FAHRENHEIT: char = 'f';
pub const CELSIUS: char = 'c';
pub const LOG: char = 'l';
pub const HELP: char = 'h';

/// Program name used in the usage line when argv[0] is unavailable.
pub const DEFAULT_PROGRAM: &str = "tempconv";

pub fn options() -> OptionTable {
    OptionTable::new(vec![
        OptionDescriptor::new(FAHRENHEIT, "Convert TEMP from Fahrenheit to Celsius")
            .short('f')
            .long("fahrenheit")
            .value("TEMP"),
        OptionDescriptor::new(CELSIUS, "Convert TEMP from Celsius to Fahrenheit")
            .short('c')
            .long("celsius")
            .value("TEMP"),
        OptionDescriptor::new(LOG, "Enable debug logging on stderr")
            .short('l')
            .long("log"),
        OptionDescriptor::new(HELP, "Show this help message")
            .short('h')
            .long("help"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_valid() {
        options().validate().unwrap();
    }
}
