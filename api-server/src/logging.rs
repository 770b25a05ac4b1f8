use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::str::FromStr;

/// Install the terminal logger. Unknown level names fall back to `info`.
pub fn init(level: &str) -> Result<(), SetLoggerError> {
    let (filter, known) = match LevelFilter::from_str(level) {
        Ok(filter) => (filter, true),
        Err(_) => (LevelFilter::Info, false),
    };

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_time_format_rfc3339()
        .build();

    TermLogger::init(filter, config, TerminalMode::Mixed, ColorChoice::Auto)?;

    if !known {
        log::warn!("Unknown log level '{}', using info", level);
    }
    Ok(())
}
