pub mod formats;

use flexi_logger::Logger;

use crate::Error;

/// Used when `RUST_LOG` is unset.
pub const DEFAULT_SPEC: &str = "info";

/// Diagnostics go to stderr so that command output on stdout stays pipeable.
pub fn init() -> Result<(), Error> {
    Logger::try_with_env_or_str(DEFAULT_SPEC)?
        .format(formats::cli_format)
        .log_to_stderr()
        .start()?;

    Ok(())
}
