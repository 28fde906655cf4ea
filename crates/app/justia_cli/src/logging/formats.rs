use std::io::{self, Write};

use flexi_logger::DeferredNow;
use log::{Level, Record};

/// Bare message for `info`, coloured `level: message` for everything else.
pub fn cli_format(w: &mut dyn Write, _now: &mut DeferredNow, record: &Record) -> io::Result<()> {
    match record.level() {
        Level::Info => write!(w, "{}", record.args()),
        level => {
            let label = level.as_str().to_lowercase();
            write!(
                w,
                "{}: {}",
                flexi_logger::style(level).paint(label),
                record.args()
            )
        }
    }
}
