use std::io::{self, IsTerminal, Write};
use std::path::Path;

use pdfdeck::{InMemoryDocument, json};

/// Load a source dump with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not
/// found or does not parse as a dump.
pub fn open_dump(file: &Path) -> Result<InMemoryDocument, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    json::load_dump(file).map_err(|e| {
        eprintln!("Error: failed to load source dump: {e}");
        1
    })
}

/// An indeterminate busy line on stderr, shown only when stderr is
/// connected to a TTY. Conversions report no progress percentage, so
/// this is all the feedback there is until the terminal outcome.
pub struct BusyIndicator {
    active: bool,
}

impl BusyIndicator {
    pub fn start(quiet: bool) -> Self {
        let active = !quiet && io::stderr().is_terminal();
        if active {
            eprint!("Converting...");
            let _ = io::stderr().flush();
        }
        Self { active }
    }

    /// Clear the busy line (if shown).
    pub fn finish(&self) {
        if self.active {
            eprint!("\r{}\r", " ".repeat(20));
            let _ = io::stderr().flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_dump_file_not_found() {
        let result = open_dump(Path::new("/nonexistent/pages.json"));
        assert_eq!(result.unwrap_err(), 1);
    }

    #[test]
    fn busy_indicator_quiet_mode() {
        let busy = BusyIndicator::start(true);
        assert!(!busy.active);
        busy.finish();
    }
}
