// 🛑 Process Guards - helpers that may end the process
//
// Both write their line to stderr and flush before terminating, so a parent
// process watching the child can match on the message.

use std::io::Write;

/// Exit status used when `--help` is requested
pub const HELP_EXIT_CODE: i32 = 2;

/// Line printed for `--help`
pub const USAGE: &str = "Usage: bank-tool [--help | statement | guard <message>]";

/// Abort the process with `message` on stderr when `condition` holds.
///
/// Under a true condition this never returns: it is an abort, not an error
/// a caller could recover from. Under a false condition it does nothing.
pub fn fatal_guard(condition: bool, message: &str) {
    if !condition {
        return;
    }

    tracing::debug!("guard tripped, aborting");

    let mut stderr = std::io::stderr().lock();
    // Nothing useful to do with a failed write right before abort
    let _ = writeln!(stderr, "{}", message);
    let _ = stderr.flush();

    std::process::abort();
}

/// Tiny argument handler: `--help` prints usage and exits with status 2,
/// anything else returns 0.
pub fn maybe_exit(arg: &str) -> i32 {
    if arg == "--help" {
        tracing::debug!("help requested, exiting with {}", HELP_EXIT_CODE);

        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", USAGE);
        let _ = stderr.flush();

        std::process::exit(HELP_EXIT_CODE);
    }

    0
}
