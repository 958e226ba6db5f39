// cli/constants.rs: program identity strings and the stderr display macro.
//
// The display level is not a global here: the macro takes the
// `DisplayLevel` in force for the current operation as its first argument.

// ── Identity ──────────────────────────────────────────────────────────────────
pub const COMPRESSOR_NAME: &str = "cchf";

/// Banner shown at display level 3 and above.
/// Caller substitutes: compressor name, version string, pointer-width bits, threading mode.
pub const WELCOME_MESSAGE_FMT: &str = "*** {} v{} {}-bit {} ***\n";

// ── Threading-mode label ──────────────────────────────────────────────────────
#[cfg(feature = "multithread")]
pub const IO_MT: &str = "multithread";
#[cfg(not(feature = "multithread"))]
pub const IO_MT: &str = "single-thread";

/// Render the welcome banner.
pub fn welcome_message() -> String {
    WELCOME_MESSAGE_FMT
        .replacen("{}", COMPRESSOR_NAME, 1)
        .replacen("{}", crate::version_string(), 1)
        .replacen("{}", &(usize::BITS).to_string(), 1)
        .replacen("{}", IO_MT, 1)
}

// ── Display macro ─────────────────────────────────────────────────────────────

/// Print to stderr when the given [`DisplayLevel`](crate::io::DisplayLevel)
/// admits `level`.
#[macro_export]
macro_rules! displaylevel {
    ($disp:expr, $level:expr, $($arg:tt)*) => {
        if $disp.enabled($level) {
            eprint!($($arg)*);
        }
    };
}
