pub struct Config {
    /// Quiet level. `0` logs everything at info, `1` only warnings, `2+` only errors.
    pub quiet: u8,
    /// Disables coloured output in the terminal formatter.
    pub no_color: bool,
}

impl Config {
    /// Default `tracing` directive derived from the quiet level.
    pub fn log_directive(&self) -> &'static str {
        match self.quiet {
            0 => "info",
            1 => "warn",
            _ => "error",
        }
    }
}
