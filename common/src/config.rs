/// Runtime settings collected from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Marker that starts a comment line.
    ///
    /// Resolved input lines are echoed behind it, so the output stays a valid list.
    pub comment: String,
    /// Number of `-v` flags.
    pub verbose: u8,
    /// Number of `-q` flags. Wins over `verbose`.
    pub quiet: u8,
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comment: String::from("#"),
            verbose: 0,
            quiet: 0,
            no_color: false,
        }
    }
}
