#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub saved: bool,
    pub save: bool,
    pub board: bool,
    pub random: bool,
    pub plain: bool,
    pub interactive: bool,
    pub entropy: Option<f64>,
    pub number: Option<usize>,
    pub symbols: Option<String>,
}

impl CliFlags {
    /// True when any flag changes what gets generated or how it is shown.
    pub fn has_explicit_args(&self) -> bool {
        self.entropy.is_some()
            || self.number.is_some()
            || self.symbols.is_some()
            || self.board
            || self.random
            || self.plain
            || self.interactive
    }
}
