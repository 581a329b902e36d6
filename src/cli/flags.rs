#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub symbols: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}
