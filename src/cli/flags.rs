#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub quiet: bool,
    pub entropy: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}
