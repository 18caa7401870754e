//! Section markers of the `.guh` format.

/// Section the parser is currently reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Before the first marker.
    #[default]
    None,
    Header,
    Parameter,
    Data,
    /// Everything after `[FOOTER]` is discarded.
    Footer,
}

impl Section {
    const MARKERS: [(&'static str, Section); 4] = [
        ("[HEADER]", Section::Header),
        ("[PARAMETER]", Section::Parameter),
        ("[DATA]", Section::Data),
        ("[FOOTER]", Section::Footer),
    ];

    /// Section switched to by a trimmed line, if it starts with a marker.
    pub fn from_marker(line: &str) -> Option<Self> {
        Self::MARKERS
            .iter()
            .find(|(marker, _)| line.starts_with(marker))
            .map(|(_, section)| *section)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Header => "header",
            Self::Parameter => "parameter",
            Self::Data => "data",
            Self::Footer => "footer",
        }
    }
}
