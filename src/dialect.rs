use std::fmt;

/// Marker substring that selects the C++ dialect. Matched exactly,
/// case-sensitive, anywhere on a line including comments.
const ALLOCATION_MARKER: &str = "malloc";

/// Output language variant.
///
/// Decided once per run before translation and never recomputed per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    C,
    Cpp,
}

impl Dialect {
    /// Detect the output dialect by scanning the raw source text.
    #[tracing::instrument]
    pub fn detect(input: &str) -> Self {
        if input.lines().any(|line| line.contains(ALLOCATION_MARKER)) {
            Dialect::Cpp
        } else {
            Dialect::C
        }
    }

    /// File extension of the generated output file.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Dialect::C => "c",
            Dialect::Cpp => "cpp",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::C => write!(f, "C"),
            Dialect::Cpp => write!(f, "C++"),
        }
    }
}
