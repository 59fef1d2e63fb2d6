//! Line classification.
//!
//! A trimmed line is an annotation if it starts with `@spec ` or `@specp `,
//! a definition if it starts with `def ` or `defp `, and irrelevant otherwise.

/// Public annotation prefix.
pub const SPEC_PREFIX: &str = "@spec ";
/// Private annotation prefix.
pub const SPECP_PREFIX: &str = "@specp ";
/// Public definition prefix.
pub const DEF_PREFIX: &str = "def ";
/// Private definition prefix.
pub const DEFP_PREFIX: &str = "defp ";

/// Annotation prefixes, private spelling first.
pub const ANNOTATION_PREFIXES: [&str; 2] = [SPECP_PREFIX, SPEC_PREFIX];
/// Definition prefixes, private spelling first.
pub const DEFINITION_PREFIXES: [&str; 2] = [DEFP_PREFIX, DEF_PREFIX];

/// What a single source line declares, as far as the checker cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `@spec name(...)` or `@specp name(...)`.
    Annotation,
    /// `def name(...)` or `defp name(...)`.
    Definition,
    /// Anything else.
    Irrelevant,
}

impl LineKind {
    /// True for annotations and definitions.
    pub fn is_relevant(self) -> bool {
        !matches!(self, LineKind::Irrelevant)
    }
}

/// Characters that end a line. `\r\n` splits into a line plus an empty
/// one, which is irrelevant and dropped.
pub const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Whitespace plus the ASCII separator controls, trimmed from both ends.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Classify an already-trimmed line.
pub fn classify(line: &str) -> LineKind {
    if ANNOTATION_PREFIXES.iter().any(|p| line.starts_with(p)) {
        LineKind::Annotation
    } else if DEFINITION_PREFIXES.iter().any(|p| line.starts_with(p)) {
        LineKind::Definition
    } else {
        LineKind::Irrelevant
    }
}

/// Split `text` into trimmed lines and keep the annotation and definition
/// lines, in source order, tagged with their kind.
pub fn relevant_lines(text: &str) -> impl Iterator<Item = (LineKind, &str)> {
    text.split(&LINE_BREAKS[..]).map(|line| line.trim_matches(is_trimmable)).filter_map(
        |line| {
            let kind = classify(line);
            kind.is_relevant().then_some((kind, line))
        },
    )
}
