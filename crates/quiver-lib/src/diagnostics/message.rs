use std::ops::Range;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// When two diagnostics start at the same position, the higher-priority one
/// suppresses the lower-priority one so a single typo does not cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Cascade into everything after them
    UnclosedGroup,
    UnclosedPosTag,
    UnclosedString,

    // User omitted something required
    ExpectedPattern,
    ExpectedCaptureName,

    // User wrote something that doesn't belong
    EmptyGroup,
    EmptyPosTag,
    UnexpectedGroupClose,
    UnexpectedToken,
    CaptureWithoutTarget,
    NestingTooDeep,

    // Convention violations
    CaptureNameInvalid,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Lower discriminant wins.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::EmptyGroup => Some("use `_` to match any single token"),
            Self::CaptureWithoutTarget => Some("captures follow the pattern they name: `<NN>+ @name`"),
            Self::CaptureNameInvalid => Some("capture names are lowercase snake_case, e.g. `@team_name`"),
            Self::UnexpectedToken => {
                Some("lemmas are bare words, tags are `<NN>`, surface words are \"quoted\"")
            }
            _ => None,
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedGroup => "missing closing `)`",
            Self::UnclosedPosTag => "missing closing `>` for tag",
            Self::UnclosedString => "unterminated string",

            Self::ExpectedPattern => "expected a pattern",
            Self::ExpectedCaptureName => "expected capture name after `@`",

            Self::EmptyGroup => "empty `()` is not allowed",
            Self::EmptyPosTag => "empty tag `<>`",
            Self::UnexpectedGroupClose => "unmatched `)`",
            Self::UnexpectedToken => "unexpected token",
            Self::CaptureWithoutTarget => "capture has no target",
            Self::NestingTooDeep => "pattern nested too deeply",

            Self::CaptureNameInvalid => "invalid capture name",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnexpectedToken => "unexpected `{}`".to_string(),
            Self::CaptureNameInvalid => "`@{}` is not a valid capture name".to_string(),
            Self::UnclosedGroup => format!("{}; {{}}", self.fallback_message()),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// `None` → fallback message, `Some(detail)` → custom template with detail.
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: Range<usize>,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Byte range in the pattern source, underlined in output.
    pub(crate) range: Range<usize>,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: Range<usize>, message: impl Into<String>) -> Self {
        let hints = kind.default_hint().map(str::to_owned).into_iter().collect();
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
            hints,
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: Range<usize>) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            self.range.start,
            self.range.end,
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message, related.range.start, related.range.end
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
