//! Errors and parse diagnostics

use std::fmt;

/// A fatal error raised by the parsing pipeline.
///
/// Almost nothing in this crate is fatal: malformed filters are recovered
/// from and recorded as [`Diagnostic`]s. The variants below indicate a broken
/// invariant in the already-tokenized stream handed to a later stage.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("branch builder reached end of input with {0} open branch(es)")]
    UnclosedBranch(usize),
}

/// Classifies a recovered parse problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A `)` with no matching `(`; depth went negative.
    NegativeDepth,
    /// End of input with one or more `(` still open.
    UnterminatedGroup,
    /// A filter body with no `=` and no recognizable shorthand operator.
    MissingComparisonOperator,
    /// A shorthand operator (`attr&value`, `attr|value`, `attr<==>value`)
    /// was rewritten to its extensible-match form.
    ShorthandRewritten,
    /// The literal body `UNDEFINED` was rewritten to `UNDEFINED=UNDEFINED`.
    UndefinedBodyRewritten,
    /// A value tokenized as a DN turned out not to be one; sub-tokens dropped.
    SubTokensCleared,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiagnosticKind::NegativeDepth => "negative depth",
            DiagnosticKind::UnterminatedGroup => "unterminated group",
            DiagnosticKind::MissingComparisonOperator => "missing comparison operator",
            DiagnosticKind::ShorthandRewritten => "shorthand operator rewritten",
            DiagnosticKind::UndefinedBodyRewritten => "UNDEFINED body rewritten",
            DiagnosticKind::SubTokensCleared => "DN sub-tokens cleared",
        };
        f.write_str(s)
    }
}

/// One recovered parse problem, with the byte offset it was noticed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub position: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}: {}", self.kind, self.position, self.message)
    }
}

/// Collector for recovered parse problems.
///
/// Every push is also emitted as a `tracing` warning, so callers that do not
/// inspect the sink still see what the parser had to work around.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn push(&mut self, kind: DiagnosticKind, position: usize, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(position, %kind, "{}", message);
        self.entries.push(Diagnostic {
            kind,
            position,
            message,
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
