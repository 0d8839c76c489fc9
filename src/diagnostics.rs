use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum ErrorKind {
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unexpected character.")]
    UnexpectedCharacter { ch: char },
    #[error("Unterminated comment.")]
    UnterminatedComment,
}

/// A lexing error at a source position. `col` is 1-based and counts characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("[line {line}] Error: {kind}")]
pub struct Diagnostic {
    pub line: usize,
    pub col: usize,
    pub kind: ErrorKind,
}

impl Diagnostic {
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Receives diagnostics while a scan is in progress. The scan never stops on a report.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_driver_format() {
        let diag = Diagnostic {
            line: 3,
            col: 7,
            kind: ErrorKind::UnterminatedString,
        };
        assert_eq!(diag.to_string(), "[line 3] Error: Unterminated string.");
    }

    #[test]
    fn test_unexpected_character_message_omits_char() {
        let diag = Diagnostic {
            line: 1,
            col: 1,
            kind: ErrorKind::UnexpectedCharacter { ch: '@' },
        };
        assert_eq!(diag.message(), "Unexpected character.");
    }

    #[test]
    fn test_vec_sink_accumulates_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic {
            line: 1,
            col: 2,
            kind: ErrorKind::UnexpectedCharacter { ch: '#' },
        });
        sink.report(Diagnostic {
            line: 2,
            col: 1,
            kind: ErrorKind::UnterminatedComment,
        });
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].line, 1);
        assert_eq!(sink[1].kind, ErrorKind::UnterminatedComment);
    }
}
