//! Collects diagnostics across a generator run.

use crate::error::Diagnostic;

/// Accumulates [`Diagnostic`]s so a generator can report every finding in
/// one pass instead of stopping at the first.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Whether any diagnostics were recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// The recorded diagnostics, in the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the collector, returning the recorded diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_preserves_order() {
        let mut collector = DiagnosticCollector::new();
        assert!(collector.is_empty());

        collector.push(Diagnostic::warning("first"));
        collector.push(Diagnostic::warning("second"));

        assert_eq!(collector.len(), 2);
        let messages: Vec<&str> = collector
            .diagnostics()
            .iter()
            .map(|d| d.message())
            .collect();
        assert_eq!(messages, ["first", "second"]);
    }
}
