use whydiff_collection::{contains_diff, length_diff, Value};
use whydiff_text::{compare_bytes_with_context, compare_codepoints_with_context, compare_lines};
use whydiff_types::{CollectionDiffResult, DiffResult, EnhancedDiffResult};

use crate::config::DiffConfig;
use crate::enhanced::compare_enhanced;

/// Comparison entry point with configurable thresholds.
///
/// Holds only an immutable [`DiffConfig`]; every method is a pure function
/// of its arguments and the config, so one engine can be shared freely
/// across threads.
#[derive(Clone, Debug, Default)]
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    /// Create an engine with the given config.
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// First divergent byte, previewed with the configured window.
    pub fn scalar_diff(&self, got: &[u8], want: &[u8]) -> DiffResult {
        compare_bytes_with_context(got, want, self.window())
    }

    /// First divergent codepoint, previewed with the configured window.
    pub fn scalar_diff_codepoints(&self, got: &str, want: &str) -> DiffResult {
        compare_codepoints_with_context(got, want, self.window())
    }

    /// First divergent byte with an explicit window size.
    pub fn scalar_diff_with_context(&self, got: &[u8], want: &[u8], window_size: isize) -> DiffResult {
        compare_bytes_with_context(got, want, window_size)
    }

    /// First divergent codepoint with an explicit window size.
    pub fn scalar_diff_codepoints_with_context(&self, got: &str, want: &str, window_size: isize) -> DiffResult {
        compare_codepoints_with_context(got, want, window_size)
    }

    /// First divergent line.
    pub fn line_diff(&self, got: &str, want: &str) -> DiffResult {
        compare_lines(got, want)
    }

    /// All multi-line views with an explicit context size.
    pub fn enhanced_line_diff(&self, got: &str, want: &str, context_lines: isize) -> EnhancedDiffResult {
        compare_enhanced(got, want, context_lines, &self.config)
    }

    /// All multi-line views with the configured context size.
    pub fn enhanced_diff(&self, got: &str, want: &str) -> EnhancedDiffResult {
        let context_lines = isize::try_from(self.config.context_lines).unwrap_or(isize::MAX);
        self.enhanced_line_diff(got, want, context_lines)
    }

    pub fn collection_contains_diff(&self, container: &Value, item: &Value) -> CollectionDiffResult {
        contains_diff(container, item)
    }

    pub fn collection_length_diff(&self, container: &Value, expected_len: usize) -> CollectionDiffResult {
        length_diff(container, expected_len)
    }

    fn window(&self) -> isize {
        isize::try_from(self.config.window_size).unwrap_or(isize::MAX)
    }
}
