//! Input policy for constrained text fields.
//!
//! A [`StylePolicy`] bundles the rules a field enforces: which characters may be
//! typed, how text is normalized before counting, and the count/line limits.
//! The policy is a plain value handed to every engine call, so switching modes
//! at runtime takes effect on the very next edit.

use serde::{Deserialize, Serialize};

/// Effectively unbounded limit, used as the default for counts and lines
pub const UNBOUNDED: usize = 999_999;

/// Which characters the input-break filter refuses to let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputBreakMode {
    /// Everything allowed
    #[default]
    None,
    /// No newlines
    LineBreak,
    /// No spaces
    WhiteSpace,
    /// No space directly after another space
    ContinuousWhiteSpace,
    /// No newlines and no spaces
    LineWithWhiteSpace,
    /// No newlines and no space runs
    LineWithContinuousWhiteSpace,
}

impl InputBreakMode {
    pub fn blocks_newline(self) -> bool {
        matches!(
            self,
            Self::LineBreak | Self::LineWithWhiteSpace | Self::LineWithContinuousWhiteSpace
        )
    }

    pub fn blocks_space(self) -> bool {
        matches!(self, Self::WhiteSpace | Self::LineWithWhiteSpace)
    }

    pub fn blocks_space_run(self) -> bool {
        matches!(
            self,
            Self::ContinuousWhiteSpace | Self::LineWithContinuousWhiteSpace
        )
    }

    /// Whether the filter reads the buffer context before the insertion point
    pub fn needs_context(self) -> bool {
        self.blocks_space_run()
    }
}

/// How text is normalized before counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimMode {
    /// Count the raw text
    #[default]
    None,
    /// Strip leading/trailing spaces and tabs
    Whitespaces,
    /// Strip leading/trailing whitespace and newlines
    WhitespacesAndNewlines,
    /// Strip leading/trailing spaces and tabs, then drop every space
    BlankWithWhitespaces,
    /// Strip leading/trailing whitespace and newlines, then drop every space
    BlankWithWhitespacesAndNewlines,
}

impl TrimMode {
    /// Whether edge newlines are stripped along with edge whitespace
    pub fn trims_newlines(self) -> bool {
        matches!(
            self,
            Self::WhitespacesAndNewlines | Self::BlankWithWhitespacesAndNewlines
        )
    }

    /// Whether interior spaces are dropped
    pub fn drops_spaces(self) -> bool {
        matches!(
            self,
            Self::BlankWithWhitespaces | Self::BlankWithWhitespacesAndNewlines
        )
    }
}

/// Constraints applied to every edit of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePolicy {
    pub input_break_mode: InputBreakMode,
    pub trim_mode: TrimMode,
    /// Maximum normalized character count
    pub limit_count: usize,
    /// Maximum visual line count
    pub limit_line: usize,
}

impl Default for StylePolicy {
    fn default() -> Self {
        Self {
            input_break_mode: InputBreakMode::None,
            trim_mode: TrimMode::None,
            limit_count: UNBOUNDED,
            limit_line: UNBOUNDED,
        }
    }
}

impl StylePolicy {
    /// No filtering, no trimming, no effective limits
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// One visual line, newlines refused
    pub fn single_line() -> Self {
        Self::default()
            .input_break(InputBreakMode::LineBreak)
            .limit_line(1)
    }

    /// A single token: no spaces, no newlines
    pub fn single_word() -> Self {
        Self::default().input_break(InputBreakMode::LineWithWhiteSpace)
    }

    pub fn limit_count(mut self, count: usize) -> Self {
        self.limit_count = count;
        self
    }

    pub fn limit_line(mut self, line: usize) -> Self {
        self.limit_line = line;
        self
    }

    pub fn limit_count_and_line(self, count: usize, line: usize) -> Self {
        self.limit_count(count).limit_line(line)
    }

    pub fn input_break(mut self, mode: InputBreakMode) -> Self {
        self.input_break_mode = mode;
        self
    }

    pub fn trim(mut self, mode: TrimMode) -> Self {
        self.trim_mode = mode;
        self
    }

    /// Check if a normalized count fits the count limit
    pub fn count_fits(&self, count: usize) -> bool {
        count <= self.limit_count
    }

    /// Check if a visual line count fits the line limit
    pub fn lines_fit(&self, lines: usize) -> bool {
        lines <= self.limit_line
    }
}
