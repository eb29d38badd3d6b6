//! Count and line limits.
//!
//! Given a proposal that already passed the input-break filter, decide whether
//! the resulting text stays within `limit_line` visual lines and `limit_count`
//! normalized clusters, and if not, how much of the replacement can be kept.

use super::buffer::{BufferSnapshot, EditProposal, EditRange, Graphemes};
use super::classify::is_newline;
use super::constraints::StylePolicy;
use super::oracle::LineOracle;
use super::trim::normalized_count;

/// Which limit refused an insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitViolation {
    /// The text would need more visual lines than allowed
    Lines { lines: usize, limit: usize },
    /// The normalized count would exceed the limit
    Count { count: usize, limit: usize },
}

/// Result of checking a proposal against the limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitOutcome {
    /// The whole replacement fits
    Within { text: String, cursor: usize },
    /// Only the first `kept` clusters of the replacement fit
    Truncated {
        text: String,
        cursor: usize,
        kept: usize,
        violation: LimitViolation,
    },
    /// Nothing of the replacement fits; the buffer stays as it is
    Rejected(LimitViolation),
}

/// Check `proposal` against the count and line limits of `policy`.
///
/// Deletions always fit: removing content can only shrink counts, and a buffer
/// that is over a limit lowered after the fact must still be editable.
pub fn evaluate_limits(
    buffer: &BufferSnapshot<'_>,
    proposal: &EditProposal,
    policy: &StylePolicy,
    oracle: &dyn LineOracle,
) -> LimitOutcome {
    let (candidate, cursor) = buffer.apply(proposal);
    if proposal.is_deletion() {
        return LimitOutcome::Within {
            text: candidate,
            cursor,
        };
    }

    let replacement = Graphemes::new(&proposal.replacement);
    let mut admissible = replacement.len();
    let mut violation = None;

    let lines = oracle.visual_line_count(&candidate);
    if !policy.lines_fit(lines) {
        let line_violation = LimitViolation::Lines {
            lines,
            limit: policy.limit_line,
        };
        // A single keystroke that breaks the line limit is refused outright;
        // only bulk insertions are cut down to the lines that still fit.
        if replacement.len() <= 1 {
            return LimitOutcome::Rejected(line_violation);
        }
        admissible = fit_lines(buffer, proposal.range, &replacement, policy.limit_line, oracle);
        if admissible == 0 {
            return LimitOutcome::Rejected(line_violation);
        }
        violation = Some(line_violation);
    }

    let count = normalized_count(&candidate, policy.trim_mode);
    if violation.is_none() && policy.count_fits(count) {
        return LimitOutcome::Within {
            text: candidate,
            cursor,
        };
    }

    if !policy.count_fits(count) {
        let base = buffer.without(proposal.range);
        let allowed = policy
            .limit_count
            .saturating_sub(normalized_count(&base, policy.trim_mode));
        admissible = admissible.min(allowed);
        violation = Some(LimitViolation::Count {
            count,
            limit: policy.limit_count,
        });
    }

    // Trimming is not additive: a prefix inserted next to trimmed edge
    // whitespace can pull that whitespace into the count. Shrink until the
    // committed text really fits.
    let fits = |kept: usize| {
        let (text, _) = buffer.splice(proposal.range, replacement.prefix(kept));
        policy.lines_fit(oracle.visual_line_count(&text))
            && policy.count_fits(normalized_count(&text, policy.trim_mode))
    };
    if admissible > 0 && !fits(admissible) {
        admissible = longest_fitting(0, admissible - 1, fits);
    }

    let violation = violation.unwrap_or(LimitViolation::Count {
        count,
        limit: policy.limit_count,
    });
    if admissible == 0 {
        tracing::debug!(?violation, "limit rejected insertion");
        return LimitOutcome::Rejected(violation);
    }

    let (text, cursor) = buffer.splice(proposal.range, replacement.prefix(admissible));
    tracing::debug!(
        ?violation,
        kept = admissible,
        proposed = replacement.len(),
        "limit truncated insertion"
    );
    LimitOutcome::Truncated {
        text,
        cursor,
        kept: admissible,
        violation,
    }
}

/// Longest prefix of `proposal.replacement` that keeps the buffer within
/// `limit_line` visual lines.
///
/// Whole lines of the replacement are kept first, then single clusters of the
/// first line that does not fit completely. Content is never reordered.
pub fn truncate_to_limit_lines<'p>(
    buffer: &BufferSnapshot<'_>,
    proposal: &'p EditProposal,
    limit_line: usize,
    oracle: &dyn LineOracle,
) -> &'p str {
    let replacement = Graphemes::new(&proposal.replacement);
    let kept = fit_lines(buffer, proposal.range, &replacement, limit_line, oracle);
    replacement.prefix(kept)
}

fn fit_lines(
    buffer: &BufferSnapshot<'_>,
    range: EditRange,
    replacement: &Graphemes<'_>,
    limit_line: usize,
    oracle: &dyn LineOracle,
) -> usize {
    let fits = |kept: usize| {
        let (text, _) = buffer.splice(range, replacement.prefix(kept));
        oracle.visual_line_count(&text) <= limit_line
    };

    if !fits(0) {
        return 0;
    }

    // Whole lines: each candidate ends right before a newline of the replacement
    let line_ends: Vec<usize> = replacement
        .iter()
        .enumerate()
        .filter(|(_, g)| is_newline(g))
        .map(|(i, _)| i)
        .chain(std::iter::once(replacement.len()))
        .collect();
    let whole = longest_fitting(0, line_ends.len(), |n| n == 0 || fits(line_ends[n - 1]));
    let kept = if whole == 0 { 0 } else { line_ends[whole - 1] };

    // Then single clusters of the next line, short of its newline
    match line_ends.get(whole) {
        Some(&next_end) => longest_fitting(kept, next_end.saturating_sub(1), &fits),
        None => kept,
    }
}

/// Largest `n` in `lo..=hi` accepted by `fits`, assuming `fits(lo)` holds.
///
/// Bisects, so `fits` runs O(log(hi - lo)) times. The result is always `lo` or
/// a value `fits` accepted; it is the largest one when `fits` is monotone.
fn longest_fitting(mut lo: usize, mut hi: usize, fits: impl Fn(usize) -> bool) -> usize {
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}
