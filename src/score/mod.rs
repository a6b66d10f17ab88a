//! Score Calculation
//!
//! Turns per-subject (correct, wrong) answer counts into net scores and an
//! exam total. Input comes from a data-entry form, so the policy is
//! permissive: anything unparseable or out of range is clamped to a valid
//! count, never raised as an error.

use crate::types::{round2, ScoreField, SubjectScore, WRONG_PER_CORRECT_CANCELLED};

/// Coerce raw text input to an answer count within `[0, question_count]`.
/// Non-numeric input counts as 0; fractional input is truncated.
fn coerce_count(raw_value: &str, question_count: u32) -> u32 {
    let parsed = raw_value.trim().parse::<f64>().unwrap_or(0.0);
    if !parsed.is_finite() || parsed <= 0.0 {
        return 0;
    }
    (parsed.trunc() as u64).min(question_count as u64) as u32
}

/// Apply one edit of a data-entry form to a subject score.
///
/// If the updated pair would exceed `question_count`, the field *not* being
/// edited is reduced until the sum fits: the field the user is actively
/// typing into wins the conflict.
pub fn update_subject_score(
    current: SubjectScore,
    field: ScoreField,
    raw_value: &str,
    question_count: u32,
) -> SubjectScore {
    let value = coerce_count(raw_value, question_count);

    let mut next = current;
    match field {
        ScoreField::Correct => next.correct = value,
        ScoreField::Wrong => next.wrong = value,
    }

    if next.correct.saturating_add(next.wrong) > question_count {
        match field {
            ScoreField::Correct => next.wrong = question_count - next.correct,
            ScoreField::Wrong => next.correct = question_count - next.wrong,
        }
    }

    next
}

/// Net score: correct minus a quarter per wrong, at 2-decimal precision
pub fn net(score: &SubjectScore) -> f64 {
    round2(score.correct as f64 - score.wrong as f64 / WRONG_PER_CORRECT_CANCELLED)
}

/// Unanswered items, derived from the counts (never stored)
pub fn blank(score: &SubjectScore, question_count: u32) -> u32 {
    question_count.saturating_sub(score.correct.saturating_add(score.wrong))
}

/// Exam total: sum of the non-negative per-subject nets, at 2-decimal
/// precision. A subject answered entirely wrong contributes 0 rather than
/// dragging the total negative.
pub fn total_net(scores: &[SubjectScore]) -> f64 {
    round2(scores.iter().map(|s| net(s).max(0.0)).sum())
}
