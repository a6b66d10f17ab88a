//! Exam Analytics
//!
//! Aggregates a student's exam history into the summary the dashboards
//! render: per-category averages and extrema, a short-term momentum signal,
//! and the gap to a target ranking. Recomputed from scratch on every call;
//! nothing is cached and the input slice is never mutated.

use chrono::NaiveDate;

use crate::ranking::RankingEstimator;
use crate::types::{
    round2, AnalyticsSummary, CategoryStats, ExamCategory, ExamRecord, MOMENTUM_WINDOW,
};

/// Summary computer over a ranking estimator
pub struct ExamAnalytics<'a> {
    estimator: &'a RankingEstimator,
}

impl<'a> ExamAnalytics<'a> {
    pub fn new(estimator: &'a RankingEstimator) -> Self {
        Self { estimator }
    }

    /// Summarize an exam history.
    ///
    /// `target_ranking` enables the ranking-gap statistic; `reference_date`
    /// is an as-of cutoff — exams dated after it are ignored, `None` means
    /// the full history.
    ///
    /// The per-partition average ranking is one estimate computed from the
    /// averaged net, not an average of per-exam estimates; the two differ
    /// because interpolation is piecewise linear, and the dashboards are
    /// built on the former.
    pub fn summarize(
        &self,
        exams: &[ExamRecord],
        target_ranking: Option<u64>,
        reference_date: Option<NaiveDate>,
    ) -> AnalyticsSummary {
        let considered: Vec<&ExamRecord> = exams
            .iter()
            .filter(|exam| reference_date.map_or(true, |cutoff| exam.date <= cutoff))
            .collect();

        let tyt_exams: Vec<&ExamRecord> =
            considered.iter().copied().filter(|e| !e.category.is_ayt()).collect();
        let ayt_exams: Vec<&ExamRecord> =
            considered.iter().copied().filter(|e| e.category.is_ayt()).collect();

        let tyt = self.category_stats(&tyt_exams, Some(ExamCategory::Tyt));
        let ayt = self.category_stats(&ayt_exams, representative_ayt_category(&ayt_exams));

        let momentum = momentum(&considered);

        let current_ranking = ayt.average_ranking.or(tyt.average_ranking);
        // Signed on purpose: a non-positive gap means the target rank is
        // already met, and the caller resolves the sign.
        let ranking_gap = match (current_ranking, target_ranking) {
            (Some(current), Some(target)) => Some(current as i64 - target as i64),
            _ => None,
        };

        AnalyticsSummary {
            tyt,
            ayt,
            momentum,
            current_ranking,
            ranking_gap,
        }
    }

    fn category_stats(
        &self,
        exams: &[&ExamRecord],
        representative: Option<ExamCategory>,
    ) -> CategoryStats {
        if exams.is_empty() {
            return CategoryStats::default();
        }

        let count = exams.len();
        let sum: f64 = exams.iter().map(|e| e.total_net).sum();
        let average_net = round2(sum / count as f64);
        let best_net = exams.iter().map(|e| e.total_net).fold(f64::MIN, f64::max);
        let worst_net = exams.iter().map(|e| e.total_net).fold(f64::MAX, f64::min);

        let average_ranking = representative
            .and_then(|category| self.estimator.estimate_ranking(average_net, category));

        CategoryStats {
            count,
            average_net: Some(average_net),
            best_net: Some(best_net),
            worst_net: Some(worst_net),
            average_ranking,
        }
    }
}

/// The track the AYT partition is estimated against: the category of the
/// most recent AYT exam. Students sit a single track in practice; after a
/// track change the latest exam reflects the current one.
fn representative_ayt_category(ayt_exams: &[&ExamRecord]) -> Option<ExamCategory> {
    ayt_exams.iter().max_by_key(|e| e.date).map(|e| e.category)
}

/// Mean net of the most recent `MOMENTUM_WINDOW` exams minus the mean net
/// of the whole history. `None` only when the history is empty.
fn momentum(exams: &[&ExamRecord]) -> Option<f64> {
    if exams.is_empty() {
        return None;
    }

    let mut by_date: Vec<&ExamRecord> = exams.to_vec();
    by_date.sort_by(|a, b| b.date.cmp(&a.date));

    let recent = &by_date[..MOMENTUM_WINDOW.min(by_date.len())];
    let recent_mean: f64 =
        recent.iter().map(|e| e.total_net).sum::<f64>() / recent.len() as f64;
    let overall_mean: f64 =
        by_date.iter().map(|e| e.total_net).sum::<f64>() / by_date.len() as f64;

    Some(round2(recent_mean - overall_mean))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn exam(category: ExamCategory, date_: NaiveDate, total_net: f64) -> ExamRecord {
        ExamRecord {
            category,
            date: date_,
            total_net,
            subjects: None,
        }
    }

    #[test]
    fn test_empty_history() {
        let estimator = RankingEstimator::builtin();
        let analytics = ExamAnalytics::new(&estimator);
        let summary = analytics.summarize(&[], Some(50_000), None);

        assert_eq!(summary.tyt, CategoryStats::default());
        assert_eq!(summary.ayt, CategoryStats::default());
        assert_eq!(summary.momentum, None);
        assert_eq!(summary.current_ranking, None);
        assert_eq!(summary.ranking_gap, None);
    }

    #[test]
    fn test_partition_by_category() {
        let estimator = RankingEstimator::builtin();
        let analytics = ExamAnalytics::new(&estimator);
        let exams = [
            exam(ExamCategory::Tyt, date(2026, 1, 10), 80.0),
            exam(ExamCategory::AytSayisal, date(2026, 1, 17), 50.0),
            exam(ExamCategory::Tyt, date(2026, 1, 24), 90.0),
            exam(ExamCategory::AytEsitAgirlik, date(2026, 1, 31), 55.0),
        ];

        let summary = analytics.summarize(&exams, None, None);
        assert_eq!(summary.tyt.count, 2);
        assert_eq!(summary.ayt.count, 2);
    }

    #[test]
    fn test_average_and_extrema() {
        let estimator = RankingEstimator::builtin();
        let analytics = ExamAnalytics::new(&estimator);
        let exams = [
            exam(ExamCategory::Tyt, date(2026, 2, 1), 70.5),
            exam(ExamCategory::Tyt, date(2026, 2, 8), 90.0),
            exam(ExamCategory::Tyt, date(2026, 2, 15), 82.5),
        ];

        let summary = analytics.summarize(&exams, None, None);
        assert_eq!(summary.tyt.average_net, Some(81.0));
        assert_eq!(summary.tyt.best_net, Some(90.0));
        assert_eq!(summary.tyt.worst_net, Some(70.5));
    }

    #[test]
    fn test_ranking_from_averaged_net_not_averaged_rankings() {
        let estimator = RankingEstimator::builtin();
        let analytics = ExamAnalytics::new(&estimator);
        // Nets 110 and 90 average to 100, whose table rank is 10500.
        // Averaging per-exam rankings would give (1900 + 34500) / 2 = 18200.
        let exams = [
            exam(ExamCategory::Tyt, date(2026, 3, 1), 110.0),
            exam(ExamCategory::Tyt, date(2026, 3, 8), 90.0),
        ];

        let summary = analytics.summarize(&exams, None, None);
        assert_eq!(summary.tyt.average_ranking, Some(10_500));
    }

    #[test]
    fn test_momentum_of_constant_history_is_zero() {
        let estimator = RankingEstimator::builtin();
        let analytics = ExamAnalytics::new(&estimator);
        let exams = [
            exam(ExamCategory::Tyt, date(2026, 1, 5), 75.0),
            exam(ExamCategory::Tyt, date(2026, 1, 12), 75.0),
            exam(ExamCategory::Tyt, date(2026, 1, 19), 75.0),
            exam(ExamCategory::Tyt, date(2026, 1, 26), 75.0),
        ];

        let summary = analytics.summarize(&exams, None, None);
        assert_eq!(summary.momentum, Some(0.0));
    }

    #[test]
    fn test_momentum_improving_history_is_positive() {
        let estimator = RankingEstimator::builtin();
        let analytics = ExamAnalytics::new(&estimator);
        // Oldest to newest: 50, 60, 70, 80. Recent three average 70,
        // overall average 65.
        let exams = [
            exam(ExamCategory::Tyt, date(2026, 1, 5), 50.0),
            exam(ExamCategory::Tyt, date(2026, 1, 12), 60.0),
            exam(ExamCategory::Tyt, date(2026, 1, 19), 70.0),
            exam(ExamCategory::Tyt, date(2026, 1, 26), 80.0),
        ];

        let summary = analytics.summarize(&exams, None, None);
        assert_eq!(summary.momentum, Some(5.0));
    }

    #[test]
    fn test_momentum_declining_history_is_negative() {
        let estimator = RankingEstimator::builtin();
        let analytics = ExamAnalytics::new(&estimator);
        let exams = [
            exam(ExamCategory::Tyt, date(2026, 1, 5), 80.0),
            exam(ExamCategory::Tyt, date(2026, 1, 12), 70.0),
            exam(ExamCategory::Tyt, date(2026, 1, 19), 60.0),
            exam(ExamCategory::Tyt, date(2026, 1, 26), 50.0),
        ];

        let summary = analytics.summarize(&exams, None, None);
        assert_eq!(summary.momentum, Some(-5.0));
    }

    #[test]
    fn test_momentum_single_exam_is_zero() {
        let estimator = RankingEstimator::builtin();
        let analytics = ExamAnalytics::new(&estimator);
        let exams = [exam(ExamCategory::Tyt, date(2026, 1, 5), 64.0)];

        let summary = analytics.summarize(&exams, None, None);
        assert_eq!(summary.momentum, Some(0.0));
    }

    #[test]
    fn test_reference_date_cuts_off_later_exams() {
        let estimator = RankingEstimator::builtin();
        let analytics = ExamAnalytics::new(&estimator);
        let exams = [
            exam(ExamCategory::Tyt, date(2026, 1, 5), 60.0),
            exam(ExamCategory::Tyt, date(2026, 1, 12), 70.0),
            exam(ExamCategory::Tyt, date(2026, 2, 1), 120.0),
        ];

        let summary = analytics.summarize(&exams, None, Some(date(2026, 1, 15)));
        assert_eq!(summary.tyt.count, 2);
        assert_eq!(summary.tyt.average_net, Some(65.0));
        assert_eq!(summary.tyt.best_net, Some(70.0));
    }

    #[test]
    fn test_ranking_gap_keeps_sign() {
        let estimator = RankingEstimator::builtin();
        let analytics = ExamAnalytics::new(&estimator);
        let exams = [
            exam(ExamCategory::Tyt, date(2026, 3, 1), 110.0),
            exam(ExamCategory::Tyt, date(2026, 3, 8), 90.0),
        ];

        // Current ranking 10500 against a target of 30000: the target is
        // already beaten, so the gap is negative.
        let summary = analytics.summarize(&exams, Some(30_000), None);
        assert_eq!(summary.ranking_gap, Some(-19_500));

        let summary = analytics.summarize(&exams, Some(4_000), None);
        assert_eq!(summary.ranking_gap, Some(6_500));
    }

    #[test]
    fn test_ranking_gap_requires_target_and_current() {
        let estimator = RankingEstimator::builtin();
        let analytics = ExamAnalytics::new(&estimator);
        let exams = [exam(ExamCategory::Tyt, date(2026, 3, 1), 100.0)];

        assert_eq!(analytics.summarize(&exams, None, None).ranking_gap, None);
        assert_eq!(analytics.summarize(&[], Some(10_000), None).ranking_gap, None);
    }

    #[test]
    fn test_ayt_ranking_preferred_over_tyt() {
        let estimator = RankingEstimator::builtin();
        let analytics = ExamAnalytics::new(&estimator);
        let exams = [
            exam(ExamCategory::Tyt, date(2026, 3, 1), 100.0),
            exam(ExamCategory::AytSayisal, date(2026, 3, 8), 60.0),
        ];

        let summary = analytics.summarize(&exams, None, None);
        assert_eq!(summary.ayt.average_ranking, Some(9_500));
        assert_eq!(summary.current_ranking, Some(9_500));
    }

    #[test]
    fn test_representative_ayt_category_is_most_recent() {
        let estimator = RankingEstimator::builtin();
        let analytics = ExamAnalytics::new(&estimator);
        // Track change: older Sözel exam, newer Sayısal exam. The AYT
        // average of 60 must be estimated against the Sayısal table.
        let exams = [
            exam(ExamCategory::AytSozel, date(2026, 2, 1), 60.0),
            exam(ExamCategory::AytSayisal, date(2026, 2, 15), 60.0),
        ];

        let summary = analytics.summarize(&exams, None, None);
        assert_eq!(summary.ayt.average_ranking, Some(9_500));
    }
}
