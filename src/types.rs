//! Common Types and Constants
//!
//! Shared data structures used across all engine modules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Wrong answers cancelling one correct answer (standard TYT/AYT rule)
pub const WRONG_PER_CORRECT_CANCELLED: f64 = 4.0;

/// Number of most recent exams feeding the momentum signal
pub const MOMENTUM_WINDOW: usize = 3;

/// Minimum rows a ranking table needs (extrapolation uses the last two)
pub const MIN_TABLE_ROWS: usize = 2;

/// Round to two decimal places (net scores are reported at this precision)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==================== Exam Categories ====================

/// Exam category tag: TYT or one of the three AYT track variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamCategory {
    /// Temel Yeterlilik Testi
    #[serde(rename = "TYT")]
    Tyt,
    /// AYT Sayısal (quantitative track)
    #[serde(rename = "AYT_SAY")]
    AytSayisal,
    /// AYT Eşit Ağırlık (equal-weight track)
    #[serde(rename = "AYT_EA")]
    AytEsitAgirlik,
    /// AYT Sözel (verbal track)
    #[serde(rename = "AYT_SOZ")]
    AytSozel,
}

impl ExamCategory {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TYT" => Some(ExamCategory::Tyt),
            "AYT_SAY" | "AYT_SAYISAL" => Some(ExamCategory::AytSayisal),
            "AYT_EA" | "AYT_ESIT_AGIRLIK" => Some(ExamCategory::AytEsitAgirlik),
            "AYT_SOZ" | "AYT_SOZEL" => Some(ExamCategory::AytSozel),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExamCategory::Tyt => "TYT",
            ExamCategory::AytSayisal => "AYT_SAY",
            ExamCategory::AytEsitAgirlik => "AYT_EA",
            ExamCategory::AytSozel => "AYT_SOZ",
        }
    }

    /// TYT vs AYT partition used by the analytics summary
    pub fn is_ayt(&self) -> bool {
        !matches!(self, ExamCategory::Tyt)
    }
}

// ==================== Score Types ====================

/// The field a data-entry update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreField {
    Correct,
    Wrong,
}

/// Per-subject answer counts for one exam
///
/// Invariant: `correct + wrong <= question_count` of the subject.
/// Blank count is derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectScore {
    pub correct: u32,
    pub wrong: u32,
}

impl SubjectScore {
    pub fn new(correct: u32, wrong: u32) -> Self {
        Self { correct, wrong }
    }
}

/// One practice exam as stored by the persistence service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRecord {
    pub category: ExamCategory,
    pub date: NaiveDate,
    pub total_net: f64,
    /// Optional per-subject detail, ordered as the category's subject list
    #[serde(default)]
    pub subjects: Option<Vec<SubjectScore>>,
}

// ==================== Ranking Types ====================

/// One `(net, rank)` pair of an empirical ranking table
///
/// Within a table, net strictly decreases and rank strictly increases
/// as the row index increases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingTableRow {
    pub net: f64,
    pub rank: u64,
}

// ==================== Analytics Types ====================

/// Per-partition (TYT or AYT) exam statistics
///
/// All statistics are `None` when the partition holds no exams;
/// "not enough data" is a valid state, not a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub count: usize,
    pub average_net: Option<f64>,
    pub best_net: Option<f64>,
    pub worst_net: Option<f64>,
    pub average_ranking: Option<u64>,
}

/// Summary over a student's exam history, recomputed on every call
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub tyt: CategoryStats,
    pub ayt: CategoryStats,
    /// Recent-window average net minus all-time average net.
    /// Positive = improving, negative = declining.
    pub momentum: Option<f64>,
    /// AYT-derived estimated ranking, falling back to TYT-derived
    pub current_ranking: Option<u64>,
    /// `current_ranking - target_ranking`; non-positive means the target
    /// is already met (lower rank number = better placement)
    pub ranking_gap: Option<i64>,
}

// ==================== Tests ====================
