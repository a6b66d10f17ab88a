//! Ranking Estimation
//!
//! Maps a net score plus an exam category to an estimated national ranking
//! via category-specific empirical tables: linear interpolation between
//! adjacent rows, clamping at the table's best entry, and linear
//! extrapolation below its lowest one.
//!
//! Tables are validated once at construction and trusted at call time;
//! `estimate_ranking` itself never fails — missing data comes back as
//! `None`, a category without a table falls back to the TYT table.

pub mod tables;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::{ExamCategory, RankingTableRow, MIN_TABLE_ROWS};

/// Table-validity error, raised at construction time only.
///
/// Any of these in production means broken reference data and should stop
/// startup; nothing here is recoverable at call time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("ranking table for {category} has only {rows} row(s); interpolation needs at least two")]
    TooFewRows { category: &'static str, rows: usize },
    #[error("ranking table for {category} has a non-finite net at row {index}")]
    InvalidNet { category: &'static str, index: usize },
    #[error("ranking table for {category} breaks monotonicity at row {index}: net must strictly decrease, rank strictly increase")]
    NotMonotonic { category: &'static str, index: usize },
    #[error("missing TYT table; TYT is the fallback for categories without a table")]
    MissingTytTable,
}

/// Empirical `(net, rank)` lookup table for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingTable {
    rows: Vec<RankingTableRow>,
}

impl RankingTable {
    pub fn new(rows: Vec<RankingTableRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[RankingTableRow] {
        &self.rows
    }

    /// Check the invariants the interpolation algorithm relies on:
    /// at least two rows, finite nets, net strictly decreasing and rank
    /// strictly increasing with the row index.
    pub fn validate(&self, category: ExamCategory) -> Result<(), TableError> {
        let category = category.as_str();

        if self.rows.len() < MIN_TABLE_ROWS {
            return Err(TableError::TooFewRows {
                category,
                rows: self.rows.len(),
            });
        }

        for (index, row) in self.rows.iter().enumerate() {
            if !row.net.is_finite() {
                return Err(TableError::InvalidNet { category, index });
            }
        }

        for (index, pair) in self.rows.windows(2).enumerate() {
            if pair[1].net >= pair[0].net || pair[1].rank <= pair[0].rank {
                return Err(TableError::NotMonotonic {
                    category,
                    index: index + 1,
                });
            }
        }

        Ok(())
    }
}

/// Net-to-ranking estimator over a fixed set of category tables
#[derive(Debug, Clone)]
pub struct RankingEstimator {
    tyt_table: RankingTable,
    tables: HashMap<ExamCategory, RankingTable>,
}

impl RankingEstimator {
    /// Build an estimator from caller-supplied tables, validating every
    /// table up front. The map must contain a TYT table: it doubles as the
    /// fallback for categories without one of their own.
    pub fn new(mut tables: HashMap<ExamCategory, RankingTable>) -> Result<Self, TableError> {
        for (category, table) in &tables {
            table.validate(*category)?;
        }

        let tyt_table = tables
            .remove(&ExamCategory::Tyt)
            .ok_or(TableError::MissingTytTable)?;

        Ok(Self { tyt_table, tables })
    }

    /// Estimator over the built-in empirical tables.
    ///
    /// The built-in data is compiled in and its validity is pinned by the
    /// test suite, so this constructor is infallible.
    pub fn builtin() -> Self {
        let mut tables = HashMap::new();
        tables.insert(ExamCategory::AytSayisal, tables::ayt_sayisal());
        tables.insert(ExamCategory::AytEsitAgirlik, tables::ayt_esit_agirlik());
        tables.insert(ExamCategory::AytSozel, tables::ayt_sozel());

        Self {
            tyt_table: tables::tyt(),
            tables,
        }
    }

    /// Estimate the national ranking for a net score.
    ///
    /// Returns `None` for a non-finite or non-positive net ("not enough
    /// data", not an error). At or above the table's best entry the top
    /// rank is returned as-is; between rows the rank is interpolated
    /// linearly; below the lowest row it is projected from the last two
    /// rows — callers should treat that tail as a rough estimate, not an
    /// authoritative figure.
    pub fn estimate_ranking(&self, net: f64, category: ExamCategory) -> Option<u64> {
        if !net.is_finite() || net <= 0.0 {
            return None;
        }

        let rows = self.table_for(category).rows();

        for (i, row) in rows.iter().enumerate() {
            if net >= row.net {
                if i == 0 {
                    return Some(row.rank);
                }

                let higher = rows[i - 1];
                let lower = *row;
                // Ratio anchored at the lower row so that a net equal to
                // either bracketing row reduces exactly to its table rank.
                let ratio = (net - lower.net) / (higher.net - lower.net);
                let estimate =
                    lower.rank as f64 - (lower.rank as f64 - higher.rank as f64) * ratio;
                return Some(estimate.round() as u64);
            }
        }

        // Below the lowest empirical entry: linear projection from the
        // last two rows.
        let second_last = rows[rows.len() - 2];
        let last = rows[rows.len() - 1];
        let slope =
            (last.rank as f64 - second_last.rank as f64) / (second_last.net - last.net);
        let estimate = last.rank as f64 + slope * (last.net - net);
        Some(estimate.round().max(0.0) as u64)
    }

    fn table_for(&self, category: ExamCategory) -> &RankingTable {
        match self.tables.get(&category) {
            Some(table) => table,
            None => {
                if category != ExamCategory::Tyt {
                    debug!(
                        category = category.as_str(),
                        "no ranking table configured for category, falling back to TYT"
                    );
                }
                &self.tyt_table
            }
        }
    }
}

impl Default for RankingEstimator {
    fn default() -> Self {
        Self::builtin()
    }
}
