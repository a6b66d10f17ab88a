//! # yks-algo - TYT/AYT exam analytics core
//!
//! Pure Rust implementation of the ranking estimation and exam analytics
//! engine behind a TYT/AYT coaching dashboard:
//!
//! - **Score Calculation** - per-subject answer counts to net scores
//! - **Ranking Estimation** - net scores to estimated national rankings
//!   via empirical lookup tables
//! - **Exam Analytics** - exam histories to trend/momentum/goal-gap
//!   statistics
//!
//! ## Design goals
//!
//! - **Pure** - no I/O, no shared mutable state; every call only reads its
//!   arguments and static tables and allocates its own result
//! - **Never fails at call time** - invalid input is clamped, missing data
//!   comes back as `None`; broken table data fails loudly at construction
//! - **Reusable** - consumed by any UI or data-fetching layer; exposes no
//!   transport or storage of its own
//!
//! ## Module structure
//!
//! - [`score`] - net scoring and data-entry clamping
//! - [`ranking`] - table-based ranking interpolation/extrapolation
//! - [`analytics`] - exam history summaries
//! - [`config`] - per-category subject lists
//! - [`types`] - common types and constants
//!
//! ## Usage example
//!
//! ```rust
//! use yks_algo::{ExamCategory, RankingEstimator};
//!
//! let estimator = RankingEstimator::builtin();
//! assert_eq!(estimator.estimate_ranking(95.0, ExamCategory::Tyt), Some(22500));
//! assert_eq!(estimator.estimate_ranking(0.0, ExamCategory::Tyt), None);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

pub mod analytics;
pub mod config;
pub mod ranking;
pub mod score;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export all common types
pub use types::*;

/// Re-export the analytics summary computer
pub use analytics::ExamAnalytics;

/// Re-export the subject configuration
pub use config::{builtin_subjects, max_net, Subject};

/// Re-export the ranking estimator
pub use ranking::{RankingEstimator, RankingTable, TableError};

/// Re-export the score calculator
pub use score::{blank, net, total_net, update_subject_score};
