//! Built-in empirical ranking tables
//!
//! Net-to-rank reference points per exam category, compiled from published
//! placement results. Rows are ordered by net descending / rank ascending;
//! the estimator interpolates between adjacent rows and extrapolates below
//! the last one. Immutable reference data, never derived from live exams.

use super::RankingTable;
use crate::types::RankingTableRow;

fn table(points: &[(f64, u64)]) -> RankingTable {
    RankingTable::new(
        points
            .iter()
            .map(|&(net, rank)| RankingTableRow { net, rank })
            .collect(),
    )
}

/// TYT (max net 120)
pub fn tyt() -> RankingTable {
    table(&[
        (120.0, 150),
        (115.0, 650),
        (110.0, 1_900),
        (105.0, 4_800),
        (100.0, 10_500),
        (90.0, 34_500),
        (80.0, 76_000),
        (70.0, 140_000),
        (60.0, 240_000),
        (50.0, 390_000),
        (40.0, 600_000),
        (30.0, 900_000),
        (20.0, 1_300_000),
    ])
}

/// AYT Sayısal (max net 80)
pub fn ayt_sayisal() -> RankingTable {
    table(&[
        (80.0, 300),
        (75.0, 900),
        (70.0, 2_200),
        (65.0, 4_800),
        (60.0, 9_500),
        (55.0, 17_000),
        (50.0, 28_000),
        (45.0, 44_000),
        (40.0, 65_000),
        (35.0, 95_000),
        (30.0, 140_000),
        (25.0, 200_000),
        (15.0, 350_000),
    ])
}

/// AYT Eşit Ağırlık (max net 80)
pub fn ayt_esit_agirlik() -> RankingTable {
    table(&[
        (80.0, 250),
        (75.0, 800),
        (70.0, 2_000),
        (65.0, 4_500),
        (60.0, 9_000),
        (55.0, 16_500),
        (50.0, 27_500),
        (45.0, 43_000),
        (40.0, 64_000),
        (35.0, 93_000),
        (30.0, 135_000),
        (25.0, 190_000),
        (15.0, 330_000),
    ])
}

/// AYT Sözel (max net 80)
pub fn ayt_sozel() -> RankingTable {
    table(&[
        (80.0, 200),
        (75.0, 700),
        (70.0, 1_800),
        (65.0, 4_000),
        (60.0, 8_200),
        (55.0, 15_000),
        (50.0, 25_000),
        (45.0, 40_000),
        (40.0, 60_000),
        (35.0, 88_000),
        (30.0, 128_000),
        (25.0, 180_000),
        (15.0, 310_000),
    ])
}
