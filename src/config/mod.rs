//! Subject Configuration
//!
//! Fixed per-category subject lists with their official question counts.
//! Static reference data loaded once at startup; the engine treats it as
//! immutable input and never refreshes it.

use serde::{Deserialize, Serialize};

use crate::types::ExamCategory;

/// One exam subject: key unique within its category, display name, and
/// the maximum number of answerable items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub key: String,
    pub name: String,
    pub question_count: u32,
}

fn subject(key: &str, name: &str, question_count: u32) -> Subject {
    Subject {
        key: key.to_string(),
        name: name.to_string(),
        question_count,
    }
}

/// The ordered subject list of a category, with official question counts
pub fn builtin_subjects(category: ExamCategory) -> Vec<Subject> {
    match category {
        ExamCategory::Tyt => vec![
            subject("turkce", "Türkçe", 40),
            subject("sosyal", "Sosyal Bilimler", 20),
            subject("matematik", "Temel Matematik", 40),
            subject("fen", "Fen Bilimleri", 20),
        ],
        ExamCategory::AytSayisal => vec![
            subject("matematik", "Matematik", 40),
            subject("fizik", "Fizik", 14),
            subject("kimya", "Kimya", 13),
            subject("biyoloji", "Biyoloji", 13),
        ],
        ExamCategory::AytEsitAgirlik => vec![
            subject("matematik", "Matematik", 40),
            subject("edebiyat", "Türk Dili ve Edebiyatı", 24),
            subject("tarih1", "Tarih-1", 10),
            subject("cografya1", "Coğrafya-1", 6),
        ],
        ExamCategory::AytSozel => vec![
            subject("edebiyat", "Türk Dili ve Edebiyatı", 24),
            subject("tarih1", "Tarih-1", 10),
            subject("cografya1", "Coğrafya-1", 6),
            subject("tarih2", "Tarih-2", 11),
            subject("cografya2", "Coğrafya-2", 11),
            subject("felsefe", "Felsefe Grubu", 12),
            subject("din", "Din Kültürü", 6),
        ],
    }
}

/// Total answerable items of a category (the upper bound of its net score)
pub fn max_net(category: ExamCategory) -> u32 {
    builtin_subjects(category)
        .iter()
        .map(|s| s.question_count)
        .sum()
}
