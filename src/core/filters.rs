//! Record selection by institution type, province and language program.
//!
//! All predicates are pure: they borrow the record, never mutate it, and treat
//! a missing field as a non-match.

use crate::domain::model::SchoolRecord;
use serde::{Deserialize, Serialize};

pub const SECONDARY_INSTITUTE: &str = "Instituto de Educación Secundaria";

/// Language-program codes that include an English track.
pub const BILINGUAL_ENGLISH_PROGRAMS: [&str; 7] = [
    "PLURIL FRA/ING",
    "BIL ING",
    "PLURIL ING/FRA",
    "BIL ING + PLURIL ING/FRA",
    "BIL ING + PLURIL ING/ALE",
    "PLURIL ING/FRA + PLURIL FRA/ING",
    "BIL ING + BIL FRA",
];

/// How field values are compared against the expected literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Byte-for-byte equality.
    #[default]
    Strict,
    /// Equality after trimming, case folding, accent folding and collapsing
    /// runs of whitespace.
    Lenient,
}

impl MatchMode {
    pub fn matches(self, actual: Option<&str>, expected: &str) -> bool {
        let Some(actual) = actual else {
            return false;
        };
        match self {
            MatchMode::Strict => actual == expected,
            MatchMode::Lenient => normalize(actual) == normalize(expected),
        }
    }
}

/// Lower-cases, strips Spanish/Latin diacritics and collapses whitespace.
pub fn normalize(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| word.chars().flat_map(char::to_lowercase).map(fold_accent).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

pub fn is_secondary_institute(record: &SchoolRecord, mode: MatchMode) -> bool {
    mode.matches(record.denomination.as_deref(), SECONDARY_INSTITUTE)
}

pub fn has_bilingual_english_program(record: &SchoolRecord, mode: MatchMode) -> bool {
    let program = record.language_program.as_deref();
    BILINGUAL_ENGLISH_PROGRAMS
        .iter()
        .any(|code| mode.matches(program, code))
}

pub fn matches_province(record: &SchoolRecord, province: &str, mode: MatchMode) -> bool {
    mode.matches(record.province.as_deref(), province)
}

/// Conjunction of the predicates above. Secondary-institute is always required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub province: Option<String>,
    pub bilingual_only: bool,
    pub mode: MatchMode,
}

impl FilterCriteria {
    pub fn matches(&self, record: &SchoolRecord) -> bool {
        is_secondary_institute(record, self.mode)
            && (!self.bilingual_only || has_bilingual_english_program(record, self.mode))
            && self
                .province
                .as_deref()
                .map_or(true, |province| matches_province(record, province, self.mode))
    }

    /// Returns the matching records in their original order.
    pub fn apply(&self, records: &[SchoolRecord]) -> Vec<SchoolRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }

    pub fn describe(&self) -> String {
        let scope = if self.bilingual_only {
            "bilingual secondary institutes"
        } else {
            "secondary institutes"
        };
        match &self.province {
            Some(province) => format!("{} in {}", scope, province),
            None => format!("{} in every province", scope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(denomination: &str, province: &str, program: &str) -> SchoolRecord {
        SchoolRecord {
            denomination: Some(denomination.to_string()),
            province: Some(province.to_string()),
            language_program: Some(program.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_secondary_institute_requires_exact_literal() {
        let ies = record(SECONDARY_INSTITUTE, "Granada", "");
        assert!(is_secondary_institute(&ies, MatchMode::Strict));

        for variant in [
            "instituto de educación secundaria",
            "Instituto de Educacion Secundaria",
            " Instituto de Educación Secundaria",
            "Colegio de Educación Infantil y Primaria",
        ] {
            let r = record(variant, "Granada", "");
            assert!(
                !is_secondary_institute(&r, MatchMode::Strict),
                "{} should not match",
                variant
            );
        }
    }

    #[test]
    fn test_lenient_mode_folds_case_accents_and_whitespace() {
        for variant in [
            "instituto de educación secundaria",
            "INSTITUTO DE EDUCACION SECUNDARIA",
            "  Instituto  de Educación   Secundaria ",
        ] {
            let r = record(variant, "Granada", "");
            assert!(is_secondary_institute(&r, MatchMode::Lenient));
        }
        let r = record("Colegio de Educación Primaria", "Granada", "");
        assert!(!is_secondary_institute(&r, MatchMode::Lenient));

        let r = record(SECONDARY_INSTITUTE, "CÓRDOBA", "bil ing");
        assert!(matches_province(&r, "Córdoba", MatchMode::Lenient));
        assert!(has_bilingual_english_program(&r, MatchMode::Lenient));
    }

    #[test]
    fn test_bilingual_codes_are_a_closed_set() {
        for code in BILINGUAL_ENGLISH_PROGRAMS {
            let r = record(SECONDARY_INSTITUTE, "Granada", code);
            assert!(has_bilingual_english_program(&r, MatchMode::Strict), "{}", code);
        }

        for near_miss in ["BIL FRA", "BIL ING ", "bil ing", "BIL ING + PLURIL", "PLURIL ING", ""] {
            let r = record(SECONDARY_INSTITUTE, "Granada", near_miss);
            assert!(
                !has_bilingual_english_program(&r, MatchMode::Strict),
                "{:?} should not match",
                near_miss
            );
        }
    }

    #[test]
    fn test_missing_fields_never_match() {
        let empty = SchoolRecord::default();
        assert!(!is_secondary_institute(&empty, MatchMode::Strict));
        assert!(!has_bilingual_english_program(&empty, MatchMode::Lenient));
        assert!(!matches_province(&empty, "Granada", MatchMode::Strict));
    }

    #[test]
    fn test_criteria_combinations() {
        let records = vec![
            record(SECONDARY_INSTITUTE, "Granada", "BIL ING"),
            record(SECONDARY_INSTITUTE, "Granada", "BIL FRA"),
            record(SECONDARY_INSTITUTE, "Sevilla", "BIL ING"),
            record("Colegio de Educación Infantil y Primaria", "Granada", "BIL ING"),
        ];

        let all = FilterCriteria::default();
        assert_eq!(all.apply(&records).len(), 3);

        let bilingual = FilterCriteria {
            bilingual_only: true,
            ..Default::default()
        };
        assert_eq!(bilingual.apply(&records), vec![records[0].clone(), records[2].clone()]);

        let granada = FilterCriteria {
            province: Some("Granada".to_string()),
            ..Default::default()
        };
        assert_eq!(granada.apply(&records), vec![records[0].clone(), records[1].clone()]);

        let granada_bilingual = FilterCriteria {
            province: Some("Granada".to_string()),
            bilingual_only: true,
            mode: MatchMode::Strict,
        };
        assert_eq!(granada_bilingual.apply(&records), vec![records[0].clone()]);
    }

    #[test]
    fn test_filter_is_idempotent_and_order_preserving() {
        let records = vec![
            record(SECONDARY_INSTITUTE, "Granada", "BIL ING"),
            record("Escuela de Arte", "Granada", "BIL ING"),
            record(SECONDARY_INSTITUTE, "Málaga", "PLURIL ING/FRA"),
            record(SECONDARY_INSTITUTE, "Almería", "BIL ING + BIL FRA"),
        ];
        let criteria = FilterCriteria {
            bilingual_only: true,
            ..Default::default()
        };

        let once = criteria.apply(&records);
        let twice = criteria.apply(&once);
        assert_eq!(once, twice);
        assert_eq!(
            once.iter()
                .map(|r| r.province.as_deref().unwrap())
                .collect::<Vec<_>>(),
            vec!["Granada", "Málaga", "Almería"]
        );
        assert!(criteria.apply(&[]).is_empty());
    }

    #[test]
    fn test_describe() {
        let criteria = FilterCriteria {
            province: Some("Jaén".to_string()),
            bilingual_only: true,
            mode: MatchMode::Strict,
        };
        assert_eq!(criteria.describe(), "bilingual secondary institutes in Jaén");
        assert_eq!(
            FilterCriteria::default().describe(),
            "secondary institutes in every province"
        );
    }
}
