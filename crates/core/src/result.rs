//! Extraction de la réponse à partir de la sortie Primer3

use crate::boulder::BoulderRecord;
use crate::error::{PrimerError, Result};
use crate::primer::{PrimerDetail, PrimerResponse};

/// Type d'oligo dans les tags Primer3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OligoKind {
    Left,
    Right,
    Internal,
}

impl OligoKind {
    pub fn tag(self) -> &'static str {
        match self {
            OligoKind::Left => "LEFT",
            OligoKind::Right => "RIGHT",
            OligoKind::Internal => "INTERNAL",
        }
    }
}

/// Lit l'oligo `index` d'un type donné
pub fn oligo_detail(record: &BoulderRecord, kind: OligoKind, index: usize) -> Result<PrimerDetail> {
    let prefix = format!("PRIMER_{}_{}", kind.tag(), index);
    let (start, length) = record.interval(&prefix)?;

    Ok(PrimerDetail {
        sequence: record.require(&format!("{}_SEQUENCE", prefix))?.to_string(),
        tm: record.parse(&format!("{}_TM", prefix))?,
        gc_percent: record.parse(&format!("{}_GC_PERCENT", prefix))?,
        penalty: record.parse(&format!("{}_PENALTY", prefix))?,
        start,
        length,
    })
}

/// Nombre d'oligos rapporté par Primer3 (0 si absent)
pub fn returned_count(record: &BoulderRecord, kind: OligoKind) -> Result<usize> {
    let tag = format!("PRIMER_{}_NUM_RETURNED", kind.tag());
    Ok(record.parse_opt(&tag)?.unwrap_or(0))
}

/// Concatène les diagnostics `*_EXPLAIN` disponibles
fn explain(record: &BoulderRecord) -> String {
    let parts: Vec<String> = ["LEFT", "RIGHT", "INTERNAL", "PAIR"]
        .iter()
        .filter_map(|side| {
            record
                .get(&format!("PRIMER_{}_EXPLAIN", side))
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}: {}", side.to_lowercase(), v))
        })
        .collect();

    if parts.is_empty() {
        "aucun diagnostic".to_string()
    } else {
        parts.join("; ")
    }
}

/// Met en forme le résultat Primer3 en réponse
pub fn extract_response(record: &BoulderRecord) -> Result<PrimerResponse> {
    if let Some(message) = record.get("PRIMER_ERROR").filter(|m| !m.is_empty()) {
        return Err(PrimerError::Engine(message.to_string()));
    }

    let pairs: Option<usize> = record.parse_opt("PRIMER_PAIR_NUM_RETURNED")?;
    if pairs == Some(0) || (pairs.is_none() && !record.contains("PRIMER_LEFT_0")) {
        return Err(PrimerError::NoPrimersFound {
            explain: explain(record),
        });
    }

    let left_primer = oligo_detail(record, OligoKind::Left, 0)?;
    let right_primer = oligo_detail(record, OligoKind::Right, 0)?;

    let internal_count = returned_count(record, OligoKind::Internal)?;
    let internal_primers = (0..internal_count)
        .map(|i| oligo_detail(record, OligoKind::Internal, i))
        .collect::<Result<Vec<_>>>()?;

    Ok(PrimerResponse {
        left_primer,
        right_primer,
        internal_primers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIR_OUTPUT: &str = "\
PRIMER_PAIR_NUM_RETURNED=1
PRIMER_LEFT_NUM_RETURNED=1
PRIMER_RIGHT_NUM_RETURNED=1
PRIMER_INTERNAL_NUM_RETURNED=0
PRIMER_LEFT_0_PENALTY=0.399
PRIMER_RIGHT_0_PENALTY=1.046
PRIMER_LEFT_0_SEQUENCE=CAGCTGGCAAATTGTTGAAT
PRIMER_RIGHT_0_SEQUENCE=TTCTGCCAATCTATTCCATA
PRIMER_LEFT_0=11,20
PRIMER_RIGHT_0=212,20
PRIMER_LEFT_0_TM=59.601
PRIMER_RIGHT_0_TM=57.954
PRIMER_LEFT_0_GC_PERCENT=40.000
PRIMER_RIGHT_0_GC_PERCENT=35.000
=
";

    #[test]
    fn test_extract_pair() {
        let record = BoulderRecord::decode(PAIR_OUTPUT).unwrap();
        let response = extract_response(&record).unwrap();

        assert_eq!(response.left_primer.sequence, "CAGCTGGCAAATTGTTGAAT");
        assert_eq!(response.left_primer.start, 11);
        assert_eq!(response.left_primer.length, 20);
        assert!((response.left_primer.tm - 59.601).abs() < 1e-9);
        assert_eq!(response.right_primer.start, 212);
        assert!((response.right_primer.penalty - 1.046).abs() < 1e-9);
        assert!(response.internal_primers.is_empty());
    }

    #[test]
    fn test_extract_internal_up_to_count() {
        let mut output = PAIR_OUTPUT.trim_end_matches("=\n").replace(
            "PRIMER_INTERNAL_NUM_RETURNED=0",
            "PRIMER_INTERNAL_NUM_RETURNED=1",
        );
        output.push_str(
            "PRIMER_INTERNAL_0=90,20\n\
             PRIMER_INTERNAL_0_SEQUENCE=GGAAGTGTTACTTTAGCAAT\n\
             PRIMER_INTERNAL_0_TM=58.2\n\
             PRIMER_INTERNAL_0_GC_PERCENT=35.0\n\
             PRIMER_INTERNAL_0_PENALTY=2.5\n\
             PRIMER_INTERNAL_1_SEQUENCE=IGNORE\n=\n",
        );

        let record = BoulderRecord::decode(&output).unwrap();
        let response = extract_response(&record).unwrap();
        assert_eq!(response.internal_primers.len(), 1);
        assert_eq!(response.internal_primers[0].start, 90);
    }

    #[test]
    fn test_internal_count_beyond_entries_fails() {
        let output = PAIR_OUTPUT.replace(
            "PRIMER_INTERNAL_NUM_RETURNED=0",
            "PRIMER_INTERNAL_NUM_RETURNED=2\n\
             PRIMER_INTERNAL_0=90,20\n\
             PRIMER_INTERNAL_0_SEQUENCE=GGAAGTGTTACTTTAGCAAT\n\
             PRIMER_INTERNAL_0_TM=58.2\n\
             PRIMER_INTERNAL_0_GC_PERCENT=35.0\n\
             PRIMER_INTERNAL_0_PENALTY=2.5",
        );

        let record = BoulderRecord::decode(&output).unwrap();
        match extract_response(&record) {
            Err(PrimerError::MissingField(tag)) => assert_eq!(tag, "PRIMER_INTERNAL_1"),
            other => panic!("erreur attendue, obtenu {:?}", other),
        }
    }

    #[test]
    fn test_engine_error() {
        let record = BoulderRecord::decode("PRIMER_ERROR=Missing SEQUENCE tag\n=\n").unwrap();
        match extract_response(&record) {
            Err(PrimerError::Engine(msg)) => assert_eq!(msg, "Missing SEQUENCE tag"),
            other => panic!("erreur attendue, obtenu {:?}", other),
        }
    }

    #[test]
    fn test_no_pair_found() {
        let record = BoulderRecord::decode(
            "PRIMER_PAIR_NUM_RETURNED=0\nPRIMER_LEFT_EXPLAIN=considered 10, ok 0\nPRIMER_PAIR_EXPLAIN=\n=\n",
        )
        .unwrap();
        match extract_response(&record) {
            Err(PrimerError::NoPrimersFound { explain }) => {
                assert_eq!(explain, "left: considered 10, ok 0")
            }
            other => panic!("erreur attendue, obtenu {:?}", other),
        }
    }

    #[test]
    fn test_missing_field() {
        let output = PAIR_OUTPUT.replace("PRIMER_RIGHT_0_TM=57.954\n", "");
        let record = BoulderRecord::decode(&output).unwrap();
        match extract_response(&record) {
            Err(PrimerError::MissingField(tag)) => assert_eq!(tag, "PRIMER_RIGHT_0_TM"),
            other => panic!("erreur attendue, obtenu {:?}", other),
        }
    }
}
