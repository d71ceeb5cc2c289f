//! Données partagées par les tests d'intégration

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use primered_core::{BoulderRecord, PrimerDesigner, Result};

/// Moteur factice: rejoue une sortie Primer3 et garde les entrées reçues
pub struct ReplayDesigner {
    output: String,
    calls: Mutex<Vec<BoulderRecord>>,
}

impl ReplayDesigner {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<BoulderRecord> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl PrimerDesigner for ReplayDesigner {
    async fn design(&self, input: &BoulderRecord) -> Result<BoulderRecord> {
        input.encode()?;
        self.calls.lock().push(input.clone());
        BoulderRecord::decode(&self.output)
    }

    fn describe(&self) -> String {
        "replay".to_string()
    }
}

/// Matrice de démonstration Primer3 (378 bases)
pub const TEMPLATE: &str = concat!(
    "GCTTGCATGCCTGCAGGTCGACTCTAGAGGATCCCCCTACATTTTAGCATCAGTGAGTACAGCAT",
    "GCTTACTGGAAGAGAGGGTCATGCAACAGATTAGGAGGTAAGTTTGCAAAGGCAGGCTAAGGAGG",
    "AGACGCACTGAATGCCATGGTAAGAACTCTGGACATAAAAATATTGGAAGTTGTTGAGCAAGTNA",
    "AAAAAATGTTTGGAAGTGTTACTTTAGCAATGGCAAGAATGATAGTATGGAATAGATTGGCAGAA",
    "TGAAGGCAAAATGATTAGACATATTGCATTAAGGTAAAAAATGATAACTGAAGAATTATGTGCCA",
    "CACTTATTAATAAGAAAGAATATGTGAACCTTGCAGATGTTTCCCTCTAGTAG",
);

/// Sortie primer3_core pour TEMPLATE, amorces de 20 bases, sonde interne
pub const DESIGN_OUTPUT: &str = "\
PRIMER_LEFT_EXPLAIN=considered 337, low tm 110, high tm 72, ok 155
PRIMER_RIGHT_EXPLAIN=considered 337, low tm 120, high tm 63, ok 154
PRIMER_INTERNAL_EXPLAIN=considered 309, low tm 121, high tm 60, ok 128
PRIMER_PAIR_EXPLAIN=considered 44, ok 1
PRIMER_LEFT_NUM_RETURNED=1
PRIMER_RIGHT_NUM_RETURNED=1
PRIMER_INTERNAL_NUM_RETURNED=1
PRIMER_PAIR_NUM_RETURNED=1
PRIMER_PAIR_0_PENALTY=0.733
PRIMER_LEFT_0_PENALTY=0.399
PRIMER_RIGHT_0_PENALTY=0.334
PRIMER_INTERNAL_0_PENALTY=0.576
PRIMER_LEFT_0_SEQUENCE=GGGTCATGCAACAGATTAGG
PRIMER_RIGHT_0_SEQUENCE=TTCTGCCAATCTATTCCATA
PRIMER_INTERNAL_0_SEQUENCE=AAGGCAGGCTAAGGAGGAGA
PRIMER_LEFT_0=80,20
PRIMER_RIGHT_0=259,20
PRIMER_INTERNAL_0=113,20
PRIMER_LEFT_0_TM=59.601
PRIMER_RIGHT_0_TM=59.666
PRIMER_INTERNAL_0_TM=60.424
PRIMER_LEFT_0_GC_PERCENT=50.000
PRIMER_RIGHT_0_GC_PERCENT=35.000
PRIMER_INTERNAL_0_GC_PERCENT=55.000
PRIMER_PAIR_0_PRODUCT_SIZE=180
=
";
