//! Requêtes et résultats de conception d'amorces

use serde::{Deserialize, Serialize};

/// Requête de conception
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimerDesignRequest {
    /// Séquence matrice (codes IUPAC)
    pub sequence: String,
    /// Longueur d'amorce visée, en bases
    pub primer_length: usize,
    /// Contenu GC optimal, en pourcentage
    pub gc_content: f64,
    /// Demande aussi une sonde interne à Primer3
    #[serde(default)]
    pub pick_internal_oligo: bool,
    /// Identifiant transmis en `SEQUENCE_ID`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_id: Option<String>,
}

impl PrimerDesignRequest {
    pub fn new(sequence: impl Into<String>, primer_length: usize, gc_content: f64) -> Self {
        Self {
            sequence: sequence.into(),
            primer_length,
            gc_content,
            pick_internal_oligo: false,
            sequence_id: None,
        }
    }

    pub fn with_sequence_id(mut self, id: impl Into<String>) -> Self {
        self.sequence_id = Some(id.into());
        self
    }

    pub fn with_internal_oligo(mut self, pick: bool) -> Self {
        self.pick_internal_oligo = pick;
        self
    }
}

/// Détail d'un oligo retourné par Primer3
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimerDetail {
    pub sequence: String,
    pub tm: f64,
    pub gc_percent: f64,
    pub penalty: f64,
    /// Offset 0-based dans la matrice
    pub start: usize,
    pub length: usize,
}

/// Réponse de conception: une paire d'amorces et les sondes internes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimerResponse {
    pub left_primer: PrimerDetail,
    pub right_primer: PrimerDetail,
    pub internal_primers: Vec<PrimerDetail>,
}
