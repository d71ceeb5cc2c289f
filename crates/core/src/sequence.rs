//! Séquences matrices et codes IUPAC

use crate::error::{PrimerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Codes IUPAC pour les nucléotides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IupacBase {
    A,  // Adénine
    C,  // Cytosine
    G,  // Guanine
    T,  // Thymine
    R,  // A ou G (purine)
    Y,  // C ou T (pyrimidine)
    S,  // G ou C (strong)
    W,  // A ou T (weak)
    K,  // G ou T (keto)
    M,  // A ou C (amino)
    B,  // C ou G ou T
    D,  // A ou G ou T
    H,  // A ou C ou T
    V,  // A ou C ou G
    N,  // Any base
}

impl IupacBase {
    /// Convertit un caractère en base IUPAC (insensible à la casse)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(IupacBase::A),
            'C' => Some(IupacBase::C),
            'G' => Some(IupacBase::G),
            'T' => Some(IupacBase::T),
            'R' => Some(IupacBase::R),
            'Y' => Some(IupacBase::Y),
            'S' => Some(IupacBase::S),
            'W' => Some(IupacBase::W),
            'K' => Some(IupacBase::K),
            'M' => Some(IupacBase::M),
            'B' => Some(IupacBase::B),
            'D' => Some(IupacBase::D),
            'H' => Some(IupacBase::H),
            'V' => Some(IupacBase::V),
            'N' => Some(IupacBase::N),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            IupacBase::A => 'A',
            IupacBase::C => 'C',
            IupacBase::G => 'G',
            IupacBase::T => 'T',
            IupacBase::R => 'R',
            IupacBase::Y => 'Y',
            IupacBase::S => 'S',
            IupacBase::W => 'W',
            IupacBase::K => 'K',
            IupacBase::M => 'M',
            IupacBase::B => 'B',
            IupacBase::D => 'D',
            IupacBase::H => 'H',
            IupacBase::V => 'V',
            IupacBase::N => 'N',
        }
    }

    /// Base G ou C sans ambiguïté
    pub fn is_gc(self) -> bool {
        matches!(self, IupacBase::G | IupacBase::C | IupacBase::S)
    }
}

impl fmt::Display for IupacBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Séquence matrice validée, transmise telle quelle à Primer3
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSequence {
    id: Option<String>,
    bases: String,
}

impl TemplateSequence {
    /// Valide une séquence brute: espaces ignorés, majuscules, codes IUPAC seulement.
    ///
    /// La position rapportée en cas d'erreur est l'index dans la séquence
    /// nettoyée, c'est-à-dire l'offset que verrait Primer3.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut bases = String::with_capacity(raw.len());

        for c in raw.chars().filter(|c| !c.is_whitespace()) {
            let base = IupacBase::from_char(c).ok_or(PrimerError::InvalidBase {
                base: c,
                position: bases.len(),
            })?;
            bases.push(base.as_char());
        }

        if bases.is_empty() {
            return Err(PrimerError::EmptySequence);
        }

        Ok(Self { id: None, bases })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn as_str(&self) -> &str {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Pourcentage GC de la matrice (0-100)
    pub fn gc_percent(&self) -> f64 {
        let gc = self
            .bases
            .chars()
            .filter_map(IupacBase::from_char)
            .filter(|b| b.is_gc())
            .count();
        gc as f64 * 100.0 / self.len() as f64
    }
}

/// Lit toutes les matrices d'un fichier FASTA
pub fn read_fasta_templates<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Vec<TemplateSequence>> {
    let reader = bio::io::fasta::Reader::from_file(path)
        .map_err(|e| PrimerError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))?;

    let mut templates = Vec::new();
    for record in reader.records() {
        let record = record?;
        let raw = String::from_utf8_lossy(record.seq());
        templates.push(TemplateSequence::parse(&raw)?.with_id(record.id()));
    }

    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_normalises_case_and_whitespace() {
        let template = TemplateSequence::parse("acgt\nNNgc  at").unwrap();
        assert_eq!(template.as_str(), "ACGTNNGCAT");
        assert_eq!(template.len(), 10);
    }

    #[test]
    fn test_parse_rejects_invalid_base() {
        match TemplateSequence::parse("ACG TXA") {
            Err(PrimerError::InvalidBase { base, position }) => {
                assert_eq!(base, 'X');
                assert_eq!(position, 4);
            }
            other => panic!("erreur attendue, obtenu {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(TemplateSequence::parse(" \n"), Err(PrimerError::EmptySequence)));
    }

    #[test]
    fn test_gc_percent() {
        let template = TemplateSequence::parse("GGCCAATT").unwrap();
        assert!((template.gc_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_read_fasta_templates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ">seq1 premier").unwrap();
        writeln!(file, "ACGTACGT").unwrap();
        writeln!(file, "GGCC").unwrap();
        writeln!(file, ">seq2").unwrap();
        writeln!(file, "ttaa").unwrap();

        let templates = read_fasta_templates(file.path()).unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].id(), Some("seq1"));
        assert_eq!(templates[0].as_str(), "ACGTACGTGGCC");
        assert_eq!(templates[1].as_str(), "TTAA");
    }
}
