//! Codec Boulder-IO pour primer3_core
//!
//! Un enregistrement est une suite de lignes `TAG=VALEUR` terminée par une
//! ligne contenant seulement `=`. C'est le format lu sur stdin et écrit sur
//! stdout par `primer3_core`.

use crate::error::{PrimerError, Result};
use std::fmt;
use std::str::FromStr;

/// Ligne de fin d'enregistrement
pub const RECORD_TERMINATOR: &str = "=";

/// Enregistrement Boulder-IO, ordonné par ordre d'insertion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoulderRecord {
    entries: Vec<(String, String)>,
}

impl BoulderRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Définit un tag; une valeur existante est remplacée sur place
    pub fn set(&mut self, tag: impl Into<String>, value: impl ToString) -> &mut Self {
        let tag = tag.into();
        let value = value.to_string();

        match self.entries.iter_mut().find(|(t, _)| *t == tag) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((tag, value)),
        }
        self
    }

    /// Superpose `other` sur cet enregistrement: ses valeurs l'emportent
    pub fn overlay(&mut self, other: &BoulderRecord) -> &mut Self {
        for (tag, value) in &other.entries {
            self.set(tag.clone(), value);
        }
        self
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    /// Valeur obligatoire
    pub fn require(&self, tag: &str) -> Result<&str> {
        self.get(tag)
            .ok_or_else(|| PrimerError::MissingField(tag.to_string()))
    }

    /// Valeur obligatoire convertie
    pub fn parse<T: FromStr>(&self, tag: &str) -> Result<T> {
        let value = self.require(tag)?;
        value.trim().parse().map_err(|_| PrimerError::MalformedField {
            tag: tag.to_string(),
            value: value.to_string(),
        })
    }

    /// Valeur optionnelle convertie; absente => `None`
    pub fn parse_opt<T: FromStr>(&self, tag: &str) -> Result<Option<T>> {
        match self.get(tag) {
            Some(_) => self.parse(tag).map(Some),
            None => Ok(None),
        }
    }

    /// Paire `debut,longueur` (positions d'amorces, régions)
    pub fn interval(&self, tag: &str) -> Result<(usize, usize)> {
        let value = self.require(tag)?;
        let malformed = || PrimerError::MalformedField {
            tag: tag.to_string(),
            value: value.to_string(),
        };

        let (start, length) = value.split_once(',').ok_or_else(malformed)?;
        let start = start.trim().parse().map_err(|_| malformed())?;
        let length = length.trim().parse().map_err(|_| malformed())?;
        Ok((start, length))
    }

    /// Encode l'enregistrement, terminateur inclus
    pub fn encode(&self) -> Result<String> {
        let mut out = String::new();

        for (tag, value) in &self.entries {
            if tag.is_empty() || tag.contains('=') || tag.contains('\n') {
                return Err(PrimerError::BoulderFormat(format!("tag invalide: {:?}", tag)));
            }
            if value.contains('\n') || value.contains('\r') {
                return Err(PrimerError::BoulderFormat(format!(
                    "valeur multiligne pour {}",
                    tag
                )));
            }
            out.push_str(tag);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }

        out.push_str(RECORD_TERMINATOR);
        out.push('\n');
        Ok(out)
    }

    /// Décode le premier enregistrement de `input`
    pub fn decode(input: &str) -> Result<Self> {
        let mut record = BoulderRecord::new();
        let mut terminated = false;

        for (line_no, line) in input.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line == RECORD_TERMINATOR {
                terminated = true;
                break;
            }
            if line.is_empty() {
                continue;
            }

            let (tag, value) = line.split_once('=').ok_or_else(|| {
                PrimerError::BoulderFormat(format!("ligne {} sans '=': {}", line_no + 1, line))
            })?;
            record.entries.push((tag.to_string(), value.to_string()));
        }

        if !terminated && record.is_empty() {
            return Err(PrimerError::BoulderFormat("enregistrement vide".to_string()));
        }

        Ok(record)
    }
}

impl fmt::Display for BoulderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (tag, value) in &self.entries {
            writeln!(f, "{}={}", tag, value)?;
        }
        write!(f, "{}", RECORD_TERMINATOR)
    }
}
