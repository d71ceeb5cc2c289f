//! Moteur factice pour les tests: rejoue une sortie Primer3 enregistrée

use crate::boulder::BoulderRecord;
use crate::designer::PrimerDesigner;
use crate::error::{PrimerError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Rejoue toujours la même sortie et garde les entrées reçues
#[derive(Debug, Default)]
pub struct CannedDesigner {
    output: String,
    calls: Mutex<Vec<BoulderRecord>>,
}

impl CannedDesigner {
    /// `output` est une sortie Boulder-IO brute, terminateur compris
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Entrées reçues, dans l'ordre
    pub fn calls(&self) -> Vec<BoulderRecord> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl PrimerDesigner for CannedDesigner {
    async fn design(&self, input: &BoulderRecord) -> Result<BoulderRecord> {
        // Même validation que le vrai moteur
        input.encode()?;
        self.calls.lock().push(input.clone());

        if self.output.is_empty() {
            return Err(PrimerError::Engine("aucune sortie enregistrée".to_string()));
        }
        BoulderRecord::decode(&self.output)
    }

    fn describe(&self) -> String {
        "canned".to_string()
    }
}
