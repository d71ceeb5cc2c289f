//! Traitement d'une requête de conception de bout en bout

use crate::designer::PrimerDesigner;
use crate::error::Result;
use crate::params::{DesignParameters, EngineSettings};
use crate::primer::{PrimerDesignRequest, PrimerResponse};
use crate::result::extract_response;
use std::sync::Arc;
use tracing::{info, instrument};

/// Service de conception: validation, paramètres, un appel moteur, extraction
#[derive(Clone)]
pub struct PrimerDesignService {
    designer: Arc<dyn PrimerDesigner>,
    settings: EngineSettings,
}

impl PrimerDesignService {
    pub fn new(designer: Arc<dyn PrimerDesigner>) -> Self {
        Self {
            designer,
            settings: EngineSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn designer(&self) -> &dyn PrimerDesigner {
        self.designer.as_ref()
    }

    /// Paramètres Primer3 effectifs pour une requête, sans appeler le moteur
    pub fn parameters(&self, request: &PrimerDesignRequest) -> Result<DesignParameters> {
        DesignParameters::from_request(request, &self.settings).map(|(_, params)| params)
    }

    #[instrument(skip(self, request), fields(
        sequence_length = request.sequence.len(),
        primer_length = request.primer_length,
        gc_content = request.gc_content,
    ))]
    pub async fn design_primer(&self, request: &PrimerDesignRequest) -> Result<PrimerResponse> {
        let (template, params) = DesignParameters::from_request(request, &self.settings)?;
        info!(
            product_size_range = %params.range,
            template_gc = template.gc_percent(),
            "Conception d'amorces"
        );

        let output = self.designer.design(&params.to_record()).await?;
        let response = extract_response(&output)?;

        info!(
            left_start = response.left_primer.start,
            right_start = response.right_primer.start,
            internal = response.internal_primers.len(),
            "Paire d'amorces trouvée"
        );
        Ok(response)
    }
}

impl std::fmt::Debug for PrimerDesignService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimerDesignService")
            .field("designer", &self.designer.describe())
            .field("settings", &self.settings)
            .finish()
    }
}
