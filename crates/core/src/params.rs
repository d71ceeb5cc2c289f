//! Correspondance entre une requête et les paramètres Primer3

use crate::boulder::BoulderRecord;
use crate::error::{PrimerError, Result};
use crate::primer::PrimerDesignRequest;
use crate::sequence::TemplateSequence;
use std::fmt;

/// Taille minimale d'amplicon, quelle que soit la longueur d'amorce
pub const MIN_PRODUCT_SIZE: usize = 50;

/// Tolérance de taille d'amorce dans la configuration de tâche
pub const PRIMER_SIZE_TOLERANCE: usize = 2;

/// Une seule paire d'amorces est demandée
pub const NUM_RETURN: usize = 1;

/// Plage de taille d'amplicon `min-max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSizeRange {
    pub min: usize,
    pub max: usize,
}

impl ProductSizeRange {
    /// min = max(2 × longueur d'amorce, 50), max = longueur de la matrice
    pub fn derive(sequence_length: usize, primer_length: usize) -> Result<Self> {
        let min = primer_length.saturating_mul(2).max(MIN_PRODUCT_SIZE);
        let max = sequence_length;

        if min > max {
            return Err(PrimerError::InfeasibleDesign {
                sequence_length,
                primer_length,
            });
        }

        Ok(Self { min, max })
    }
}

impl fmt::Display for ProductSizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Réglages du moteur ajoutés à chaque enregistrement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineSettings {
    /// `PRIMER_THERMODYNAMIC_PARAMETERS_PATH`, requis par les versions 2.3.x
    pub thermodynamic_parameters_path: Option<String>,
}

/// Paramètres complets d'un appel Primer3
#[derive(Debug, Clone)]
pub struct DesignParameters {
    pub range: ProductSizeRange,
    /// Configuration de tâche: matrice, région incluse, tailles tolérantes
    pub task: BoulderRecord,
    /// Surcharge: taille d'amorce exacte
    pub overrides: BoulderRecord,
}

impl DesignParameters {
    /// Construit les deux configurations à partir d'une requête
    pub fn from_request(
        request: &PrimerDesignRequest,
        settings: &EngineSettings,
    ) -> Result<(TemplateSequence, Self)> {
        let mut template = TemplateSequence::parse(&request.sequence)?;
        if let Some(id) = &request.sequence_id {
            template = template.with_id(id.clone());
        }
        let params = Self::build(&template, request, settings)?;
        Ok((template, params))
    }

    pub fn build(
        template: &TemplateSequence,
        request: &PrimerDesignRequest,
        settings: &EngineSettings,
    ) -> Result<Self> {
        let primer_length = request.primer_length;
        let gc_content = request.gc_content;

        if primer_length == 0 {
            return Err(PrimerError::InvalidPrimerLength(primer_length));
        }
        if !(0.0..=100.0).contains(&gc_content) {
            return Err(PrimerError::GcContentOutOfRange(gc_content));
        }

        let range = ProductSizeRange::derive(template.len(), primer_length)?;

        let mut task = BoulderRecord::new();
        if let Some(id) = template.id() {
            task.set("SEQUENCE_ID", id);
        }
        task.set("SEQUENCE_TEMPLATE", template.as_str())
            .set("SEQUENCE_INCLUDED_REGION", format!("0,{}", template.len()))
            .set("PRIMER_OPT_GC_PERCENT", gc_content)
            .set("PRIMER_OPT_SIZE", primer_length)
            .set(
                "PRIMER_MIN_SIZE",
                primer_length.saturating_sub(PRIMER_SIZE_TOLERANCE),
            )
            .set("PRIMER_MAX_SIZE", primer_length + PRIMER_SIZE_TOLERANCE)
            .set("PRIMER_PRODUCT_SIZE_RANGE", range)
            .set("PRIMER_NUM_RETURN", NUM_RETURN);

        if request.pick_internal_oligo {
            task.set("PRIMER_PICK_INTERNAL_OLIGO", 1);
        }
        if let Some(path) = &settings.thermodynamic_parameters_path {
            task.set("PRIMER_THERMODYNAMIC_PARAMETERS_PATH", path);
        }

        let mut overrides = BoulderRecord::new();
        overrides
            .set("PRIMER_OPT_SIZE", primer_length)
            .set("PRIMER_MIN_SIZE", primer_length)
            .set("PRIMER_MAX_SIZE", primer_length)
            .set("PRIMER_OPT_GC_PERCENT", gc_content)
            .set("PRIMER_PRODUCT_SIZE_RANGE", range)
            .set("PRIMER_NUM_RETURN", NUM_RETURN);

        Ok(Self {
            range,
            task,
            overrides,
        })
    }

    /// Enregistrement effectif envoyé à Primer3 (la surcharge l'emporte)
    pub fn to_record(&self) -> BoulderRecord {
        let mut record = self.task.clone();
        record.overlay(&self.overrides);
        record
    }
}
