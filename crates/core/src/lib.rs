//! Primered Core Library
//!
//! Conception d'amorces PCR par délégation à Primer3: validation de la
//! requête, correspondance des paramètres, codec Boulder-IO et mise en forme
//! du résultat.

pub mod boulder;
pub mod designer;
pub mod error;
pub mod logging;
pub mod params;
pub mod primer;
pub mod result;
pub mod sequence;
pub mod service;
#[cfg(feature = "testing")]
pub mod testing;

// Réexportations principales
pub use boulder::BoulderRecord;
pub use designer::{Primer3Config, Primer3Designer, PrimerDesigner};
pub use error::{PrimerError, Result};
pub use logging::init_logging;
pub use params::{DesignParameters, EngineSettings, ProductSizeRange};
pub use primer::{PrimerDesignRequest, PrimerDetail, PrimerResponse};
pub use result::extract_response;
pub use sequence::{read_fasta_templates, IupacBase, TemplateSequence};
pub use service::PrimerDesignService;
