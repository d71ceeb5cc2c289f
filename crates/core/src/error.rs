//! Types d'erreurs pour la conception d'amorces

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimerError {
    #[error("La séquence de longueur {sequence_length} est trop courte pour une amorce de longueur {primer_length}")]
    InfeasibleDesign {
        sequence_length: usize,
        primer_length: usize,
    },

    #[error("Séquence matrice vide")]
    EmptySequence,

    #[error("Base IUPAC invalide '{base}' à la position {position}")]
    InvalidBase { base: char, position: usize },

    #[error("Longueur d'amorce invalide: {0}")]
    InvalidPrimerLength(usize),

    #[error("Contenu GC hors plage: {0:.2} pas dans [0, 100]")]
    GcContentOutOfRange(f64),

    #[error("Aucune paire d'amorces trouvée: {explain}")]
    NoPrimersFound { explain: String },

    #[error("Erreur Primer3: {0}")]
    Engine(String),

    #[error("Primer3 indisponible ({path}): {source}")]
    EngineUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Primer3 n'a pas répondu en {0} secondes")]
    EngineTimeout(u64),

    #[error("Champ manquant dans la réponse Primer3: {0}")]
    MissingField(String),

    #[error("Champ mal formé {tag}={value}")]
    MalformedField { tag: String, value: String },

    #[error("Format Boulder-IO invalide: {0}")]
    BoulderFormat(String),

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),
}

impl PrimerError {
    /// Vrai si l'erreur vient des paramètres fournis par l'appelant
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PrimerError::InfeasibleDesign { .. }
                | PrimerError::EmptySequence
                | PrimerError::InvalidBase { .. }
                | PrimerError::InvalidPrimerLength(_)
                | PrimerError::GcContentOutOfRange(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PrimerError>;
