//! Appel du moteur de conception externe (primer3_core)

use crate::boulder::BoulderRecord;
use crate::error::{PrimerError, Result};
use crate::log_operation;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

/// Moteur de conception: un enregistrement en entrée, un en sortie
#[async_trait]
pub trait PrimerDesigner: Send + Sync {
    async fn design(&self, input: &BoulderRecord) -> Result<BoulderRecord>;

    /// Description courte du moteur, pour les logs et /health
    fn describe(&self) -> String;

    /// Version rapportée par le moteur
    async fn version(&self) -> Result<String> {
        Ok(self.describe())
    }
}

/// Configuration de l'exécutable Primer3
#[derive(Debug, Clone, PartialEq)]
pub struct Primer3Config {
    pub executable: PathBuf,
    pub timeout_secs: u64,
}

impl Default for Primer3Config {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("primer3_core"),
            timeout_secs: 30,
        }
    }
}

/// Lance `primer3_core` une fois par appel, en Boulder-IO sur stdin/stdout
#[derive(Debug, Clone)]
pub struct Primer3Designer {
    config: Primer3Config,
}

impl Primer3Designer {
    pub fn new(config: Primer3Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Primer3Config {
        &self.config
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.config.executable);
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }

    fn unavailable(&self, source: std::io::Error) -> PrimerError {
        PrimerError::EngineUnavailable {
            path: self.config.executable.display().to_string(),
            source,
        }
    }

    async fn run(&self, input: &str) -> Result<String> {
        let mut child = self.command().spawn().map_err(|e| self.unavailable(e))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| PrimerError::Engine("stdin indisponible".to_string()))?;
        // Un moteur qui sort tôt ferme le tube: le code de sortie prime sur BrokenPipe
        let written = stdin.write_all(input.as_bytes()).await;
        // Fermer stdin signale la fin de l'entrée
        drop(stdin);

        let output = child.wait_with_output().await?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            // primer3_core rapporte souvent l'erreur dans PRIMER_ERROR avant de sortir
            if let Ok(record) = BoulderRecord::decode(&stdout) {
                if let Some(message) = record.get("PRIMER_ERROR").filter(|m| !m.is_empty()) {
                    return Err(PrimerError::Engine(message.to_string()));
                }
            }
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, "primer3_core a échoué");
            return Err(PrimerError::Engine(format!(
                "{}: {}",
                output.status,
                stderr.trim()
            )));
        }

        written?;
        Ok(stdout)
    }

    /// Bannière de version (`primer3_core -about`)
    pub async fn about(&self) -> Result<String> {
        let output = Command::new(&self.config.executable)
            .arg("-about")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.unavailable(e))?;

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl PrimerDesigner for Primer3Designer {
    #[instrument(skip(self, input), fields(tags = input.len()))]
    async fn design(&self, input: &BoulderRecord) -> Result<BoulderRecord> {
        let encoded = input.encode()?;
        debug!("Enregistrement Boulder-IO:\n{}", encoded);

        let timeout = Duration::from_secs(self.config.timeout_secs);
        let stdout = log_operation!(
            "primer3_core",
            tokio::time::timeout(timeout, self.run(&encoded)).await
        )
        .map_err(|_| PrimerError::EngineTimeout(self.config.timeout_secs))??;

        BoulderRecord::decode(&stdout)
    }

    fn describe(&self) -> String {
        self.config.executable.display().to_string()
    }

    async fn version(&self) -> Result<String> {
        self.about().await
    }
}
