//! CLI pour la conception d'amorces PCR

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use primered_core::{PrimerDesignRequest, TemplateSequence};
use std::path::PathBuf;

mod commands;

use commands::{design, params};

#[derive(Parser)]
#[command(name = "primered")]
#[command(about = "Conception d'amorces PCR avec Primer3", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Conçoit une paire d'amorces pour chaque matrice
    Design {
        #[command(flatten)]
        input: DesignInput,

        /// Exécutable primer3_core
        #[arg(long, default_value = "primer3_core")]
        primer3: PathBuf,

        /// Délai maximal par appel, en secondes
        #[arg(long, default_value = "30")]
        timeout: u64,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Affiche l'enregistrement Boulder-IO envoyé à Primer3, sans l'exécuter
    Params {
        #[command(flatten)]
        input: DesignInput,
    },
}

/// Matrices et paramètres communs
#[derive(Args, Clone)]
pub struct DesignInput {
    /// Séquence matrice
    #[arg(short, long, conflicts_with = "fasta", required_unless_present = "fasta")]
    sequence: Option<String>,

    /// Fichier FASTA de matrices
    #[arg(short = 'i', long)]
    fasta: Option<PathBuf>,

    /// Longueur d'amorce
    #[arg(short = 'l', long, default_value = "20")]
    primer_length: usize,

    /// Contenu GC optimal (%)
    #[arg(short, long, default_value = "50.0")]
    gc_content: f64,

    /// Demander aussi une sonde interne
    #[arg(long)]
    internal_oligo: bool,

    /// Répertoire des paramètres thermodynamiques de Primer3
    #[arg(long)]
    thermo_path: Option<String>,
}

impl DesignInput {
    /// Une requête par matrice
    pub fn requests(&self) -> anyhow::Result<Vec<PrimerDesignRequest>> {
        let templates = match (&self.sequence, &self.fasta) {
            (Some(sequence), _) => vec![TemplateSequence::parse(sequence)?.with_id("sequence")],
            (None, Some(path)) => primered_core::read_fasta_templates(path)?,
            (None, None) => anyhow::bail!("--sequence ou --fasta est requis"),
        };

        if templates.is_empty() {
            anyhow::bail!("Aucune séquence dans l'entrée");
        }

        Ok(templates
            .into_iter()
            .map(|template| {
                let mut request =
                    PrimerDesignRequest::new(template.as_str(), self.primer_length, self.gc_content)
                        .with_internal_oligo(self.internal_oligo);
                if let Some(id) = template.id() {
                    request = request.with_sequence_id(id);
                }
                request
            })
            .collect())
    }

    pub fn engine_settings(&self) -> primered_core::EngineSettings {
        primered_core::EngineSettings {
            thermodynamic_parameters_path: self.thermo_path.clone(),
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    primered_core::init_logging(level, "compact");

    match cli.command {
        Commands::Design {
            input,
            primer3,
            timeout,
            format,
        } => {
            design::run(input, primer3, timeout, format).await?;
        }
        Commands::Params { input } => {
            params::run(input)?;
        }
    }

    Ok(())
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb.set_message(msg.to_string());
    pb
}
