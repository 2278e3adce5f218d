// src/journal.rs
//
// Journalisation (tracing), natif seulement : une seule initialisation au démarrage.

use tracing_subscriber::EnvFilter;

use crate::reglages::FILTRE_DEFAUT;

/// Priorité : --log, puis RUST_LOG, puis FILTRE_DEFAUT. Sortie sur stderr.
pub fn initialiser(filtre: Option<&str>) {
    let filtre = match filtre {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRE_DEFAUT)),
    };

    // try_init : un second appel est sans effet
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
