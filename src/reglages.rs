// src/reglages.rs
//
// Réglages (ligne de commande + environnement), natif seulement.

use clap::Parser;

/// Taille de fenêtre par défaut.
pub const LARGEUR_DEFAUT: f32 = 360.0;
pub const HAUTEUR_DEFAUT: f32 = 520.0;

/// Garde-fou : en dessous, le pavé ne tient plus.
pub const LARGEUR_MIN: f32 = 300.0;
pub const HAUTEUR_MIN: f32 = 440.0;

/// Filtre de journal si ni --log ni RUST_LOG.
pub const FILTRE_DEFAUT: &str = "warn";

#[derive(Parser, Debug, Clone)]
#[command(name = "calculatrice", about = "Calculatrice à arbre d’expression incrémental")]
pub struct Reglages {
    /// Rejoue une suite de touches sans fenêtre (ex: "7+8*5=") puis affiche les deux lignes.
    #[arg(long)]
    pub touches: Option<String>,

    /// Filtre tracing (ex: "calculatrice_arbre=trace"). Sinon RUST_LOG, sinon "warn".
    #[arg(long)]
    pub log: Option<String>,

    /// Largeur initiale de la fenêtre.
    #[arg(long, default_value_t = LARGEUR_DEFAUT)]
    pub largeur: f32,

    /// Hauteur initiale de la fenêtre.
    #[arg(long, default_value_t = HAUTEUR_DEFAUT)]
    pub hauteur: f32,
}

impl Reglages {
    /// Taille de fenêtre bornée par le minimum utilisable.
    pub fn taille_fenetre(&self) -> [f32; 2] {
        [self.largeur.max(LARGEUR_MIN), self.hauteur.max(HAUTEUR_MIN)]
    }
}
