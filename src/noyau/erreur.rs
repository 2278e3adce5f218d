// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs de la frontière texte -> touches (clavier, ligne de commande).
/// Le noyau lui-même n’échoue jamais.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurSaisie {
    /// Caractère qui ne correspond à aucune touche de la calculatrice.
    #[error("touche inconnue {touche:?} (position {position})")]
    ToucheInconnue { touche: char, position: usize },
}
