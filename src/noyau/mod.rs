//! Noyau de la calculatrice : arbre d’expression incrémental
//!
//! Organisation interne :
//! - arbre.rs   : Feuille / Binaire + opérateurs
//! - saisie.rs  : une touche => un nouvel arbre (priorité, repli, "=")
//! - eval.rs    : évaluation tolérante (vide = 0, x/0 = 0)
//! - format.rs  : nombres + affichages (grand nombre, expression)
//! - touches.rs : touches + lecture depuis le texte
//! - erreur.rs  : erreurs de la frontière texte

pub mod arbre;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod saisie;
pub mod touches;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use arbre::Noeud;
pub use format::{rendre_expr, rendre_sortie};
pub use saisie::{appliquer, rejouer};
pub use touches::Touche;
