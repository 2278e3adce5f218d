//! Noyau — évaluation (pure, tolérante)
//!
//! - Feuille vide => 0 (l’arbre n’est jamais réécrit)
//! - "7." => 7
//! - x / 0 => 0 (une calculatrice en cours de frappe n’affiche jamais d’erreur)
//! - résultat non fini => 0, -0 => 0

use num_traits::Zero;

use super::arbre::{Noeud, Op, Operande};

/// Évalue l’arbre entier en un nombre. N’échoue jamais.
pub fn evaluer(arbre: &Noeud) -> f64 {
    match arbre {
        Noeud::Feuille(o) => valeur_operande(o),
        Noeud::Binaire { op, gauche, droite } => {
            let a = evaluer(gauche);
            let b = evaluer(droite);
            normaliser(appliquer_op(*op, a, b))
        }
    }
}

fn appliquer_op(op: Op, a: f64, b: f64) -> f64 {
    match op {
        Op::Plus => a + b,
        Op::Moins => a - b,
        Op::Fois => a * b,
        Op::Divise => {
            if b.is_zero() {
                0.0
            } else {
                a / b
            }
        }
    }
}

/// Lecture d’un numéral partiel. La saisie garantit la forme ; "." seul vaut 0.
fn valeur_operande(o: &Operande) -> f64 {
    match o {
        Operande::Vide => 0.0,
        Operande::Saisie(t) | Operande::Close(t) => normaliser(t.parse::<f64>().unwrap_or(0.0)),
    }
}

/// Garde-fou : pas d’infini/NaN dans une feuille, pas de "-0" à l’écran.
pub(crate) fn normaliser(v: f64) -> f64 {
    if !v.is_finite() || v.is_zero() {
        0.0
    } else {
        v
    }
}
