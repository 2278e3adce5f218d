// src/noyau/format.rs
//
// Affichages (lecture seule) :
// - format_nombre : entier sans ".0", sinon décimal le plus court (jamais d’exposant)
// - rendre_sortie : le “grand nombre” (opérande en cours, ou l’opérande précédent)
// - rendre_expr   : l’expression complète en infixe

use super::arbre::{Noeud, Operande};
use super::eval::{evaluer, normaliser};

/* ------------------------ Nombres ------------------------ */

/// 5.0 -> "5", 2.5 -> "2.5", 1e20 -> "100000000000000000000".
pub fn format_nombre(v: f64) -> String {
    // Display de f64 : aller-retour exact, sans notation scientifique.
    format!("{}", normaliser(v))
}

/* ------------------------ Affichage principal ------------------------ */

/// Opérande en cours de frappe ; si la place est encore vide, l’opérande gauche.
pub fn rendre_sortie(arbre: &Noeud) -> String {
    let mut courant = arbre;
    loop {
        match courant {
            Noeud::Feuille(o) => return o.texte().to_string(),
            Noeud::Binaire { gauche, droite, .. } => match droite.as_ref() {
                Noeud::Binaire { .. } => courant = droite.as_ref(),
                Noeud::Feuille(Operande::Vide) => return texte_gauche(gauche),
                Noeud::Feuille(o) => return o.texte().to_string(),
            },
        }
    }
}

fn texte_gauche(gauche: &Noeud) -> String {
    match gauche {
        Noeud::Feuille(o) => o.texte().to_string(),
        // jamais produit par la saisie : on montre la valeur du sous-arbre
        Noeud::Binaire { .. } => format_nombre(evaluer(gauche)),
    }
}

/* ------------------------ Affichage expression ------------------------ */

/// "7 + 8 * 5" : la forme de l’arbre encode déjà la priorité, pas de parenthèses.
pub fn rendre_expr(arbre: &Noeud) -> String {
    let mut out = String::new();
    ecrire_expr(arbre, &mut out);
    out
}

fn ecrire_expr(arbre: &Noeud, out: &mut String) {
    match arbre {
        Noeud::Feuille(o) => out.push_str(o.texte()),
        Noeud::Binaire { op, gauche, droite } => {
            ecrire_expr(gauche, out);
            out.push(' ');
            out.push(op.symbole());
            out.push(' ');
            ecrire_expr(droite, out);
        }
    }
}
