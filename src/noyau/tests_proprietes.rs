//! Tests de propriétés : invariants de la saisie sur des suites de touches aléatoires.
//!
//! - la feuille tapée est toujours un numéral partiel valide
//! - la profondeur ne dépasse jamais 2
//! - "." répété et opérateur répété sont sans effet
//! - rendre_expr puis re-frappe redonne le même arbre
//! - rien ne panique, l’évaluation est toujours finie

use proptest::prelude::*;

use super::arbre::{Noeud, Operande};
use super::eval::evaluer;
use super::saisie::{appliquer, saisir_chiffre};
use super::touches::Touche;
use super::{rejouer, rendre_expr, rendre_sortie};

fn touche() -> impl Strategy<Value = char> {
    prop_oneof![
        6 => proptest::char::range('0', '9'),
        1 => Just('.'),
        1 => prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')],
        1 => Just('='),
    ]
}

fn suite_touches(max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(touche(), 0..max).prop_map(|v| v.into_iter().collect())
}

fn numeral_partiel_valide(t: &str) -> bool {
    t.chars().filter(|c| *c == '.').count() <= 1 && t.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Toutes les feuilles ouvertes (en cours de frappe) de l’arbre.
fn feuilles_ouvertes(a: &Noeud, out: &mut Vec<String>) {
    match a {
        Noeud::Feuille(Operande::Saisie(t)) => out.push(t.clone()),
        Noeud::Feuille(_) => {}
        Noeud::Binaire { gauche, droite, .. } => {
            feuilles_ouvertes(gauche, out);
            feuilles_ouvertes(droite, out);
        }
    }
}

/// Re-frappe d’une expression affichée : "7 + 8 * 5" => "7+8*5".
fn refrappe(expr: &str) -> String {
    expr.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #[test]
    fn chiffres_affiches_tels_que_tapes(chiffres in proptest::collection::vec(proptest::char::range('0', '9'), 1..16)) {
        let mut a = Noeud::nouvelle();
        let mut attendu = String::from("0");
        for c in chiffres {
            a = saisir_chiffre(a, c);
            if attendu == "0" {
                attendu.clear();
            }
            attendu.push(c);
            prop_assert_eq!(rendre_sortie(&a), attendu.clone());
        }
    }

    #[test]
    fn invariants_de_forme(touches in suite_touches(40)) {
        let a = rejouer(&touches).expect("touches valides");
        prop_assert!(a.profondeur() <= 2, "profondeur {} pour {:?}", a.profondeur(), touches);

        // la feuille droite ouverte est un numéral partiel (seul l’utilisateur l’écrit)
        if let Operande::Saisie(t) = a.feuille_droite() {
            prop_assert!(numeral_partiel_valide(t), "feuille {:?}", t);
        }

        let v = evaluer(&a);
        prop_assert!(v.is_finite());
        let _ = rendre_sortie(&a);
    }

    #[test]
    fn point_repete_sans_effet(touches in suite_touches(20)) {
        let a = rejouer(&touches).expect("touches valides");
        let une_fois = saisir_chiffre(a, '.');
        let deux_fois = saisir_chiffre(une_fois.clone(), '.');
        prop_assert_eq!(une_fois, deux_fois);
    }

    #[test]
    fn operateur_repete_sans_effet(touches in suite_touches(20), op in prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')], op2 in prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]) {
        let a = rejouer(&touches).expect("touches valides");
        let t1 = Touche::depuis_char(op).expect("opérateur");
        let t2 = Touche::depuis_char(op2).expect("opérateur");
        let une_fois = appliquer(a, t1);
        let deux_fois = appliquer(une_fois.clone(), t2);
        prop_assert_eq!(une_fois, deux_fois);
    }

    #[test]
    fn refrappe_de_l_expression(chiffres in proptest::collection::vec(
        (proptest::collection::vec(proptest::char::range('1', '9'), 1..4),
         prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]),
        1..4)) {
        // sans "=" : nombres positifs, un seul opérateur après chaque nombre
        let mut touches = String::new();
        for (nombre, op) in &chiffres {
            touches.extend(nombre.iter());
            touches.push(*op);
        }
        let a = rejouer(&touches).expect("touches valides");
        let b = rejouer(&refrappe(&rendre_expr(&a))).expect("expression affichée re-frappable");
        prop_assert_eq!(rendre_expr(&a), rendre_expr(&b));
    }
}

#[test]
fn feuilles_ouvertes_restent_des_numeraux() {
    let a = rejouer("12.5+3*4.25").expect("touches valides");
    let mut feuilles = Vec::new();
    feuilles_ouvertes(&a, &mut feuilles);
    assert_eq!(feuilles, ["12.5", "3", "4.25"]);
    assert!(feuilles.iter().all(|t| numeral_partiel_valide(t)));
}
