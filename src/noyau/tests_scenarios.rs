//! Scénarios clavier complets : ce que l’utilisateur voit après chaque touche.
//!
//! Chaque scénario part d’une expression neuve ("0") et vérifie les deux
//! affichages (grand nombre + expression) ou la valeur finale après "=".

use test_case::test_case;

use super::arbre::Noeud;
use super::eval::evaluer;
use super::touches::lire_touches;
use super::{appliquer, rejouer, rendre_expr, rendre_sortie};

fn affichages(touches: &str) -> (String, String) {
    let a = rejouer(touches).unwrap_or_else(|e| panic!("touches={touches:?} err={e}"));
    (rendre_sortie(&a), rendre_expr(&a))
}

fn resultat(touches: &str) -> String {
    let (sortie, _expr) = affichages(touches);
    sortie
}

/* ------------------------ Priorité + associativité ------------------------ */

#[test_case("7+8*5=", "47" ; "multiplication avant addition")]
#[test_case("7*8+5=", "61" ; "multiplication puis addition")]
#[test_case("7+8+5=", "20" ; "addition gauche a droite")]
#[test_case("20-5-3=", "12" ; "soustraction gauche a droite")]
#[test_case("100/5/2=", "10" ; "division gauche a droite")]
#[test_case("2+3*4*5=", "62" ; "deux multiplications de suite")]
#[test_case("2+3*4-1=", "13" ; "retour a la priorite basse")]
#[test_case("8-6/4=", "6.5" ; "division a droite d une soustraction")]
#[test_case("10/2=", "5" ; "entier sans point zero")]
#[test_case("10/4=", "2.5" ; "decimal conserve")]
#[test_case("5/0=", "0" ; "division par zero")]
#[test_case("2-5=", "-3" ; "resultat negatif")]
#[test_case("7+=", "7" ; "operande droit absent")]
#[test_case("=", "0" ; "egal seul")]
fn valeur_finale(touches: &str, attendu: &str) {
    assert_eq!(resultat(touches), attendu);
}

/* ------------------------ Affichages pendant la frappe ------------------------ */

#[test]
fn affichages_pas_a_pas() {
    let etapes = [
        ("7", "7", "7"),
        ("7+", "7", "7 + "),
        ("7+8", "8", "7 + 8"),
        ("7+8*", "8", "7 + 8 * "),
        ("7+8*5", "5", "7 + 8 * 5"),
        ("7+8*5=", "47", "47"),
        ("7+8*5=-", "47", "47 - "),
        ("7+8*5=-2", "2", "47 - 2"),
    ];
    for (touches, sortie, expr) in etapes {
        assert_eq!(affichages(touches), (sortie.to_string(), expr.to_string()), "touches={touches:?}");
    }
}

#[test]
fn repli_apres_priorite_haute() {
    // 7 + 8 * 5 puis + : tout est replié à gauche
    assert_eq!(affichages("7+8*5+"), ("47".to_string(), "47 + ".to_string()));
    // 7 + 8 * 5 puis * : seule la droite est repliée, la profondeur reste 2
    let a = rejouer("7+8*5*").unwrap();
    assert_eq!(rendre_expr(&a), "7 + 40 * ");
    assert_eq!(a.profondeur(), 2);
}

#[test]
fn chiffre_apres_egal_repart() {
    assert_eq!(affichages("2+2=3"), ("3".to_string(), "3".to_string()));
    assert_eq!(affichages("2+2=."), ("0.".to_string(), "0.".to_string()));
}

#[test]
fn operateur_apres_egal_continue_le_calcul() {
    assert_eq!(resultat("2+2=*3="), "12");
}

#[test]
fn clear_au_milieu() {
    assert_eq!(affichages("7+8*C"), ("0".to_string(), "0".to_string()));
    assert_eq!(resultat("7+8*C5+1="), "6");
}

#[test]
fn zeros_en_tete_absorbes() {
    assert_eq!(resultat("0007"), "7");
    assert_eq!(resultat("0.05"), "0.05");
    assert_eq!(resultat("7+0"), "0");
    assert_eq!(resultat("7+09"), "9");
}

#[test]
fn point_sur_operande_vide() {
    // "7 + ." : le point seul vaut 0 à l’évaluation
    assert_eq!(affichages("7+."), (".".to_string(), "7 + .".to_string()));
    assert_eq!(resultat("7+.="), "7");
    assert_eq!(resultat("7+.5="), "7.5");
}

#[test]
fn precision_flottante_conservee() {
    assert_eq!(resultat(".1+.2="), "0.30000000000000004");
}

#[test]
fn evaluation_ne_modifie_pas_l_arbre() {
    let a = rejouer("7+").unwrap();
    let avant = a.clone();
    assert_eq!(evaluer(&a), 7.0);
    assert_eq!(a, avant);
    // l’opérande est toujours en attente : un second + reste ignoré
    let b = lire_touches("+")
        .unwrap()
        .into_iter()
        .fold(a, appliquer);
    assert_eq!(b, avant);
}

#[test]
fn expression_neuve() {
    let a = Noeud::nouvelle();
    assert_eq!(rendre_sortie(&a), "0");
    assert_eq!(rendre_expr(&a), "0");
    assert_eq!(a, Noeud::default());
}
