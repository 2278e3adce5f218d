//! Noyau — saisie incrémentale (une touche => un nouvel arbre)
//!
//! Pas de jetons ni de passe de parsing : chaque touche transforme l’arbre.
//! - chiffre / point : ne réécrit que la feuille la plus à droite
//! - opérateur       : enveloppe, ignore, grimpe en priorité, ou replie à gauche
//! - "="             : replie tout en une feuille close
//!
//! L’arbre est pris par valeur et rendu reconstruit : les parties non touchées
//! sont déplacées telles quelles, jamais recopiées.

use tracing::{debug, trace};

use super::arbre::{Noeud, Op, Operande};
use super::erreur::ErreurSaisie;
use super::eval::evaluer;
use super::format::{format_nombre, rendre_expr};
use super::touches::{lire_touches, OpOuEgal, Touche};

/* ------------------------ Chiffres ------------------------ */

/// Ajoute un chiffre ou le point décimal à l’opérande en cours.
/// Tout autre caractère laisse l’arbre inchangé.
pub fn saisir_chiffre(arbre: Noeud, c: char) -> Noeud {
    if !(c.is_ascii_digit() || c == '.') {
        return arbre;
    }

    match arbre {
        Noeud::Feuille(o) => Noeud::Feuille(etendre_operande(o, c)),
        Noeud::Binaire { op, gauche, droite } => Noeud::Binaire {
            op,
            gauche,
            droite: Box::new(saisir_chiffre(*droite, c)),
        },
    }
}

fn etendre_operande(o: Operande, c: char) -> Operande {
    // après "=", on repart d’un nouveau numéral
    let mut v = match o {
        Operande::Vide => String::new(),
        Operande::Saisie(t) => t,
        Operande::Close(_) => "0".to_string(),
    };

    if c == '.' && v.contains('.') {
        return Operande::Saisie(v);
    }
    if v == "0" && c != '.' {
        return Operande::Saisie(c.to_string());
    }

    v.push(c);
    Operande::Saisie(v)
}

/* ------------------------ Opérateurs ------------------------ */

pub fn appliquer_operateur(arbre: Noeud, t: OpOuEgal) -> Noeud {
    match t {
        OpOuEgal::Egal => {
            let resultat = format_nombre(evaluer(&arbre));
            debug!(expr = %rendre_expr(&arbre), %resultat, "calcul final");
            Noeud::feuille_close(resultat)
        }
        OpOuEgal::Op(op) => appliquer_binaire(arbre, op),
    }
}

fn appliquer_binaire(arbre: Noeud, op: Op) -> Noeud {
    match arbre {
        // nombre seul : il devient l’opérande gauche
        feuille @ Noeud::Feuille(_) => Noeud::binaire(op, feuille, Noeud::vide()),

        // deux opérateurs de suite : ignoré
        a if a.operande_en_attente() => {
            trace!(%op, "opérateur ignoré (opérande droit absent)");
            a
        }

        // + ou - en haut, * ou / qui arrive : on ne replie que la droite
        Noeud::Binaire {
            op: haut,
            gauche,
            droite,
        } if haut.priorite() < op.priorite() => {
            let v = format_nombre(evaluer(&droite));
            Noeud::Binaire {
                op: haut,
                gauche,
                droite: Box::new(Noeud::binaire(op, Noeud::feuille(v), Noeud::vide())),
            }
        }

        // priorité égale ou inférieure : tout replier à gauche (associativité gauche)
        a => {
            let v = format_nombre(evaluer(&a));
            Noeud::binaire(op, Noeud::feuille(v), Noeud::vide())
        }
    }
}

/* ------------------------ Touches ------------------------ */

/// Point d’entrée unique pour la vue : une touche quelconque.
pub fn appliquer(arbre: Noeud, touche: Touche) -> Noeud {
    let suivant = match touche {
        Touche::Chiffre(c) => saisir_chiffre(arbre, c),
        Touche::Operateur(t) => appliquer_operateur(arbre, t),
        Touche::Effacer => {
            debug!("clear");
            Noeud::nouvelle()
        }
    };
    trace!(
        %touche,
        expr = %rendre_expr(&suivant),
        profondeur = suivant.profondeur(),
        "touche appliquée"
    );
    suivant
}

/// Rejoue une suite de touches depuis une expression neuve ("7+8*5=").
pub fn rejouer(touches: &str) -> Result<Noeud, ErreurSaisie> {
    let touches = lire_touches(touches)?;
    Ok(touches.into_iter().fold(Noeud::nouvelle(), appliquer))
}
