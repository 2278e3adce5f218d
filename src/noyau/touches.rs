// src/noyau/touches.rs
//
// Touches de la calculatrice + lecture depuis le texte.
// Supporte:
// - chiffres 0-9, point décimal ("." ou ",")
// - opérateurs + - * / (et × ÷ x −)
// - "=" (fin de calcul)
// - "c" / "C" (Clear)

use std::fmt;

use super::arbre::Op;
use super::erreur::ErreurSaisie;

/// Opérateur binaire ou "=".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpOuEgal {
    Op(Op),
    Egal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// '0'..='9' ou '.'
    Chiffre(char),
    Operateur(OpOuEgal),
    Effacer,
}

impl Touche {
    pub fn depuis_char(c: char) -> Option<Touche> {
        match c {
            '0'..='9' | '.' => Some(Touche::Chiffre(c)),
            ',' => Some(Touche::Chiffre('.')),
            '=' => Some(Touche::Operateur(OpOuEgal::Egal)),
            'c' | 'C' => Some(Touche::Effacer),
            _ => Op::depuis_char(c).map(|op| Touche::Operateur(OpOuEgal::Op(op))),
        }
    }
}

/// Lit une suite de touches ("7+8*5="). Les espaces sont ignorés.
pub fn lire_touches(s: &str) -> Result<Vec<Touche>, ErreurSaisie> {
    s.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, c)| {
            Touche::depuis_char(c).ok_or(ErreurSaisie::ToucheInconnue { touche: c, position })
        })
        .collect()
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Touche::Chiffre(c) => write!(f, "{c}"),
            Touche::Operateur(OpOuEgal::Op(op)) => write!(f, "{op}"),
            Touche::Operateur(OpOuEgal::Egal) => write!(f, "="),
            Touche::Effacer => write!(f, "Clear"),
        }
    }
}
