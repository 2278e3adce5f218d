// src/noyau/arbre.rs
//
// Arbre d’expression incrémental (sans jetons, sans parseur).
// - Feuille  : opérande en cours de frappe, vide, ou close (résultat de "=")
// - Binaire  : opérateur + gauche (déjà résolu) + droite (opérande en cours)
//
// IMPORTANT :
// - Seule la feuille la plus à droite est modifiable par la saisie.
// - "Vide" est un état explicite : on ne surcharge jamais le texte "".

use std::fmt;

/// Opérateurs binaires de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Divise => '/',
        }
    }

    /// `*` et `/` lient plus fort que `+` et `-`.
    pub fn priorite(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Divise => 2,
        }
    }

    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' | '−' => Some(Op::Moins),
            '*' | '×' | 'x' | 'X' => Some(Op::Fois),
            '/' | '÷' => Some(Op::Divise),
            _ => None,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// État d’une feuille.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operande {
    /// Rien n’a encore été tapé pour cette place (vaut 0 à l’évaluation).
    Vide,
    /// Numéral partiel ouvert : "7", "7.", "7.8".
    Saisie(String),
    /// Résultat d’un "=" : le prochain chiffre repart d’un nouveau numéral.
    Close(String),
}

impl Operande {
    pub fn texte(&self) -> &str {
        match self {
            Operande::Vide => "",
            Operande::Saisie(t) | Operande::Close(t) => t,
        }
    }

    pub fn est_vide(&self) -> bool {
        matches!(self, Operande::Vide)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Noeud {
    Feuille(Operande),
    Binaire {
        op: Op,
        gauche: Box<Noeud>,
        droite: Box<Noeud>,
    },
}

impl Noeud {
    /// Expression de départ (démarrage / "Clear") : la feuille "0".
    pub fn nouvelle() -> Noeud {
        Noeud::feuille("0")
    }

    /// Feuille ouverte ; un texte vide donne l’état `Vide`.
    pub fn feuille(texte: impl Into<String>) -> Noeud {
        let t = texte.into();
        if t.is_empty() {
            Noeud::vide()
        } else {
            Noeud::Feuille(Operande::Saisie(t))
        }
    }

    pub fn feuille_close(texte: impl Into<String>) -> Noeud {
        Noeud::Feuille(Operande::Close(texte.into()))
    }

    pub fn vide() -> Noeud {
        Noeud::Feuille(Operande::Vide)
    }

    pub fn binaire(op: Op, gauche: Noeud, droite: Noeud) -> Noeud {
        Noeud::Binaire {
            op,
            gauche: Box::new(gauche),
            droite: Box::new(droite),
        }
    }

    /// Feuille la plus à droite (descente itérative par les enfants droits).
    pub fn feuille_droite(&self) -> &Operande {
        let mut courant = self;
        loop {
            match courant {
                Noeud::Feuille(o) => return o,
                Noeud::Binaire { droite, .. } => courant = droite.as_ref(),
            }
        }
    }

    /// Un opérateur attend encore son opérande droit.
    pub fn operande_en_attente(&self) -> bool {
        self.feuille_droite().est_vide()
    }

    /// Nombre de niveaux d’opérateurs le long de la branche droite.
    pub fn profondeur(&self) -> usize {
        let mut n = 0;
        let mut courant = self;
        while let Noeud::Binaire { droite, .. } = courant {
            n += 1;
            courant = droite.as_ref();
        }
        n
    }
}

impl Default for Noeud {
    fn default() -> Self {
        Noeud::nouvelle()
    }
}
