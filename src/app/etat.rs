//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir UN arbre d’expression (tout l’état de la calculatrice) et les deux
//! affichages qui en découlent. Chaque touche remplace l’arbre en entier.
//!
//! Contrats :
//! - Aucune interprétation de la forme de l’arbre ici (c’est le noyau).
//! - Affichages recalculés après chaque touche, jamais à moitié.

use crate::noyau::{self, Noeud, Touche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- état ---
    pub expr: Noeud,

    // --- sorties ---
    pub sortie: String, // grand nombre (opérande en cours)
    pub ligne: String,  // expression complète
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec(Noeud::nouvelle())
    }
}

impl AppCalc {
    fn avec(expr: Noeud) -> Self {
        let mut app = Self {
            expr,
            sortie: String::new(),
            ligne: String::new(),
        };
        app.rafraichir();
        app
    }

    /// Une touche : nouvel arbre, puis affichages.
    pub fn appuyer(&mut self, touche: Touche) {
        let expr = std::mem::take(&mut self.expr);
        self.expr = noyau::appliquer(expr, touche);
        self.rafraichir();
    }

    fn rafraichir(&mut self) {
        self.sortie = noyau::rendre_sortie(&self.expr);
        self.ligne = noyau::rendre_expr(&self.expr);
    }
}
