// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Deux affichages : grand nombre + expression, alignés à droite
// - Pavé : Clear /, 7 8 9 *, 4 5 6 -, 1 2 3 +, 0 . =
// - Clavier : caractères tapés => touches, Enter => "=", Escape/Delete => Clear

use eframe::egui;
use tracing::debug;

use super::etat::AppCalc;
use crate::noyau::arbre::Op;
use crate::noyau::touches::{OpOuEgal, Touche};

const TAILLE_SORTIE: f32 = 34.0;
const TAILLE_LIGNE: f32 = 15.0;
const BOUTON: [f32; 2] = [64.0, 52.0];
const ESPACE: f32 = 8.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        ui.vertical_centered(|ui| {
            ui.monospace("Calculatrice");
            ui.add_space(4.0);

            self.ui_affichages(ui);

            ui.add_space(ESPACE);

            self.ui_pave(ui);
        });
    }

    /// Clavier physique : à appeler une fois par frame.
    pub fn clavier(&mut self, ctx: &egui::Context) {
        let touches: Vec<Touche> = ctx.input(|i| {
            let mut out = Vec::new();
            for ev in &i.events {
                match ev {
                    egui::Event::Text(s) => {
                        for c in s.chars() {
                            match Touche::depuis_char(c) {
                                Some(t) => out.push(t),
                                None => debug!(touche = ?c, "touche clavier ignorée"),
                            }
                        }
                    }
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => match key {
                        egui::Key::Enter => out.push(Touche::Operateur(OpOuEgal::Egal)),
                        egui::Key::Escape | egui::Key::Delete => out.push(Touche::Effacer),
                        _ => {}
                    },
                    _ => {}
                }
            }
            out
        });

        for t in touches {
            self.appuyer(t);
        }
    }

    fn ui_affichages(&mut self, ui: &mut egui::Ui) {
        let largeur = BOUTON[0] * 4.0 + ESPACE * 3.0;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_width(largeur);

                // grand nombre : défile à gauche, reste collé à droite
                egui::ScrollArea::horizontal()
                    .id_salt("sortie")
                    .stick_to_right(true)
                    .show(ui, |ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(&self.sortie)
                                    .monospace()
                                    .size(TAILLE_SORTIE),
                            );
                        });
                    });

                ui.separator();

                egui::ScrollArea::horizontal()
                    .id_salt("ligne")
                    .stick_to_right(true)
                    .show(ui, |ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(&self.ligne)
                                    .monospace()
                                    .size(TAILLE_LIGNE)
                                    .color(ui.visuals().weak_text_color()),
                            );
                        });
                    });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let chiffre = |c: char| Touche::Chiffre(c);
        let op = |o: Op| Touche::Operateur(OpOuEgal::Op(o));

        let rangees: [&[Touche]; 4] = [
            &[chiffre('7'), chiffre('8'), chiffre('9'), op(Op::Fois)],
            &[chiffre('4'), chiffre('5'), chiffre('6'), op(Op::Moins)],
            &[chiffre('1'), chiffre('2'), chiffre('3'), op(Op::Plus)],
            &[
                chiffre('0'),
                chiffre('.'),
                Touche::Operateur(OpOuEgal::Egal),
            ],
        ];

        // Clear prend trois places, "/" la dernière
        ui.horizontal(|ui| {
            let large = [BOUTON[0] * 3.0 + ESPACE * 2.0, BOUTON[1]];
            self.bouton(ui, Touche::Effacer, large);
            self.bouton(ui, op(Op::Divise), BOUTON);
        });

        for (i, rangee) in rangees.iter().enumerate() {
            ui.horizontal(|ui| {
                for (j, t) in rangee.iter().enumerate() {
                    // "0" en pilule sur deux places
                    let taille = if i == 3 && j == 0 {
                        [BOUTON[0] * 2.0 + ESPACE, BOUTON[1]]
                    } else {
                        BOUTON
                    };
                    self.bouton(ui, *t, taille);
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche, taille: [f32; 2]) {
        let texte = egui::RichText::new(touche.to_string()).size(20.0);
        let mut b = egui::Button::new(texte);
        if matches!(touche, Touche::Operateur(_)) {
            b = b.fill(ui.visuals().selection.bg_fill);
        }

        if ui.add_sized(taille, b).clicked() {
            self.appuyer(touche);
        }
    }
}
