// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran deux lignes : expression en attente ("12 +") puis écran principal
// - Pavé 4 colonnes (touches.rs::PAVE), gros boutons (tactile)
// - En erreur : la cause s’affiche sous l’écran (l’écran, lui, dit "Error")

use eframe::egui;

use super::etat::AppCalc;
use super::touches::{jeton_pour_bouton, PAVE};

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];
const TAILLE_ECRAN: f32 = 34.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(4.0 * TAILLE_BOUTON[0] + 3.0 * 6.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne vide gardée : l’écran ne “saute” pas
                    let expr = self.expression();
                    ui.monospace(if expr.is_empty() { " ".to_string() } else { expr });

                    ui.label(
                        egui::RichText::new(self.ecran())
                            .monospace()
                            .size(TAILLE_ECRAN),
                    );
                });
            });

        if let Some(e) = self.erreur() {
            ui.colored_label(ui.visuals().error_fg_color, e.to_string());
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for id in ligne {
                        self.bouton(ui, id);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, id: &str) {
        let Some(token) = jeton_pour_bouton(id) else {
            return;
        };

        let actif = self.dernier_jeton == Some(token);
        let resp = ui.add_sized(
            TAILLE_BOUTON,
            egui::Button::new(egui::RichText::new(id).size(20.0)).selected(actif),
        );
        if resp.clicked() {
            self.appuyer(token);
        }
    }
}
