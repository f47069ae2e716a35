// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + touches.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier : lu ici (une seule fois par frame), traduit par touches.rs.

pub mod etat;
pub mod touches;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use calculatrice_touches::Token;

impl AppCalc {
    /// Jetons clavier de la frame, dans l’ordre des événements.
    fn jetons_clavier(ctx: &egui::Context) -> Vec<Token> {
        ctx.input(|i| {
            let mut out = Vec::new();
            for ev in &i.events {
                match ev {
                    egui::Event::Text(t) => {
                        out.extend(t.chars().filter_map(touches::jeton_pour_caractere));
                    }
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => out.extend(touches::jeton_pour_touche(*key)),
                    _ => {}
                }
            }
            out
        })
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for token in Self::jetons_clavier(ctx) {
            self.appuyer(token);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
