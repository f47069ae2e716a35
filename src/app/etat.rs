//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder UN moteur et lui transmettre les jetons produits par la vue.
//!
//! Contrats :
//! - Aucune arithmétique ici (tout passe par `Engine::apply`).
//! - Ce qui est affiché se lit toujours sur le moteur (pas de copie de l’écran).

use tracing::debug;

use calculatrice_touches::{Engine, EngineConfig, EngineError, Token};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    engine: Engine,

    // --- UX ---
    /// Dernier jeton reçu (surligné dans la vue).
    pub dernier_jeton: Option<Token>,
}

impl AppCalc {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: Engine::new(config),
            dernier_jeton: None,
        }
    }

    /// Bouton ou touche : un jeton pour le moteur.
    pub fn appuyer(&mut self, token: Token) {
        self.engine.apply(token);
        self.dernier_jeton = Some(token);
        debug!(jeton = %token, ecran = %self.engine.display_text(), "touche");
    }

    pub fn ecran(&self) -> String {
        self.engine.display_text()
    }

    pub fn expression(&self) -> String {
        self.engine.expression_text()
    }

    /// Cause de l’affichage "Error", si on y est.
    pub fn erreur(&self) -> Option<&EngineError> {
        self.engine.error()
    }
}
