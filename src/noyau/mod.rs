//! Noyau de la calculatrice à touches
//!
//! Organisation interne :
//! - jetons.rs   : Token / Operator (entrée normalisée)
//! - config.rs   : EngineConfig (largeurs saisie/affichage) + TOML
//! - erreurs.rs  : EngineError / ConfigError
//! - nombre.rs   : opérandes exacts (texte <-> rationnel) + 4 opérations
//! - format.rs   : affichage d’un résultat (chiffres significatifs, dépassement)
//! - moteur.rs   : Engine (machine à états + écran)

pub mod config;
pub mod erreurs;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod nombre;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use config::EngineConfig;
pub use erreurs::{ConfigError, EngineError};
pub use jetons::{Operator, Token};
pub use moteur::{Engine, EngineState, ERROR_DISPLAY};
