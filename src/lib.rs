//! Calculatrice à touches — noyau réutilisable.
//!
//! L’UI (natif ou web) traduit clics et touches en [`Token`], appelle
//! [`Engine::apply`] puis affiche [`Engine::display_text`].

pub mod noyau;

pub use noyau::{ConfigError, Engine, EngineConfig, EngineError, Operator, Token, ERROR_DISPLAY};
