//! src/noyau/config.rs
//!
//! Paramètres de construction du moteur (largeurs de saisie et d’affichage).
//!
//! Contrats :
//! - Valeurs par défaut : 15 chiffres saisis, 10 chiffres significatifs affichés.
//! - Garde-fou : les deux valeurs sont bornées à `1..=LARGEUR_MAX`.
//! - Un fichier TOML peut omettre n’importe quelle clé (défaut appliqué).

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use super::erreurs::ConfigError;

/// Chiffres saisis par défaut.
pub const MAX_INPUT_DIGITS_DEFAUT: usize = 15;

/// Chiffres significatifs affichés par défaut.
pub const MAX_RESULT_DIGITS_DEFAUT: usize = 10;

/// Garde-fou : au-delà, l’affichage n’a plus de sens (et le calcul exact gonfle).
pub const LARGEUR_MAX: usize = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Nombre maximal de chiffres significatifs dans l’opérande en cours de saisie.
    pub max_input_digits: usize,
    /// Nombre maximal de chiffres significatifs d’un résultat affiché.
    pub max_result_digits: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_digits: MAX_INPUT_DIGITS_DEFAUT,
            max_result_digits: MAX_RESULT_DIGITS_DEFAUT,
        }
    }
}

impl EngineConfig {
    pub fn new(max_input_digits: usize, max_result_digits: usize) -> Self {
        Self {
            max_input_digits,
            max_result_digits,
        }
        .bornee()
    }

    /// Ramène chaque valeur dans `1..=LARGEUR_MAX` (avertit si corrigée).
    pub fn bornee(self) -> Self {
        let borne = |nom: &str, v: usize| {
            let b = v.clamp(1, LARGEUR_MAX);
            if b != v {
                warn!(parametre = nom, valeur = v, retenue = b, "valeur hors bornes corrigée");
            }
            b
        };
        Self {
            max_input_digits: borne("max_input_digits", self.max_input_digits),
            max_result_digits: borne("max_result_digits", self.max_result_digits),
        }
    }

    /// Magnitude affichable d’un résultat : |r| < 10^n.
    /// Au moins la largeur de saisie, pour qu’un opérande tapé reste calculable.
    pub fn chiffres_entiers_max(&self) -> usize {
        self.max_input_digits.max(self.max_result_digits)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = toml::from_str(s)?;
        Ok(cfg.bornee())
    }

    pub fn from_file(chemin: &Path) -> Result<Self, ConfigError> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ConfigError::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&texte)
    }
}
