// src/noyau/erreurs.rs
//
// Taxonomie des erreurs du noyau.
// - EngineError : jamais retournée par `apply`, elle devient un ÉTAT (affichage "Error").
// - ConfigError : seulement au démarrage (lecture/validation de la configuration).

use std::path::PathBuf;

use thiserror::Error;

/// Causes possibles d’un passage en état d’erreur.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Chiffre refusé : l’opérande a déjà `max_input_digits` chiffres.
    /// Jamais stockée : le chiffre est simplement ignoré.
    #[error("saisie trop longue (chiffre ignoré)")]
    InputOverflow,

    #[error("division par zéro")]
    DivisionByZero,

    /// Résultat au-delà de la magnitude affichable (`EngineConfig::chiffres_entiers_max`).
    #[error("dépassement de capacité")]
    NumericOverflow,

    /// Texte d’opérande illisible (ne devrait pas arriver : garde-fou).
    #[error("opérande invalide: {0:?}")]
    MalformedOperand(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("lecture de {} impossible", chemin.display())]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML invalide")]
    Toml(#[from] toml::de::Error),
}
