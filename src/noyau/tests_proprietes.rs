//! Propriétés (proptest) du moteur.
//!
//! Chaque propriété correspond à un comportement promis à l’UI :
//! concaténation des chiffres, Clear, signe involutif, point unique, Equals répété.

use proptest::prelude::*;

use super::config::EngineConfig;
use super::jetons::{Operator, Token};
use super::moteur::{Engine, ERROR_DISPLAY};
use super::nombre::parse_operande;

// ===== Stratégies =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Sub),
        Just(Operator::Mul),
        Just(Operator::Div),
    ]
}

fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        4 => digit_strategy().prop_map(Token::Digit),
        1 => Just(Token::DecimalPoint),
        1 => operator_strategy().prop_map(Token::Operator),
        1 => Just(Token::Equals),
        1 => Just(Token::Clear),
        1 => Just(Token::ToggleSign),
        1 => Just(Token::Backspace),
    ]
}

/// Texte attendu après une suite de chiffres : zéros de tête effondrés.
fn attendu_chiffres(ds: &[u8]) -> String {
    let s: String = ds.iter().map(|d| char::from(b'0' + d)).collect();
    let t = s.trim_start_matches('0');
    if t.is_empty() {
        "0".to_string()
    } else {
        t.to_string()
    }
}

proptest! {
    /// Suite de chiffres (dans la limite) = concaténation, modulo zéros de tête.
    #[test]
    fn prop_chiffres_concatenes(ds in prop::collection::vec(digit_strategy(), 1..=15)) {
        let mut e = Engine::default();
        e.apply_all(ds.iter().map(|d| Token::Digit(*d)));
        prop_assert_eq!(e.display_text(), attendu_chiffres(&ds));
    }

    /// Au-delà de la limite, les chiffres sont ignorés sans erreur.
    #[test]
    fn prop_saisie_tronquee(ds in prop::collection::vec(1u8..=9u8, 16..40)) {
        let mut e = Engine::default();
        e.apply_all(ds.iter().map(|d| Token::Digit(*d)));
        prop_assert_eq!(e.display_text(), attendu_chiffres(&ds[..15]));
        prop_assert!(e.error().is_none());
    }

    /// Clear ramène toujours "0", quel que soit l’état.
    #[test]
    fn prop_clear_remet_a_zero(ts in prop::collection::vec(token_strategy(), 0..60)) {
        let mut e = Engine::default();
        e.apply_all(ts);
        e.apply(Token::Clear);
        prop_assert_eq!(e.display_text(), "0");
        prop_assert_eq!(e.expression_text(), "");
    }

    /// ToggleSign deux fois = état inchangé.
    #[test]
    fn prop_signe_involutif(ts in prop::collection::vec(token_strategy(), 0..60)) {
        let mut e = Engine::default();
        e.apply_all(ts);
        let avant = e.state().clone();
        e.apply(Token::ToggleSign);
        e.apply(Token::ToggleSign);
        prop_assert_eq!(e.state(), &avant);
    }

    /// Jamais deux points à l’écran.
    #[test]
    fn prop_point_unique(ts in prop::collection::vec(token_strategy(), 0..60)) {
        let mut e = Engine::default();
        for t in ts {
            e.apply(t);
            e.apply(Token::DecimalPoint);
            e.apply(Token::DecimalPoint);
            prop_assert!(e.display_text().matches('.').count() <= 1);
        }
    }

    /// Equals répété sans nouvel opérande : aucun effet.
    #[test]
    fn prop_egal_repete_sans_effet(ts in prop::collection::vec(token_strategy(), 0..60)) {
        let mut e = Engine::default();
        e.apply_all(ts);
        e.apply(Token::Equals);
        let apres_un = e.state().clone();
        e.apply(Token::Equals);
        prop_assert_eq!(e.state(), &apres_un);
    }

    /// Écran toujours "Error" ou nombre lisible, et de largeur bornée.
    #[test]
    fn prop_ecran_lisible_et_borne(ts in prop::collection::vec(token_strategy(), 0..80)) {
        let cfg = EngineConfig::default();
        let mut e = Engine::new(cfg);
        for t in ts {
            e.apply(t);
            let ecran = e.display_text();
            if ecran != ERROR_DISPLAY {
                prop_assert!(parse_operande(&ecran).is_ok(), "écran {:?}", ecran);
                prop_assert!(ecran.len() <= cfg.max_input_digits + 3, "écran {:?}", ecran);
            }
        }
    }

    /// Chaîne a + b + c = : gauche -> droite (entiers courts, exact).
    #[test]
    fn prop_addition_enchainee(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let mut e = Engine::default();
        for (i, n) in [a, b, c].into_iter().enumerate() {
            if i > 0 {
                e.apply(Token::Operator(Operator::Add));
            }
            e.apply_all(n.to_string().chars().filter_map(Token::from_digit_char));
        }
        e.apply(Token::Equals);
        prop_assert_eq!(e.display_text(), (a + b + c).to_string());
    }

    /// Un chiffre sort toujours de l’état d’erreur.
    #[test]
    fn prop_chiffre_sort_de_erreur(n in 1u8..=9u8, d in digit_strategy()) {
        let mut e = Engine::default();
        e.apply_all([Token::Digit(n), Token::Operator(Operator::Div), Token::Digit(0), Token::Equals]);
        prop_assert_eq!(e.display_text(), ERROR_DISPLAY);
        e.apply(Token::Digit(d));
        prop_assert_eq!(e.display_text(), d.to_string());
    }
}
