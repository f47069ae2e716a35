// src/app/touches.rs
//
// Tables UI -> jetons (le noyau ne voit jamais un bouton ni une touche).
//
// - boutons : identifiant (libellé) -> Token
// - texte   : caractère tapé (egui::Event::Text) -> Token
// - touches : touches sans caractère (Enter, Échap, Suppr, ⌫, F9) -> Token
//
// Les chiffres et opérateurs passent par le TEXTE (dispositions clavier variées),
// jamais par egui::Key : pas de double déclenchement.

use eframe::egui::Key;

use calculatrice_touches::{Operator, Token};

/// Pavé affiché (4 colonnes). Chaque libellé est aussi l’identifiant du bouton.
pub const PAVE: [&[&str]; 5] = [
    &["C", "±", "DEL", "÷"],
    &["7", "8", "9", "×"],
    &["4", "5", "6", "−"],
    &["1", "2", "3", "+"],
    &["0", ".", "="],
];

pub fn jeton_pour_bouton(id: &str) -> Option<Token> {
    let t = match id {
        "." | "," => Token::DecimalPoint,
        "+" => Token::Operator(Operator::Add),
        "-" | "−" => Token::Operator(Operator::Sub),
        "*" | "×" => Token::Operator(Operator::Mul),
        "/" | "÷" => Token::Operator(Operator::Div),
        "=" => Token::Equals,
        "C" | "AC" => Token::Clear,
        "±" | "+/-" => Token::ToggleSign,
        "DEL" | "⌫" => Token::Backspace,
        _ => {
            let mut chars = id.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Token::from_digit_char(c),
                _ => None,
            };
        }
    };
    Some(t)
}

pub fn jeton_pour_caractere(c: char) -> Option<Token> {
    match c {
        '0'..='9' => Token::from_digit_char(c),
        '.' | ',' => Some(Token::DecimalPoint),
        '+' => Some(Token::Operator(Operator::Add)),
        '-' => Some(Token::Operator(Operator::Sub)),
        '*' | 'x' | 'X' => Some(Token::Operator(Operator::Mul)),
        '/' => Some(Token::Operator(Operator::Div)),
        '=' => Some(Token::Equals),
        'c' | 'C' => Some(Token::Clear),
        _ => None,
    }
}

pub fn jeton_pour_touche(key: Key) -> Option<Token> {
    match key {
        Key::Enter => Some(Token::Equals),
        Key::Escape | Key::Delete => Some(Token::Clear),
        Key::Backspace => Some(Token::Backspace),
        Key::F9 => Some(Token::ToggleSign),
        _ => None,
    }
}
