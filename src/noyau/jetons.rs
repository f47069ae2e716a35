// src/noyau/jetons.rs
//
// Jetons d’entrée normalisés (ce que l’UI envoie au moteur).
// Le moteur ne connaît ni touches clavier ni boutons : seulement ces jetons.

use std::fmt;

/// Opérateur binaire (aucune priorité : évaluation gauche -> droite).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    #[cfg(test)]
    pub(crate) const TOUS: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Symbole affiché sur la ligne d’expression.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "−",
            Operator::Mul => "×",
            Operator::Div => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// Chiffre 0..=9 (garanti par `Token::digit`).
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    ToggleSign,
    Backspace,
}

impl Token {
    /// Construit un jeton chiffre ; `None` si `d > 9`.
    pub fn digit(d: u8) -> Option<Token> {
        (d <= 9).then_some(Token::Digit(d))
    }

    /// Chiffre ASCII ('0'..='9') -> jeton.
    pub fn from_digit_char(c: char) -> Option<Token> {
        c.to_digit(10).and_then(|d| Token::digit(d as u8))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(d) => write!(f, "{d}"),
            Token::DecimalPoint => f.write_str("."),
            Token::Operator(op) => write!(f, "{op}"),
            Token::Equals => f.write_str("="),
            Token::Clear => f.write_str("C"),
            Token::ToggleSign => f.write_str("±"),
            Token::Backspace => f.write_str("⌫"),
        }
    }
}

/// Suite de jetons en texte (messages des campagnes de tests).
#[cfg(test)]
pub(crate) fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
