// src/noyau/nombre.rs
//
// Opérandes exacts : texte décimal <-> BigRational, et les 4 opérations.
// Aucun flottant : 0.1 + 0.2 vaut exactement 3/10.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreurs::EngineError;
use super::jetons::Operator;

pub(crate) fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Lit un opérande tel que saisi : `-?\d+(\.\d*)?` (ex: "12", "-0.5", "3.").
pub fn parse_operande(texte: &str) -> Result<BigRational, EngineError> {
    let invalide = || EngineError::MalformedOperand(texte.to_string());

    let (neg, corps) = match texte.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, texte),
    };

    let (ent, frac) = match corps.split_once('.') {
        Some((e, f)) => (e, f),
        None => (corps, ""),
    };

    let tout_chiffres = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if ent.is_empty() || !tout_chiffres(ent) || !tout_chiffres(frac) {
        return Err(invalide());
    }

    // "12.50" -> 1250 / 10^2
    let mut chiffres = String::with_capacity(ent.len() + frac.len());
    chiffres.push_str(ent);
    chiffres.push_str(frac);
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;

    let r = BigRational::new(n, pow10(frac.len()));
    Ok(if neg { -r } else { r })
}

/// Chiffres qui comptent pour la limite de saisie.
/// Le "0" de tête d’un "0.xxx" ne compte pas ; les zéros après la virgule comptent
/// (ils occupent l’affichage).
pub fn chiffres_significatifs(texte: &str) -> usize {
    let s = texte.trim_start_matches('-');
    let s = s.strip_prefix("0.").unwrap_or(s);
    s.bytes().filter(u8::is_ascii_digit).count()
}

/// a ⟨op⟩ b, exact.
pub fn calculer(a: &BigRational, op: Operator, b: &BigRational) -> Result<BigRational, EngineError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div => {
            if b.is_zero() {
                return Err(EngineError::DivisionByZero);
            }
            Ok(a / b)
        }
    }
}

/// Vrai si |r| >= 10^chiffres (partie entière de plus de `chiffres` chiffres).
pub(crate) fn depasse(r: &BigRational, chiffres: usize) -> bool {
    r.abs() >= BigRational::from_integer(pow10(chiffres))
}

/// Arrondi à l’entier, demi-unité loin de zéro, pour r >= 0.
pub(crate) fn arrondi_positif(r: &BigRational) -> BigInt {
    let deux = BigInt::from(2);
    let n = r.numer() * &deux + r.denom();
    let d = r.denom() * &deux;
    // r >= 0 : la division entière est un floor
    n / d
}
