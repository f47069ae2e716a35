// src/noyau/format.rs
//
// Affichage d’un résultat : chiffres significatifs bornés, zéros de queue retirés.
//
// Règles :
// - au plus `chiffres` significatifs ET au plus `chiffres` décimales
// - partie entière plus longue que `chiffres` : arrondie puis complétée de zéros
//   (11111111111 -> 11111111110)
// - arrondi demi-unité loin de zéro
// - |r| >= 10^entiers_max (valeur exacte, avant arrondi) => NumericOverflow
// - jamais "-0"

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreurs::EngineError;
use super::nombre::{arrondi_positif, depasse, pow10};

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

/// Convertit un entier “scalé” (×10^decimales, positif) en texte décimal complet.
fn scaled_to_decimal(scaled: &BigInt, decimales: usize) -> String {
    if decimales == 0 {
        return format!("{scaled}");
    }

    let scale = pow10(decimales);
    let int_part = scaled / &scale;
    let frac_part = scaled % &scale;

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < decimales {
        frac.insert(0, '0');
    }

    format!("{int_part}.{frac}")
}

/// "12.5000" -> "12.5" ; "3.000" -> "3"
fn trim_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Nombre de chiffres de la partie entière de |r| (0 si |r| < 1).
fn chiffres_entiers(abs: &BigRational) -> usize {
    let ent = abs.to_integer();
    if ent.is_zero() {
        0
    } else {
        ent.to_str_radix(10).len()
    }
}

/* ------------------------ Résultat affichable ------------------------ */

/// Formate un résultat pour l’écran, ou signale un dépassement.
///
/// `chiffres` borne les chiffres significatifs affichés, `entiers_max` la
/// magnitude : tout |r| < 10^entiers_max s’affiche, même si l’arrondi lui
/// ajoute un chiffre (999999999999999 -> 1000000000000000).
pub fn format_resultat(
    r: &BigRational,
    chiffres: usize,
    entiers_max: usize,
) -> Result<String, EngineError> {
    if depasse(r, entiers_max) {
        return Err(EngineError::NumericOverflow);
    }

    let abs = r.abs();
    let entiers = chiffres_entiers(&abs);

    let texte = if entiers > chiffres {
        // pas de décimales : on arrondit aux `chiffres` premiers chiffres
        let pas = pow10(entiers - chiffres);
        let tete = arrondi_positif(&(abs / BigRational::from_integer(pas.clone())));
        (tete * pas).to_str_radix(10)
    } else {
        let decimales = chiffres - entiers;
        let scaled = arrondi_positif(&(abs * BigRational::from_integer(pow10(decimales))));
        if scaled.is_zero() {
            return Ok("0".to_string());
        }
        trim_zeros(&scaled_to_decimal(&scaled, decimales)).to_string()
    };

    Ok(if r.is_negative() {
        format!("-{texte}")
    } else {
        texte
    })
}
