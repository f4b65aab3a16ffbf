// src/noyau/format.rs
//
// Affichage canonique d’un f64 :
// - au moins un chiffre entier, au plus CHIFFRES_MAX décimales
// - arrondi “au pair” sur la valeur binaire EXACTE (pas sur un texte intermédiaire)
// - zéros finaux + point retirés, pas de séparateur de milliers
// - "-0" normalisé en "0"

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Précision d’affichage (décimales max).
pub const CHIFFRES_MAX: usize = 6;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal, zéros finaux retirés.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 || frac_part.is_zero() {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    format!("{signe}{int_part}.{frac}")
}

/// r -> entier “scalé” = round_half_even(r * 10^digits)
fn rational_scaled_pair(r: &BigRational, digits: usize) -> BigInt {
    let s = r * BigRational::from_integer(pow10(digits));
    let bas = s.floor();
    let reste = &s - &bas;
    let demi = BigRational::new(BigInt::from(1), BigInt::from(2));

    let n = bas.to_integer();
    let impair = !(&n % BigInt::from(2)).is_zero();

    if reste > demi || (reste == demi && impair) {
        n + 1u32
    } else {
        n
    }
}

/* ------------------------ API ------------------------ */

/// Texte d’affichage canonique (stable, relisible par `str::parse::<f64>`).
pub fn texte_affiche(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // from_float ne refuse que NaN/∞, déjà traités
    match BigRational::from_float(v) {
        Some(r) => scaled_to_decimal(rational_scaled_pair(&r, CHIFFRES_MAX), CHIFFRES_MAX),
        None => v.to_string(),
    }
}

/// Vrai si `v` n’est pas entier (v mod 1 ≠ 0).
pub fn a_partie_decimale(v: f64) -> bool {
    v % 1.0 != 0.0
}
