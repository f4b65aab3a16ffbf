// src/noyau/operations.rs
//
// Catalogue des opérations (table statique symbole -> Operation)
// -------------------------------------------------------------
// - Constantes : π, e, Rand
// - Unaires    : calcul + description + validité (trois fonctions indépendantes)
// - Binaires   : idem, sur (premier, second)
// - Egal       : "=" (force la résolution de l’opération en attente)
//
// Construit une seule fois (OnceLock), jamais modifié ensuite.
// NOTE: "Rand" est tiré à la construction => valeur FIGÉE pour tout le processus.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::erreur::ErreurDomaine;
use super::format::a_partie_decimale;

pub type CalculUnaire = fn(f64) -> f64;
pub type DescriptionUnaire = fn(&str) -> String;
pub type ValiditeUnaire = fn(f64) -> Option<ErreurDomaine>;

pub type CalculBinaire = fn(f64, f64) -> f64;
pub type DescriptionBinaire = fn(&str, &str) -> String;
pub type ValiditeBinaire = fn(f64, f64) -> Option<ErreurDomaine>;

#[derive(Clone, Copy, Debug)]
pub enum Operation {
    Constante(f64),
    Unaire {
        calcul: CalculUnaire,
        decrire: DescriptionUnaire,
        valider: ValiditeUnaire,
    },
    Binaire {
        calcul: CalculBinaire,
        decrire: DescriptionBinaire,
        valider: ValiditeBinaire,
    },
    Egal,
}

/// Symbole du pourcentage (traité à part par l’évaluateur).
pub const POURCENT: &str = "%";

/* ------------------------ Fonctions numériques ------------------------ */

/// x! (1 pour x ≤ 1). Itératif : pas de récursion profonde sur grands x.
pub fn factorielle(x: f64) -> f64 {
    let mut acc = 1.0;
    let mut k = x;
    while k > 1.0 {
        acc *= k;
        if acc.is_infinite() {
            break;
        }
        k -= 1.0;
    }
    acc
}

/// Racine n-ième ; les racines impaires d’un négatif restent réelles.
pub fn racine_n(x: f64, n: f64) -> f64 {
    if x < 0.0 && est_impair(n) {
        -(-x).powf(1.0 / n)
    } else {
        x.powf(1.0 / n)
    }
}

fn est_impair(n: f64) -> bool {
    (n % 2.0).abs() == 1.0
}

/* ------------------------ Validités ------------------------ */

fn toujours_valide(_: f64) -> Option<ErreurDomaine> {
    None
}

fn toujours_valide2(_: f64, _: f64) -> Option<ErreurDomaine> {
    None
}

fn illegale_si(cond: bool) -> Option<ErreurDomaine> {
    cond.then_some(ErreurDomaine::OperationIllegale)
}

fn valide_factorielle(x: f64) -> Option<ErreurDomaine> {
    (a_partie_decimale(x) || x <= 1.0).then_some(ErreurDomaine::EntreeInvalide)
}

fn valide_log(x: f64) -> Option<ErreurDomaine> {
    illegale_si(x <= 0.0)
}

/* ------------------------ Table ------------------------ */

fn unaire(calcul: CalculUnaire, decrire: DescriptionUnaire, valider: ValiditeUnaire) -> Operation {
    Operation::Unaire {
        calcul,
        decrire,
        valider,
    }
}

fn binaire(
    calcul: CalculBinaire,
    decrire: DescriptionBinaire,
    valider: ValiditeBinaire,
) -> Operation {
    Operation::Binaire {
        calcul,
        decrire,
        valider,
    }
}

fn construire_catalogue() -> HashMap<&'static str, Operation> {
    use Operation::*;

    let tirage: f64 = rand::random();
    tracing::debug!(tirage, "catalogue construit (Rand figé)");

    HashMap::from([
        // --- constantes ---
        ("π", Constante(std::f64::consts::PI)),
        ("e", Constante(std::f64::consts::E)),
        ("Rand", Constante(tirage)),
        // --- unaires ---
        (POURCENT, unaire(|x| x / 100.0, |d| format!("({d})%"), toujours_valide)),
        ("√", unaire(f64::sqrt, |d| format!("√({d})"), |x| illegale_si(x < 0.0))),
        ("cos", unaire(f64::cos, |d| format!("cos({d})"), toujours_valide)),
        ("sin", unaire(f64::sin, |d| format!("sin({d})"), toujours_valide)),
        ("tan", unaire(f64::tan, |d| format!("tan({d})"), toujours_valide)),
        ("cosh", unaire(f64::cosh, |d| format!("cosh({d})"), toujours_valide)),
        ("sinh", unaire(f64::sinh, |d| format!("sinh({d})"), toujours_valide)),
        ("tanh", unaire(f64::tanh, |d| format!("tanh({d})"), toujours_valide)),
        ("x⁻¹", unaire(|x| 1.0 / x, |d| format!("1/({d})"), |x| illegale_si(x <= 0.0))),
        ("x!", unaire(factorielle, |d| format!("({d})!"), valide_factorielle)),
        ("±", unaire(|x| -x, |d| format!("-({d})"), toujours_valide)),
        ("x²", unaire(|x| x * x, |d| format!("({d})²"), toujours_valide)),
        ("log₁₀", unaire(f64::log10, |d| format!("log₁₀({d})"), valide_log)),
        ("log₂", unaire(f64::log2, |d| format!("log₂({d})"), valide_log)),
        ("ln", unaire(f64::ln, |d| format!("ln({d})"), valide_log)),
        ("eˣ", unaire(f64::exp, |d| format!("e^({d})"), toujours_valide)),
        ("2ˣ", unaire(f64::exp2, |d| format!("2^({d})"), toujours_valide)),
        ("10ˣ", unaire(|x| 10f64.powf(x), |d| format!("10^({d})"), toujours_valide)),
        // --- binaires ---
        ("×", binaire(|a, b| a * b, |a, b| format!("{a} × {b}"), toujours_valide2)),
        ("÷", binaire(|a, b| a / b, |a, b| format!("{a} ÷ {b}"), |_, b| illegale_si(b == 0.0))),
        ("+", binaire(|a, b| a + b, |a, b| format!("{a} + {b}"), toujours_valide2)),
        ("-", binaire(|a, b| a - b, |a, b| format!("{a} - {b}"), toujours_valide2)),
        ("xʸ", binaire(f64::powf, |a, b| format!("{a}^{b}"), toujours_valide2)),
        ("EE", binaire(|a, b| a * 10f64.powf(b), |a, b| format!("{a}×10^{b}"), toujours_valide2)),
        (
            "ʸ√x",
            binaire(racine_n, |a, b| format!("{b}√({a})"), |x, n| {
                illegale_si(x < 0.0 && !est_impair(n))
            }),
        ),
        // --- commit ---
        ("=", Egal),
    ])
}

static CATALOGUE: OnceLock<HashMap<&'static str, Operation>> = OnceLock::new();

fn catalogue() -> &'static HashMap<&'static str, Operation> {
    CATALOGUE.get_or_init(construire_catalogue)
}

/// Recherche d’une opération par symbole (None si inconnu : l’évaluateur ignore).
pub fn operation(symbole: &str) -> Option<&'static Operation> {
    catalogue().get(symbole)
}
