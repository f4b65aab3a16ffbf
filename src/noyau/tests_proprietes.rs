//! Tests de propriétés : invariants du cerveau sur des séquences générées.
//!
//! - RNG déterministe (seed fixe), séquences bornées
//! - undo restaure EXACTEMENT le triplet précédent
//! - evaluate est pur (deux appels => même sortie)
//! - sans opérateur binaire : jamais en attente
//! - scénarios de référence (÷0, 2+3, 200+10%, variable inconnue, 3.5!)

use pretty_assertions::assert_eq;

use super::cerveau::Cerveau;
use super::eval::{Evaluation, Variables};
use super::operations::{operation, Operation};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Génération ------------------------ */

const UNAIRES: &[&str] = &["√", "±", "x²", "x!", "ln", "cos", "x⁻¹", "%", "eˣ"];
const BINAIRES: &[&str] = &["+", "-", "×", "÷", "xʸ", "ʸ√x"];
const OPERANDES: &[f64] = &[0.0, 1.0, 2.0, 3.5, -4.0, 10.0, 0.25];

#[derive(Clone, Copy, Debug)]
enum Saisie {
    Nombre(f64),
    Op(&'static str),
    Var(&'static str),
    Annuler,
}

fn appliquer(c: &mut Cerveau, s: Saisie) {
    match s {
        Saisie::Nombre(v) => c.set_operand(v),
        Saisie::Op(o) => c.perform_operation(o),
        Saisie::Var(n) => c.set_operand_variable(n),
        Saisie::Annuler => c.undo(),
    }
}

fn saisie(rng: &mut Rng) -> Saisie {
    match rng.pick(10) {
        0..=2 => Saisie::Nombre(OPERANDES[rng.pick(OPERANDES.len() as u32) as usize]),
        3..=4 => Saisie::Op(UNAIRES[rng.pick(UNAIRES.len() as u32) as usize]),
        5..=6 => Saisie::Op(BINAIRES[rng.pick(BINAIRES.len() as u32) as usize]),
        7 => Saisie::Op("="),
        8 => Saisie::Var(if rng.pick(2) == 0 { "M" } else { "Z" }),
        _ => Saisie::Op(["π", "e", "Rand", "??"][rng.pick(4) as usize]),
    }
}

fn memoire() -> Variables {
    Variables::from([("M".to_string(), 7.0)])
}

/// Égalité “bit à bit” (NaN compris) pour comparer deux évaluations.
fn meme_evaluation(a: &Evaluation, b: &Evaluation) -> bool {
    a.en_attente == b.en_attente
        && a.description == b.description
        && a.resultat.map(f64::to_bits) == b.resultat.map(f64::to_bits)
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn prop_undo_restaure_le_triplet() {
    let vars = memoire();
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..300 {
        let mut c = Cerveau::new();
        for _ in 0..rng.pick(12) {
            appliquer(&mut c, saisie(&mut rng));
        }

        let avant = c.evaluate(Some(&vars));
        appliquer(&mut c, saisie(&mut rng));
        c.undo();
        let apres = c.evaluate(Some(&vars));

        assert!(
            meme_evaluation(&avant, &apres),
            "avant={avant:?} apres={apres:?} instructions={:?}",
            c.instructions()
        );
    }
}

#[test]
fn prop_evaluate_est_pur() {
    let vars = memoire();
    let mut rng = Rng::new(42);

    for _ in 0..300 {
        let mut c = Cerveau::new();
        for _ in 0..rng.pick(16) {
            let s = if rng.pick(8) == 0 {
                Saisie::Annuler
            } else {
                saisie(&mut rng)
            };
            appliquer(&mut c, s);
        }
        let a = c.evaluate(Some(&vars));
        let b = c.evaluate(Some(&vars));
        assert!(meme_evaluation(&a, &b), "a={a:?} b={b:?}");
        // jamais de description vide : au pire le blanc par défaut
        assert!(!a.description.is_empty());
    }
}

#[test]
fn prop_sans_binaire_jamais_en_attente() {
    let mut rng = Rng::new(7);

    for _ in 0..300 {
        let mut c = Cerveau::new();
        let depart = OPERANDES[rng.pick(OPERANDES.len() as u32) as usize];
        c.set_operand(depart);

        // valeur attendue : départ transformé par chaque unaire, dans l’ordre
        let mut attendu = Some(depart);
        for _ in 0..rng.pick(5) {
            let u = UNAIRES[rng.pick(UNAIRES.len() as u32) as usize];
            c.perform_operation(u);
            attendu = match (attendu, operation(u)) {
                (
                    Some(v),
                    Some(Operation::Unaire {
                        calcul, valider, ..
                    }),
                ) if valider(v).is_none() => Some(calcul(v)),
                _ => None,
            };
        }

        let r = c.evaluate(None);
        assert!(!r.en_attente);
        assert_eq!(
            r.resultat.map(f64::to_bits),
            attendu.map(f64::to_bits),
            "instructions={:?}",
            c.instructions()
        );
    }
}

/* ------------------------ Scénarios de référence ------------------------ */

#[test]
fn scenario_division_par_zero() {
    let mut c = Cerveau::new();
    c.set_operand(6.0);
    c.perform_operation("÷");
    c.set_operand(0.0);
    c.perform_operation("=");

    let r = c.evaluate(None);
    assert!(r.description.contains("Illegal operation"));
    assert_eq!(r.resultat, None);

    // récupération par undo : on retrouve "6 ÷ 0" sans retaper 6
    c.undo();
    c.undo();
    c.set_operand(3.0);
    c.perform_operation("=");
    let r = c.evaluate(None);
    assert_eq!(r.resultat, Some(2.0));
    assert_eq!(r.description, "6 ÷ 3");
}

#[test]
fn scenario_addition() {
    let mut c = Cerveau::new();
    c.set_operand(2.0);
    c.perform_operation("+");
    c.set_operand(3.0);
    c.perform_operation("=");

    let r = c.evaluate(None);
    assert_eq!(r.resultat, Some(5.0));
    assert!(!r.en_attente);
    assert_eq!(r.description, "2 + 3");
}

#[test]
fn scenario_pourcent_en_attente() {
    let mut c = Cerveau::new();
    c.set_operand(200.0);
    c.perform_operation("+");
    c.set_operand(10.0);
    c.perform_operation("%");
    assert_eq!(c.evaluate(None).resultat, Some(220.0));
}

#[test]
fn scenario_variable_inconnue() {
    let mut c = Cerveau::new();
    c.set_operand_variable("Z");
    let r = c.evaluate(None);
    assert_eq!(r.resultat, Some(0.0));
    assert_eq!(r.description, "Z");
}

#[test]
fn scenario_factorielle_hors_domaine() {
    let mut c = Cerveau::new();
    c.set_operand(3.5);
    c.perform_operation("x!");
    let r = c.evaluate(None);
    assert_eq!(r.description, "Invalid input");
    assert_eq!(r.resultat, None);
}

#[test]
fn scenario_memoire_reevaluee() {
    // même équation, autre instantané de variables => autre résultat
    let mut c = Cerveau::new();
    c.set_operand_variable("M");
    c.perform_operation("×");
    c.set_operand(2.0);
    c.perform_operation("=");

    assert_eq!(c.evaluate(None).resultat, Some(0.0));
    assert_eq!(c.evaluate(Some(&memoire())).resultat, Some(14.0));
    assert_eq!(c.evaluate(Some(&memoire())).description, "M × 2");
}
