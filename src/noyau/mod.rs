//! Noyau — cerveau de la calculatrice
//!
//! Organisation interne :
//! - erreur.rs     : erreurs de domaine (libellés affichés)
//! - format.rs     : affichage canonique d’un f64 (6 décimales max)
//! - operations.rs : catalogue symbole -> opération (constante/unaire/binaire/=)
//! - attente.rs    : opération binaire en attente (valider puis appliquer)
//! - equation.rs   : journal d’instructions (ajout/undo)
//! - eval.rs       : pli pur sur l’équation -> (résultat, en attente, description)
//! - cerveau.rs    : surface publique pour l’UI

pub mod attente;
pub mod cerveau;
pub mod equation;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod operations;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use cerveau::Cerveau;
pub use eval::{Variables, DESCRIPTION_VIDE};
pub use format::texte_affiche;
