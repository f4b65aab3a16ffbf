// src/noyau/erreur.rs
//
// Erreurs de domaine : valeurs d’AFFICHAGE, jamais propagées par `?`.
// Deux libellés historiques conservés tels quels (compat texte exacte).

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurDomaine {
    /// Opérande hors du domaine d’entrée (ex: x! sur 3.5).
    #[error("Invalid input")]
    EntreeInvalide,

    /// Opération non définie pour ces opérandes (÷0, √ négatif, log ≤ 0…).
    #[error("Illegal operation")]
    OperationIllegale,
}
