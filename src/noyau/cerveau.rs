// src/noyau/cerveau.rs
//
// Le “cerveau” : seule surface utilisée par l’UI.
// Il ne fait qu’AJOUTER des instructions (ou retirer la dernière) ;
// tout calcul passe par eval::evaluer, rejoué depuis zéro.
// Reset = construire un nouveau Cerveau.

use super::equation::{Equation, Instruction};
use super::eval::{evaluer, Evaluation, Variables};

#[derive(Clone, Debug, Default)]
pub struct Cerveau {
    equation: Equation,
}

impl Cerveau {
    pub fn new() -> Self {
        Self {
            equation: Equation::new(),
        }
    }

    pub fn set_operand(&mut self, valeur: f64) {
        tracing::debug!(valeur, "opérande");
        self.equation.push(Instruction::Operande(valeur));
    }

    pub fn set_operand_variable(&mut self, nom: impl Into<String>) {
        let nom = nom.into();
        tracing::debug!(%nom, "variable");
        self.equation.push(Instruction::Variable(nom));
    }

    pub fn perform_operation(&mut self, symbole: impl Into<String>) {
        let symbole = symbole.into();
        tracing::debug!(%symbole, "opération");
        self.equation.push(Instruction::Operation(symbole));
    }

    /// Retire la dernière instruction (sans effet si l’équation est vide).
    pub fn undo(&mut self) {
        let retiree = self.equation.pop();
        tracing::debug!(?retiree, "undo");
    }

    pub fn evaluate(&self, variables: Option<&Variables>) -> Evaluation {
        evaluer(&self.equation, variables)
    }

    pub fn instructions(&self) -> &[Instruction] {
        self.equation.instructions()
    }

    pub fn is_empty(&self) -> bool {
        self.equation.is_empty()
    }
}
