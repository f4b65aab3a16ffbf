//! Noyau — évaluation (pli sur l’équation)
//!
//! équation -> (accumulateur, opération en attente, erreur) -> Evaluation
//!
//! Remarque : fonction PURE, recalculée depuis zéro à chaque appel.
//! L’état du pli vit dans `Pli`, jamais dans le cerveau.

use std::collections::HashMap;

use super::attente::{Accumulateur, OperationEnAttente};
use super::equation::{Equation, Instruction};
use super::erreur::ErreurDomaine;
use super::format::texte_affiche;
use super::operations::{operation, CalculUnaire, DescriptionUnaire, Operation, POURCENT};

/// Valeurs nommées (mémoire "M", etc.).
pub type Variables = HashMap<String, f64>;

/// Description par défaut quand il n’y a rien à montrer.
pub const DESCRIPTION_VIDE: &str = " ";

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub resultat: Option<f64>,
    pub en_attente: bool,
    pub description: String,
}

/// API publique : rejoue toute l’équation et retourne (résultat, en attente, description).
pub fn evaluer(equation: &Equation, variables: Option<&Variables>) -> Evaluation {
    let mut pli = Pli::default();
    for instruction in equation {
        pli.pas(instruction, variables);
    }
    let ev = pli.conclure();
    tracing::trace!(
        instructions = equation.len(),
        resultat = ?ev.resultat,
        en_attente = ev.en_attente,
        description = %ev.description,
        "évaluation"
    );
    ev
}

#[derive(Default)]
struct Pli {
    accumulateur: Option<Accumulateur>,
    en_attente: Option<OperationEnAttente>,
    erreur: Option<ErreurDomaine>,
}

impl Pli {
    fn pas(&mut self, instruction: &Instruction, variables: Option<&Variables>) {
        match instruction {
            Instruction::Operande(v) => {
                self.accumulateur = Some(Accumulateur::new(*v, texte_affiche(*v)));
            }

            // variable absente => 0, mais on garde le NOM comme description
            Instruction::Variable(nom) => {
                let v = variables.and_then(|m| m.get(nom)).copied().unwrap_or(0.0);
                self.accumulateur = Some(Accumulateur::new(v, nom.as_str()));
            }

            Instruction::Operation(symbole) => match operation(symbole) {
                Some(op) => self.operation(symbole, op),
                None => tracing::trace!(%symbole, "symbole inconnu ignoré"),
            },
        }
    }

    fn operation(&mut self, symbole: &str, op: &Operation) {
        match op {
            Operation::Constante(v) => {
                self.accumulateur = Some(Accumulateur::new(*v, symbole));
            }

            Operation::Unaire {
                calcul,
                decrire,
                valider,
            } => {
                // rien à transformer
                let Some(acc) = self.accumulateur.as_ref() else {
                    return;
                };

                self.erreur = valider(acc.valeur);
                if self.erreur.is_some() {
                    self.accumulateur = None;
                    return;
                }

                if symbole == POURCENT && self.en_attente.is_some() {
                    self.pourcent_de_l_attente(*calcul, *decrire);
                    return;
                }

                let suivant = Accumulateur::new(calcul(acc.valeur), decrire(&acc.description));
                self.accumulateur = Some(suivant);
            }

            Operation::Binaire {
                calcul,
                decrire,
                valider,
            } => {
                self.resoudre_attente();
                if let Some(premier) = self.accumulateur.take() {
                    self.en_attente = Some(OperationEnAttente::new(
                        symbole, premier, *calcul, *decrire, *valider,
                    ));
                    self.erreur = None;
                }
            }

            Operation::Egal => self.resoudre_attente(),
        }
    }

    /// valider puis appliquer ; en cas d’échec l’opération RESTE en attente
    /// (premier opérande conservé) et l’accumulateur est vidé.
    fn resoudre_attente(&mut self) {
        let (Some(op), Some(acc)) = (&self.en_attente, &self.accumulateur) else {
            return;
        };

        self.erreur = op.valider(acc);
        if self.erreur.is_some() {
            tracing::debug!(symbole = %op.symbole, erreur = ?self.erreur, "résolution refusée");
            self.accumulateur = None;
            return;
        }

        self.accumulateur = Some(op.appliquer(acc));
        self.en_attente = None;
    }

    /// `a + x %` : x pour cent de `a` (idem pour `-`) ; sinon x/100.
    /// Puis l’opération en attente est résolue avec cette valeur.
    fn pourcent_de_l_attente(&mut self, calcul: CalculUnaire, decrire: DescriptionUnaire) {
        let (Some(op), Some(acc)) = (&self.en_attente, &self.accumulateur) else {
            return;
        };

        let base = match op.symbole.as_str() {
            "+" | "-" => op.premier.valeur,
            _ => 1.0,
        };
        let second = Accumulateur::new(base * calcul(acc.valeur), decrire(&acc.description));

        self.accumulateur = Some(second);
        self.resoudre_attente();
    }

    fn conclure(self) -> Evaluation {
        let description = match (&self.erreur, &self.en_attente, &self.accumulateur) {
            (Some(e), _, _) => e.to_string(),
            (None, Some(op), acc) => op.decrire_partiel(acc.as_ref()),
            (None, None, Some(acc)) => acc.description.clone(),
            (None, None, None) => DESCRIPTION_VIDE.to_string(),
        };

        Evaluation {
            resultat: self.accumulateur.map(|a| a.valeur),
            en_attente: self.en_attente.is_some(),
            description,
        }
    }
}
