// src/noyau/attente.rs
//
// Opération binaire en attente : premier opérande capturé + fonctions liées.
// Résolution en deux temps (côté évaluateur) : valider(), puis appliquer().

use super::erreur::ErreurDomaine;
use super::operations::{CalculBinaire, DescriptionBinaire, ValiditeBinaire};

/// Valeur calculée jusqu’ici + sa description textuelle.
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulateur {
    pub valeur: f64,
    pub description: String,
}

impl Accumulateur {
    pub fn new(valeur: f64, description: impl Into<String>) -> Self {
        Self {
            valeur,
            description: description.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct OperationEnAttente {
    pub symbole: String,
    pub premier: Accumulateur,
    calcul: CalculBinaire,
    decrire: DescriptionBinaire,
    valider: ValiditeBinaire,
}

impl OperationEnAttente {
    pub fn new(
        symbole: impl Into<String>,
        premier: Accumulateur,
        calcul: CalculBinaire,
        decrire: DescriptionBinaire,
        valider: ValiditeBinaire,
    ) -> Self {
        Self {
            symbole: symbole.into(),
            premier,
            calcul,
            decrire,
            valider,
        }
    }

    /// Validité sur les valeurs numériques brutes (jamais sur les descriptions).
    pub fn valider(&self, second: &Accumulateur) -> Option<ErreurDomaine> {
        (self.valider)(self.premier.valeur, second.valeur)
    }

    pub fn appliquer(&self, second: &Accumulateur) -> Accumulateur {
        Accumulateur {
            valeur: (self.calcul)(self.premier.valeur, second.valeur),
            description: (self.decrire)(&self.premier.description, &second.description),
        }
    }

    /// Expression en cours : second opérande éventuellement vide.
    pub fn decrire_partiel(&self, second: Option<&Accumulateur>) -> String {
        let d2 = second.map(|a| a.description.as_str()).unwrap_or("");
        (self.decrire)(&self.premier.description, d2)
    }
}
