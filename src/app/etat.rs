//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir l’affichage, la description, la mémoire "M" et le cerveau,
//! et traduire chaque touche en appels au cerveau (ajout / undo) puis recalcul.
//!
//! Contrats :
//! - Aucune logique de calcul ici : tout résultat vient de `Cerveau::evaluate`.
//! - Actions déterministes, testables sans egui.

use crate::noyau::{texte_affiche, Cerveau, Variables, DESCRIPTION_VIDE};

/// Affichage quand le résultat n’est pas un nombre.
pub const AFFICHAGE_NAN: &str = "Not a number";

/// Nom de la variable mémoire (touches M / →M).
pub const VARIABLE_MEMOIRE: &str = "M";

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub cerveau: Cerveau,

    // --- sorties ---
    pub affichage: String,
    pub description: String,
    pub memoire: Variables,

    // --- saisie ---
    pub saisie_en_cours: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            cerveau: Cerveau::new(),
            affichage: "0".to_string(),
            description: DESCRIPTION_VIDE.to_string(),
            memoire: Variables::new(),
            saisie_en_cours: false,
        }
    }
}

impl AppCalc {
    /* ------------------------ Affichage numérique ------------------------ */

    /// Valeur lue dans l’affichage (0 si illisible).
    pub fn valeur_affichee(&self) -> f64 {
        self.affichage.parse().unwrap_or(0.0)
    }

    fn set_valeur_affichee(&mut self, v: f64) {
        self.affichage = if v.is_nan() {
            AFFICHAGE_NAN.to_string()
        } else {
            texte_affiche(v)
        };
    }

    /// Ligne mémoire : "M:7 " (vide si rien en mémoire).
    pub fn texte_memoire(&self) -> String {
        let mut out = String::new();
        if let Some(v) = self.memoire.get(VARIABLE_MEMOIRE) {
            out.push_str(&format!("{VARIABLE_MEMOIRE}:{} ", texte_affiche(*v)));
        }
        out
    }

    /* ------------------------ Touches ------------------------ */

    /// Chiffre ou "." : un seul point, "0" initial remplacé, "." seul => "0."
    pub fn touche_chiffre(&mut self, chiffre: &str) {
        if self.saisie_en_cours {
            if chiffre == "." && self.affichage.contains('.') {
                return;
            }
            if self.affichage == "0" && chiffre != "." {
                self.affichage.clear();
            }
            self.affichage.push_str(chiffre);
        } else {
            self.affichage = if chiffre == "." {
                "0.".to_string()
            } else {
                chiffre.to_string()
            };
            self.saisie_en_cours = true;
        }
    }

    /// ⌫ : efface un caractère pendant la saisie, sinon undo dans le cerveau.
    pub fn backspace(&mut self) {
        if self.saisie_en_cours {
            if self.affichage.chars().count() <= 1 {
                self.affichage = "0".to_string();
                self.saisie_en_cours = false;
                return;
            }
            self.affichage.pop();
        } else if !self.cerveau.is_empty() {
            self.cerveau.undo();
            self.calculer();
        }
    }

    /// Touche d’opération (constante, unaire, binaire, "=").
    pub fn operation(&mut self, symbole: &str) {
        if self.affichage == AFFICHAGE_NAN {
            return;
        }

        if self.saisie_en_cours {
            self.cerveau.set_operand(self.valeur_affichee());
            self.saisie_en_cours = false;
        }

        self.cerveau.perform_operation(symbole);
        self.calculer();
    }

    /// C : nouveau cerveau, affichage 0, mémoire vidée.
    pub fn clear(&mut self) {
        tracing::debug!("reset");
        *self = Self::default();
    }

    /// M : rappelle la variable mémoire dans l’équation.
    pub fn rappel_memoire(&mut self) {
        self.cerveau.set_operand_variable(VARIABLE_MEMOIRE);
        self.saisie_en_cours = false;
        self.calculer();
    }

    /// →M : mémorise la valeur affichée puis recalcule (l’équation voit la nouvelle valeur).
    pub fn sauver_memoire(&mut self) {
        let v = self.valeur_affichee();
        tracing::debug!(valeur = v, "mémoire");
        self.memoire = Variables::from([(VARIABLE_MEMOIRE.to_string(), v)]);
        self.saisie_en_cours = false;
        self.calculer();
    }

    /* ------------------------ Recalcul ------------------------ */

    fn calculer(&mut self) {
        let ev = self.cerveau.evaluate(Some(&self.memoire));
        tracing::debug!(
            instructions = self.cerveau.instructions().len(),
            resultat = ?ev.resultat,
            "recalcul"
        );

        if let Some(r) = ev.resultat {
            self.set_valeur_affichee(r);
        }

        let mut d = ev.description;
        if d != DESCRIPTION_VIDE {
            d.push_str(if ev.en_attente { "..." } else { " =" });
        }
        self.description = d;
    }
}
