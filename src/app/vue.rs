// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage : description (petite, au-dessus), valeur (grande), mémoire
// - Pavé principal + fonctions scientifiques (repliables)
// - Aucune logique ici : chaque bouton appelle une action de etat.rs

use eframe::egui;

use super::etat::AppCalc;

/// Pavé principal (5 colonnes).
const PAVE: &[&[Touche]] = &[
    &[Touche::Clear, Touche::Retour, Touche::RappelM, Touche::SauverM, Touche::Op("÷")],
    &[Touche::Chiffre("7"), Touche::Chiffre("8"), Touche::Chiffre("9"), Touche::Op("×"), Touche::Op("√")],
    &[Touche::Chiffre("4"), Touche::Chiffre("5"), Touche::Chiffre("6"), Touche::Op("-"), Touche::Op("±")],
    &[Touche::Chiffre("1"), Touche::Chiffre("2"), Touche::Chiffre("3"), Touche::Op("+"), Touche::Op("%")],
    &[Touche::Chiffre("0"), Touche::Chiffre("."), Touche::Op("π"), Touche::Op("e"), Touche::Op("=")],
];

/// Fonctions scientifiques (5 colonnes).
const SCIENTIFIQUE: &[&[Touche]] = &[
    &[Touche::Op("sin"), Touche::Op("cos"), Touche::Op("tan"), Touche::Op("Rand"), Touche::Op("ʸ√x")],
    &[Touche::Op("sinh"), Touche::Op("cosh"), Touche::Op("tanh"), Touche::Op("x⁻¹"), Touche::Op("EE")],
    &[Touche::Op("x²"), Touche::Op("xʸ"), Touche::Op("x!"), Touche::Op("log₂"), Touche::Op("log₁₀")],
    &[Touche::Op("eˣ"), Touche::Op("2ˣ"), Touche::Op("10ˣ"), Touche::Op("ln"), Touche::Op("=")],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_grille(ui, "pave_principal", PAVE);

                ui.add_space(8.0);

                egui::CollapsingHeader::new("Fonctions")
                    .default_open(true)
                    .show(ui, |ui| {
                        self.ui_grille(ui, "pave_scientifique", SCIENTIFIQUE);
                    });
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // Affichage lecture seule “stable”, cadre visuel via Frame.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.monospace(self.description.as_str());
                    ui.label(egui::RichText::new(self.affichage.as_str()).monospace().size(32.0));
                    ui.monospace(self.texte_memoire());
                });
            });
    }

    fn ui_grille(&mut self, ui: &mut egui::Ui, id: &str, lignes: &[&[Touche]]) {
        egui::Grid::new(id)
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in lignes {
                    for touche in ligne.iter() {
                        self.bouton(ui, *touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let resp = ui
            .add_sized([64.0, 36.0], egui::Button::new(touche.label()))
            .on_hover_text(touche.aide());

        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Chiffre(c) => self.touche_chiffre(c),
            Touche::Op(s) => self.operation(s),
            Touche::Clear => self.clear(),
            Touche::Retour => self.backspace(),
            Touche::RappelM => self.rappel_memoire(),
            Touche::SauverM => self.sauver_memoire(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(&'static str),
    Op(&'static str),
    Clear,
    Retour,
    RappelM,
    SauverM,
}

impl Touche {
    fn label(self) -> &'static str {
        match self {
            Touche::Chiffre(c) => c,
            Touche::Op(s) => s,
            Touche::Clear => "C",
            Touche::Retour => "⌫",
            Touche::RappelM => "M",
            Touche::SauverM => "→M",
        }
    }

    fn aide(self) -> &'static str {
        match self {
            Touche::Chiffre(_) => "Saisie",
            Touche::Op("=") => "Termine l’opération en attente",
            Touche::Op(_) => "Opération",
            Touche::Clear => "Remise à zéro (équation + mémoire)",
            Touche::Retour => "Efface le dernier chiffre, sinon annule la dernière entrée",
            Touche::RappelM => "Insère la variable M",
            Touche::SauverM => "Mémorise l’affichage dans M",
        }
    }
}
