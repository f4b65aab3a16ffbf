// src/noyau/equation.rs
//
// Journal d’instructions (l’“équation”) : tout ce que l’utilisateur a saisi, dans l’ordre.
// - ajout en fin seulement
// - retrait en fin seulement (undo), sans effet si vide
// - une instruction n’est jamais modifiée après ajout

#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    Operande(f64),
    Operation(String), // clé du catalogue
    Variable(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Equation {
    instructions: Vec<Instruction>,
}

impl Equation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, i: Instruction) {
        self.instructions.push(i);
    }

    /// Retire la dernière instruction (None si vide).
    pub fn pop(&mut self) -> Option<Instruction> {
        self.instructions.pop()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl<'a> IntoIterator for &'a Equation {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
