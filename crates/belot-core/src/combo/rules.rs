use super::fold::fold_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationRule {
    pub name: &'static str,
    pub points: u32,
    /// Extra spellings, already folded.
    pub synonyms: &'static [&'static str],
}

impl CombinationRule {
    /// Substring match against text that has gone through [`fold_text`].
    pub fn matches_folded(&self, folded: &str) -> bool {
        folded.contains(&fold_text(self.name))
            || self.synonyms.iter().any(|synonym| folded.contains(synonym))
    }
}

pub const RULES: [CombinationRule; 10] = [
    CombinationRule {
        name: "Tărț",
        points: 20,
        synonyms: &["tert", "tart"],
    },
    CombinationRule {
        name: "Bella",
        points: 20,
        synonyms: &["bela"],
    },
    CombinationRule {
        name: "Jumate de Sută",
        points: 50,
        synonyms: &["jumate", "50"],
    },
    CombinationRule {
        name: "O Sută",
        points: 100,
        synonyms: &["suta", "100"],
    },
    CombinationRule {
        name: "Patru cărți de 10",
        points: 100,
        synonyms: &[],
    },
    CombinationRule {
        name: "Patru cărți de J",
        points: 200,
        synonyms: &[],
    },
    CombinationRule {
        name: "Patru cărți de A",
        points: 100,
        synonyms: &[],
    },
    CombinationRule {
        name: "Patru cărți de Q",
        points: 100,
        synonyms: &[],
    },
    CombinationRule {
        name: "Patru cărți de K",
        points: 100,
        synonyms: &[],
    },
    CombinationRule {
        name: "Patru cărți de 9",
        points: 150,
        synonyms: &[],
    },
];
