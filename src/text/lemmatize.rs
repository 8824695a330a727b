//! Rule-based English lemmatizer.
//!
//! Covers the noun territory a WordNet-style lemmatizer handles by default:
//! irregular plurals via a lookup table, regular plurals via suffix rules.
//! Tokens that match no rule pass through unchanged.

use std::collections::HashMap;

pub struct Lemmatizer {
    irregular: HashMap<&'static str, &'static str>,
}

impl Lemmatizer {
    pub fn new() -> Self {
        let irregular = HashMap::from([
            ("men", "man"),
            ("women", "woman"),
            ("children", "child"),
            ("feet", "foot"),
            ("teeth", "tooth"),
            ("geese", "goose"),
            ("mice", "mouse"),
            ("people", "person"),
            ("lives", "life"),
            ("wives", "wife"),
            ("knives", "knife"),
            // mass nouns that the -s rule would mangle
            ("news", "news"),
            ("series", "series"),
            ("species", "species"),
        ]);
        Self { irregular }
    }

    /// Reduce a single lowercase token to its lemma.
    pub fn lemmatize(&self, token: &str) -> String {
        if let Some(&lemma) = self.irregular.get(token) {
            return lemma.to_string();
        }

        if token.len() > 4 && token.ends_with("ies") {
            let mut out = token[..token.len() - 3].to_string();
            out.push('y');
            return out;
        }

        for suffix in ["ses", "xes", "zes", "ches", "shes"] {
            if token.len() > suffix.len() + 1 && token.ends_with(suffix) {
                return token[..token.len() - 2].to_string();
            }
        }

        if token.len() > 3
            && token.ends_with('s')
            && !token.ends_with("ss")
            && !token.ends_with("us")
            && !token.ends_with("is")
        {
            return token[..token.len() - 1].to_string();
        }

        token.to_string()
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}
