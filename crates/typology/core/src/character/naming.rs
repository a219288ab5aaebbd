//! Cosmetic name and title generation.
//!
//! Names are a SHA-256 digest of `(seed, element, class)` mapped onto syllable
//! tables, so the same inputs always produce the same name. Nothing mechanical
//! depends on the result.

use sha2::{Digest, Sha256};

use crate::systems::Element;

const PREFIXES: [&str; 16] = [
    "Ael", "Bran", "Cor", "Dae", "Eri", "Fen", "Gal", "Hal", "Isa", "Jor", "Kae", "Lio", "Mor",
    "Nym", "Ora", "Syl",
];

const SUFFIXES: [&str; 16] = [
    "wyn", "dric", "thas", "mir", "lene", "var", "iel", "orn", "essa", "ric", "dane", "yra",
    "los", "wen", "thor", "ise",
];

fn digest(seed: u64, element: Option<Element>, class_name: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(element.map_or("unbound", Element::epithet).as_bytes());
    hasher.update([0u8]);
    hasher.update(class_name.as_bytes());
    hasher.finalize().into()
}

/// Character name for the given inputs.
pub fn generate_name(seed: u64, element: Option<Element>, class_name: &str) -> String {
    let bytes = digest(seed, element, class_name);
    let prefix = PREFIXES[usize::from(bytes[0]) % PREFIXES.len()];
    let suffix = SUFFIXES[usize::from(bytes[1]) % SUFFIXES.len()];
    format!("{prefix}{suffix}")
}

/// Title combining the element epithet with the class, e.g. "Stormcalled Arcanist".
pub fn generate_title(element: Option<Element>, class_name: &str) -> String {
    let epithet = element.map_or("Unbound", Element::epithet);
    format!("{epithet} {class_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_seeded() {
        let a = generate_name(7, Some(Element::Fire), "Warlord");
        assert_eq!(a, generate_name(7, Some(Element::Fire), "Warlord"));

        let distinct: std::collections::BTreeSet<String> = (0..32)
            .map(|seed| generate_name(seed, Some(Element::Fire), "Warlord"))
            .collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn titles_use_element_epithets() {
        assert_eq!(
            generate_title(Some(Element::Lightning), "Arcanist"),
            "Stormcalled Arcanist"
        );
        assert_eq!(generate_title(None, "Wanderer"), "Unbound Wanderer");
    }
}
