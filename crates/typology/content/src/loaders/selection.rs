//! Selection and edit loaders.
//!
//! A selection file is a TOML rendition of [`GeneratorInput`]:
//!
//! ```toml
//! attitudinal = "VELF"
//! mbti = "INTJ"
//! socionics = "ILI"
//! seed = 7
//!
//! [enneagram]
//! type = 5
//! wing = 4
//! instinct = "sp"
//!
//! [instincts]
//! realm = "FD"
//! ```

use std::path::Path;

use typology_core::{CharacterEdits, GeneratorInput};

use crate::loaders::{LoadResult, read_file};

/// Loader for typology selections.
pub struct SelectionLoader;

impl SelectionLoader {
    /// Load a selection from a TOML file and validate it.
    pub fn load(path: &Path) -> LoadResult<GeneratorInput> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid selection {}: {}", path.display(), e))
    }

    /// Parse and validate a selection from TOML text.
    pub fn parse(content: &str) -> LoadResult<GeneratorInput> {
        let input: GeneratorInput = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse selection TOML: {}", e))?;
        input.validate()?;
        Ok(input)
    }
}

/// Loader for character edits.
pub struct EditsLoader;

impl EditsLoader {
    /// Load edits from a TOML file. Missing fields mean "keep generated".
    pub fn load(path: &Path) -> LoadResult<CharacterEdits> {
        let content = read_file(path)?;
        let edits: CharacterEdits = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse edits TOML: {}", e))?;
        Ok(edits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typology_core::{ApType, Element, EnneagramType, Instinct, InstinctRealm, MbtiType};

    #[test]
    fn parses_a_full_selection() {
        let input = SelectionLoader::parse(
            r#"
attitudinal = "VELF"
mbti = "INTJ"
socionics = "ILI"

[enneagram]
type = 5
wing = 4
instinct = "sp"

[instincts]
realm = "FD"
"#,
        )
        .unwrap();

        assert_eq!(input.attitudinal, Some(ApType::VELF));
        assert_eq!(input.mbti, Some(MbtiType::INTJ));
        let enneagram = input.enneagram.unwrap();
        assert_eq!(enneagram.core, EnneagramType::Five);
        assert_eq!(enneagram.wing, EnneagramType::Four);
        assert_eq!(enneagram.instinct, Instinct::SelfPreservation);
        assert_eq!(input.instincts.unwrap().realm, InstinctRealm::Fortitude);
        assert_eq!(input.seed, None);
    }

    #[test]
    fn rejects_a_wing_that_is_not_adjacent() {
        let err = SelectionLoader::parse(
            r#"
[enneagram]
type = 5
wing = 7
instinct = "sp"
"#,
        )
        .unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn edits_default_to_keep_generated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edits.toml");
        std::fs::write(
            &path,
            r#"
class_name = "Night Scholar"
element = "water"

[stats]
willpower = 15
"#,
        )
        .unwrap();

        let edits = EditsLoader::load(&path).unwrap();
        assert_eq!(edits.class_name.as_deref(), Some("Night Scholar"));
        assert_eq!(edits.element, Some(Element::Water));
        assert_eq!(edits.stats.willpower, Some(15));
        assert_eq!(edits.stats.vitality, None);
        assert_eq!(edits.ability_names.hero, None);
    }
}
