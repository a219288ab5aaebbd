//! Element affinity builder.

use super::archetype::{PassiveSource, PassiveTrait};
use crate::systems::{Club, Element, Quadra, SocionicsType};

/// Elemental affinity derived from a socionics type (or an edited element).
///
/// Element, quadra, club and club passive are either all present or all
/// absent; they are absent only in [`neutral_element_affinity`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementAffinity {
    pub element: Option<Element>,
    pub quadra: Option<Quadra>,
    pub club: Option<Club>,
    pub club_passive: Option<PassiveTrait>,
    /// Type that produced the affinity; `None` once the element was edited.
    pub socionics: Option<SocionicsType>,
}

impl ElementAffinity {
    /// Affinity implied by an element alone. Quadra, club and passive always
    /// follow the element, so an edited element never keeps a stale passive.
    pub fn from_element(element: Element) -> Self {
        let club = element.club();
        let passive = club.passive();
        Self {
            element: Some(element),
            quadra: Some(element.quadra()),
            club: Some(club),
            club_passive: Some(PassiveTrait::new(
                passive.name,
                passive.description,
                PassiveSource::Club(club),
            )),
            socionics: None,
        }
    }

    pub const fn is_neutral(&self) -> bool {
        self.element.is_none()
    }
}

pub fn build_element_affinity(ty: SocionicsType) -> ElementAffinity {
    ElementAffinity {
        socionics: Some(ty),
        ..ElementAffinity::from_element(ty.element())
    }
}

/// Affinity used when the socionics system is disabled: unattuned, no club passive.
pub const fn neutral_element_affinity() -> ElementAffinity {
    ElementAffinity {
        element: None,
        quadra: None,
        club: None,
        club_passive: None,
        socionics: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affinity_is_consistent_with_type() {
        for ty in SocionicsType::all() {
            let affinity = build_element_affinity(ty);
            assert_eq!(affinity.quadra, Some(ty.quadra()));
            assert_eq!(affinity.club, Some(ty.club()));
            assert_eq!(
                affinity.club_passive.as_ref().map(|passive| passive.source),
                Some(PassiveSource::Club(ty.club()))
            );
            assert!(!affinity.is_neutral());
        }
    }

    #[test]
    fn ili_is_gamma_lightning() {
        let affinity = build_element_affinity(SocionicsType::ILI);
        assert_eq!(affinity.element, Some(Element::Lightning));
        assert_eq!(affinity.quadra, Some(Quadra::Gamma));
        assert_eq!(affinity.club, Some(Club::Researcher));
        assert_eq!(
            affinity.club_passive.as_ref().map(|p| p.name.as_str()),
            Some("Researcher's Insight")
        );
    }

    #[test]
    fn neutral_affinity_carries_nothing() {
        let affinity = neutral_element_affinity();
        assert!(affinity.is_neutral());
        assert_eq!(affinity.club_passive, None);
        assert_eq!(affinity.socionics, None);
    }
}
