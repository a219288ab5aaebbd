//! Plain-text typology summary.
//!
//! External text generators receive this as prompt context. The layout is
//! stable: one `Label: value` line per section, disabled systems omitted.

use super::Character;
use crate::systems::{SystemId, SystemSet};

/// Builds the summary of a character.
pub fn build_typology_summary(character: &Character) -> String {
    let source = &character.typology_source;
    let archetype = &character.archetype;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Name: {}, the {}", character.name, character.title));

    let systems: Vec<&str> = character
        .active_systems
        .systems()
        .into_iter()
        .map(SystemId::label)
        .collect();
    let systems = if systems.is_empty() {
        "none".to_owned()
    } else {
        systems.join(", ")
    };
    lines.push(format!("Systems: {systems}"));

    if let Some(ty) = source.attitudinal {
        lines.push(format!("Attitudinal Psyche: {ty} ({})", ty.describe()));
    }

    if let Some(selection) = &source.enneagram {
        let mut line = format!(
            "Enneagram: {}w{} {}",
            selection.core, selection.wing, selection.instinct
        );
        if let Some(stack) = selection.instinct_stack {
            line.push_str(&format!("/{stack}"));
        }
        if let Some(tritype) = &selection.tritype {
            line.push_str(&format!(
                ", tritype {}{}{}",
                selection.core, tritype.second, tritype.third
            ));
        }
        line.push_str(&format!(" ({})", selection.core.name()));
        lines.push(line);
    }

    let mut class = format!(
        "Class: {} - {}",
        archetype.class_name, archetype.class_description
    );
    if let Some(wing) = &archetype.wing {
        class.push_str(&format!(" {} {}.", wing.title, wing.trait_shift));
    }
    lines.push(class);
    lines.push(format!(
        "Empowered: {} ({:+} {}); Stressed: {} ({:+} {})",
        archetype.empowered.name,
        archetype.empowered.amount,
        archetype.empowered.axis,
        archetype.stressed.name,
        archetype.stressed.amount,
        archetype.stressed.axis,
    ));

    let stats: Vec<String> = character
        .stats
        .iter()
        .map(|(axis, value)| format!("{} {value}", axis.abbreviation()))
        .collect();
    lines.push(format!("Stats: {}", stats.join(" | ")));

    if let Some(ty) = source.mbti {
        lines.push(format!("MBTI: {ty}"));
    }
    let abilities: Vec<String> = character
        .abilities
        .iter()
        .map(|ability| {
            let power = ability.power(&character.stats);
            match ability.function {
                Some(function) => {
                    format!("{} [{function}, {}] power {power}", ability.name, ability.slot)
                }
                None => format!("{} [{}] power {power}", ability.name, ability.slot),
            }
        })
        .collect();
    lines.push(format!("Abilities: {}", abilities.join("; ")));

    let affinity = &character.element;
    if let (Some(element), Some(quadra), Some(club)) =
        (affinity.element, affinity.quadra, affinity.club)
    {
        let mut line = String::new();
        if let Some(ty) = affinity.socionics {
            line.push_str(&format!("Socionics: {ty} ({}, {}). ", ty.code(), ty.alias()));
        }
        line.push_str(&format!(
            "Element: {element} ({quadra} quadra, {club} club)"
        ));
        lines.push(line);
    }

    let combat = &character.combat;
    if let (Some(realm), Some(center)) = (combat.realm, combat.center) {
        let mut line = format!("Combat: {} realm {realm}", combat.orientation);
        if let Some(tritype) = &combat.tritype {
            line.push_str(&format!(
                " (tritype {realm}-{}-{})",
                tritype.second, tritype.third
            ));
        }
        line.push_str(&format!(
            ", {center} center; {} activation, {} positioning, regenerates through {}",
            combat.activation, combat.positioning, combat.regen
        ));
        lines.push(line);
    }

    let passives: Vec<&str> = character.passives().map(|p| p.name.as_str()).collect();
    if !passives.is_empty() {
        lines.push(format!("Passives: {}", passives.join(", ")));
    }

    if character.active_systems != SystemSet::all() {
        let missing: Vec<&str> = (SystemSet::all() - character.active_systems)
            .systems()
            .into_iter()
            .map(SystemId::label)
            .collect();
        lines.push(format!("Not provided: {}", missing.join(", ")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
