//! Manual-mode prompt assembly.
//!
//! Concatenates the scene description with one `"<Label>: <value>"` segment
//! per selected parameter, in canonical category order.

use crate::parameters::ParameterSet;

/// Separator placed between the description and each parameter segment.
pub const SEGMENT_SEPARATOR: &str = ". ";

/// Build the manual prompt for a description and parameter selection.
///
/// The description is used verbatim as the first element. Empty elements
/// are dropped before joining, so an empty description adds no leading
/// separator and an empty description with no parameters yields `""`.
/// Parameter values are not checked against their allowed lists here.
pub fn assemble_manual_prompt(description: &str, parameters: &ParameterSet) -> String {
    std::iter::once(description.to_string())
        .chain(
            parameters
                .iter()
                .map(|(category, value)| format!("{}: {value}", category.label())),
        )
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// Number of whitespace-separated words in a prompt.
pub fn word_count(prompt: &str) -> usize {
    prompt.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::ParameterCategory;

    fn set(entries: &[(ParameterCategory, &str)]) -> ParameterSet {
        entries.iter().map(|(c, v)| (*c, *v)).collect()
    }

    #[test]
    fn empty_input_yields_empty_prompt() {
        assert_eq!(assemble_manual_prompt("", &ParameterSet::new()), "");
    }

    #[test]
    fn description_only_is_returned_verbatim() {
        assert_eq!(
            assemble_manual_prompt("A quiet harbour.", &ParameterSet::new()),
            "A quiet harbour."
        );
    }

    #[test]
    fn segments_follow_canonical_order() {
        let params = set(&[
            (ParameterCategory::Mood, "Calm"),
            (ParameterCategory::Genre, "Documentary"),
        ]);
        assert_eq!(
            assemble_manual_prompt("A hero walks.", &params),
            "A hero walks.. Genre: Documentary. Mood: Calm"
        );
    }

    #[test]
    fn empty_description_has_no_leading_separator() {
        let params = set(&[(ParameterCategory::TimeOfDay, "Dusk")]);
        assert_eq!(assemble_manual_prompt("", &params), "Time of Day: Dusk");
    }

    #[test]
    fn edit_history_does_not_matter() {
        let mut first = ParameterSet::new();
        first.set(ParameterCategory::Lens, "Macro");
        first.set(ParameterCategory::Weather, "Foggy");
        first.set(ParameterCategory::Tone, "Epic");

        let mut second = ParameterSet::new();
        second.set(ParameterCategory::Tone, "Casual");
        second.set(ParameterCategory::Weather, "Foggy");
        second.set(ParameterCategory::Pacing, "Slow");
        second.set(ParameterCategory::Lens, "Macro");
        second.remove(ParameterCategory::Pacing);
        second.set(ParameterCategory::Tone, "Epic");

        assert_eq!(first, second);
        assert_eq!(
            assemble_manual_prompt("Harbour", &first),
            assemble_manual_prompt("Harbour", &second)
        );
    }

    #[test]
    fn adding_a_category_keeps_existing_order() {
        let base = set(&[
            (ParameterCategory::Lighting, "Neon"),
            (ParameterCategory::Soundscape, "Silent"),
        ]);
        let mut extended = base.clone();
        extended.set(ParameterCategory::Framing, "Wide Shot");

        assert_eq!(
            assemble_manual_prompt("City", &base),
            "City. Lighting: Neon. Soundscape: Silent"
        );
        assert_eq!(
            assemble_manual_prompt("City", &extended),
            "City. Lighting: Neon. Framing: Wide Shot. Soundscape: Silent"
        );
    }

    #[test]
    fn unknown_values_are_included_verbatim() {
        let params = set(&[(ParameterCategory::Weather, "Volcanic Ash")]);
        assert_eq!(
            assemble_manual_prompt("Ridge", &params),
            "Ridge. Weather: Volcanic Ash"
        );
    }

    #[test]
    fn platform_comes_last() {
        let params = set(&[
            (ParameterCategory::Platform, "TikTok"),
            (ParameterCategory::Soundscape, "Voiceover"),
        ]);
        assert_eq!(
            assemble_manual_prompt("", &params),
            "Soundscape: Voiceover. Target Platform: TikTok"
        );
    }

    #[test]
    fn word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("  golden   hour\nover the bay "), 5);
        assert_eq!(word_count(""), 0);
    }
}
