//! AI-mode instruction block and system instruction.
//!
//! The block is prose for a downstream completion model, not the final
//! prompt: a fixed heading, the description (when present) and one
//! `"- <Label>: <value>"` line per selected parameter in canonical order.

use crate::parameters::ParameterSet;

/// System-level instruction sent with every enhancement request.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert prompt engineer for AI video generation. \
Turn the scene brief you are given into a single detailed, production-ready video prompt \
optimized for platforms such as Veo 3, Sora 2, Runway, Pika and Stability AI.

The prompt must:
- Describe precise visual details and atmosphere
- Specify camera work and composition clearly
- Describe lighting, mood and color palette
- Be optimized for AI video generation
- Be concise but comprehensive (150-250 words)";

/// Opening line of every instruction block.
pub const INSTRUCTION_HEADING: &str = "Create a professional AI video generation prompt based on:";

/// Prefix for the description line.
pub const DESCRIPTION_HEADING: &str = "Scene Description:";

/// Heading above the parameter lines.
pub const PARAMETERS_HEADING: &str = "Parameters:";

/// Serialize a description and parameter selection into the user-level
/// instruction block.
pub fn build_instruction_block(description: &str, parameters: &ParameterSet) -> String {
    let mut block = format!("{INSTRUCTION_HEADING}\n\n");

    if !description.is_empty() {
        block.push_str(&format!("{DESCRIPTION_HEADING} {description}\n\n"));
    }

    block.push_str(PARAMETERS_HEADING);
    block.push('\n');
    for (category, value) in parameters.iter() {
        block.push_str(&format!("- {}: {value}\n", category.label()));
    }

    block
}
