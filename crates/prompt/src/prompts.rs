// The panel-assessment instruction and the vocabulary it commits to.
// The instruction text is the product here: it is what gets reviewed,
// so it lives as one compile-time constant rather than a packaged asset
// that could fail to load (or worse, load something unreviewed).

/// System prompt for electrical panel assessment.
///
/// Sent as the system portion of a vision request together with one panel
/// photograph. The model does all of the electrical reasoning; this crate
/// only carries the instruction.
pub const SYSTEM_PROMPT: &str = r#"You are an expert electrical engineer specializing in EV charger installations. Analyze the provided electrical panel image to assess its capacity for installing an EV charger.

Your analysis should determine:

1. **Panel Information**:
   - Main breaker amperage (typically 100A, 150A, or 200A)
   - Available breaker slots
   - Panel manufacturer and model if visible

2. **Current Load Assessment**:
   - Count and size of existing breakers
   - Estimate current electrical load
   - Identify any double-pole breakers (240V circuits)

3. **EV Charger Compatibility**:
   - Can the panel support a Level 2 EV charger? (typically requires 40-50A circuit)
   - Is there physical space for a double-pole breaker?
   - Estimated available capacity (in amperes)

4. **Recommendations**:
   - If suitable: Recommended breaker size for EV charger (32A, 40A, or 50A)
   - If unsuitable: What upgrades would be needed (panel upgrade, load management, etc.)
   - Any safety concerns or code compliance issues

5. **Confidence Level**: Rate your assessment confidence (high/medium/low) based on image clarity

Provide your response in clear bullet points organized by the categories above.

Note: Residential EV chargers typically need 40-50A circuits (can deliver 7.7-9.6 kW). A 200A panel with less than 80% load can usually accommodate this."#;

/// The five response categories the prompt asks the model to organize
/// its answer under, in prompt order.
pub const RESPONSE_CATEGORIES: [&str; 5] = [
    "Panel Information",
    "Current Load Assessment",
    "EV Charger Compatibility",
    "Recommendations",
    "Confidence Level",
];

/// The confidence ratings the prompt allows, strongest first.
pub const CONFIDENCE_LEVELS: [&str; 3] = ["high", "medium", "low"];

/// Breaker sizes (amperes) the prompt offers the model as recommendations.
pub const RECOMMENDED_BREAKER_SIZES_A: [u32; 3] = [32, 40, 50];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_nonempty_and_substantial() {
        assert!(SYSTEM_PROMPT.len() > 500);
    }

    #[test]
    fn test_prompt_is_the_same_on_every_retrieval() {
        let first = SYSTEM_PROMPT;
        let second = SYSTEM_PROMPT;
        assert_eq!(first, second);
    }

    #[test]
    fn test_prompt_names_every_response_category() {
        for category in RESPONSE_CATEGORIES {
            assert!(
                SYSTEM_PROMPT.contains(category),
                "prompt is missing category header: {category}"
            );
        }
    }

    #[test]
    fn test_prompt_carries_the_domain_figures() {
        // Main breaker amperage classes
        for amps in ["100A", "150A", "200A"] {
            assert!(SYSTEM_PROMPT.contains(amps), "missing {amps}");
        }
        // Level 2 circuit requirement and delivered power
        assert!(SYSTEM_PROMPT.contains("40-50A circuit"));
        assert!(SYSTEM_PROMPT.contains("7.7-9.6 kW"));
        // Recommended breaker sizes
        assert!(SYSTEM_PROMPT.contains("32A, 40A, or 50A"));
        // Feasibility heuristic for 200A panels
        assert!(SYSTEM_PROMPT.contains("80%"));
        assert!(SYSTEM_PROMPT.contains("200A panel with less than 80% load"));
    }

    #[test]
    fn test_prompt_mentions_level_2_charger() {
        assert!(SYSTEM_PROMPT.contains("Level 2 EV charger"));
    }

    #[test]
    fn test_prompt_enumerates_exactly_three_confidence_levels() {
        assert!(SYSTEM_PROMPT.contains("high/medium/low"));
        assert_eq!(CONFIDENCE_LEVELS.len(), 3);
        for level in CONFIDENCE_LEVELS {
            assert!(SYSTEM_PROMPT.contains(level), "missing level: {level}");
        }
    }

    #[test]
    fn test_breaker_size_constants_match_prompt_text() {
        for amps in RECOMMENDED_BREAKER_SIZES_A {
            assert!(SYSTEM_PROMPT.contains(&format!("{amps}A")));
        }
    }
}
