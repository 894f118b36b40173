//! Prompt composition. Pure formatting over an already validated [`Brief`].

use crate::brief::Brief;
use crate::serializers::consistency::LayoutSpec;

pub const NO_RULES_PLACEHOLDER: &str = "(No explicit rules parsed)";

const PROMPT_HEADER: &str = "You are a brand-consistent visual prompt writer.";
const PROMPT_TRAILER: &str =
    "Output: Write ONE detailed image-generation prompt that follows the brand rules strictly.\n\
Avoid anything not allowed by the rules. Keep it consistent and reproducible.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub image_prompt: String,
    pub applied_rules: Vec<String>,
    pub layout_spec: LayoutSpec,
}

pub fn compose(brief: &Brief, rules: &[String]) -> Composition {
    Composition {
        image_prompt: image_prompt(brief, rules),
        applied_rules: applied_rules(rules),
        layout_spec: layout_spec(),
    }
}

pub fn image_prompt(brief: &Brief, rules: &[String]) -> String {
    format!(
        "{PROMPT_HEADER}\nBriefing: {}\nTask: {}\nBrand rules:\n- {}\n{PROMPT_TRAILER}",
        brief.briefing,
        brief.task,
        rules.join("\n- "),
    )
}

pub fn applied_rules(rules: &[String]) -> Vec<String> {
    if rules.is_empty() {
        vec![NO_RULES_PLACEHOLDER.to_string()]
    } else {
        rules.to_vec()
    }
}

/// The hero banner template. Does not depend on the request.
pub fn layout_spec() -> LayoutSpec {
    LayoutSpec {
        format: "hero_banner".into(),
        layout: ["headline_top_left", "visual_center", "cta_bottom_left"]
            .map(String::from)
            .to_vec(),
        safe_area: "10%".into(),
        typography: "bold headline + short subline".into(),
    }
}
