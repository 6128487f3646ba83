//! Prompt templates and canned fallbacks for the text-improvement proxy.
//!
//! The `type` field of the request selects one of five fixed prompts;
//! unknown values fall through to the generic improvement prompt, so the
//! lookup is total. Replace `{text}` before sending.

/// The improvement modes offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImproveKind {
    Summary,
    GrammarCheck,
    Elaboration,
    Objective,
    Improve,
}

impl ImproveKind {
    /// Total lookup from the wire `type` string. Anything unrecognized
    /// maps to the generic improvement prompt.
    pub fn parse(s: &str) -> ImproveKind {
        match s {
            "summary" => ImproveKind::Summary,
            "grammar_check" => ImproveKind::GrammarCheck,
            "elaboration" => ImproveKind::Elaboration,
            "objective" => ImproveKind::Objective,
            _ => ImproveKind::Improve,
        }
    }
}

pub const SUMMARY_PROMPT_TEMPLATE: &str =
    "Resuma o seguinte texto de forma concisa e clara: {text}";

pub const GRAMMAR_CHECK_PROMPT_TEMPLATE: &str =
    "Corrija a gramática e a ortografia do seguinte texto, retornando apenas o texto corrigido: {text}";

pub const ELABORATION_PROMPT_TEMPLATE: &str =
    "Elabore e expanda sobre o seguinte tópico ou texto, adicionando detalhes e profundidade: {text}";

pub const OBJECTIVE_PROMPT_TEMPLATE: &str =
    "Reescreva o seguinte objetivo de carreira de forma clara, direta e profissional: {text}";

pub const IMPROVE_PROMPT_TEMPLATE: &str =
    "Melhore o seguinte texto, tornando-o mais claro, conciso e profissional: {text}";

/// Builds the full prompt for a request.
pub fn prompt_for(kind: ImproveKind, text: &str) -> String {
    let template = match kind {
        ImproveKind::Summary => SUMMARY_PROMPT_TEMPLATE,
        ImproveKind::GrammarCheck => GRAMMAR_CHECK_PROMPT_TEMPLATE,
        ImproveKind::Elaboration => ELABORATION_PROMPT_TEMPLATE,
        ImproveKind::Objective => OBJECTIVE_PROMPT_TEMPLATE,
        ImproveKind::Improve => IMPROVE_PROMPT_TEMPLATE,
    };
    template.replace("{text}", text)
}

const SUMMARY_FALLBACK: &str =
    "Profissional dedicado, com sólida experiência na área e foco em resultados.";

const ELABORATION_FALLBACK: &str =
    "Atuação com responsabilidades crescentes, contribuindo para os resultados da equipe e da empresa.";

const OBJECTIVE_FALLBACK: &str =
    "Busco uma posição desafiadora onde possa aplicar minhas habilidades e contribuir para o crescimento da empresa.";

const IMPROVE_FALLBACK: &str =
    "Profissional comprometido, com boa comunicação e capacidade de entrega.";

/// Canned substitute used when the generative-text call fails. The proxy
/// never surfaces upstream failures; the caller always receives text.
/// For grammar checking the least-bad substitute is the input unchanged.
pub fn fallback_for(kind: ImproveKind, original: &str) -> String {
    match kind {
        ImproveKind::Summary => SUMMARY_FALLBACK.to_string(),
        ImproveKind::GrammarCheck => original.to_string(),
        ImproveKind::Elaboration => ELABORATION_FALLBACK.to_string(),
        ImproveKind::Objective => OBJECTIVE_FALLBACK.to_string(),
        ImproveKind::Improve => IMPROVE_FALLBACK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(ImproveKind::parse("summary"), ImproveKind::Summary);
        assert_eq!(ImproveKind::parse("grammar_check"), ImproveKind::GrammarCheck);
        assert_eq!(ImproveKind::parse("elaboration"), ImproveKind::Elaboration);
        assert_eq!(ImproveKind::parse("objective"), ImproveKind::Objective);
    }

    #[test]
    fn test_parse_unknown_type_falls_back_to_improve() {
        assert_eq!(ImproveKind::parse("poetry"), ImproveKind::Improve);
        assert_eq!(ImproveKind::parse(""), ImproveKind::Improve);
    }

    #[test]
    fn test_prompt_interpolates_text() {
        let prompt = prompt_for(ImproveKind::Summary, "dez anos de experiência");
        assert!(prompt.starts_with("Resuma"));
        assert!(prompt.ends_with("dez anos de experiência"));
        assert!(!prompt.contains("{text}"));
    }

    #[test]
    fn test_every_kind_has_a_prompt_and_fallback() {
        for kind in [
            ImproveKind::Summary,
            ImproveKind::GrammarCheck,
            ImproveKind::Elaboration,
            ImproveKind::Objective,
            ImproveKind::Improve,
        ] {
            assert!(!prompt_for(kind, "x").is_empty());
            assert!(!fallback_for(kind, "x").is_empty());
        }
    }

    #[test]
    fn test_grammar_fallback_echoes_input() {
        assert_eq!(
            fallback_for(ImproveKind::GrammarCheck, "meu texto original"),
            "meu texto original"
        );
    }
}
