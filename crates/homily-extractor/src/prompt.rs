//! LLM prompt for sermon generation

use homily_domain::SermonRequest;

/// Builds the prompt that asks the LLM for a sermon in the outline shape
/// the assembler understands
pub struct PromptBuilder<'a> {
    request: &'a SermonRequest,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(request: &'a SermonRequest) -> Self {
        Self { request }
    }

    /// Build the complete generation prompt
    pub fn build(&self) -> String {
        let request = self.request;
        let mut prompt = String::new();

        // 1. What to write
        prompt.push_str(&format!(
            "Crie um sermão cristão completo com o tema: \"{}\" baseado na passagem bíblica: \"{}\".\n\n",
            request.theme.trim(),
            request.passage.trim()
        ));

        // 2. Style and length
        prompt.push_str(&format!(
            "O sermão deve ser do tipo {} e ter duração aproximada de {} minutos.\n\n",
            request.style, request.duration_minutes
        ));

        // 3. Caller notes
        prompt.push_str(&format!(
            "Instruções adicionais: {}\n\n",
            request.notes.as_deref().map(str::trim).unwrap_or("Nenhuma")
        ));

        // 4. Required parts and output shape
        prompt.push_str(REQUIRED_PARTS);
        prompt.push_str("\n\n");
        prompt.push_str(AUDIENCE);
        prompt.push_str("\n\n");
        prompt.push_str(STRUCTURE_REMINDER);

        prompt
    }
}

const REQUIRED_PARTS: &str = r#"O sermão deve incluir:
- Um título impactante relacionado ao tema
- Uma introdução que contextualize a passagem bíblica e capture a atenção
- 3-5 pontos principais com explicações bíblicas, ilustrações e aplicações práticas
- Para cada ponto, inclua referências bíblicas adicionais que apoiem o ensino
- Uma conclusão que sintetize a mensagem e faça um apelo à ação
- 3-5 perguntas para reflexão/aplicação"#;

const AUDIENCE: &str = "O conteúdo deve ser teologicamente sólido, pastoralmente sensível, e relevante para o público cristão contemporâneo brasileiro.";

const STRUCTURE_REMINDER: &str = r#"Estruture a resposta claramente com seções distintas para título, introdução, pontos principais (com subtítulos), conclusão e perguntas para aplicação.
Use o formato:
Título: <título>
Introdução
1. <título do ponto>
Referências: <referência>, <referência>
Conclusão
Perguntas
1. <pergunta>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use homily_domain::SermonStyle;

    fn request() -> SermonRequest {
        SermonRequest::new("Fé em tempos difíceis", "Hebreus 11:1-6")
            .with_style(SermonStyle::Topical)
            .with_duration(25)
    }

    #[test]
    fn test_prompt_includes_theme_and_passage() {
        let prompt = PromptBuilder::new(&request()).build();
        assert!(prompt.contains("\"Fé em tempos difíceis\""));
        assert!(prompt.contains("\"Hebreus 11:1-6\""));
    }

    #[test]
    fn test_prompt_includes_style_and_duration() {
        let prompt = PromptBuilder::new(&request()).build();
        assert!(prompt.contains("do tipo temático"));
        assert!(prompt.contains("25 minutos"));
    }

    #[test]
    fn test_prompt_without_notes() {
        let prompt = PromptBuilder::new(&request()).build();
        assert!(prompt.contains("Instruções adicionais: Nenhuma"));
    }

    #[test]
    fn test_prompt_with_notes() {
        let request = request().with_notes("Para jovens ");
        let prompt = PromptBuilder::new(&request).build();
        assert!(prompt.contains("Instruções adicionais: Para jovens\n"));
    }

    #[test]
    fn test_prompt_requests_every_section() {
        let prompt = PromptBuilder::new(&request()).build();
        for needle in ["título", "introdução", "pontos principais", "conclusão", "perguntas"] {
            assert!(prompt.to_lowercase().contains(needle), "missing {}", needle);
        }
    }
}
