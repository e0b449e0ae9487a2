//! Prompt construction and answer generation with local fallback.

use folio_retrieval::retriever::{ScoredChunk, page_citations};
use serde::Serialize;

use crate::fallback::fallback_answer;
use crate::provider::{LlmProvider, Message, Role};

/// Fixed reply when retrieval finds nothing relevant.
pub const NO_CONTENT_ANSWER: &str =
    "I couldn't find relevant information in the document to answer your question.";

const SYSTEM_PROMPT: &str = "You are a helpful assistant that answers questions about PDF \
                             documents accurately and concisely.";

/// A generated answer with its page citations.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub text: String,
    /// Distinct pages of the source chunks, first-occurrence order.
    pub citations: Vec<u32>,
    pub source_chunks: usize,
}

/// Turns a ranked chunk list into prose. Provider failures never surface:
/// the engine recovers with [`fallback_answer`] over the top chunk, and a
/// `None` provider takes the same path unconditionally.
pub struct AnswerEngine<P> {
    provider: Option<P>,
}

impl<P: LlmProvider> AnswerEngine<P> {
    #[must_use]
    pub fn new(provider: Option<P>) -> Self {
        Self { provider }
    }

    pub async fn answer(&self, query: &str, ranked: &[ScoredChunk]) -> Answer {
        let Some(top) = ranked.first() else {
            return Answer {
                text: NO_CONTENT_ANSWER.to_owned(),
                citations: Vec::new(),
                source_chunks: 0,
            };
        };

        let text = match &self.provider {
            Some(provider) => match provider.chat(&build_messages(query, ranked)).await {
                Ok(reply) => reply,
                Err(e) => {
                    tracing::warn!(
                        provider = provider.name(),
                        "generation failed, using local summary: {e}"
                    );
                    fallback_answer(query, &top.chunk.text)
                }
            },
            None => fallback_answer(query, &top.chunk.text),
        };

        Answer {
            text,
            citations: page_citations(ranked),
            source_chunks: ranked.len(),
        }
    }
}

fn build_messages(query: &str, ranked: &[ScoredChunk]) -> Vec<Message> {
    let context = ranked
        .iter()
        .map(|s| format!("[Page {}] {}", s.chunk.page_number, s.chunk.text))
        .collect::<Vec<_>>()
        .join("\n\n");

    let user_prompt = format!(
        "Use the following context from the PDF to answer the user's question. \
         Be accurate and cite specific information when possible.\n\n\
         Context from PDF:\n{context}\n\n\
         User Question: {query}\n\n\
         Instructions:\n\
         - Answer based only on the provided context\n\
         - Be concise but comprehensive\n\
         - If the context doesn't contain enough information to answer fully, say so\n\
         - Don't make up information not present in the context\n\n\
         Answer:"
    );

    vec![
        Message {
            role: Role::System,
            content: SYSTEM_PROMPT.to_owned(),
        },
        Message {
            role: Role::User,
            content: user_prompt,
        },
    ]
}

#[cfg(test)]
mod tests {
    use folio_retrieval::Chunk;

    use super::*;
    use crate::mock::MockProvider;

    fn scored(text: &str, page: u32, score: u32) -> ScoredChunk {
        ScoredChunk {
            chunk: Chunk {
                id: format!("doc.pdf-chunk-{page}"),
                text: text.to_owned(),
                page_number: page,
                file_name: "doc.pdf".to_owned(),
                document_id: "doc-1".to_owned(),
                keywords: Vec::new(),
            },
            score,
        }
    }

    #[tokio::test]
    async fn empty_result_yields_fixed_no_content_answer() {
        let engine = AnswerEngine::new(Some(MockProvider::default()));
        let answer = engine.answer("anything", &[]).await;
        assert_eq!(answer.text, NO_CONTENT_ANSWER);
        assert!(answer.citations.is_empty());
        assert_eq!(answer.source_chunks, 0);
    }

    #[tokio::test]
    async fn provider_reply_is_used_with_citations() {
        let engine = AnswerEngine::new(Some(MockProvider::with_responses(vec![
            "Glaciers carve valleys.".into(),
        ])));
        let ranked = [
            scored("Glaciers move slowly.", 3, 12),
            scored("Valleys form over time.", 1, 4),
            scored("More about glaciers.", 3, 2),
        ];
        let answer = engine.answer("how do valleys form", &ranked).await;
        assert_eq!(answer.text, "Glaciers carve valleys.");
        assert_eq!(answer.citations, vec![3, 1]);
        assert_eq!(answer.source_chunks, 3);
    }

    #[tokio::test]
    async fn provider_failure_recovers_with_local_summary() {
        let engine = AnswerEngine::new(Some(MockProvider::failing()));
        let ranked = [scored(
            "Glaciers move slowly. Erosion shapes valleys.",
            2,
            8,
        )];
        let answer = engine.answer("erosion", &ranked).await;
        assert!(answer.text.contains("Erosion shapes valleys"));
        assert_eq!(answer.citations, vec![2]);
    }

    #[tokio::test]
    async fn missing_provider_uses_local_summary() {
        let engine: AnswerEngine<MockProvider> = AnswerEngine::new(None);
        let ranked = [scored("Meltwater feeds the river below.", 5, 3)];
        let answer = engine.answer("meltwater", &ranked).await;
        assert!(answer.text.contains("Meltwater feeds the river below"));
        assert_eq!(answer.citations, vec![5]);
    }

    #[test]
    fn prompt_includes_page_attributed_context() {
        let ranked = [scored("Glaciers move slowly.", 3, 12)];
        let messages = build_messages("how fast do glaciers move?", &ranked);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[1].content.contains("[Page 3] Glaciers move slowly."));
        assert!(
            messages[1]
                .content
                .contains("User Question: how fast do glaciers move?")
        );
    }
}
