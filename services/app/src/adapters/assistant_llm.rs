//! services/app/src/adapters/assistant_llm.rs
//!
//! This module contains the adapter for the lesson chat assistant.
//! It implements the `LessonAssistantService` port from the `core` crate.

const SYSTEM_PROMPT: &str = "Eres CodeGenio, un genio amigable y divertido que ayuda a los niños a aprender programación. Tu objetivo es responder preguntas sobre una lección específica. Explica las cosas de manera muy simple, con entusiasmo y usando analogías que un niño pueda entender. Basa tus respuestas únicamente en el contenido de la lección proporcionado. Mantén tus respuestas concisas, relevantes a la pregunta y motivadoras.";

/// Shown when no API key is configured.
const MISSING_KEY_REPLY: &str = "Lo siento, mi lámpara mágica no tiene energía. Parece que la clave de API no está configurada. Por favor, asegúrate de que un adulto configure la variable OPENAI_API_KEY en el entorno.";

/// Shown on transport failures.
const CONNECTION_FAILURE_REPLY: &str = "Oops. Hubo un problema al conectar con mi cerebro de IA. Por favor, revisa tu conexión a internet y vuelve a intentarlo.";

/// Shown when the endpoint answers with no usable text.
const EMPTY_REPLY: &str = "No pude generar una respuesta. ¡Inténtalo de nuevo!";

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use codegenio_core::ports::{AssistantReply, LessonAssistantService};
use tracing::error;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `LessonAssistantService` using an
/// OpenAI-compatible chat completion endpoint.
#[derive(Clone)]
pub struct OpenAiAssistantAdapter {
    client: Option<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiAssistantAdapter {
    /// Creates a new `OpenAiAssistantAdapter`. Without an API key the
    /// assistant stays usable and answers with a canned reply.
    pub fn new(api_key: Option<&str>, model: String) -> Self {
        let client =
            api_key.map(|key| Client::with_config(OpenAIConfig::new().with_api_key(key)));
        Self { client, model }
    }

    fn build_user_prompt(question: &str, lesson_content: &str, lesson_title: &str) -> String {
        format!(
            "Lección: \"{lesson_title}\"\n\nContenido:\n{lesson_content}\n\nPregunta del estudiante: \"{question}\""
        )
    }

    async fn completion(
        &self,
        client: &Client<OpenAIConfig>,
        user_prompt: String,
    ) -> Result<Option<String>, OpenAIError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(0.7)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_PROMPT)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = client.chat().create(request).await?;
        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

//=========================================================================================
// `LessonAssistantService` Trait Implementation
//=========================================================================================

#[async_trait]
impl LessonAssistantService for OpenAiAssistantAdapter {
    /// Builds one combined prompt from the lesson and the question, and
    /// degrades every failure to a user-facing apology.
    async fn ask(
        &self,
        question: &str,
        lesson_content: &str,
        lesson_title: &str,
    ) -> AssistantReply {
        let Some(client) = &self.client else {
            error!("OPENAI_API_KEY is not set; the lesson assistant is running degraded");
            return AssistantReply {
                text: MISSING_KEY_REPLY.to_string(),
            };
        };

        let user_prompt = Self::build_user_prompt(question, lesson_content, lesson_title);

        match self.completion(client, user_prompt).await {
            Ok(Some(content)) => {
                let text = content.trim().to_string();
                AssistantReply {
                    text: if text.is_empty() {
                        EMPTY_REPLY.to_string()
                    } else {
                        text
                    },
                }
            }
            Ok(None) => AssistantReply {
                text: EMPTY_REPLY.to_string(),
            },
            Err(OpenAIError::ApiError(api_error)) => {
                error!("Error from the completion API: {:?}", api_error);
                AssistantReply {
                    text: format!("Oops. {}", api_error.message),
                }
            }
            Err(e) => {
                error!("Failed to contact the completion API: {:?}", e);
                AssistantReply {
                    text: CONNECTION_FAILURE_REPLY.to_string(),
                }
            }
        }
    }
}
