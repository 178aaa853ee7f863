use serde::{Deserialize, Serialize};
use std::fmt;

/// Which downstream backend a request is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMode {
    /// Single-shot backend taking a list of raw prompts.
    Completion,
    /// Multi-turn backend taking role-tagged messages.
    Chat,
}

impl fmt::Display for TargetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completion => f.write_str("completion"),
            Self::Chat => f.write_str("chat"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub max_gen_len: u32,
    pub temperature: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_seq_len: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatInput {
    /// A batch of conversations; each conversation is a list of turns.
    pub input_string: Vec<Vec<ChatMessage>>,
}

/// Outbound envelope. Serialized without a tag so each variant matches the
/// exact body its backend expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationRequest {
    Completion {
        prompts: Vec<String>,
        parameters: GenerationParameters,
    },
    Chat {
        input_data: ChatInput,
        parameters: GenerationParameters,
    },
}

impl GenerationRequest {
    pub fn new(mode: TargetMode, prompt: String, parameters: GenerationParameters) -> Self {
        match mode {
            TargetMode::Completion => Self::Completion {
                prompts: vec![prompt],
                parameters,
            },
            TargetMode::Chat => Self::Chat {
                input_data: ChatInput {
                    input_string: vec![vec![ChatMessage::user(prompt)]],
                },
                parameters,
            },
        }
    }

    pub fn mode(&self) -> TargetMode {
        match self {
            Self::Completion { .. } => TargetMode::Completion,
            Self::Chat { .. } => TargetMode::Chat,
        }
    }

    pub fn parameters(&self) -> &GenerationParameters {
        match self {
            Self::Completion { parameters, .. } | Self::Chat { parameters, .. } => parameters,
        }
    }

    /// The prompt text carried by the envelope.
    pub fn prompt(&self) -> Option<&str> {
        match self {
            Self::Completion { prompts, .. } => prompts.first().map(String::as_str),
            Self::Chat { input_data, .. } => input_data
                .input_string
                .first()
                .and_then(|conversation| conversation.first())
                .map(|message| message.content.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn params() -> GenerationParameters {
        GenerationParameters {
            max_gen_len: 1024,
            temperature: 0.0,
            max_seq_len: None,
        }
    }

    #[test]
    fn test_completion_envelope_shape() {
        let request = GenerationRequest::new(TargetMode::Completion, "hello".to_string(), params());

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "prompts": ["hello"],
                "parameters": {"max_gen_len": 1024, "temperature": 0.0}
            })
        );
        assert_eq!(request.mode(), TargetMode::Completion);
    }

    #[test]
    fn test_chat_envelope_shape() {
        let request = GenerationRequest::new(TargetMode::Chat, "hello".to_string(), params());

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "input_data": {"input_string": [[{"role": "user", "content": "hello"}]]},
                "parameters": {"max_gen_len": 1024, "temperature": 0.0}
            })
        );
        assert_eq!(request.mode(), TargetMode::Chat);
        assert_eq!(request.prompt(), Some("hello"));
    }

    #[test]
    fn test_max_seq_len_is_sent_only_when_set() {
        let mut parameters = params();
        parameters.max_seq_len = Some(2048);
        let request = GenerationRequest::new(TargetMode::Completion, "p".to_string(), parameters);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["parameters"]["max_seq_len"], json!(2048));
        assert!(body["parameters"].get("").is_none());
    }

    #[test]
    fn test_received_body_decodes_to_matching_variant() {
        let chat: GenerationRequest = serde_json::from_value(json!({
            "input_data": {"input_string": [[{"role": "user", "content": "x"}]]},
            "parameters": {"max_gen_len": 8, "temperature": 0.5}
        }))
        .unwrap();
        assert_eq!(chat.mode(), TargetMode::Chat);
        assert_eq!(chat.parameters().max_gen_len, 8);
    }
}
