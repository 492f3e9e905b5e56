//! Replacement mining through a chat-completion model.
//!
//! The model is asked for a JSON array of `{"old", "new"}` pairs for one
//! sentence. Its reply is free text that usually, but not always, contains
//! that array; [`parse_replacements`] digs it out and gives up quietly when
//! it can't.

use super::config::TuningConfig;
use super::error::Result;
use super::replace::Replacement;
use serde::{Deserialize, Serialize};

const SYSTEM_PROMPT: &str = "You make AI-written text read like a person wrote it. \
For the sentence you are given, list short word or phrase substitutions that make it sound less formal \
and less like generated text. Keep the meaning. Reply with only a JSON array of objects with the keys \
\"old\" and \"new\", where \"old\" is copied exactly from the sentence. Reply with [] if nothing needs changing.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: &str) -> Self {
        ChatMessage { role: role.to_string(), content: content.to_string() }
    }
}

/// Body of a chat-completion request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Text of the first choice.
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// Sends chat-completion requests.
pub trait CompletionClient {
    fn complete(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

pub fn build_replacement_request(sentence: &str, config: &TuningConfig) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        messages: vec![ChatMessage::new("system", SYSTEM_PROMPT), ChatMessage::new("user", sentence)],
        temperature: config.temperature,
        top_p: config.top_p,
        max_tokens: config.max_tokens,
    }
}

/// Extract replacement pairs from a model reply.
///
/// Takes the outermost `[...]` span, so code fences and chatter around the
/// array are ignored. Any failure yields an empty list. Pairs with an empty
/// `old` or with `old == new` are dropped.
pub fn parse_replacements(raw: &str) -> Vec<Replacement> {
    let span = match (raw.find('['), raw.rfind(']')) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => {
            log::warn!("[tuning] no JSON array in completion ({} chars)", raw.len());
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Replacement>>(span) {
        Ok(pairs) => pairs.into_iter().filter(Replacement::is_effective).collect(),
        Err(err) => {
            log::warn!("[tuning] unparseable replacement list: {err}");
            Vec::new()
        }
    }
}

/// Ask `client` for replacements for one sentence.
///
/// Transport and HTTP errors propagate; a reply that doesn't parse gives an
/// empty list.
pub fn mine_replacements<C>(client: &C, config: &TuningConfig, sentence: &str) -> Result<Vec<Replacement>>
where
    C: CompletionClient + ?Sized,
{
    let response = client.complete(&build_replacement_request(sentence, config))?;
    let pairs = parse_replacements(response.content().unwrap_or_default());
    log::debug!("[tuning] mined {} replacement(s) for {:?}", pairs.len(), sentence);
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(old: &str, new: &str) -> Replacement {
        Replacement { old: old.to_string(), new: new.to_string() }
    }

    #[test]
    fn request_carries_config_and_sentence() {
        let config = TuningConfig::new("a", "b");
        let request = build_replacement_request("It is paramount.", &config);
        assert_eq!(request.model, config.model);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1], ChatMessage::new("user", "It is paramount."));

        let json = serde_json::to_value(&request).unwrap();
        for key in ["model", "messages", "temperature", "top_p", "max_tokens"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn parses_a_bare_array() {
        let raw = r#"[{"old":"utilize","new":"use"},{"old":"paramount","new":"key"}]"#;
        assert_eq!(parse_replacements(raw), vec![pair("utilize", "use"), pair("paramount", "key")]);
    }

    #[test]
    fn parses_an_array_inside_chatter_and_fences() {
        let raw = "Sure! Here you go:\n```json\n[{\"old\": \"delve into\", \"new\": \"dig into\"}]\n```\nHope that helps.";
        assert_eq!(parse_replacements(raw), vec![pair("delve into", "dig into")]);
    }

    #[test]
    fn drops_empty_and_identity_pairs() {
        let raw = r#"[{"old":"","new":"x"},{"old":"same","new":"same"},{"old":"very","new":"really"}]"#;
        assert_eq!(parse_replacements(raw), vec![pair("very", "really")]);
    }

    #[test]
    fn fails_soft() {
        assert!(parse_replacements("").is_empty());
        assert!(parse_replacements("no array here").is_empty());
        assert!(parse_replacements("] backwards [").is_empty());
        assert!(parse_replacements(r#"[{"old": "x"}]"#).is_empty());
        assert!(parse_replacements("[not json]").is_empty());
    }

    struct Reply(&'static str);

    impl CompletionClient for Reply {
        fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse> {
            let message = ChatMessage::new("assistant", self.0);
            Ok(ChatResponse { choices: vec![ChatChoice { message }] })
        }
    }

    #[test]
    fn mining_tolerates_garbage_replies() {
        let config = TuningConfig::new("a", "b");
        assert!(mine_replacements(&Reply("I can't help with that."), &config, "Hi.").unwrap().is_empty());
        assert_eq!(
            mine_replacements(&Reply(r#"[{"old":"Hi","new":"Hey"}]"#), &config, "Hi.").unwrap(),
            vec![pair("Hi", "Hey")]
        );
    }
}
