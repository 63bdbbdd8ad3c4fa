use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body sent upstream, OpenAI chat-completion shape.
#[derive(Debug, Serialize)]
pub struct UpstreamRequest {
    pub model: String,
    pub messages: Vec<UpstreamMessage>,
}

#[derive(Debug, Serialize)]
pub struct UpstreamMessage {
    pub role: &'static str,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_request_shape() {
        let req = UpstreamRequest {
            model: "m".into(),
            messages: vec![
                UpstreamMessage {
                    role: "system",
                    content: "You are a helpful assistant.".into(),
                },
                UpstreamMessage {
                    role: "user",
                    content: "hi".into(),
                },
            ],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "m");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
    }
}
