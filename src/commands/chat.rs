use crate::api::{
    process_streaming_response, ApiClient, ChatRequest, Message, CHAT_COMPLETIONS_PATH,
};
use crate::config::defaults::SEARCH_SYSTEM_PROMPT;
use crate::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    /// Just the user's message.
    Plain,
    /// Prefixed with a system prompt asking for current information.
    Search,
}

pub fn build_messages(mode: ChatMode, message: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(2);
    if mode == ChatMode::Search {
        messages.push(Message::system(SEARCH_SYSTEM_PROMPT));
    }
    messages.push(Message::user(message));
    messages
}

/// Send one message and stream the reply into `out`.
pub async fn run<W: Write>(
    client: &ApiClient,
    mode: ChatMode,
    model: &str,
    message: &str,
    out: &mut W,
) -> Result<String> {
    let request_body = ChatRequest {
        model: model.to_string(),
        messages: build_messages(mode, message),
        stream: true,
    };

    let response = client
        .post_json(CHAT_COMPLETIONS_PATH, &request_body, None)
        .await?;

    write!(out, "\n[{}] ", model)?;
    out.flush()?;

    process_streaming_response(response, client.verbose(), out).await
}
