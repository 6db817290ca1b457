//! Chat command recognition.

/// A recognized configuration command, still unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCommand {
    /// Key alias as typed; empty means "show current settings".
    pub key: String,
    /// Everything after the key, joined back into one value string.
    pub value: String,
}

/// Recognizes `/configspeed [key] [value]` and the `/maxspeed <value>`
/// shorthand. Returns `None` for any other chat line so it can flow on
/// to the normal chat handling.
pub fn parse_chat_command(text: &str) -> Option<ChatCommand> {
    let mut parts = text.trim().split_whitespace();
    let head = parts.next()?;
    if head.eq_ignore_ascii_case("/configspeed") {
        let key = parts.next().unwrap_or("").to_string();
        let value = parts.collect::<Vec<_>>().join(" ");
        Some(ChatCommand { key, value })
    } else if head.eq_ignore_ascii_case("/maxspeed") {
        let value = parts.collect::<Vec<_>>().join(" ");
        if value.is_empty() {
            // Bare "/maxspeed" is a status query.
            Some(ChatCommand { key: String::new(), value })
        } else {
            Some(ChatCommand { key: "maxallspeed".to_string(), value })
        }
    } else {
        None
    }
}
