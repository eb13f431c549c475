use crate::host::IncomingMessage;

// Revolt refuses messages longer than this
pub const MESSAGE_LIMIT: usize = 2000;

// messages shorter than this are never commands
pub const MIN_CONTENT_LEN: usize = 2;

// true: the message must be ignored
pub fn crash_condition(message: &IncomingMessage) -> bool {
    message.content.chars().count() < MIN_CONTENT_LEN || message.server.is_none()
}

// splits off the first word, returning it and the remainder with leading whitespace trimmed
pub fn next_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    Some(match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    })
}

// like next_word, but a leading double quote groups everything up to the closing quote
pub fn next_arg(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if let Some(quoted) = input.strip_prefix('"') {
        if let Some((arg, rest)) = quoted.split_once('"') {
            return Some((arg, rest.trim_start()));
        }
    }
    next_word(input)
}

pub fn code_block(input: &str) -> String {
    format!("```text\n{input}\n```")
}

// lists items inside code blocks, starting a new message before the limit is hit
pub fn paginate(header: &str, items: &[String], limit: usize) -> Vec<String> {
    const OPEN: &str = "```text\n";
    const CLOSE: &str = "```";

    let mut pages = Vec::new();
    let mut page = format!("{OPEN}{header}\n");

    for item in items {
        let line = format!("\t{item}\n");
        if page.chars().count() + line.chars().count() + CLOSE.len() > limit {
            page += CLOSE;
            pages.push(page);
            page = String::from(OPEN);
        }
        page += &line;
    }
    page += CLOSE;
    pages.push(page);
    pages
}
