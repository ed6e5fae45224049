//! Pure functions for recognising bot commands in message text.
//!
//! A command is the first whitespace-delimited token of the text, e.g. `/randomwiki`. In groups
//! Telegram appends the addressed bot: `/randomwiki@my_wiki_bot`. A command addressed to another
//! bot is not ours; when our own username is not known yet any addressee is accepted.

/// Replies with usage instructions.
pub const START_COMMAND: &str = "/start";

/// Posts a random article.
pub const RANDOM_WIKI_COMMAND: &str = "/randomwiki";

/// Splits the leading command token into `(command, addressee)`.
/// Returns `None` when the text does not start with `/`.
pub fn parse_command(text: &str) -> Option<(&str, Option<&str>)> {
    let token = text.split_whitespace().next()?;
    if !token.starts_with('/') {
        return None;
    }
    match token.split_once('@') {
        Some((command, addressee)) => Some((command, Some(addressee))),
        None => Some((token, None)),
    }
}

/// True if `text` invokes `command` and, when addressed, is addressed to `bot_username`.
/// Usernames compare case-insensitively, commands exactly.
pub fn is_command(text: &str, command: &str, bot_username: Option<&str>) -> bool {
    match parse_command(text) {
        Some((cmd, _)) if cmd != command => false,
        Some((_, None)) => true,
        Some((_, Some(addressee))) => match bot_username {
            Some(username) => addressee.eq_ignore_ascii_case(username),
            None => true,
        },
        None => false,
    }
}
