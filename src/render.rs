use crate::scanner::token::Token;

/// How tokens are printed by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

pub fn render(tokens: &[Token], format: Format) -> serde_json::Result<String> {
    match format {
        Format::Text => Ok(to_text(tokens)),
        Format::Json => to_json(tokens).map(|mut json| {
            json.push('\n');
            json
        }),
    }
}

/// One `KIND lexeme literal` line per token.
pub fn to_text(tokens: &[Token]) -> String {
    let mut buf = String::new();
    for token in tokens {
        buf.push_str(&token.to_string());
        buf.push('\n');
    }
    buf
}

pub fn to_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}
