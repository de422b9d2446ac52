use crate::domain::constants::BOOKKEEPING_PREFIX;
use crate::domain::models::{Keywords, OptionValue};

/// Rewrites caller arguments before any validation happens.
pub type Rewriter = fn(Vec<String>, Keywords) -> Result<(Vec<String>, Keywords), DispatchError>;

/// How a command treats its keyword arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeywordRole {
    /// Keywords override `default_options`.
    Options,
    /// Keywords are the command's payload and become `key=value` tokens.
    Payload,
}

#[derive(Debug)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub usage: &'static str,
    pub min_positional_args: Option<usize>,
    pub min_keyword_args: Option<usize>,
    pub requires_coordinator: bool,
    pub default_options: &'static [(&'static str, OptionValue)],
    pub keyword_role: KeywordRole,
    pub rewriter: Option<Rewriter>,
}

impl CommandDescriptor {
    pub fn option_names(&self) -> Vec<String> {
        self.default_options
            .iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub fn is_legal_option(&self, key: &str) -> bool {
        self.default_options.iter().any(|(name, _)| *name == key)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unknown command `{name}`; available commands: {}", .known.join(", "))]
    UnknownCommand { name: String, known: Vec<String> },
    #[error("not enough arguments for `{command}`\nusage: {usage}")]
    Usage { command: String, usage: String },
    #[error("unknown option `{option}` for `{command}`; legal options: {}", .legal.join(", "))]
    UnknownOption {
        command: String,
        option: String,
        legal: Vec<String>,
    },
    #[error("`{command}` needs at least one key=value pair")]
    MissingKeyValuePairs { command: String },
    #[error("`{command}` may only run on the designated coordinator (DC) node")]
    NotCoordinator { command: String },
    #[error("malformed key=value token: `{0}`")]
    MalformedKeyValue(String),
    #[error("key `{0}` given more than once")]
    DuplicateKey(String),
}

static SHOW_DEFAULTS: [(&str, OptionValue); 2] = [
    ("xml", OptionValue::Bool(false)),
    ("changed", OptionValue::Bool(false)),
];

static PROPERTY_DEFAULTS: [(&str, OptionValue); 0] = [];

pub static COMMAND_TABLE: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "show",
        usage: "show [FILTER...] [--xml] [--changed]\n\
                FILTER: object id, type:<type>, tag:<tag> or related:<primitive>",
        min_positional_args: None,
        min_keyword_args: None,
        requires_coordinator: false,
        default_options: &SHOW_DEFAULTS,
        keyword_role: KeywordRole::Options,
        rewriter: Some(strip_bookkeeping),
    },
    CommandDescriptor {
        name: "property",
        usage: "property KEY=VALUE [KEY=VALUE...]\n\
                each KEY may appear only once",
        min_positional_args: None,
        min_keyword_args: Some(1),
        requires_coordinator: true,
        default_options: &PROPERTY_DEFAULTS,
        keyword_role: KeywordRole::Payload,
        rewriter: Some(property_pairs),
    },
];

pub fn lookup(name: &str) -> Option<&'static CommandDescriptor> {
    lookup_in(COMMAND_TABLE, name)
}

pub fn lookup_in(
    table: &'static [CommandDescriptor],
    name: &str,
) -> Option<&'static CommandDescriptor> {
    table.iter().find(|d| d.name == name)
}

pub fn command_names() -> Vec<String> {
    names_in(COMMAND_TABLE)
}

pub fn names_in(table: &[CommandDescriptor]) -> Vec<String> {
    table.iter().map(|d| d.name.to_string()).collect()
}

pub fn is_bookkeeping_key(key: &str) -> bool {
    key.starts_with(BOOKKEEPING_PREFIX)
}

pub fn strip_bookkeeping(
    positional: Vec<String>,
    mut keywords: Keywords,
) -> Result<(Vec<String>, Keywords), DispatchError> {
    keywords.retain(|k, _| !is_bookkeeping_key(k));
    Ok((positional, keywords))
}

/// `property` accepts its pairs either as keywords or as `key=value`
/// positional tokens; both end up as keywords. Keys from both sources go
/// through the same rule, and a key may only be given once.
fn property_pairs(
    positional: Vec<String>,
    keywords: Keywords,
) -> Result<(Vec<String>, Keywords), DispatchError> {
    let (_, mut pairs) = strip_bookkeeping(Vec::new(), keywords)?;
    for (key, value) in &pairs {
        check_pair_key(key, value)?;
    }
    for token in positional {
        let (key, value) = parse_key_value(&token)?;
        if is_bookkeeping_key(&key) {
            continue;
        }
        if pairs.contains_key(&key) {
            return Err(DispatchError::DuplicateKey(key));
        }
        pairs.insert(key, OptionValue::Str(value));
    }
    Ok((Vec::new(), pairs))
}

fn check_pair_key(key: &str, value: &OptionValue) -> Result<(), DispatchError> {
    if key.trim().is_empty() || key.contains('=') {
        return Err(DispatchError::MalformedKeyValue(format!("{}={}", key, value)));
    }
    Ok(())
}

pub fn parse_key_value(token: &str) -> Result<(String, String), DispatchError> {
    match token.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(DispatchError::MalformedKeyValue(token.to_string())),
    }
}
