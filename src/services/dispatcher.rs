use crate::domain::constants::SUBSYSTEM;
use crate::domain::models::{ExecutionRequest, Keywords, OptionValue};
use crate::services::coordinator::CoordinatorCheck;
use crate::table::{self, CommandDescriptor, DispatchError, KeywordRole, COMMAND_TABLE};

/// Generic interpreter over a command table, `COMMAND_TABLE` by default.
pub struct Dispatcher<'a> {
    tool: String,
    coordinator: &'a dyn CoordinatorCheck,
    table: &'static [CommandDescriptor],
}

impl<'a> Dispatcher<'a> {
    pub fn new(tool: impl Into<String>, coordinator: &'a dyn CoordinatorCheck) -> Self {
        Self {
            tool: tool.into(),
            coordinator,
            table: COMMAND_TABLE,
        }
    }

    pub fn with_table(mut self, table: &'static [CommandDescriptor]) -> Self {
        self.table = table;
        self
    }

    pub fn dispatch(
        &self,
        name: &str,
        positional: Vec<String>,
        keywords: Keywords,
    ) -> Result<ExecutionRequest, DispatchError> {
        let desc = table::lookup_in(self.table, name).ok_or_else(|| {
            DispatchError::UnknownCommand {
                name: name.to_string(),
                known: table::names_in(self.table),
            }
        })?;

        // Bookkeeping keys must be gone before they can count toward minimums.
        let (mut positional, keywords) = match desc.rewriter {
            Some(rewrite) => rewrite(positional, keywords)?,
            None => (positional, keywords),
        };

        if desc
            .min_positional_args
            .map(|min| positional.len() < min)
            .unwrap_or(false)
        {
            return Err(DispatchError::Usage {
                command: desc.name.to_string(),
                usage: desc.usage.to_string(),
            });
        }
        if desc
            .min_keyword_args
            .map(|min| keywords.len() < min)
            .unwrap_or(false)
        {
            return Err(match desc.keyword_role {
                KeywordRole::Payload => DispatchError::MissingKeyValuePairs {
                    command: desc.name.to_string(),
                },
                KeywordRole::Options => DispatchError::Usage {
                    command: desc.name.to_string(),
                    usage: desc.usage.to_string(),
                },
            });
        }

        let mut options: Keywords = desc
            .default_options
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        match desc.keyword_role {
            KeywordRole::Options => {
                for (key, value) in keywords {
                    if !desc.is_legal_option(&key) {
                        return Err(DispatchError::UnknownOption {
                            command: desc.name.to_string(),
                            option: key,
                            legal: desc.option_names(),
                        });
                    }
                    options.insert(key, value);
                }
            }
            KeywordRole::Payload => {
                positional.extend(keywords.into_iter().map(|(k, v)| format!("{}={}", k, v)));
            }
        }

        if desc.requires_coordinator && !self.coordinator.is_coordinator() {
            return Err(DispatchError::NotCoordinator {
                command: desc.name.to_string(),
            });
        }

        let flags = desc
            .default_options
            .iter()
            .filter(|(name, _)| options.get(*name).map(OptionValue::is_set).unwrap_or(false))
            .map(|(name, _)| name.to_string())
            .collect();
        let mut argv = vec![self.tool.clone(), SUBSYSTEM.to_string(), desc.name.to_string()];
        argv.extend(positional);
        tracing::debug!(command = desc.name, argc = argv.len(), "dispatched");

        Ok(ExecutionRequest {
            command: desc.name.to_string(),
            argv,
            options,
            flags,
        })
    }
}
