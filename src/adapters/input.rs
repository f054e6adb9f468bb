use crate::core::CredentialInput;
use crate::utils::error::{MembershipError, Result};
use std::collections::VecDeque;

/// Terminal prompts. Secrets are read without echo.
#[cfg(feature = "cli")]
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptInput;

#[cfg(feature = "cli")]
impl CredentialInput for PromptInput {
    fn prompt(&mut self, label: &str) -> Result<String> {
        dialoguer::Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| MembershipError::InputError {
                message: format!("{}: {}", label, e),
            })
    }

    fn prompt_secret(&mut self, label: &str) -> Result<String> {
        dialoguer::Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| MembershipError::InputError {
                message: format!("{}: {}", label, e),
            })
    }
}

/// Answers prompts from a fixed script, in order.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    seen: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            seen: Vec::new(),
        }
    }

    pub fn prompts_seen(&self) -> usize {
        self.seen.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.seen
    }
}

impl CredentialInput for ScriptedInput {
    fn prompt(&mut self, label: &str) -> Result<String> {
        self.seen.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| MembershipError::InputError {
                message: format!("no scripted answer for '{}'", label),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_answers_in_order() {
        let mut input = ScriptedInput::new(["Gold", "secret"]);
        assert_eq!(input.prompt("tier").unwrap(), "Gold");
        assert_eq!(input.prompt_secret("password").unwrap(), "secret");
        assert_eq!(input.labels(), ["tier", "password"]);

        let err = input.prompt("extra").unwrap_err();
        assert!(matches!(err, MembershipError::InputError { .. }));
        assert_eq!(input.prompts_seen(), 3);
    }
}
