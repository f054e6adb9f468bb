use crate::config::{Command, ShellLine};
use crate::core::admin::{members_table, ADMIN_SECRET_LABEL};
use crate::core::classifier::format_distances;
use crate::core::engine::MembershipEngine;
use crate::core::session::Session;
use crate::core::{CredentialInput, CredentialVerifier, MemberRegistry, TableRenderer};
use crate::domain::ports::Table;
use crate::utils::error::{MembershipError, Result};
use crate::utils::validation::parse_amount;
use clap::Parser;
use std::io::Write;

pub const SHELL_PROMPT: &str = "pac";

/// Runs CLI commands against one engine, writing user-facing text to `out`.
pub struct CommandRunner<'a, R, V, I, W>
where
    R: MemberRegistry,
    V: CredentialVerifier,
    I: CredentialInput + ?Sized,
    W: Write,
{
    engine: &'a mut MembershipEngine<R, V>,
    renderer: &'a dyn TableRenderer,
    input: &'a mut I,
    out: &'a mut W,
}

impl<'a, R, V, I, W> CommandRunner<'a, R, V, I, W>
where
    R: MemberRegistry,
    V: CredentialVerifier,
    I: CredentialInput + ?Sized,
    W: Write,
{
    pub fn new(
        engine: &'a mut MembershipEngine<R, V>,
        renderer: &'a dyn TableRenderer,
        input: &'a mut I,
        out: &'a mut W,
    ) -> Self {
        Self {
            engine,
            renderer,
            input,
            out,
        }
    }

    pub fn run(&mut self, command: &Command) -> Result<()> {
        tracing::debug!("Running command: {:?}", command);
        match command {
            Command::Benefits => {
                let table = self.engine.catalog().benefits_table();
                self.titled("PacCommerce Membership Benefits", &table)
            }
            Command::Requirements => {
                let table = self.engine.catalog().requirements_table();
                self.titled("PacCommerce Membership Requirements", &table)
            }
            Command::Classify {
                username,
                expense,
                income,
            } => self.classify(username, expense, income),
            Command::Status { username } => {
                let session = self.open_session(username)?;
                writeln!(self.out, "{}", session.status())?;
                Ok(())
            }
            Command::Price {
                username,
                expense,
                income,
                prices,
            } => self.price(username, expense.as_deref(), income.as_deref(), prices),
            Command::Members => self.members(),
            Command::Remove { username } => self.remove(username),
            Command::Shell => self.shell(),
        }
    }

    fn titled(&mut self, title: &str, table: &Table) -> Result<()> {
        let rendered = self.renderer.render(table)?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", rendered)?;
        Ok(())
    }

    fn open_session(&mut self, username: &str) -> Result<Session> {
        if self.engine.registry().contains(username) {
            writeln!(
                self.out,
                "To verify your identity as {}, please answer:",
                username
            )?;
        }

        let session = self.engine.open_session(username, &mut *self.input)?;
        if session.is_verified_member() {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "Welcome back, {}! Thank you for verifying your identity.",
                username
            )?;
        }
        Ok(session)
    }

    fn classify(&mut self, username: &str, expense: &str, income: &str) -> Result<()> {
        let expense = parse_amount("monthly_expense", expense)?;
        let income = parse_amount("monthly_income", income)?;

        let mut session = self.open_session(username)?;
        let classification = self.engine.classify(&mut session, expense, income)?;

        writeln!(
            self.out,
            "Euclidean Distance calculation for user {}: {}",
            username,
            format_distances(&classification.distances)
        )?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Based on the result, you have been automatically registered as a member of:"
        )?;
        writeln!(self.out, "{}", classification.tier)?;
        Ok(())
    }

    fn price(
        &mut self,
        username: &str,
        expense: Option<&str>,
        income: Option<&str>,
        prices: &[String],
    ) -> Result<()> {
        let prices = prices
            .iter()
            .enumerate()
            .map(|(i, raw)| parse_amount(&format!("price_list[{}]", i), raw))
            .collect::<Result<Vec<f64>>>()?;

        let inline = match (expense, income) {
            (Some(expense), Some(income)) => Some((
                parse_amount("monthly_expense", expense)?,
                parse_amount("monthly_income", income)?,
            )),
            _ => None,
        };

        let mut session = self.open_session(username)?;
        if let Some((expense, income)) = inline {
            let classification = self.engine.classify(&mut session, expense, income)?;
            writeln!(self.out, "{} classified as {}.", username, classification.tier)?;
        }

        let quote = self.engine.calculate_price(&session, &prices)?;
        let mut lines = quote.summary(username).into_iter();
        if let Some(first) = lines.next() {
            writeln!(self.out, "{}", first)?;
            writeln!(self.out)?;
        }
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn members(&mut self) -> Result<()> {
        let secret = self.input.prompt_secret(ADMIN_SECRET_LABEL)?;
        let entries = self.engine.list_all_members(&secret)?;

        writeln!(self.out, "Access granted. Displaying all registered members.")?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.renderer.render(&members_table(&entries))?)?;
        Ok(())
    }

    fn remove(&mut self, username: &str) -> Result<()> {
        self.engine.ensure_registered(username)?;
        let secret = self.input.prompt_secret(ADMIN_SECRET_LABEL)?;
        self.engine.remove_member(username, &secret)?;

        writeln!(
            self.out,
            "Access granted. User '{}' has been removed.",
            username
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "Updated registered members list:")?;
        let entries = self.engine.registry().all_entries();
        writeln!(self.out, "{}", self.renderer.render(&members_table(&entries))?)?;
        Ok(())
    }

    /// Reads commands until `exit`, `quit` or end of input. Command failures are
    /// reported and the loop continues with the registry as it stands.
    fn shell(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "PacCommerce membership shell. Type 'help' for commands, 'exit' to leave."
        )?;

        loop {
            let line = match self.input.prompt(SHELL_PROMPT) {
                Ok(line) => line,
                Err(MembershipError::InputError { .. }) => break,
                Err(e) => return Err(e),
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if matches!(line, "exit" | "quit") {
                break;
            }

            let words = match split_shell_line(line) {
                Ok(words) => words,
                Err(e) => {
                    writeln!(self.out, "❌ {}", e.user_friendly_message())?;
                    continue;
                }
            };
            let command = match ShellLine::try_parse_from(words) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    writeln!(self.out, "{}", e.render())?;
                    continue;
                }
            };
            if command == Command::Shell {
                writeln!(self.out, "Already in the shell.")?;
                continue;
            }

            if let Err(e) = self.run(&command) {
                tracing::warn!("Shell command failed: {}", e);
                writeln!(self.out, "❌ {}", e.user_friendly_message())?;
            }
        }

        writeln!(self.out, "Bye.")?;
        Ok(())
    }
}

/// Splits a shell line into words on whitespace. Single or double quotes group
/// words, so `classify "Budi Santoso" --expense 7` keeps the name together.
pub fn split_shell_line(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(MembershipError::validation(
            "command",
            line,
            format!("unterminated {} quote", q),
        ));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
