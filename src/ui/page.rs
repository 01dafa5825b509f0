//! Interactive calculator page on a terminal.
//!
//! Mirrors the calculator page layout: two operand fields, an operator pick
//! list, a result display, an alert for rejected input and the history list.

use crate::calculator::{Expression, Operator, SelectionError, split_entry};
use crate::config::Config;
use crate::items::{CalculatorItem, HistoryItem, ListItem};
use crate::session::Session;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};

/// What a line typed at the left operand prompt asks for.
enum Command {
    Quit,
    History,
    Operators,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            ":quit" | ":q" => Some(Self::Quit),
            ":history" | ":h" => Some(Self::History),
            ":operators" | ":o" => Some(Self::Operators),
            _ => None,
        }
    }
}

/// A calculator page reading from `input` and drawing on `output`.
pub struct CalculatorPage<R, W> {
    session: Session,
    config: Config,
    input: R,
    output: W,
    /// New history entries, fed by the session.
    recorded: flume::Receiver<Expression>,
    /// The history list as currently shown.
    history_rows: Vec<ListItem>,
}

impl<R: BufRead, W: Write> CalculatorPage<R, W> {
    /// Create a page with a fresh session.
    pub fn new(config: Config, input: R, output: W) -> Self {
        let mut session = Session::new();
        let recorded = session.subscribe();

        Self {
            session,
            config,
            input,
            output,
            recorded,
            history_rows: Vec::new(),
        }
    }

    /// The session behind this page.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until `:quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.render_operators()?;

        loop {
            let Some(line) = self.read_field("left operand")? else {
                break;
            };

            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(Command::History) => {
                    self.render_history()?;
                    continue;
                }
                Some(Command::Operators) => {
                    self.render_operators()?;
                    continue;
                }
                None => {}
            }

            let (left, selection, right) = match split_entry(&line) {
                Some(entry) => (entry.left, entry.selection, entry.right),
                None => {
                    let Some(right) = self.read_field("right operand")? else {
                        break;
                    };
                    let Some(selection) = self.read_selection()? else {
                        break;
                    };
                    (line, selection, right)
                }
            };

            self.calculate(&left, &right, &selection)?;
        }

        tracing::debug!(entries = self.session.history().len(), "session ended");
        Ok(())
    }

    /// The "Calculate" action.
    fn calculate(&mut self, left: &str, right: &str, selection: &str) -> Result<()> {
        let item = CalculatorItem::from_outcome(
            self.session.calculate(left, right, selection).as_deref(),
        );

        if item.is_fatal {
            bail!("{}", item.display_result);
        }

        if item.is_error {
            self.render_alert(&item.display_result)?;
            return Ok(());
        }

        writeln!(self.output, "{}", ListItem::from(item).text())?;
        if self.config.history.echo {
            self.render_history()?;
        }
        Ok(())
    }

    /// Read the operator pick list selection.
    ///
    /// A number picks from the list, other text is matched against the
    /// labels. Unrecognized text asks again, so only known labels ever reach
    /// the session.
    fn read_selection(&mut self) -> Result<Option<String>> {
        loop {
            let Some(line) = self.read_field("operator")? else {
                return Ok(None);
            };

            let picked = line.trim();
            if !picked.is_empty() && picked.bytes().all(|b| b.is_ascii_digit()) {
                let op = picked
                    .parse::<usize>()
                    .ok()
                    .and_then(|number| number.checked_sub(1))
                    .and_then(Operator::from_index);
                match op {
                    Some(op) => return Ok(Some(op.label().to_string())),
                    None => {
                        writeln!(
                            self.output,
                            "No operator {}, pick 1-{}.",
                            picked,
                            Operator::CHOICES.len()
                        )?;
                        continue;
                    }
                }
            }

            match Operator::from_selection(&line) {
                Ok(op) => return Ok(Some(op.label().to_string())),
                Err(SelectionError::Missing) => return Ok(Some(String::new())),
                Err(SelectionError::Unknown(_)) => {
                    writeln!(
                        self.output,
                        "Unknown operator {:?}, pick 1-{} or type a symbol.",
                        line.trim(),
                        Operator::CHOICES.len()
                    )?;
                }
            }
        }
    }

    /// Prompt for one field. Returns `None` at end of input.
    fn read_field(&mut self, name: &str) -> Result<Option<String>> {
        write!(self.output, "{}{}", name, self.config.display.prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn render_alert(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "[{}] {}", self.config.display.alert_title, message)?;
        Ok(())
    }

    fn render_operators(&mut self) -> Result<()> {
        writeln!(self.output, "Operators:")?;
        for (index, op) in Operator::CHOICES.iter().enumerate() {
            writeln!(self.output, "  {}. {}", index + 1, op.label())?;
        }
        Ok(())
    }

    /// Pull newly recorded expressions into the shown history list.
    fn refresh_history(&mut self) {
        for expression in self.recorded.try_iter() {
            let row = HistoryItem::new(self.history_rows.len(), &expression);
            self.history_rows.push(row.into());
        }
    }

    fn render_history(&mut self) -> Result<()> {
        self.refresh_history();
        let items = &self.history_rows;
        if items.is_empty() {
            writeln!(self.output, "History is empty.")?;
            return Ok(());
        }

        writeln!(self.output, "{}:", items[0].section_name())?;
        for item in items {
            if let ListItem::History(entry) = item {
                writeln!(self.output, "  {}. {}", entry.row, entry.expression)?;
            }
        }
        Ok(())
    }
}
