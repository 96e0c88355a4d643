//! Line-oriented planner shell.
//!
//! Mirrors the planner form: view the list, add or delete items and run a
//! knapsack. A rejected command is reported and the session carries on with
//! the list untouched.

use anyhow::Result;
use planner_algorithms::solve_input;
use planner_structs::{ItemRepository, PlannerError, SolveMode};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const HELP: &str = "\
Commands:
  view                          list items with their positions
  add <name> <weight> <value>   add an item (weight and value are whole numbers)
  delete <index>                delete the item at <index>
  solve <capacity> [01|fractional]
                                run the 0/1 or fractional knapsack
  help                          show this message
  quit                          leave the session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

pub struct Session {
    repository: ItemRepository,
    max_capacity: u32,
    default_mode: SolveMode,
}

impl Session {
    pub fn new(repository: ItemRepository, max_capacity: u32, default_mode: SolveMode) -> Self {
        Self {
            repository,
            max_capacity,
            default_mode,
        }
    }

    pub fn repository(&self) -> &ItemRepository {
        &self.repository
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "Charity Budget Planner. Type 'help' for commands.")?;
        write!(out, "> ")?;
        out.flush()?;
        for line in input.lines() {
            if self.execute(&line?, &mut out)? == Outcome::Quit {
                return Ok(());
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Runs one command line. Only IO failures are returned as errors.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Outcome> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = tokens.split_first() else {
            return Ok(Outcome::Continue);
        };
        debug!(command, ?args, "session command");

        let result = match command.to_ascii_lowercase().as_str() {
            "view" | "list" => {
                self.view(out)?;
                Ok(())
            }
            "add" => self.add(args, out)?,
            "delete" | "del" => self.delete(args, out)?,
            "solve" => self.solve(args, out)?,
            "help" => {
                writeln!(out, "{}", HELP)?;
                Ok(())
            }
            "quit" | "exit" => return Ok(Outcome::Quit),
            _ => {
                writeln!(
                    out,
                    "Unknown command '{}'. Type 'help' for commands.",
                    command
                )?;
                Ok(())
            }
        };

        if let Err(e) = result {
            warn!(error = %e, "command rejected");
            writeln!(out, "{}: {}", error_title(&e), e)?;
        }
        Ok(Outcome::Continue)
    }

    fn view<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.repository.is_empty() {
            writeln!(out, "No items.")?;
        }
        for (index, item) in self.repository.list().iter().enumerate() {
            writeln!(out, "{}: {}", index, item)?;
        }
        Ok(())
    }

    fn add<W: Write>(&mut self, args: &[&str], out: &mut W) -> Result<Result<(), PlannerError>> {
        if args.len() < 3 {
            writeln!(out, "Usage: add <name> <weight> <value>")?;
            return Ok(Ok(()));
        }
        let (name, numbers) = args.split_at(args.len() - 2);
        match self
            .repository
            .add_from_input(&name.join(" "), numbers[0], numbers[1])
        {
            Ok(item) => {
                writeln!(out, "Added {}", item)?;
                Ok(Ok(()))
            }
            Err(e) => Ok(Err(e)),
        }
    }

    fn delete<W: Write>(
        &mut self,
        args: &[&str],
        out: &mut W,
    ) -> Result<Result<(), PlannerError>> {
        let selected = match args.first() {
            Some(text) => match text.parse::<usize>() {
                Ok(index) => Some(index),
                Err(_) => {
                    return Ok(Err(PlannerError::InvalidNumericInput {
                        field: "index",
                        input: text.to_string(),
                    }))
                }
            },
            None => None,
        };
        match self.repository.delete_selected(selected) {
            Ok(item) => {
                writeln!(out, "Deleted {}", item)?;
                Ok(Ok(()))
            }
            Err(e) => Ok(Err(e)),
        }
    }

    fn solve<W: Write>(&self, args: &[&str], out: &mut W) -> Result<Result<(), PlannerError>> {
        let Some(capacity) = args.first() else {
            writeln!(out, "Usage: solve <capacity> [01|fractional]")?;
            return Ok(Ok(()));
        };
        let mode = match args.get(1) {
            Some(mode) => mode.to_string(),
            None => self.default_mode.to_string(),
        };
        match solve_input(self.repository.list(), capacity, &mode, self.max_capacity) {
            Ok(selection) => {
                write!(out, "{}", selection)?;
                Ok(Ok(()))
            }
            Err(e) => Ok(Err(e)),
        }
    }
}

fn error_title(error: &PlannerError) -> &'static str {
    match error {
        PlannerError::InvalidNumericInput { .. } => "Input Error",
        PlannerError::Selection { .. } | PlannerError::NoSelection => "Selection Error",
        PlannerError::InvalidMode { .. } => "Invalid Choice",
        PlannerError::NegativeCapacity { .. } | PlannerError::CapacityTooLarge { .. } => {
            "Capacity Error"
        }
        PlannerError::InvalidConfig { .. } => "Config Error",
    }
}
