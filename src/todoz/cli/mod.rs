//! # Interactive Session
//!
//! This is **one possible UI client** for todoz, not the application itself.
//! It is the only place that knows about stdin/stdout and about which errors
//! end the process.
//!
//! ## Loop
//!
//! Banner and menu once, then forever: prompt `> `, read one token, parse it
//! as an action code, dispatch. A bad action token prints an error and
//! re-prompts. Commands that need a todo ask `Select todo: ` once; a bad id
//! abandons that command instead of asking again.
//!
//! ## Error tiers
//!
//! Recoverable errors (`Todo not found`, a failed delete) are printed and the
//! loop continues. Fatal ones ([`todoz::error::TodoError::is_fatal`]) are
//! returned from [`Session::run`], and `main` exits non-zero.
//!
//! The session ends on action `0` or at end of input.
//!
//! ## Module Structure
//!
//! - `action`: Action codes and menu labels
//! - `args`: clap definition (no options beyond help/version)
//! - `input`: Token and line readers
//! - `print`: Output formatting

mod action;
pub mod args;
mod input;
mod print;

use action::Action;
use anyhow::Result;
use print::{print_banner, print_error, print_help, print_listing, print_messages, print_title};
use std::io::{self, BufRead, Write};
use todoz::api::{CmdResult, TodoApi};
use todoz::config::TodoConfig;
use todoz::model::TodoId;
use todoz::query::ListFilter;
use todoz::store::TodoStore;
use tracing::debug;

pub fn run() -> Result<()> {
    let config = TodoConfig::from_current_dir()?;
    debug!(dir = %config.todos_dir.display(), "using todos directory");
    let api = TodoApi::open(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(api, stdin.lock(), stdout.lock()).run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

enum Selection {
    Todo(TodoId),
    Invalid,
    EndOfInput,
}

pub struct Session<S: TodoStore, R: BufRead, W: Write> {
    api: TodoApi<S>,
    input: R,
    out: W,
}

impl<S: TodoStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: TodoApi<S>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    pub fn run(&mut self) -> Result<()> {
        print_banner(&mut self.out)?;
        print_help(&mut self.out)?;

        loop {
            self.prompt("> ")?;
            let Some(token) = input::read_token(&mut self.input)? else {
                debug!("end of input");
                return Ok(());
            };

            let code = match token.parse::<u64>() {
                Ok(code) => code,
                Err(e) => {
                    print_error(&mut self.out, &format!("Error reading action: {}", e))?;
                    continue;
                }
            };

            let Some(action) = Action::from_code(code) else {
                print_error(&mut self.out, "Unknown action")?;
                continue;
            };

            if self.dispatch(action)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<Flow> {
        debug!(?action, "dispatching");
        match action {
            Action::ListAll => self.list(ListFilter::ALL),
            Action::Create => self.create(),
            Action::Complete => self.change_state(true),
            Action::Uncomplete => self.change_state(false),
            Action::Delete => self.delete(),
            Action::ListUncompleted => self.list(ListFilter::UNCOMPLETED),
            Action::ListCompleted => self.list(ListFilter::COMPLETED),
            Action::Edit => self.edit(),
            Action::Help => {
                print_help(&mut self.out)?;
                Ok(Flow::Continue)
            }
            Action::Exit => {
                writeln!(self.out, "Goodbye!")?;
                self.out.flush()?;
                Ok(Flow::Exit)
            }
        }
    }

    fn list(&mut self, filter: ListFilter) -> Result<Flow> {
        let result = self.api.list_todos(filter);
        if let Some(result) = self.recover(result)? {
            if let Some(listing) = &result.listing {
                print_listing(&mut self.out, listing)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn create(&mut self) -> Result<Flow> {
        self.prompt("title: ")?;
        let Some(title) = input::read_line(&mut self.input)? else {
            return Ok(Flow::Exit);
        };

        let result = self.api.create_todo(title);
        self.report(result)?;
        Ok(Flow::Continue)
    }

    fn change_state(&mut self, completed: bool) -> Result<Flow> {
        let id = match self.select_todo()? {
            Selection::Todo(id) => id,
            Selection::Invalid => return Ok(Flow::Continue),
            Selection::EndOfInput => return Ok(Flow::Exit),
        };

        let result = if completed {
            self.api.complete_todo(id)
        } else {
            self.api.uncomplete_todo(id)
        };
        self.report(result)?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let id = match self.select_todo()? {
            Selection::Todo(id) => id,
            Selection::Invalid => return Ok(Flow::Continue),
            Selection::EndOfInput => return Ok(Flow::Exit),
        };

        let result = self.api.delete_todo(id);
        self.report(result)?;
        Ok(Flow::Continue)
    }

    fn edit(&mut self) -> Result<Flow> {
        let id = match self.select_todo()? {
            Selection::Todo(id) => id,
            Selection::Invalid => return Ok(Flow::Continue),
            Selection::EndOfInput => return Ok(Flow::Exit),
        };

        let result = self.api.get_todo(id);
        let Some(current) = self.recover(result)? else {
            return Ok(Flow::Continue);
        };
        let Some(todo) = current.affected_todos.first() else {
            return Ok(Flow::Continue);
        };

        // No line break between the old title and the next prompt.
        write!(self.out, "old title: ")?;
        print_title(&mut self.out, &todo.title)?;
        self.prompt("new title: ")?;
        let Some(title) = input::read_line(&mut self.input)? else {
            return Ok(Flow::Exit);
        };

        let result = self.api.update_title(id, title);
        self.report(result)?;
        Ok(Flow::Continue)
    }

    /// Asks for an id once. A token that is not a non-negative integer is
    /// reported and the caller abandons its command.
    fn select_todo(&mut self) -> Result<Selection> {
        self.prompt("Select todo: ")?;
        let Some(token) = input::read_token(&mut self.input)? else {
            return Ok(Selection::EndOfInput);
        };

        match token.parse::<TodoId>() {
            Ok(id) => Ok(Selection::Todo(id)),
            Err(e) => {
                print_error(&mut self.out, &format!("Error reading id: {}", e))?;
                Ok(Selection::Invalid)
            }
        }
    }

    fn report(&mut self, result: todoz::error::Result<CmdResult>) -> Result<()> {
        if let Some(result) = self.recover(result)? {
            print_messages(&mut self.out, &result.messages)?;
        }
        Ok(())
    }

    /// Prints a recoverable error and yields `None`; fatal errors propagate.
    fn recover(&mut self, result: todoz::error::Result<CmdResult>) -> Result<Option<CmdResult>> {
        match result {
            Ok(result) => Ok(Some(result)),
            Err(e) if e.is_fatal() => Err(e.into()),
            Err(e) => {
                debug!(error = %e, "command abandoned");
                print_error(&mut self.out, &e.to_string())?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }
}
