use super::action::Action;
use colored::Colorize;
use std::io::{self, Write};
use todoz::api::{CmdMessage, Listing, MessageLevel};
use todoz::model::{Title, Todo};

pub(super) fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Simple CLI TODO app")
}

pub(super) fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Select action:")?;
    for action in Action::MENU {
        writeln!(out, "{}: {}", action.code(), action.label())?;
    }
    Ok(())
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Title bytes go out exactly as stored, without any re-encoding.
pub(super) fn print_title<W: Write>(out: &mut W, title: &Title) -> io::Result<()> {
    out.write_all(title.as_bytes())
}

pub(super) fn print_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(message)])
}

/// Uncompleted block first, a blank line between blocks when both are shown.
pub(super) fn print_listing<W: Write>(out: &mut W, listing: &Listing) -> io::Result<()> {
    let filter = listing.filter;
    if filter.uncompleted {
        print_todos(out, &listing.partition.uncompleted, "uncompleted")?;
    }
    if filter.uncompleted && filter.completed {
        writeln!(out)?;
    }
    if filter.completed {
        print_todos(out, &listing.partition.completed, "completed")?;
    }
    Ok(())
}

fn print_todos<W: Write>(out: &mut W, todos: &[Todo], label: &str) -> io::Result<()> {
    writeln!(out, "{} {} todos:", todos.len(), label)?;
    for todo in todos {
        write!(out, "{}\t", todo.id)?;
        print_title(out, &todo.title)?;
        writeln!(out)?;
    }
    Ok(())
}
