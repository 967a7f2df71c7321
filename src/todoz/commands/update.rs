use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Title, TodoId};
use crate::store::TodoStore;

/// Replaces the title, leaving the completion flag untouched.
pub fn run<S: TodoStore>(store: &mut S, id: TodoId, title: Title) -> Result<CmdResult> {
    let mut todo = store.get_todo(id)?;
    todo.update(title);
    store.save_todo(&todo)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Todo updated"));
    Ok(result.with_affected_todos(vec![todo]))
}
