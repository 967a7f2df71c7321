use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TodoId;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(store: &mut S, id: TodoId) -> Result<CmdResult> {
    let todo = store.get_todo(id)?;
    store.delete_todo(todo.id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Todo deleted"));
    Ok(result.with_affected_todos(vec![todo]))
}
