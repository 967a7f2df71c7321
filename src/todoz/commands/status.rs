use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TodoId;
use crate::store::TodoStore;

pub fn complete<S: TodoStore>(store: &mut S, id: TodoId) -> Result<CmdResult> {
    set_completed(store, id, true)
}

pub fn uncomplete<S: TodoStore>(store: &mut S, id: TodoId) -> Result<CmdResult> {
    set_completed(store, id, false)
}

fn set_completed<S: TodoStore>(store: &mut S, id: TodoId, completed: bool) -> Result<CmdResult> {
    let mut todo = store.get_todo(id)?;
    if completed {
        todo.complete();
    } else {
        todo.uncomplete();
    }
    store.save_todo(&todo)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Todo updated"));
    Ok(result.with_affected_todos(vec![todo]))
}
