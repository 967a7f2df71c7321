use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::model::{Title, Todo, TodoId};
use crate::store::TodoStore;
use rand::Rng;
use tracing::debug;

/// Creates an uncompleted todo under a random id in `0..id_range` and saves it
/// right away. An existing todo with the same id is overwritten. An empty range
/// is a configuration error.
pub fn run<S: TodoStore, R: Rng + ?Sized>(
    store: &mut S,
    rng: &mut R,
    id_range: u64,
    title: Title,
) -> Result<CmdResult> {
    if id_range == 0 {
        return Err(TodoError::EmptyIdRange);
    }
    let id = TodoId(rng.random_range(0..id_range));
    let todo = Todo::new(id, title);
    store.save_todo(&todo)?;
    debug!(%id, "created todo");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Saved with id: {}", id)));
    Ok(result.with_affected_todos(vec![todo]))
}
