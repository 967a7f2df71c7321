use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::TodoId;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(store: &S, id: TodoId) -> Result<CmdResult> {
    let todo = store.get_todo(id)?;
    Ok(CmdResult::default().with_affected_todos(vec![todo]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_the_requested_todo() {
        let fixture = StoreFixture::new().with_todo(4, "four");
        let result = run(&fixture.store, TodoId(4)).unwrap();
        assert_eq!(result.affected_todos[0].title, "four");
    }

    #[test]
    fn missing_todo_is_not_found() {
        let fixture = StoreFixture::new();
        assert!(matches!(
            run(&fixture.store, TodoId(999999)),
            Err(TodoError::NotFound(TodoId(999999)))
        ));
    }
}
