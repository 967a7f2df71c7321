use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::{ListFilter, Listing};
use crate::store::TodoStore;

pub fn run<S: TodoStore>(store: &S, filter: ListFilter) -> Result<CmdResult> {
    let todos = store.list_todos()?;
    Ok(CmdResult::default().with_listing(Listing::new(filter, todos)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_completed_todo(1, "one")
            .with_todo(2, "two")
            .with_completed_todo(3, "three")
    }

    #[test]
    fn partitions_every_todo() {
        let result = run(&fixture().store, ListFilter::ALL).unwrap();
        let listing = result.listing.unwrap();

        let completed: Vec<_> = listing.partition.completed.iter().map(|t| t.id.0).collect();
        let uncompleted: Vec<_> = listing.partition.uncompleted.iter().map(|t| t.id.0).collect();
        assert_eq!(completed, vec![1, 3]);
        assert_eq!(uncompleted, vec![2]);
        assert_eq!(listing.filter, ListFilter::ALL);
    }

    #[test]
    fn carries_the_requested_filter() {
        let result = run(&fixture().store, ListFilter::COMPLETED).unwrap();
        assert_eq!(result.listing.unwrap().filter, ListFilter::COMPLETED);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let result = run(&StoreFixture::new().store, ListFilter::ALL).unwrap();
        let listing = result.listing.unwrap();
        assert!(listing.partition.completed.is_empty());
        assert!(listing.partition.uncompleted.is_empty());
    }
}
