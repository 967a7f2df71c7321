//! Splitting a loaded set of todos into completed and uncompleted buckets.
//!
//! Rendering the buckets is a presentation concern and lives in the CLI; this
//! module only decides what goes in each bucket and which buckets are shown.

use crate::model::Todo;

/// Which buckets a listing includes. Both `false` is valid and shows nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFilter {
    pub uncompleted: bool,
    pub completed: bool,
}

impl ListFilter {
    pub const ALL: ListFilter = ListFilter {
        uncompleted: true,
        completed: true,
    };
    pub const UNCOMPLETED: ListFilter = ListFilter {
        uncompleted: true,
        completed: false,
    };
    pub const COMPLETED: ListFilter = ListFilter {
        uncompleted: false,
        completed: true,
    };
    pub const NONE: ListFilter = ListFilter {
        uncompleted: false,
        completed: false,
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub completed: Vec<Todo>,
    pub uncompleted: Vec<Todo>,
}

/// Single pass; each bucket keeps the input order.
pub fn partition(todos: Vec<Todo>) -> Partition {
    let mut result = Partition::default();
    for todo in todos {
        if todo.completed {
            result.completed.push(todo);
        } else {
            result.uncompleted.push(todo);
        }
    }
    result
}

/// A partitioned listing together with the buckets that were asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub filter: ListFilter,
    pub partition: Partition,
}

impl Listing {
    pub fn new(filter: ListFilter, todos: Vec<Todo>) -> Self {
        Self {
            filter,
            partition: partition(todos),
        }
    }
}
