/// The numbered menu. Codes are fixed; so are the labels, including the two
/// listing labels that name the opposite bucket of what the action shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListAll,
    Create,
    Complete,
    Uncomplete,
    Delete,
    ListUncompleted,
    ListCompleted,
    Edit,
    Help,
    Exit,
}

impl Action {
    /// Menu order.
    pub const MENU: [Action; 10] = [
        Action::ListAll,
        Action::Create,
        Action::Complete,
        Action::Uncomplete,
        Action::Delete,
        Action::ListUncompleted,
        Action::ListCompleted,
        Action::Edit,
        Action::Help,
        Action::Exit,
    ];

    pub fn from_code(code: u64) -> Option<Self> {
        Self::MENU.into_iter().find(|a| a.code() == code)
    }

    pub fn code(self) -> u64 {
        match self {
            Action::ListAll => 1,
            Action::Create => 2,
            Action::Complete => 3,
            Action::Uncomplete => 4,
            Action::Delete => 5,
            Action::ListUncompleted => 6,
            Action::ListCompleted => 7,
            Action::Edit => 8,
            Action::Help => 9,
            Action::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::ListAll => "List all TODOs",
            Action::Create => "Add new TODO",
            Action::Complete => "Complete TODO",
            Action::Uncomplete => "Uncomplete TODO",
            Action::Delete => "Delete TODO",
            Action::ListUncompleted => "List completed TODOs",
            Action::ListCompleted => "List uncompleted TODOs",
            Action::Edit => "Edit TODO",
            Action::Help => "Show this help",
            Action::Exit => "Exit",
        }
    }
}
