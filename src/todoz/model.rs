use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a todo. Its decimal form is also the name of the backing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(TodoId)
    }
}

/// Title bytes exactly as stored. Nothing requires them to be UTF-8, and a
/// record rewritten after a toggle must keep them untouched.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Title(Vec<u8>);

impl Title {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Title {
    fn from(bytes: Vec<u8>) -> Self {
        Title(bytes)
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Title(text.into_bytes())
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Title(text.as_bytes().to_vec())
    }
}

/// Lossy: invalid UTF-8 shows as U+FFFD.
impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}

impl PartialEq<str> for Title {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for Title {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<String> for Title {
    fn eq(&self, other: &String) -> bool {
        self.0 == other.as_bytes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub completed: bool,
    pub title: Title,
}

impl Todo {
    /// A fresh, uncompleted todo.
    pub fn new(id: TodoId, title: impl Into<Title>) -> Self {
        Self {
            id,
            completed: false,
            title: title.into(),
        }
    }

    pub fn complete(&mut self) {
        self.completed = true;
    }

    pub fn uncomplete(&mut self) {
        self.completed = false;
    }

    pub fn update(&mut self, title: impl Into<Title>) {
        self.title = title.into();
    }
}
