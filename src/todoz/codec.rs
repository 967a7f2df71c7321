//! # Storage Codec
//!
//! Byte layout of a single todo file:
//!
//! ```text
//! ┌──────┬──────────────────────────────┐
//! │ flag │ title bytes (no length, no   │
//! │ 1 B  │ terminator, runs to EOF)     │
//! └──────┴──────────────────────────────┘
//! ```
//!
//! Only bit 0 of the flag byte carries meaning. Writers emit `0x01` or `0x00`;
//! readers mask, so any other bit set by a future writer is ignored.
//!
//! The id is not part of the payload. It lives in the file name and is attached
//! by the store after decoding.

use crate::model::{Title, Todo};
use std::io::{self, Read};

pub const COMPLETED_MASK: u8 = 0x01;

/// Titles are read back in chunks of this many bytes.
const CHUNK_SIZE: usize = 64;

/// The decoded contents of a todo file: everything except the id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoRecord {
    pub completed: bool,
    pub title: Title,
}

pub fn encode(todo: &Todo) -> Vec<u8> {
    let title = todo.title.as_bytes();
    let mut bytes = Vec::with_capacity(1 + title.len());
    bytes.push(if todo.completed { COMPLETED_MASK } else { 0x00 });
    bytes.extend_from_slice(title);
    bytes
}

/// Decode a todo file. An empty source decodes to an uncompleted todo with an
/// empty title.
pub fn decode<R: Read>(mut reader: R) -> io::Result<TodoRecord> {
    let mut flag = [0u8; 1];
    if read_chunk(&mut reader, &mut flag)? == 0 {
        return Ok(TodoRecord::default());
    }

    let mut title = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let n = read_chunk(&mut reader, &mut chunk)?;
        if n == 0 {
            break;
        }
        title.extend_from_slice(&chunk[..n]);
    }

    Ok(TodoRecord {
        completed: flag[0] & COMPLETED_MASK == COMPLETED_MASK,
        title: Title::from(title),
    })
}

fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}
