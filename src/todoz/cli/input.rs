use std::io::{self, BufRead};
use todoz::model::Title;

/// Reads one line and returns its first whitespace-delimited token, or `""`
/// for a blank line. `None` at end of input.
pub fn read_token<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    Ok(read_raw_line(input)?.map(|line| {
        String::from_utf8_lossy(&line)
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string()
    }))
}

/// Reads a full line without its line terminator, keeping the bytes as typed.
/// `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<Title>> {
    Ok(read_raw_line(input)?.map(|mut line| {
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        Title::from(line)
    }))
}

fn read_raw_line<R: BufRead>(input: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_first_word_of_line() {
        let mut input = "  12  junk\n7\n".as_bytes();
        assert_eq!(read_token(&mut input).unwrap().as_deref(), Some("12"));
        assert_eq!(read_token(&mut input).unwrap().as_deref(), Some("7"));
        assert_eq!(read_token(&mut input).unwrap(), None);
    }

    #[test]
    fn blank_line_is_empty_token() {
        let mut input = "\n".as_bytes();
        assert_eq!(read_token(&mut input).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn line_keeps_inner_whitespace() {
        let mut input = "  Buy\tmilk  \r\nnext".as_bytes();
        assert_eq!(read_line(&mut input).unwrap().unwrap(), "  Buy\tmilk  ");
        assert_eq!(read_line(&mut input).unwrap().unwrap(), "next");
        assert!(read_line(&mut input).unwrap().is_none());
    }

    #[test]
    fn empty_line_is_empty_title() {
        let mut input = "\n".as_bytes();
        assert_eq!(read_line(&mut input).unwrap().unwrap(), "");
    }

    #[test]
    fn line_keeps_non_utf8_bytes() {
        let mut input: &[u8] = b"caf\xe9 au lait\n";
        let title = read_line(&mut input).unwrap().unwrap();
        assert_eq!(title.as_bytes(), b"caf\xe9 au lait");
    }

    #[test]
    fn token_survives_non_utf8_junk() {
        let mut input: &[u8] = b"3 \xff\n";
        assert_eq!(read_token(&mut input).unwrap().as_deref(), Some("3"));
    }
}
