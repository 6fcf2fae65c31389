//! Input helpers for the interactive session.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Trailing newline characters are removed; other whitespace is kept so that a
/// single typed space still reads as the space key. Returns `None` on EOF or
/// read errors.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use classwar_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {:?}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stdin_line_valid_input() {
        let mut cursor = Cursor::new(b"restart\n");
        assert_eq!(read_stdin_line(&mut cursor), Some("restart".to_string()));
    }

    #[test]
    fn test_read_stdin_line_keeps_single_space() {
        let mut cursor = Cursor::new(b" \r\n");
        assert_eq!(read_stdin_line(&mut cursor), Some(" ".to_string()));
    }

    #[test]
    fn test_read_stdin_line_empty_line() {
        let mut cursor = Cursor::new(b"\n");
        assert_eq!(read_stdin_line(&mut cursor), Some(String::new()));
    }

    #[test]
    fn test_read_stdin_line_eof() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(read_stdin_line(&mut cursor), None);
    }
}
