//! Line-oriented parser for the `.properties` text format.
//!
//! # Format
//! - Natural lines end at `\n`, `\r` or `\r\n`
//! - A line ending in an odd number of backslashes continues on the next
//!   natural line; the continuation's leading whitespace is dropped
//! - `#` or `!` as the first non-blank char starts a comment line
//! - The key ends at the first unescaped `=`, `:` or whitespace
//! - Escapes: `\t`, `\n`, `\r`, `\f`, `\uXXXX`; any other `\c` yields `c`

use std::io::{ErrorKind, Read};
use crate::properties::{Properties, PropertiesError};

const READ_CHUNK: usize = 8192;

/// Read an ISO-8859-1 byte stream into `props`.
pub fn load_into<R: Read>(props: &mut Properties, reader: R) -> Result<(), PropertiesError> {
    load_chars(props, Latin1Chars::new(reader))
}

/// Read a char stream into `props`, inserting each entry as soon as its
/// logical line is complete.
pub fn load_chars<I>(props: &mut Properties, chars: I) -> Result<(), PropertiesError>
where
    I: Iterator<Item = std::io::Result<char>>,
{
    let mut lines = LineReader::new(chars);
    let mut line = Vec::new();
    let mut line_no = 0;

    while lines.read_line(&mut line)? {
        line_no += 1;
        let (key, value) = split_entry(&line);
        let key = unescape(key).ok_or(PropertiesError::MalformedUnicode { line: line_no })?;
        let value = unescape(value).ok_or(PropertiesError::MalformedUnicode { line: line_no })?;
        props.insert(key, value);
    }
    Ok(())
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

/// Split a logical line into its raw (still escaped) key and value.
fn split_entry(line: &[char]) -> (&[char], &[char]) {
    let mut key_len = 0;
    let mut value_start = line.len();
    let mut has_sep = false;
    let mut escaped = false;

    while key_len < line.len() {
        let c = line[key_len];
        if !escaped && (c == '=' || c == ':') {
            value_start = key_len + 1;
            has_sep = true;
            break;
        }
        if !escaped && is_blank(c) {
            value_start = key_len + 1;
            break;
        }
        escaped = c == '\\' && !escaped;
        key_len += 1;
    }

    while value_start < line.len() {
        let c = line[value_start];
        if !is_blank(c) {
            if !has_sep && (c == '=' || c == ':') {
                has_sep = true;
            } else {
                break;
            }
        }
        value_start += 1;
    }

    (&line[..key_len], &line[value_start..])
}

/// Resolve escapes. Returns `None` on a malformed `\uXXXX`.
fn unescape(raw: &[char]) -> Option<String> {
    let mut units: Vec<u16> = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        let c = raw[i];
        i += 1;
        if c != '\\' {
            let mut buf = [0u16; 2];
            units.extend_from_slice(c.encode_utf16(&mut buf));
            continue;
        }
        let Some(&next) = raw.get(i) else {
            break;
        };
        i += 1;
        let decoded = match next {
            'u' => {
                let digits = raw.get(i..i + 4)?;
                i += 4;
                let mut unit = 0u16;
                for d in digits {
                    unit = (unit << 4) | d.to_digit(16)? as u16;
                }
                units.push(unit);
                continue;
            }
            't' => '\t',
            'r' => '\r',
            'n' => '\n',
            'f' => '\u{c}',
            other => other,
        };
        let mut buf = [0u16; 2];
        units.extend_from_slice(decoded.encode_utf16(&mut buf));
    }

    // \u escapes may encode surrogate pairs; unpaired halves become U+FFFD.
    Some(String::from_utf16_lossy(&units))
}

/// Assembles logical lines, dropping comments, blank lines and
/// continuation markers.
struct LineReader<I> {
    chars: I,
}

impl<I> LineReader<I>
where
    I: Iterator<Item = std::io::Result<char>>,
{
    fn new(chars: I) -> Self {
        Self { chars }
    }

    /// Fill `out` with the next logical line. Returns `false` at end of input.
    fn read_line(&mut self, out: &mut Vec<char>) -> std::io::Result<bool> {
        out.clear();
        let mut skip_blank = true;
        let mut comment = false;
        let mut new_line = true;
        let mut continued = false;
        let mut joined = false;
        let mut backslash = false;
        let mut skip_lf = false;

        loop {
            let c = match self.chars.next() {
                Some(c) => c?,
                None => {
                    if comment || (out.is_empty() && !joined) {
                        return Ok(false);
                    }
                    if backslash {
                        out.pop();
                    }
                    return Ok(true);
                }
            };

            if skip_lf {
                skip_lf = false;
                if c == '\n' {
                    continue;
                }
            }
            if skip_blank {
                if is_blank(c) {
                    continue;
                }
                if !continued && (c == '\r' || c == '\n') {
                    continue;
                }
                skip_blank = false;
                continued = false;
            }
            if new_line {
                new_line = false;
                if c == '#' || c == '!' {
                    comment = true;
                    continue;
                }
            }

            if c != '\n' && c != '\r' {
                if comment {
                    continue;
                }
                out.push(c);
                backslash = c == '\\' && !backslash;
                continue;
            }

            if comment || (out.is_empty() && !joined) {
                comment = false;
                new_line = true;
                skip_blank = true;
                out.clear();
                continue;
            }
            if backslash {
                out.pop();
                backslash = false;
                skip_blank = true;
                continued = true;
                joined = true;
                if c == '\r' {
                    skip_lf = true;
                }
                continue;
            }
            return Ok(true);
        }
    }
}

/// Decodes a byte stream one byte per char (ISO-8859-1).
struct Latin1Chars<R> {
    reader: R,
    buf: Vec<u8>,
    pos: usize,
    len: usize,
}

impl<R: Read> Latin1Chars<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: vec![0; READ_CHUNK],
            pos: 0,
            len: 0,
        }
    }
}

impl<R: Read> Iterator for Latin1Chars<R> {
    type Item = std::io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos >= self.len {
            match self.reader.read(&mut self.buf) {
                Ok(0) => return None,
                Ok(n) => {
                    self.pos = 0;
                    self.len = n;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        let b = self.buf[self.pos];
        self.pos += 1;
        Some(Ok(char::from(b)))
    }
}
