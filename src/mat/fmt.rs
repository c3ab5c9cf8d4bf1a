use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::ParseMatrixError;

use super::Matrix2x2;

/// Two pipe-framed rows, elements fixed to 2 decimal places.
impl fmt::Display for Matrix2x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|{:<8.2} {:>8.2}|", self.a(), self.b())?;
        write!(f, "|{:<8.2} {:>8.2}|", self.c(), self.d())
    }
}

fn parse_literal(token: &str) -> Result<f64, ParseMatrixError> {
    token.parse().map_err(|source| ParseMatrixError::InvalidLiteral {
        text: token.to_owned(),
        source,
    })
}

/// Parse four whitespace-separated elements `a b c d`, rejecting
/// anything left over after the fourth.
impl FromStr for Matrix2x2 {
    type Err = ParseMatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let mut values = [0.0; 4];
        for (found, slot) in values.iter_mut().enumerate() {
            let token = tokens
                .next()
                .ok_or(ParseMatrixError::UnexpectedEof { found })?;
            *slot = parse_literal(token)?;
        }
        if tokens.next().is_some() {
            return Err(ParseMatrixError::TrailingInput);
        }
        Ok(Matrix2x2(values))
    }
}

impl Matrix2x2 {
    /// Read four whitespace-separated elements `a b c d` off `reader`,
    /// consuming nothing past the whitespace that terminates the fourth.
    ///
    /// Malformed or missing elements and I/O failures propagate; there is no
    /// retry. Prompting is the caller's business.
    pub fn read_from<R: BufRead>(mut reader: R) -> Result<Matrix2x2, ParseMatrixError> {
        let mut values = [0.0; 4];
        for (found, slot) in values.iter_mut().enumerate() {
            let token =
                next_token(&mut reader)?.ok_or(ParseMatrixError::UnexpectedEof { found })?;
            *slot = parse_literal(&token)?;
        }
        Ok(Matrix2x2(values))
    }
}

/// Scan the next whitespace-delimited token off `reader`, or `None` at EOF.
fn next_token<R: BufRead>(reader: &mut R) -> Result<Option<String>, ParseMatrixError> {
    let mut token = String::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            // EOF
            break;
        }
        let mut used = 0;
        let mut done = false;
        for &byte in buf {
            used += 1;
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(byte as char);
            }
        }
        reader.consume(used);
        if done {
            break;
        }
    }
    Ok(if token.is_empty() { None } else { Some(token) })
}
