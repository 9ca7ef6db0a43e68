use std::borrow::Cow;

/// Splits raw file content into lines.
///
/// `\n` terminates a line and a `\r` right before it is dropped. Content after
/// the last terminator is yielded as a final line; the scanner stops at end of
/// input without requiring a trailing newline.
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    remaining: &'a [u8],
}

impl<'a> LineScanner<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { remaining: input }
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        let (mut line, rest) = match self.remaining.iter().position(|&b| b == b'\n') {
            Some(index) => (&self.remaining[..index], &self.remaining[index + 1..]),
            None => (self.remaining, &self.remaining[self.remaining.len()..]),
        };
        self.remaining = rest;

        if let [head @ .., b'\r'] = line {
            line = head;
        }

        Some(String::from_utf8_lossy(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &str) -> Vec<String> {
        LineScanner::new(input.as_bytes())
            .map(|l| l.into_owned())
            .collect()
    }

    #[test]
    fn splits_on_lf_and_crlf() {
        assert_eq!(lines("A=1\r\nB=2\nC=3\n"), vec!["A=1", "B=2", "C=3"]);
    }

    #[test]
    fn keeps_trailing_line_without_terminator() {
        assert_eq!(lines("A=1\nB=2"), vec!["A=1", "B=2"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(lines("").is_empty());
    }

    #[test]
    fn blank_lines_are_yielded() {
        assert_eq!(lines("\n\r\nA=1\n"), vec!["", "", "A=1"]);
    }

    #[test]
    fn carriage_return_inside_line_is_kept() {
        assert_eq!(lines("A=x\ry\n"), vec!["A=x\ry"]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let scanned: Vec<String> = LineScanner::new(b"A=\xff\n")
            .map(|l| l.into_owned())
            .collect();
        assert_eq!(scanned, vec!["A=\u{fffd}"]);
    }
}
