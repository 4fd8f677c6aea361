// File: crates/plot-core/src/textio.rs
// Summary: Plain-text series format: a count followed by that many whitespace-separated samples.

use std::io::{BufRead, Write};

use crate::error::{PlotError, Result};
use crate::series::SampleSeries;

/// Write `series` as its length on one line and the samples space-separated on the next.
pub fn write_series<W: Write>(writer: &mut W, series: &SampleSeries) -> Result<()> {
    writeln!(writer, "{}", series.len())?;
    let mut first = true;
    for v in series {
        if !first {
            write!(writer, " ")?;
        }
        write!(writer, "{v}")?;
        first = false;
    }
    writeln!(writer)?;
    Ok(())
}

/// Read one series written by [`write_series`]. Line breaks are not
/// significant and `NaN`/`inf` tokens are accepted. The reader is left just
/// after the last sample, so several series can share a stream or a line.
pub fn read_series<R: BufRead>(reader: &mut R) -> Result<SampleSeries> {
    let mut tokens = Tokens { reader, index: 0 };

    let count_tok = tokens.next()?.ok_or_else(|| parse_err(0, "missing sample count"))?;
    let count: usize = count_tok
        .parse()
        .map_err(|_| parse_err(0, format!("bad sample count {count_tok:?}")))?;

    let mut series = SampleSeries::with_capacity(count.min(MAX_PREALLOC));
    for _ in 0..count {
        let index = tokens.index;
        let tok = tokens
            .next()?
            .ok_or_else(|| parse_err(index, format!("expected {count} samples, found {}", series.len())))?;
        let v: f64 = tok.parse().map_err(|_| parse_err(index, format!("bad sample {tok:?}")))?;
        series.push(v);
    }
    Ok(series)
}

/// Upper bound on samples reserved from an untrusted count.
const MAX_PREALLOC: usize = 4096;

fn parse_err(index: usize, reason: impl Into<String>) -> PlotError {
    PlotError::Parse { index, reason: reason.into() }
}

/// Whitespace-separated tokens, consumed from the reader one at a time.
struct Tokens<'r, R> {
    reader: &'r mut R,
    index: usize,
}

impl<R: BufRead> Tokens<'_, R> {
    /// Next token, or `None` at end of input. Stops at the delimiter that
    /// ends the token without consuming it.
    fn next(&mut self) -> Result<Option<String>> {
        let mut tok = Vec::new();
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    if !tok.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    tok.push(b);
                }
                used += 1;
            }
            self.reader.consume(used);
            if done {
                break;
            }
        }
        if tok.is_empty() {
            return Ok(None);
        }
        let index = self.index;
        self.index += 1;
        String::from_utf8(tok).map(Some).map_err(|_| parse_err(index, "token is not UTF-8"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::NOPLOT;
    use std::io::Cursor;

    #[test]
    fn writes_count_then_values() {
        let mut out = Vec::new();
        write_series(&mut out, &SampleSeries::from_slice(&[1.5, -2.0, NOPLOT])).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "3\n1.5 -2 NaN\n");
    }

    #[test]
    fn reads_across_arbitrary_whitespace() {
        let mut input = Cursor::new("\n 4\n0.5\t1e3\n\n nan -inf 99\n");
        let s = read_series(&mut input).expect("read");
        assert_eq!(s.len(), 4);
        assert_eq!(s[0], 0.5);
        assert_eq!(s[1], 1000.0);
        assert!(s[2].is_nan());
        assert_eq!(s[3], f64::NEG_INFINITY);
    }

    #[test]
    fn reads_consecutive_series() {
        let mut buf = Vec::new();
        write_series(&mut buf, &SampleSeries::from_slice(&[1.0, 2.0])).expect("write");
        write_series(&mut buf, &SampleSeries::from_slice(&[3.0])).expect("write");
        let mut input = Cursor::new(buf);
        assert_eq!(read_series(&mut input).expect("first").as_slice(), &[1.0, 2.0]);
        assert_eq!(read_series(&mut input).expect("second").as_slice(), &[3.0]);
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = read_series(&mut Cursor::new("3\n1 two 3\n")).expect_err("bad token");
        assert!(matches!(err, PlotError::Parse { index: 2, .. }), "{err}");

        let err = read_series(&mut Cursor::new("5\n1 2\n")).expect_err("short");
        assert!(matches!(err, PlotError::Parse { index: 3, .. }), "{err}");

        let err = read_series(&mut Cursor::new("")).expect_err("empty");
        assert!(matches!(err, PlotError::Parse { index: 0, .. }), "{err}");

        assert!(read_series(&mut Cursor::new("-1\n")).is_err());
    }

    #[test]
    fn huge_count_is_an_error_not_an_allocation() {
        let err = read_series(&mut Cursor::new("18446744073709551615\n1 2\n")).expect_err("short");
        assert!(matches!(err, PlotError::Parse { .. }), "{err}");
    }

    #[test]
    fn series_sharing_a_line_are_read_in_turn() {
        let mut input = Cursor::new("2 1.0 2.0 1 3.0");
        assert_eq!(read_series(&mut input).expect("first").as_slice(), &[1.0, 2.0]);
        assert_eq!(read_series(&mut input).expect("second").as_slice(), &[3.0]);
        assert!(read_series(&mut input).is_err());
    }

    #[test]
    fn tokens_split_across_buffer_refills() {
        let text = "3\n12.5 -0.25\n1e3\n";
        let mut input = std::io::BufReader::with_capacity(2, text.as_bytes());
        assert_eq!(read_series(&mut input).expect("read").as_slice(), &[12.5, -0.25, 1000.0]);
    }
}
