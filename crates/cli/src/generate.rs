use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Summary of a single run, logged once the input is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TocStats {
    /// Number of input lines read.
    pub lines: usize,
    /// Number of toc entries written to the output.
    pub entries: usize,
    /// Number of malformed headings reported.
    pub malformed: usize,
}

/// Reads markdown from `reader` line by line, writes one toc entry per heading
/// to `output` and one warning per malformed heading to `diagnostics`.
///
/// Malformed headings are not errors, only failing to read the input or to
/// write either stream is.
pub fn write_toc<R, W, E>(reader: R, mut output: W, mut diagnostics: E) -> Result<TocStats>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut stats = TocStats::default();
    let mut read_error = None;

    {
        let mut source = reader.lines();
        let lines = std::iter::from_fn(|| match source.next()? {
            Ok(line) => {
                stats.lines += 1;
                Some(line)
            }
            Err(err) => {
                read_error.replace(err);
                None
            }
        });

        for item in toc::toc_entries(lines) {
            match item {
                Ok(entry) => {
                    writeln!(output, "{entry}")?;
                    stats.entries += 1;
                }
                Err(malformed) => {
                    tracing::warn!(line = malformed.line(), "Malformed heading");
                    writeln!(diagnostics, "{malformed}")?;
                    stats.malformed += 1;
                }
            }
        }
    }

    output.flush()?;
    diagnostics.flush()?;

    if let Some(err) = read_error {
        return Err(err).with_context(|| format!("failed to read line {}", stats.lines + 1));
    }

    Ok(stats)
}
