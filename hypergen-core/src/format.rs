//! Plain-text serialisation of hypergraph instances.
//!
//! The first line holds `<net_count> <cell_count>`; every following line
//! lists the members of one net separated by single spaces. The reader also
//! accepts an optional third header field, which must be `0` (unweighted),
//! and skips blank lines and `%` comment lines.

use std::io::{self, BufRead, Write};

use crate::{
    error::ParseError,
    hypergraph::Hypergraph,
    net::{CellId, Net},
};

const COMMENT_PREFIX: char = '%';
const UNWEIGHTED_FORMAT: u32 = 0;

/// Writes `hypergraph` to `writer`: the header line, then one line per net.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hypergen_core::{read_hypergraph, write_hypergraph};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let hypergraph = read_hypergraph("2 4\n1 2\n2 3 4\n".as_bytes())?;
/// let mut buffer = Vec::new();
/// write_hypergraph(&hypergraph, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "2 4\n1 2\n2 3 4\n");
/// # Ok(())
/// # }
/// ```
pub fn write_hypergraph(hypergraph: &Hypergraph, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        hypergraph.net_count(),
        hypergraph.cell_count()
    )?;
    for net in hypergraph.nets() {
        writeln!(writer, "{net}")?;
    }
    Ok(())
}

/// Reads a hypergraph instance from `reader`.
///
/// # Errors
/// Returns [`ParseError`] when the input cannot be read, the header is
/// missing or malformed, a weighted format is requested, a net line holds an
/// invalid or out-of-range cell, or the number of net lines disagrees with
/// the header.
pub fn read_hypergraph(reader: impl BufRead) -> Result<Hypergraph, ParseError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line));

    let (header_line, header) = loop {
        let Some((number, line)) = lines.next() else {
            return Err(ParseError::MissingHeader);
        };
        let text = line?;
        if !is_skipped(&text) {
            break (number, text);
        }
    };
    let (net_count, cell_count) = parse_header(header_line, &header)?;

    let mut nets = Vec::new();
    for (number, line) in lines {
        let text = line?;
        if is_skipped(&text) {
            continue;
        }
        nets.push(parse_net(number, &text, cell_count)?);
    }

    if nets.len() != net_count {
        return Err(ParseError::NetCountMismatch {
            expected: net_count,
            actual: nets.len(),
        });
    }
    Ok(Hypergraph::from_parts(cell_count, nets))
}

fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX)
}

fn parse_header(line: usize, text: &str) -> Result<(usize, u32), ParseError> {
    let mut fields = text.split_whitespace();
    let net_count = fields
        .next()
        .and_then(|field| field.parse::<usize>().ok())
        .ok_or(ParseError::InvalidHeader {
            line,
            reason: "net count is not a non-negative integer",
        })?;
    let cell_count = fields
        .next()
        .and_then(|field| field.parse::<u32>().ok())
        .ok_or(ParseError::InvalidHeader {
            line,
            reason: "cell count is not a non-negative integer",
        })?;
    if let Some(field) = fields.next() {
        let fmt = field.parse::<u32>().map_err(|_| ParseError::InvalidHeader {
            line,
            reason: "format flag is not a non-negative integer",
        })?;
        if fmt != UNWEIGHTED_FORMAT {
            return Err(ParseError::UnsupportedFormat { line, fmt });
        }
    }
    if fields.next().is_some() {
        return Err(ParseError::InvalidHeader {
            line,
            reason: "expected `<nets> <cells> [fmt]`",
        });
    }
    Ok((net_count, cell_count))
}

fn parse_net(line: usize, text: &str, cell_count: u32) -> Result<Net, ParseError> {
    let cells = text
        .split_whitespace()
        .map(|token| {
            let cell = token
                .parse::<CellId>()
                .map_err(|_| ParseError::InvalidCell {
                    line,
                    token: token.to_owned(),
                })?;
            if cell == 0 || cell > cell_count {
                return Err(ParseError::CellOutOfRange {
                    line,
                    cell,
                    cell_count,
                });
            }
            Ok(cell)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Net::from_cells(cells))
}
