/*!
 * Streaming split of an M2 corpus into record blocks.
 */

use std::iter::Enumerate;
use std::str::Lines;

use super::record::Record;
use crate::errors::M2Error;

/// Iterator over blank-line-delimited blocks
///
/// Yields the 1-based line number of each block's first line together with
/// the block text. Runs of blank lines and `\r\n` endings are tolerated.
pub struct RecordBlocks<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> RecordBlocks<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().enumerate(),
        }
    }
}

impl Iterator for RecordBlocks<'_> {
    type Item = (usize, String);

    fn next(&mut self) -> Option<Self::Item> {
        let mut start = None;
        let mut block: Vec<&str> = Vec::new();

        for (index, line) in self.lines.by_ref() {
            if line.trim().is_empty() {
                if start.is_some() {
                    break;
                }
                continue;
            }
            start.get_or_insert(index + 1);
            block.push(line);
        }

        start.map(|line_no| (line_no, block.join("\n")))
    }
}

/// Parse every record of a corpus, stopping at the first malformed one
pub fn parse_corpus(content: &str) -> Result<Vec<Record>, M2Error> {
    RecordBlocks::new(content)
        .map(|(line_no, block)| Record::parse(&block, line_no))
        .collect()
}
