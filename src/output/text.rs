// Wed Jan 21 2026 - Alex

use super::error::OutputError;
use crate::table::Leaf;
use itertools::Itertools;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// Writes one space-joined line per leaf:
//   "{country} {province} {isp} {sample1} [sample2 ...]"
// Field values are not escaped; the files are write-only summaries.
pub struct TextEmitter;

impl TextEmitter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_leaf(&self, leaf: &Leaf<'_>) -> String {
        format!(
            "{} {} {} {}",
            leaf.country,
            leaf.province,
            leaf.isp,
            leaf.samples.iter().join(" ")
        )
    }

    pub fn write<'a, W, I>(&self, leaves: I, writer: &mut W) -> Result<(), OutputError>
    where
        W: Write,
        I: Iterator<Item = Leaf<'a>>,
    {
        for leaf in leaves {
            writeln!(writer, "{}", self.format_leaf(&leaf))?;
        }
        Ok(())
    }

    pub fn write_to_path<'a, P, I>(&self, path: P, leaves: I) -> Result<(), OutputError>
    where
        P: AsRef<Path>,
        I: Iterator<Item = Leaf<'a>>,
    {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write(leaves, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for TextEmitter {
    fn default() -> Self {
        Self::new()
    }
}
