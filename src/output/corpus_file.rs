use crate::output::OutputResult;
use crate::state::Corpus;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the corpus as plain text, one line per page
///
/// An empty corpus produces an empty file.
pub fn write_corpus(corpus: &Corpus, path: &Path) -> OutputResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    let text = corpus.text();
    writer.write_all(text.as_bytes())?;
    if !text.is_empty() {
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(())
}
