/// Append-only text accumulated over a crawl
///
/// Each successfully parsed page contributes exactly one block, in crawl
/// order. Blocks are never edited or removed once appended.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    blocks: Vec<String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the text block of one page
    pub fn append(&mut self, block: String) {
        self.blocks.push(block);
    }

    /// The page blocks in crawl order
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Number of pages that contributed a block (empty blocks included)
    pub fn page_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if no page contributed any visible text
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.trim().is_empty())
    }

    /// The whole corpus, one line per non-empty page block
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .filter(|b| !b.trim().is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
