//! Fenced code block extraction from markdown answers

const FENCE: &str = "```";
const BLOCK_SEPARATOR: &str = "\n\n";

/// Pulls fenced code out of an LLM answer so it can be written into a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeBlockExtractor;

impl CodeBlockExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Trimmed contents of each well-formed fenced block, in source order.
    ///
    /// The scan stops at the first fence that has no newline after it or no
    /// closing fence; blocks found before that point are kept.
    pub fn blocks<'a>(&self, markdown: &'a str) -> Vec<&'a str> {
        let mut blocks = Vec::new();
        let mut cursor = 0;

        while let Some(open) = find_from(markdown, FENCE, cursor) {
            // Skip the rest of the opening line (language tag)
            let Some(line_end) = find_from(markdown, "\n", open) else {
                break;
            };
            let Some(close) = find_from(markdown, FENCE, line_end + 1) else {
                break;
            };

            blocks.push(markdown[line_end + 1..close].trim());
            cursor = close + FENCE.len();
        }

        blocks
    }

    /// Concatenated code blocks separated by a blank line, or the whole input
    /// when it holds no complete block.
    pub fn extract(&self, markdown: &str) -> String {
        let blocks = self.blocks(markdown);

        if blocks.is_empty() {
            markdown.to_string()
        } else {
            blocks.join(BLOCK_SEPARATOR)
        }
    }
}

fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack
        .get(from..)
        .and_then(|rest| rest.find(needle))
        .map(|idx| from + idx)
}
