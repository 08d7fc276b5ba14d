use tracing::trace;

use crate::block::BlockKind;

const FENCE: &str = "```";

/// Split a document into blocks on blank lines.
///
/// Every line is trimmed; a line that trims to nothing ends the current
/// block, so runs of blank lines never produce empty blocks.
pub fn segment(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}

/// Decide the structural kind of a single block.
///
/// Checks run in a fixed order and the first match wins; anything that
/// matches nothing is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.lines().collect();

    let kind = if lines.is_empty() {
        BlockKind::Paragraph
    } else if is_code(&lines) {
        BlockKind::Code
    } else if lines.iter().all(|line| line.starts_with('>')) {
        BlockKind::Quote
    } else if let Some(level) = heading_level(&lines) {
        BlockKind::Heading { level }
    } else if lines.iter().all(|line| line.starts_with("- ")) {
        BlockKind::UnorderedList
    } else if is_ordered_list(&lines) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    };

    trace!(?kind, lines = lines.len(), "classified block");
    kind
}

fn is_code(lines: &[&str]) -> bool {
    lines.len() >= 2 && lines.first() == Some(&FENCE) && lines.last() == Some(&FENCE)
}

/// Level of a single-line `#` heading, if the block is one.
fn heading_level(lines: &[&str]) -> Option<u8> {
    let [line] = lines else {
        return None;
    };
    let hashes = line.len() - line.trim_start_matches('#').len();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = line[hashes..].strip_prefix(' ')?;
    if rest.trim().is_empty() {
        return None;
    }
    u8::try_from(hashes).ok()
}

/// Every line `i` (from 1) must start with `"{i}. "`.
fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(index, line)| line.starts_with(&format!("{}. ", index + 1)))
}
