//! Minimal frontmatter parsing.
//!
//! Recognizes a block delimited by `---` marker lines at the very top of a
//! document. Within the block: scalar `slug` and `date` fields (trimmed,
//! one layer of surrounding quotes unwrapped) and a `tags` list in either
//! inline-array form (`tags: [a, b]`) or block form (`- item` lines).
//!
//! This is a deliberately small grammar, not a YAML parser: no nested
//! structures, no multi-line scalars, all other keys ignored.

/// Metadata record extracted from a document's frontmatter block.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    pub slug: Option<String>,
    pub date: Option<String>,
    pub tags: Vec<String>,
}

impl Frontmatter {
    /// Parse the metadata block at the top of `text`.
    ///
    /// A missing or unclosed block yields an empty record, not an error:
    /// frontmatter is optional.
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines();

        // Opening marker must be the very first line
        if lines.next().map(str::trim_end) != Some("---") {
            return Self::default();
        }

        let mut fm = Self::default();
        let mut in_tags_block = false;
        let mut closed = false;

        for line in lines {
            if line.trim_end() == "---" {
                closed = true;
                break;
            }

            let trimmed = line.trim();
            if in_tags_block {
                if let Some(rest) = trimmed.strip_prefix('-') {
                    let item = unquote(rest.trim());
                    if !item.is_empty() {
                        fm.tags.push(item.to_string());
                    }
                    continue;
                }
                in_tags_block = false;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "slug" => fm.slug = Some(unquote(value).to_string()),
                "date" => fm.date = Some(unquote(value).to_string()),
                "tags" => {
                    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
                        fm.tags = inner
                            .split(',')
                            .map(|item| unquote(item.trim()).to_string())
                            .filter(|item| !item.is_empty())
                            .collect();
                    } else if value.is_empty() {
                        in_tags_block = true;
                    }
                }
                _ => {}
            }
        }

        if closed { fm } else { Self::default() }
    }
}

/// Unwrap a single layer of matching surrounding quotes.
fn unquote(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
