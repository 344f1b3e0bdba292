// src/rewrite/links.rs
// =============================================================================
// This module rewrites Markdown link targets in a piece of text.
//
// A Markdown link looks like [text](path). For every old path in the rename
// tables we compile a regex that matches exactly that link, keep the text
// part, and swap in the new path.
//
// Order of the passes:
// 1. Full paths (lektioner/del1/01-introduktion.md)
// 2. Bare file names (01-introduktion.md)
// 3. Folder fixups (plain string replacements, only for one folder)
//
// Nothing here touches the filesystem. Same input in, same output out.
//
// Rust concepts:
// - regex::Regex: Compiled patterns, built once and reused for every file
// - Closures: To build each replacement from the captured link text
// - Lifetimes: &'static str for table entries that live in the binary
// =============================================================================

use anyhow::{Context, Result};
use regex::{Captures, Regex};

use crate::mappings::{FolderFixup, FOLDER_FIXUPS, FULL_PATH_MAPPINGS, SIMPLE_MAPPINGS};

// One compiled rename: the pattern for the old path and the path to put back
#[derive(Debug)]
struct LinkRule {
    pattern: Regex,
    to: &'static str,
}

impl LinkRule {
    // Builds the pattern \[([^\]]+)\]\(<old path>\)
    //
    // regex::escape makes the dots and dashes in the path literal
    fn new(from: &str, to: &'static str) -> Result<Self> {
        let source = format!(r"\[([^\]]+)\]\({}\)", regex::escape(from));
        let pattern = Regex::new(&source)
            .with_context(|| format!("invalid link pattern for '{}'", from))?;
        Ok(Self { pattern, to })
    }
}

/// Rewrites old lesson links to their new locations.
///
/// Build it once with [`LinkRewriter::new`] and call [`LinkRewriter::rewrite`]
/// for every file.
#[derive(Debug)]
pub struct LinkRewriter {
    // Full-path rules first, then simple-name rules
    rules: Vec<LinkRule>,
    fixups: &'static [FolderFixup],
}

impl LinkRewriter {
    /// Compiles the built-in rename tables
    pub fn new() -> Result<Self> {
        Self::from_tables(FULL_PATH_MAPPINGS, SIMPLE_MAPPINGS, FOLDER_FIXUPS)
    }

    // Compiles the given tables, keeping their order
    fn from_tables(
        full_paths: &[(&str, &'static str)],
        simple_names: &[(&str, &'static str)],
        fixups: &'static [FolderFixup],
    ) -> Result<Self> {
        let rules = full_paths
            .iter()
            .chain(simple_names)
            .map(|&(from, to)| LinkRule::new(from, to))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules, fixups })
    }

    /// Returns `content` with every known old link replaced.
    ///
    /// `folder` is the name of the directory the file lives in (for example
    /// `Some("grunderna")`). Folder fixups only run when it matches.
    pub fn rewrite(&self, content: &str, folder: Option<&str>) -> String {
        let mut text = content.to_string();

        for rule in &self.rules {
            text = rule
                .pattern
                .replace_all(&text, |caps: &Captures| format!("[{}]({})", &caps[1], rule.to))
                .into_owned();
        }

        for fixup in self.fixups {
            if folder == Some(fixup.folder) && text.contains(fixup.from) {
                text = text.replace(fixup.from, fixup.to);
            }
        }

        text
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why compile the regexes up front?
//    - Regex::new parses the pattern and builds a matcher, which is not free
//    - We have 56 patterns and run each of them on every file
//    - Compiling once in LinkRewriter::new means each file only pays for matching
//
// 2. What does replace_all return?
//    - A Cow<str> ("clone on write")
//    - Cow::Borrowed if nothing matched (no allocation)
//    - Cow::Owned if something was replaced
//    - .into_owned() turns either one into a String
//
// 3. What is &caps[1]?
//    - caps holds the capture groups of one match
//    - Group 0 is the whole match, group 1 is the ([^\]]+) part: the link text
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rewriter() -> LinkRewriter {
        LinkRewriter::new().unwrap()
    }

    #[test]
    fn test_full_path_link_in_prose() {
        let input = "Se [introduktion](lektioner/del1/01-introduktion.md) för mer info.";
        assert_eq!(
            rewriter().rewrite(input, Some("grunderna")),
            "Se [introduktion](grunderna/introduktion.md) för mer info."
        );
    }

    #[test]
    fn test_full_path_link_outside_topic_folders() {
        let input = "- [SOLID](lektioner/del4/23-solid.md)\n- [UML](lektioner/del4/26-uml.md)\n";
        assert_eq!(
            rewriter().rewrite(input, Some("docs")),
            "- [SOLID](praktik/solid.md)\n- [UML](praktik/uml.md)\n"
        );
    }

    #[test]
    fn test_static_link_crosses_into_koncept() {
        assert_eq!(
            rewriter().rewrite("[Static](11-static.md)", Some("grunderna")),
            "[Static](../koncept/static-vs-instance.md)"
        );
    }

    #[test]
    fn test_simple_name_without_fixup() {
        assert_eq!(
            rewriter().rewrite("[Records](20-records.md)", Some("avancerat")),
            "[Records](records.md)"
        );
    }

    #[test]
    fn test_link_text_is_kept_verbatim() {
        let input = "[Arv & *polymorfism* (del 1)](07-arv.md)";
        assert_eq!(
            rewriter().rewrite(input, Some("grunderna")),
            "[Arv & *polymorfism* (del 1)](arv.md)"
        );
    }

    #[test]
    fn test_fixups_only_fire_in_their_folder() {
        let input = "[Static](static-vs-instance.md)";
        assert_eq!(rewriter().rewrite(input, Some("koncept")), input);
        assert_eq!(rewriter().rewrite(input, None), input);

        let input = "[Moderna](moderna-features.md)";
        assert_eq!(rewriter().rewrite(input, Some("grunderna")), input);
        assert_eq!(
            rewriter().rewrite(input, Some("koncept")),
            "[Moderna](../avancerat/moderna-features.md)"
        );
    }

    #[test]
    fn test_fixups_match_literally() {
        // The fixups are plain string replacements, so empty link text counts too
        assert_eq!(
            rewriter().rewrite("[](23-solid.md)", Some("avancerat")),
            "[](../praktik/solid.md)"
        );
        assert_eq!(
            rewriter().rewrite("[SOLID](solid.md)", Some("avancerat")),
            "[SOLID](../praktik/solid.md)"
        );
    }

    #[test]
    fn test_partial_paths_are_not_rewritten() {
        let input = "[a](./01-introduktion.md) [b](01-introduktion.md#arv) [c](x/01-introduktion.md)";
        assert_eq!(rewriter().rewrite(input, Some("grunderna")), input);
    }

    #[test]
    fn test_unmatched_input_is_untouched() {
        let input = "# Praktik\n\nBara text här, inga länkar.\n[Extern](https://example.com)\n";
        assert_eq!(rewriter().rewrite(input, Some("praktik")), input);
    }

    #[test]
    fn test_several_links_on_one_line() {
        let input = "[A](01-introduktion.md), [B](02-klasser-objekt.md) och [C](lektioner/del2/13-enums.md)";
        assert_eq!(
            rewriter().rewrite(input, Some("grunderna")),
            "[A](introduktion.md), [B](klasser-objekt.md) och [C](koncept/enums.md)"
        );
    }

    #[test]
    fn test_custom_tables_keep_their_order() {
        static NO_FIXUPS: &[FolderFixup] = &[];
        let rewriter =
            LinkRewriter::from_tables(&[("a.md", "b.md")], &[("b.md", "c.md")], NO_FIXUPS).unwrap();
        // The simple pass runs after the full-path pass and sees its output
        assert_eq!(rewriter.rewrite("[x](a.md)", None), "[x](c.md)");
    }

    // Pieces that are likely to interact: link openers, old and new targets,
    // stray brackets and fixup sources
    fn fragment() -> impl Strategy<Value = String> {
        let mut pieces: Vec<String> = vec![
            "Se ".into(),
            "text ".into(),
            "\n".into(),
            "[".into(),
            "]".into(),
            "(".into(),
            ")".into(),
            "](".into(),
            "[länk](".into(),
            "../".into(),
        ];
        for (old, new) in FULL_PATH_MAPPINGS.iter().chain(SIMPLE_MAPPINGS) {
            pieces.push(old.to_string());
            pieces.push(new.to_string());
        }
        for fixup in FOLDER_FIXUPS {
            pieces.push(fixup.from.to_string());
        }
        prop::sample::select(pieces)
    }

    proptest! {
        #[test]
        fn test_rewrite_is_idempotent(
            parts in prop::collection::vec(fragment(), 0..24),
            folder in prop::sample::select(vec!["grunderna", "koncept", "avancerat", "praktik", "docs"]),
        ) {
            let rewriter = rewriter();
            let input = parts.concat();
            let once = rewriter.rewrite(&input, Some(folder));
            let twice = rewriter.rewrite(&once, Some(folder));
            prop_assert_eq!(once, twice);
        }
    }
}
