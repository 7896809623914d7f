//! Reduction of content trees to slugs.
//!
//! Terminals are slugged directly. Wrappers and elements pass their options
//! through to their children. Sequences are reduced in two phases:
//!
//! 1. `flatten_sequence` slugs every item on its own with only the delimiter
//!    set, so no item receives the prefix, and joins the results
//! 2. `finish_flattened` runs the joined string through the full options,
//!    which applies the prefix exactly once

use crate::charmap::CharMap;
use crate::engine::generate_slug;
use crate::node::ContentNode;
use crate::options::Options;

/// Reduces `node` to a slug.
pub(crate) fn slugify_node(node: &ContentNode, options: &Options, map: &CharMap) -> String {
    if node.is_empty() {
        return String::new();
    }

    match node {
        ContentNode::Text(_) | ContentNode::Number(_) => match node.terminal_text() {
            Some(text) => slugify_text(&text, options, map),
            None => String::new(),
        },
        ContentNode::Wrapper(inner) => slugify_node(inner, options, map),
        ContentNode::Sequence(items) => {
            let joined = flatten_sequence(items, options.effective_delimiter(), map);
            finish_flattened(&joined, options, map)
        }
        ContentNode::Element { children, .. } => slugify_node(children, options, map),
        ContentNode::Empty => String::new(),
    }
}

/// Phase one: slug each item with delimiter-only options and join them.
fn flatten_sequence(items: &[ContentNode], delimiter: &str, map: &CharMap) -> String {
    let item_options = Options::with_delimiter(delimiter);
    items
        .iter()
        .map(|item| slugify_node(item, &item_options, map))
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Phase two: treat the joined item slugs as text under the full options.
fn finish_flattened(joined: &str, options: &Options, map: &CharMap) -> String {
    if joined.is_empty() {
        return String::new();
    }
    slugify_text(joined, options, map)
}

/// Slugs terminal text and attaches the prefix.
fn slugify_text(text: &str, options: &Options, map: &CharMap) -> String {
    let delimiter = options.effective_delimiter();
    let slug = generate_slug(
        text,
        delimiter,
        options.remove_stop_words,
        options.remove_numbers,
        map,
    );

    if options.prefix.is_empty() {
        slug
    } else {
        format!("{}{delimiter}{slug}", options.prefix).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(node: impl Into<ContentNode>, options: &Options) -> String {
        slugify_node(&node.into(), options, &CharMap::new())
    }

    #[test]
    fn test_empty_nodes() {
        let options = Options {
            prefix: "p".to_string(),
            ..Options::default()
        };
        assert_eq!(slug(ContentNode::Empty, &options), "");
        assert_eq!(slug("", &options), "");
        assert_eq!(slug(0, &options), "");
        assert_eq!(slug(Vec::<ContentNode>::new(), &options), "");
    }

    #[test]
    fn test_text_with_prefix() {
        let options = Options {
            prefix: "User-Content".to_string(),
            ..Options::default()
        };
        assert_eq!(slug("this is a test", &options), "user-content-this-is-a-test");
    }

    #[test]
    fn test_flatten_sequence_omits_prefix() {
        let items = vec![ContentNode::text("Here"), ContentNode::text("multiple spans")];
        assert_eq!(
            flatten_sequence(&items, "--", &CharMap::new()),
            "here--multiple--spans"
        );
    }

    #[test]
    fn test_flatten_sequence_ignores_item_filters() {
        // Stop words are only removed in the second phase.
        let items = vec![ContentNode::text("the end")];
        assert_eq!(flatten_sequence(&items, "-", &CharMap::new()), "the-end");
    }

    #[test]
    fn test_sequence_applies_prefix_once() {
        let options = Options {
            prefix: "someprefix".to_string(),
            delimiter: "--".to_string(),
            ..Options::default()
        };
        let node = ContentNode::from(vec![
            ContentNode::element("span", "here"),
            ContentNode::element("span", "are"),
            ContentNode::element("span", "multiple spans"),
        ]);
        assert_eq!(slug(node, &options), "someprefix--here--are--multiple--spans");
    }

    #[test]
    fn test_sequence_applies_filters_to_joined_text() {
        let options = Options {
            remove_stop_words: true,
            ..Options::default()
        };
        assert_eq!(slug(["the", "quick", "fox"], &options), "quick-fox");
    }

    #[test]
    fn test_sequence_of_empty_items_keeps_prefix() {
        let options = Options {
            prefix: "p".to_string(),
            ..Options::default()
        };
        assert_eq!(slug([ContentNode::Empty, ContentNode::Empty], &options), "p-");
    }

    #[test]
    fn test_wrapper_and_element_propagate_options() {
        let options = Options::with_delimiter(".");
        let node = ContentNode::wrapper(ContentNode::fragment("this IS a NoDe"));
        assert_eq!(slug(node, &options), "this.is.a.node");
    }
}
