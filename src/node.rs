//! Content nodes accepted by `slugify`.
//!
//! A `ContentNode` is a closed tree of labeled content: plain text, numbers,
//! ordered sequences, wrappers exposing a single nested child, and typed
//! elements carrying child content. Rendering layers that hand over
//! serialized trees go through the JSON adapter at the bottom of this module.

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// Tag given to elements built with [`ContentNode::fragment`].
pub const FRAGMENT_TAG: &str = "Fragment";

/// A node of labeled content.
///
/// # Example
///
/// ```rust
/// use rs_slugify::ContentNode;
///
/// let heading = ContentNode::element(
///     "h2",
///     vec![ContentNode::from("Release "), ContentNode::from(42)],
/// );
/// assert!(!heading.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum ContentNode {
    /// No content.
    #[default]
    Empty,

    /// Plain text.
    Text(String),

    /// A number, rendered the way JavaScript's `String(n)` renders it.
    Number(f64),

    /// Ordered list of nodes.
    Sequence(Vec<ContentNode>),

    /// A container exposing a single nested child (portals and the like).
    Wrapper(Box<ContentNode>),

    /// A typed element with child content.
    Element {
        /// Element type, e.g. `"span"` or `"h2"`.
        tag: String,
        /// The element's children.
        children: Box<ContentNode>,
    },
}

impl ContentNode {
    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates an element node of type `tag`.
    #[must_use]
    pub fn element(tag: impl Into<String>, children: impl Into<ContentNode>) -> Self {
        Self::Element {
            tag: tag.into(),
            children: Box::new(children.into()),
        }
    }

    /// Creates a fragment: an element with no markup of its own.
    #[must_use]
    pub fn fragment(children: impl Into<ContentNode>) -> Self {
        Self::element(FRAGMENT_TAG, children)
    }

    /// Wraps `inner` in a wrapper node.
    #[must_use]
    pub fn wrapper(inner: impl Into<ContentNode>) -> Self {
        Self::Wrapper(Box::new(inner.into()))
    }

    /// Returns true for nodes that contribute no text by themselves.
    ///
    /// Besides `Empty` this covers empty text, zero, NaN and empty
    /// sequences. Wrappers and elements are never empty here even when
    /// their children are; they simply reduce to an empty slug.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Number(n) => *n == 0.0 || n.is_nan(),
            Self::Sequence(items) => items.is_empty(),
            Self::Wrapper(_) | Self::Element { .. } => false,
        }
    }

    /// Text of a terminal node, or `None` for composite and empty nodes.
    #[must_use]
    pub fn terminal_text(&self) -> Option<Cow<'_, str>> {
        if self.is_empty() {
            return None;
        }
        match self {
            Self::Text(text) => Some(Cow::Borrowed(text)),
            Self::Number(n) => Some(Cow::Owned(number_to_string(*n))),
            _ => None,
        }
    }

    /// Parses a serialized content tree.
    ///
    /// See the `From<&Value>` implementation for how JSON shapes map to
    /// nodes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rs_slugify::ContentNode;
    ///
    /// let node = ContentNode::from_json_str(r#"{"type": "span", "props": {"children": "hi"}}"#)?;
    /// assert_eq!(node, ContentNode::element("span", "hi"));
    /// # Ok::<(), rs_slugify::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from(&value))
    }
}

/// Renders `n` like JavaScript's `String(n)`: plain decimals in
/// `[1e-6, 1e21)`, shortest exponent form (`1e+21`, `1.5e-7`) outside it.
fn number_to_string(n: f64) -> String {
    if n.is_infinite() {
        return if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let magnitude = n.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }
    n.to_string()
}

impl From<&str> for ContentNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ContentNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for ContentNode {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ContentNode {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(n: $ty) -> Self {
                    Self::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

/// Booleans carry no content.
impl From<bool> for ContentNode {
    fn from(_: bool) -> Self {
        Self::Empty
    }
}

impl<T: Into<ContentNode>> From<Option<T>> for ContentNode {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<T: Into<ContentNode>> From<Vec<T>> for ContentNode {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<ContentNode>, const N: usize> From<[T; N]> for ContentNode {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<ContentNode>> FromIterator<T> for ContentNode {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// JSON adapter
// =============================================================================

/// Maps a serialized content tree onto nodes.
///
/// - `null`, booleans, `{}` and `[]` become `Empty`
/// - strings and numbers become terminals
/// - arrays become sequences
/// - objects with a `children` key become wrappers
/// - objects with a `type` key become elements whose children are read from
///   `props.children`
///
/// Any other object becomes `Empty`.
impl From<&Value> for ContentNode {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null | Value::Bool(_) => Self::Empty,
            Value::String(text) => Self::Text(text.clone()),
            Value::Number(n) => n.as_f64().map_or(Self::Empty, Self::Number),
            Value::Array(items) if items.is_empty() => Self::Empty,
            Value::Array(items) => Self::Sequence(items.iter().map(Self::from).collect()),
            Value::Object(fields) if fields.is_empty() => Self::Empty,
            Value::Object(fields) => {
                if let Some(children) = fields.get("children") {
                    return Self::Wrapper(Box::new(Self::from(children)));
                }
                if let Some(tag) = fields.get("type") {
                    let children = fields
                        .get("props")
                        .and_then(|props| props.get("children"))
                        .map_or(Self::Empty, Self::from);
                    return Self::Element {
                        tag: tag_name(tag),
                        children: Box::new(children),
                    };
                }
                log::debug!(
                    "unrecognized content object with keys {:?}; treating as empty",
                    fields.keys().collect::<Vec<_>>()
                );
                Self::Empty
            }
        }
    }
}

impl From<Value> for ContentNode {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

fn tag_name(tag: &Value) -> String {
    match tag {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}
