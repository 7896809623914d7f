use rs_slugify::{slugify, slugify_with_options, ContentNode, Options};
use serde_json::json;

fn from_json(value: serde_json::Value) -> ContentNode {
    ContentNode::from(value)
}

#[test]
fn nested_elements_flatten_in_order() {
    let node = ContentNode::element(
        "h2",
        vec![
            ContentNode::from("Install "),
            ContentNode::element("code", "cargo"),
            ContentNode::element("em", vec![ContentNode::from("on "), ContentNode::from("Linux")]),
        ],
    );
    assert_eq!(slugify(node), "install-cargo-on-linux");
}

#[test]
fn wrapper_propagates_options() {
    let options = Options {
        delimiter: "_".to_string(),
        prefix: "Pre".to_string(),
        ..Options::default()
    };
    let node = ContentNode::wrapper(ContentNode::element("span", "Portal Content"));
    assert_eq!(slugify_with_options(node, &options), "pre_portal_content");
}

#[test]
fn empty_children_contribute_nothing() {
    let node = ContentNode::element(
        "p",
        vec![
            ContentNode::Empty,
            ContentNode::from("kept"),
            ContentNode::from(false),
            ContentNode::from(None::<String>),
            ContentNode::from("also kept"),
        ],
    );
    assert_eq!(slugify(node), "kept-also-kept");
}

#[test]
fn element_with_empty_children_is_empty() {
    assert_eq!(slugify(ContentNode::element("br", ContentNode::Empty)), "");
    assert_eq!(slugify(ContentNode::wrapper(ContentNode::Empty)), "");
}

#[test]
fn sequence_items_do_not_repeat_prefix() {
    let options = Options {
        prefix: "sec".to_string(),
        ..Options::default()
    };
    let node = ContentNode::from(vec![
        ContentNode::from(vec!["one", "two"]),
        ContentNode::from("three"),
    ]);
    assert_eq!(slugify_with_options(node, &options), "sec-one-two-three");
}

#[test]
fn json_react_like_tree() {
    let tree = json!({
        "type": "h2",
        "props": {
            "id": "ignored",
            "children": [
                "Getting ",
                {"type": "strong", "props": {"children": "Started"}},
                " with ",
                {"type": "code", "props": {"children": ["v", 2]}}
            ]
        }
    });
    assert_eq!(slugify(from_json(tree)), "getting-started-with-v-2");
}

#[test]
fn json_fragment_and_portal() {
    let fragment = json!({
        "type": "Symbol(react.fragment)",
        "props": {"children": "this IS a NoDe"}
    });
    let options = Options::with_delimiter(".");
    assert_eq!(slugify_with_options(from_json(fragment), &options), "this.is.a.node");

    let portal = json!({"children": {"type": "span", "props": {"children": "in portal"}}});
    assert_eq!(slugify(from_json(portal)), "in-portal");
}

#[test]
fn json_falsy_values_are_empty() {
    for value in [json!(null), json!(true), json!(""), json!(0), json!([]), json!({})] {
        assert_eq!(slugify(from_json(value.clone())), "", "value: {value}");
    }
}

#[test]
fn json_unrecognized_shapes_degrade_to_empty() {
    let tree = json!(["start", {"unknown": "shape"}, "end"]);
    assert_eq!(slugify(from_json(tree)), "start-end");
}

#[test]
fn from_json_str_parses_text() {
    let node = ContentNode::from_json_str(r#"[{"type": "span", "props": {"children": "here"}}, "are"]"#)
        .expect("valid json");
    assert_eq!(slugify(node), "here-are");
}

#[test]
fn from_json_str_reports_invalid_input() {
    let err = ContentNode::from_json_str("[1, 2").expect_err("truncated json");
    assert!(err.to_string().starts_with("Invalid content JSON"));
}
