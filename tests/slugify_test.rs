use rs_slugify::{slugify, slugify_with_options, ContentNode, Options};

fn span(children: impl Into<ContentNode>) -> ContentNode {
    ContentNode::element("span", children)
}

fn three_spans() -> Vec<ContentNode> {
    vec![span("here"), span("are"), span("multiple spans")]
}

fn with_delimiter(delimiter: &str) -> Options {
    Options::with_delimiter(delimiter)
}

fn with_prefix(prefix: &str, delimiter: &str) -> Options {
    Options {
        prefix: prefix.to_string(),
        delimiter: delimiter.to_string(),
        ..Options::default()
    }
}

#[test]
fn slugify_handles_strings() {
    assert_eq!(slugify("something"), "something");
    assert_eq!(slugify("this is a test"), "this-is-a-test");
    assert_eq!(slugify("And another one"), "and-another-one");
    assert_eq!(
        slugify("খলিশা ফুলের মধু Sundarban Khalisha Honey"),
        "খলিশা-ফুলের-মধু-sundarban-khalisha-honey"
    );
    assert_eq!(slugify("crème brulée"), "creme-brulee");
}

#[test]
fn slugify_handles_numbers() {
    assert_eq!(slugify(9876), "9876");
    assert_eq!(slugify(3.25), "325");
}

#[test]
fn slugify_handles_simple_nodes() {
    assert_eq!(slugify(span("this IS a NoDe")), "this-is-a-node");
    assert_eq!(slugify(span(576)), "576");
}

#[test]
fn slugify_handles_fragments() {
    assert_eq!(slugify(ContentNode::fragment("this IS a NoDe")), "this-is-a-node");

    let fragment = ContentNode::fragment(vec![
        span("here"),
        span("are"),
        span("multiple spans in a fragment"),
    ]);
    assert_eq!(slugify(fragment), "here-are-multiple-spans-in-a-fragment");
}

#[test]
fn slugify_handles_sequences() {
    assert_eq!(slugify(three_spans()), "here-are-multiple-spans");
}

#[test]
fn slugify_handles_custom_delimiters() {
    assert_eq!(
        slugify_with_options("crème brulée", &with_delimiter("_")),
        "creme_brulee"
    );
    assert_eq!(
        slugify_with_options(ContentNode::fragment("this IS a NoDe"), &with_delimiter(".")),
        "this.is.a.node"
    );
}

#[test]
fn slugify_handles_multi_character_delimiters() {
    assert_eq!(
        slugify_with_options(three_spans(), &with_delimiter("--")),
        "here--are--multiple--spans"
    );
    assert_eq!(
        slugify_with_options(span("this IS a NoDe"), &with_delimiter("__")),
        "this__is__a__node"
    );
}

#[test]
fn slugify_handles_prefixes() {
    assert_eq!(
        slugify_with_options("this is a test", &with_prefix("user-content", "-")),
        "user-content-this-is-a-test"
    );
    assert_eq!(slugify_with_options(9876, &with_prefix("tada", "-")), "tada-9876");
    assert_eq!(
        slugify_with_options(
            ContentNode::element("h2", "this is a test"),
            &with_prefix("user-content", "-")
        ),
        "user-content-this-is-a-test"
    );
    assert_eq!(
        slugify_with_options(three_spans(), &with_prefix("user_ConteNt", "-")),
        "user_content-here-are-multiple-spans"
    );
}

#[test]
fn slugify_handles_prefixes_and_delimiters_together() {
    assert_eq!(
        slugify_with_options("this is a test", &with_prefix("user-content", ".")),
        "user-content.this.is.a.test"
    );
    assert_eq!(slugify_with_options(9876, &with_prefix("tada", ".")), "tada.9876");
    assert_eq!(
        slugify_with_options(span("this IS a NoDe"), &with_prefix("pref", ".")),
        "pref.this.is.a.node"
    );
    assert_eq!(
        slugify_with_options(three_spans(), &with_prefix("someprefix", "--")),
        "someprefix--here--are--multiple--spans"
    );
}

#[test]
fn slugify_removes_special_characters() {
    assert_eq!(slugify("pierre@gmail.com"), "pierregmailcom");
    assert_eq!(
        slugify("this is@a test with special characters"),
        "this-isa-test-with-special-characters"
    );
    assert_eq!(
        slugify("this is*+~.()'\"@ a test with special characters"),
        "this-is-a-test-with-special-characters"
    );
    assert_eq!(
        slugify("Mężny bądź chroń pułk twój i sześć flag"),
        "mezny-badz-chron-pulk-twoj-i-szesc-flag"
    );
    assert_eq!(
        slugify("đây là một thử nghiệm đối với việc xóa các âm tiết tiếng việt"),
        "day-la-mot-thu-nghiem-doi-voi-viec-xoa-cac-am-tiet-tieng-viet"
    );
}

#[test]
fn slugify_transliterates_greek_and_cyrillic() {
    assert_eq!(slugify("Привет, мир!"), "privet-mir");
    assert_eq!(slugify("Καλημέρα κόσμε"), "kalhmera-kosme");
}

#[test]
fn slugify_collapses_consecutive_delimiters() {
    assert_eq!(slugify("a little slug of mine - Slug"), "a-little-slug-of-mine-slug");
    assert_eq!(slugify("Hello - World"), "hello-world");
    assert_eq!(
        slugify_with_options("Hello - World", &with_delimiter("__")),
        "hello__world"
    );
}

#[test]
fn slugify_does_not_end_with_a_delimiter() {
    assert_eq!(slugify("a little slug of mine @"), "a-little-slug-of-mine");
    assert_eq!(
        slugify_with_options("a little slug of mine @", &with_prefix("tada", "||")),
        "tada||a||little||slug||of||mine"
    );
}

#[test]
fn slugify_does_not_start_with_a_delimiter() {
    assert_eq!(slugify("@ a little slug of mine"), "a-little-slug-of-mine");
    assert_eq!(
        slugify_with_options("@ a little slug of mine", &with_prefix("tada", "||")),
        "tada||a||little||slug||of||mine"
    );
}

#[test]
fn slugify_never_wraps_result_in_delimiters() {
    for text in ["  --hello--  ", "@@x@@", "/path/", " - a - ", "\tTabbed\n"] {
        let slug = slugify(text);
        assert!(!slug.is_empty(), "input: {text:?}");
        assert!(!slug.starts_with('-'), "input: {text:?} -> {slug:?}");
        assert!(!slug.ends_with('-'), "input: {text:?} -> {slug:?}");
    }
}

#[test]
fn slugify_removes_stop_words() {
    let options = Options {
        remove_stop_words: true,
        ..Options::default()
    };
    assert_eq!(
        slugify_with_options("The Lord of the Rings", &options),
        "lord-rings"
    );
    assert_eq!(slugify_with_options("What's up?", &options), "whats");
}

#[test]
fn slugify_removes_numbers() {
    let options = Options {
        remove_numbers: true,
        ..Options::default()
    };
    assert_eq!(slugify_with_options("Chapter 12: Results", &options), "chapter-results");
    assert_eq!(slugify_with_options(2024, &options), "");
}

#[test]
fn slugify_prefix_composition() {
    for (text, prefix) in [
        ("this is a test", "Docs"),
        ("crème brulée", "user-content"),
        ("Hello - World", "x"),
    ] {
        let options = with_prefix(prefix, "-");
        let expected = format!("{prefix}-{}", slugify(text)).to_lowercase();
        assert_eq!(slugify_with_options(text, &options), expected);
    }
}

#[test]
fn slugify_sequence_matches_joined_text() {
    let options = with_prefix("p", "_");
    let node = ContentNode::from(vec!["Hello World", "Foo"]);
    assert_eq!(
        slugify_with_options(node, &options),
        slugify_with_options("Hello World_Foo", &options)
    );
    assert_eq!(slugify_with_options(vec!["Hello World", "Foo"], &options), "p_hello_world_foo");
}
