//! Simple CLI that reads a slug request as JSON from stdin and writes the
//! slug as JSON to stdout.
//!
//! Request shape:
//!
//! ```json
//! {"node": ..., "options": {"delimiter": "_"}, "charMap": {"♥": "love"}}
//! ```
//!
//! `options` and `charMap` are optional. Set `RUST_LOG=debug` for diagnostics.

use std::collections::HashMap;
use std::io::{self, Read};

use rs_slugify::{CharMap, ContentNode, Options, Slugifier};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Request {
    #[serde(default)]
    node: ContentNode,
    #[serde(default)]
    options: Options,
    #[serde(default)]
    char_map: HashMap<String, String>,
}

#[derive(Serialize)]
struct Output {
    slug: String,
}

fn char_entries(raw: HashMap<String, String>) -> Vec<(char, String)> {
    raw.into_iter()
        .filter_map(|(key, replacement)| {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some((ch, replacement)),
                _ => {
                    log::warn!("skipping charMap key {key:?}: expected a single character");
                    None
                }
            }
        })
        .collect()
}

fn main() {
    env_logger::init();

    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read from stdin: {err}");
        std::process::exit(1);
    }

    let request: Request = match serde_json::from_str(&input) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("Invalid request: {}", rs_slugify::Error::from(err));
            std::process::exit(2);
        }
    };

    let char_map = CharMap::new().extended(char_entries(request.char_map));
    let slugifier = Slugifier::with_char_map(char_map);
    let slug = slugifier.slugify(&request.node, &request.options);
    log::debug!("slug: {slug:?}");

    println!("{}", serde_json::to_string(&Output { slug }).unwrap_or_default());
}
