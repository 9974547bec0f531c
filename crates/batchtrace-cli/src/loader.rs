use std::io::Read;
use std::path::Path;

use batchtrace_types::{BatchNode, Error, Result, TraceEvent};
use serde::Deserialize;
use serde::de::Error as _;
use serde_json::Value;
use tracing::debug;

/// Read the whole input, treating `-` as stdin.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Deepest batch tree accepted at the input boundary, in levels.
pub const MAX_TREE_DEPTH: usize = 1024;

/// Load a batch tree document. A JSON `null` document is an absent root.
pub fn load_batch_tree(path: &Path) -> Result<Option<BatchNode>> {
    let content = read_input(path)?;
    parse_batch_tree(&content)
}

pub fn parse_batch_tree(content: &str) -> Result<Option<BatchNode>> {
    // Each level is an object plus its `children` array
    if json_nesting(content) > 2 * MAX_TREE_DEPTH {
        return Err(Error::TooDeep {
            limit: MAX_TREE_DEPTH,
        });
    }

    let mut json = serde_json::Deserializer::from_str(content);
    json.disable_recursion_limit();
    let root = Option::<BatchNode>::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;

    match &root {
        Some(node) => debug!(code = %node.code, "parsed batch tree"),
        None => debug!("batch tree document is null"),
    }
    Ok(root)
}

/// Deepest bracket nesting of a JSON text, ignoring brackets inside strings.
fn json_nesting(content: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in content.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}

/// Load events from a JSON array, an EPCIS document (`epcisBody.eventList`),
/// or JSON Lines (`.jsonl` / `.ndjson`).
pub fn load_events(path: &Path) -> Result<Vec<TraceEvent>> {
    let content = read_input(path)?;
    let line_delimited = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("jsonl") | Some("ndjson")
    );

    let events = if line_delimited {
        parse_events_jsonl(&content)?
    } else if path.as_os_str() == "-" {
        // stdin has no extension to go by
        match serde_json::from_str::<Value>(&content) {
            Ok(document) if is_events_document(&document) => events_from_document(document)?,
            _ => {
                debug!("stdin is not an event document, reading JSON Lines");
                parse_events_jsonl(&content)?
            }
        }
    } else {
        parse_events_document(&content)?
    };

    debug!(count = events.len(), path = %path.display(), "loaded events");
    Ok(events)
}

pub fn parse_events_document(content: &str) -> Result<Vec<TraceEvent>> {
    events_from_document(serde_json::from_str(content)?)
}

fn is_events_document(document: &Value) -> bool {
    document.is_array() || document.get("epcisBody").is_some()
}

fn events_from_document(document: Value) -> Result<Vec<TraceEvent>> {
    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut fields) => match fields.remove("epcisBody") {
            Some(Value::Object(mut body)) => match body.remove("eventList") {
                Some(Value::Array(items)) => items,
                None | Some(Value::Null) => Vec::new(),
                Some(_) => return Err(shape_error("`epcisBody.eventList` is not an array")),
            },
            _ => return Err(shape_error(NOT_AN_EVENT_DOCUMENT)),
        },
        _ => return Err(shape_error(NOT_AN_EVENT_DOCUMENT)),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| Error::Event { index, source })
        })
        .collect()
}

const NOT_AN_EVENT_DOCUMENT: &str =
    "expected an array of events or an EPCIS document with `epcisBody`";

fn shape_error(msg: &str) -> Error {
    serde_json::Error::custom(msg).into()
}

/// Parse one event per line; blank lines are skipped.
pub fn parse_events_jsonl(content: &str) -> Result<Vec<TraceEvent>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| Error::Json {
                line: Some(idx + 1),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use batchtrace_engine::tree_stats;

    /// A single-child chain `L0 -> L1 -> ...` with `depth` levels.
    fn chain(depth: usize) -> String {
        let mut json = String::new();
        for level in 0..depth {
            if level > 0 {
                json.push_str(r#","children":["#);
            }
            json.push_str(&format!(r#"{{"code":"L{}","quantity":1,"unit":"kg""#, level));
        }
        for level in 0..depth {
            json.push('}');
            if level + 1 < depth {
                json.push(']');
            }
        }
        json
    }

    #[test]
    fn test_chain_helper_shape() {
        assert_eq!(
            chain(2),
            r#"{"code":"L0","quantity":1,"unit":"kg","children":[{"code":"L1","quantity":1,"unit":"kg"}]}"#
        );
    }

    #[test]
    fn test_hundred_level_tree_parses() {
        let root = parse_batch_tree(&chain(100)).unwrap();
        let stats = tree_stats(root.as_ref());
        assert_eq!(stats.max_depth, 100);
        assert_eq!(stats.leaf_count, 1);
    }

    #[test]
    fn test_tree_at_depth_limit_parses() {
        let root = parse_batch_tree(&chain(MAX_TREE_DEPTH)).unwrap();
        assert_eq!(tree_stats(root.as_ref()).max_depth, MAX_TREE_DEPTH);
    }

    #[test]
    fn test_tree_past_depth_limit_is_rejected() {
        let err = parse_batch_tree(&chain(MAX_TREE_DEPTH + 1)).unwrap_err();
        assert!(matches!(err, Error::TooDeep { limit } if limit == MAX_TREE_DEPTH));
        assert_eq!(err.to_string(), "batch tree is nested deeper than 1024 levels");
    }

    #[test]
    fn test_nesting_ignores_brackets_in_strings() {
        assert_eq!(json_nesting(r#"{"code":"[[{\"x"}"#), 1);
        assert_eq!(json_nesting(r#"[{"a":[]},{}]"#), 3);
    }

    #[test]
    fn test_trailing_content_after_tree_is_rejected() {
        assert!(parse_batch_tree(r#"{"code":"A"} {"code":"B"}"#).is_err());
    }

    #[test]
    fn test_bad_event_reports_its_index() {
        let array = r#"[{"eventID":"ok"},{"eventTime":"yesterday"}]"#;
        match parse_events_document(array).unwrap_err() {
            Error::Event { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_object_without_epcis_body_is_rejected() {
        let err = parse_events_document(r#"{"bizStep":"a:packing"}"#).unwrap_err();
        assert!(err.to_string().contains("epcisBody"));
    }

    #[test]
    fn test_null_tree_is_absent() {
        assert_eq!(parse_batch_tree("null").unwrap(), None);
    }

    #[test]
    fn test_tree_without_code_is_rejected() {
        let err = parse_batch_tree(r#"{"quantity": 3}"#).unwrap_err();
        assert!(matches!(err, Error::Json { line: None, .. }));
    }

    #[test]
    fn test_events_array_and_epcis_document() {
        let array = r#"[{"bizStep":"urn:epcglobal:cbv:bizstep:packing"},{}]"#;
        assert_eq!(parse_events_document(array).unwrap().len(), 2);

        let epcis = r#"{
            "@context": "https://ref.gs1.org/standards/epcis/2.0.0/epcis-context.jsonld",
            "type": "EPCISDocument",
            "epcisBody": { "eventList": [ {"bizStep": "urn:epcglobal:cbv:bizstep:receiving"} ] }
        }"#;
        let events = parse_events_document(epcis).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].biz_step.as_deref(),
            Some("urn:epcglobal:cbv:bizstep:receiving")
        );
    }

    #[test]
    fn test_jsonl_skips_blank_lines_and_reports_line() {
        let content = "{\"bizStep\":\"a:shipping\"}\n\n{\"bizStep\":\"b:receiving\"}\n";
        assert_eq!(parse_events_jsonl(content).unwrap().len(), 2);

        let broken = "{}\n{not json}\n";
        match parse_events_jsonl(broken).unwrap_err() {
            Error::Json { line, .. } => assert_eq!(line, Some(2)),
            other => panic!("unexpected error: {}", other),
        }
    }
}
