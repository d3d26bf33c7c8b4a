//! End-to-end tests over the public API: byte sources, explicit chunk
//! boundaries, and the event-source seam.

use std::io::Cursor;

use jsonsift::{
    BasicParse, ChunkIterSource, Items, JsonError, KvItems, Parse, ParseEvent, ParseOptions,
    ReadSource, StrSource, Value, basic_parse, items, kvitems, parse,
};

const DOC: &str = r#"{"rows": [{"id": 1, "name": "ana"}, {"id": 2, "name": "bo"}], "total": 2}"#;

fn ids<S: jsonsift::ChunkSource>(stream: Items<Parse<BasicParse<S>>>) -> Vec<Value> {
    stream
        .map(|row| row.unwrap().as_object().unwrap()["id"].clone())
        .collect()
}

#[test]
fn items_over_byte_reader() {
    let source = ReadSource::new(Cursor::new(DOC.as_bytes()));
    let found = ids(items(source, "rows.item", ParseOptions::default()).unwrap());
    assert_eq!(found, vec![Value::from(1), Value::from(2)]);
}

#[test]
fn tiny_buffer_sizes_do_not_change_output() {
    let baseline: Vec<_> = parse(StrSource::new(DOC), ParseOptions::default())
        .unwrap()
        .collect();
    for buffer_size in [1, 2, 3, 5, 16] {
        let options = ParseOptions {
            buffer_size,
            ..Default::default()
        };
        let source = ReadSource::new(Cursor::new(DOC.as_bytes()));
        let tagged: Vec<_> = parse(source, options).unwrap().collect();
        assert_eq!(tagged, baseline, "buffer_size {buffer_size} diverged");
    }
}

#[test]
fn multibyte_sequences_split_across_reads() {
    let doc = r#"{"héllo": "wörld 😀"}"#;
    let options = ParseOptions {
        buffer_size: 1,
        ..Default::default()
    };
    let source = ReadSource::new(Cursor::new(doc.as_bytes()));
    let events: Vec<_> = basic_parse(source, options)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        events,
        vec![
            ParseEvent::StartMap,
            ParseEvent::MapKey("héllo".to_string()),
            ParseEvent::String("wörld 😀".to_string()),
            ParseEvent::EndMap,
        ]
    );
}

#[test]
fn invalid_utf8_from_byte_source() {
    let bytes: &[u8] = b"{\"a\": \"\xFF\"}";
    let source = ReadSource::new(Cursor::new(bytes));
    let last = basic_parse(source, ParseOptions::default())
        .unwrap()
        .last()
        .unwrap();
    assert_eq!(last, Err(JsonError::InvalidUtf8 { offset: 7 }));
}

#[test]
fn explicit_chunk_boundaries_inside_tokens() {
    // Boundaries inside an escape sequence, a number, and a keyword.
    let chunks = vec!["{\"a\\", "\"b\": [12", ".5, tr", "ue]}"];
    let source = ChunkIterSource::new(chunks);
    let events: Vec<_> = basic_parse(source, ParseOptions::default())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    let whole = StrSource::new("{\"a\\\"b\": [12.5, true]}");
    let expected: Vec<_> = basic_parse(whole, ParseOptions::default())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(events, expected);
}

#[test]
fn kvitems_over_reader() {
    let source = ReadSource::new(Cursor::new(DOC.as_bytes()));
    let pairs: Vec<_> = kvitems(source, "rows.item", ParseOptions::default())
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["id", "name", "id", "name"]);
}

#[test]
fn streams_are_one_pass() {
    let mut stream = items(StrSource::new(DOC), "total", ParseOptions::default()).unwrap();
    assert_eq!(stream.next(), Some(Ok(Value::from(2))));
    assert_eq!(stream.next(), None);
    // Exhausted for good; a fresh session is required to run again.
    assert_eq!(stream.next(), None);
}

#[test]
fn layers_accept_foreign_event_sources() {
    // Any iterator with the right item type stands in for the built-in
    // backend — here, a pre-recorded event stream.
    let recorded = vec![
        Ok(ParseEvent::StartArray),
        Ok(ParseEvent::Number(jsonsift::Number::Int(7))),
        Ok(ParseEvent::EndArray),
    ];
    let found: Vec<_> = Items::over(Parse::over(recorded.into_iter()), "item")
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(found, vec![Value::from(7)]);

    let recorded = vec![
        Ok(ParseEvent::StartMap),
        Ok(ParseEvent::MapKey("a".to_string())),
        Ok(ParseEvent::Boolean(true)),
        Ok(ParseEvent::EndMap),
    ];
    let pairs: Vec<_> = KvItems::over(Parse::over(recorded.into_iter()), "")
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(pairs, vec![("a".to_string(), Value::Boolean(true))]);
}

#[test]
fn source_errors_surface_as_json_errors() {
    struct FailingReader;
    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk on fire"))
        }
    }

    let source = ReadSource::new(FailingReader);
    let first = basic_parse(source, ParseOptions::default())
        .unwrap()
        .next()
        .unwrap();
    assert_eq!(first, Err(JsonError::Source("disk on fire".to_string())));
}
