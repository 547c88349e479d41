#![cfg(feature = "tracing")]

use std::fmt;
use std::sync::{Arc, Mutex};

use taggedunion::{dispatch, TaggedUnion};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

type Value = TaggedUnion<(u8, Point, char)>;

type Fields = Vec<(String, String)>;

/// Keeps the fields of every event it sees.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<Fields>>>);

struct Record<'a>(&'a mut Fields);

impl Visit for Record<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

impl<S: Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::new();
        event.record(&mut Record(&mut fields));
        self.0.lock().unwrap().push(fields);
    }
}

fn captured(f: impl FnOnce()) -> Vec<Fields> {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    tracing::subscriber::with_default(subscriber, f);

    let events = capture.0.lock().unwrap().clone();
    events
}

fn field<'a>(fields: &'a Fields, name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[test]
fn wrong_alternative_is_logged_with_positions() {
    let events = captured(|| {
        let value = Value::create('x');
        assert!(value.get::<Point, _>().is_err());
    });

    assert_eq!(events.len(), 1);
    let fields = &events[0];
    assert!(field(fields, "requested").unwrap().ends_with("Point"));
    assert_eq!(field(fields, "index"), Some("1"));
    assert_eq!(field(fields, "active"), Some("2"));
    assert_eq!(field(fields, "uninhabited"), Some("false"));
    assert_eq!(field(fields, "message"), Some("inactive alternative access"));
}

#[test]
fn empty_union_is_logged_as_uninhabited() {
    let events = captured(|| {
        let mut value = Value::new();
        assert!(value.get_mut::<u8, _>().is_err());
        assert!(value.copied::<char, _>().is_err());
    });

    assert_eq!(events.len(), 2);
    assert_eq!(field(&events[0], "requested"), Some("u8"));
    assert_eq!(field(&events[0], "index"), Some("0"));
    assert_eq!(field(&events[0], "active"), Some("3"));
    assert_eq!(field(&events[0], "uninhabited"), Some("true"));
    assert_eq!(field(&events[1], "requested"), Some("char"));
    assert_eq!(field(&events[1], "index"), Some("2"));
}

#[test]
fn successful_access_is_silent() {
    let events = captured(|| {
        let mut value = Value::create(Point { x: 1, y: 2 });
        assert_eq!(value.get::<Point, _>(), Ok(&Point { x: 1, y: 2 }));
        value.get_mut::<Point, _>().unwrap().y = 3;
        assert_eq!(value.copied::<Point, _>(), Ok(Point { x: 1, y: 3 }));

        let sum = dispatch!(value => {
            Point(point) => point.x + point.y,
            _ => 0,
        });
        assert_eq!(sum, Some(4));
    });

    assert!(events.is_empty());
}
