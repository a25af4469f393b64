//! Adapts the loosely specified generation payload into a canonical question list.
//!
//! The upstream service has returned questions under several envelopes over time,
//! so extraction walks an ordered list of shapes: the first shape that finds an
//! array wins, even if that array turns out to be empty.

use serde_json::Value;

use crate::model::QuestionRecord;

/// A payload envelope the normalizer knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The payload itself is the array.
    Bare,
    /// The array lives under the given top-level key.
    Field(&'static str),
}

/// Probe order, highest priority first.
pub const SHAPES: [Shape; 5] = [
    Shape::Field("perguntas"),
    Shape::Bare,
    Shape::Field("data"),
    Shape::Field("questions"),
    Shape::Field("result"),
];

impl Shape {
    fn extract(self, raw: &Value) -> Option<&Vec<Value>> {
        match self {
            Shape::Bare => raw.as_array(),
            Shape::Field(key) => raw.get(key).and_then(Value::as_array),
        }
    }
}

/// Normalize a raw payload into questions.
///
/// Returns `None` when no known shape matches or the matched array is empty.
#[must_use]
pub fn normalize(raw: &Value) -> Option<Vec<QuestionRecord>> {
    normalize_with_shape(raw).map(|(_, questions)| questions)
}

/// Like [`normalize`], but also reports which envelope matched.
#[must_use]
pub fn normalize_with_shape(raw: &Value) -> Option<(Shape, Vec<QuestionRecord>)> {
    let (shape, items) = SHAPES
        .iter()
        .find_map(|shape| shape.extract(raw).map(|items| (*shape, items)))?;

    if items.is_empty() {
        return None;
    }

    let questions = items.iter().map(QuestionRecord::from_value).collect();
    Some((shape, questions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items() -> Value {
        json!([
            {
                "pergunta": "Largest planet?",
                "alternativas": ["A) Mars", "B) Jupiter"],
                "gabarito": "B",
                "explicacao": "Jupiter is the largest."
            },
            {
                "pergunta": "H2O is?",
                "alternativas": ["A) Water", "B) Salt"],
                "gabarito": "A"
            }
        ])
    }

    #[test]
    fn all_supported_shapes_yield_same_questions() {
        let expected = normalize(&items()).expect("bare array");
        assert_eq!(expected.len(), 2);

        for key in ["perguntas", "data", "questions", "result"] {
            let mut envelope = serde_json::Map::new();
            envelope.insert(key.to_string(), items());
            let wrapped = Value::Object(envelope);
            let (shape, questions) = normalize_with_shape(&wrapped).expect(key);
            assert_eq!(shape, Shape::Field(key));
            assert_eq!(questions, expected, "shape {key}");
        }
    }

    #[test]
    fn unrecognized_payloads_are_absent() {
        assert_eq!(normalize(&json!({})), None);
        assert_eq!(normalize(&Value::Null), None);
        assert_eq!(normalize(&json!([])), None);
        assert_eq!(normalize(&json!({ "items": items() })), None);
        assert_eq!(normalize(&json!({ "data": "not an array" })), None);
        assert_eq!(normalize(&json!("text")), None);
    }

    #[test]
    fn perguntas_takes_priority_over_other_keys() {
        let raw = json!({
            "perguntas": [{ "pergunta": "first" }],
            "data": [{ "pergunta": "second" }]
        });
        let questions = normalize(&raw).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "first");
    }

    #[test]
    fn later_keys_follow_priority_order() {
        let raw = json!({
            "result": [{ "pergunta": "result" }],
            "questions": [{ "pergunta": "questions" }]
        });
        let (shape, questions) = normalize_with_shape(&raw).unwrap();
        assert_eq!(shape, Shape::Field("questions"));
        assert_eq!(questions[0].prompt, "questions");
    }

    #[test]
    fn empty_match_does_not_fall_through() {
        let raw = json!({ "perguntas": [], "data": items() });
        assert_eq!(normalize(&raw), None);
    }

    #[test]
    fn non_object_records_become_blank_entries() {
        let raw = json!({ "data": [1, { "pergunta": "ok" }] });
        let questions = normalize(&raw).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0], QuestionRecord::default());
        assert_eq!(questions[1].prompt, "ok");
    }
}
