//! Echo domain logic.
//!
//! Everything the HTTP layer needs to answer a request, without any HTTP
//! types: the fixed texts and the `input_text` extraction rules.
//!
//! The request body is parsed into a loosely typed [`serde_json::Value`]
//! first. [`extract_input_text`] then inspects its shape and reports which
//! branch applied. Every variant other than [`InputText::Provided`] echoes
//! an empty string.

use serde_json::Value;

/// Body returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to da future";

/// Fixed `message` field of every `POST /process-data` reply.
pub const ENROUTE_MESSAGE: &str = "Data enroute!";

/// Name of the request field that gets echoed.
pub const INPUT_TEXT_FIELD: &str = "input_text";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Outcome of looking up `input_text` in a parsed request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputText {
    /// The body is an object with a string `input_text`.
    Provided(String),
    /// The body is an object without an `input_text` key.
    Missing,
    /// `input_text` is present but holds a non-string JSON value.
    WrongType(&'static str),
    /// The body is valid JSON but not an object.
    NotAnObject(&'static str),
}

impl InputText {
    /// Text to echo back. Every non-`Provided` branch echoes `""`.
    pub fn into_text(self) -> String {
        match self {
            InputText::Provided(text) => text,
            InputText::Missing | InputText::WrongType(_) | InputText::NotAnObject(_) => {
                String::new()
            }
        }
    }

}

/// Parse a raw request body into a loosely typed JSON value.
///
/// A leading UTF-8 byte order mark is skipped. Escaped lone surrogates such
/// as `"\ud800"` are rejected: they have no `String` representation.
pub fn parse_body(body: &[u8]) -> Result<Value, serde_json::Error> {
    let json = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    serde_json::from_slice(json)
}

/// Extract `input_text` from a parsed request body.
pub fn extract_input_text(body: Value) -> InputText {
    let mut object = match body {
        Value::Object(object) => object,
        other => return InputText::NotAnObject(json_kind(&other)),
    };

    match object.remove(INPUT_TEXT_FIELD) {
        Some(Value::String(text)) => InputText::Provided(text),
        Some(other) => InputText::WrongType(json_kind(&other)),
        None => InputText::Missing,
    }
}

/// Short name of a JSON value's kind, used in log events.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reply to an echo request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoReply {
    pub message: &'static str,
    pub input_text: String,
}

impl EchoReply {
    pub fn new(input: InputText) -> Self {
        Self {
            message: ENROUTE_MESSAGE,
            input_text: input.into_text(),
        }
    }
}
