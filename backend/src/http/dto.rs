//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::echo::EchoReply;

/// Response body of `POST /process-data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDataResponse {
    /// Always "Data enroute!"
    pub message: String,
    /// The request's `input_text`, or an empty string
    pub input_text: String,
}

impl From<EchoReply> for ProcessDataResponse {
    fn from(reply: EchoReply) -> Self {
        Self {
            message: reply.message.to_string(),
            input_text: reply.input_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::echo::InputText;

    #[test]
    fn test_serializes_message_then_input_text() {
        let response: ProcessDataResponse =
            EchoReply::new(InputText::Provided("hello".to_string())).into();
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"Data enroute!","input_text":"hello"}"#);
    }
}
