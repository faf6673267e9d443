//! Encrypted query payload codec
//!
//! A query request carries `salt` and `payload` sparse fields; the
//! response echoes the salt inside a small JSON object and ships it as
//! `payload` = base64(3DES-CBC(JSON)). Answering the feature query itself
//! is the job of an external licensing backend; this module only frames
//! and encrypts the JSON it is given.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use licrypt_api::{Error, Result};

use crate::frame::FrameCodec;
use crate::keyset::TripleDesKeyset;

/// Sparse request fields of a feature query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Caller-chosen value echoed back inside the encrypted response
    pub salt: i64,
    /// Free-form request body, e.g. `{"call":"FeatureInfo",...}`
    pub payload: Value,
}

impl QueryRequest {
    /// Parse a request from its JSON form
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|err| Error::InvalidParameter {
            context: "query request",
            message: err.to_string(),
        })
    }

    /// The `call` discriminator of the request body, if present
    pub fn call(&self) -> Option<&str> {
        self.payload.get("call").and_then(Value::as_str)
    }
}

/// Builds encrypted response payloads for a fixed keyset
pub struct QueryResponder {
    codec: FrameCodec,
}

impl QueryResponder {
    /// A responder over the keyset from its 64-hex-character secret form
    pub fn from_secret(secret: &str) -> Result<Self> {
        let keyset = TripleDesKeyset::from_hex(secret)?;
        Ok(QueryResponder {
            codec: FrameCodec::new(&keyset),
        })
    }

    /// A responder over an already-parsed keyset
    pub fn new(keyset: &TripleDesKeyset) -> Self {
        QueryResponder {
            codec: FrameCodec::new(keyset),
        }
    }

    /// Encrypt an ok-response carrying `fields` next to the echoed salt
    pub fn ok_response(&self, salt: i64, fields: &Map<String, Value>) -> Result<String> {
        let mut body = Map::new();
        body.insert("status".to_string(), json!("ok"));
        body.insert("salt".to_string(), json!(salt));
        for (key, value) in fields {
            body.insert(key.clone(), value.clone());
        }
        self.encrypt_json(&Value::Object(body))
    }

    /// Encrypt an error-response with a backend status code
    pub fn error_response(&self, salt: i64, code: i64) -> Result<String> {
        self.encrypt_json(&json!({
            "status": "error",
            "code": code.to_string(),
            "salt": salt,
        }))
    }

    /// Encrypt an arbitrary JSON value into the transport payload
    pub fn encrypt_json(&self, value: &Value) -> Result<String> {
        let body = serde_json::to_string(value).map_err(|err| Error::InvalidParameter {
            context: "query response",
            message: err.to_string(),
        })?;
        self.codec.encrypt_to_base64(body.as_bytes())
    }

    /// Decrypt a transport payload back into JSON; the client side of the
    /// channel and the test suite use this
    pub fn open(&self, payload: &str) -> Result<Value> {
        let plaintext = self.codec.decrypt_from_base64(payload)?;
        serde_json::from_slice(&plaintext).map_err(|err| Error::InvalidParameter {
            context: "query response",
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "00112233445566778899AABBCCDDEEFFFEDCBA98765432100123456789ABCDEF";

    #[test]
    fn test_request_parsing() {
        let req = QueryRequest::from_json(
            r#"{"salt":7,"payload":{"call":"FeatureInfo","feature":"skeleton"}}"#,
        )
        .unwrap();
        assert_eq!(req.salt, 7);
        assert_eq!(req.call(), Some("FeatureInfo"));

        assert!(QueryRequest::from_json("{}").is_err());
    }

    #[test]
    fn test_ok_response_round_trip() {
        let responder = QueryResponder::from_secret(SECRET).unwrap();
        let mut fields = Map::new();
        fields.insert("version".to_string(), json!("1.0"));

        let payload = responder.ok_response(7, &fields).unwrap();
        let opened = responder.open(&payload).unwrap();

        assert_eq!(opened["status"], "ok");
        assert_eq!(opened["salt"], 7);
        assert_eq!(opened["version"], "1.0");
    }

    #[test]
    fn test_error_response_round_trip() {
        let responder = QueryResponder::from_secret(SECRET).unwrap();
        let payload = responder.error_response(3, 22).unwrap();
        let opened = responder.open(&payload).unwrap();

        assert_eq!(opened["status"], "error");
        assert_eq!(opened["code"], "22");
        assert_eq!(opened["salt"], 3);
    }

    #[test]
    fn test_payload_is_base64_wrapped_ciphertext() {
        let responder = QueryResponder::from_secret(SECRET).unwrap();
        let payload = responder
            .encrypt_json(&json!({"status":"ok","salt":1}))
            .unwrap();
        assert!(!payload.contains("ok"));
        assert!(licrypt_algorithms::base64::decode(&payload).is_ok());
    }
}
