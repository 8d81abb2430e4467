mod canonical;

use crate::algorithm::Algorithm;
use crate::base64url;
use crate::error::Error;
use serde_json::{Map, Value};

use canonical::canonical_object;

/// Protected header parameters for signing. `alg` is always taken from the
/// algorithm argument, never from the extra fields.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderParams {
    alg: Algorithm,
    fields: Map<String, Value>,
}

impl HeaderParams {
    pub fn new(alg: Algorithm) -> Self {
        Self {
            alg,
            fields: Map::new(),
        }
    }

    pub fn with_kid(self, kid: impl Into<String>) -> Self {
        self.with_field("kid", Value::String(kid.into()))
    }

    pub fn with_typ(self, typ: impl Into<String>) -> Self {
        self.with_field("typ", Value::String(typ.into()))
    }

    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn with_fields(mut self, fields: Map<String, Value>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn alg(&self) -> Algorithm {
        self.alg
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        encode_header(self.alg, &self.fields)
    }
}

/// A protected header as it appeared in a token.
#[derive(Debug, Clone, PartialEq)]
pub struct JwsHeader {
    pub alg: String,
    pub kid: Option<String>,
    pub typ: Option<String>,
    pub raw: Map<String, Value>,
}

impl JwsHeader {
    pub fn algorithm(&self) -> Result<Algorithm, Error> {
        self.alg.parse()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.raw.get(name)
    }
}

pub fn encode_header(alg: Algorithm, extra: &Map<String, Value>) -> Vec<u8> {
    let mut fields = extra.clone();
    fields.insert("alg".to_string(), Value::String(alg.as_str().to_string()));
    canonical_object(&fields).into_bytes()
}

pub fn decode_header(bytes: &[u8]) -> Result<JwsHeader, Error> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| Error::MalformedHeader(format!("header json error: {e}")))?;
    let Value::Object(raw) = value else {
        return Err(Error::MalformedHeader(
            "header must be a json object".to_string(),
        ));
    };
    let alg = match raw.get("alg") {
        None => return Err(Error::MissingAlgorithm),
        Some(Value::String(alg)) => alg.clone(),
        Some(_) => {
            return Err(Error::MalformedHeader(
                "alg must be a string".to_string(),
            ))
        }
    };
    let kid = optional_string(&raw, "kid")?;
    let typ = optional_string(&raw, "typ")?;
    Ok(JwsHeader { alg, kid, typ, raw })
}

pub fn encode_payload(payload: &[u8]) -> String {
    base64url::encode(payload)
}

pub fn decode_payload(segment: &str, max_bytes: usize) -> Result<Vec<u8>, Error> {
    base64url::decode_bounded(segment, "payload", max_bytes)
}

fn optional_string(raw: &Map<String, Value>, name: &str) -> Result<Option<String>, Error> {
    match raw.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(Error::MalformedHeader(format!("{name} must be a string"))),
    }
}
