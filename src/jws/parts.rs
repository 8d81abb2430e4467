use crate::error::Error;

pub(super) struct JwsParts<'a> {
    pub(super) header: &'a str,
    pub(super) payload: &'a str,
    pub(super) signature: &'a str,
    /// `header "." payload`, sliced from the token as received.
    pub(super) signing_input: &'a str,
}

pub(super) fn split_jws(token: &str) -> Result<JwsParts<'_>, Error> {
    let segments: Vec<&str> = token.split('.').collect();
    let &[header, payload, signature] = segments.as_slice() else {
        return Err(Error::MalformedToken(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    };
    if header.is_empty() {
        return Err(Error::MalformedToken("empty header segment".to_string()));
    }
    if signature.is_empty() {
        return Err(Error::MalformedToken("empty signature segment".to_string()));
    }
    Ok(JwsParts {
        header,
        payload,
        signature,
        signing_input: &token[..header.len() + 1 + payload.len()],
    })
}

pub(super) fn join_signing_input(header: &str, payload: &str) -> String {
    let mut out = String::with_capacity(header.len() + 1 + payload.len());
    out.push_str(header);
    out.push('.');
    out.push_str(payload);
    out
}
