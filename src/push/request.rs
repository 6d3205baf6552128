//! Owner credentials and push request construction.

use std::fmt;
use std::sync::LazyLock;

use http::header::{CONTENT_TYPE, HeaderValue};
use url::Url;
use url::form_urlencoded;

use super::HttpRequest;

/// Endpoint used when no other is configured.
pub const DEFAULT_ENDPOINT: &str = "http://push.doday.net/api/push";

static DEFAULT_ENDPOINT_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid absolute URL")
});

/// Returns [`DEFAULT_ENDPOINT`] as a parsed URL.
#[must_use]
pub fn default_endpoint() -> Url {
    DEFAULT_ENDPOINT_URL.clone()
}

/// Form field names sent with every push.
pub mod field {
    /// Owner UUID.
    pub const UUID: &str = "uuid";
    /// Owner secret key.
    pub const SECRET_KEY: &str = "secret_key";
    /// Push code.
    pub const CODE: &str = "code";
    /// Push body.
    pub const BODY: &str = "body";
}

/// Credentials identifying the push sender.
///
/// The secret key is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Owner {
    /// Identity UUID, sent as-is.
    pub uuid: String,
    /// Secret key paired with the UUID.
    pub secret_key: String,
}

impl Owner {
    /// Creates a new owner.
    #[must_use]
    pub fn new(uuid: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owner")
            .field("uuid", &self.uuid)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Builds the form-encoded POST request for one push.
///
/// Field values are taken verbatim; the only transformation applied is
/// `application/x-www-form-urlencoded` encoding.
#[must_use]
pub fn build_push_request(endpoint: &Url, owner: &Owner, code: &str, body: &str) -> HttpRequest {
    let form = form_urlencoded::Serializer::new(String::new())
        .append_pair(field::UUID, &owner.uuid)
        .append_pair(field::SECRET_KEY, &owner.secret_key)
        .append_pair(field::CODE, code)
        .append_pair(field::BODY, body)
        .finish();

    HttpRequest::post(endpoint.clone())
        .with_header(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        )
        .with_body(form.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_form(bytes: &[u8]) -> Vec<(String, String)> {
        form_urlencoded::parse(bytes).into_owned().collect()
    }

    fn test_owner() -> Owner {
        Owner::new("6f1c8a52-3d0e-4a44-9b7e-1f2a3b4c5d6e", "s3cr3t")
    }

    #[test]
    fn default_endpoint_parses() {
        assert_eq!(default_endpoint().as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn request_is_form_post_to_endpoint() {
        let endpoint = Url::parse("http://push.example.com/api/push").unwrap();
        let req = build_push_request(&endpoint, &test_owner(), "alarm", "hello");

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.url, endpoint);
        assert_eq!(
            req.headers.get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn body_contains_the_four_fields_in_order() {
        let req = build_push_request(&default_endpoint(), &test_owner(), "alarm", "hello");
        let fields = decode_form(req.body.as_deref().unwrap());

        assert_eq!(
            fields,
            vec![
                ("uuid".to_string(), test_owner().uuid),
                ("secret_key".to_string(), "s3cr3t".to_string()),
                ("code".to_string(), "alarm".to_string()),
                ("body".to_string(), "hello".to_string()),
            ]
        );
    }

    #[test]
    fn reserved_characters_survive_decoding() {
        let owner = Owner::new("id with space", "k&ey=+/%");
        let body = "línea 1\nline 2 & more = 100%";
        let req = build_push_request(&default_endpoint(), &owner, "c?d#e", body);

        let raw = String::from_utf8(req.body.clone().unwrap()).unwrap();
        assert!(!raw.contains('\n'));
        assert_eq!(raw.matches('&').count(), 3);

        let fields = decode_form(req.body.as_deref().unwrap());
        assert_eq!(fields[0].1, "id with space");
        assert_eq!(fields[1].1, "k&ey=+/%");
        assert_eq!(fields[2].1, "c?d#e");
        assert_eq!(fields[3].1, body);
    }

    #[test]
    fn empty_values_are_kept() {
        let owner = Owner::new("", "");
        let req = build_push_request(&default_endpoint(), &owner, "", "");

        let fields = decode_form(req.body.as_deref().unwrap());
        assert_eq!(fields.len(), 4);
        assert!(fields.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn debug_redacts_secret_key() {
        let debug = format!("{:?}", test_owner());

        assert!(debug.contains("6f1c8a52"));
        assert!(!debug.contains("s3cr3t"));
    }
}
