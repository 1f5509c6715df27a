//! Mock bearer credentials for integration tests.

use http::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use loadout_auth_types::identity::DEV_CREDENTIAL_PREFIX;

/// Development identity sent as `Authorization: Bearer dev-<name>`.
pub struct MockAuth {
    pub user_id: String,
}

impl MockAuth {
    /// Identity for `dev-<name>`.
    pub fn dev(name: &str) -> Self {
        Self {
            user_id: format!("{DEV_CREDENTIAL_PREFIX}{name}"),
        }
    }

    /// Full `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.user_id)
    }

    /// Return headers as a client would send them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.bearer()).expect("ascii credential"),
        );
        map
    }
}
