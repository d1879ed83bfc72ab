use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{self, Header},
    TypedHeader,
};

use crate::{errors::AppError, AppState};

static X_AUTH_TOKEN: HeaderName = HeaderName::from_static("x-auth-token");

/// Access token issued at sign-in, sent as `X-AUTH-TOKEN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XAuthToken(String);

impl XAuthToken {
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl Header for XAuthToken {
    fn name() -> &'static HeaderName {
        &X_AUTH_TOKEN
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        let token = value.to_str().map_err(|_| headers::Error::invalid())?;
        Ok(Self(token.trim().to_string()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}

pub async fn require_auth_token(
    State(state): State<AppState>,
    auth_header: Option<TypedHeader<XAuthToken>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(TypedHeader(auth)) = auth_header else {
        return Err(AppError::unauthorized(
            "missing_token",
            "missing X-AUTH-TOKEN header",
        ));
    };

    if auth.token() != state.api_token.as_ref() {
        return Err(AppError::unauthorized(
            "invalid_token",
            "invalid access token",
        ));
    }

    Ok(next.run(request).await)
}
