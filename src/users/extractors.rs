use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Session token read from the `Authorization` header, raw or `Bearer <token>`.
///
/// Absence is not rejected here; the delete handler reports it as a bad field.
pub struct SessionToken(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|v| {
                v.strip_prefix("Bearer ")
                    .or_else(|| v.strip_prefix("bearer "))
                    .unwrap_or(v)
                    .trim()
                    .to_string()
            })
            .filter(|t| !t.is_empty());
        Ok(SessionToken(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Option<String> {
        let mut builder = Request::builder().uri("/users/id-1");
        if let Some(h) = header {
            builder = builder.header(AUTHORIZATION, h);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        let SessionToken(token) = SessionToken::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        token
    }

    #[tokio::test]
    async fn reads_raw_and_bearer_tokens() {
        assert_eq!(extract(Some("abc.def.ghi")).await.as_deref(), Some("abc.def.ghi"));
        assert_eq!(extract(Some("Bearer abc.def.ghi")).await.as_deref(), Some("abc.def.ghi"));
        assert_eq!(extract(Some("bearer abc")).await.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn missing_or_blank_header_is_none() {
        assert_eq!(extract(None).await, None);
        assert_eq!(extract(Some("Bearer ")).await, None);
    }
}
