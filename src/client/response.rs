//! Response parsing.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::transport::HttpResponse;
use crate::models::FortemResponse;
use crate::{Error, Result};

/// Parse a buffered response into a typed envelope.
///
/// The body is always parsed as JSON first, so a malformed body fails with
/// [`Error::Json`] whatever the status. A 2xx body is then deserialized as
/// [`FortemResponse<T>`]; any other status becomes
/// [`Error::Authentication`] for 401 or [`Error::Api`] otherwise.
pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<FortemResponse<T>> {
    let body: Value = serde_json::from_slice(&response.body)?;

    if response.status.is_success() {
        return Ok(serde_json::from_value(body)?);
    }

    Err(Error::from_api_response(response.status.as_u16(), body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NonceResponse;
    use reqwest::StatusCode;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse::new(StatusCode::from_u16(status).unwrap(), body.to_string())
    }

    #[test]
    fn test_success_envelope() {
        let parsed: FortemResponse<NonceResponse> =
            parse_response(response(200, r#"{"statusCode":200,"data":{"nonce":"n1"}}"#)).unwrap();
        assert_eq!(parsed.status_code, 200);
        assert_eq!(parsed.data.nonce, "n1");
    }

    #[test]
    fn test_malformed_body_is_json_error() {
        let err = parse_response::<NonceResponse>(response(200, "<html>")).unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        let err = parse_response::<NonceResponse>(response(500, "not json")).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_unauthorized_is_auth_error() {
        let err = parse_response::<NonceResponse>(response(
            401,
            r#"{"statusCode":401,"message":"Invalid API key"}"#,
        ))
        .unwrap_err();
        match err {
            Error::Authentication(message) => assert_eq!(message, "Invalid API key"),
            other => panic!("Expected Authentication error, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_is_api_error() {
        let err = parse_response::<NonceResponse>(response(
            404,
            r#"{"statusCode":404,"message":"User not found","code":"USER_NOT_FOUND"}"#,
        ))
        .unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.code(), Some("USER_NOT_FOUND"));
        assert!(err.to_string().contains("User not found"));
    }
}
