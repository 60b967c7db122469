use fuel_portal_common::{
    api::{ErrorDetail, RegisterResponse},
    travel::{CreateTravelRequest, TravelLogEntry},
    user::{
        Credentials, RegisterUserRequest, Role, TokenResponse, UpdateProfileRequest,
        UpdateRoleRequest, User,
    },
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::session::{auth_header_value, BrowserTokenStore, TokenStore};

/// Api client used throughout the portal, reading the browser token slot
pub type PortalApi = Api<BrowserTokenStore>;

/// Single configured client for the FuelTrackr REST API. Every outgoing
/// request passes through [attach_token][Api::attach_token], picking up
/// whatever bearer token currently sits in the injected store.
#[derive(Clone, Copy)]
pub struct Api<S> {
    url: &'static str,
    store: S,
}

impl<S: TokenStore> Api<S> {
    pub fn new(url: &'static str, store: S) -> Self {
        Self { url, store }
    }

    /// True iff a session token is present in the store. No expiry tracking
    /// happens client side.
    pub fn session_exists(&self) -> bool {
        self.store.get().is_some()
    }

    /// Authenticate against the backend. On success the returned token is
    /// stored for all subsequent requests and the profile of the now current
    /// user is fetched to drive the post-login navigation. Nothing is stored
    /// when the login is rejected.
    pub async fn login(&self, credentials: &Credentials) -> Result<User> {
        let url = format!("{}/users/login", self.url);
        let response = Request::post(&url).json(credentials)?.send().await?;
        let session: TokenResponse = parse_response(response).await?;
        self.store.set(&session.access_token);
        self.me().await
    }

    pub async fn register(&self, request: &RegisterUserRequest) -> Result<RegisterResponse> {
        let url = format!("{}/users/register", self.url);
        let response = Request::post(&url).json(request)?.send().await?;
        parse_response(response).await
    }

    pub async fn me(&self) -> Result<User> {
        let url = format!("{}/users/me", self.url);
        let response = self.attach_token(Request::get(&url)).send().await?;
        parse_response(response).await
    }

    pub async fn update_me(&self, request: &UpdateProfileRequest) -> Result<User> {
        let url = format!("{}/users/me", self.url);
        let response = self
            .attach_token(Request::put(&url))
            .json(request)?
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn all_users(&self) -> Result<Vec<User>> {
        let url = format!("{}/users/all", self.url);
        let response = self.attach_token(Request::get(&url)).send().await?;
        parse_response(response).await
    }

    pub async fn update_role(&self, email: &str, role: Role) -> Result<User> {
        let url = format!("{}/users/{email}", self.url);
        let request = UpdateRoleRequest { role };
        let response = self
            .attach_token(Request::put(&url))
            .json(&request)?
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn delete_user(&self, email: &str) -> Result<()> {
        let url = format!("{}/users/{email}", self.url);
        let response = self.attach_token(Request::delete(&url)).send().await?;
        if response.ok() {
            return Ok(());
        }
        Err(response_error(response).await)
    }

    pub async fn my_travels(&self) -> Result<Vec<TravelLogEntry>> {
        let url = format!("{}/travels/me", self.url);
        let response = self.attach_token(Request::get(&url)).send().await?;
        parse_response(response).await
    }

    pub async fn create_travel(&self, request: &CreateTravelRequest) -> Result<TravelLogEntry> {
        let url = format!("{}/travels/", self.url);
        let response = self
            .attach_token(Request::post(&url))
            .json(request)?
            .send()
            .await?;
        parse_response(response).await
    }

    /// Set the `Authorization` header when a token is present, leaving the
    /// request unauthenticated otherwise
    fn attach_token(&self, request: Request) -> Request {
        match auth_header_value(&self.store) {
            Some(header) => request.header("Authorization", &header),
            None => request,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    #[error("{0}")]
    Api(String),
    #[error("Unexpected response status {0}")]
    Status(u16),
}

async fn parse_response<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    if response.ok() {
        return Ok(response.json::<T>().await?);
    }
    Err(response_error(response).await)
}

async fn response_error(response: Response) -> Error {
    let status = response.status();
    match response.text().await {
        Ok(body) => extract_error(status, &body),
        Err(error) => error.into(),
    }
}

/// Map a rejected response onto the backend's `detail` payload, falling back
/// to the raw body text and then the bare status code
fn extract_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorDetail>(body) {
        Ok(payload) => Error::Api(payload.detail),
        Err(_) if body.trim().is_empty() => Error::Status(status),
        Err(_) => Error::Api(body.to_owned()),
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::{extract_error, Error};

    #[rstest]
    #[case::backend_detail(400, r#"{"detail":"User already exists"}"#, "User already exists")]
    #[case::plain_text_body(502, "bad gateway", "bad gateway")]
    #[case::malformed_json(422, r#"{"detail":"#, r#"{"detail":"#)]
    fn extract_error_should_surface_message(
        #[case] status: u16,
        #[case] body: &str,
        #[case] expected: &str,
    ) {
        match extract_error(status, body) {
            Error::Api(message) => assert_eq!(message, expected),
            other => panic!("Expected an api error, got {other:?}"),
        }
    }

    #[test]
    fn extract_error_should_fall_back_to_status_when_body_empty() {
        match extract_error(401, "  ") {
            Error::Status(status) => assert_eq!(status, 401),
            other => panic!("Expected a status error, got {other:?}"),
        }
    }
}
