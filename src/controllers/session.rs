use tracing::info;

use super::{snippets, ActionError, ActionResult, Notice};
use crate::api::PlaygroundApi;
use crate::models::Credentials;
use crate::state::AppState;

/// Logs in and, on success, loads the user's snippets.
pub async fn login(
    api: &dyn PlaygroundApi,
    state: &mut AppState,
    credentials: &Credentials,
) -> ActionResult {
    if state.session.is_authenticated() {
        return Err(ActionError::Invalid("You are already logged in"));
    }
    if !credentials.is_complete() {
        return Err(ActionError::Invalid("Please enter username and password"));
    }

    let response = api
        .login(credentials)
        .await
        .map_err(ActionError::failed("Invalid username or password"))?;
    state.session.set_token(response.token);
    info!(
        event_name = "session.login",
        event_domain = "session",
        username = credentials.username.as_str(),
        "Logged in"
    );

    // The login stands even if the list can't be fetched right now.
    snippets::reload_after_change(api, state, "login").await;

    Ok(Notice::new("Logged in successfully"))
}

/// Ends the session on the backend, then forgets the token and the snippet cache.
pub async fn logout(api: &dyn PlaygroundApi, state: &mut AppState) -> ActionResult {
    let token = state
        .session
        .token()
        .ok_or(ActionError::Invalid("You are not logged in"))?;

    api.logout(token)
        .await
        .map_err(ActionError::failed("Failed to log out"))?;
    state.clear_session();
    info!(
        event_name = "session.logout",
        event_domain = "session",
        "Logged out"
    );

    Ok(Notice::new("Logged out successfully"))
}

/// The combined login/logout button: logs out when a token is held, logs in otherwise.
pub async fn toggle(
    api: &dyn PlaygroundApi,
    state: &mut AppState,
    credentials: &Credentials,
) -> ActionResult {
    if state.session.is_authenticated() {
        logout(api, state).await
    } else {
        login(api, state, credentials).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpApi;
    use crate::config::ApiConfig;
    use crate::state::AuthIndicator;
    use mockito::{Matcher, Server};

    fn api_for(server: &Server) -> HttpApi {
        HttpApi::new(&ApiConfig {
            base_url: server.url(),
        })
    }

    /// Valid credentials store the token, flip the UI and load the snippet list.
    #[tokio::test]
    async fn test_login_success_flips_ui() {
        let mut server = Server::new_async().await;
        let login_mock = server
            .mock("POST", "/api/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token": "tok-1"}"#)
            .create_async()
            .await;
        let list_mock = server
            .mock("GET", "/api/snippets")
            .match_header("authorization", "tok-1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 1, "title": "first", "body": "1"}]"#)
            .expect(1)
            .create_async()
            .await;

        let api = api_for(&server);
        let mut state = AppState::new();
        let notice = login(&api, &mut state, &Credentials::new("adam", "admin"))
            .await
            .unwrap();

        login_mock.assert_async().await;
        list_mock.assert_async().await;
        assert_eq!(notice.message(), "Logged in successfully");
        assert_eq!(state.session.token(), Some("tok-1"));
        assert_eq!(state.session.indicator(), AuthIndicator::Success);
        assert_eq!(state.session.button_label(), "Logout");
        assert_eq!(state.snippets.len(), 1);
        assert_eq!(state.selector.len(), 2);
    }

    /// A rejected login leaves the token empty and the UI untouched.
    #[tokio::test]
    async fn test_login_failure_leaves_state() {
        let mut server = Server::new_async().await;
        let login_mock = server
            .mock("POST", "/api/login")
            .with_status(401)
            .create_async()
            .await;
        let list_mock = server
            .mock("GET", "/api/snippets")
            .expect(0)
            .create_async()
            .await;

        let api = api_for(&server);
        let mut state = AppState::new();
        let err = login(&api, &mut state, &Credentials::new("adam", "nope"))
            .await
            .unwrap_err();

        login_mock.assert_async().await;
        list_mock.assert_async().await;
        assert_eq!(err.to_string(), "Invalid username or password");
        assert!(state.session.token().is_none());
        assert_eq!(state.session.button_label(), "Login");
        assert!(state.selector.is_empty());
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let mut server = Server::new_async().await;
        let login_mock = server
            .mock("POST", "/api/login")
            .expect(0)
            .create_async()
            .await;

        let api = api_for(&server);
        let mut state = AppState::new();
        let err = login(&api, &mut state, &Credentials::new("adam", ""))
            .await
            .unwrap_err();

        login_mock.assert_async().await;
        assert!(matches!(err, ActionError::Invalid(_)));
    }

    /// The login holds even when the follow-up list request fails.
    #[tokio::test]
    async fn test_login_survives_failed_reload() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/login")
            .with_status(200)
            .with_body(r#"{"token": "tok-1"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/api/snippets")
            .with_status(500)
            .create_async()
            .await;

        let api = api_for(&server);
        let mut state = AppState::new();
        let result = login(&api, &mut state, &Credentials::new("adam", "admin")).await;

        assert!(result.is_ok());
        assert!(state.session.is_authenticated());
        assert!(state.snippets.is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_cache() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/login")
            .with_status(200)
            .with_body(r#"{"token": "tok-1"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/api/snippets")
            .with_status(200)
            .with_body(r#"[{"id": 1, "title": "first", "body": "1"}]"#)
            .create_async()
            .await;
        let logout_mock = server
            .mock("POST", "/api/logout")
            .match_header("authorization", "tok-1")
            .with_status(200)
            .create_async()
            .await;

        let api = api_for(&server);
        let mut state = AppState::new();
        let credentials = Credentials::new("adam", "admin");
        toggle(&api, &mut state, &credentials).await.unwrap();
        let notice = toggle(&api, &mut state, &credentials).await.unwrap();

        logout_mock.assert_async().await;
        assert_eq!(notice.message(), "Logged out successfully");
        assert!(state.session.token().is_none());
        assert_eq!(state.session.indicator(), AuthIndicator::LoggedOut);
        assert!(state.snippets.is_empty());
        assert!(state.selector.is_empty());
    }

    #[tokio::test]
    async fn test_logout_failure_keeps_token() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/logout")
            .match_header("authorization", Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let api = api_for(&server);
        let mut state = AppState::new();
        state.session.set_token("tok-1".into());
        let err = logout(&api, &mut state).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to log out");
        assert_eq!(state.session.token(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_logout_without_session() {
        let server = Server::new_async().await;
        let api = api_for(&server);
        let mut state = AppState::new();
        let err = logout(&api, &mut state).await.unwrap_err();
        assert_eq!(err.to_string(), "You are not logged in");
    }

    /// A held token means the only way forward is logout; no second login is sent.
    #[tokio::test]
    async fn test_login_rejected_while_logged_in() {
        let mut server = Server::new_async().await;
        let login_mock = server
            .mock("POST", "/api/login")
            .expect(0)
            .create_async()
            .await;

        let api = api_for(&server);
        let mut state = AppState::new();
        state.session.set_token("tok-1".into());
        let err = login(&api, &mut state, &Credentials::new("eve", "admin"))
            .await
            .unwrap_err();

        login_mock.assert_async().await;
        assert_eq!(err.to_string(), "You are already logged in");
        assert_eq!(state.session.token(), Some("tok-1"));
    }
}
