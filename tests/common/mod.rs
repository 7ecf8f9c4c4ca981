#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::http::{HeaderName, HeaderValue, header};
use axum_test::TestServer;
use homepage_cms::api::routes::routes;
use homepage_cms::application::services::{
    FooterService, HowToEarnService, IntroService, ReviewService, ServiceError, StatsService,
};
use homepage_cms::domain::entities::{
    Footer, HowToEarn, HowToEarnImage, Intro, NewFooter, NewHowToEarn, NewIntro, RequestOrigin,
    Review, Stats, UploadedFile, UserId,
};
use homepage_cms::infrastructure::auth::{ConfiguredAdmins, JwtVerifier};
use homepage_cms::infrastructure::market::StaticMarketData;
use homepage_cms::infrastructure::storage::LocalImageStore;
use homepage_cms::routes::uploads_service;
use homepage_cms::state::AppState;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub const SECRET: &str = "integration-test-secret";
pub const ADMIN_ID: &str = "admin-1";
pub const USER_ID: &str = "user-1";
pub const HOST: &str = "coinvest.test";

/// In-process state with images written to `upload_dir`.
pub fn create_test_state(upload_dir: &Path, market: StaticMarketData) -> AppState {
    AppState::in_process(
        JwtVerifier::new(SECRET),
        ConfiguredAdmins::new([ADMIN_ID]),
        Arc::new(LocalImageStore::new(upload_dir)),
        market,
    )
}

/// Content routes under `/home` plus `/uploads`, without the rate limiter
/// (it needs the peer address, which the mock transport does not provide).
pub fn create_test_server(state: AppState, upload_dir: &Path) -> TestServer {
    let app = Router::new()
        .nest("/home", routes())
        .nest_service("/uploads", uploads_service(upload_dir))
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Server over empty in-process adapters. Keep the returned directory alive
/// for the duration of the test.
pub fn create_default_server() -> (TestServer, TempDir) {
    let dir = TempDir::new().unwrap();
    let state = create_test_state(dir.path(), StaticMarketData::default());
    let server = create_test_server(state, dir.path());
    (server, dir)
}

pub fn token_for(user_id: &str) -> String {
    JwtVerifier::new(SECRET)
        .issue(&UserId::new(user_id), chrono::Duration::hours(1))
        .unwrap()
}

pub fn bearer(user_id: &str) -> (HeaderName, HeaderValue) {
    let value = HeaderValue::from_str(&format!("Bearer {}", token_for(user_id))).unwrap();
    (header::AUTHORIZATION, value)
}

pub fn host() -> (HeaderName, HeaderValue) {
    (header::HOST, HeaderValue::from_static(HOST))
}

/// Content collaborator whose every call fails.
pub struct FailingContent;

fn offline() -> ServiceError {
    ServiceError::storage("database offline")
}

#[async_trait]
impl IntroService for FailingContent {
    async fn create_intro(
        &self,
        _intro: NewIntro,
        _image: UploadedFile,
        _origin: &RequestOrigin,
    ) -> Result<Intro, ServiceError> {
        Err(offline())
    }

    async fn get_intro(&self, _origin: &RequestOrigin) -> Result<Option<Intro>, ServiceError> {
        Err(offline())
    }
}

#[async_trait]
impl StatsService for FailingContent {
    async fn save_one(&self, _stats: Stats) -> Result<Stats, ServiceError> {
        Err(offline())
    }

    async fn get(&self) -> Result<Option<Stats>, ServiceError> {
        Err(offline())
    }
}

#[async_trait]
impl HowToEarnService for FailingContent {
    async fn create_how_to_earn_image(&self, _image: UploadedFile) -> Result<(), ServiceError> {
        Err(offline())
    }

    async fn get_how_to_earn_image(
        &self,
        _origin: &RequestOrigin,
    ) -> Result<Option<HowToEarnImage>, ServiceError> {
        Err(offline())
    }

    async fn create_how_to_earn(&self, _new: NewHowToEarn) -> Result<HowToEarn, ServiceError> {
        Err(offline())
    }

    async fn get_how_to_earn(&self) -> Result<Option<HowToEarn>, ServiceError> {
        Err(offline())
    }
}

#[async_trait]
impl ReviewService for FailingContent {
    async fn add_reviews(&self, _reviews: Vec<Review>) -> Result<Vec<Review>, ServiceError> {
        Err(offline())
    }

    async fn get_reviews(&self) -> Result<Vec<Review>, ServiceError> {
        Err(offline())
    }
}

#[async_trait]
impl FooterService for FailingContent {
    async fn create_footer(&self, _footer: NewFooter) -> Result<Footer, ServiceError> {
        Err(offline())
    }

    async fn get_footer(&self) -> Result<Option<Footer>, ServiceError> {
        Err(offline())
    }
}

/// Server whose content collaborators all fail; auth still works.
pub fn create_failing_server() -> (TestServer, TempDir) {
    let dir = TempDir::new().unwrap();
    let mut state = create_test_state(dir.path(), StaticMarketData::default());
    let failing = Arc::new(FailingContent);
    state.intro_service = failing.clone();
    state.stats_service = failing.clone();
    state.how_to_earn_service = failing.clone();
    state.review_service = failing.clone();
    state.footer_service = failing;

    let server = create_test_server(state, dir.path());
    (server, dir)
}
