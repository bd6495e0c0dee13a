use chrono::{NaiveDate, NaiveDateTime};
use futures::future::BoxFuture;
use renodesk::bootstrap::{build_app_state, Runtime};
use renodesk::config::Config;
use renodesk::domain::ports::notifier::{Notification, Notifier, NotifyError};
use renodesk::domain::ports::task_spawner::TaskSpawner;
use renodesk::infrastructure::http::middleware::AppState;
use renodesk::infrastructure::persistence::Database;
use renodesk::infrastructure::runtime::tokio::FixedClock;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

/// Notifier that keeps every notification it is asked to send
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Arc::default(),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(notification.clone());
        if self.fail {
            return Err(NotifyError::Delivery("simulated outage".to_string()));
        }
        Ok(())
    }
}

/// Spawner that keeps join handles so tests can wait for background work
#[derive(Clone, Default)]
pub struct CollectingSpawner {
    handles: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl CollectingSpawner {
    pub async fn drain(&self) {
        let handles: Vec<_> = self.handles.lock().unwrap().drain(..).collect();
        for handle in handles {
            handle.await.unwrap();
        }
    }
}

impl TaskSpawner for CollectingSpawner {
    fn spawn(&self, future: BoxFuture<'static, ()>) {
        self.handles.lock().unwrap().push(tokio::spawn(future));
    }
}

pub fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_time(chrono::NaiveTime::parse_from_str(time, "%H:%M").unwrap())
}

pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        admin_password: ADMIN_PASSWORD.to_string(),
        session_duration_hours: 12,
        cookie_secure: false,
        business_timezone: chrono_tz::Europe::Brussels,
        cache_ttl_seconds: 30,
        operator_email: Some("planning@example.be".to_string()),
        smtp: None,
        whatsapp: None,
        otel_exporter_endpoint: None,
        service_name: "renodesk-test".to_string(),
        metrics_port: 0,
    }
}

pub struct TestApp {
    pub state: AppState,
    pub notifier: RecordingNotifier,
    pub spawner: CollectingSpawner,
}

/// Application state wired to `db`, a frozen clock and recording notifier
pub fn test_app(db: Database, now: NaiveDateTime) -> TestApp {
    test_app_with(db, now, RecordingNotifier::default())
}

pub fn test_app_with(db: Database, now: NaiveDateTime, notifier: RecordingNotifier) -> TestApp {
    let spawner = CollectingSpawner::default();
    let runtime = Runtime {
        clock: Arc::new(FixedClock::new(now)),
        spawner: Arc::new(spawner.clone()),
        notifiers: vec![Arc::new(notifier.clone())],
    };

    TestApp {
        state: build_app_state(db, &test_config(), runtime),
        notifier,
        spawner,
    }
}
