use crate::application::services::*;
use crate::config::Config;
use crate::domain::ports::analytics_repository::AnalyticsRepository;
use crate::domain::ports::appointment_repository::AppointmentRepository;
use crate::domain::ports::availability_repository::AvailabilityRepository;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::content_repository::ContentRepository;
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::quote_repository::QuoteRepository;
use crate::domain::ports::session_repository::SessionRepository;
use crate::domain::ports::settings_repository::SettingsRepository;
use crate::domain::ports::task_spawner::TaskSpawner;
use crate::infrastructure::cache::AdminCache;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use crate::infrastructure::providers::{EmailNotifier, LogNotifier, WhatsAppNotifier};
use crate::infrastructure::runtime::tokio::{SystemClock, TokioTaskSpawner};
use crate::shared::rate_limiter::AuthRateLimiter;
use std::sync::Arc;
use std::time::Duration;

/// How often expired admin sessions and idle rate limiters are purged
const CLEANUP_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Runtime collaborators that tests replace
pub struct Runtime {
    pub clock: Arc<dyn Clock>,
    pub spawner: Arc<dyn TaskSpawner>,
    pub notifiers: Vec<Arc<dyn Notifier>>,
}

impl Runtime {
    pub fn from_config(config: &Config) -> Self {
        let mut notifiers: Vec<Arc<dyn Notifier>> = Vec::new();

        if let Some(smtp) = &config.smtp {
            match EmailNotifier::new(smtp) {
                Ok(notifier) => {
                    tracing::info!("Email notifications enabled via {}", smtp.host);
                    notifiers.push(Arc::new(notifier));
                }
                Err(e) => tracing::error!("Email notifications disabled: {}", e),
            }
        }

        if let Some(whatsapp) = &config.whatsapp {
            match WhatsAppNotifier::new(whatsapp.clone()) {
                Ok(notifier) => {
                    tracing::info!("WhatsApp operator notifications enabled");
                    notifiers.push(Arc::new(notifier));
                }
                Err(e) => tracing::error!("WhatsApp notifications disabled: {}", e),
            }
        }

        if notifiers.is_empty() {
            tracing::warn!("No notification channel configured, notifications are only logged");
            notifiers.push(Arc::new(LogNotifier));
        }

        Self {
            clock: Arc::new(SystemClock::new(config.business_timezone)),
            spawner: Arc::new(TokioTaskSpawner::new()),
            notifiers,
        }
    }
}

pub fn build_app_state(db: Database, config: &Config, runtime: Runtime) -> AppState {
    let Runtime {
        clock,
        spawner,
        notifiers,
    } = runtime;

    let availability_repo: Arc<dyn AvailabilityRepository> = Arc::new(db.clone());
    let appointment_repo: Arc<dyn AppointmentRepository> = Arc::new(db.clone());
    let quote_repo: Arc<dyn QuoteRepository> = Arc::new(db.clone());
    let session_repo: Arc<dyn SessionRepository> = Arc::new(db.clone());
    let settings_repo: Arc<dyn SettingsRepository> = Arc::new(db.clone());
    let content_repo: Arc<dyn ContentRepository> = Arc::new(db.clone());
    let analytics_repo: Arc<dyn AnalyticsRepository> = Arc::new(db);

    let notification_service =
        NotificationService::new(notifiers, spawner, config.operator_email.clone());

    let availability_service = AvailabilityService::new(
        availability_repo,
        appointment_repo.clone(),
        clock.clone(),
    );

    let analytics_service = AnalyticsService::new(
        analytics_repo.clone(),
        quote_repo.clone(),
        appointment_repo.clone(),
        clock.clone(),
    );

    let appointment_service = AppointmentService::new(
        appointment_repo.clone(),
        availability_service.clone(),
        analytics_service.clone(),
        notification_service.clone(),
    );

    let quote_service = QuoteService::new(
        quote_repo.clone(),
        analytics_service.clone(),
        notification_service,
        clock.clone(),
    );

    let export_service = ExportService::new(quote_repo, appointment_repo, analytics_repo, clock);

    let admin_auth_service = AdminAuthService::new(
        session_repo,
        &config.admin_password,
        config.session_duration_hours,
    );

    AppState {
        cookie_secure: config.cookie_secure,
        availability_service,
        appointment_service,
        quote_service,
        admin_auth_service,
        settings_service: SettingsService::new(settings_repo),
        content_service: ContentService::new(content_repo),
        analytics_service,
        export_service,
        admin_cache: AdminCache::new(Duration::from_secs(config.cache_ttl_seconds)),
        rate_limiter: AuthRateLimiter::new(),
    }
}

/// Periodically purge expired sessions and recovered rate limiters
pub fn spawn_cleanup_task(state: &AppState) {
    let auth = state.admin_auth_service.clone();
    let rate_limiter = state.rate_limiter.clone();

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;

            match auth.cleanup_expired_sessions().await {
                Ok(0) => {}
                Ok(removed) => tracing::info!("Removed {} expired admin sessions", removed),
                Err(e) => tracing::error!("Session cleanup failed: {}", e),
            }

            rate_limiter.cleanup().await;
        }
    });
}
