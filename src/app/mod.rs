// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the dashboard, localization, the API
//! client, notifications, and the diagnostics log, and translates dashboard
//! actions into network tasks. Policy decisions (window sizing, what happens
//! after a status update commits, how fetch errors surface) live close to
//! the main update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::api::CameraApi;
use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsCollector, ErrorType, UserAction, WarningType};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::dashboard::{self, Action};
use crate::ui::notifications::{self, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// `None` only when the HTTP client could not be constructed; every
    /// network action then degrades into a no-op with an error toast.
    api: Option<CameraApi>,
    dashboard: dashboard::State,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cameras", &self.dashboard.camera_count())
            .field("is_loading", &self.dashboard.is_loading())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let api = CameraApi::new(config.api.base_url.clone(), None).ok();
        let diagnostics = DiagnosticsCollector::default();
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            i18n: I18n::default(),
            config,
            api,
            dashboard: dashboard::State::new(),
            notifications,
            diagnostics,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the initial camera fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            config,
            api: None,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(Notification::warning(&key).with_warning_type(WarningType::Config));
        }

        let token = config::resolve_api_token(flags.api_token);
        if token.is_none() {
            app.notifications.push(
                Notification::warning("notification-api-token-missing")
                    .with_warning_type(WarningType::Auth),
            );
        }

        let base_url = config::resolve_base_url(flags.api_url, &app.config);
        let timeout = Duration::from_secs(app.config.api.timeout_secs());
        match CameraApi::with_timeout(base_url, token, timeout) {
            Ok(api) => app.api = Some(api),
            Err(err) => {
                app.notifications.push(
                    Notification::error(err.i18n_key()).with_error_type(error_type(&err)),
                );
            }
        }

        let task = app.begin_fetch_task();
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.dashboard.is_loading(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Dashboard(dashboard_message) => {
                self.log_dashboard_action(&dashboard_message);
                let action = self.dashboard.update(dashboard_message);
                self.perform(action)
            }
            Message::CamerasFetched { generation, result } => match result {
                Ok(cameras) => {
                    if self.dashboard.apply_fetch(generation, cameras) {
                        // Fresh data invalidates stale fetch-failure toasts.
                        self.notifications.clear_fetch_errors();
                    }
                    Task::none()
                }
                Err(err) => {
                    self.dashboard.fetch_failed(generation);
                    self.notifications.push(
                        Notification::error("notification-fetch-error")
                            .with_error_type(error_type(&err)),
                    );
                    Task::none()
                }
            },
            Message::StatusUpdateCompleted { id, result } => {
                self.dashboard.finish_update(id);
                match result {
                    Ok(()) => {
                        self.notifications
                            .push(Notification::success("notification-update-success"));
                        // The server holds the truth; re-read the fleet
                        // instead of patching the row locally.
                        self.begin_fetch_task()
                    }
                    Err(err) => {
                        self.notifications.push(
                            Notification::error("notification-update-error")
                                .with_error_type(error_type(&err)),
                        );
                        Task::none()
                    }
                }
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                self.diagnostics.process_pending();
                Task::none()
            }
        }
    }

    /// Turns a dashboard action into the async task that performs it.
    fn perform(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::FetchCameras { generation } => self.fetch_task(generation),
            Action::UpdateStatus { id, status } => {
                let Some(api) = self.api.clone() else {
                    self.dashboard.finish_update(id);
                    return Task::none();
                };
                Task::perform(
                    async move { api.update_status(id, status).await },
                    move |result| Message::StatusUpdateCompleted { id, result },
                )
            }
        }
    }

    /// Starts a new fetch generation and returns its task.
    fn begin_fetch_task(&mut self) -> Task<Message> {
        let generation = self.dashboard.begin_fetch();
        self.fetch_task(generation)
    }

    fn fetch_task(&mut self, generation: u64) -> Task<Message> {
        let Some(api) = self.api.clone() else {
            self.dashboard.fetch_failed(generation);
            return Task::none();
        };
        Task::perform(async move { api.fetch_cameras().await }, move |result| {
            Message::CamerasFetched { generation, result }
        })
    }

    /// Mirrors user-initiated dashboard messages into the diagnostics log.
    fn log_dashboard_action(&mut self, message: &dashboard::Message) {
        use crate::diagnostics::DiagnosticEventKind;

        let action = match message {
            dashboard::Message::SearchChanged(_) => Some(UserAction::EditSearch),
            dashboard::Message::StatusFilterSelected(_) => Some(UserAction::FilterByStatus),
            dashboard::Message::LocationFilterSelected(_) => Some(UserAction::FilterByLocation),
            dashboard::Message::FiltersCleared => Some(UserAction::ClearFilters),
            dashboard::Message::PageSelected(page) => {
                Some(UserAction::SelectPage { page: *page })
            }
            dashboard::Message::StatusToggled(id) => {
                Some(UserAction::ToggleCameraStatus { camera_id: id.0 })
            }
            dashboard::Message::Refresh => Some(UserAction::RefreshCameras),
            dashboard::Message::NextPage | dashboard::Message::PreviousPage => None,
        };

        if let Some(action) = action {
            self.diagnostics
                .log_event(DiagnosticEventKind::UserAction {
                    action,
                    details: None,
                });
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            dashboard: &self.dashboard,
            notifications: &self.notifications,
        })
    }
}

/// Maps a crate error to its diagnostics category.
fn error_type(err: &Error) -> ErrorType {
    match err {
        Error::Http(_) => ErrorType::Network,
        Error::Api { .. } => ErrorType::Api,
        Error::Config(_) => ErrorType::Config,
        Error::Io(_) => ErrorType::Io,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::camera::{Camera, CameraHealth, CameraId, CameraStatus};
    use crate::ui::notifications::Severity;
    use tempfile::tempdir;

    fn config_env_lock() -> &'static std::sync::Mutex<()> {
        crate::config::test_env_lock()
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn sample_camera(id: u64, name: &str, location: &str, status: CameraStatus) -> Camera {
        Camera {
            id: CameraId(id),
            name: name.to_string(),
            location: location.to_string(),
            status,
            recorder: Some("NVR-1".to_string()),
            tasks: Some(2),
            health: Some(CameraHealth {
                cloud: Some("Online".to_string()),
                device: Some("Online".to_string()),
            }),
        }
    }

    fn sample_fleet() -> Vec<Camera> {
        vec![
            sample_camera(1, "Lobby Cam", "HQ", CameraStatus::Active),
            sample_camera(2, "Dock", "Warehouse", CameraStatus::Inactive),
        ]
    }

    /// App with a loaded fleet, as if the initial fetch succeeded.
    fn loaded_app(cameras: Vec<Camera>) -> App {
        let mut app = App::default();
        let generation = app.dashboard.begin_fetch();
        let _ = app.update(Message::CamerasFetched {
            generation,
            result: Ok(cameras),
        });
        app
    }

    #[test]
    fn new_starts_loading_an_empty_fleet() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.dashboard.camera_count(), 0);
            assert!(app.dashboard.is_loading());
        });
    }

    #[test]
    fn new_without_token_warns_about_missing_credentials() {
        with_temp_config_dir(|_| {
            std::env::remove_var(crate::config::ENV_API_TOKEN);

            let (app, _task) = App::new(Flags::default());
            let has_auth_warning = app
                .notifications
                .visible()
                .any(|n| n.message_key() == "notification-api-token-missing");
            assert!(has_auth_warning);
        });
    }

    #[test]
    fn new_with_cli_token_does_not_warn() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                api_token: Some("secret".to_string()),
                ..Flags::default()
            });
            let has_auth_warning = app
                .notifications
                .visible()
                .any(|n| n.message_key() == "notification-api-token-missing");
            assert!(!has_auth_warning);
        });
    }

    #[test]
    fn fetched_cameras_populate_the_dashboard() {
        let app = loaded_app(sample_fleet());
        assert_eq!(app.dashboard.camera_count(), 2);
        assert_eq!(app.dashboard.filtered_count(), 2);
        assert!(!app.dashboard.is_loading());
    }

    #[test]
    fn fetch_error_preserves_prior_state_and_notifies() {
        let mut app = loaded_app(sample_fleet());

        let generation = app.dashboard.begin_fetch();
        let _ = app.update(Message::CamerasFetched {
            generation,
            result: Err(Error::Http("connection reset".to_string())),
        });

        assert_eq!(app.dashboard.camera_count(), 2, "master list must survive");
        assert_eq!(app.dashboard.filtered_count(), 2);
        assert!(!app.dashboard.is_loading());
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-fetch-error"));
    }

    #[test]
    fn fetch_error_on_first_load_leaves_lists_empty() {
        let mut app = App::default();
        let generation = app.dashboard.begin_fetch();
        let _ = app.update(Message::CamerasFetched {
            generation,
            result: Err(Error::Http("offline".to_string())),
        });

        assert_eq!(app.dashboard.camera_count(), 0);
        assert_eq!(app.dashboard.filtered_count(), 0);
    }

    #[test]
    fn successful_fetch_clears_stale_fetch_errors() {
        let mut app = App::default();
        let generation = app.dashboard.begin_fetch();
        let _ = app.update(Message::CamerasFetched {
            generation,
            result: Err(Error::Http("offline".to_string())),
        });
        assert!(app.notifications.has_notifications());

        let generation = app.dashboard.begin_fetch();
        let _ = app.update(Message::CamerasFetched {
            generation,
            result: Ok(sample_fleet()),
        });
        assert!(!app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-fetch-error"));
    }

    #[test]
    fn toggling_marks_the_camera_pending() {
        let mut app = loaded_app(sample_fleet());

        let _ = app.update(Message::Dashboard(dashboard::Message::StatusToggled(
            CameraId(1),
        )));

        assert!(app.dashboard.is_updating(CameraId(1)));
        assert!(!app.dashboard.is_updating(CameraId(2)));
    }

    #[test]
    fn successful_update_reissues_the_read() {
        let mut app = loaded_app(sample_fleet());
        let _ = app.update(Message::Dashboard(dashboard::Message::StatusToggled(
            CameraId(1),
        )));

        let _ = app.update(Message::StatusUpdateCompleted {
            id: CameraId(1),
            result: Ok(()),
        });

        assert!(!app.dashboard.is_updating(CameraId(1)));
        // The post-update refresh is in flight.
        assert!(app.dashboard.is_loading());
        assert!(app
            .notifications
            .visible()
            .any(|n| n.severity() == Severity::Success));
    }

    #[test]
    fn failed_update_leaves_status_unchanged() {
        let mut app = loaded_app(sample_fleet());
        let _ = app.update(Message::Dashboard(dashboard::Message::StatusToggled(
            CameraId(1),
        )));

        let _ = app.update(Message::StatusUpdateCompleted {
            id: CameraId(1),
            result: Err(Error::Api {
                status: 500,
                message: "boom".to_string(),
            }),
        });

        assert!(!app.dashboard.is_updating(CameraId(1)));
        assert!(!app.dashboard.is_loading(), "no refresh after a failed write");
        let camera = app
            .dashboard
            .visible_page()
            .iter()
            .find(|c| c.id == CameraId(1))
            .cloned()
            .expect("camera still displayed");
        assert_eq!(camera.status, CameraStatus::Active);
    }

    #[test]
    fn stale_fetch_response_does_not_clobber_newer_data() {
        let mut app = App::default();
        let stale = app.dashboard.begin_fetch();
        let latest = app.dashboard.begin_fetch();

        let _ = app.update(Message::CamerasFetched {
            generation: latest,
            result: Ok(sample_fleet()),
        });
        let _ = app.update(Message::CamerasFetched {
            generation: stale,
            result: Ok(vec![]),
        });

        assert_eq!(app.dashboard.camera_count(), 2);
    }

    #[test]
    fn filter_messages_flow_through_the_pipeline() {
        let mut app = loaded_app(sample_fleet());

        let _ = app.update(Message::Dashboard(dashboard::Message::SearchChanged(
            "lobby".to_string(),
        )));
        assert_eq!(app.dashboard.filtered_count(), 1);

        let _ = app.update(Message::Dashboard(
            dashboard::Message::StatusFilterSelected(Some(CameraStatus::Inactive)),
        ));
        assert_eq!(app.dashboard.filtered_count(), 0);

        let _ = app.update(Message::Dashboard(dashboard::Message::FiltersCleared));
        assert_eq!(app.dashboard.filtered_count(), 2);
    }

    #[test]
    fn dashboard_actions_are_logged_to_diagnostics() {
        let mut app = loaded_app(sample_fleet());
        let before = app.diagnostics.len();

        let _ = app.update(Message::Dashboard(dashboard::Message::PageSelected(0)));
        let _ = app.update(Message::Dashboard(dashboard::Message::StatusToggled(
            CameraId(2),
        )));

        assert_eq!(app.diagnostics.len(), before + 2);
    }

    #[test]
    fn notification_errors_reach_the_diagnostics_log() {
        let mut app = App::default();
        let generation = app.dashboard.begin_fetch();
        let _ = app.update(Message::CamerasFetched {
            generation,
            result: Err(Error::Http("offline".to_string())),
        });

        // Channel-fed events are drained on tick.
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(app.diagnostics.len() > 0);
    }

    #[test]
    fn title_is_localized_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "CamBoard");
    }
}
