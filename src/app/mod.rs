mod state;
mod ui;

use crate::api::health::check_health;
use crate::api::{BackendClient, ReqwestBackend};
use crate::config::AppConfig;
use crate::router::Router;
use crate::upload::{upload_file, SelectedFile};
use crate::utils::task::TaskRunner;
use eframe::{egui, App};
use state::{HealthState, UploadState};
use std::path::Path;
use std::sync::Arc;

pub struct LatexUploader {
    config: AppConfig,
    client: Arc<dyn BackendClient>,
    tasks: TaskRunner,
    router: Router,
    /// Text in the navigation bar's address field
    address: String,
    health: HealthState,
    upload: UploadState,
}

impl LatexUploader {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        tasks: TaskRunner,
        start_route: &str,
    ) -> Self {
        log::info!("Initializing LaTeX uploader against {}", config.base_url);
        let client = Arc::new(ReqwestBackend::new(&config.base_url));
        let mut app = Self::with_client(config, client, tasks, start_route);
        app.start_health_check(&cc.egui_ctx);
        app
    }

    pub fn with_client(
        config: AppConfig,
        client: Arc<dyn BackendClient>,
        tasks: TaskRunner,
        start_route: &str,
    ) -> Self {
        let router = Router::new(start_route);
        let address = router.current().path().to_string();
        Self {
            config,
            client,
            tasks,
            router,
            address,
            health: HealthState::default(),
            upload: UploadState::default(),
        }
    }

    pub fn navigate(&mut self, path: &str) {
        self.router.navigate(path);
        self.address = self.router.current().path().to_string();
    }

    pub fn go_back(&mut self) {
        self.router.back();
        self.address = self.router.current().path().to_string();
    }

    /// Fire the one health check of this launch.
    pub fn start_health_check(&mut self, ctx: &egui::Context) {
        if !self.health.begin() {
            return;
        }
        log::info!("Checking backend health");
        let client = Arc::clone(&self.client);
        let receiver = self
            .tasks
            .spawn(ctx, async move { check_health(client.as_ref()).await });
        self.health.attach(receiver);
    }

    pub fn select_file(&mut self, path: &Path) {
        match SelectedFile::from_path(path) {
            Ok(file) => self.upload.select_file(file),
            Err(e) => self.upload.selection_failed(&e.to_string()),
        }
    }

    /// Open the native file dialog and remember where the user went.
    pub fn pick_file(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "heic"])
            .add_filter("PDF", &["pdf"]);
        if let Some(dir) = &self.config.last_directory {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.pick_file() else {
            return;
        };

        if let Some(parent) = path.parent() {
            self.config.last_directory = Some(parent.to_path_buf());
            if let Err(e) = self.config.save() {
                log::warn!("Could not save configuration: {}", e);
            }
        }
        self.select_file(&path);
    }

    pub fn start_upload(&mut self, ctx: &egui::Context) {
        let Some(file) = self.upload.begin() else {
            return;
        };
        let client = Arc::clone(&self.client);
        let receiver = self
            .tasks
            .spawn(ctx, async move { upload_file(client.as_ref(), &file).await });
        self.upload.attach(receiver);
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        let settled = self.health.poll() | self.upload.poll();
        if settled {
            ctx.request_repaint();
        }
    }
}

impl App for LatexUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
