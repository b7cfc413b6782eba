use super::LatexUploader;
use crate::router::{Route, HOME_PATH, LOGIN_PATH, SIGNUP_PATH, UPLOAD_PATH};
use crate::utils::color::hex_or;
use crate::utils::file_size;
use eframe::egui::{self, Align, Color32, RichText};

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);
const SUCCESS: Color32 = Color32::from_rgb(0, 180, 0);
const FAILURE: Color32 = Color32::from_rgb(220, 50, 50);

impl LatexUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_navigation(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("backend_status").show(ctx, |ui| {
            ui.add_space(6.0);
            self.render_status(ui);
            ui.add_space(6.0);
        });

        let route = self.router.current().clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match &route {
                Route::Home => self.render_home(ui),
                Route::Upload => self.render_upload(ui),
                Route::NotFound(path) => Self::render_not_found(ui, path),
            });
        });
    }

    fn render_navigation(&mut self, ui: &mut egui::Ui) {
        let mut target: Option<String> = None;
        let mut back = false;

        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.router.can_go_back(), egui::Button::new("⬅"))
                .on_hover_text("Back")
                .clicked()
            {
                back = true;
            }

            let current = self.router.current();
            if ui
                .selectable_label(*current == Route::Home, "Home")
                .clicked()
            {
                target = Some(HOME_PATH.to_string());
            }
            if ui
                .selectable_label(*current == Route::Upload, "Upload")
                .clicked()
            {
                target = Some(UPLOAD_PATH.to_string());
            }

            ui.separator();

            let address = ui.add(
                egui::TextEdit::singleline(&mut self.address)
                    .desired_width(ui.available_width())
                    .font(egui::TextStyle::Monospace),
            );
            if address.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                target = Some(self.address.clone());
            }
        });

        if back {
            self.go_back();
        } else if let Some(path) = target {
            self.navigate(&path);
        }
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        let mut target = None;

        ui.add_space(60.0);
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Image ➜ LaTeX Converter").size(32.0));
            ui.add_space(10.0);
            ui.label(
                RichText::new(
                    "Upload handwritten math or images and instantly convert them into clean, editable LaTeX.",
                )
                .size(16.0)
                .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
            ui.add_space(40.0);

            let links = [
                ("Sign Up", "#007bff", SIGNUP_PATH),
                ("Log In", "#28a745", LOGIN_PATH),
                ("Upload as Guest", "#6c757d", UPLOAD_PATH),
            ];
            let button_width = 150.0;
            let spacing = 20.0;
            let row_width = links.len() as f32 * button_width + (links.len() - 1) as f32 * spacing;

            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                ui.spacing_mut().item_spacing.x = spacing;
                for (label, color, path) in links {
                    let button = egui::Button::new(RichText::new(label).color(Color32::WHITE).size(16.0))
                        .fill(hex_or(color, Color32::GRAY))
                        .min_size(egui::vec2(button_width, 44.0));
                    if ui.add(button).clicked() {
                        target = Some(path);
                    }
                }
            });
        });

        if let Some(path) = target {
            self.navigate(path);
        }
    }

    fn render_upload(&mut self, ui: &mut egui::Ui) {
        let uploading = self.upload.is_uploading();
        let mut pick = false;
        let mut submit = false;

        ui.add_space(30.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(500.0);
            ui.heading("Upload a File");
            ui.add_space(20.0);

            ui.group(|ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!uploading, egui::Button::new("📁 Choose File"))
                        .clicked()
                    {
                        pick = true;
                    }
                    if self.upload.selected.is_none() {
                        ui.label(
                            RichText::new("No file chosen")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    }
                });
            });

            if let Some(file) = &self.upload.selected {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label("Selected:");
                    ui.label(RichText::new(&file.name).strong());
                    ui.label(format!("({})", file.size_label()))
                        .on_hover_text(file_size::human_readable(file.size));
                });
            }

            ui.add_space(20.0);
            let button = egui::Button::new(self.upload.button_label()).min_size(egui::vec2(200.0, 40.0));
            if ui.add_enabled(self.upload.can_submit(), button).clicked() {
                submit = true;
            }

            if !self.upload.status.is_empty() {
                ui.add_space(15.0);
                let color = if self.upload.status_is_failure() {
                    FAILURE
                } else if self.upload.status_is_success() {
                    SUCCESS
                } else {
                    ui.visuals().text_color()
                };
                ui.colored_label(color, &self.upload.status);
            }
        });

        if pick {
            self.pick_file();
        }
        if submit {
            self.start_upload(ui.ctx());
        }
    }

    fn render_not_found(ui: &mut egui::Ui, path: &str) {
        ui.add_space(80.0);
        ui.vertical_centered(|ui| {
            ui.heading("Page not found");
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Nothing lives at {}", path))
                    .monospace()
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Backend status");
            ui.separator();
            ui.label("API:");
            ui.label(RichText::new(&self.health.api_status).strong());
            if self.health.is_pending() {
                ui.spinner();
            }

            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                let base_url = self.client.base_url();
                if ui
                    .add(
                        egui::Label::new(RichText::new(base_url).color(ACCENT))
                            .sense(egui::Sense::click()),
                    )
                    .on_hover_text("Open in browser")
                    .clicked()
                {
                    if let Err(e) = open::that(base_url) {
                        log::warn!("Failed to open {}: {}", base_url, e);
                    }
                }
            });
        });

        if let Some(error) = &self.health.error {
            ui.add_space(4.0);
            ui.label(
                RichText::new(error)
                    .monospace()
                    .color(hex_or("#dc143c", FAILURE)),
            );
        }
    }
}
