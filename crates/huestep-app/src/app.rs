//! Application state and the eframe update loop.

use std::collections::HashMap;

use egui::{Align, Layout, RichText, ScrollArea};
use huestep_core::storage::{MemoryStore, PreferenceStore, create_default_store};
use huestep_core::{EntityDefaults, EntityId, EntityList, PenikoMixer, Theme, ThemePreference};
use huestep_widgets::{
    install_palette, palette, section_label, system_theme, text_button, toggle_button,
};
use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use crate::clipboard::PlatformClipboard;
use crate::view::{EntityView, ViewResponse};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Initial values of every new entity.
    pub defaults: EntityDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Color Space Interpolation".to_string(),
            width: 1280,
            height: 800,
            defaults: EntityDefaults::default(),
        }
    }
}

fn open_store() -> Box<dyn PreferenceStore> {
    match create_default_store() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Preferences unavailable, theme will not persist: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}

/// Label of the theme button: the theme currently shown.
fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
    }
}

/// Main application struct.
pub struct HuestepApp {
    config: AppConfig,
    mixer: PenikoMixer,
    entities: EntityList,
    views: HashMap<EntityId, EntityView>,
    theme: ThemePreference<Box<dyn PreferenceStore>>,
    installed_theme: Option<Theme>,
    clipboard: PlatformClipboard,
    compact: bool,
}

impl HuestepApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let ctx = &cc.egui_ctx;
        let theme = ThemePreference::load(open_store(), system_theme(ctx));
        install_palette(ctx, theme.theme());

        let entities = EntityList::new(config.defaults.clone());
        let views = entities
            .entries()
            .iter()
            .map(|entry| (entry.id, EntityView::new(ctx, &entry.state)))
            .collect();

        log::info!("huestep ready ({}x{})", config.width, config.height);

        Self {
            config,
            mixer: PenikoMixer::new(),
            entities,
            views,
            installed_theme: Some(theme.theme()),
            theme,
            clipboard: PlatformClipboard::new(ctx),
            compact: false,
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        if let Some(system) = system_theme(ctx) {
            self.theme.follow_system(system);
        }
        let theme = self.theme.theme();
        if self.installed_theme != Some(theme) {
            install_palette(ctx, theme);
            self.installed_theme = Some(theme);
        }
    }

    fn add_entity(&mut self, ctx: &egui::Context) {
        if let Some(id) = self.entities.add() {
            if let Some(state) = self.entities.get(id) {
                self.views.insert(id, EntityView::new(ctx, state));
            }
        }
    }

    fn remove_entity(&mut self, id: EntityId, now: Instant) {
        if self.entities.remove(id) {
            if let Some(view) = self.views.get_mut(&id) {
                view.begin_exit(now);
            }
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        let palette = palette(ui.ctx());
        ui.horizontal(|ui| {
            ui.heading(RichText::new(&self.config.title).color(palette.text));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let label = theme_label(self.theme.theme());
                if text_button(ui, label, true).on_hover_text("Switch theme").clicked() {
                    let theme = self.theme.toggle();
                    log::info!("Theme switched to {}", theme.as_str());
                }

                if toggle_button(ui, "Compact", self.compact).clicked() {
                    self.compact = !self.compact;
                }

                if text_button(ui, "Remove", self.entities.can_remove()).clicked() {
                    if let Some(id) = self.entities.remove_last() {
                        if let Some(view) = self.views.get_mut(&id) {
                            view.begin_exit(Instant::now());
                        }
                    }
                }
                if text_button(ui, "Add", self.entities.can_add()).clicked() {
                    self.add_entity(ui.ctx());
                }
                section_label(
                    ui,
                    &format!("{} / {}", self.entities.live_count(), huestep_core::MAX_ENTITIES),
                );
            });
        });
    }
}

impl eframe::App for HuestepApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_theme(ctx);
        let now = Instant::now();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.top_bar(ui);
            ui.add_space(4.0);
        });

        let mut responses: Vec<(EntityId, ViewResponse)> = Vec::new();
        let mut finished: Vec<EntityId> = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                let can_remove = self.entities.can_remove();
                for (position, entry) in self.entities.entries().iter().enumerate() {
                    let view = self
                        .views
                        .entry(entry.id)
                        .or_insert_with(|| EntityView::new(ctx, &entry.state));

                    let fade = view.exit_progress(now);
                    if fade == Some(1.0) {
                        finished.push(entry.id);
                        continue;
                    }

                    let id = egui::Id::new(("entity", entry.id));
                    let response = ui
                        .scope(|ui| {
                            if let Some(fade) = fade {
                                ui.set_opacity(1.0 - fade);
                                ui.disable();
                                ctx.request_repaint();
                            }
                            if self.compact && position > 0 {
                                view.show_compact(ui, &entry.state, &self.mixer, now);
                                ViewResponse::default()
                            } else {
                                view.show(
                                    ui,
                                    id,
                                    &entry.state,
                                    &self.mixer,
                                    &mut self.clipboard,
                                    can_remove && !entry.leaving,
                                    now,
                                )
                            }
                        })
                        .inner;
                    ui.add_space(12.0);

                    if !entry.leaving {
                        responses.push((entry.id, response));
                    }
                }
            });
        });

        for id in finished {
            self.entities.finish_exit(id);
            self.views.remove(&id);
        }

        for (id, response) in responses {
            for action in response.actions {
                self.entities.dispatch(id, action);
            }
            if response.remove {
                self.remove_entity(id, now);
            }
        }
    }
}
