use client_core::{
    group_sections,
    view_model::{expansion_marker, row_cells, COLUMN_HEADERS},
    DisplayState, ExpansionState, FailureKind, FailureReason, GroupSection, LoadPhase,
};
use crossbeam_channel::Receiver;
use eframe::egui;

use crate::controller::events::{UiError, UiErrorCategory, UiEvent};

const GROUP_PADDING: f32 = 8.0;
const SPINNER_SIZE: f32 = 36.0;

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Startup => "Startup",
        UiErrorCategory::Transport => "Network",
        UiErrorCategory::Data => "Data",
    }
}

pub struct ItemListApp {
    ui_rx: Receiver<UiEvent>,
    state: DisplayState,
    sections: Vec<GroupSection>,
    expansion: ExpansionState,
    status_banner: Option<UiError>,
}

impl ItemListApp {
    pub fn new(ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            ui_rx,
            state: DisplayState::default(),
            sections: Vec::new(),
            expansion: ExpansionState::default(),
            status_banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::StateChanged(state) => {
                    if let Some(failure) = state.failure() {
                        self.status_banner = Some(UiError::from_failure(failure));
                    }
                    self.sections = group_sections(&state.records);
                    self.state = state;
                }
                UiEvent::Error(err) => {
                    // Nothing else will arrive; stop the spinner.
                    self.state.phase = LoadPhase::Failed(FailureReason {
                        kind: FailureKind::Transport,
                        message: err.message().to_string(),
                    });
                    self.status_banner = Some(err);
                }
            }
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = &self.status_banner else {
            return;
        };
        let mut dismissed = false;
        ui.horizontal(|ui| {
            ui.colored_label(
                ui.visuals().error_fg_color,
                format!("{} error: {}", err_label(banner.category()), banner.message()),
            );
            if ui.small_button("Dismiss").clicked() {
                dismissed = true;
            }
        });
        ui.separator();
        if dismissed {
            self.status_banner = None;
        }
    }

    fn show_item_table(&mut self, ui: &mut egui::Ui) {
        for section in &self.sections {
            show_group(ui, section, &mut self.expansion);
        }
    }
}

fn show_group(ui: &mut egui::Ui, section: &GroupSection, expansion: &mut ExpansionState) {
    let expanded = expansion.is_expanded(section.group_id);

    ui.add_space(GROUP_PADDING);
    let header = ui
        .scope(|ui| {
            ui.columns(3, |columns| {
                columns[0].vertical_centered(|ui| ui.strong(section.header_label()));
                columns[1].vertical_centered(|ui| ui.strong(section.count_label()));
                columns[2].vertical_centered(|ui| ui.label(expansion_marker(expanded)));
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_text(if expanded { "Collapse" } else { "Expand" });
    if header.clicked() {
        expansion.toggle(section.group_id);
    }

    ui.separator();

    if expanded {
        egui::Grid::new(("group_table", section.group_id.0))
            .num_columns(COLUMN_HEADERS.len())
            .striped(true)
            .show(ui, |ui| {
                for title in COLUMN_HEADERS {
                    ui.strong(title);
                }
                ui.end_row();
                for record in &section.records {
                    for cell in row_cells(record) {
                        ui.label(cell);
                    }
                    ui.end_row();
                }
            });
    }
}

impl eframe::App for ItemListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_item_table(ui);
            });
        });

        // Drawn over the table, which is still rendered (empty) underneath.
        if self.state.is_loading() {
            egui::Area::new(egui::Id::new("loading_spinner"))
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.add(egui::Spinner::new().size(SPINNER_SIZE));
                });
        }
    }
}
