//! The "AI Tools" side panel, drawn with egui.

use crate::state::PanelState;
use egui::{
    Align2, Button, Color32, Context, CornerRadius, Frame, Margin, RichText, Stroke, Ui, Vec2,
};

/// Actions the panel can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Send the drawing to handwriting OCR.
    RecognizeHandwriting,
    /// Rewrite freehand ink as rectangles.
    ImproveShapes,
    /// Send the drawing to math OCR.
    RecognizeMath,
}

const PANEL_WIDTH: f32 = 288.0;
const MARGIN: f32 = 12.0;
const PADDING: i8 = 16;
const BUTTON_HEIGHT: f32 = 34.0;
const ITEM_SPACING: f32 = 12.0;
const PANEL_ID: &str = "ai_tools_panel";

mod palette {
    use egui::Color32;

    pub const BLUE: Color32 = Color32::from_rgb(59, 130, 246);
    pub const GREEN: Color32 = Color32::from_rgb(34, 197, 94);
    pub const PURPLE: Color32 = Color32::from_rgb(168, 85, 247);
    pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(22, 163, 74);
    pub const WARNING_TEXT: Color32 = Color32::from_rgb(202, 138, 4);
    pub const RESULT_BG: Color32 = Color32::from_rgb(229, 231, 235);
    pub const PANEL_BG: Color32 = Color32::from_rgb(243, 244, 246);
    pub const BORDER: Color32 = Color32::from_rgb(209, 213, 219);
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
}

/// Draw the panel anchored to the right edge. Returns the clicked action.
pub fn render_ai_panel(ctx: &Context, state: &PanelState) -> Option<PanelAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new(PANEL_ID))
        .anchor(Align2::RIGHT_TOP, Vec2::new(-MARGIN, MARGIN))
        .interactable(true)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            Frame::new()
                .fill(palette::PANEL_BG)
                .corner_radius(CornerRadius::same(8))
                .stroke(Stroke::new(1.0, palette::BORDER))
                .shadow(egui::epaint::Shadow {
                    spread: 0,
                    blur: 8,
                    offset: [0, 2],
                    color: Color32::from_black_alpha(15),
                })
                .inner_margin(Margin::same(PADDING))
                .show(ui, |ui| {
                    ui.set_width(PANEL_WIDTH - 2.0 * f32::from(PADDING));
                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing = Vec2::new(0.0, ITEM_SPACING);

                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("AI Tools")
                                    .size(16.0)
                                    .strong()
                                    .color(palette::TEXT),
                            );
                        });

                        if action_button(ui, "Handwriting Recognition", palette::BLUE) {
                            action = Some(PanelAction::RecognizeHandwriting);
                        }
                        if action_button(ui, "Improve Shapes", palette::GREEN) {
                            action = Some(PanelAction::ImproveShapes);
                        }
                        if action_button(ui, "Math Recognition", palette::PURPLE) {
                            action = Some(PanelAction::RecognizeMath);
                        }

                        render_results(ui, state);
                    });
                });
        });

    action
}

fn action_button(ui: &mut Ui, label: &str, fill: Color32) -> bool {
    let button = Button::new(RichText::new(label).color(Color32::WHITE))
        .fill(fill)
        .corner_radius(CornerRadius::same(8));
    ui.add_sized([ui.available_width(), BUTTON_HEIGHT], button).clicked()
}

fn render_results(ui: &mut Ui, state: &PanelState) {
    if let Some(text) = &state.recognized_text {
        result_block(ui, "Recognized Text:", RichText::new(text).size(13.0));
    }

    if let Some(latex) = &state.recognized_math {
        result_block(
            ui,
            "Recognized Math (LaTeX):",
            RichText::new(latex).monospace().size(13.0),
        );
    }

    if state.shapes_improved {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Shapes improved!")
                    .strong()
                    .color(palette::SUCCESS_TEXT),
            );
            if let Some(summary) = state.last_improve.filter(|s| s.failed > 0) {
                ui.label(
                    RichText::new(format!("{} shapes could not be converted", summary.failed))
                        .size(11.0)
                        .color(palette::WARNING_TEXT),
                );
            }
        });
    }
}

fn result_block(ui: &mut Ui, heading: &str, body: RichText) {
    ui.label(RichText::new(heading).strong().color(palette::TEXT));
    Frame::new()
        .fill(palette::RESULT_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(body);
        });
}
