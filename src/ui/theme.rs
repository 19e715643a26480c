use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::model::ThemeName;

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const ROW_HEIGHT: f32 = 22.0;
pub const HEADER_HEIGHT: f32 = 26.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const DIALOG_WIDTH: f32 = 320.0;
pub const WIDGET_ROUNDING: f32 = 4.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(12.5)
}

pub fn font_row() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

// ── Palette ──────────────────────────────────────────────────────────────────

/// The colours a theme contributes to every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Panel and button fill.
    pub background: Color32,
    pub foreground: Color32,
    /// Button borders and the selection highlight.
    pub border: Color32,
    /// Colour of the theme's button in the picker.
    pub swatch: Color32,
}

impl Palette {
    pub fn for_theme(theme: ThemeName) -> Self {
        let (background, border, swatch) = match theme {
            ThemeName::White => (
                Color32::from_rgb(0xFF, 0xFF, 0xFF),
                Color32::from_rgb(0x00, 0x00, 0x00),
                Color32::from_rgb(0xFF, 0xFF, 0xFF),
            ),
            ThemeName::Pink => (
                Color32::from_rgb(0xFF, 0x6E, 0xBE),
                Color32::from_rgb(0xFF, 0x24, 0x9C),
                Color32::from_rgb(0xFF, 0x6E, 0xBE),
            ),
            ThemeName::Yellow => (
                Color32::from_rgb(0xFF, 0xFC, 0xCC),
                Color32::from_rgb(0xFF, 0xF8, 0x94),
                Color32::from_rgb(0xFF, 0xF8, 0x92),
            ),
            ThemeName::Green => (
                Color32::from_rgb(0x00, 0xBB, 0x77),
                Color32::from_rgb(0x01, 0x75, 0x4B),
                Color32::from_rgb(0x00, 0xBB, 0x77),
            ),
            ThemeName::Blue => (
                Color32::from_rgb(0x56, 0xC4, 0xFF),
                Color32::from_rgb(0x19, 0xA0, 0xEA),
                Color32::from_rgb(0x56, 0xC4, 0xFF),
            ),
            ThemeName::Purple => (
                Color32::from_rgb(0xBC, 0x8F, 0xF7),
                Color32::from_rgb(0x9C, 0x52, 0xFC),
                Color32::from_rgb(0xBC, 0x8F, 0xF7),
            ),
        };
        Self {
            background,
            foreground: Color32::BLACK,
            border,
            swatch,
        }
    }

    /// Row highlight for selected table rows.
    pub fn selection(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(self.border.r(), self.border.g(), self.border.b(), 90)
    }

    /// Whole-UI visuals derived from this palette.
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::light();
        let rounding = Rounding::same(WIDGET_ROUNDING);

        visuals.override_text_color = Some(self.foreground);
        visuals.panel_fill = self.background;
        visuals.window_fill = Color32::from_rgb(245, 245, 245);
        visuals.extreme_bg_color = Color32::WHITE; // text fields, table body
        visuals.faint_bg_color = Color32::from_gray(248);

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.foreground);

        visuals.widgets.inactive.bg_fill = self.background;
        visuals.widgets.inactive.weak_bg_fill = self.background;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.foreground);
        visuals.widgets.inactive.rounding = rounding;

        visuals.widgets.hovered.bg_fill = self.border;
        visuals.widgets.hovered.weak_bg_fill = self.border;
        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, self.foreground);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.foreground);
        visuals.widgets.hovered.rounding = rounding;

        visuals.widgets.active.bg_fill = self.border;
        visuals.widgets.active.weak_bg_fill = self.border;
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, self.foreground);
        visuals.widgets.active.fg_stroke = Stroke::new(1.5, self.foreground);
        visuals.widgets.active.rounding = rounding;

        visuals.widgets.open.bg_fill = Color32::WHITE;
        visuals.widgets.open.weak_bg_fill = Color32::WHITE;
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.open.rounding = rounding;

        visuals.selection.bg_fill = self.selection();
        visuals.selection.stroke = Stroke::new(1.0, self.foreground);

        visuals.window_rounding = Rounding::same(6.0);
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.striped = true;

        visuals
    }
}

// ── Themed widgets ───────────────────────────────────────────────────────────

/// A widget that takes its colours from the active palette.
pub trait Themed: Sized {
    fn themed(self, palette: &Palette) -> Self;
}

impl Themed for egui::Button<'_> {
    fn themed(self, palette: &Palette) -> Self {
        self.fill(palette.background)
            .stroke(Stroke::new(1.5, palette.border))
            .rounding(Rounding::same(WIDGET_ROUNDING))
    }
}

impl Themed for egui::Frame {
    fn themed(self, palette: &Palette) -> Self {
        self.fill(palette.background)
            .stroke(Stroke::new(1.0, palette.border))
    }
}

/// Install the palette's visuals and spacing on the context.
pub fn apply_theme(ctx: &egui::Context, palette: &Palette) {
    ctx.set_visuals(palette.visuals());

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
