//! Theme presets, palette, and visuals for the roster GUI.

use std::collections::BTreeMap;

use eframe::egui;
use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreset {
    SlateDark,
    SlateLegacy,
    EguiLight,
}

impl ThemePreset {
    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::SlateDark => "Slate (Dark)",
            ThemePreset::SlateLegacy => "Slate (Legacy)",
            ThemePreset::EguiLight => "Egui Light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSettings {
    pub preset: ThemePreset,
    pub accent_color: Color32,
    pub panel_rounding: u8,
    pub list_row_shading: bool,
}

impl ThemeSettings {
    pub fn slate_default() -> Self {
        Self {
            preset: ThemePreset::SlateDark,
            accent_color: Color32::from_rgb(96, 108, 236),
            panel_rounding: 10,
            list_row_shading: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiReadabilitySettings {
    pub text_scale: f32,
    pub compact_density: bool,
}

impl UiReadabilitySettings {
    pub fn defaults() -> Self {
        Self {
            text_scale: 1.0,
            compact_density: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SlatePalette {
    // Backgrounds:
    pub app_background: Color32,
    pub bar_background: Color32,
    pub row_hover: Color32,
    pub row_shade: Color32,

    // Text:
    pub primary_text: Color32,
    pub secondary_text: Color32,
    pub hint_text: Color32,
    pub title_text: Color32,

    // Item styling:
    pub item_stroke: Color32,
    pub item_stroke_active: Color32,
}

pub fn theme_slate_palette(theme: ThemeSettings) -> Option<SlatePalette> {
    (theme.preset == ThemePreset::SlateDark).then_some(SlatePalette {
        // Backgrounds:
        app_background: Color32::from_rgb(26, 27, 31),
        bar_background: Color32::from_rgb(18, 19, 22),
        row_hover: Color32::from_rgb(42, 44, 50),
        row_shade: Color32::from_rgb(30, 31, 36),
        // Text:
        primary_text: Color32::from_rgb(240, 240, 243),
        secondary_text: Color32::from_rgb(168, 170, 180),
        hint_text: Color32::from_rgb(110, 112, 122),
        title_text: Color32::from_rgb(251, 251, 251),
        // Item styling:
        item_stroke: Color32::from_rgb(48, 49, 56),
        item_stroke_active: Color32::from_rgb(90, 92, 104),
    })
}

pub fn slate_fallback_palette() -> SlatePalette {
    theme_slate_palette(ThemeSettings::slate_default())
        .expect("SlateDark fallback palette should always exist")
}

pub fn visuals_for_theme(theme: ThemeSettings) -> egui::Visuals {
    let mut visuals = match theme.preset {
        ThemePreset::SlateDark => {
            let mut v = egui::Visuals::dark();
            let palette = theme_slate_palette(theme)
                .expect("SlateDark palette should exist for SlateDark preset");
            v.override_text_color = None;
            v.window_fill = palette.app_background;
            v.panel_fill = palette.app_background;
            v.extreme_bg_color = Color32::from_rgb(20, 21, 24);
            v.faint_bg_color = palette.row_shade;
            v
        }
        ThemePreset::SlateLegacy => {
            let mut v = egui::Visuals::dark();
            v.override_text_color = Some(Color32::from_rgb(211, 214, 219));
            v.window_fill = Color32::from_rgb(49, 51, 58);
            v.panel_fill = Color32::from_rgb(44, 46, 52);
            v.extreme_bg_color = Color32::from_rgb(31, 33, 37);
            v.faint_bg_color = Color32::from_rgb(60, 63, 70);
            v
        }
        ThemePreset::EguiLight => egui::Visuals::light(),
    };

    visuals.hyperlink_color = theme.accent_color;
    visuals.selection.bg_fill = theme.accent_color;
    visuals.widgets.active.bg_fill = theme.accent_color;
    visuals.widgets.hovered.bg_fill = theme.accent_color.gamma_multiply(0.85);

    // Popup/menu polish so dropdowns match the active theme.
    let popup_radius = theme.panel_rounding.clamp(4, 16);
    visuals.menu_corner_radius = egui::CornerRadius::same(popup_radius);
    visuals.window_corner_radius = egui::CornerRadius::same(popup_radius.saturating_add(2));

    if let Some(palette) = theme_slate_palette(theme) {
        visuals.window_fill = palette.bar_background;
        visuals.panel_fill = palette.app_background;
        visuals.window_stroke = egui::Stroke::new(1.0, palette.item_stroke);
        visuals.widgets.noninteractive.bg_fill = palette.bar_background;
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.item_stroke);
        visuals.widgets.inactive.bg_fill = palette.row_hover;
        visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.item_stroke);
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, palette.item_stroke_active);
    }

    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

pub fn lighten_color(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}
