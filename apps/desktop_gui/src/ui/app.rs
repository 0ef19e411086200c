use account_core::{demo_users, LoginSession, SessionState, UserStore};
use eframe::egui;
use shared::{domain::UserRecord, error::AuthError};

use crate::ui::theme::{
    lighten_color, scaled_text_styles, slate_fallback_palette, theme_slate_palette,
    visuals_for_theme, SlatePalette, ThemePreset, ThemeSettings, UiReadabilitySettings,
};

fn ui_in_rect(ui: &mut egui::Ui, rect: egui::Rect, add: impl FnOnce(&mut egui::Ui)) {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(rect);
    add(&mut child);
}

fn login_text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    hint: &str,
    value: &mut String,
    mask: bool,
    should_focus: bool,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .password(mask)
        .hint_text(
            egui::RichText::new(hint).color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
        )
        .desired_width(f32::INFINITY);

    // Taller inputs are easier to hit.
    let response = ui.add_sized([ui.available_width(), 34.0], edit);

    // One-time / directed focus that doesn't flicker.
    if should_focus {
        response.request_focus();
    }

    response
}

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub email: String,
    pub seed_demo: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

fn sign_in_failure_notice(err: &AuthError) -> String {
    match err {
        AuthError::InvalidCredentials => "Invalid email or password.".to_string(),
    }
}

/// Header text for the roster view. The signed-in name is rendered verbatim,
/// so an account that never picked one greets with a bare "Welcome, ".
fn welcome_banner_text(name: &str) -> String {
    format!("Welcome, {name}")
}

fn avatar_initial(user: &UserRecord) -> String {
    let source = if user.name.is_empty() {
        &user.email
    } else {
        &user.name
    };
    source
        .chars()
        .next()
        .map(|ch| ch.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppViewState {
    Login,
    Roster,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginFocusField {
    Email,
    Name,
}

#[derive(Debug, Clone)]
struct LoginUiState {
    focus: Option<LoginFocusField>,
    attempted_auto_focus: bool,
}

impl Default for LoginUiState {
    fn default() -> Self {
        Self {
            focus: Some(LoginFocusField::Email),
            attempted_auto_focus: false,
        }
    }
}

pub struct RosterGuiApp {
    session: LoginSession,

    email_input: String,
    password_input: String,
    name_input: String,

    // Snapshot taken when the roster view is entered; the list is not
    // re-read while the view stays open.
    roster: Vec<UserRecord>,
    welcome_name: String,

    status: String,
    status_banner: Option<StatusBanner>,

    settings_open: bool,
    account_menu_open: bool,
    view_state: AppViewState,

    theme: ThemeSettings,
    applied_theme: Option<ThemeSettings>,
    readability: UiReadabilitySettings,
    applied_readability: Option<UiReadabilitySettings>,

    // Stable per-view UI state so text boxes keep focus reliably.
    login_ui: LoginUiState,
}

impl RosterGuiApp {
    pub fn bootstrap(startup: StartupConfig) -> Self {
        let store = if startup.seed_demo {
            UserStore::with_users(demo_users())
        } else {
            UserStore::new()
        };
        Self::new(LoginSession::with_store(store), startup)
    }

    fn new(session: LoginSession, startup: StartupConfig) -> Self {
        Self {
            session,
            email_input: startup.email,
            password_input: String::new(),
            name_input: String::new(),
            roster: Vec::new(),
            welcome_name: String::new(),
            status: "Not signed in".to_string(),
            status_banner: None,
            settings_open: false,
            account_menu_open: false,
            view_state: AppViewState::Login,
            theme: ThemeSettings::slate_default(),
            applied_theme: None,
            readability: UiReadabilitySettings::defaults(),
            applied_readability: None,
            login_ui: LoginUiState::default(),
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme)
            && self.applied_readability == Some(self.readability)
        {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(self.theme);
        style.text_styles = scaled_text_styles(self.readability.text_scale);

        // Make text inputs reliably clickable and visible:
        style.visuals.widgets.inactive.bg_stroke =
            egui::Stroke::new(1.0, style.visuals.widgets.noninteractive.bg_stroke.color);
        style.visuals.widgets.hovered.bg_stroke =
            egui::Stroke::new(1.0, style.visuals.widgets.hovered.bg_stroke.color);
        style.visuals.widgets.active.bg_stroke =
            egui::Stroke::new(1.2, style.visuals.selection.bg_fill.gamma_multiply(0.9));

        if self.readability.compact_density {
            style.spacing.item_spacing = egui::vec2(6.0, 4.0);
            style.spacing.button_padding = egui::vec2(8.0, 5.0);
            style.spacing.interact_size = egui::vec2(40.0, 24.0);
        } else {
            style.spacing.item_spacing = egui::vec2(8.0, 6.0);
            style.spacing.button_padding = egui::vec2(10.0, 6.0);
            style.spacing.interact_size = egui::vec2(40.0, 30.0);
        }
        ctx.set_style(style);
        self.applied_theme = Some(self.theme);
        self.applied_readability = Some(self.readability);
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        let window_frame = egui::Frame::NONE
            .fill(ctx.style().visuals.window_fill)
            .stroke(egui::Stroke::new(
                1.0,
                ctx.style().visuals.window_stroke().color,
            ))
            .corner_radius(self.popup_corner_radius())
            .inner_margin(egui::Margin::symmetric(12, 10));

        let mut settings_open = self.settings_open;
        let mut close_requested = false;

        egui::Window::new("settings_window")
            .title_bar(false)
            .frame(window_frame)
            .open(&mut settings_open)
            .resizable(false)
            .show(ctx, |ui| {
                self.apply_popup_menu_style(ui);
                ui.horizontal(|ui| {
                    self.show_popup_section_title(ui, "Settings");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            close_requested = true;
                        }
                    });
                });
                ui.separator();
                self.show_popup_section_title(ui, "Theme");
                ui.label("Theme preset");
                egui::ComboBox::from_id_salt("theme_preset")
                    .selected_text(self.theme.preset.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.theme.preset,
                            ThemePreset::SlateDark,
                            ThemePreset::SlateDark.label(),
                        );
                        ui.selectable_value(
                            &mut self.theme.preset,
                            ThemePreset::SlateLegacy,
                            ThemePreset::SlateLegacy.label(),
                        );
                        ui.selectable_value(
                            &mut self.theme.preset,
                            ThemePreset::EguiLight,
                            ThemePreset::EguiLight.label(),
                        );
                    });

                ui.separator();
                self.show_popup_section_title(ui, "Colors");
                ui.label("Accent color");
                ui.color_edit_button_srgba(&mut self.theme.accent_color);
                ui.small("Used for primary actions and selected rows.");
                ui.add(
                    egui::Slider::new(&mut self.theme.panel_rounding, 0..=16)
                        .text("Panel rounding"),
                );
                ui.checkbox(
                    &mut self.theme.list_row_shading,
                    "Use shaded backgrounds for roster rows",
                );
                ui.separator();
                self.show_popup_section_title(ui, "Readability");
                ui.add(
                    egui::Slider::new(&mut self.readability.text_scale, 0.8..=1.4)
                        .text("Text scale")
                        .step_by(0.05),
                );
                ui.checkbox(&mut self.readability.compact_density, "Compact UI density");

                if ui.button("Reset all settings to defaults").clicked() {
                    self.theme = ThemeSettings::slate_default();
                    self.readability = UiReadabilitySettings::defaults();
                }
            });

        self.settings_open = settings_open && !close_requested;
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
        }
    }

    fn popup_corner_radius(&self) -> egui::CornerRadius {
        egui::CornerRadius::same(self.theme.panel_rounding)
    }

    fn apply_popup_menu_style(&self, ui: &mut egui::Ui) {
        let s = ui.style_mut();
        let radius = self.popup_corner_radius();
        s.spacing.button_padding = egui::vec2(8.0, 4.0);
        s.spacing.item_spacing = egui::vec2(6.0, 4.0);
        s.visuals.widgets.inactive.corner_radius = radius;
        s.visuals.widgets.hovered.corner_radius = radius;
        s.visuals.widgets.active.corner_radius = radius;
        s.visuals.widgets.open.corner_radius = radius;
        s.visuals.widgets.noninteractive.corner_radius = radius;
    }

    fn show_popup_section_title(&self, ui: &mut egui::Ui, title: &str) {
        ui.label(
            egui::RichText::new(title)
                .strong()
                .size(13.0 * self.readability.text_scale),
        );
    }

    fn show_login_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let card_width = avail.x.clamp(420.0, 520.0);
            let top_space = (avail.y * 0.12).clamp(18.0, 90.0);

            ui.add_space(top_space);

            // Centered card
            ui.vertical_centered(|ui| {
                ui.set_width(card_width);

                let palette = theme_slate_palette(self.theme);
                let card_fill = palette
                    .map(|p| lighten_color(p.app_background, 0.06))
                    .unwrap_or_else(|| lighten_color(ui.visuals().panel_fill, 0.02));

                egui::Frame::NONE
                    .fill(card_fill)
                    .corner_radius(14.0)
                    .stroke(egui::Stroke::new(
                        1.0,
                        ui.visuals().widgets.noninteractive.bg_stroke.color,
                    ))
                    .inner_margin(egui::Margin::symmetric(20, 18))
                    .show(ui, |ui| {
                        ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);

                        // Header
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("👥").size(24.0));
                            ui.vertical(|ui| {
                                ui.heading("Proto Roster");
                                ui.weak("Sign in, or register a new account.");
                            });
                        });

                        ui.add_space(8.0);
                        self.show_status_banner(ui);

                        // Determine focus request (once, or after the
                        // register flow redirects it to the name field)
                        let mut focus_to_set = None;
                        if !self.login_ui.attempted_auto_focus {
                            self.login_ui.attempted_auto_focus = true;
                            focus_to_set = self.login_ui.focus;
                        } else if self.login_ui.focus.is_some() {
                            focus_to_set = self.login_ui.focus;
                            self.login_ui.focus = None;
                        }

                        let registering = self.session.is_registering();

                        // Fields (stacked)
                        egui::Frame::NONE
                            .fill(ui.visuals().faint_bg_color.gamma_multiply(0.55))
                            .corner_radius(12.0)
                            .inner_margin(egui::Margin::symmetric(14, 12))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new("Account")
                                        .strong()
                                        .size(20.0 * self.readability.text_scale),
                                );
                                ui.add_space(6.0);

                                let mut email_buf = self.email_input.clone();
                                let mut password_buf = self.password_input.clone();
                                let mut name_buf = self.name_input.clone();

                                // Credential fields lock once registration
                                // has captured them; the pending record
                                // already holds these values.
                                let mut credential_responses = None;
                                ui.add_enabled_ui(!registering, |ui| {
                                    let email_resp = login_text_field(
                                        ui,
                                        "login_email",
                                        "Email",
                                        "you@example.com",
                                        &mut email_buf,
                                        false,
                                        focus_to_set == Some(LoginFocusField::Email),
                                    );

                                    ui.add_space(6.0);

                                    let password_resp = login_text_field(
                                        ui,
                                        "login_password",
                                        "Password",
                                        "Password",
                                        &mut password_buf,
                                        true,
                                        false,
                                    );
                                    credential_responses = Some((email_resp, password_resp));
                                });

                                let mut name_resp = None;
                                if registering {
                                    ui.add_space(6.0);
                                    name_resp = Some(login_text_field(
                                        ui,
                                        "login_display_name",
                                        "Display name",
                                        "Shown next to your email in the roster",
                                        &mut name_buf,
                                        false,
                                        focus_to_set == Some(LoginFocusField::Name),
                                    ));
                                }

                                self.email_input = email_buf;
                                self.password_input = password_buf;
                                self.name_input = name_buf;

                                // Enter submits if any login field has focus
                                let enter_pressed = ctx.input(|i| i.key_pressed(egui::Key::Enter));
                                let can_submit = credential_responses
                                    .as_ref()
                                    .map(|(email, password)| {
                                        email.has_focus() || password.has_focus()
                                    })
                                    .unwrap_or(false)
                                    || name_resp.as_ref().map(|r| r.has_focus()).unwrap_or(false);
                                if can_submit && enter_pressed {
                                    self.try_login();
                                }
                            });

                        ui.add_space(10.0);

                        // Action row: sign in plus register
                        ui.horizontal(|ui| {
                            let gap = ui.spacing().item_spacing.x;
                            let half_width = (ui.available_width() - gap) / 2.0;

                            let mut sign_in_btn = egui::Button::new(
                                egui::RichText::new("Log in").strong().size(16.0),
                            )
                            .min_size(egui::vec2(half_width, 40.0));
                            if let Some(p) = theme_slate_palette(self.theme) {
                                sign_in_btn = sign_in_btn
                                    .fill(self.theme.accent_color)
                                    .stroke(egui::Stroke::new(1.0, p.item_stroke_active));
                            }
                            if ui.add(sign_in_btn).clicked() {
                                self.try_login();
                            }

                            let register_btn =
                                egui::Button::new(egui::RichText::new("Register").size(16.0))
                                    .min_size(egui::vec2(half_width, 40.0));
                            let register_resp = ui
                                .add_enabled(!registering, register_btn)
                                .on_disabled_hover_text(
                                    "Registration is open. Sign in to finish it.",
                                );
                            if register_resp.clicked() {
                                self.try_register();
                            }
                        });

                        ui.add_space(10.0);
                        ui.separator();
                        ui.add_space(6.0);

                        ui.horizontal_wrapped(|ui| {
                            ui.small("Status:");
                            ui.small(egui::RichText::new(&self.status).weak());
                        });
                    });
            });

            ui.add_space((avail.y * 0.08).clamp(12.0, 60.0));
        });
    }

    /// Register click: the record is written with the credential fields as
    /// they stand, then the card locks those fields and asks for a display
    /// name to finish with.
    fn try_register(&mut self) {
        self.session
            .begin_registration(&self.email_input, &self.password_input);
        self.status = "Registered. Pick a display name and sign in.".to_string();
        self.status_banner = None;
        self.login_ui.focus = Some(LoginFocusField::Name);
    }

    /// Submits the fields exactly as typed. No trimming and no emptiness
    /// checks: a blank submission runs the same scan and earns the same
    /// notice as any other mismatch.
    fn try_login(&mut self) {
        match self
            .session
            .submit_login(&self.email_input, &self.password_input, &self.name_input)
        {
            Ok(user) => self.complete_sign_in(user),
            Err(err) => {
                self.status = "Sign-in failed".to_string();
                self.status_banner = Some(StatusBanner {
                    severity: StatusBannerSeverity::Error,
                    message: sign_in_failure_notice(&err),
                });
            }
        }
    }

    fn complete_sign_in(&mut self, user: UserRecord) {
        self.welcome_name = user.name.clone();
        self.roster = self.session.store().list_users().to_vec();
        self.view_state = AppViewState::Roster;
        self.status = format!("Signed in as {}", user.email);
        self.status_banner = None;
        self.email_input.clear();
        self.password_input.clear();
        self.name_input.clear();
        tracing::debug!(roster_len = self.roster.len(), "ui: entered roster view");
    }

    fn sign_out(&mut self) {
        self.session.log_out();
        self.view_state = AppViewState::Login;
        self.status = "Signed out".to_string();
        self.status_banner = None;
        self.account_menu_open = false;
        self.welcome_name.clear();
        self.roster.clear();
        self.login_ui = LoginUiState::default();
        tracing::debug!("ui: returned to sign-in view");
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        let palette = theme_slate_palette(self.theme).unwrap_or_else(slate_fallback_palette);

        egui::TopBottomPanel::top("roster_top_bar")
            .resizable(false)
            .exact_height(30.0)
            .frame(
                egui::Frame::new()
                    .fill(palette.bar_background)
                    .inner_margin(egui::Margin::symmetric(6, 2)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Settings").clicked() {
                        self.settings_open = !self.settings_open;
                    }

                    let account_label = if self.account_menu_open {
                        "Account ▾"
                    } else {
                        "Account"
                    };
                    if ui.button(account_label).clicked() {
                        self.account_menu_open = !self.account_menu_open;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Log out").clicked() {
                            self.sign_out();
                        }
                        ui.label(
                            egui::RichText::new(format!("{} registered", self.roster.len()))
                                .color(palette.hint_text)
                                .size(11.0),
                        );
                    });
                });
            });

        if self.account_menu_open {
            let mut keep_open = true;
            egui::Window::new("Account")
                .id(egui::Id::new("account_menu_window"))
                .title_bar(false)
                .resizable(false)
                .collapsible(false)
                .anchor(egui::Align2::LEFT_TOP, egui::vec2(78.0, 32.0))
                .open(&mut keep_open)
                .frame(
                    egui::Frame::popup(&ctx.style())
                        .fill(palette.app_background)
                        .stroke(egui::Stroke::new(1.0, palette.item_stroke))
                        .corner_radius(egui::CornerRadius::same(6)),
                )
                .show(ctx, |ui| {
                    self.show_account_menu_contents(ui);
                });
            self.account_menu_open = self.account_menu_open && keep_open;
        }
    }

    fn show_account_menu_contents(&mut self, ui: &mut egui::Ui) {
        self.apply_popup_menu_style(ui);
        let signed_in = self.session.state() == SessionState::LoggedIn;

        ui.set_min_width(240.0);
        match self.session.current_user() {
            Some(user) => {
                ui.label(egui::RichText::new(&user.email).strong());
                if !user.name.is_empty() {
                    ui.small(user.name.clone());
                }
            }
            None => {
                ui.label(egui::RichText::new("Nobody signed in").strong());
            }
        }
        ui.small(format!(
            "Session: {}",
            if signed_in { "Signed in" } else { "Signed out" }
        ));

        ui.separator();
        let sign_out = ui
            .add_enabled(signed_in, egui::Button::new("Sign out"))
            .on_disabled_hover_text("No active session to sign out from.");
        if sign_out.clicked() {
            self.sign_out();
            ui.close();
        }
    }

    fn show_roster_screen(&mut self, ctx: &egui::Context) {
        self.show_top_bar(ctx);
        self.show_settings_window(ctx);

        let palette = theme_slate_palette(self.theme).unwrap_or_else(slate_fallback_palette);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(palette.app_background)
                    .inner_margin(egui::Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                ui.heading(
                    egui::RichText::new(welcome_banner_text(&self.welcome_name))
                        .color(palette.title_text),
                );
                ui.label(
                    egui::RichText::new("Everyone registered on this device, oldest first.")
                        .color(palette.secondary_text)
                        .size(12.5 * self.readability.text_scale),
                );
                ui.add_space(8.0);
                ui.separator();
                ui.add_space(4.0);

                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(format!("REGISTERED — {}", self.roster.len()))
                            .size(11.0)
                            .color(palette.hint_text)
                            .strong(),
                    );
                    for (index, user) in self.roster.iter().enumerate() {
                        render_roster_row(ui, user, index, self.theme.list_row_shading, &palette);
                    }
                    if self.roster.is_empty() {
                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new("Nobody is registered yet.")
                                .color(palette.hint_text),
                        );
                    }
                });
            });
    }
}

fn render_roster_row(
    ui: &mut egui::Ui,
    user: &UserRecord,
    row_index: usize,
    shade_rows: bool,
    palette: &SlatePalette,
) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 38.0), egui::Sense::hover());
    let hovered = ui.rect_contains_pointer(rect);
    if hovered {
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(4), palette.row_hover);
    } else if shade_rows && row_index % 2 == 1 {
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(4), palette.row_shade);
    }
    let row = rect.shrink2(egui::vec2(6.0, 4.0));
    let avatar_rect = egui::Rect::from_min_size(
        egui::pos2(row.left(), row.center().y - 14.0),
        egui::vec2(28.0, 28.0),
    );
    ui.painter().rect_filled(
        avatar_rect,
        egui::CornerRadius::same(14),
        egui::Color32::from_rgb(76, 91, 135),
    );
    ui.painter().text(
        avatar_rect.center(),
        egui::Align2::CENTER_CENTER,
        avatar_initial(user),
        egui::FontId::proportional(13.0),
        palette.primary_text,
    );
    let text_rect = egui::Rect::from_min_max(
        egui::pos2(avatar_rect.right() + 8.0, row.top()),
        egui::pos2(row.right(), row.bottom()),
    );
    ui_in_rect(ui, text_rect, |ui| {
        ui.spacing_mut().item_spacing = egui::vec2(0.0, 0.0);
        ui.label(
            egui::RichText::new(&user.email)
                .size(13.0)
                .color(palette.primary_text),
        );
        // The name line may be blank for accounts registered without one.
        ui.label(
            egui::RichText::new(&user.name)
                .size(10.5)
                .color(palette.secondary_text),
        );
    });
}

impl eframe::App for RosterGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        match self.view_state {
            AppViewState::Login => self.show_login_screen(ctx),
            AppViewState::Roster => self.show_roster_screen(ctx),
        }

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_notice_matches_sign_in_toast_wording() {
        assert_eq!(
            sign_in_failure_notice(&AuthError::InvalidCredentials),
            "Invalid email or password."
        );
    }

    #[test]
    fn welcome_banner_renders_empty_names_verbatim() {
        assert_eq!(welcome_banner_text("Ada"), "Welcome, Ada");
        assert_eq!(welcome_banner_text(""), "Welcome, ");
    }

    #[test]
    fn avatar_initial_prefers_name_over_email() {
        let named = UserRecord::new("ada lovelace", "pw", "zz@example.com");
        assert_eq!(avatar_initial(&named), "A");

        let nameless = UserRecord::new("", "pw", "grace@example.com");
        assert_eq!(avatar_initial(&nameless), "G");
    }

    #[test]
    fn avatar_initial_falls_back_for_blank_records() {
        let blank = UserRecord::new("", "", "");
        assert_eq!(avatar_initial(&blank), "?");
    }

    #[test]
    fn completed_sign_in_snapshots_roster_and_clears_drafts() {
        let mut app = RosterGuiApp::bootstrap(StartupConfig {
            email: String::new(),
            seed_demo: true,
        });
        app.email_input = "ada@example.com".to_string();
        app.password_input = "analytical-engine".to_string();

        app.try_login();
        assert_eq!(app.view_state, AppViewState::Roster);
        assert_eq!(app.welcome_name, "Ada Lovelace");
        assert_eq!(app.roster.len(), demo_users().len());
        assert!(app.email_input.is_empty());
        assert!(app.password_input.is_empty());
        assert!(app.status_banner.is_none());
    }

    #[test]
    fn rejected_sign_in_raises_error_banner() {
        let mut app = RosterGuiApp::bootstrap(StartupConfig::default());
        app.email_input = "nobody@example.com".to_string();
        app.password_input = "pw".to_string();

        app.try_login();
        assert_eq!(app.view_state, AppViewState::Login);
        let banner = app.status_banner.as_ref().expect("banner");
        assert_eq!(banner.severity, StatusBannerSeverity::Error);
        assert_eq!(banner.message, "Invalid email or password.");
    }

    #[test]
    fn register_then_sign_out_keeps_the_record_for_next_session() {
        let mut app = RosterGuiApp::bootstrap(StartupConfig::default());
        app.email_input = "noor@example.com".to_string();
        app.password_input = "orchid".to_string();

        app.try_register();
        assert!(app.session.is_registering());
        assert_eq!(app.session.store().len(), 1);

        app.name_input = "Noor".to_string();
        app.try_login();
        assert_eq!(app.view_state, AppViewState::Roster);
        assert_eq!(app.welcome_name, "Noor");

        app.sign_out();
        assert_eq!(app.view_state, AppViewState::Login);
        assert_eq!(app.session.store().len(), 1, "roster survives sign-out");
        assert!(app.roster.is_empty(), "view snapshot is dropped on sign-out");
    }
}
