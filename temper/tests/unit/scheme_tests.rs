use temper::scheme::{AlertField, BadgeField, NavField, linear_gradient};
use temper::{ColorScheme, Composer, Shade, ThemeColors, ThemeError, UiSlot, compose_scheme};

#[test]
fn test_compose_reference_scheme() {
    let scheme = compose_scheme("#70843d", "#7bd63c", None).unwrap();

    assert_eq!(scheme.primary.get(Shade::S500), "#70843d");
    assert_eq!(scheme.secondary.get(Shade::S500), "#7bd63c");
    assert_eq!(
        scheme.gradients.button,
        "linear-gradient(135deg, #70843d 0%, #7bd63c 100%)"
    );
    assert_eq!(scheme.text.link, "#70843d");
    assert_eq!(scheme.text.link_hover, scheme.primary.get(Shade::S600));
    assert_eq!(scheme.border.focus, "#70843d");
}

#[test]
fn test_compose_gradients() {
    let scheme = compose_scheme("#70843d", "#7bd63c", None).unwrap();
    let p = &scheme.primary;

    assert_eq!(
        scheme.gradients.primary,
        format!("linear-gradient(135deg, #70843d 0%, {} 100%)", p.get(Shade::S700))
    );
    assert_eq!(
        scheme.gradients.secondary,
        format!(
            "linear-gradient(135deg, #7bd63c 0%, {} 100%)",
            scheme.secondary.get(Shade::S700)
        )
    );
    assert_eq!(
        scheme.gradients.accent,
        format!(
            "linear-gradient(135deg, {} 0%, #70843d 50%, #7bd63c 100%)",
            p.get(Shade::S400)
        )
    );
}

#[test]
fn test_compose_normalizes_input() {
    let scheme = compose_scheme("70843D", "#7BD63C", None).unwrap();
    assert_eq!(scheme.primary.get(Shade::S500), "#70843d");
    assert_eq!(
        scheme.gradients.button,
        "linear-gradient(135deg, #70843d 0%, #7bd63c 100%)"
    );
}

#[test]
fn test_compose_is_deterministic() {
    let a = compose_scheme("#336699", "#ff6600", None).unwrap().to_json().unwrap();
    let b = compose_scheme("#336699", "#ff6600", None).unwrap().to_json().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_compose_fails_fast_on_malformed_colors() {
    for bad in ["not-a-color", "#12", ""] {
        assert_eq!(
            compose_scheme(bad, "#7bd63c", None),
            Err(ThemeError::InvalidColorFormat(bad.to_string()))
        );
        assert_eq!(
            compose_scheme("#70843d", bad, None),
            Err(ThemeError::InvalidColorFormat(bad.to_string()))
        );
    }
}

#[test]
fn test_compose_preserves_previous_ui() {
    let mut previous = compose_scheme("#70843d", "#7bd63c", None).unwrap();
    previous
        .set_ui_color(UiSlot::Badge(BadgeField::Sale), "#123456")
        .unwrap();
    previous
        .set_ui_color(UiSlot::Alert(AlertField::ErrorBackground), "#ABCDEF")
        .unwrap();

    let next = compose_scheme("#1e3a8a", "#f97316", Some(&previous)).unwrap();

    assert_eq!(next.ui, previous.ui);
    assert_eq!(next.ui.badge.sale, "#123456");
    assert_eq!(next.ui.alert.error_background, "#abcdef");
    assert_eq!(next.primary.get(Shade::S500), "#1e3a8a");
}

#[test]
fn test_compose_without_previous_uses_template_ui() {
    let mut template = ColorScheme::default();
    template.ui.nav.background = "#0f172a".to_string();
    template.text.primary = "#111111".to_string();
    let composer = Composer::new(template);

    let scheme = composer.compose("#70843d", "#7bd63c", None).unwrap();
    assert_eq!(scheme.ui.nav.background, "#0f172a");
    assert_eq!(scheme.text.primary, "#111111");

    // composing must not leak into the template
    assert_eq!(composer.template().text.link, ColorScheme::default().text.link);
}

#[test]
fn test_theme_colors_request_body() {
    let body = r##"{ "primaryColor": "#70843d", "secondaryColor": "#7bd63c" }"##;
    let colors: ThemeColors = serde_json::from_str(body).unwrap();
    assert_eq!(colors, ThemeColors::new("#70843d", "#7bd63c"));

    let scheme = colors.compose(None).unwrap();
    assert_eq!(scheme.secondary.get(Shade::S500), "#7bd63c");
}

#[test]
fn test_set_ui_color_validates_value() {
    let mut scheme = ColorScheme::default();
    let slot: UiSlot = "nav.active".parse().unwrap();
    assert_eq!(slot, UiSlot::Nav(NavField::Active));

    assert_eq!(
        scheme.set_ui_color(slot, "red"),
        Err(ThemeError::InvalidColorFormat("red".to_string()))
    );
    assert_eq!(scheme.ui_color(slot), ColorScheme::default().ui.nav.active);

    scheme.set_ui_color(slot, "#00AA00").unwrap();
    assert_eq!(scheme.ui_color(slot), "#00aa00");
}

#[test]
fn test_unknown_slot_is_rejected() {
    assert_eq!(
        "badge.clearance".parse::<UiSlot>(),
        Err(ThemeError::UnknownColorSlot("badge.clearance".to_string()))
    );
}

#[test]
fn test_partial_stored_scheme_fills_defaults() {
    let json = r##"{
        "primary": { "50": "#f0f0f0", "100": "#e0e0e0", "200": "#d0d0d0", "300": "#c0c0c0",
                     "400": "#b0b0b0", "500": "#a0a0a0", "600": "#909090", "700": "#808080",
                     "800": "#707070", "900": "#606060" },
        "ui": { "badge": { "sale": "#222222" } }
    }"##;
    let scheme = ColorScheme::from_json(json).unwrap();
    let defaults = ColorScheme::default();

    assert_eq!(scheme.primary.get(Shade::S500), "#a0a0a0");
    assert_eq!(scheme.secondary, defaults.secondary);
    assert_eq!(scheme.ui.badge.sale, "#222222");
    assert_eq!(scheme.ui.badge.hot, defaults.ui.badge.hot);
    assert_eq!(scheme.ui.alert, defaults.ui.alert);
}

#[test]
fn test_scheme_json_uses_camel_case() {
    let scheme = compose_scheme("#70843d", "#7bd63c", None).unwrap();
    let json = serde_json::to_value(&scheme).unwrap();

    assert_eq!(json["primary"]["500"], "#70843d");
    assert_eq!(json["text"]["linkHover"], scheme.text.link_hover.as_str());
    assert_eq!(json["ui"]["form"]["inputBackground"], "#ffffff");
    assert_eq!(
        json["gradients"]["button"],
        "linear-gradient(135deg, #70843d 0%, #7bd63c 100%)"
    );

    let back = ColorScheme::from_json(&scheme.to_json().unwrap()).unwrap();
    assert_eq!(back, scheme);
}

#[test]
fn test_linear_gradient_formatting() {
    assert_eq!(
        linear_gradient(&[("#000000", 0), ("#ffffff", 50), ("#ff0000", 100)]),
        "linear-gradient(135deg, #000000 0%, #ffffff 50%, #ff0000 100%)"
    );
}

#[test]
fn test_unknown_ui_keys_survive_recompose_and_save() {
    let json = r##"{
        "ui": {
            "badge": { "sale": "#222222", "clearance": "#333333" },
            "footer": { "background": "#111111" }
        }
    }"##;
    let stored = ColorScheme::from_json(json).unwrap();
    assert_eq!(stored.ui.badge.extra["clearance"], "#333333");
    assert_eq!(stored.ui.extra["footer"]["background"], "#111111");

    let next = compose_scheme("#70843d", "#7bd63c", Some(&stored)).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&next.to_json().unwrap()).unwrap();

    assert_eq!(saved["ui"]["badge"]["sale"], "#222222");
    assert_eq!(saved["ui"]["badge"]["clearance"], "#333333");
    assert_eq!(saved["ui"]["footer"]["background"], "#111111");

    // extras are stored, never published as variables
    assert!(!next.to_css(":root").contains("clearance"));
}
