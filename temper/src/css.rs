use crate::palette::ColorRamp;
use crate::scheme::{ColorScheme, UiSlot};

pub struct CssRule {
    selector: String,
    properties: Vec<(String, String)>,
}

impl CssRule {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, name: &str, value: &str) -> Self {
        self.properties.push((name.to_string(), value.to_string()));
        self
    }

    pub fn properties<I>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.properties.extend(properties);
        self
    }

    pub fn render(&self) -> String {
        let mut css = format!("{} {{\n", self.selector);
        for (name, value) in &self.properties {
            css.push_str(&format!("    {name}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}

/// `inputBackground` -> `input-background`
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

impl ColorRamp {
    /// `--color-{role}-{shade}` for every shade, 50 first.
    pub fn css_variables(&self, role: &str) -> Vec<(String, String)> {
        self.iter()
            .map(|(shade, hex)| (format!("--color-{role}-{shade}"), hex.to_string()))
            .collect()
    }
}

impl ColorScheme {
    /// Flattens the scheme into custom property declarations, ramps first,
    /// then text, border, gradients and UI slots.
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let mut vars = self.primary.css_variables("primary");
        vars.extend(self.secondary.css_variables("secondary"));

        let text = &self.text;
        for (name, value) in [
            ("primary", &text.primary),
            ("secondary", &text.secondary),
            ("muted", &text.muted),
            ("inverse", &text.inverse),
            ("link", &text.link),
            ("link-hover", &text.link_hover),
        ] {
            vars.push((format!("--color-text-{name}"), value.clone()));
        }

        let border = &self.border;
        for (name, value) in [
            ("default", &border.default),
            ("light", &border.light),
            ("focus", &border.focus),
        ] {
            vars.push((format!("--color-border-{name}"), value.clone()));
        }

        let gradients = &self.gradients;
        for (name, value) in [
            ("primary", &gradients.primary),
            ("secondary", &gradients.secondary),
            ("button", &gradients.button),
            ("accent", &gradients.accent),
        ] {
            vars.push((format!("--gradient-{name}"), value.clone()));
        }

        for slot in UiSlot::all() {
            vars.push((
                format!("--color-{}-{}", slot.category(), kebab_case(slot.field())),
                self.ui_color(slot).to_string(),
            ));
        }

        vars
    }

    pub fn to_css_rule(&self, selector: &str) -> CssRule {
        CssRule::new(selector).properties(self.css_variables())
    }

    pub fn to_css(&self, selector: &str) -> String {
        self.to_css_rule(selector).render()
    }
}
