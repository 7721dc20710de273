//! SVG generation for signature paths

use std::collections::HashSet;

use crate::geometry::{BoundingBox, Point};
use crate::layout::{fold_key, KeyGrid};
use crate::path::Path;
use crate::signature::SignatureGeometry;
use crate::theme::Theme;

use super::{StrokeStyle, SvgConfig};

/// Keyboard drawn underneath the signature
#[derive(Debug, Clone, Copy)]
pub struct KeyOverlay<'a> {
    pub grid: &'a KeyGrid,
    pub geometry: SignatureGeometry,
    /// Typed text, used to highlight active keys and the latest key
    pub text: &'a str,
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add CSS custom properties from a theme, plus the key cap rules
    pub fn add_key_styles(&mut self, theme: &Theme) {
        let prefix = self.prefix();
        let mut css = String::from(":root {");
        for (token, value) in theme.sorted_tokens() {
            css.push_str(&format!(" --{}: {};", token, value));
        }
        css.push_str(" }");
        self.styles.push(css);
        self.styles.push(format!(
            ".{prefix}key {{ fill: var(--background); stroke: var(--border); opacity: 0.4; }}"
        ));
        self.styles.push(format!(
            ".{prefix}key-active {{ fill: var(--muted); opacity: 1; }}"
        ));
        self.styles.push(format!(
            ".{prefix}key-latest {{ fill: var(--accent); stroke: var(--foreground); stroke-width: 2; opacity: 1; }}"
        ));
        self.styles.push(format!(
            ".{prefix}key-label {{ fill: var(--muted-foreground); font: 600 16px monospace; }}"
        ));
        self.styles.push(format!(
            ".{prefix}key-label-active {{ fill: var(--foreground); }}"
        ));
    }

    /// Add a left-to-right linear gradient across the horizontal extent of
    /// `bounds`.
    ///
    /// A zero-width extent gets a 1px buffer so the gradient vector never
    /// collapses when the signature is a vertical stroke.
    pub fn add_gradient(&mut self, bounds: BoundingBox, from: &str, to: &str) {
        let prefix = self.prefix();
        let x2 = if bounds.width == 0.0 {
            bounds.right() + 1.0
        } else {
            bounds.right()
        };
        self.defs.push(format!(
            r#"<linearGradient id="{prefix}gradient" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">
      <stop offset="0%" stop-color="{}"/>
      <stop offset="100%" stop-color="{}"/>
    </linearGradient>"#,
            bounds.x,
            bounds.y,
            x2,
            bounds.y,
            escape_xml(from),
            escape_xml(to)
        ));
    }

    /// Add one key cap with its label
    pub fn add_key(
        &mut self,
        label: char,
        corner: Point,
        (width, height): (f64, f64),
        active: bool,
        latest: bool,
    ) {
        let prefix = self.prefix();
        let mut rect_classes = vec![format!("{}key", prefix)];
        let mut label_classes = vec![format!("{}key-label", prefix)];
        if latest {
            rect_classes.push(format!("{}key-latest", prefix));
        } else if active {
            rect_classes.push(format!("{}key-active", prefix));
        }
        if active || latest {
            label_classes.push(format!("{}key-label-active", prefix));
        }

        self.elements.push(format!(
            r#"{}<rect class="{}" x="{}" y="{}" width="{}" height="{}" rx="{}"/>"#,
            self.indent_str(),
            rect_classes.join(" "),
            corner.x,
            corner.y,
            width,
            height,
            self.config.key_radius
        ));
        self.elements.push(format!(
            r#"{}<text class="{}" x="{}" y="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            self.indent_str(),
            label_classes.join(" "),
            corner.x + width / 2.0,
            corner.y + height / 2.0,
            escape_xml(&label.to_string())
        ));
    }

    /// Add the stroked signature path
    pub fn add_signature_path(&mut self, d: &str, stroke: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<path class="{}signature" d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.indent_str(),
            prefix,
            d,
            escape_xml(stroke),
            self.config.stroke_width
        ));
    }

    /// Add a group element with optional classes
    pub fn start_group(&mut self, classes: &[String]) {
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };

        self.elements
            .push(format!("{}<g{}>", self.indent_str(), class_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();
        let (w, h) = (self.config.width, self.config.height);

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            w, h, w, h
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        if !self.defs.is_empty() {
            svg.push_str("  <defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str("    ");
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str("  </defs>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a signature path (and optionally the keyboard) to an SVG document
pub fn render_signature_svg(
    path: &Path,
    config: &SvgConfig,
    theme: &Theme,
    overlay: Option<&KeyOverlay<'_>>,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    let prefix = builder.prefix();

    let stroke = config
        .stroke_color
        .clone()
        .unwrap_or_else(|| theme.resolve_or_default("stroke"));

    if let Some(overlay) = overlay {
        builder.add_key_styles(theme);
        render_keys(overlay, &mut builder);
    }

    if path.is_empty() {
        log::debug!("empty signature path, rendering without stroke");
        return builder.build();
    }

    let paint = match (config.stroke_style, path.bounds()) {
        (StrokeStyle::Gradient, Some(bounds)) => {
            let secondary = config
                .secondary_color
                .clone()
                .unwrap_or_else(|| theme.resolve_or_default("stroke-secondary"));
            builder.add_gradient(bounds, &stroke, &secondary);
            format!("url(#{}gradient)", prefix)
        }
        _ => stroke,
    };

    builder.add_signature_path(&path.to_svg_d_with_precision(config.precision), &paint);
    builder.build()
}

fn render_keys(overlay: &KeyOverlay<'_>, builder: &mut SvgBuilder) {
    let active: HashSet<char> = overlay.text.chars().map(fold_key).collect();
    let latest = overlay.text.chars().last().map(fold_key);

    let group_class = format!("{}keys", builder.prefix());
    builder.start_group(&[group_class]);
    for (key, pos) in overlay.grid.iter() {
        let corner = overlay.geometry.key_corner(pos);
        builder.add_key(
            key,
            corner,
            (overlay.geometry.key_size, overlay.geometry.key_height),
            active.contains(&key),
            latest == Some(key),
        );
    }
    builder.end_group();
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
