//! SVG rendering for badge descriptions.
//!
//! Badges follow the shields.io layout: a grey label half and a colored
//! message half, each sized to its text plus padding. Text is drawn at 10x
//! scale, which is why the positions passed to the template are multiplied
//! by ten.

use minijinja::{context, AutoEscape, Environment};

use super::width::text_width;
use super::{BadgeDescription, BadgeStyle};
use crate::error::AppResult;

const TEMPLATE_NAME: &str = "badge.svg";

const BADGE_TEMPLATE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="{{ width }}" height="20" role="img" aria-label="{{ label }}: {{ message }}">
<title>{{ label }}: {{ message }}</title>
{% if rounded %}<linearGradient id="s" x2="0" y2="100%"><stop offset="0" stop-color="#bbb" stop-opacity=".1"/><stop offset="1" stop-opacity=".1"/></linearGradient>
<clipPath id="r"><rect width="{{ width }}" height="20" rx="3" fill="#fff"/></clipPath>
<g clip-path="url(#r)">{% else %}<g shape-rendering="crispEdges">{% endif %}
<rect width="{{ label_width }}" height="20" fill="#555"/>
<rect x="{{ label_width }}" width="{{ message_width }}" height="20" fill="{{ color }}"/>
{% if rounded %}<rect width="{{ width }}" height="20" fill="url(#s)"/>
{% endif %}</g>
<g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,DejaVu Sans,sans-serif" text-rendering="geometricPrecision" font-size="110">
{% if rounded %}<text aria-hidden="true" x="{{ label_x }}" y="150" fill="#010101" fill-opacity=".3" transform="scale(.1)" textLength="{{ label_length }}">{{ label }}</text>
{% endif %}<text x="{{ label_x }}" y="140" transform="scale(.1)" fill="#fff" textLength="{{ label_length }}">{{ label }}</text>
{% if rounded %}<text aria-hidden="true" x="{{ message_x }}" y="150" fill="#010101" fill-opacity=".3" transform="scale(.1)" textLength="{{ message_length }}">{{ message }}</text>
{% endif %}<text x="{{ message_x }}" y="140" transform="scale(.1)" fill="#fff" textLength="{{ message_length }}">{{ message }}</text>
</g>
</svg>
"##;

/// Horizontal padding on each side of a text run.
const PADDING: u32 = 5;

/// Pixel geometry of a two-part badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    label_text: u32,
    message_text: u32,
}

impl Layout {
    fn measure(label: &str, message: &str) -> Self {
        Self {
            label_text: text_width(label).ceil() as u32,
            message_text: text_width(message).ceil() as u32,
        }
    }

    fn label_width(&self) -> u32 {
        self.label_text + 2 * PADDING
    }

    fn message_width(&self) -> u32 {
        self.message_text + 2 * PADDING
    }

    fn width(&self) -> u32 {
        self.label_width() + self.message_width()
    }

    /// Center of the label, in tenths of a pixel.
    fn label_x(&self) -> u32 {
        self.label_width() * 5
    }

    /// Center of the message, in tenths of a pixel.
    fn message_x(&self) -> u32 {
        (2 * self.label_width() + self.message_width()) * 5
    }
}

/// Renders [`BadgeDescription`]s into SVG documents.
///
/// Built once at startup and shared by all requests.
pub struct BadgeRenderer {
    env: Environment<'static>,
}

impl BadgeRenderer {
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template(TEMPLATE_NAME, BADGE_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(&self, badge: &BadgeDescription) -> AppResult<String> {
        let layout = Layout::measure(&badge.label, &badge.message);
        let template = self.env.get_template(TEMPLATE_NAME)?;

        let svg = template.render(context! {
            label => &badge.label,
            message => &badge.message,
            color => badge.color.as_str(),
            rounded => badge.style == BadgeStyle::Flat,
            width => layout.width(),
            label_width => layout.label_width(),
            message_width => layout.message_width(),
            label_x => layout.label_x(),
            message_x => layout.message_x(),
            label_length => layout.label_text * 10,
            message_length => layout.message_text * 10,
        })?;

        Ok(svg)
    }
}
