use icondata::{LuBriefcase, LuCode, LuWrench};
use leptos::{prelude::*, svg::svg};

/// Icons the header knows how to draw, keyed by symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Wrench,
    Briefcase,
}

impl Icon {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Wrench => "wrench",
            Self::Briefcase => "briefcase",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "code" => Some(Self::Code),
            "wrench" => Some(Self::Wrench),
            "briefcase" => Some(Self::Briefcase),
            _ => None,
        }
    }

    const fn data(self) -> icondata::Icon {
        match self {
            Self::Code => LuCode,
            Self::Wrench => LuWrench,
            Self::Briefcase => LuBriefcase,
        }
    }
}

/// Renders `icon` as an inline SVG, `size` pixels square, stroked in `color`.
pub fn component(icon: Icon, size: u16, color: &'static str) -> impl IntoView {
    let data = icon.data();
    svg()
        .attr("viewBox", data.view_box)
        .attr("fill", data.fill)
        .attr("stroke", data.stroke)
        .attr("stroke-width", data.stroke_width)
        .attr("stroke-linecap", data.stroke_linecap)
        .attr("stroke-linejoin", data.stroke_linejoin)
        .attr("width", size.to_string())
        .attr("height", size.to_string())
        .attr("style", format!("color: {color};"))
        .attr("aria-hidden", "true")
        .attr("data-icon", icon.name())
        .inner_html(data.data)
}
