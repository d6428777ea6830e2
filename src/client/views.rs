//! Text renderings of the product table and the product detail page.

use std::fmt::{Display, Write};

use crate::client::i18n::{format_price, Label, Lang};
use crate::models::ProductResponse;

pub const IMAGE_PLACEHOLDER: &str = "🛍️";
const DESCRIPTION_WIDTH: usize = 40;
const DESCRIPTION_LINES: usize = 2;

/// One fetch per view: `Loading` until the request settles, then never revisited.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => ViewState::Ready(value),
            Err(e) => ViewState::Failed(e.to_string()),
        }
    }
}

/// Cuts `text` to what fits in two lines of the description column.
pub fn clamp_description(text: &str) -> String {
    let limit = DESCRIPTION_WIDTH * DESCRIPTION_LINES;
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= limit {
        return flat;
    }
    let mut cut: String = flat.chars().take(limit - 1).collect();
    cut.push('…');
    cut
}

fn image_marker(image: Option<&str>) -> &str {
    match image {
        Some(url) if !url.is_empty() => "[img]",
        _ => IMAGE_PLACEHOLDER,
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = text.to_string();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}

pub fn render_list(state: &ViewState<Vec<ProductResponse>>, lang: Lang) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", lang.t(Label::List));

    let products = match state {
        ViewState::Loading => {
            let _ = writeln!(out, "{}", lang.t(Label::Loading));
            return out;
        }
        ViewState::Failed(message) => {
            let _ = writeln!(out, "! {message}");
            return out;
        }
        ViewState::Ready(products) => products,
    };
    if products.is_empty() {
        let _ = writeln!(out, "{}", lang.t(Label::Empty));
        return out;
    }

    let rows: Vec<[String; 4]> = products
        .iter()
        .map(|p| {
            [
                format!("{} {}", image_marker(p.image.as_deref()), p.name),
                clamp_description(p.description.as_deref().unwrap_or_default()),
                format_price(p.price),
                format!(
                    "{} `show {id}` | {} `update {id}` | {} `delete {id}`",
                    lang.t(Label::Detail),
                    lang.t(Label::Edit),
                    lang.t(Label::Delete),
                    id = p.id
                ),
            ]
        })
        .collect();

    let headers = [
        lang.t(Label::Product),
        lang.t(Label::Description),
        lang.t(Label::Price),
        lang.t(Label::Actions),
    ];
    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(h, w))
        .collect();
    let _ = writeln!(out, "{}", header_line.join("  ").trim_end());
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));
    for row in &rows {
        let line: Vec<String> = row.iter().zip(widths).map(|(c, w)| pad(c, w)).collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }
    out
}

/// Any failure collapses into the same "not found" page.
pub fn render_detail(state: &ViewState<ProductResponse>, lang: Lang) -> String {
    let mut out = String::new();
    match state {
        ViewState::Loading => {
            let _ = writeln!(out, "{}", lang.t(Label::Loading));
        }
        ViewState::Failed(_) => {
            let _ = writeln!(out, "{}", lang.t(Label::NotFound));
            let _ = writeln!(out, "← {} (`list`)", lang.t(Label::Back));
        }
        ViewState::Ready(product) => {
            let _ = writeln!(out, "← {} (`list`)", lang.t(Label::Back));
            let _ = writeln!(out);
            match product.image.as_deref() {
                Some(url) if !url.is_empty() => {
                    let _ = writeln!(out, "{url}");
                }
                _ => {
                    let _ = writeln!(out, "{IMAGE_PLACEHOLDER}");
                }
            }
            let _ = writeln!(out, "{}", product.name);
            let _ = writeln!(out, "{}₫", format_price(product.price));
            if let Some(description) = product.description.as_deref() {
                let _ = writeln!(out);
                let _ = writeln!(out, "{description}");
            }
        }
    }
    out
}
