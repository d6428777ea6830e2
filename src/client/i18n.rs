use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Vi,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    List,
    Product,
    Description,
    Price,
    Actions,
    Detail,
    Edit,
    Delete,
    NotFound,
    Back,
    Loading,
    Empty,
}

impl Lang {
    pub fn t(self, label: Label) -> &'static str {
        match (self, label) {
            (Lang::Vi, Label::List) => "Danh sách sản phẩm",
            (Lang::Vi, Label::Product) => "Sản phẩm",
            (Lang::Vi, Label::Description) => "Mô tả",
            (Lang::Vi, Label::Price) => "Giá",
            (Lang::Vi, Label::Actions) => "Thao tác",
            (Lang::Vi, Label::Detail) => "Chi tiết",
            (Lang::Vi, Label::Edit) => "Sửa",
            (Lang::Vi, Label::Delete) => "Xoá",
            (Lang::Vi, Label::NotFound) => "Không tìm thấy sản phẩm",
            (Lang::Vi, Label::Back) => "Quay lại",
            (Lang::Vi, Label::Loading) => "Đang tải...",
            (Lang::Vi, Label::Empty) => "Chưa có sản phẩm nào",
            (Lang::En, Label::List) => "Product list",
            (Lang::En, Label::Product) => "Product",
            (Lang::En, Label::Description) => "Description",
            (Lang::En, Label::Price) => "Price",
            (Lang::En, Label::Actions) => "Actions",
            (Lang::En, Label::Detail) => "Detail",
            (Lang::En, Label::Edit) => "Edit",
            (Lang::En, Label::Delete) => "Delete",
            (Lang::En, Label::NotFound) => "Product not found",
            (Lang::En, Label::Back) => "Back",
            (Lang::En, Label::Loading) => "Loading...",
            (Lang::En, Label::Empty) => "No products yet",
        }
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vi" => Ok(Lang::Vi),
            "en" => Ok(Lang::En),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lang::Vi => "vi",
            Lang::En => "en",
        })
    }
}

/// Formats a number the way `Intl.NumberFormat('vi-VN')` does by default:
/// `.` between thousands, `,` before at most three fraction digits.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let scaled = (value.abs() * 1000.0).round() as u128;
    let (whole, fraction) = (scaled / 1000, scaled % 1000);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if value < 0.0 && scaled != 0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if fraction != 0 {
        let fraction = format!("{fraction:03}");
        out.push(',');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}
