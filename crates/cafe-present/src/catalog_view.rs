//! Catalog renderers: product grid, product detail, testimonials

use crate::html::{action_attrs, escape, price, ui_attrs};
use crate::theme::Theme;
use cafe_cart::CartAction;
use cafe_catalog::{Product, RoastLevel, Testimonial};

/// `data-action` of a control that opens the product detail
pub const VIEW_ACTION: &str = "view";
/// `data-action` of the detail's add-to-cart control
pub const MODAL_ADD_ACTION: &str = "modal-add";
/// `data-action` of the detail's close control
pub const CLOSE_MODAL_ACTION: &str = "close-modal";

fn noir_accent(roast: RoastLevel) -> &'static str {
    match roast {
        RoastLevel::Dark => "blood-red",
        RoastLevel::Light => "clue-amber",
        RoastLevel::Medium | RoastLevel::MediumDark => "gray-500",
    }
}

/// Product cards
#[must_use]
pub fn render_product_grid(products: &[Product], theme: Theme) -> String {
    let cards: String = products.iter().map(|p| render_card(p, theme)).collect();
    format!("<div id=\"productsGrid\">{cards}</div>")
}

fn render_card(product: &Product, theme: Theme) -> String {
    let id = product.id.get();
    let view = ui_attrs(VIEW_ACTION, Some(id));

    match theme {
        Theme::Classic => format!(
            concat!(
                "<article class=\"product-card\"{view}>",
                "<div class=\"product-card__image\">",
                "<img src=\"{image}\" alt=\"{name}\" loading=\"lazy\" /></div>",
                "<div class=\"product-card__body\">",
                "<div class=\"product-card__series\">{series}</div>",
                "<h3 class=\"product-card__name\">{name}</h3>",
                "<p class=\"product-card__flavor\">{flavor}</p>",
                "<div class=\"product-card__footer\">",
                "<span class=\"product-card__price\">{price}</span>",
                "</div></div></article>"
            ),
            view = view,
            image = escape(&product.image),
            name = escape(&product.name),
            series = escape(&product.series),
            flavor = escape(&product.flavor),
            price = price(u64::from(product.price)),
        ),
        Theme::Noir => {
            let accent = noir_accent(product.roast);
            let add = format!(
                "<button class=\"w-full hover:bg-{accent}\"{}>{}</button>",
                action_attrs(&CartAction::Add(product.id)),
                theme.add_label()
            );
            format!(
                concat!(
                    "<div class=\"group flex flex-col bg-shadow-grey hover:border-{accent}\" data-product-id=\"{id}\">",
                    "<div class=\"relative overflow-hidden cursor-pointer\"{view}>",
                    "<img alt=\"{name}\" class=\"grayscale brightness-50\" src=\"{image}\" loading=\"lazy\" />",
                    "<div class=\"evidence-tag\"><p>證據標籤</p><p>{series}</p></div>",
                    "</div>",
                    "<div class=\"p-8 space-y-4\">",
                    "<h3 class=\"font-headline group-hover:text-{accent}\">{name}</h3>",
                    "<span class=\"text-clue-amber font-bold\">${raw_price}</span>",
                    "<p class=\"text-xs text-gray-500\">檔案: {flavor}</p>",
                    "{add}",
                    "</div></div>"
                ),
                accent = accent,
                id = id,
                view = view,
                name = escape(&product.name),
                image = escape(&product.image),
                series = escape(&product.series),
                raw_price = product.price,
                flavor = escape(&product.flavor),
                add = add,
            )
        }
    }
}

/// Product detail shown in the modal, with its add-to-cart control
#[must_use]
pub fn render_product_detail(product: &Product, theme: Theme) -> String {
    let add = ui_attrs(MODAL_ADD_ACTION, Some(product.id.get()));
    let close = ui_attrs(CLOSE_MODAL_ACTION, None);

    let sections = match theme {
        Theme::Classic => [
            ("風味筆記", escape(&product.flavor)),
            ("烘焙程度", product.roast.label().to_string()),
            ("產區", escape(&product.origin)),
            ("商品故事", escape(&product.description)),
        ],
        Theme::Noir => [
            ("風味檔案", escape(&product.flavor)),
            (
                "烘焙程度",
                format!(
                    "<div class=\"roast-bar\"><div class=\"h-full bg-{}\" style=\"width: {}%\"></div></div>{}",
                    noir_accent(product.roast),
                    product.roast.intensity_percent(),
                    product.roast.label()
                ),
            ),
            ("來源地點", escape(&product.origin)),
            ("案件詳情", escape(&product.description)),
        ],
    };

    let sections: String = sections
        .iter()
        .map(|(title, body)| {
            format!("<div class=\"product-detail__section\"><h4>{title}</h4><div>{body}</div></div>")
        })
        .collect();

    format!(
        concat!(
            "<div id=\"modalBody\" class=\"product-detail\">",
            "<button id=\"modalClose\"{close} aria-label=\"關閉\">✕</button>",
            "<div class=\"product-detail__image\"><img src=\"{image}\" alt=\"{name}\" /></div>",
            "<div class=\"product-detail__info\">",
            "<div class=\"product-detail__series\">{series}</div>",
            "<h2 class=\"product-detail__name\">{name}</h2>",
            "{sections}",
            "<div class=\"product-detail__price\">{price}</div>",
            "<button class=\"btn btn--primary\" id=\"addToCartBtn\"{add}>{label}</button>",
            "</div></div>"
        ),
        close = close,
        image = escape(&product.image),
        name = escape(&product.name),
        series = escape(&product.series),
        sections = sections,
        price = price(u64::from(product.price)),
        add = add,
        label = theme.add_label(),
    )
}

/// Testimonial cards
#[must_use]
pub fn render_testimonials(testimonials: &[Testimonial], theme: Theme) -> String {
    let cards: String = testimonials
        .iter()
        .map(|t| match theme {
            Theme::Classic => format!(
                concat!(
                    "<div class=\"testimonial-card\">",
                    "<div class=\"testimonial-card__quote\">\"</div>",
                    "<p class=\"testimonial-card__text\">{}</p>",
                    "<div class=\"testimonial-card__author\">{}</div>",
                    "<div class=\"testimonial-card__rating\">{}</div>",
                    "</div>"
                ),
                escape(&t.text),
                escape(&t.author),
                t.stars(),
            ),
            // Case numbers are derived from the id so renders stay stable
            Theme::Noir => format!(
                concat!(
                    "<div class=\"bg-shadow-grey border-l-4 border-l-blood-red p-6\">",
                    "<div class=\"text-[10px] text-clue-amber\">證人證詞 #{:04}</div>",
                    "<p class=\"text-gray-400 italic\">\"{}\"</p>",
                    "<p class=\"font-headline text-white\">{}</p>",
                    "<div class=\"text-clue-amber text-sm font-bold\">{}</div>",
                    "</div>"
                ),
                1000 + t.id,
                escape(&t.text),
                escape(&t.author),
                t.stars(),
            ),
        })
        .collect();

    format!("<div id=\"testimonialsGrid\">{cards}</div>")
}
