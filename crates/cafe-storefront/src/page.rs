//! Page layout around the mounted surfaces

use crate::event::{CLOSE_SIDEBAR_ACTION, GO_TO_ORDER_ACTION, TOGGLE_SIDEBAR_ACTION};
use cafe_order::{FormField, FormState, OrderFormController};
use cafe_present::html::{escape, ui_attrs};
use cafe_present::Theme;

/// Navigation bar with the cart badge
pub(crate) fn render_nav(theme: Theme, scrolled: bool, badge: &str) -> String {
    let class = match (theme, scrolled) {
        (Theme::Classic, true) => "nav nav--scrolled",
        (Theme::Classic, false) => "nav",
        (Theme::Noir, true) => "nav bg-noir-black shadow-lg",
        (Theme::Noir, false) => "nav bg-noir-black",
    };
    format!(
        concat!(
            "<nav id=\"nav\" class=\"{class}\">",
            "<a class=\"nav__logo\" href=\"#hero\">咖啡小劇場</a>",
            "<button id=\"cartBtn\" class=\"nav__cart\"{toggle} aria-label=\"購物車\">{badge}</button>",
            "</nav>"
        ),
        class = class,
        toggle = ui_attrs(TOGGLE_SIDEBAR_ACTION, None),
        badge = badge,
    )
}

/// Cart sidebar shell around the sidebar surface
pub(crate) fn render_sidebar(theme: Theme, open: bool, body: &str) -> String {
    let state = if open { " is-open" } else { "" };
    let title = match theme {
        Theme::Classic => "購物車",
        Theme::Noir => "證物清單",
    };
    format!(
        concat!(
            "<div id=\"cartOverlay\" class=\"cart-overlay{state}\"{close}></div>",
            "<aside id=\"cartSidebar\" class=\"cart-sidebar{state}\" aria-hidden=\"{hidden}\">",
            "<header class=\"cart-sidebar__header\"><h3>{title}</h3>",
            "<button id=\"cartClose\"{close} aria-label=\"關閉\">✕</button></header>",
            "{body}",
            "<button id=\"checkoutBtn\" class=\"btn btn--primary\"{checkout}>前往訂購</button>",
            "</aside>"
        ),
        state = state,
        close = ui_attrs(CLOSE_SIDEBAR_ACTION, None),
        hidden = !open,
        title = title,
        body = body,
        checkout = ui_attrs(GO_TO_ORDER_ACTION, None),
    )
}

fn input(ctl: &OrderFormController, field: FormField, label: &str, value: &str, kind: &str) -> String {
    let (class, message) = match ctl.errors().get(field) {
        Some(msg) => (" form-group--error", msg),
        None => ("", ""),
    };
    let display = if message.is_empty() { "none" } else { "block" };
    format!(
        concat!(
            "<div class=\"form-group{class}\">",
            "<label for=\"{name}\">{label}</label>",
            "<input type=\"{kind}\" id=\"{name}\" name=\"{name}\" value=\"{value}\" />",
            "<span id=\"{error_id}\" class=\"form-error\" style=\"display: {display}\">{message}</span>",
            "</div>"
        ),
        class = class,
        name = field.as_str(),
        label = label,
        kind = kind,
        value = escape(value),
        error_id = field.error_element_id(),
        display = display,
        message = message,
    )
}

/// Order form with summary and inline errors, or the success panel
pub(crate) fn render_order_section(theme: Theme, ctl: &OrderFormController, summary: &str) -> String {
    let form = ctl.form();
    let editing = ctl.state() != FormState::Success;

    let body = if editing {
        let (disabled, label) = match ctl.state() {
            FormState::Submitting => (" disabled", theme.submitting_label()),
            _ => ("", theme.submit_label()),
        };
        let cart_error = ctl
            .errors()
            .get(FormField::Cart)
            .map(|msg| {
                format!(
                    "<p id=\"{}\" class=\"form-error\">{msg}</p>",
                    FormField::Cart.error_element_id()
                )
            })
            .unwrap_or_default();
        format!(
            concat!(
                "<form id=\"orderForm\" class=\"order-form\" novalidate>",
                "<div class=\"order-form__summary\"><h4>已選商品</h4>{summary}</div>",
                "{cart_error}",
                "{name}{phone}{email}{store}",
                "<div class=\"form-group\"><label for=\"note\">備註</label>",
                "<textarea id=\"note\" name=\"note\">{note}</textarea></div>",
                "<button type=\"submit\" id=\"submitBtn\" class=\"btn btn--primary\"{disabled}>{label}</button>",
                "</form>"
            ),
            summary = summary,
            cart_error = cart_error,
            name = input(ctl, FormField::Name, "姓名 *", &form.name, "text"),
            phone = input(ctl, FormField::Phone, "手機 *", &form.phone, "tel"),
            email = input(ctl, FormField::Email, "Email", &form.email, "email"),
            store = input(ctl, FormField::Store, "取貨門市 *", &form.store, "text"),
            note = escape(&form.note),
            disabled = disabled,
            label = label,
        )
    } else {
        let order_id = ctl
            .last_receipt()
            .map(|r| format!("<p class=\"form-success__id\">訂單編號 {}</p>", r.order_id))
            .unwrap_or_default();
        let message = match theme {
            Theme::Classic => "訂購成功！我們會盡快與您聯繫。",
            Theme::Noir => "案件已結案！證物將送達指定地點。",
        };
        format!(
            "<div id=\"formSuccess\" class=\"form-success\"><h3>{message}</h3>{order_id}</div>"
        )
    };

    format!("<section id=\"order\" class=\"order\">{body}</section>")
}

/// Product detail modal
pub(crate) fn render_modal(detail: Option<&str>) -> String {
    match detail {
        Some(body) => format!(
            "<div id=\"productModal\" class=\"modal is-open\" role=\"dialog\" aria-hidden=\"false\">{body}</div>"
        ),
        None => "<div id=\"productModal\" class=\"modal\" aria-hidden=\"true\"></div>".to_string(),
    }
}
