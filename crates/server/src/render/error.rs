use maud::{html, Markup};

use super::components::layout;

pub fn render_error(title: &str, message: &str) -> Markup {
    layout(
        title,
        html! {
            div.error-page {
                h1 { (title) }
                p { (message) }
                a href="/blog/" { "Back to the blog" }
            }
        },
    )
}
