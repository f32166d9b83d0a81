use maud::{html, Markup};

use super::components::{layout, published_line, tag_links, truncate_words, SITE_NAME};
use crate::views::PostList;

const EXCERPT_WORDS: usize = 30;

pub fn render_list(view: &PostList) -> Markup {
    let page = &view.page;
    // keep the tag filter when moving between pages
    let base = match &view.tag {
        Some(tag) => format!("/blog/tag/{}/", tag.slug),
        None => "/blog/".to_string(),
    };

    layout(
        SITE_NAME,
        html! {
            h1 { (SITE_NAME) }
            @if let Some(tag) = &view.tag {
                h2 { "Posts tagged with \"" (tag.name) "\"" }
            }
            @if page.items.is_empty() {
                p { "No posts have been published yet." }
            }
            @for post in &page.items {
                article {
                    h2 { a href=(post.absolute_url()) { (post.title) } }
                    (tag_links(&post.tags))
                    (published_line(&post.publish, &post.author.username))
                    p { (truncate_words(&post.body, EXCERPT_WORDS)) }
                }
            }
            div.pagination {
                @if let Some(prev) = page.previous_page_number() {
                    a href={ (base) "?page=" (prev) } { "Previous" }
                }
                span.current { "Page " (page.number) " of " (page.num_pages) "." }
                @if let Some(next) = page.next_page_number() {
                    a href={ (base) "?page=" (next) } { "Next" }
                }
            }
        },
    )
}
