use chrono::NaiveDateTime;
use domain::{BoundForm, FormInput, Tag};
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const SITE_NAME: &str = "My Blog";

const PAGE_CSS: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:Georgia,"Times New Roman",serif;color:#222;background:#fafafa;line-height:1.6}
.wrap{max-width:960px;margin:0 auto;display:flex;gap:2.5rem;padding:2rem 1rem}
#content{flex:1;min-width:0}
#sidebar{width:240px;flex-shrink:0;font-size:.95rem;color:#555}
a{color:#00abff;text-decoration:none}
a:hover{text-decoration:underline}
h1,h2,h3{font-family:Helvetica,Arial,sans-serif;font-weight:600;line-height:1.25}
.date,.tags{color:#888;font-size:.9rem;margin:.25rem 0}
.comment{border-top:1px solid #eee;padding:.75rem 0}
.comment .info{color:#888;font-size:.85rem}
.pagination{margin:2rem 0;color:#888}
.pagination a{margin:0 .5rem}
form p{margin:.75rem 0}
label{display:block;font-weight:600;font-family:Helvetica,Arial,sans-serif;font-size:.9rem}
input[type=text],input[type=email],textarea{width:100%;padding:.45rem;border:1px solid #ccc;border-radius:4px;font:inherit}
textarea{min-height:8rem}
input[type=submit]{background:#00abff;color:#fff;border:0;border-radius:4px;padding:.5rem 1.25rem;cursor:pointer}
.errorlist{color:#c0392b;font-size:.85rem;margin:.25rem 0;padding:0;list-style:none}
.error-page{text-align:center;padding:4rem 1rem}
"#;

pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                div.wrap {
                    main id="content" { (content) }
                    aside id="sidebar" {
                        h2 { a href="/blog/" { (SITE_NAME) } }
                        p { "This is my blog." }
                    }
                }
            }
        }
    }
}

pub fn published_line(publish: &NaiveDateTime, author: &str) -> Markup {
    html! {
        p.date { "Published " (publish.format("%b %-d, %Y")) " by " (author) }
    }
}

pub fn tag_links(tags: &[Tag]) -> Markup {
    html! {
        @if !tags.is_empty() {
            p.tags {
                "Tags: "
                @for (i, tag) in tags.iter().enumerate() {
                    @if i > 0 { ", " }
                    a href={ "/blog/tag/" (tag.slug) "/" } { (tag.name) }
                }
            }
        }
    }
}

pub fn field_errors<T: FormInput>(form: &BoundForm<T>, field: &str) -> Markup {
    html! {
        @let errors = form.errors_for(field);
        @if !errors.is_empty() {
            ul.errorlist {
                @for e in errors { li { (e) } }
            }
        }
    }
}

/// Splits on blank lines; single newlines become `<br>`.
pub fn paragraphs(body: &str) -> Markup {
    html! {
        @for para in body.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
            p {
                @for (i, line) in para.lines().enumerate() {
                    @if i > 0 { br; }
                    (line)
                }
            }
        }
    }
}

pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= limit {
        words.join(" ")
    } else {
        format!("{} …", words[..limit].join(" "))
    }
}

pub fn pluralize(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_escape_and_split() {
        let html = paragraphs("Hello <b>there</b>\nline two\n\n\n second").into_string();
        assert_eq!(
            html,
            "<p>Hello &lt;b&gt;there&lt;/b&gt;<br>line two</p><p>second</p>"
        );
    }

    #[test]
    fn truncate_words_appends_ellipsis_only_when_cut() {
        assert_eq!(truncate_words("one two  three", 5), "one two three");
        assert_eq!(truncate_words("one two three", 2), "one two …");
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize(1, "comment", "comments"), "1 comment");
        assert_eq!(pluralize(0, "comment", "comments"), "0 comments");
    }

    #[test]
    fn tag_links_point_at_tag_listing() {
        let tags = vec![
            Tag { id: 1, name: "Rust".into(), slug: "rust".into() },
            Tag { id: 2, name: "Web".into(), slug: "web".into() },
        ];
        let html = tag_links(&tags).into_string();
        assert!(html.contains(r#"<a href="/blog/tag/rust/">Rust</a>, <a href="/blog/tag/web/">Web</a>"#));
        assert_eq!(tag_links(&[]).into_string(), "");
    }
}
