use domain::{BoundForm, CommentForm, Post};
use maud::{html, Markup};

use super::components::{field_errors, layout, paragraphs, pluralize, published_line, tag_links};
use crate::views::{CommentOutcome, PostDetail};

pub fn comment_action(post: &Post) -> String {
    format!("/blog/posts/{}/comment/", post.id)
}

pub fn share_link(post: &Post) -> String {
    format!("/blog/posts/{}/share/", post.id)
}

fn comment_form(post: &Post, form: &BoundForm<CommentForm>) -> Markup {
    html! {
        h2 { "Add a new comment" }
        form action=(comment_action(post)) method="post" {
            p {
                label for="id_name" { "Name" }
                input id="id_name" type="text" name="name" maxlength="80" value=(form.data.name);
                (field_errors(form, "name"))
            }
            p {
                label for="id_email" { "Email" }
                input id="id_email" type="email" name="email" value=(form.data.email);
                (field_errors(form, "email"))
            }
            p {
                label for="id_body" { "Body" }
                textarea id="id_body" name="body" { (form.data.body) }
                (field_errors(form, "body"))
            }
            p { input type="submit" value="Add comment"; }
        }
    }
}

pub fn render_detail(view: &PostDetail) -> Markup {
    let post = &view.post;
    layout(
        &post.title,
        html! {
            h1 { (post.title) }
            (published_line(&post.publish, &post.author.username))
            (tag_links(&post.tags))
            (paragraphs(&post.body))
            p { a href=(share_link(post)) { "Share this post" } }

            h2 { "Similar posts" }
            @if view.similar_posts.is_empty() {
                p { "There are no similar posts yet." }
            } @else {
                ul.similar {
                    @for similar in &view.similar_posts {
                        li { a href=(similar.absolute_url()) { (similar.title) } }
                    }
                }
            }

            h2 { (pluralize(view.comments.len(), "comment", "comments")) }
            @for (i, comment) in view.comments.iter().enumerate() {
                div.comment {
                    p.info {
                        "Comment " (i + 1) " by " (comment.name) " "
                        (comment.created.format("%b %-d, %Y, %H:%M"))
                    }
                    (paragraphs(&comment.body))
                }
            }
            @if view.comments.is_empty() {
                p { "There are no comments." }
            }
            (comment_form(post, &view.form))
        },
    )
}

pub fn render_comment_outcome(view: &CommentOutcome) -> Markup {
    let post = &view.post;
    layout(
        &format!("Add a comment to {}", post.title),
        html! {
            @if let Some(comment) = &view.comment {
                h2 { "Your comment has been added." }
                div.comment {
                    p.info { (comment.name) " (" (comment.email) ")" }
                    (paragraphs(&comment.body))
                }
                @if !comment.active {
                    p { "It will appear on the post once approved." }
                }
                p { a href=(post.absolute_url()) { "Back to the post" } }
            } @else {
                (comment_form(post, &view.form))
            }
        },
    )
}
