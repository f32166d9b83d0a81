use maud::{html, Markup};

use super::components::{field_errors, layout};
use super::detail::share_link;
use crate::views::ShareOutcome;

pub fn render_share(view: &ShareOutcome) -> Markup {
    let post = &view.post;
    let form = &view.form;
    layout(
        "Share a post",
        html! {
            @if view.sent {
                h1 { "E-mail successfully sent" }
                p {
                    "\"" (post.title) "\" was successfully sent to " (form.data.to) "."
                }
                p { a href=(post.absolute_url()) { "Back to the post" } }
            } @else {
                h1 { "Share \"" (post.title) "\" by e-mail" }
                form action=(share_link(post)) method="post" {
                    p {
                        label for="id_name" { "Name" }
                        input id="id_name" type="text" name="name" maxlength="25" value=(form.data.name);
                        (field_errors(form, "name"))
                    }
                    p {
                        label for="id_email" { "Email" }
                        input id="id_email" type="email" name="email" value=(form.data.email);
                        (field_errors(form, "email"))
                    }
                    p {
                        label for="id_to" { "To" }
                        input id="id_to" type="email" name="to" value=(form.data.to);
                        (field_errors(form, "to"))
                    }
                    p {
                        label for="id_comments" { "Comments" }
                        textarea id="id_comments" name="comments" { (form.data.comments) }
                    }
                    p { input type="submit" value="Send e-mail"; }
                }
            }
        },
    )
}
