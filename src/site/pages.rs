use crate::form::controller::{NAVIGATION_DELAY, SUCCESS_PATH};
use crate::form::{ReservationForm, Toast};
use crate::site::escape_html;
use crate::site::footer::render_footer;

const SUBMIT_LABEL: &str = "RESERVE NOW";
const SUBMITTING_LABEL: &str = "SUBMITTING...";

/// Dev-server route the reservation form posts to.
pub const RESERVATION_FORM_PATH: &str = "/reservation";

fn document(title: &str, body: &str) -> String {
    document_with_head(title, "", body)
}

fn document_with_head(title: &str, head: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />{}
  <title>{}</title>
</head>
<body>
{}
</body>
</html>
"#,
        head,
        escape_html(title),
        body
    )
}

fn input(
    kind: &str,
    name: &str,
    placeholder: Option<&str>,
    value: &str,
    extra: &str,
    disabled: bool,
) -> String {
    let mut html = format!(r#"<input type="{}" name="{}""#, kind, name);
    if let Some(placeholder) = placeholder {
        html.push_str(&format!(r#" placeholder="{}""#, escape_html(placeholder)));
    }
    html.push_str(&format!(r#" value="{}""#, escape_html(value)));
    html.push_str(extra);
    if disabled {
        html.push_str(" disabled");
    }
    html.push_str(" required />");
    html
}

/// The "MAKE A RESERVATION" section, bound to the form's current state.
pub fn render_reservation_section(form: &ReservationForm) -> String {
    let fields = form.fields();
    let disabled = form.inputs_disabled();
    let min_date = format!(r#" min="{}""#, form.min_date());

    let button = if disabled {
        format!(
            r#"<button type="submit" disabled style="opacity: 0.6; cursor: not-allowed">{}</button>"#,
            SUBMITTING_LABEL
        )
    } else {
        format!(
            r#"<button type="submit" style="opacity: 1; cursor: pointer">{}<span>&rarr;</span></button>"#,
            SUBMIT_LABEL
        )
    };

    format!(
        r#"<section class="reservation" id="reservation">
  <div class="container">
    <div class="banner">
      <img src="/reserve.png" alt="reservation" />
    </div>
    <div class="banner">
      <div class="reservation_form_box">
        <h1>MAKE A RESERVATION</h1>
        <p>For Further Questions, Please Call</p>
        <form method="post" action="{action}">
          <div>
            {first_name}
            {last_name}
          </div>
          <div>
            {date}
            {time}
          </div>
          <div>
            {email}
            {phone}
          </div>
          {button}
        </form>
      </div>
    </div>
  </div>
</section>"#,
        action = RESERVATION_FORM_PATH,
        first_name = input("text", "firstName", Some("First Name"), &fields.first_name, "", disabled),
        last_name = input("text", "lastName", Some("Last Name"), &fields.last_name, "", disabled),
        date = input("date", "date", None, &fields.date, &min_date, disabled),
        time = input("time", "time", None, &fields.time, "", disabled),
        email = input("email", "email", Some("Email"), &fields.email, r#" class="email_tag""#, disabled),
        phone = input("tel", "phone", Some("Phone (11 digits)"), &fields.phone, r#" maxlength="11""#, disabled),
        button = button,
    )
}

pub fn render_toast(toast: &Toast) -> String {
    let (class, role, message) = match toast {
        Toast::Success(message) => ("toast toast_success", "status", message),
        Toast::Error(message) => ("toast toast_error", "alert", message),
    };
    format!(
        r#"<div class="{}" role="{}">{}</div>"#,
        class,
        role,
        escape_html(message)
    )
}

pub fn render_landing(form: &ReservationForm) -> String {
    render_landing_with(form, None, false)
}

/// Landing page showing `toast` above the form. With `navigate` set the page
/// moves on to the success view after the navigation delay.
pub fn render_landing_with(form: &ReservationForm, toast: Option<&Toast>, navigate: bool) -> String {
    let toast = toast.map(render_toast).unwrap_or_default();
    let body = format!("{}{}\n{}", toast, render_reservation_section(form), render_footer());

    if navigate {
        let refresh = format!(
            r#"
  <meta http-equiv="refresh" content="{};url={}" />"#,
            NAVIGATION_DELAY.as_secs(),
            SUCCESS_PATH
        );
        document_with_head("AKANKSHA", &refresh, &body)
    } else {
        document("AKANKSHA", &body)
    }
}

pub fn render_success() -> String {
    let body = format!(
        r#"<section class="notFound">
  <div class="container">
    <h1>Reservation received</h1>
    <p>Thank you! We look forward to seeing you.</p>
    <a href="/">Back to Home</a>
  </div>
</section>
{}"#,
        render_footer()
    );
    document("AKANKSHA - Reservation received", &body)
}

#[cfg(test)]
mod tests {
    use time::macros::date;
    use crate::form::SubmissionState;
    use super::*;

    fn form() -> ReservationForm {
        ReservationForm::with_today(date!(2030 - 01 - 01))
    }

    #[test]
    fn idle_form_is_editable() {
        let html = render_reservation_section(&form());

        assert!(!html.contains("disabled"));
        assert!(html.contains("RESERVE NOW"));
        assert!(html.contains(r#"min="2030-01-01""#));
        assert!(html.contains(r#"maxlength="11""#));
    }

    #[test]
    fn field_values_are_escaped() {
        let mut form = form();
        form.set_first_name(r#""><script>"#);

        let html = render_reservation_section(&form);

        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn landing_page_ends_with_footer() {
        let html = render_landing(&form());

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("MAKE A RESERVATION"));
        assert!(html.contains("All Rights Reserved."));
    }

    #[test]
    fn form_posts_named_fields_to_the_dev_server() {
        let html = render_reservation_section(&form());

        assert!(html.contains(r#"<form method="post" action="/reservation">"#));
        assert!(!html.contains("/api/"));
        for name in ["firstName", "lastName", "email", "phone", "date", "time"] {
            assert!(html.contains(&format!(r#"name="{}""#, name)), "missing input {}", name);
        }
    }

    #[test]
    fn toast_is_shown_above_the_form() {
        let html = render_landing_with(
            &form(),
            Some(&Toast::Error("Please fill all fields".to_string())),
            false,
        );

        assert!(html.contains(r#"<div class="toast toast_error" role="alert">Please fill all fields</div>"#));
        assert!(!html.contains("http-equiv"));
    }

    #[test]
    fn booked_page_moves_on_to_success_view() {
        let html = render_landing_with(&form(), Some(&Toast::Success("Booked".to_string())), true);

        assert!(html.contains(r#"<meta http-equiv="refresh" content="1;url=/success" />"#));
        assert!(html.contains("Booked"));
    }

    #[test]
    fn success_page_links_home() {
        let html = render_success();

        assert!(html.contains("Reservation received"));
        assert!(html.contains(r#"<a href="/">"#));
    }

    #[test]
    fn submitting_form_disables_every_control() {
        let form = form().with_state(SubmissionState::Submitting);

        let html = render_reservation_section(&form);

        assert_eq!(html.matches(" disabled").count(), 7);
        assert!(html.contains("SUBMITTING..."));
        assert!(!html.contains("RESERVE NOW"));
    }
}
