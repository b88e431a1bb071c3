//! Report rendering
//!
//! Pure string construction; delivery lives in `services::mailer`. The
//! report goes out on every run, including quiet days, so a silent scheduler
//! failure is distinguishable from "no slots today".

use crate::types::CheckResult;

/// Subject line, by precedence: open slots beat errors beat a quiet day
pub fn render_subject(result: &CheckResult) -> String {
    if !result.available.is_empty() {
        format!(
            "Found {} open appointment slot(s) at the interior ministry!",
            result.available.len()
        )
    } else if !result.errors.is_empty() {
        "Daily report: appointment check ran into problems".to_string()
    } else {
        "Daily report: no open appointment slots right now".to_string()
    }
}

fn status_color(result: &CheckResult) -> &'static str {
    if !result.available.is_empty() {
        "#28a745"
    } else if !result.errors.is_empty() {
        "#ffc107"
    } else {
        "#6c757d"
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Full HTML body for the daily report mail
pub fn render_html(result: &CheckResult, booking_url: &str) -> String {
    let mut body = String::with_capacity(4096);

    body.push_str(&format!(
        r#"<html><body style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
<div style="background-color: {color}; color: white; padding: 20px; text-align: center; border-radius: 10px 10px 0 0;">
<h1 style="margin: 0;">Daily appointment check</h1>
<p style="margin: 5px 0 0 0; font-size: 14px;">{stamp}</p>
</div>
<div style="padding: 20px; background-color: #f8f9fa;">
"#,
        color = status_color(result),
        stamp = result.timestamp.format("%d/%m/%Y %H:%M UTC"),
    ));

    if !result.available.is_empty() {
        body.push_str(
            r#"<div style="background-color: #d4edda; border-left: 4px solid #28a745; padding: 15px; margin-bottom: 15px; border-radius: 5px;">
<h2 style="color: #155724; margin-top: 0;">Open slots found</h2>
<ul style="color: #155724;">
"#,
        );
        for branch in &result.available {
            body.push_str(&format!(
                "<li style='margin-bottom: 8px;'><strong>{}</strong><br/>{}</li>\n",
                escape(&branch.name),
                escape(&branch.date_hint)
            ));
        }
        body.push_str(&format!(
            r#"</ul>
<a href="{url}" style="display: inline-block; background-color: #28a745; color: white; padding: 10px 20px; text-decoration: none; border-radius: 5px; margin-top: 10px;">Book an appointment now</a>
</div>
"#,
            url = escape(booking_url)
        ));
    }

    if !result.unavailable.is_empty() {
        body.push_str(
            r#"<div style="background-color: #fff3cd; border-left: 4px solid #ffc107; padding: 15px; margin-bottom: 15px; border-radius: 5px;">
<h2 style="color: #856404; margin-top: 0;">Branches without open slots</h2>
<ul style="color: #856404;">
"#,
        );
        for branch in &result.unavailable {
            body.push_str(&format!(
                "<li>{} - no open slots at the moment</li>\n",
                escape(&branch.name)
            ));
        }
        body.push_str("</ul>\n</div>\n");
    }

    if !result.errors.is_empty() {
        body.push_str(
            r#"<div style="background-color: #f8d7da; border-left: 4px solid #dc3545; padding: 15px; margin-bottom: 15px; border-radius: 5px;">
<h2 style="color: #721c24; margin-top: 0;">Errors</h2>
<ul style="color: #721c24;">
"#,
        );
        for error in &result.errors {
            body.push_str(&format!("<li>{}</li>\n", escape(error)));
        }
        body.push_str("</ul>\n</div>\n");
    }

    body.push_str(&format!(
        r#"<div style="background-color: white; padding: 15px; border-radius: 5px; border: 1px solid #dee2e6;">
<h3 style="margin-top: 0;">Summary</h3>
<table style="width: 100%; border-collapse: collapse;">
<tr><td style="padding: 8px; border-bottom: 1px solid #dee2e6;">Branches with open slots:</td><td style="padding: 8px; border-bottom: 1px solid #dee2e6; font-weight: bold; color: #28a745;">{available}</td></tr>
<tr><td style="padding: 8px; border-bottom: 1px solid #dee2e6;">Branches without slots:</td><td style="padding: 8px; border-bottom: 1px solid #dee2e6; font-weight: bold;">{unavailable}</td></tr>
<tr><td style="padding: 8px;">Errors:</td><td style="padding: 8px; font-weight: bold; color: #dc3545;">{errors}</td></tr>
</table>
</div>
<p style="text-align: center; color: #6c757d; font-size: 12px; margin-top: 20px;">
The next check runs on the scheduler's cadence.<br/>GoVisit appointment watcher
</p>
</div>
</body></html>
"#,
        available = result.available.len(),
        unavailable = result.unavailable.len(),
        errors = result.errors.len(),
    ));

    body
}
