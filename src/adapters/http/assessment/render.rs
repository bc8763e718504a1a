//! Server-rendered HTML pages for browser form submissions.

use chrono::{DateTime, Utc};
use pulldown_cmark::{html, Event, Options, Parser};

use crate::domain::assessment::{FeatureSet, RiskAssessment};

/// Landing page with the risk form.
pub fn index_page(feature_set: FeatureSet) -> String {
    let cholesterol = if feature_set.requires_cholesterol() {
        r#"
        <label>Total cholesterol (mg/dL)
            <input type="number" name="cholesterol" min="50" max="600" step="1" required>
        </label>"#
    } else {
        ""
    };

    let body = format!(
        r#"    <h1>Stroke Risk Calculator</h1>
    <form method="post" action="/predict/report">
        <label>Name <input type="text" name="name"></label>
        <label>Age <input type="number" name="age" min="0" max="120" step="1" required></label>
        <label>Sex
            <select name="sex" required>
                <option value="male">Male</option>
                <option value="female">Female</option>
            </select>
        </label>
        <label>BMI <input type="number" name="bmi" min="10" max="80" step="0.1" required></label>{cholesterol}
{smoking}
{diabetes}
{hypertension}
{atrial_fibrillation}
{previous_stroke}
{family_history}
        <button type="submit">Estimate risk</button>
    </form>"#,
        cholesterol = cholesterol,
        smoking = yes_no_select("smoking", "Smoker"),
        diabetes = yes_no_select("diabetes", "Diabetes"),
        hypertension = yes_no_select("hypertension", "Hypertension"),
        atrial_fibrillation = yes_no_select("atrial_fibrillation", "Atrial fibrillation"),
        previous_stroke = yes_no_select("previous_stroke", "Previous stroke"),
        family_history = yes_no_select("family_history", "Family history of stroke"),
    );

    wrap_html("Stroke Risk Calculator", &body)
}

/// Result page for a completed assessment.
pub fn report_page(assessment: &RiskAssessment, generated_at: DateTime<Utc>) -> String {
    let greeting = match &assessment.name {
        Some(name) => format!("Results for {}", html_escape(name)),
        None => "Your results".to_string(),
    };

    let reasons = if assessment.reasons.is_empty() {
        "        <p>No major risk factors were reported.</p>".to_string()
    } else {
        list(&assessment.reasons)
    };

    let body = format!(
        r#"    <h1>{greeting}</h1>
    <section class="summary">
        <p class="percentage">Estimated stroke risk: <strong>{percentage:.2}%</strong></p>
        <p class="category">{category}</p>
        <p class="advice">{advice}</p>
    </section>
    <section>
        <h2>Why</h2>
{reasons}
    </section>
    <section>
        <h2>Recommended foods</h2>
{foods}
    </section>
    <footer>Generated {generated_at}. This estimate is not a diagnosis.</footer>
    <p><a href="/">Start over</a></p>"#,
        greeting = greeting,
        percentage = assessment.stroke_percentage.rounded(),
        category = html_escape(&assessment.risk_category),
        advice = html_escape(&assessment.advice),
        reasons = reasons,
        foods = list(&assessment.recommended_foods),
        generated_at = generated_at.format("%Y-%m-%d %H:%M UTC"),
    );

    wrap_html("Stroke Risk Results", &body)
}

/// Error page carrying the failure message.
pub fn error_page(message: &str) -> String {
    let body = format!(
        r#"    <h1>We could not estimate your risk</h1>
    <p class="error">{}</p>
    <p><a href="/">Back to the form</a></p>"#,
        html_escape(message)
    );
    wrap_html("Stroke Risk Error", &body)
}

fn yes_no_select(name: &str, label: &str) -> String {
    format!(
        r#"        <label>{label}
            <select name="{name}" required>
                <option value="no">No</option>
                <option value="yes">Yes</option>
            </select>
        </label>"#,
        label = label,
        name = name
    )
}

fn list(items: &[String]) -> String {
    let items: Vec<String> = items
        .iter()
        .map(|item| format!("            <li>{}</li>", inline_markdown(item)))
        .collect();
    format!("        <ul>\n{}\n        </ul>", items.join("\n"))
}

/// Renders one line of markdown as inline HTML. Raw HTML in the input is
/// emitted as text.
fn inline_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);

    let trimmed = rendered.trim_end();
    trimmed
        .strip_prefix("<p>")
        .and_then(|inner| inner.strip_suffix("</p>"))
        .unwrap_or(trimmed)
        .to_string()
}

fn wrap_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <main>
{body}
    </main>
</body>
</html>"#,
        title = html_escape(title),
        css = DEFAULT_CSS,
        body = body
    )
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const DEFAULT_CSS: &str = r#"
body { font-family: system-ui, sans-serif; color: #1f2937; max-width: 40rem; margin: 2rem auto; }
label { display: block; margin: 0.5rem 0; }
.summary { border: 1px solid #e5e7eb; padding: 1rem; border-radius: 0.5rem; }
.percentage strong { font-size: 1.5rem; }
.error { color: #b91c1c; }
footer { color: #6b7280; font-size: 0.85rem; margin-top: 2rem; }
"#;
