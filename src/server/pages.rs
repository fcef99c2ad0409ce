// Server-rendered pages (simple, self-contained HTML)

use crate::model::Prediction;
use crate::store::InsightsReport;

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Shared page shell.
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8" />
<title>{title}</title>
<style>
body {{ font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; margin: 24px auto; max-width: 760px; color: #222; }}
nav a {{ margin-right: 12px; }}
form label {{ display: block; margin-top: 12px; font-weight: 600; }}
input, textarea {{ width: 100%; padding: 8px; margin-top: 4px; box-sizing: border-box; }}
button {{ margin-top: 16px; padding: 8px 20px; }}
.notice {{ background: #fff3cd; border: 1px solid #ffe58f; padding: 10px 12px; border-radius: 6px; margin-bottom: 16px; }}
.sentiment {{ font-size: 1.4em; font-weight: 700; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ padding: 6px 8px; border-bottom: 1px solid #ddd; text-align: left; }}
.chart {{ max-width: 420px; }}
</style>
</head>
<body>
<nav><a href="/">Submit feedback</a><a href="/insights">Insights</a></nav>
{body}
</body>
</html>
"#
    )
}

/// The feedback form, with an optional one-shot notice from a redirect.
pub fn form_page(notice: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(notice) = notice {
        body.push_str(&format!(
            "<div class=\"notice\">{}</div>\n",
            html_escape(notice)
        ));
    }
    body.push_str(
        r#"<h1>Internship Feedback</h1>
<form method="post" action="/predict">
<label for="name">Name</label>
<input id="name" name="name" type="text" />
<label for="email">Email</label>
<input id="email" name="email" type="email" />
<label for="feedback">Feedback</label>
<textarea id="feedback" name="feedback" rows="5" required></textarea>
<label for="review">Review (optional)</label>
<textarea id="review" name="review" rows="3"></textarea>
<button type="submit">Analyze</button>
</form>"#,
    );
    layout("Internship Feedback", &body)
}

/// Prediction result: label, confidence, echoed input, improvement tips.
pub fn result_page(
    prediction: &Prediction,
    feedback: &str,
    review: &str,
    tips: &[&str],
) -> String {
    let mut body = format!(
        "<h1>Analysis Result</h1>\n<p class=\"sentiment\">{} ({:.1}%)</p>\n<h2>Your feedback</h2>\n<p>{}</p>\n",
        html_escape(&prediction.label),
        prediction.confidence * 100.0,
        html_escape(feedback),
    );
    if !review.is_empty() {
        body.push_str(&format!(
            "<h2>Your review</h2>\n<p>{}</p>\n",
            html_escape(review)
        ));
    }
    if !tips.is_empty() {
        body.push_str("<h2>Suggested improvements</h2>\n<ul>\n");
        for tip in tips {
            body.push_str(&format!("<li>{}</li>\n", html_escape(tip)));
        }
        body.push_str("</ul>\n");
    }
    layout("Analysis Result", &body)
}

/// Aggregate statistics with an embedded counts object for the chart.
pub fn insights_page(report: &InsightsReport, counts_json: &str) -> String {
    let mut body = String::from("<h1>Feedback Insights</h1>\n<table>\n");
    body.push_str("<tr><th>Sentiment</th><th>Count</th><th>Share</th></tr>\n");
    for (label, count, share) in [
        ("Positive", report.counts.positive, report.shares.positive),
        ("Neutral", report.counts.neutral, report.shares.neutral),
        ("Negative", report.counts.negative, report.shares.negative),
    ] {
        body.push_str(&format!(
            "<tr><td>{label}</td><td>{count}</td><td>{share}%</td></tr>\n"
        ));
    }
    body.push_str("</table>\n");

    body.push_str(&format!(
        r##"<canvas id="sentiment-chart" class="chart"></canvas>
<script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
<script>
const counts = {counts_json};
new Chart(document.getElementById("sentiment-chart"), {{
  type: "doughnut",
  data: {{
    labels: Object.keys(counts),
    datasets: [{{ data: Object.values(counts), backgroundColor: ["#4caf50", "#9e9e9e", "#f44336"] }}]
  }}
}});
</script>
"##
    ));

    body.push_str("<h2>Recent submissions</h2>\n");
    if report.recent.is_empty() {
        body.push_str("<p>No feedback yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>When</th><th>Intern</th><th>Feedback</th><th>Sentiment</th><th>Confidence</th></tr>\n",
        );
        for row in &report.recent {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                html_escape(&row.timestamp),
                html_escape(&row.intern_name),
                html_escape(&row.feedback),
                html_escape(&row.predicted_sentiment),
                html_escape(&row.confidence),
            ));
        }
        body.push_str("</table>\n");
    }

    layout("Feedback Insights", &body)
}
