//! HTML views: counter dashboard (`/`) and API reference (`/docs`).

use std::fmt::Write;

use axum::{extract::State, response::Html};

use riecount_core::CounterSet;

use crate::api::{timed, ApiError};
use crate::app_state::AppState;

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 20px; background-color: #f4f4f9; }
h1 { text-align: center; color: #333; }
table { width: 50%; border-collapse: collapse; margin: 20px auto; background-color: #fff;
        box-shadow: 0 2px 5px rgba(0, 0, 0, 0.1); }
th, td { padding: 10px; text-align: left; border-bottom: 1px solid #ddd; }
th { background-color: #f2f2f2; }
tr:hover { background-color: #f9f9f9; }
.links { text-align: center; margin-top: 20px; }
.links a { display: inline-block; padding: 10px 20px; margin: 5px; color: #fff;
           background-color: #007bff; text-decoration: none; border-radius: 5px; }
.links a:hover { background-color: #0056b3; }
"#;

/// (method, path, query, response)
const ROUTES: [(&str, &str, &str, &str); 7] = [
    ("GET", "/health", "", r#"{"status": "ok"}"#),
    ("GET", "/get_count", "name (default: default-counter)", r#"{"name": string, "count": integer}"#),
    ("GET", "/get_all", "", r#"{"counters": {name: count, ...}}"#),
    ("POST", "/count", "name (default: default-counter)", r#"{"name": string, "count": integer}"#),
    ("GET", "/", "", "HTML dashboard"),
    ("GET", "/docs", "", "this page"),
    ("GET", "/metrics", "", "Prometheus text format"),
];

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n"
    )
}

/// Counters in load order, one table row each.
pub fn render_dashboard(counters: &CounterSet) -> String {
    let mut body = String::from(
        "<table>\n<thead><tr><th>Counter Name</th><th>Count</th></tr></thead>\n<tbody>\n",
    );
    for (name, count) in counters.iter() {
        let _ = writeln!(body, "<tr><td>{}</td><td>{}</td></tr>", escape_html(name), count);
    }
    body.push_str("</tbody>\n</table>\n");
    body.push_str(
        "<div class=\"links\">\n<a href=\"/docs\">API Docs</a>\n\
         <a href=\"/get_all\">JSON</a>\n<a href=\"/metrics\">Metrics</a>\n</div>\n",
    );
    page("Counter Dashboard", &body)
}

pub fn render_docs() -> String {
    let mut body = String::from(
        "<table>\n<thead><tr><th>Method</th><th>Path</th><th>Query</th><th>Response</th></tr></thead>\n<tbody>\n",
    );
    for (method, path, query, response) in ROUTES {
        let _ = writeln!(
            body,
            "<tr><td>{method}</td><td><code>{path}</code></td><td>{}</td><td><code>{}</code></td></tr>",
            escape_html(query),
            escape_html(response)
        );
    }
    body.push_str("</tbody>\n</table>\n<div class=\"links\">\n<a href=\"/\">Dashboard</a>\n</div>\n");
    page("Counter API", &body)
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let store = state.store();
    let counters = timed(&state, "load_all", store.load_all()).await?;
    Ok(Html(render_dashboard(&counters)))
}

pub async fn docs() -> Html<String> {
    Html(render_docs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_rows_follow_load_order() {
        let set: CounterSet = [("b", 2), ("a", 5)].into_iter().collect();
        let html = render_dashboard(&set);
        let b = html.find("<td>b</td><td>2</td>");
        let a = html.find("<td>a</td><td>5</td>");
        assert!(b.is_some() && a.is_some());
        assert!(b < a);
        assert!(html.contains("href=\"/docs\""));
    }

    #[test]
    fn dashboard_escapes_names() {
        let set: CounterSet = [("<script>x</script>", 1)].into_iter().collect();
        let html = render_dashboard(&set);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    }

    #[test]
    fn docs_lists_every_route() {
        let html = render_docs();
        for (_, path, _, _) in ROUTES {
            assert!(html.contains(&format!("<code>{path}</code>")));
        }
    }
}
