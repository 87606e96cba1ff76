//! `GET /` — an HTML index of every endpoint.

use std::fmt::Write as _;

use axum::response::Html;

use crate::{ENDPOINTS, Endpoint};

pub async fn handler() -> Html<String> {
  Html(render(ENDPOINTS))
}

/// Render `endpoints` as a list. Parameterless `GET` routes become links.
pub fn render(endpoints: &[Endpoint]) -> String {
  let mut items = String::new();
  for Endpoint { method, path } in endpoints {
    if *method == "GET" && !path.contains('{') {
      let _ = writeln!(items, "    <li>{method} <a href=\"{path}\">{path}</a></li>");
    } else {
      let _ = writeln!(items, "    <li>{method} {path}</li>");
    }
  }

  format!(
    "<!DOCTYPE html>
<html>
  <head><title>Holonet API</title></head>
  <body>
  <h1>Holonet API</h1>
  <p>Available endpoints:</p>
  <ul>
{items}  </ul>
  </body>
</html>
"
  )
}
