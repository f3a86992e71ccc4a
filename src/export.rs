use crate::collection::{ApiDoc, ApiExample};

/// Builds a copy-pasteable curl invocation for a documented request.
pub fn curl_command(method: &str, url: &str, body: Option<&str>) -> String {
    let mut parts = vec!["curl".to_string()];

    let method = method.to_uppercase();
    if method != "GET" {
        parts.push("-X".to_string());
        parts.push(method);
    }

    if let Some(body) = body.filter(|body| !body.is_empty()) {
        // Collection bodies are almost always JSON; announce it when so.
        if serde_json::from_str::<serde_json::Value>(body).is_ok() {
            parts.push("-H".to_string());
            parts.push("'Content-Type: application/json'".to_string());
        }
        parts.push("-d".to_string());
        parts.push(format!("'{}'", body.replace('\'', "'\\''")));
    }

    parts.push(format!("'{}'", url));
    parts.join(" ")
}

/// Curl for the request as documented. `None` when the request never
/// declared a URL.
pub fn curl_for_api(api: &ApiDoc) -> Option<String> {
    let url = api.url.as_deref()?;
    let method = api.method.as_deref().unwrap_or("GET");
    Some(curl_command(method, url, api.body.as_deref()))
}

/// Curl for a saved example's original request. `None` when the saved
/// request carried no URL.
pub fn curl_for_example(example: &ApiExample) -> Option<String> {
    let url = example.url.as_deref()?;
    let method = example.method.as_deref().unwrap_or("GET");
    Some(curl_command(method, url, example.body.as_deref()))
}
