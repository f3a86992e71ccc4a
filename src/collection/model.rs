use serde::Deserialize;

/// Name shown when a collection item carries none, matching what Postman's
/// own documentation pages display.
pub const NOT_FOUND: &str = "[NOT FOUND]";

// ---------------------------------------------------------------------------
// Raw mirror of the collection JSON (schema 2.1.0). Only the fields the
// viewer renders are mirrored; everything else is ignored on parse.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RawCollection {
    pub info: RawInfo,
    #[serde(default)]
    pub item: Vec<RawItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawInfo {
    pub name: String,
    pub description: Option<RawDescription>,
    pub schema: String,
}

/// Postman writes descriptions either as a bare string or as an object with
/// a `content` field. Both forms appear in real exports.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDescription {
    Text(String),
    Detail { content: String },
}

impl RawDescription {
    pub fn content(&self) -> &str {
        match self {
            RawDescription::Text(text) => text,
            RawDescription::Detail { content } => content,
        }
    }
}

/// One entry of an `item` array. A folder carries a nested `item` array, a
/// request carries `request` (and optionally saved `response`s).
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    pub name: Option<String>,
    pub item: Option<Vec<RawItem>>,
    pub request: Option<RawRequest>,
    #[serde(default)]
    pub response: Vec<RawResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRequest {
    pub method: Option<String>,
    pub description: Option<RawDescription>,
    pub url: Option<RawUrl>,
    pub body: Option<RawBody>,
}

/// URLs also come in string and object forms.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawUrl {
    Text(String),
    Detail { raw: Option<String> },
}

impl RawUrl {
    pub fn raw(&self) -> Option<&str> {
        match self {
            RawUrl::Text(text) => Some(text),
            RawUrl::Detail { raw } => raw.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBody {
    pub raw: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawResponse {
    pub name: Option<String>,
    #[serde(rename = "originalRequest")]
    pub original_request: Option<RawRequest>,
    pub status: Option<String>,
    pub code: Option<u16>,
    pub body: Option<String>,
}

// ---------------------------------------------------------------------------
// Built document set, the shape the UI consumes.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ApiCollection {
    pub name: String,
    pub description: String,
    pub schema: String,
}

/// Sidebar navigation tree. Folder ids and API ids are assigned in walk
/// order; API ids are 1-based and double as the section anchors.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Folder {
        id: usize,
        name: String,
        children: Vec<TreeNode>,
    },
    Api {
        id: usize,
        name: String,
        method: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiDoc {
    pub id: usize,
    pub name: String,
    pub description: Option<String>,
    pub method: Option<String>,
    pub url: Option<String>,
    pub body: Option<String>,
    pub examples: Vec<ApiExample>,
}

/// One saved (or synthesized) response example. `id` is `response_N` with N
/// counted across the whole collection; `request_id` is the owning API's id
/// rendered as text. The pair keys the response picker.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiExample {
    pub id: String,
    pub request_id: String,
    pub name: String,
    pub method: Option<String>,
    pub url: Option<String>,
    pub body: Option<String>,
    pub status: Option<String>,
    pub code: Option<u16>,
    pub response_body: String,
}

impl ApiExample {
    /// The request as shown in an example card: a `METHOD url` line, then
    /// the body, separated by a blank line. Parts that are missing are
    /// simply left out.
    pub fn request_preview(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let (Some(method), Some(url)) = (self.method.as_deref(), self.url.as_deref()) {
            parts.push(format!("{method} {url}"));
        }
        if let Some(body) = self.body.as_deref()
            && !body.is_empty()
        {
            parts.push(body.to_owned());
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n\n"))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocSet {
    pub collection: ApiCollection,
    pub tree: Vec<TreeNode>,
    pub apis: Vec<ApiDoc>,
}

impl DocSet {
    pub fn api(&self, id: usize) -> Option<&ApiDoc> {
        self.apis.iter().find(|api| api.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_string_form() {
        let desc: RawDescription = serde_json::from_str(r#""plain text""#).unwrap();
        assert_eq!(desc.content(), "plain text");
    }

    #[test]
    fn test_description_object_form() {
        let desc: RawDescription =
            serde_json::from_str(r#"{ "content": "from object" }"#).unwrap();
        assert_eq!(desc.content(), "from object");
    }

    #[test]
    fn test_url_string_form() {
        let url: RawUrl = serde_json::from_str(r#""https://api.test/v1""#).unwrap();
        assert_eq!(url.raw(), Some("https://api.test/v1"));
    }

    #[test]
    fn test_url_object_form() {
        let url: RawUrl =
            serde_json::from_str(r#"{ "raw": "https://api.test/v1", "path": ["v1"] }"#).unwrap();
        assert_eq!(url.raw(), Some("https://api.test/v1"));
    }

    #[test]
    fn test_url_object_without_raw() {
        let url: RawUrl = serde_json::from_str(r#"{ "path": ["v1"] }"#).unwrap();
        assert_eq!(url.raw(), None);
    }

    #[test]
    fn test_collection_parse_ignores_unknown_fields() {
        let json = r#"{
            "info": {
                "_postman_id": "abc",
                "name": "Demo",
                "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
            },
            "item": [],
            "event": []
        }"#;
        let raw: RawCollection = serde_json::from_str(json).unwrap();
        assert_eq!(raw.info.name, "Demo");
        assert!(raw.item.is_empty());
    }

    #[test]
    fn test_api_lookup_by_id() {
        let set = DocSet {
            collection: ApiCollection {
                name: "c".into(),
                description: String::new(),
                schema: "s".into(),
            },
            tree: Vec::new(),
            apis: vec![ApiDoc {
                id: 3,
                name: "only".into(),
                description: None,
                method: None,
                url: None,
                body: None,
                examples: Vec::new(),
            }],
        };
        assert_eq!(set.api(3).map(|a| a.name.as_str()), Some("only"));
        assert!(set.api(1).is_none());
    }

    fn example(method: Option<&str>, url: Option<&str>, body: Option<&str>) -> ApiExample {
        ApiExample {
            id: "response_1".into(),
            request_id: "1".into(),
            name: "n".into(),
            method: method.map(str::to_owned),
            url: url.map(str::to_owned),
            body: body.map(str::to_owned),
            status: None,
            code: None,
            response_body: String::new(),
        }
    }

    #[test]
    fn test_request_preview_variants() {
        assert_eq!(
            example(Some("GET"), Some("u"), None).request_preview().as_deref(),
            Some("GET u")
        );
        assert_eq!(
            example(Some("POST"), Some("u"), Some("b"))
                .request_preview()
                .as_deref(),
            Some("POST u\n\nb")
        );
        // The method line needs both halves.
        assert_eq!(example(None, Some("u"), None).request_preview(), None);
        assert_eq!(
            example(Some("GET"), None, Some("b")).request_preview().as_deref(),
            Some("b")
        );
        assert_eq!(example(None, None, None).request_preview(), None);
        assert_eq!(example(Some("GET"), Some("u"), Some("")).request_preview().as_deref(), Some("GET u"));
    }
}
