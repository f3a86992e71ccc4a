use std::collections::BTreeSet;

use super::environment::{EnvironmentFile, substitute};
use super::model::{
    ApiCollection, ApiDoc, ApiExample, DocSet, NOT_FOUND, RawCollection, RawItem, RawResponse,
    TreeNode,
};

/// Builds the browsable document set from a parsed collection.
///
/// Items are walked depth-first in file order. Folder and API ids are
/// assigned as encountered (APIs 1-based, they double as section anchors);
/// example ids use a single `response_N` counter across the whole
/// collection, so an example id is unique even across APIs.
pub fn build(raw: RawCollection, env: Option<&EnvironmentFile>) -> DocSet {
    let mut builder = Builder {
        env,
        api_id: 0,
        folder_id: 0,
        response_id: 0,
        unresolved: BTreeSet::new(),
        apis: Vec::new(),
    };

    let description = raw
        .info
        .description
        .map(|description| builder.subst(description.content().to_owned()))
        .unwrap_or_default();
    let collection = ApiCollection {
        name: builder.subst(raw.info.name),
        description,
        schema: raw.info.schema,
    };

    let tree = builder.walk(raw.item);

    for key in &builder.unresolved {
        log::warn!("no environment value for {{{{{key}}}}}");
    }
    log::info!(
        "built documentation for \"{}\": {} APIs, {} examples",
        collection.name,
        builder.apis.len(),
        builder.response_id
    );

    DocSet {
        collection,
        tree,
        apis: builder.apis,
    }
}

struct Builder<'a> {
    env: Option<&'a EnvironmentFile>,
    api_id: usize,
    folder_id: usize,
    response_id: usize,
    unresolved: BTreeSet<String>,
    apis: Vec<ApiDoc>,
}

impl Builder<'_> {
    fn subst(&mut self, value: String) -> String {
        substitute(self.env, value, &mut self.unresolved)
    }

    fn walk(&mut self, items: Vec<RawItem>) -> Vec<TreeNode> {
        let mut nodes = Vec::new();
        for item in items {
            let name = item.name.clone().unwrap_or_else(|| NOT_FOUND.to_owned());
            // An entry with a nested `item` array is a folder, even when it
            // also carries a request.
            if let Some(children) = item.item {
                self.folder_id += 1;
                let id = self.folder_id;
                let name = self.subst(name);
                let children = self.walk(children);
                nodes.push(TreeNode::Folder { id, name, children });
            } else {
                self.api_id += 1;
                let id = self.api_id;
                let name = self.subst(name);
                let method = item.request.as_ref().and_then(|request| request.method.clone());
                nodes.push(TreeNode::Api {
                    id,
                    name: name.clone(),
                    method: method.clone(),
                });
                let api = self.build_api(id, name, method, item);
                self.apis.push(api);
            }
        }
        nodes
    }

    fn build_api(
        &mut self,
        id: usize,
        name: String,
        method: Option<String>,
        item: RawItem,
    ) -> ApiDoc {
        let request = item.request;
        let description = request
            .as_ref()
            .and_then(|request| request.description.as_ref())
            .map(|description| description.content().to_owned())
            .map(|description| self.subst(description));
        let url = request
            .as_ref()
            .and_then(|request| request.url.as_ref())
            .and_then(|url| url.raw())
            .map(|url| self.subst(url.to_owned()));
        let body = request
            .as_ref()
            .and_then(|request| request.body.as_ref())
            .and_then(|body| body.raw.clone())
            .map(|body| self.subst(body.trim().to_owned()))
            .filter(|body| !body.is_empty());

        let examples = self.examples(id, &name, method.as_deref(), url.as_deref(), body.as_deref(), item.response);

        ApiDoc {
            id,
            name,
            description,
            method,
            url,
            body,
            examples,
        }
    }

    fn examples(
        &mut self,
        api_id: usize,
        api_name: &str,
        api_method: Option<&str>,
        api_url: Option<&str>,
        api_body: Option<&str>,
        responses: Vec<RawResponse>,
    ) -> Vec<ApiExample> {
        let request_id = api_id.to_string();
        let mut examples = Vec::new();

        for response in responses {
            self.response_id += 1;
            let original = response.original_request;
            let method = original.as_ref().and_then(|request| request.method.clone());
            let url = original
                .as_ref()
                .and_then(|request| request.url.as_ref())
                .and_then(|url| url.raw())
                .map(|url| self.subst(url.to_owned()));
            let body = original
                .as_ref()
                .and_then(|request| request.body.as_ref())
                .and_then(|body| body.raw.clone())
                .map(|body| self.subst(body));
            let name = response
                .name
                .map(|name| self.subst(name))
                .unwrap_or_else(|| NOT_FOUND.to_owned());

            examples.push(ApiExample {
                id: format!("response_{}", self.response_id),
                request_id: request_id.clone(),
                name,
                method,
                url,
                body,
                status: response.status,
                code: response.code,
                response_body: self.subst(response.body.unwrap_or_default()),
            });
        }

        // A request without saved responses still gets one example built
        // from the request itself, so every API renders an example section.
        if examples.is_empty() {
            self.response_id += 1;
            examples.push(ApiExample {
                id: format!("response_{}", self.response_id),
                request_id,
                name: api_name.to_owned(),
                method: api_method.map(str::to_owned),
                url: api_url.map(str::to_owned),
                body: api_body.map(str::to_owned),
                status: None,
                code: None,
                response_body: String::new(),
            });
        }

        examples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::environment::EnvEntry;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> RawCollection {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> RawCollection {
        parse(json!({
            "info": {
                "name": "Store",
                "description": "All store endpoints",
                "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
            },
            "item": [
                {
                    "name": "Books",
                    "item": [
                        {
                            "name": "List books",
                            "request": {
                                "method": "GET",
                                "url": { "raw": "{{base_url}}/books" }
                            },
                            "response": [
                                {
                                    "name": "Full page",
                                    "originalRequest": {
                                        "method": "GET",
                                        "url": { "raw": "{{base_url}}/books" }
                                    },
                                    "status": "OK",
                                    "code": 200,
                                    "body": "[{\"id\": 1}]"
                                },
                                {
                                    "name": "Empty page",
                                    "status": "OK",
                                    "code": 200,
                                    "body": "[]"
                                }
                            ]
                        },
                        {
                            "name": "Create book",
                            "request": {
                                "method": "POST",
                                "url": "{{base_url}}/books",
                                "body": { "mode": "raw", "raw": "  {\"title\": \"T\"}  " }
                            }
                        }
                    ]
                },
                {
                    "name": "Ping",
                    "request": { "method": "GET", "url": { "raw": "https://api.test/ping" } }
                }
            ]
        }))
    }

    #[test]
    fn test_tree_mirrors_item_nesting() {
        let set = build(sample(), None);
        assert_eq!(set.tree.len(), 2);
        match &set.tree[0] {
            TreeNode::Folder { id, name, children } => {
                assert_eq!(*id, 1);
                assert_eq!(name, "Books");
                assert_eq!(children.len(), 2);
            }
            other => panic!("expected folder, got {other:?}"),
        }
        match &set.tree[1] {
            TreeNode::Api { id, name, method } => {
                assert_eq!(*id, 3);
                assert_eq!(name, "Ping");
                assert_eq!(method.as_deref(), Some("GET"));
            }
            other => panic!("expected api leaf, got {other:?}"),
        }
    }

    #[test]
    fn test_api_ids_are_one_based_in_walk_order() {
        let set = build(sample(), None);
        let ids: Vec<usize> = set.apis.iter().map(|api| api.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(set.apis[0].name, "List books");
        assert_eq!(set.apis[2].name, "Ping");
    }

    #[test]
    fn test_example_ids_use_one_global_counter() {
        let set = build(sample(), None);
        let ids: Vec<&str> = set
            .apis
            .iter()
            .flat_map(|api| api.examples.iter().map(|example| example.id.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec!["response_1", "response_2", "response_3", "response_4"]
        );
    }

    #[test]
    fn test_example_request_id_is_owning_api_id() {
        let set = build(sample(), None);
        assert!(set.apis[0]
            .examples
            .iter()
            .all(|example| example.request_id == "1"));
        assert_eq!(set.apis[1].examples[0].request_id, "2");
    }

    #[test]
    fn test_request_without_responses_synthesizes_one_example() {
        let set = build(sample(), None);
        let api = &set.apis[1];
        assert_eq!(api.examples.len(), 1);
        let example = &api.examples[0];
        assert_eq!(example.name, "Create book");
        assert_eq!(example.method.as_deref(), Some("POST"));
        assert_eq!(example.status, None);
        assert_eq!(example.code, None);
        assert_eq!(example.response_body, "");
        assert_eq!(example.body.as_deref(), Some("{\"title\": \"T\"}"));
        let preview = example.request_preview().unwrap();
        assert!(preview.starts_with("POST {{base_url}}/books"));
        assert!(preview.contains("{\"title\": \"T\"}"));
    }

    #[test]
    fn test_request_body_is_trimmed() {
        let set = build(sample(), None);
        assert_eq!(set.apis[1].body.as_deref(), Some("{\"title\": \"T\"}"));
    }

    #[test]
    fn test_missing_names_fall_back() {
        let set = build(
            parse(json!({
                "info": { "name": "N", "schema": "s/v2.1.0" },
                "item": [
                    {
                        "request": { "method": "GET", "url": { "raw": "u" } },
                        "response": [ { "status": "OK", "code": 200, "body": "{}" } ]
                    }
                ]
            })),
            None,
        );
        assert_eq!(set.apis[0].name, NOT_FOUND);
        assert_eq!(set.apis[0].examples[0].name, NOT_FOUND);
    }

    #[test]
    fn test_environment_values_substituted_throughout() {
        let env = EnvironmentFile {
            name: None,
            values: vec![EnvEntry {
                key: "base_url".into(),
                value: "https://api.test".into(),
                enabled: true,
            }],
        };
        let set = build(sample(), Some(&env));
        assert_eq!(set.apis[0].url.as_deref(), Some("https://api.test/books"));
        let example = &set.apis[0].examples[0];
        assert_eq!(example.url.as_deref(), Some("https://api.test/books"));
        assert_eq!(
            example.request_preview().as_deref(),
            Some("GET https://api.test/books")
        );
    }

    #[test]
    fn test_empty_collection_builds_empty_set() {
        let set = build(
            parse(json!({ "info": { "name": "Empty", "schema": "s/v2.1.0" }, "item": [] })),
            None,
        );
        assert!(set.tree.is_empty());
        assert!(set.apis.is_empty());
    }

}
