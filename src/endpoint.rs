use crate::pagination::{Cursor, Paging};
use crate::Error;
use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// Static declaration of one API operation: HTTP method, route template,
/// and the parameter names the endpoint recognizes.
///
/// Each call site declares its endpoint as a `const`; nothing about an
/// `Endpoint` changes after that. Placeholders in the route template use
/// `{name}` syntax and are filled from [`Args`] when the request is built.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    pub(crate) method: Method,
    pub(crate) route: &'static str,
    pub(crate) allowed: &'static [&'static str],
}

impl Endpoint {
    pub(crate) const fn get(route: &'static str, allowed: &'static [&'static str]) -> Endpoint {
        Endpoint {
            method: Method::GET,
            route,
            allowed,
        }
    }

    pub(crate) const fn post(route: &'static str, allowed: &'static [&'static str]) -> Endpoint {
        Endpoint {
            method: Method::POST,
            route,
            allowed,
        }
    }

    pub(crate) const fn patch(route: &'static str, allowed: &'static [&'static str]) -> Endpoint {
        Endpoint {
            method: Method::PATCH,
            route,
            allowed,
        }
    }

    /// Materializes a request from this declaration and the supplied
    /// arguments: fills the route placeholders and keeps only the
    /// recognized, non-null parameters.
    pub(crate) fn resolve(&self, args: &Args) -> Result<ResolvedRequest, Error> {
        let route = resolve_route(self.route, args)?;
        let params = self
            .allowed
            .iter()
            .filter_map(|name| {
                args.get(name)
                    .filter(|value| !value.is_null())
                    .map(|value| (*name, display_value(value)))
            })
            .collect();
        Ok(ResolvedRequest {
            method: self.method.clone(),
            route,
            params,
            body: args.body.clone(),
        })
    }
}

/// A fully materialized request: no placeholders left in the route, only
/// allow-listed parameters, body passed through untouched.
#[derive(Debug)]
pub(crate) struct ResolvedRequest {
    pub(crate) method: Method,
    pub(crate) route: String,
    pub(crate) params: Vec<(&'static str, String)>,
    pub(crate) body: Option<Value>,
}

/// Named arguments for a single call.
///
/// Holds the values that fill route placeholders and feed the parameter
/// allow-list, the optional pass-through request body, and the pagination
/// controls. `follow` and `endkey` live outside the value map so they can
/// never leak into the request; `startkey` stays inside it because it is a
/// real transport parameter wherever an endpoint lists it.
#[derive(Debug, Clone, Default)]
pub(crate) struct Args {
    values: BTreeMap<&'static str, Value>,
    body: Option<Value>,
    follow: bool,
    endkey: Option<Cursor>,
}

impl Args {
    pub(crate) fn new() -> Args {
        Args::default()
    }

    pub(crate) fn arg(mut self, name: &'static str, value: impl Into<Value>) -> Args {
        self.values.insert(name, value.into());
        self
    }

    pub(crate) fn arg_opt(self, name: &'static str, value: Option<impl Into<Value>>) -> Args {
        match value {
            Some(value) => self.arg(name, value),
            None => self,
        }
    }

    /// Fills in a declared default; an explicitly supplied value wins.
    pub(crate) fn or_default(mut self, name: &'static str, value: impl Into<Value>) -> Args {
        self.values.entry(name).or_insert_with(|| value.into());
        self
    }

    pub(crate) fn body(mut self, body: Value) -> Args {
        self.body = Some(body);
        self
    }

    pub(crate) fn with_paging(mut self, paging: &Paging) -> Args {
        if let Some(startkey) = &paging.startkey {
            self.values
                .insert("startkey", Value::String(startkey.0.clone()));
        }
        if let Some(limit) = paging.limit {
            self.values.insert("limit", Value::from(limit));
        }
        self.follow = paging.follow;
        self.endkey = paging.endkey.clone();
        self
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub(crate) fn follow(&self) -> bool {
        self.follow
    }

    pub(crate) fn endkey(&self) -> Option<Cursor> {
        self.endkey.clone()
    }

    /// The cursor the next fetch would use, if one is set.
    pub(crate) fn startkey(&self) -> Option<Cursor> {
        match self.values.get("startkey") {
            Some(Value::String(startkey)) => Some(Cursor(startkey.clone())),
            _ => None,
        }
    }

    pub(crate) fn set_startkey(&mut self, cursor: &Cursor) {
        self.values
            .insert("startkey", Value::String(cursor.0.clone()));
    }
}

/// Substitutes every `{name}` token in the template with the string form of
/// the argument of the same name. A placeholder with no matching argument
/// is an error; a `{` without a closing brace is literal route text.
fn resolve_route(template: &'static str, args: &Args) -> Result<String, Error> {
    let mut route = String::with_capacity(template.len());
    let mut rest: &'static str = template;
    while let Some(open) = rest.find('{') {
        match rest[open + 1..].find('}') {
            Some(close) => {
                let name = &rest[open + 1..open + 1 + close];
                let value = args.get(name).ok_or(Error::MissingRouteArgument(name))?;
                route.push_str(&rest[..open]);
                route.push_str(&display_value(value));
                rest = &rest[open + 2 + close..];
            }
            None => {
                route.push_str(&rest[..=open]);
                rest = &rest[open + 1..];
            }
        }
    }
    route.push_str(rest);
    Ok(route)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(value) => value.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{Args, Endpoint};
    use crate::pagination::Paging;
    use crate::Error;
    use serde_json::{json, Value};

    #[test]
    fn resolves_every_placeholder() {
        let endpoint = Endpoint::get("/v1/messaging/conversations/{id}/messages", &["id"]);
        let request = endpoint.resolve(&Args::new().arg("id", "20742")).unwrap();
        assert_eq!(request.route, "/v1/messaging/conversations/20742/messages");
        assert!(!request.route.contains('{'));
    }

    #[test]
    fn missing_placeholder_names_the_argument() {
        let endpoint = Endpoint::get("/v1/messaging/conversations/{id}/messages", &["id"]);
        match endpoint.resolve(&Args::new()) {
            Err(Error::MissingRouteArgument(name)) => assert_eq!(name, "id"),
            other => panic!("expected MissingRouteArgument, got {:?}", other),
        }
    }

    #[test]
    fn numeric_placeholder_uses_string_form() {
        let endpoint = Endpoint::get("/v1/post/{id}/impressions", &[]);
        let request = endpoint.resolve(&Args::new().arg("id", 417)).unwrap();
        assert_eq!(request.route, "/v1/post/417/impressions");
    }

    #[test]
    fn params_are_the_allowed_supplied_intersection() {
        let endpoint = Endpoint::get("/v1/feed", &["startkey", "limit"]);
        let args = Args::new()
            .arg("limit", 20)
            .arg("reverse", true)
            .arg("startkey", "A");
        let request = endpoint.resolve(&args).unwrap();
        assert_eq!(
            request.params,
            vec![("startkey", "A".to_owned()), ("limit", "20".to_owned())]
        );
    }

    #[test]
    fn allow_listed_but_absent_names_are_not_emitted() {
        let endpoint = Endpoint::get("/v1/feed", &["startkey", "limit"]);
        let request = endpoint.resolve(&Args::new().arg("limit", 20)).unwrap();
        assert_eq!(request.params, vec![("limit", "20".to_owned())]);
    }

    #[test]
    fn null_values_are_not_emitted() {
        let endpoint = Endpoint::get("/v1/feed", &["startkey", "limit"]);
        let request = endpoint
            .resolve(&Args::new().arg("limit", Value::Null))
            .unwrap();
        assert!(request.params.is_empty());
    }

    #[test]
    fn empty_allow_list_yields_empty_params() {
        let endpoint = Endpoint::post("/v1/comment", &[]);
        let args = Args::new()
            .arg("parent", "X")
            .body(json!({ "body": "hi", "parent": "X", "links": [] }));
        let request = endpoint.resolve(&args).unwrap();
        assert!(request.params.is_empty());
        assert_eq!(
            request.body,
            Some(json!({ "body": "hi", "parent": "X", "links": [] }))
        );
    }

    #[test]
    fn defaults_fill_only_when_absent() {
        let args = Args::new().or_default("reverse", true);
        assert_eq!(args.get("reverse"), Some(&Value::Bool(true)));

        let args = Args::new().arg("reverse", false).or_default("reverse", true);
        assert_eq!(args.get("reverse"), Some(&Value::Bool(false)));
    }

    #[test]
    fn paging_controls_stay_out_of_the_params() {
        let endpoint = Endpoint::get("/v1/feed", &["startkey", "limit"]);
        let paging = Paging {
            startkey: Some("A".into()),
            endkey: Some("K".into()),
            limit: Some(20),
            follow: true,
        };
        let args = Args::new().with_paging(&paging);
        let request = endpoint.resolve(&args).unwrap();
        assert_eq!(
            request.params,
            vec![("startkey", "A".to_owned()), ("limit", "20".to_owned())]
        );
        assert!(args.follow());
        assert_eq!(args.endkey(), Some("K".into()));
    }
}
