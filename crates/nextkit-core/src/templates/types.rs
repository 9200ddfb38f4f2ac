//! Template contexts, one per artifact kind.
//!
//! Contexts carry fully derived names so templates only substitute values.

use serde::Serialize;

use crate::{method::MethodKind, recovery::RouteName, utils::escape_single_quoted};

/// Context for `component.tsx.tera`
#[derive(Debug, Clone, Serialize)]
pub struct ComponentContext {
    /// PascalCase component name
    pub component_name: String,
}

/// Context for `page.tsx.tera`
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    /// PascalCase page name, always ending in `Page`
    pub page_name: String,
    /// Metadata title, escaped for a single-quoted literal
    pub title: String,
    /// Metadata description, escaped for a single-quoted literal
    pub description: String,
}

impl PageContext {
    pub fn new(page_name: &str, title: &str, description: &str) -> Self {
        Self {
            page_name: page_name.to_string(),
            title: escape_single_quoted(title),
            description: escape_single_quoted(description),
        }
    }
}

/// Context for `method.ts.tera`
#[derive(Debug, Clone, Serialize)]
pub struct MethodContext {
    /// Exported handler name (`GET`)
    pub method: String,
    /// Whether the handler validates query parameters instead of a body
    pub reads_query: bool,
    /// `<Route>RouteParams`
    pub route_params: String,
    /// `<Method><Route>ParamsSchema` for GET, `<Method><Route>BodySchema` otherwise
    pub schema: String,
    /// `<Method><Route>Response`
    pub response: String,
    /// `<Method><Route>Props`
    pub method_props: String,
    /// Names imported from the API utilities module
    pub utils_imports: String,
    /// Import specifier of the API utilities module (`@/utils/nextApiUtils`)
    pub api_utils_import: String,
}

impl MethodContext {
    pub fn new(route: &RouteName, method: MethodKind, api_utils_import: &str) -> Self {
        let prefix = method.type_prefix();
        let reads_query = method.reads_query();
        let payload = if reads_query { "Params" } else { "Body" };
        let utils_imports = if reads_query {
            "getSearchParams, MethodResponse, success"
        } else {
            "MethodResponse, success"
        };

        Self {
            method: method.as_str().to_string(),
            reads_query,
            route_params: route.params_type(),
            schema: format!("{}{}{}Schema", prefix, route, payload),
            response: format!("{}{}Response", prefix, route),
            method_props: format!("{}{}Props", prefix, route),
            utils_imports: utils_imports.to_string(),
            api_utils_import: api_utils_import.to_string(),
        }
    }
}

/// Context for `route.ts.tera`
#[derive(Debug, Clone, Serialize)]
pub struct RouteContext {
    /// `<Route>RouteParams`
    pub route_params: String,
    /// `<Route>RouteProps`
    pub route_props: String,
    /// One import line per handler
    pub imports: String,
    /// One `HTTPMethod` wrapper per handler
    pub handlers: String,
    /// Comma-separated list of exported handlers
    pub method_exports: String,
    /// Import specifier of the API utilities module (`@/utils/nextApiUtils`)
    pub api_utils_import: String,
}

impl RouteContext {
    pub fn new(route: &RouteName, methods: &[MethodKind], api_utils_import: &str) -> Self {
        let imports = methods
            .iter()
            .map(|m| {
                format!(
                    "import {{ {} as _{} }} from './methods/{}';",
                    m.as_str(),
                    m.as_str().to_lowercase(),
                    m.as_str()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let handlers = methods
            .iter()
            .map(|m| {
                format!(
                    "const {} = HTTPMethod(_{}, schema);",
                    m.as_str(),
                    m.as_str().to_lowercase()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let method_exports = methods
            .iter()
            .map(MethodKind::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            route_params: route.params_type(),
            route_props: route.props_type(),
            imports,
            handlers,
            method_exports,
            api_utils_import: api_utils_import.to_string(),
        }
    }
}
