//! Recovery of a route's name from files generated on an earlier run.
//!
//! Route and handler files all reference a shared `<Name>RouteParams` type.
//! Finding it again lets a later run add the missing handlers under the same
//! name instead of asking for it (and risking diverging type names).
//!
//! The lookup is a plain text search over the generated conventions; files
//! edited by hand so that the type no longer appears simply contribute
//! nothing.

// Internal imports (std, crate)
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::{method::MethodKind, store::FileStore, utils::to_pascal_case};

// External imports (alphabetized)
use once_cell::sync::Lazy;
use regex::Regex;

/// Declaration of the params type in a route aggregation file
static ROUTE_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+type\s+([A-Z]\w*?)RouteParams\b").expect("valid route regex")
});

/// Any reference to the params type, e.g. the import in a handler file
static ROUTE_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z]\w*?)RouteParams\b").expect("valid reference regex"));

/// PascalCase stem shared by the generated types of one route (`Users` in
/// `UsersRouteParams`, `GetUsersResponse`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteName(String);

impl RouteName {
    /// Normalise user input into a route name. Returns `None` when nothing
    /// usable is left after normalisation.
    pub fn parse(input: &str) -> Option<Self> {
        let name = to_pascal_case(input.trim());
        (!name.is_empty()).then_some(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<Name>RouteParams`
    pub fn params_type(&self) -> String {
        format!("{}RouteParams", self.0)
    }

    /// `<Name>RouteProps`
    pub fn props_type(&self) -> String {
        format!("{}RouteProps", self.0)
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name declared by `export type <Name>RouteParams` in a route file
pub fn route_name_in_route_file(content: &str) -> Option<RouteName> {
    ROUTE_DECLARATION
        .captures(content)
        .map(|caps| RouteName(caps[1].to_string()))
}

/// First `<Name>RouteParams` identifier anywhere in a handler file
pub fn route_name_in_method_file(content: &str) -> Option<RouteName> {
    ROUTE_REFERENCE
        .captures(content)
        .map(|caps| RouteName(caps[1].to_string()))
}

/// Recover the route name previously used for `route_dir`.
///
/// Looks at `route.<ext>` first, then at each handler in `created` (in
/// method order) under `methods/`. Unreadable files are logged and skipped.
/// `None` means this is a fresh route.
pub async fn recover_route_name<S: FileStore + ?Sized>(
    store: &S,
    route_dir: &Path,
    created: &BTreeSet<MethodKind>,
    extension: &str,
) -> Option<RouteName> {
    let route_file = route_dir.join(format!("route.{}", extension));
    if store.exists(&route_file).await {
        match store.read_text(&route_file).await {
            Ok(content) => {
                if let Some(name) = route_name_in_route_file(&content) {
                    log::debug!("Recovered route name {} from {}", name, route_file.display());
                    return Some(name);
                }
            }
            Err(e) => log::warn!("Skipping unreadable route file: {}", e),
        }
    }

    let methods_dir = route_dir.join("methods");
    for method in created {
        let method_file = methods_dir.join(method.file_name(extension));
        if !store.exists(&method_file).await {
            continue;
        }
        match store.read_text(&method_file).await {
            Ok(content) => {
                if let Some(name) = route_name_in_method_file(&content) {
                    log::debug!("Recovered route name {} from {}", name, method_file.display());
                    return Some(name);
                }
            }
            Err(e) => log::warn!("Skipping unreadable handler file: {}", e),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::store::MemoryFileStore;
    use async_trait::async_trait;
    use std::path::PathBuf;

    /// Store that fails to read one path but otherwise delegates
    struct FailingRead {
        inner: MemoryFileStore,
        broken: PathBuf,
    }

    #[async_trait]
    impl FileStore for FailingRead {
        async fn exists(&self, path: &Path) -> bool {
            self.inner.exists(path).await
        }

        async fn read_text(&self, path: &Path) -> Result<String> {
            if path == self.broken {
                return Err(Error::fs(
                    path,
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                ));
            }
            self.inner.read_text(path).await
        }

        async fn write_text(&self, path: &Path, content: &str, overwrite: bool) -> Result<()> {
            self.inner.write_text(path, content, overwrite).await
        }

        async fn create_dir(&self, path: &Path, recursive: bool) -> Result<()> {
            self.inner.create_dir(path, recursive).await
        }
    }

    fn all_methods() -> BTreeSet<MethodKind> {
        MethodKind::all().collect()
    }

    #[test]
    fn test_route_name_parse() {
        assert_eq!(RouteName::parse("users").unwrap().as_str(), "Users");
        assert_eq!(RouteName::parse("blog posts").unwrap().as_str(), "BlogPosts");
        assert!(RouteName::parse("   ").is_none());
        assert_eq!(
            RouteName::parse("users").unwrap().params_type(),
            "UsersRouteParams"
        );
    }

    #[test]
    fn test_route_file_requires_declaration() {
        let declared = "export type UsersRouteParams = z.infer<typeof schema>;";
        assert_eq!(route_name_in_route_file(declared).unwrap().as_str(), "Users");

        let spaced = "export   type\tOrderItemsRouteParams = {};";
        assert_eq!(route_name_in_route_file(spaced).unwrap().as_str(), "OrderItems");

        assert!(route_name_in_route_file("import { UsersRouteParams } from './x';").is_none());
        assert!(route_name_in_route_file("export type usersRouteParams = {};").is_none());
        assert!(route_name_in_route_file("export type UsersRouteParamsV2 = {};").is_none());
    }

    #[test]
    fn test_method_file_matches_any_reference() {
        let content = "import { ProductsRouteParams } from '../route';";
        assert_eq!(route_name_in_method_file(content).unwrap().as_str(), "Products");
        assert!(route_name_in_method_file("type GetProductsProps = {};").is_none());
    }

    #[tokio::test]
    async fn test_route_file_wins_without_method_files() {
        let store = MemoryFileStore::new().with_file(
            "/app/api/users/route.ts",
            "export type UsersRouteParams = z.infer<typeof schema>;",
        );
        let name = recover_route_name(
            &store,
            Path::new("/app/api/users"),
            &BTreeSet::new(),
            "ts",
        )
        .await;
        assert_eq!(name.unwrap().as_str(), "Users");
    }

    #[tokio::test]
    async fn test_route_file_takes_priority_over_methods() {
        let store = MemoryFileStore::new()
            .with_file(
                "/app/api/users/route.ts",
                "export type AccountsRouteParams = {};",
            )
            .with_file(
                "/app/api/users/methods/GET.ts",
                "import { UsersRouteParams } from '../route';",
            );
        let name = recover_route_name(&store, Path::new("/app/api/users"), &all_methods(), "ts")
            .await;
        assert_eq!(name.unwrap().as_str(), "Accounts");
    }

    #[tokio::test]
    async fn test_falls_back_to_get_handler() {
        let store = MemoryFileStore::new().with_file(
            "/app/api/products/methods/GET.ts",
            "import { ProductsRouteParams } from '../route';",
        );
        let created = BTreeSet::from([MethodKind::Get]);
        let name =
            recover_route_name(&store, Path::new("/app/api/products"), &created, "ts").await;
        assert_eq!(name.unwrap().as_str(), "Products");
    }

    #[tokio::test]
    async fn test_route_file_without_declaration_falls_back() {
        let store = MemoryFileStore::new()
            .with_file("/r/route.ts", "// edited by hand")
            .with_file("/r/methods/PATCH.ts", "params: OrdersRouteParams");
        let created = BTreeSet::from([MethodKind::Patch]);
        let name = recover_route_name(&store, Path::new("/r"), &created, "ts").await;
        assert_eq!(name.unwrap().as_str(), "Orders");
    }

    #[tokio::test]
    async fn test_only_created_methods_are_consulted() {
        let store = MemoryFileStore::new()
            .with_file("/r/methods/POST.ts", "import { Ghost } from '../route';")
            .with_file("/r/methods/DELETE.ts", "import { ItemsRouteParams } from '../route';");

        let only_post = BTreeSet::from([MethodKind::Post]);
        assert!(recover_route_name(&store, Path::new("/r"), &only_post, "ts")
            .await
            .is_none());

        let both = BTreeSet::from([MethodKind::Post, MethodKind::Delete]);
        let name = recover_route_name(&store, Path::new("/r"), &both, "ts").await;
        assert_eq!(name.unwrap().as_str(), "Items");
    }

    #[tokio::test]
    async fn test_nothing_found_is_none() {
        let store = MemoryFileStore::new();
        assert!(
            recover_route_name(&store, Path::new("/empty"), &all_methods(), "ts")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_read_failure_moves_on_to_next_candidate() {
        let inner = MemoryFileStore::new()
            .with_file("/r/route.ts", "export type BrokenRouteParams = {};")
            .with_file("/r/methods/GET.ts", "import { BrokenRouteParams } from '../route';")
            .with_file("/r/methods/PUT.ts", "import { UsersRouteParams } from '../route';");

        let store = FailingRead {
            inner,
            broken: PathBuf::from("/r/route.ts"),
        };
        let created = BTreeSet::from([MethodKind::Put]);
        let name = recover_route_name(&store, Path::new("/r"), &created, "ts").await;
        assert_eq!(name.unwrap().as_str(), "Users");

        let store = FailingRead {
            inner: store.inner,
            broken: PathBuf::from("/r/methods/GET.ts"),
        };
        let created = BTreeSet::from([MethodKind::Get, MethodKind::Put]);
        let name = recover_route_name(&store, Path::new("/r"), &created, "ts").await;
        // the route file is readable again and wins
        assert_eq!(name.unwrap().as_str(), "Broken");
    }
}
