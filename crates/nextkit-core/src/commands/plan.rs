//! Resolved scaffold requests and the file plans rendered from them

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    error::Result,
    method::MethodKind,
    recovery::RouteName,
    store::FileStore,
    templates::ScaffoldTemplates,
    utils::to_kebab_case,
};

/// A fully resolved request; every name is final
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldRequest {
    Component {
        /// Directory the component folder is created in
        target: PathBuf,
        /// PascalCase component name
        name: String,
    },
    Page {
        /// Directory the page folder is created in
        target: PathBuf,
        /// PascalCase page name ending in `Page`
        name: String,
        title: String,
        description: String,
    },
    Route {
        /// Directory holding `route.<ext>` and `methods/`
        route_dir: PathBuf,
        name: RouteName,
        /// Handlers to generate
        new_methods: Vec<MethodKind>,
        /// Every handler the route file wires up, existing and new
        route_methods: Vec<MethodKind>,
    },
}

/// A file the plan will write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub content: String,
    pub overwrite: bool,
}

/// Directories and files to write for one request, in write order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PlannedFile>,
    /// File to show the user once done
    pub primary: PathBuf,
}

impl ScaffoldRequest {
    /// Render the request into a plan. Pure apart from reading templates.
    pub fn plan(
        &self,
        templates: &ScaffoldTemplates,
        config: &Config,
        workspace_root: &Path,
    ) -> Result<ScaffoldPlan> {
        match self {
            Self::Component { target, name } => {
                let folder = target.join(to_kebab_case(name));
                let primary = folder.join(format!("index.{}", config.component_extension));
                Ok(ScaffoldPlan {
                    dirs: vec![folder.clone(), folder.join("components")],
                    files: vec![PlannedFile {
                        path: primary.clone(),
                        content: templates.component(name)?,
                        overwrite: config.overwrite,
                    }],
                    primary,
                })
            }
            Self::Page {
                target,
                name,
                title,
                description,
            } => {
                let stem = name.strip_suffix("Page").unwrap_or(name);
                let folder = target.join(to_kebab_case(stem));
                let primary = folder.join(format!("page.{}", config.component_extension));
                Ok(ScaffoldPlan {
                    dirs: vec![folder.clone(), folder.join("components")],
                    files: vec![PlannedFile {
                        path: primary.clone(),
                        content: templates.page(name, title, description)?,
                        overwrite: config.overwrite,
                    }],
                    primary,
                })
            }
            Self::Route {
                route_dir,
                name,
                new_methods,
                route_methods,
            } => {
                let ext = &config.module_extension;
                let utils_import = config.api_utils_import();
                let utils_path = config.api_utils_path(workspace_root);
                let methods_dir = route_dir.join("methods");
                let primary = route_dir.join(format!("route.{}", ext));

                let mut dirs = Vec::new();
                if let Some(utils_dir) = utils_path.parent() {
                    dirs.push(utils_dir.to_path_buf());
                }
                dirs.push(route_dir.clone());
                if !new_methods.is_empty() {
                    dirs.push(methods_dir.clone());
                }

                let mut files = vec![PlannedFile {
                    path: utils_path,
                    content: templates.api_utils()?,
                    overwrite: true,
                }];
                for method in new_methods {
                    files.push(PlannedFile {
                        path: methods_dir.join(method.file_name(ext)),
                        content: templates.method(name, *method, &utils_import)?,
                        overwrite: false,
                    });
                }
                files.push(PlannedFile {
                    path: primary.clone(),
                    content: templates.route(name, route_methods, &utils_import)?,
                    overwrite: true,
                });

                Ok(ScaffoldPlan {
                    dirs,
                    files,
                    primary,
                })
            }
        }
    }
}

impl ScaffoldPlan {
    /// Create the directories, then write the files in order.
    ///
    /// Stops at the first failure; whatever was written before stays on disk,
    /// and re-running the command completes it.
    pub async fn apply<S: FileStore + ?Sized>(&self, store: &S) -> Result<Vec<PathBuf>> {
        for dir in &self.dirs {
            store.create_dir(dir, true).await?;
        }

        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            store
                .write_text(&file.path, &file.content, file.overwrite)
                .await?;
            log::debug!("Wrote {}", file.path.display());
            written.push(file.path.clone());
        }
        Ok(written)
    }
}
