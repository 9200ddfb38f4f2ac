//! Rendering of scaffold file contents

// Internal imports (std, crate)
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    error::{Error, Result},
    method::MethodKind,
    recovery::RouteName,
};

use super::{ArtifactKind, ComponentContext, MethodContext, PageContext, RouteContext};

// External imports (alphabetized)
use serde::Serialize;
use tera::{Context, Tera};

/// Renders the text of every scaffolded file.
///
/// Rendering is pure: the same inputs always produce byte-identical output and
/// nothing here touches the filesystem once the templates are loaded.
#[derive(Debug, Clone)]
pub struct ScaffoldTemplates {
    /// Shared Tera instance holding every artifact template
    tera: Arc<Tera>,
    /// Directory the overriding templates were loaded from, if any
    custom_dir: Option<PathBuf>,
}

impl ScaffoldTemplates {
    /// Load only the built-in templates
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            tera: Arc::new(Self::builtin_tera()?),
            custom_dir: None,
        })
    }

    /// Load templates from `custom_dir`, falling back to the built-in template
    /// for every artifact the directory does not provide.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory doesn't exist or a template in it
    /// fails to parse.
    pub fn with_overrides(custom_dir: Option<&Path>) -> Result<Self> {
        let Some(dir) = custom_dir else {
            return Self::builtin();
        };

        if !dir.is_dir() {
            return Err(Error::config(format!(
                "Template directory not found: {}",
                dir.display()
            )));
        }

        let dir_str = dir.to_str().ok_or_else(|| {
            Error::config(format!(
                "Template path contains invalid UTF-8: {}",
                dir.display()
            ))
        })?;

        let mut tera = Tera::new(&format!("{}/**/*.tera", dir_str))?;
        let overridden: Vec<_> = ArtifactKind::all()
            .filter(|kind| tera.get_template(kind.template_name()).is_ok())
            .collect();
        log::debug!(
            "Custom templates from {}: {:?}",
            dir.display(),
            overridden
        );

        // extend() keeps templates that already exist, so custom ones win
        tera.extend(&Self::builtin_tera()?)?;
        tera.autoescape_on(vec![]);

        Ok(Self {
            tera: Arc::new(tera),
            custom_dir: Some(dir.to_path_buf()),
        })
    }

    fn builtin_tera() -> Result<Tera> {
        let mut tera = Tera::default();
        tera.add_raw_templates(
            ArtifactKind::all().map(|kind| (kind.template_name(), kind.builtin_source())),
        )?;
        tera.autoescape_on(vec![]);
        Ok(tera)
    }

    /// Directory custom templates were loaded from
    pub fn custom_dir(&self) -> Option<&Path> {
        self.custom_dir.as_deref()
    }

    /// Render the template for `kind` with a serializable context
    pub fn render<T: Serialize>(&self, kind: ArtifactKind, context: &T) -> Result<String> {
        let tera_context = Context::from_serialize(context).map_err(|e| {
            Error::template(format!(
                "Failed to build context for '{}': {}",
                kind.template_name(),
                e
            ))
        })?;
        self.render_context(kind, &tera_context)
    }

    fn render_context(&self, kind: ArtifactKind, tera_context: &Context) -> Result<String> {
        let template_name = kind.template_name();
        log::debug!("Rendering template: {}", template_name);
        self.tera.render(template_name, tera_context).map_err(|e| {
            log::error!("Template rendering failed for '{}': {:?}", template_name, e);
            Error::template(format!(
                "Failed to render template '{}': {}",
                template_name, e
            ))
        })
    }

    /// Component module for a PascalCase component name
    pub fn component(&self, component_name: &str) -> Result<String> {
        let context = ComponentContext {
            component_name: component_name.to_string(),
        };
        self.render(ArtifactKind::Component, &context)
    }

    /// Page module with exported metadata
    pub fn page(&self, page_name: &str, title: &str, description: &str) -> Result<String> {
        self.render(
            ArtifactKind::Page,
            &PageContext::new(page_name, title, description),
        )
    }

    /// Handler module for one HTTP method of a route
    pub fn method(
        &self,
        route: &RouteName,
        method: MethodKind,
        api_utils_import: &str,
    ) -> Result<String> {
        self.render(
            ArtifactKind::Method,
            &MethodContext::new(route, method, api_utils_import),
        )
    }

    /// Route aggregation module wiring `methods` in the given order
    pub fn route(
        &self,
        route: &RouteName,
        methods: &[MethodKind],
        api_utils_import: &str,
    ) -> Result<String> {
        self.render(
            ArtifactKind::Route,
            &RouteContext::new(route, methods, api_utils_import),
        )
    }

    /// Shared API utilities module
    pub fn api_utils(&self) -> Result<String> {
        self.render_context(ArtifactKind::ApiUtils, &Context::new())
    }
}
