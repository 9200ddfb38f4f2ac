//! Scaffold commands: component, page and route.
//!
//! Each command collects its inputs (from options or the [`Prompter`]),
//! resolves them into a [`ScaffoldRequest`], renders that into a
//! [`ScaffoldPlan`] and applies the plan through the [`FileStore`]. Errors are
//! returned, never displayed; reporting is up to the caller.

pub mod component;
pub mod page;
pub mod plan;
pub mod route;

pub use component::ComponentOptions;
pub use page::PageOptions;
pub use plan::{PlannedFile, ScaffoldPlan, ScaffoldRequest};
pub use route::RouteOptions;

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::{
    config::Config, error::Result, prompt::Prompter, store::FileStore,
    templates::ScaffoldTemplates,
};

/// How a scaffold command ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Files were written; `primary` is the one to open afterwards
    Created {
        primary: PathBuf,
        written: Vec<PathBuf>,
    },
    /// Nothing needed doing, with a message for the user
    NothingToDo(String),
    /// The user dismissed a prompt
    Cancelled,
}

/// Everything a command needs besides the prompter
pub struct Scaffolder<'a> {
    store: &'a dyn FileStore,
    templates: ScaffoldTemplates,
    config: Config,
    workspace_root: PathBuf,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        store: &'a dyn FileStore,
        templates: ScaffoldTemplates,
        config: Config,
        workspace_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            templates,
            config,
            workspace_root: workspace_root.into(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Render `request` and write the result
    pub async fn execute(&self, request: ScaffoldRequest) -> Result<CommandOutcome> {
        let plan = request.plan(&self.templates, &self.config, &self.workspace_root)?;
        let written = plan.apply(self.store).await?;
        Ok(CommandOutcome::Created {
            primary: plan.primary,
            written,
        })
    }
}

/// Use a pre-supplied answer or ask for one. `None` means cancelled.
fn answer_or_ask(
    prompter: &mut dyn Prompter,
    preset: Option<String>,
    prompt: &str,
    placeholder: &str,
) -> Result<Option<String>> {
    match preset {
        Some(value) => Ok(Some(value)),
        None => prompter.input(prompt, placeholder, None),
    }
}
