//! `route`: an App Router API route with one module per HTTP method

use std::path::{Path, PathBuf};

use super::{CommandOutcome, ScaffoldRequest, Scaffolder};
use crate::{
    error::{Error, Result},
    inventory::resolve_inventory,
    method::MethodKind,
    prompt::{Prompter, SelectOption},
    recovery::{recover_route_name, RouteName},
};

/// Inputs for the route command; missing values are prompted for
#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
    /// Route directory, or its `methods/` subdirectory
    pub target: PathBuf,
    /// Overrides any name recovered from existing files
    pub name: Option<String>,
    /// Methods to add; when `None` the user picks from the missing ones
    pub methods: Option<Vec<MethodKind>>,
}

/// Treat a `methods/` directory as its route directory
pub fn normalize_route_dir(target: &Path) -> PathBuf {
    match (target.file_name(), target.parent()) {
        (Some(name), Some(parent)) if name == "methods" => parent.to_path_buf(),
        _ => target.to_path_buf(),
    }
}

impl Scaffolder<'_> {
    /// Add handler modules to a route and regenerate its `route.<ext>`.
    ///
    /// Existing handlers are never touched. The route name comes from the
    /// options, then from existing files, and only then from the user.
    pub async fn new_route(
        &self,
        prompter: &mut dyn Prompter,
        options: RouteOptions,
    ) -> Result<CommandOutcome> {
        let ext = &self.config().module_extension;
        let route_dir = normalize_route_dir(&options.target);
        let inventory = resolve_inventory(self.store, &route_dir.join("methods"), ext).await;
        let route_exists = self
            .store
            .exists(&route_dir.join(format!("route.{}", ext)))
            .await;

        if inventory.is_complete() && route_exists {
            return Ok(CommandOutcome::NothingToDo(
                "All methods already exist.".to_string(),
            ));
        }

        let new_methods: Vec<MethodKind> = match options.methods {
            Some(requested) => {
                let mut chosen: Vec<_> = requested
                    .into_iter()
                    .filter(|method| {
                        let missing = inventory.available.contains(method);
                        if !missing {
                            log::warn!("{} already exists, skipping", method);
                        }
                        missing
                    })
                    .collect();
                chosen.sort();
                chosen.dedup();
                chosen
            }
            None if inventory.available.is_empty() => Vec::new(),
            None => {
                let available: Vec<_> = inventory.available.iter().copied().collect();
                let options: Vec<_> = available
                    .iter()
                    .map(|method| SelectOption::new(method.as_str(), true))
                    .collect();
                let Some(picks) = prompter.multi_select("Select the methods to create", &options)?
                else {
                    return Ok(CommandOutcome::Cancelled);
                };
                let mut chosen: Vec<_> = picks
                    .into_iter()
                    .filter_map(|i| available.get(i).copied())
                    .collect();
                chosen.sort();
                chosen.dedup();
                chosen
            }
        };

        if new_methods.is_empty() && route_exists {
            return Ok(CommandOutcome::NothingToDo("No methods selected.".to_string()));
        }

        let route_methods: Vec<MethodKind> = MethodKind::all()
            .filter(|method| inventory.created.contains(method) || new_methods.contains(method))
            .collect();
        if route_methods.is_empty() {
            return Ok(CommandOutcome::NothingToDo("No methods selected.".to_string()));
        }

        let recovered =
            recover_route_name(self.store, &route_dir, &inventory.created, ext).await;
        let name = match (options.name, recovered) {
            (Some(explicit), recovered) => {
                let name = parse_route_name(&explicit)?;
                if let Some(recovered) = recovered.filter(|r| *r != name) {
                    log::warn!(
                        "Using route name {} instead of {} found in existing files",
                        name,
                        recovered
                    );
                }
                name
            }
            (None, Some(recovered)) => recovered,
            (None, None) => {
                let Some(answer) = prompter.input("API route name", "e.g. users", None)? else {
                    return Ok(CommandOutcome::Cancelled);
                };
                parse_route_name(&answer)?
            }
        };

        log::debug!(
            "Scaffolding route {} in {} with {:?}",
            name,
            route_dir.display(),
            new_methods
        );
        self.execute(ScaffoldRequest::Route {
            route_dir,
            name,
            new_methods,
            route_methods,
        })
        .await
    }
}

fn parse_route_name(input: &str) -> Result<RouteName> {
    RouteName::parse(input).ok_or_else(|| Error::validation("The route name is required."))
}
