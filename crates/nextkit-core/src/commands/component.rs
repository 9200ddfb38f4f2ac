//! `component`: a React function component in its own folder

use std::path::PathBuf;

use super::{answer_or_ask, CommandOutcome, ScaffoldRequest, Scaffolder};
use crate::{
    error::{Error, Result},
    prompt::Prompter,
    utils::to_pascal_case,
};

/// Inputs for the component command; missing values are prompted for
#[derive(Debug, Clone, Default)]
pub struct ComponentOptions {
    /// Directory the component folder is created in
    pub target: PathBuf,
    pub name: Option<String>,
}

impl Scaffolder<'_> {
    /// Scaffold `<target>/<kebab-name>/index.<ext>` and an empty
    /// `components/` folder next to it.
    pub async fn new_component(
        &self,
        prompter: &mut dyn Prompter,
        options: ComponentOptions,
    ) -> Result<CommandOutcome> {
        let Some(raw_name) =
            answer_or_ask(prompter, options.name, "Component name", "Enter a name")?
        else {
            return Ok(CommandOutcome::Cancelled);
        };

        let name = to_pascal_case(raw_name.trim());
        if name.is_empty() {
            return Err(Error::validation("The component name is required."));
        }

        log::debug!("Scaffolding component {} in {}", name, options.target.display());
        self.execute(ScaffoldRequest::Component {
            target: options.target,
            name,
        })
        .await
    }
}
