//! `page`: an App Router page with exported metadata

use std::path::PathBuf;

use super::{answer_or_ask, CommandOutcome, ScaffoldRequest, Scaffolder};
use crate::{
    error::{Error, Result},
    prompt::{Prompter, SelectOption},
    utils::to_pascal_case,
};

/// Inputs for the page command; missing values are prompted for
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Directory the page folder is created in
    pub target: PathBuf,
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Normalise a page name to PascalCase ending in `Page`
pub fn canonical_page_name(input: &str) -> String {
    let name = to_pascal_case(input.trim());
    if name.ends_with("Page") {
        name
    } else {
        format!("{}Page", name)
    }
}

/// A metadata field the user may fill in
struct MetadataField {
    label: &'static str,
    default: String,
    preset: Option<String>,
}

impl Scaffolder<'_> {
    /// Scaffold `<target>/<kebab-stem>/page.<ext>` and an empty `components/`
    /// folder, where the stem is the page name without its `Page` suffix.
    pub async fn new_page(
        &self,
        prompter: &mut dyn Prompter,
        options: PageOptions,
    ) -> Result<CommandOutcome> {
        let Some(raw_name) =
            answer_or_ask(prompter, options.name, "Page name", "e.g. users")?
        else {
            return Ok(CommandOutcome::Cancelled);
        };
        if to_pascal_case(raw_name.trim()).is_empty() {
            return Err(Error::validation("The page name is required."));
        }

        let name = canonical_page_name(&raw_name);
        let stem = name.strip_suffix("Page").unwrap_or(&name);
        if stem.is_empty() {
            return Err(Error::validation(
                "The page name needs more than the \"Page\" suffix.",
            ));
        }

        let mut fields = [
            MetadataField {
                label: "Title",
                default: format!("{} Page", stem),
                preset: options.title,
            },
            MetadataField {
                label: "Description",
                default: self.config().default_page_description.clone(),
                preset: options.description,
            },
        ];
        let Some(values) = collect_metadata(prompter, &mut fields)? else {
            return Ok(CommandOutcome::Cancelled);
        };
        let [title, description] = values;

        log::debug!("Scaffolding page {} in {}", name, options.target.display());
        self.execute(ScaffoldRequest::Page {
            target: options.target,
            name,
            title,
            description,
        })
        .await
    }
}

/// Ask which metadata fields to fill in, then ask for each picked one.
/// Fields with a preset are not asked about; unpicked fields and empty
/// answers keep their default.
fn collect_metadata(
    prompter: &mut dyn Prompter,
    fields: &mut [MetadataField; 2],
) -> Result<Option<[String; 2]>> {
    let open: Vec<usize> = (0..fields.len())
        .filter(|&i| fields[i].preset.is_none())
        .collect();

    let mut picked = Vec::new();
    if !open.is_empty() {
        let options: Vec<_> = open
            .iter()
            .map(|&i| {
                SelectOption::new(format!("{} ({})", fields[i].label, fields[i].default), true)
            })
            .collect();
        let Some(chosen) = prompter.multi_select("Select the fields to fill in", &options)?
        else {
            return Ok(None);
        };
        picked = chosen
            .into_iter()
            .filter_map(|choice| open.get(choice).copied())
            .collect();
    }

    for &i in &picked {
        let field = &mut fields[i];
        let prompt = format!("Value for {}", field.label);
        let Some(answer) = prompter.input(&prompt, &field.default, Some(&field.default))? else {
            return Ok(None);
        };
        if !answer.trim().is_empty() {
            field.preset = Some(answer);
        }
    }

    let resolve = |field: &MetadataField| field.preset.clone().unwrap_or_else(|| field.default.clone());
    Ok(Some([resolve(&fields[0]), resolve(&fields[1])]))
}
