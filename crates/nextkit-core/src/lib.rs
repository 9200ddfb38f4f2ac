//! Nextkit Core Library
//!
//! Scaffolds React components, App Router pages and API routes inside a
//! Next.js workspace. Commands ask their questions through a [`Prompter`]
//! and write through a [`FileStore`], so the same code drives the terminal
//! CLI, dry runs and tests.

pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod method;
pub mod prompt;
pub mod recovery;
pub mod store;
pub mod templates;
pub mod utils;
pub mod workspace;

pub use crate::{
    commands::{
        CommandOutcome, ComponentOptions, PageOptions, RouteOptions, ScaffoldPlan,
        ScaffoldRequest, Scaffolder,
    },
    config::Config,
    error::{Error, Result},
    inventory::{resolve_inventory, MethodInventory},
    method::MethodKind,
    prompt::{Prompter, SelectOption},
    recovery::{recover_route_name, RouteName},
    store::{FileStore, LocalFileStore, MemoryFileStore},
    templates::{ArtifactKind, ScaffoldTemplates},
    workspace::find_workspace_root,
};
