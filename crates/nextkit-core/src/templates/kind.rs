//! The kinds of files nextkit scaffolds.
//!
//! Every artifact kind is backed by one `.tera` template. Built-in templates
//! are compiled into the library; a custom template directory may override any
//! of them by providing a file with the same name.
//!
//! # Examples
//!
//! ```
//! use nextkit_core::templates::ArtifactKind;
//!
//! let kind: ArtifactKind = "route".parse().unwrap();
//! assert_eq!(kind, ArtifactKind::Route);
//! assert_eq!(kind.template_name(), "route.ts.tera");
//! assert_eq!(kind.to_string(), "route");
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

/// Scaffolded file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// React function component (`<name>/index.tsx`)
    Component,
    /// App Router page (`<name>/page.tsx`)
    Page,
    /// Per-method route handler (`methods/<METHOD>.ts`)
    Method,
    /// Route aggregation module (`route.ts`)
    Route,
    /// Shared API helpers (`src/utils/nextApiUtils.ts`)
    ApiUtils,
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "component" => Ok(ArtifactKind::Component),
            "page" => Ok(ArtifactKind::Page),
            "method" => Ok(ArtifactKind::Method),
            "route" => Ok(ArtifactKind::Route),
            "api_utils" => Ok(ArtifactKind::ApiUtils),
            _ => Err(format!("Unknown artifact kind: {}", s)),
        }
    }
}

impl ArtifactKind {
    /// Returns the artifact identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Page => "page",
            Self::Method => "method",
            Self::Route => "route",
            Self::ApiUtils => "api_utils",
        }
    }

    /// Name of the template that renders this artifact
    pub fn template_name(&self) -> &'static str {
        match self {
            Self::Component => "component.tsx.tera",
            Self::Page => "page.tsx.tera",
            Self::Method => "method.ts.tera",
            Self::Route => "route.ts.tera",
            Self::ApiUtils => "api_utils.ts.tera",
        }
    }

    /// Source of the built-in template
    pub(crate) fn builtin_source(&self) -> &'static str {
        match self {
            Self::Component => include_str!("../../templates/component.tsx.tera"),
            Self::Page => include_str!("../../templates/page.tsx.tera"),
            Self::Method => include_str!("../../templates/method.ts.tera"),
            Self::Route => include_str!("../../templates/route.ts.tera"),
            Self::ApiUtils => include_str!("../../templates/api_utils.ts.tera"),
        }
    }

    /// Returns an iterator over all artifact kinds
    pub fn all() -> impl Iterator<Item = Self> {
        use ArtifactKind::*;
        [Component, Page, Method, Route, ApiUtils].iter().copied()
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
