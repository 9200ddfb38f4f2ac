//! HTTP method kinds that route handlers are scaffolded for.
//!
//! The set is closed: every route directory is described in terms of these
//! five verbs, always iterated in declaration order.
//!
//! # Examples
//!
//! ```
//! use nextkit_core::method::MethodKind;
//!
//! let method: MethodKind = "patch".parse().unwrap();
//! assert_eq!(method, MethodKind::Patch);
//! assert_eq!(method.as_str(), "PATCH");
//! assert_eq!(method.type_prefix(), "Patch");
//! assert_eq!(MethodKind::all().count(), 5);
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

use crate::utils::capitalize;

/// HTTP verbs with a generated handler file under `methods/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MethodKind {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl FromStr for MethodKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Ok(MethodKind::Get),
            "POST" => Ok(MethodKind::Post),
            "PUT" => Ok(MethodKind::Put),
            "PATCH" => Ok(MethodKind::Patch),
            "DELETE" => Ok(MethodKind::Delete),
            _ => Err(format!("Unknown HTTP method: {}", s)),
        }
    }
}

impl MethodKind {
    /// Returns the verb as it appears in file names and exports (`GET`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Prefix used in generated type names (`Get`, `Post`, ...)
    pub fn type_prefix(&self) -> String {
        capitalize(self.as_str())
    }

    /// GET handlers read the query string; all others read a request body.
    pub fn reads_query(&self) -> bool {
        matches!(self, Self::Get)
    }

    /// File name of the handler module for this method
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.as_str(), extension)
    }

    /// Returns an iterator over every method kind in declaration order
    pub fn all() -> impl Iterator<Item = Self> {
        use MethodKind::*;
        [Get, Post, Put, Patch, Delete].iter().copied()
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_str() {
        assert_eq!("GET".parse::<MethodKind>().unwrap(), MethodKind::Get);
        assert_eq!("post".parse::<MethodKind>().unwrap(), MethodKind::Post);
        assert_eq!(" Put ".parse::<MethodKind>().unwrap(), MethodKind::Put);
        assert_eq!("Patch".parse::<MethodKind>().unwrap(), MethodKind::Patch);
        assert_eq!("delete".parse::<MethodKind>().unwrap(), MethodKind::Delete);

        assert!("HEAD".parse::<MethodKind>().is_err());
        assert!("".parse::<MethodKind>().is_err());
    }

    #[test]
    fn test_display_and_prefix() {
        assert_eq!(MethodKind::Delete.to_string(), "DELETE");
        assert_eq!(MethodKind::Get.type_prefix(), "Get");
        assert_eq!(MethodKind::Delete.type_prefix(), "Delete");
        assert_eq!(MethodKind::Patch.file_name("ts"), "PATCH.ts");
    }

    #[test]
    fn test_only_get_reads_query() {
        let query: Vec<_> = MethodKind::all().filter(MethodKind::reads_query).collect();
        assert_eq!(query, vec![MethodKind::Get]);
    }

    #[test]
    fn test_all_is_ordered_and_unique() {
        let all: Vec<_> = MethodKind::all().collect();
        assert_eq!(
            all,
            vec![
                MethodKind::Get,
                MethodKind::Post,
                MethodKind::Put,
                MethodKind::Patch,
                MethodKind::Delete,
            ]
        );
        let unique: HashSet<_> = MethodKind::all().collect();
        assert_eq!(unique.len(), 5);

        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(sorted, all);
    }
}
