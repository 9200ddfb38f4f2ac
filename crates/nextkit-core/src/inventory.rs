//! Detection of which per-method handler files a route already has.

// Internal imports (std, crate)
use std::collections::BTreeSet;
use std::path::Path;

use crate::{method::MethodKind, store::FileStore};

// External imports (alphabetized)
use futures::future::join_all;

/// Partition of [`MethodKind`] into handlers that exist and handlers that can
/// still be created. The two sets are disjoint and together cover every kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodInventory {
    /// Methods with a handler file at `methods/<METHOD>.<ext>`
    pub created: BTreeSet<MethodKind>,
    /// Methods with no handler file yet
    pub available: BTreeSet<MethodKind>,
}

impl MethodInventory {
    /// Build an inventory from the set of existing methods
    pub fn from_created(created: impl IntoIterator<Item = MethodKind>) -> Self {
        let created: BTreeSet<_> = created.into_iter().collect();
        let available = MethodKind::all().filter(|m| !created.contains(m)).collect();
        Self { created, available }
    }

    /// True once every method kind has a handler
    pub fn is_complete(&self) -> bool {
        self.available.is_empty()
    }
}

/// Probe `methods_dir` for a handler file per method kind.
///
/// Probes run concurrently and are independent; a failed probe counts as a
/// missing file. The directory itself does not need to exist.
pub async fn resolve_inventory<S: FileStore + ?Sized>(
    store: &S,
    methods_dir: &Path,
    extension: &str,
) -> MethodInventory {
    let probes = MethodKind::all().map(|method| async move {
        let path = methods_dir.join(method.file_name(extension));
        let exists = store.exists(&path).await;
        log::debug!("Probed {}: exists={}", path.display(), exists);
        (method, exists)
    });

    let created = join_all(probes)
        .await
        .into_iter()
        .filter_map(|(method, exists)| exists.then_some(method));

    MethodInventory::from_created(created)
}
