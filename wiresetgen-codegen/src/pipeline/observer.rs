//! Pipeline observer trait.

use std::path::Path;

use wiresetgen_core::{GenerationTarget, SetMember};

use super::GeneratedFile;

/// Receives notifications while the pipeline runs.
///
/// Observers cannot influence the run: hooks return nothing and are called
/// only after the corresponding step succeeded.
///
/// # Example
///
/// ```ignore
/// struct CountingObserver(Cell<usize>);
///
/// impl Observer for CountingObserver {
///     fn on_member(&self, _file: &Path, _member: &SetMember) {
///         self.0.set(self.0.get() + 1);
///     }
/// }
/// ```
pub trait Observer {
    /// Called for every generation target found.
    #[allow(unused_variables)]
    fn on_target(&self, file: &Path, target: &GenerationTarget) {}

    /// Called for every set member found.
    #[allow(unused_variables)]
    fn on_member(&self, file: &Path, member: &SetMember) {}

    /// Called after a file has been rendered.
    #[allow(unused_variables)]
    fn on_render(&self, file: &GeneratedFile) {}

    /// Called after a file has been written.
    #[allow(unused_variables)]
    fn on_write(&self, file: &GeneratedFile) {}
}
