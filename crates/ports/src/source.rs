// crates/ports/src/source.rs
use std::path::Path;

use line_triage_shared_kernel::Result;

/// Port for reading an input source one line at a time.
pub trait LineSource: Send + Sync {
    /// Calls `visit` with every line of `path`, in file order, without the
    /// line terminator.
    ///
    /// The underlying handle must be released before returning, on success
    /// and on error alike. Lines visited before an error stay visited.
    fn for_each_line(&self, path: &Path, visit: &mut dyn FnMut(&str)) -> Result<()>;
}
