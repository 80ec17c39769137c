//! Name sourcing for squad generation.
//!
//! Two [`NameSource`] implementations exist: a remote provider that may
//! fail or time out, and the embedded static list. [`NameDirectory`]
//! arbitrates between them: a remote failure degrades transparently to
//! the static list and is logged, never surfaced. Uniqueness is handled
//! one layer up by [`NamePool`].

use tracing::warn;

use crate::error::NameSourceError;

pub mod pool;
pub mod remote;
pub mod static_list;

pub use pool::NamePool;
pub use remote::RemoteNameProvider;
pub use static_list::StaticNameList;

/// Capability interface for candidate-name fetching.
///
/// Returned names are non-empty; uniqueness is not this trait's concern.
pub trait NameSource: Send + Sync {
    fn fetch_names(&self, count: usize) -> Result<Vec<String>, NameSourceError>;
}

/// Remote-first name lookup with mandatory static fallback.
pub struct NameDirectory<'a> {
    remote: Option<&'a dyn NameSource>,
    fallback: &'a StaticNameList,
}

impl<'a> NameDirectory<'a> {
    pub fn new(remote: Option<&'a dyn NameSource>, fallback: &'a StaticNameList) -> Self {
        NameDirectory { remote, fallback }
    }

    /// Fallback-only directory.
    pub fn offline(fallback: &'a StaticNameList) -> Self {
        NameDirectory { remote: None, fallback }
    }

    /// Fetch a candidate batch. Never fails: remote trouble downgrades to
    /// the static list.
    pub fn candidates(&self, count: usize) -> Vec<String> {
        if let Some(remote) = self.remote {
            match remote.fetch_names(count) {
                Ok(names) => return names,
                Err(err) => {
                    warn!("name service unavailable, using static fallback list: {err}");
                }
            }
        }
        self.fallback.cycle(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenSource;

    impl NameSource for BrokenSource {
        fn fetch_names(&self, _count: usize) -> Result<Vec<String>, NameSourceError> {
            Err(NameSourceError::Transport("connection refused".into()))
        }
    }

    struct CannedSource(Vec<String>);

    impl NameSource for CannedSource {
        fn fetch_names(&self, count: usize) -> Result<Vec<String>, NameSourceError> {
            Ok(self.0.iter().take(count).cloned().collect())
        }
    }

    #[test]
    fn remote_names_win_when_available() {
        let fallback = StaticNameList::new();
        let remote = CannedSource(vec!["Virat Kohli".into(), "MS Dhoni".into()]);
        let directory = NameDirectory::new(Some(&remote), &fallback);

        let names = directory.candidates(2);
        assert_eq!(names, vec!["Virat Kohli", "MS Dhoni"]);
    }

    #[test]
    fn remote_failure_degrades_to_static_list() {
        let fallback = StaticNameList::new();
        let remote = BrokenSource;
        let directory = NameDirectory::new(Some(&remote), &fallback);

        let names = directory.candidates(5);
        assert_eq!(names.len(), 5);
        assert_eq!(names[0], fallback.names()[0]);
    }

    #[test]
    fn offline_directory_serves_the_static_list() {
        let fallback = StaticNameList::new();
        let names = NameDirectory::offline(&fallback).candidates(3);
        assert_eq!(names.len(), 3);
    }
}
