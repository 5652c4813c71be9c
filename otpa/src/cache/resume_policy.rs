use std::path::Path;

/// decides whether a request can be skipped because its output already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResumePolicy {
    pub resume: bool,
    /// re-fetch even when output exists
    pub force: bool,
}

impl ResumePolicy {
    pub fn new(resume: bool, force: bool) -> ResumePolicy {
        ResumePolicy { resume, force }
    }

    /// true when `current` exists, or when `next` (the output of the following
    /// item in the batch) exists. the latter covers a run interrupted while
    /// writing `current` after the following item completed in an earlier pass.
    pub fn should_skip(&self, current: &Path, next: Option<&Path>) -> bool {
        if self.force || !self.resume {
            return false;
        }
        current.exists() || next.map(|n| n.exists()).unwrap_or(false)
    }
}
