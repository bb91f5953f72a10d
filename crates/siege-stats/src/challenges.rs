//! Weekly challenge sources.

use async_trait::async_trait;
use siege_common::ChallengeList;
use tracing::debug;

/// Provides the current weekly challenges.
#[async_trait]
pub trait ChallengeSource: Send + Sync {
    /// Current challenges, in display order. Sources never fail; an
    /// unavailable source reports an empty list.
    async fn list_challenges(&self) -> ChallengeList;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// The upstream has no challenge endpoint, so this source is always empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChallengeSource;

#[async_trait]
impl ChallengeSource for NoChallengeSource {
    async fn list_challenges(&self) -> ChallengeList {
        debug!(source = self.name(), "No challenge upstream available");
        ChallengeList::empty()
    }

    fn name(&self) -> &'static str {
        "none"
    }
}
