use super::probe::AccessProbe;
use linkdrop_events::EventBus;
use linkdrop_models::ProviderKind;
use linkdrop_storage::ProviderRegistry;
use std::sync::Arc;

/// Upload-with-fallback orchestrator.
///
/// Holds only shared read-only state, so one instance can serve concurrent
/// calls; each call walks its candidate list on its own.
#[derive(Clone)]
pub struct Uploader {
    pub(super) registry: Arc<ProviderRegistry>,
    pub(super) probe: Arc<dyn AccessProbe>,
    pub(super) auto_order: Arc<[ProviderKind]>,
    pub(super) events: Option<Arc<EventBus>>,
}
