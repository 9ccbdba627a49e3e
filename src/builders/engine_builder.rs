//! Construct a ready-to-run engine from an [`AllotmentConfig`].

use crate::config::AllotmentConfig;
use crate::core::audit::AuditSink;
use crate::core::engine::AllocationEngine;
use crate::core::error::AllotmentError;
use crate::core::registry::RoomRegistry;

/// Build an [`AllocationEngine`] from configuration: validates the config,
/// registers every room in declared (fallback-scan) order, then admits every
/// seed application through the intake checks.
///
/// # Errors
/// [`AllotmentError::InvalidInput`] for an invalid config or application,
/// [`AllotmentError::DuplicateKey`] for repeated room or applicant ids.
pub fn build_engine(
    cfg: &AllotmentConfig,
    audit: Option<Box<dyn AuditSink>>,
) -> Result<AllocationEngine, AllotmentError> {
    cfg.validate().map_err(AllotmentError::InvalidInput)?;

    let mut registry = RoomRegistry::new();
    for room_cfg in &cfg.rooms {
        registry.register(room_cfg.to_room())?;
    }

    let mut engine = AllocationEngine::new(registry);
    if let Some(sink) = audit {
        engine = engine.with_audit(sink);
    }
    for application in &cfg.applications {
        engine.admit(application.clone())?;
    }
    tracing::info!(
        rooms = engine.registry().len(),
        applicants = engine.pending(),
        "engine built from config"
    );
    Ok(engine)
}
