use cronaca_core::{Capability, CronacaError};

/// Collapse a set of provider errors into a uniform `CronacaError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `ProviderTimeout` → `AllProvidersTimedOut(capability)`.
/// - If `not_found_what` is `Some` and all errors are `NotFound` → `NotFound(what)`.
/// - Else → `AllProvidersFailed(errors)`.
#[must_use]
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<CronacaError>,
    not_found_what: Option<String>,
) -> CronacaError {
    if !attempted_any {
        return CronacaError::unsupported(capability.to_string());
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, CronacaError::ProviderTimeout { .. }))
    {
        return CronacaError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    if let Some(what) = not_found_what
        && !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, CronacaError::NotFound { .. }))
    {
        return CronacaError::not_found(what);
    }
    CronacaError::AllProvidersFailed(errors)
}
