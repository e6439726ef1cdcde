use super::*;

/// Loads the route planning preferences, falling back to empty
/// defaults when none were saved yet.
pub fn load_route_prefs<R>(repo: &R) -> Result<RoutePrefs>
where
    R: RoutePrefsRepo,
{
    Ok(repo.load_route_prefs()?.unwrap_or_default())
}

/// Persists changed route planning preferences.
///
/// Saving is always explicit; the planning flows never save on their
/// own.
pub fn save_route_prefs<R>(repo: &R, prefs: &RoutePrefs) -> Result<()>
where
    R: RoutePrefsRepo,
{
    log::debug!("Saving the route planning preferences");
    Ok(repo.save_route_prefs(prefs)?)
}
