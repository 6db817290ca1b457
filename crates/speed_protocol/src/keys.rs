//! Configuration key canonicalization and field ranges.
//!
//! Chat commands address fields through a generous set of synonym aliases
//! (`large`, `largeship`, `largeshipmaxspeed`, ...). All of them funnel
//! through one alias map into a single [`ConfigKey`], so the validation
//! switch in the session layer matches on a closed enum instead of
//! repeating synonym lists per call site.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Lowest settable ship speed cap in m/s.
pub const SHIP_SPEED_MIN: f64 = 1.0;
/// Ship speed ceiling in m/s.
pub const SHIP_SPEED_MAX: f64 = 150_000_000.0;

/// Thrust force multiplier bounds.
pub const THRUST_RATIO_MIN: f64 = 0.1;
pub const THRUST_RATIO_MAX: f64 = 1_000.0;

/// Missile speed bounds in m/s (applies to both the initial and the
/// desired speed; the pair is additionally ordered min <= max).
pub const MISSILE_SPEED_MIN: f64 = 1.0;
pub const MISSILE_SPEED_MAX: f64 = 600.0;

/// Remote-control autopilot speed limit bounds in m/s.
pub const AUTOPILOT_SPEED_MIN: f64 = 1.0;
pub const AUTOPILOT_SPEED_MAX: f64 = 5_000.0;

/// Parachute deploy height bounds in m, shared by cargo drops and
/// respawn ships.
pub const DEPLOY_HEIGHT_MIN: f64 = 50.0;
pub const DEPLOY_HEIGHT_MAX: f64 = 10_000.0;

/// Hardcoded deploy-height defaults, used when the host has no stock
/// value to sample.
pub const DEFAULT_CONTAINER_DROP_DEPLOY_HEIGHT: f64 = 200.0;
pub const DEFAULT_RESPAWN_SHIP_DEPLOY_HEIGHT: f64 = 300.0;

/// Canonical identity of a settable configuration item.
///
/// `ResetAll` and `MaxAllSpeed` are command keys rather than record
/// fields: the former overwrites every field from the stock defaults, the
/// latter sets both ship speed caps at once (the `/maxspeed` shorthand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// Overwrite every field from the stock defaults.
    ResetAll,
    /// Speed cap for large-grid ships.
    LargeShipMaxSpeed,
    /// Speed cap for small-grid ships.
    SmallShipMaxSpeed,
    /// Both ship speed caps at once.
    MaxAllSpeed,
    /// Toggle for the thrust force multiplier.
    EnableThrustRatio,
    /// Thrust force multiplier.
    ThrustRatio,
    /// Missile launch speed.
    MissileMinSpeed,
    /// Missile terminal speed.
    MissileMaxSpeed,
    /// Remote-control autopilot speed limit.
    RemoteControlMaxSpeed,
    /// Parachute deploy height for dropped cargo containers.
    ContainerDropDeployHeight,
    /// Parachute deploy height for respawn ships.
    RespawnShipDeployHeight,
}

/// The one alias -> key map. Keys arrive lowercased from the command
/// surface; lookups lowercase again defensively so the map is the single
/// source of truth for synonym handling.
static ALIASES: Lazy<HashMap<&'static str, ConfigKey>> = Lazy::new(|| {
    use ConfigKey::*;
    let mut map = HashMap::new();
    map.insert("resetall", ResetAll);
    map.insert("large", LargeShipMaxSpeed);
    map.insert("largeship", LargeShipMaxSpeed);
    map.insert("largeshipspeed", LargeShipMaxSpeed);
    map.insert("largeshipmaxspeed", LargeShipMaxSpeed);
    map.insert("small", SmallShipMaxSpeed);
    map.insert("smallship", SmallShipMaxSpeed);
    map.insert("smallshipspeed", SmallShipMaxSpeed);
    map.insert("smallshipmaxspeed", SmallShipMaxSpeed);
    map.insert("maxallspeed", MaxAllSpeed);
    map.insert("enablethrustratio", EnableThrustRatio);
    map.insert("lockthrustratio", EnableThrustRatio);
    map.insert("thrustratio", ThrustRatio);
    map.insert("missilemin", MissileMinSpeed);
    map.insert("missileminspeed", MissileMinSpeed);
    map.insert("missilemax", MissileMaxSpeed);
    map.insert("missilemaxspeed", MissileMaxSpeed);
    map.insert("autopilot", RemoteControlMaxSpeed);
    map.insert("autopilotspeed", RemoteControlMaxSpeed);
    map.insert("autopilotlimit", RemoteControlMaxSpeed);
    map.insert("remoteautopilot", RemoteControlMaxSpeed);
    map.insert("remoteautopilotspeed", RemoteControlMaxSpeed);
    map.insert("remoteautopilotlimit", RemoteControlMaxSpeed);
    map.insert("remotecontrolmaxspeed", RemoteControlMaxSpeed);
    map.insert("containerdropdeployheight", ContainerDropDeployHeight);
    map.insert("containerdeployheight", ContainerDropDeployHeight);
    map.insert("dropdeployheight", ContainerDropDeployHeight);
    map.insert("dropheight", ContainerDropDeployHeight);
    map.insert("respawnshipdeployheight", RespawnShipDeployHeight);
    map.insert("respawndeployheight", RespawnShipDeployHeight);
    map.insert("respawnheight", RespawnShipDeployHeight);
    map
});

impl ConfigKey {
    /// Resolves a (case-insensitive) alias to its canonical key.
    ///
    /// Returns `None` for unknown or empty aliases; the session layer
    /// treats that as a status query, not an error.
    pub fn from_alias(alias: &str) -> Option<Self> {
        ALIASES.get(alias.trim().to_ascii_lowercase().as_str()).copied()
    }

    /// Valid `[min, max]` range for numeric keys; `None` for the
    /// boolean toggle and the compound command keys.
    pub fn range(self) -> Option<(f64, f64)> {
        match self {
            ConfigKey::LargeShipMaxSpeed
            | ConfigKey::SmallShipMaxSpeed
            | ConfigKey::MaxAllSpeed => Some((SHIP_SPEED_MIN, SHIP_SPEED_MAX)),
            ConfigKey::ThrustRatio => Some((THRUST_RATIO_MIN, THRUST_RATIO_MAX)),
            ConfigKey::MissileMinSpeed | ConfigKey::MissileMaxSpeed => {
                Some((MISSILE_SPEED_MIN, MISSILE_SPEED_MAX))
            }
            ConfigKey::RemoteControlMaxSpeed => {
                Some((AUTOPILOT_SPEED_MIN, AUTOPILOT_SPEED_MAX))
            }
            ConfigKey::ContainerDropDeployHeight
            | ConfigKey::RespawnShipDeployHeight => {
                Some((DEPLOY_HEIGHT_MIN, DEPLOY_HEIGHT_MAX))
            }
            ConfigKey::ResetAll | ConfigKey::EnableThrustRatio => None,
        }
    }

    /// Canonical display name used in dialogs and log lines.
    pub fn display_name(self) -> &'static str {
        match self {
            ConfigKey::ResetAll => "ResetAll",
            ConfigKey::LargeShipMaxSpeed => "LargeShipMaxSpeed",
            ConfigKey::SmallShipMaxSpeed => "SmallShipMaxSpeed",
            ConfigKey::MaxAllSpeed => "MaxAllSpeed",
            ConfigKey::EnableThrustRatio => "EnableThrustRatio",
            ConfigKey::ThrustRatio => "ThrustRatio",
            ConfigKey::MissileMinSpeed => "MissileMinSpeed",
            ConfigKey::MissileMaxSpeed => "MissileMaxSpeed",
            ConfigKey::RemoteControlMaxSpeed => "AutoPilotLimit",
            ConfigKey::ContainerDropDeployHeight => "ContainerDropDeployHeight",
            ConfigKey::RespawnShipDeployHeight => "RespawnShipDeployHeight",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_lookup_is_case_insensitive() {
        assert_eq!(
            ConfigKey::from_alias("LargeShipMaxSpeed"),
            Some(ConfigKey::LargeShipMaxSpeed)
        );
        assert_eq!(ConfigKey::from_alias("LARGE"), Some(ConfigKey::LargeShipMaxSpeed));
        assert_eq!(ConfigKey::from_alias("  small "), Some(ConfigKey::SmallShipMaxSpeed));
    }

    #[test]
    fn synonyms_map_to_one_key() {
        for alias in ["autopilot", "autopilotlimit", "remotecontrolmaxspeed"] {
            assert_eq!(
                ConfigKey::from_alias(alias),
                Some(ConfigKey::RemoteControlMaxSpeed),
                "alias '{alias}' should resolve to the autopilot limit"
            );
        }
        for alias in ["dropheight", "containerdeployheight"] {
            assert_eq!(
                ConfigKey::from_alias(alias),
                Some(ConfigKey::ContainerDropDeployHeight)
            );
        }
    }

    #[test]
    fn unknown_alias_is_none() {
        assert_eq!(ConfigKey::from_alias("warpdrive"), None);
        assert_eq!(ConfigKey::from_alias(""), None);
    }

    #[test]
    fn numeric_keys_have_ranges() {
        assert_eq!(
            ConfigKey::ThrustRatio.range(),
            Some((THRUST_RATIO_MIN, THRUST_RATIO_MAX))
        );
        assert_eq!(ConfigKey::EnableThrustRatio.range(), None);
        assert_eq!(ConfigKey::ResetAll.range(), None);
    }
}
