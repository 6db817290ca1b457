//! The versioned, persisted configuration record.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::keys::{
    AUTOPILOT_SPEED_MAX, AUTOPILOT_SPEED_MIN, DEPLOY_HEIGHT_MAX, DEPLOY_HEIGHT_MIN,
    MISSILE_SPEED_MAX, MISSILE_SPEED_MIN, SHIP_SPEED_MAX, SHIP_SPEED_MIN, THRUST_RATIO_MAX,
    THRUST_RATIO_MIN,
};
use crate::PROTOCOL_VERSION;

/// Stock values sampled from the host world before any change is applied.
///
/// The server captures these once at startup; they are the reset targets
/// for `resetall` and the "previous" column of the status report.
#[derive(Debug, Clone, PartialEq)]
pub struct StockDefaults {
    pub large_ship_max_speed: f64,
    pub small_ship_max_speed: f64,
    pub missile_min_speed: f64,
    pub missile_max_speed: f64,
    pub remote_control_max_speed: f64,
    pub container_drop_deploy_height: f64,
    pub respawn_ship_deploy_height: f64,
}

/// The authoritative configuration record.
///
/// Serialized as JSON into the host's persisted variable store. Every
/// field carries a serde default so a record written by an older build
/// still loads; [`SpeedConfig::repair`] then fills the gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    /// Record layout version, stamped from [`PROTOCOL_VERSION`].
    pub version: u32,
    pub large_ship_max_speed: f64,
    pub small_ship_max_speed: f64,
    /// When false the thrust multiplier is stored but not applied.
    pub enable_thrust_ratio: bool,
    pub thrust_ratio: f64,
    pub gyro_power_mod: f64,
    pub ion_air_efficient: f64,
    pub atmosphere_space_efficient: f64,
    pub missile_min_speed: f64,
    pub missile_max_speed: f64,
    pub remote_control_max_speed: f64,
    pub container_drop_deploy_height: f64,
    pub respawn_ship_deploy_height: f64,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            version: 0,
            large_ship_max_speed: 0.0,
            small_ship_max_speed: 0.0,
            enable_thrust_ratio: false,
            thrust_ratio: 1.0,
            gyro_power_mod: 1.0,
            ion_air_efficient: 0.0,
            atmosphere_space_efficient: 0.0,
            missile_min_speed: 0.0,
            missile_max_speed: 0.0,
            remote_control_max_speed: 0.0,
            container_drop_deploy_height: 0.0,
            respawn_ship_deploy_height: 0.0,
        }
    }
}

impl SpeedConfig {
    /// Builds a pristine record from the stock defaults.
    pub fn from_defaults(defaults: &StockDefaults) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            large_ship_max_speed: defaults.large_ship_max_speed,
            small_ship_max_speed: defaults.small_ship_max_speed,
            enable_thrust_ratio: false,
            thrust_ratio: 1.0,
            gyro_power_mod: 1.0,
            ion_air_efficient: 0.0,
            atmosphere_space_efficient: 0.0,
            missile_min_speed: defaults.missile_min_speed,
            missile_max_speed: defaults.missile_max_speed,
            remote_control_max_speed: defaults.remote_control_max_speed,
            container_drop_deploy_height: defaults.container_drop_deploy_height,
            respawn_ship_deploy_height: defaults.respawn_ship_deploy_height,
        }
    }

    /// Loads a record from the raw persisted string, degrading to the
    /// stock defaults when the variable is missing or unparsable, and
    /// repairing whatever was loaded.
    ///
    /// This never fails: a corrupt save costs the operator their tuned
    /// values, not a server start.
    pub fn load(raw: Option<&str>, defaults: &StockDefaults) -> Self {
        let mut config = match raw {
            Some(text) => match serde_json::from_str::<SpeedConfig>(text) {
                Ok(config) => config,
                Err(error) => {
                    warn!("⚠️ Stored speed configuration is unreadable, using stock defaults: {error}");
                    Self::from_defaults(defaults)
                }
            },
            None => Self::from_defaults(defaults),
        };
        config.repair(defaults);
        config
    }

    /// Clamps every field back into a sane state after load.
    ///
    /// Zero or out-of-range values are replaced by their default, and a
    /// missile pair ordered backwards is reset as a pair. Idempotent:
    /// repairing a repaired record changes nothing.
    pub fn repair(&mut self, defaults: &StockDefaults) {
        if self.version == 0 {
            self.version = PROTOCOL_VERSION;
        }
        repair_field(
            &mut self.large_ship_max_speed,
            SHIP_SPEED_MIN,
            SHIP_SPEED_MAX,
            defaults.large_ship_max_speed,
            "LargeShipMaxSpeed",
        );
        repair_field(
            &mut self.small_ship_max_speed,
            SHIP_SPEED_MIN,
            SHIP_SPEED_MAX,
            defaults.small_ship_max_speed,
            "SmallShipMaxSpeed",
        );
        repair_field(
            &mut self.thrust_ratio,
            THRUST_RATIO_MIN,
            THRUST_RATIO_MAX,
            1.0,
            "ThrustRatio",
        );
        if !self.gyro_power_mod.is_finite() || self.gyro_power_mod <= 0.0 {
            self.gyro_power_mod = 1.0;
        }
        if !(0.0..=1.0).contains(&self.ion_air_efficient) {
            self.ion_air_efficient = 0.0;
        }
        if !(0.0..=1.0).contains(&self.atmosphere_space_efficient) {
            self.atmosphere_space_efficient = 0.0;
        }
        repair_field(
            &mut self.missile_min_speed,
            MISSILE_SPEED_MIN,
            MISSILE_SPEED_MAX,
            defaults.missile_min_speed,
            "MissileMinSpeed",
        );
        repair_field(
            &mut self.missile_max_speed,
            MISSILE_SPEED_MIN,
            MISSILE_SPEED_MAX,
            defaults.missile_max_speed,
            "MissileMaxSpeed",
        );
        // The pair is reset together so a repaired record never carries a
        // launch speed above its terminal speed.
        if self.missile_min_speed > self.missile_max_speed {
            warn!(
                "⚠️ Missile speeds were ordered backwards ({} > {}), resetting the pair",
                self.missile_min_speed, self.missile_max_speed
            );
            self.missile_min_speed = defaults.missile_min_speed;
            self.missile_max_speed = defaults.missile_max_speed;
        }
        repair_field(
            &mut self.remote_control_max_speed,
            AUTOPILOT_SPEED_MIN,
            AUTOPILOT_SPEED_MAX,
            defaults.remote_control_max_speed,
            "AutoPilotLimit",
        );
        repair_field(
            &mut self.container_drop_deploy_height,
            DEPLOY_HEIGHT_MIN,
            DEPLOY_HEIGHT_MAX,
            defaults.container_drop_deploy_height,
            "ContainerDropDeployHeight",
        );
        repair_field(
            &mut self.respawn_ship_deploy_height,
            DEPLOY_HEIGHT_MIN,
            DEPLOY_HEIGHT_MAX,
            defaults.respawn_ship_deploy_height,
            "RespawnShipDeployHeight",
        );
    }

    /// Serializes the record for the host's variable store.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn repair_field(value: &mut f64, min: f64, max: f64, default: f64, name: &str) {
    if !value.is_finite() || *value == 0.0 || *value < min || *value > max {
        warn!("⚠️ {name} was {value}, repaired to {default}");
        *value = default;
    }
}
