//! Validation and application of configuration changes.
//!
//! [`ConfigService`] owns the authoritative record. Every change request
//! funnels through [`ConfigService::apply`], which resolves the alias,
//! parses the value, checks the range and any cross-field constraint,
//! mutates the record, and returns the reply to show the operator. The
//! service itself never touches a transport; the server role delivers
//! its replies.

use std::fmt::Write as _;

use speed_protocol::keys::{
    AUTOPILOT_SPEED_MAX, AUTOPILOT_SPEED_MIN, DEPLOY_HEIGHT_MAX, DEPLOY_HEIGHT_MIN,
    MISSILE_SPEED_MAX, MISSILE_SPEED_MIN, SHIP_SPEED_MAX, SHIP_SPEED_MIN, THRUST_RATIO_MAX,
    THRUST_RATIO_MIN,
};
use speed_protocol::parse::{parse_decimal, parse_word_bool};
use speed_protocol::{ConfigKey, SpeedConfig, StockDefaults};
use tracing::info;

/// Shown in confirmations for settings that only take effect for a
/// client after it reconnects.
const RECONNECT_NOTICE: &str =
    "Players will need to reconnect to the server for the change to take effect.";

/// Outcome of a change request, ready for delivery to the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// A rich confirmation or the full status report.
    Dialog { caption: String, body: String },
    /// A one-line rejection.
    Text { content: String },
}

/// The authoritative configuration state of the server role.
pub struct ConfigService {
    config: SpeedConfig,
    /// Copy taken right after load and repair, never mutated again.
    /// Reports show it next to the current values so an operator can see
    /// what changed this session.
    snapshot: SpeedConfig,
    defaults: StockDefaults,
    modified: bool,
}

impl ConfigService {
    /// Wraps an already loaded (and repaired) record.
    pub fn new(config: SpeedConfig, defaults: StockDefaults) -> Self {
        let snapshot = config.clone();
        Self { config, snapshot, defaults, modified: false }
    }

    pub fn config(&self) -> &SpeedConfig {
        &self.config
    }

    /// True once anything changed this session. Drives persistence and
    /// the "pending restart" section of the status report.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Applies one change request and returns the reply to deliver.
    ///
    /// An empty or unknown key is a status query, never an error.
    pub fn apply(&mut self, key: &str, value: &str) -> Reply {
        match ConfigKey::from_alias(key) {
            None => self.status_report(),
            Some(ConfigKey::ResetAll) => self.reset_all(),
            Some(ConfigKey::LargeShipMaxSpeed) => self.set_large_ship_speed(value),
            Some(ConfigKey::SmallShipMaxSpeed) => self.set_small_ship_speed(value),
            Some(ConfigKey::MaxAllSpeed) => self.set_all_ship_speeds(value),
            Some(ConfigKey::EnableThrustRatio) => self.set_enable_thrust_ratio(value),
            Some(ConfigKey::ThrustRatio) => self.set_thrust_ratio(value),
            Some(ConfigKey::MissileMinSpeed) => self.set_missile_min_speed(value),
            Some(ConfigKey::MissileMaxSpeed) => self.set_missile_max_speed(value),
            Some(ConfigKey::RemoteControlMaxSpeed) => self.set_autopilot_limit(value),
            Some(ConfigKey::ContainerDropDeployHeight) => {
                self.set_container_drop_deploy_height(value)
            }
            Some(ConfigKey::RespawnShipDeployHeight) => {
                self.set_respawn_ship_deploy_height(value)
            }
        }
    }

    fn set_large_ship_speed(&mut self, value: &str) -> Reply {
        let Some(parsed) = parse_decimal(value) else {
            return invalid_value("LargeShipMaxSpeed", value);
        };
        if !(SHIP_SPEED_MIN..=SHIP_SPEED_MAX).contains(&parsed) {
            return Reply::Text {
                content: format!(
                    "The LargeShipMaxSpeed can only be between {SHIP_SPEED_MIN:.0} and {SHIP_SPEED_MAX:.0}"
                ),
            };
        }
        let old = self.config.large_ship_max_speed;
        self.config.large_ship_max_speed = parsed;
        self.modified = true;
        info!("✅ LargeShipMaxSpeed changed from {old} to {parsed}");
        Reply::Dialog {
            caption: "LargeShipMaxSpeed updated".to_string(),
            body: format!(
                "Old value: {old:.0} m/s\nNew value: {parsed:.0} m/s\n\n{RECONNECT_NOTICE}"
            ),
        }
    }

    fn set_small_ship_speed(&mut self, value: &str) -> Reply {
        let Some(parsed) = parse_decimal(value) else {
            return invalid_value("SmallShipMaxSpeed", value);
        };
        if !(SHIP_SPEED_MIN..=SHIP_SPEED_MAX).contains(&parsed) {
            return Reply::Text {
                content: format!(
                    "The SmallShipMaxSpeed can only be between {SHIP_SPEED_MIN:.0} and {SHIP_SPEED_MAX:.0}"
                ),
            };
        }
        let old = self.config.small_ship_max_speed;
        self.config.small_ship_max_speed = parsed;
        self.modified = true;
        info!("✅ SmallShipMaxSpeed changed from {old} to {parsed}");
        Reply::Dialog {
            caption: "SmallShipMaxSpeed updated".to_string(),
            body: format!(
                "Old value: {old:.0} m/s\nNew value: {parsed:.0} m/s\n\n{RECONNECT_NOTICE}"
            ),
        }
    }

    /// The `/maxspeed` shorthand: both ship caps at once.
    fn set_all_ship_speeds(&mut self, value: &str) -> Reply {
        let Some(parsed) = parse_decimal(value) else {
            return invalid_value("MaxAllSpeed", value);
        };
        if !(SHIP_SPEED_MIN..=SHIP_SPEED_MAX).contains(&parsed) {
            return Reply::Text {
                content: format!(
                    "The MaxAllSpeed can only be between {SHIP_SPEED_MIN:.0} and {SHIP_SPEED_MAX:.0}"
                ),
            };
        }
        let old_large = self.config.large_ship_max_speed;
        let old_small = self.config.small_ship_max_speed;
        self.config.large_ship_max_speed = parsed;
        self.config.small_ship_max_speed = parsed;
        self.modified = true;
        info!("✅ MaxAllSpeed changed both ship caps to {parsed}");
        Reply::Dialog {
            caption: "MaxAllSpeed updated".to_string(),
            body: format!(
                "Old values: {old_large:.0} m/s (large), {old_small:.0} m/s (small)\nNew value: {parsed:.0} m/s\n\n{RECONNECT_NOTICE}"
            ),
        }
    }

    fn set_enable_thrust_ratio(&mut self, value: &str) -> Reply {
        let Some(parsed) = parse_word_bool(value) else {
            return Reply::Text {
                content: format!(
                    "The value '{value}' for EnableThrustRatio is invalid. Use on or off."
                ),
            };
        };
        let old = self.config.enable_thrust_ratio;
        self.config.enable_thrust_ratio = parsed;
        self.modified = true;
        info!("✅ EnableThrustRatio changed from {old} to {parsed}");
        Reply::Dialog {
            caption: "EnableThrustRatio updated".to_string(),
            body: format!(
                "Old value: {}\nNew value: {}\n\n{RECONNECT_NOTICE}",
                on_off(old),
                on_off(parsed)
            ),
        }
    }

    fn set_thrust_ratio(&mut self, value: &str) -> Reply {
        let Some(parsed) = parse_decimal(value) else {
            return invalid_value("ThrustRatio", value);
        };
        if !(THRUST_RATIO_MIN..=THRUST_RATIO_MAX).contains(&parsed) {
            return Reply::Text {
                content: format!(
                    "The ThrustRatio can only be between {THRUST_RATIO_MIN:.3} and {THRUST_RATIO_MAX:.0}"
                ),
            };
        }
        let old = self.config.thrust_ratio;
        self.config.thrust_ratio = parsed;
        self.modified = true;
        info!("✅ ThrustRatio changed from {old} to {parsed}");
        Reply::Dialog {
            caption: "ThrustRatio updated".to_string(),
            body: format!(
                "Old value: x{old:.3}\nNew value: x{parsed:.3}\n\n{RECONNECT_NOTICE}"
            ),
        }
    }

    fn set_missile_min_speed(&mut self, value: &str) -> Reply {
        let Some(parsed) = parse_decimal(value) else {
            return invalid_value("MissileMinSpeed", value);
        };
        if !(MISSILE_SPEED_MIN..=MISSILE_SPEED_MAX).contains(&parsed) {
            return Reply::Text {
                content: format!(
                    "The MissileMinSpeed can only be between {MISSILE_SPEED_MIN:.0} and {MISSILE_SPEED_MAX:.0}"
                ),
            };
        }
        if parsed > self.config.missile_max_speed {
            return Reply::Text {
                content: format!(
                    "The MissileMinSpeed cannot be above the MissileMaxSpeed of {:.0}",
                    self.config.missile_max_speed
                ),
            };
        }
        let old = self.config.missile_min_speed;
        self.config.missile_min_speed = parsed;
        self.modified = true;
        info!("✅ MissileMinSpeed changed from {old} to {parsed}");
        Reply::Dialog {
            caption: "MissileMinSpeed updated".to_string(),
            body: format!(
                "Old value: {old:.0} m/s\nNew value: {parsed:.0} m/s\n\n{RECONNECT_NOTICE}"
            ),
        }
    }

    fn set_missile_max_speed(&mut self, value: &str) -> Reply {
        let Some(parsed) = parse_decimal(value) else {
            return invalid_value("MissileMaxSpeed", value);
        };
        if !(MISSILE_SPEED_MIN..=MISSILE_SPEED_MAX).contains(&parsed) {
            return Reply::Text {
                content: format!(
                    "The MissileMaxSpeed can only be between {MISSILE_SPEED_MIN:.0} and {MISSILE_SPEED_MAX:.0}"
                ),
            };
        }
        if parsed < self.config.missile_min_speed {
            return Reply::Text {
                content: format!(
                    "The MissileMaxSpeed cannot be below the MissileMinSpeed of {:.0}",
                    self.config.missile_min_speed
                ),
            };
        }
        let old = self.config.missile_max_speed;
        self.config.missile_max_speed = parsed;
        self.modified = true;
        info!("✅ MissileMaxSpeed changed from {old} to {parsed}");
        Reply::Dialog {
            caption: "MissileMaxSpeed updated".to_string(),
            body: format!(
                "Old value: {old:.0} m/s\nNew value: {parsed:.0} m/s\n\n{RECONNECT_NOTICE}"
            ),
        }
    }

    fn set_autopilot_limit(&mut self, value: &str) -> Reply {
        let Some(parsed) = parse_decimal(value) else {
            return invalid_value("AutoPilotLimit", value);
        };
        if !(AUTOPILOT_SPEED_MIN..=AUTOPILOT_SPEED_MAX).contains(&parsed) {
            return Reply::Text {
                content: format!(
                    "The AutoPilotLimit can only be between {AUTOPILOT_SPEED_MIN:.0} and {AUTOPILOT_SPEED_MAX:.0}"
                ),
            };
        }
        let old = self.config.remote_control_max_speed;
        self.config.remote_control_max_speed = parsed;
        self.modified = true;
        info!("✅ AutoPilotLimit changed from {old} to {parsed}");
        Reply::Dialog {
            caption: "AutoPilotLimit updated".to_string(),
            body: format!(
                "Old value: {old:.0} m/s\nNew value: {parsed:.0} m/s\n\n{RECONNECT_NOTICE}"
            ),
        }
    }

    fn set_container_drop_deploy_height(&mut self, value: &str) -> Reply {
        let Some(parsed) = parse_decimal(value) else {
            return invalid_value("ContainerDropDeployHeight", value);
        };
        if !(DEPLOY_HEIGHT_MIN..=DEPLOY_HEIGHT_MAX).contains(&parsed) {
            return Reply::Text {
                content: format!(
                    "The ContainerDropDeployHeight can only be between {DEPLOY_HEIGHT_MIN:.0} and {DEPLOY_HEIGHT_MAX:.0}"
                ),
            };
        }
        let old = self.config.container_drop_deploy_height;
        self.config.container_drop_deploy_height = parsed;
        self.modified = true;
        info!("✅ ContainerDropDeployHeight changed from {old} to {parsed}");
        Reply::Dialog {
            caption: "ContainerDropDeployHeight updated".to_string(),
            body: format!(
                "Old value: {old:.0} m\nNew value: {parsed:.0} m\n\n{RECONNECT_NOTICE}"
            ),
        }
    }

    fn set_respawn_ship_deploy_height(&mut self, value: &str) -> Reply {
        let Some(parsed) = parse_decimal(value) else {
            return invalid_value("RespawnShipDeployHeight", value);
        };
        if !(DEPLOY_HEIGHT_MIN..=DEPLOY_HEIGHT_MAX).contains(&parsed) {
            return Reply::Text {
                content: format!(
                    "The RespawnShipDeployHeight can only be between {DEPLOY_HEIGHT_MIN:.0} and {DEPLOY_HEIGHT_MAX:.0}"
                ),
            };
        }
        let old = self.config.respawn_ship_deploy_height;
        self.config.respawn_ship_deploy_height = parsed;
        self.modified = true;
        info!("✅ RespawnShipDeployHeight changed from {old} to {parsed}");
        Reply::Dialog {
            caption: "RespawnShipDeployHeight updated".to_string(),
            body: format!(
                "Old value: {old:.0} m\nNew value: {parsed:.0} m\n\n{RECONNECT_NOTICE}"
            ),
        }
    }

    fn reset_all(&mut self) -> Reply {
        self.config = SpeedConfig::from_defaults(&self.defaults);
        self.modified = true;
        info!("✅ All speed settings reset to stock values");
        Reply::Dialog {
            caption: "All settings reset".to_string(),
            body: format!(
                "Every setting has been restored to its stock value.\n\n{}\n\n{RECONNECT_NOTICE}",
                describe(&self.config)
            ),
        }
    }

    /// The full status report: values as loaded this session, current
    /// values when the record has been modified since, valid ranges, and
    /// usage examples.
    fn status_report(&self) -> Reply {
        let mut body = String::new();
        body.push_str("Values at session start:\n");
        body.push_str(&describe(&self.snapshot));
        if self.modified {
            body.push_str("\n\nCurrent values (restart pending):\n");
            body.push_str(&describe(&self.config));
        }
        let _ = write!(
            body,
            "\n\nValid ranges:\n  \
             Ship speeds: {SHIP_SPEED_MIN:.0} to {SHIP_SPEED_MAX:.0} m/s\n  \
             ThrustRatio: x{THRUST_RATIO_MIN:.3} to x{THRUST_RATIO_MAX:.0}\n  \
             Missile speeds: {MISSILE_SPEED_MIN:.0} to {MISSILE_SPEED_MAX:.0} m/s\n  \
             AutoPilotLimit: {AUTOPILOT_SPEED_MIN:.0} to {AUTOPILOT_SPEED_MAX:.0} m/s\n  \
             Deploy heights: {DEPLOY_HEIGHT_MIN:.0} to {DEPLOY_HEIGHT_MAX:.0} m\n\n\
             Examples:\n  \
             /configspeed LargeShipMaxSpeed 850\n  \
             /maxspeed 500\n  \
             /configspeed EnableThrustRatio on\n  \
             /configspeed ThrustRatio 10\n  \
             /configspeed MissileMaxSpeed 400\n  \
             /configspeed AutoPilotLimit 200\n  \
             /configspeed ResetAll"
        );
        Reply::Dialog { caption: "Speed settings".to_string(), body }
    }
}

fn invalid_value(name: &str, value: &str) -> Reply {
    Reply::Text {
        content: format!("The value '{value}' for {name} is invalid."),
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn describe(config: &SpeedConfig) -> String {
    format!(
        "  LargeShipMaxSpeed: {:.0} m/s\n  \
         SmallShipMaxSpeed: {:.0} m/s\n  \
         EnableThrustRatio: {}\n  \
         ThrustRatio: x{:.3}\n  \
         MissileMinSpeed: {:.0} m/s\n  \
         MissileMaxSpeed: {:.0} m/s\n  \
         AutoPilotLimit: {:.0} m/s\n  \
         ContainerDropDeployHeight: {:.0} m\n  \
         RespawnShipDeployHeight: {:.0} m",
        config.large_ship_max_speed,
        config.small_ship_max_speed,
        on_off(config.enable_thrust_ratio),
        config.thrust_ratio,
        config.missile_min_speed,
        config.missile_max_speed,
        config.remote_control_max_speed,
        config.container_drop_deploy_height,
        config.respawn_ship_deploy_height
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> StockDefaults {
        StockDefaults {
            large_ship_max_speed: 100.0,
            small_ship_max_speed: 100.0,
            missile_min_speed: 100.0,
            missile_max_speed: 200.0,
            remote_control_max_speed: 100.0,
            container_drop_deploy_height: 200.0,
            respawn_ship_deploy_height: 300.0,
        }
    }

    fn service() -> ConfigService {
        let defaults = stock();
        ConfigService::new(SpeedConfig::from_defaults(&defaults), defaults)
    }

    #[test]
    fn valid_change_mutates_and_confirms() {
        let mut service = service();
        let reply = service.apply("largeshipmaxspeed", "850");
        assert_eq!(service.config().large_ship_max_speed, 850.0);
        assert!(service.is_modified());
        match reply {
            Reply::Dialog { caption, body } => {
                assert_eq!(caption, "LargeShipMaxSpeed updated");
                assert!(body.contains("Old value: 100 m/s"));
                assert!(body.contains("New value: 850 m/s"));
            }
            Reply::Text { content } => panic!("expected dialog, got text: {content}"),
        }
    }

    #[test]
    fn thrust_confirmation_formats_three_decimals() {
        let mut service = service();
        let reply = service.apply("thrustratio", "10");
        match reply {
            Reply::Dialog { body, .. } => assert!(body.contains("x10.000"), "body: {body}"),
            Reply::Text { content } => panic!("expected dialog, got text: {content}"),
        }
    }

    #[test]
    fn thrust_range_error_names_the_bounds() {
        let mut service = service();
        let before = service.config().thrust_ratio;
        let reply = service.apply("thrustratio", "5000");
        assert_eq!(service.config().thrust_ratio, before);
        match reply {
            Reply::Text { content } => {
                assert!(content.contains("0.100 and 1000"), "content: {content}")
            }
            Reply::Dialog { body, .. } => panic!("expected text, got dialog: {body}"),
        }
    }

    #[test]
    fn missile_pair_keeps_its_ordering() {
        let mut service = service();
        // max defaults to 200; a min above it must be rejected.
        let reply = service.apply("missilemin", "300");
        assert_eq!(service.config().missile_min_speed, 100.0);
        assert!(matches!(reply, Reply::Text { .. }));

        let reply = service.apply("missilemax", "50");
        assert_eq!(service.config().missile_max_speed, 200.0);
        assert!(matches!(reply, Reply::Text { .. }));

        assert!(matches!(service.apply("missilemax", "400"), Reply::Dialog { .. }));
        assert!(matches!(service.apply("missilemin", "300"), Reply::Dialog { .. }));
    }

    #[test]
    fn max_all_speed_sets_both_ship_caps() {
        let mut service = service();
        service.apply("maxallspeed", "500");
        assert_eq!(service.config().large_ship_max_speed, 500.0);
        assert_eq!(service.config().small_ship_max_speed, 500.0);
    }

    #[test]
    fn toggle_accepts_the_word_grammar() {
        let mut service = service();
        service.apply("enablethrustratio", "on");
        assert!(service.config().enable_thrust_ratio);
        service.apply("enablethrustratio", "FALSE");
        assert!(!service.config().enable_thrust_ratio);

        let reply = service.apply("enablethrustratio", "maybe");
        assert!(matches!(reply, Reply::Text { .. }));
    }

    #[test]
    fn malformed_number_is_rejected_without_mutation() {
        let mut service = service();
        let reply = service.apply("largeshipmaxspeed", "fast");
        assert_eq!(service.config().large_ship_max_speed, 100.0);
        assert!(!service.is_modified());
        match reply {
            Reply::Text { content } => assert!(content.contains("'fast'")),
            Reply::Dialog { body, .. } => panic!("expected text, got dialog: {body}"),
        }
    }

    #[test]
    fn reset_all_restores_stock_values() {
        let mut service = service();
        service.apply("maxallspeed", "850");
        service.apply("thrustratio", "10");
        let reply = service.apply("resetall", "");
        assert_eq!(service.config().large_ship_max_speed, 100.0);
        assert_eq!(service.config().thrust_ratio, 1.0);
        assert!(service.is_modified());
        assert!(matches!(reply, Reply::Dialog { .. }));
    }

    #[test]
    fn unknown_or_empty_key_yields_status_report() {
        let mut service = service();
        for key in ["", "warpdrive"] {
            match service.apply(key, "") {
                Reply::Dialog { caption, body } => {
                    assert_eq!(caption, "Speed settings");
                    assert!(body.contains("Values at session start:"));
                    assert!(body.contains("Examples:"));
                    assert!(!body.contains("Current values"));
                }
                Reply::Text { content } => panic!("expected dialog, got text: {content}"),
            }
        }

        service.apply("largeshipmaxspeed", "850");
        match service.apply("", "") {
            Reply::Dialog { body, .. } => {
                assert!(body.contains("Current values (restart pending):"));
                assert!(body.contains("LargeShipMaxSpeed: 850 m/s"));
                // The snapshot column still shows the loaded value.
                assert!(body.contains("LargeShipMaxSpeed: 100 m/s"));
            }
            Reply::Text { content } => panic!("expected dialog, got text: {content}"),
        }
    }

    #[test]
    fn range_boundaries_are_inclusive() {
        let mut service = service();
        assert!(matches!(service.apply("thrustratio", "0.1"), Reply::Dialog { .. }));
        assert!(matches!(service.apply("thrustratio", "1000"), Reply::Dialog { .. }));
        assert!(matches!(service.apply("thrustratio", "0.099"), Reply::Text { .. }));
        assert!(matches!(service.apply("thrustratio", "1000.001"), Reply::Text { .. }));
        assert_eq!(service.config().thrust_ratio, 1000.0);
    }

    #[test]
    fn ship_speed_bounds_are_enforced_at_the_edges() {
        let mut service = service();
        assert!(matches!(service.apply("largeshipmaxspeed", "1"), Reply::Dialog { .. }));
        assert!(matches!(
            service.apply("largeshipmaxspeed", "150000000"),
            Reply::Dialog { .. }
        ));
        assert!(matches!(service.apply("largeshipmaxspeed", "0.999"), Reply::Text { .. }));
        assert!(matches!(
            service.apply("largeshipmaxspeed", "150000001"),
            Reply::Text { .. }
        ));
        assert_eq!(service.config().large_ship_max_speed, 150_000_000.0);

        assert!(matches!(service.apply("smallshipmaxspeed", "1"), Reply::Dialog { .. }));
        assert!(matches!(
            service.apply("smallshipmaxspeed", "150000000"),
            Reply::Dialog { .. }
        ));
        assert!(matches!(service.apply("smallshipmaxspeed", "0.999"), Reply::Text { .. }));
        assert_eq!(service.config().small_ship_max_speed, 150_000_000.0);
    }

    #[test]
    fn autopilot_bounds_are_enforced_at_the_edges() {
        let mut service = service();
        assert!(matches!(service.apply("autopilot", "1"), Reply::Dialog { .. }));
        assert!(matches!(service.apply("autopilot", "5000"), Reply::Dialog { .. }));
        assert!(matches!(service.apply("autopilot", "0.999"), Reply::Text { .. }));
        assert!(matches!(service.apply("autopilot", "5000.001"), Reply::Text { .. }));
        assert_eq!(service.config().remote_control_max_speed, 5000.0);
    }

    #[test]
    fn deploy_height_bounds_are_enforced_at_the_edges() {
        let mut service = service();
        assert!(matches!(service.apply("dropheight", "50"), Reply::Dialog { .. }));
        assert!(matches!(service.apply("dropheight", "10000"), Reply::Dialog { .. }));
        assert!(matches!(service.apply("dropheight", "49.9"), Reply::Text { .. }));
        assert!(matches!(service.apply("dropheight", "10000.1"), Reply::Text { .. }));
        assert_eq!(service.config().container_drop_deploy_height, 10_000.0);

        assert!(matches!(service.apply("respawnheight", "50"), Reply::Dialog { .. }));
        assert!(matches!(service.apply("respawnheight", "10000"), Reply::Dialog { .. }));
        assert!(matches!(service.apply("respawnheight", "49.9"), Reply::Text { .. }));
        assert!(matches!(service.apply("respawnheight", "10000.1"), Reply::Text { .. }));
        assert_eq!(service.config().respawn_ship_deploy_height, 10_000.0);
        // The other height is untouched by the respawn key.
        assert_eq!(service.config().container_drop_deploy_height, 10_000.0);
    }

    #[test]
    fn equal_missile_speeds_are_accepted() {
        let mut service = service();
        assert!(matches!(service.apply("missilemin", "200"), Reply::Dialog { .. }));
        assert_eq!(service.config().missile_min_speed, 200.0);
        assert_eq!(service.config().missile_max_speed, 200.0);
    }
}
