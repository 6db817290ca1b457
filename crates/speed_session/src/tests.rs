//! End-to-end tests driving whole sessions over the loopback world.

use std::cell::RefCell;
use std::sync::Arc;

use speed_protocol::{Envelope, Payload, Side, CHANNEL_ID, CONFIG_VARIABLE};

use crate::host::{
    ByteChannel, ClientUi, PlayerInfo, PromoteLevel, SessionIdentity, SessionMode, VariableStore,
};
use crate::loopback::LoopbackWorld;
use crate::session::Session;
use crate::transport::Transport;

/// Captures everything the client role would have shown.
#[derive(Default)]
struct RecordingUi {
    dialogs: RefCell<Vec<(String, String, String)>>,
    texts: RefCell<Vec<(String, String)>>,
}

impl ClientUi for RecordingUi {
    fn show_dialog(&self, title: &str, caption: &str, body: &str) {
        self.dialogs
            .borrow_mut()
            .push((title.to_string(), caption.to_string(), body.to_string()));
    }

    fn show_text(&self, prefix: &str, content: &str) {
        self.texts
            .borrow_mut()
            .push((prefix.to_string(), content.to_string()));
    }
}

fn identity(id: u64, name: &str, mode: SessionMode) -> SessionIdentity {
    SessionIdentity {
        local_player_id: id,
        local_display_name: name.to_string(),
        language: "en".to_string(),
        mode,
    }
}

fn player(id: u64, name: &str, promote_level: PromoteLevel, is_host: bool) -> PlayerInfo {
    PlayerInfo {
        id,
        display_name: name.to_string(),
        promote_level,
        is_host,
    }
}

/// A hosting player's node: one session carrying both roles.
fn hosted_world() -> (Arc<LoopbackWorld>, Session, Arc<RecordingUi>) {
    let world = Arc::new(LoopbackWorld::new());
    world.add_player(player(1, "host", PromoteLevel::Owner, true));

    let ui = Arc::new(RecordingUi::default());
    let mut session = Session::new(world.clone(), identity(1, "host", SessionMode::Hosted));
    session.init_server(world.clone(), world.clone(), LoopbackWorld::stock_defaults());
    session.init_client(ui.clone());
    (world, session, ui)
}

fn pump_server(world: &LoopbackWorld, session: &mut Session) {
    for raw in world.drain_server_inbox() {
        session.on_network_message(&raw);
    }
}

fn pump_client(world: &LoopbackWorld, player: u64, session: &mut Session) {
    for raw in world.drain_client_inbox(player) {
        session.on_network_message(&raw);
    }
}

fn server_config(session: &Session) -> speed_protocol::SpeedConfig {
    session
        .server()
        .map(|server| server.service().config().clone())
        .expect("server role registered")
}

#[test]
fn admin_change_round_trips_to_a_confirmation_dialog() {
    let (world, mut session, ui) = hosted_world();

    assert!(session.on_chat_message("/configspeed LargeShipMaxSpeed 850"));
    pump_server(&world, &mut session);
    assert_eq!(server_config(&session).large_ship_max_speed, 850.0);

    pump_client(&world, 1, &mut session);
    let dialogs = ui.dialogs.borrow();
    assert_eq!(dialogs.len(), 1);
    let (title, caption, body) = &dialogs[0];
    assert_eq!(title, "ConfigSpeed");
    assert_eq!(caption, "LargeShipMaxSpeed updated");
    assert!(body.contains("New value: 850 m/s"));
}

#[test]
fn maxspeed_shorthand_changes_both_caps() {
    let (world, mut session, _ui) = hosted_world();

    assert!(session.on_chat_message("/maxspeed 500"));
    pump_server(&world, &mut session);

    let config = server_config(&session);
    assert_eq!(config.large_ship_max_speed, 500.0);
    assert_eq!(config.small_ship_max_speed, 500.0);
}

#[test]
fn thrust_confirmation_shows_three_decimal_multiplier() {
    let (world, mut session, ui) = hosted_world();

    session.on_chat_message("/configspeed thrustratio 10");
    pump_server(&world, &mut session);
    pump_client(&world, 1, &mut session);

    let dialogs = ui.dialogs.borrow();
    assert_eq!(dialogs.len(), 1);
    assert!(dialogs[0].2.contains("x10.000"), "body: {}", dialogs[0].2);
}

#[test]
fn out_of_range_thrust_is_rejected_with_the_bounds() {
    let (world, mut session, ui) = hosted_world();

    session.on_chat_message("/configspeed thrustratio 5000");
    pump_server(&world, &mut session);
    assert_eq!(server_config(&session).thrust_ratio, 1.0);

    pump_client(&world, 1, &mut session);
    let texts = ui.texts.borrow();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].0, "ConfigSpeed");
    assert!(texts[0].1.contains("0.100 and 1000"), "text: {}", texts[0].1);
}

#[test]
fn unauthorized_request_is_silently_dropped() {
    let world = Arc::new(LoopbackWorld::new());
    world.add_player(player(2, "visitor", PromoteLevel::None, false));

    let mut server = Session::new(world.clone(), identity(0, "server", SessionMode::Dedicated));
    server.init_server(world.clone(), world.clone(), LoopbackWorld::stock_defaults());

    let visitor_ui = Arc::new(RecordingUi::default());
    let mut visitor = Session::new(world.clone(), identity(2, "visitor", SessionMode::Client));
    visitor.init_client(visitor_ui.clone());

    assert!(visitor.on_chat_message("/configspeed LargeShipMaxSpeed 850"));
    pump_server(&world, &mut server);

    // Nothing changed and nothing came back, not even a rejection.
    assert_eq!(server_config(&server).large_ship_max_speed, 100.0);
    pump_client(&world, 2, &mut visitor);
    assert!(visitor_ui.dialogs.borrow().is_empty());
    assert!(visitor_ui.texts.borrow().is_empty());
}

#[test]
fn unknown_sender_is_silently_dropped() {
    let (world, mut session, ui) = hosted_world();

    let forged = Envelope {
        sender_id: 99,
        sender_name: "ghost".to_string(),
        sender_language: "en".to_string(),
        side: Side::ServerSide,
        payload: Payload::ConfigChange {
            key: "largeshipmaxspeed".to_string(),
            value: "850".to_string(),
        },
    };
    session.on_network_message(&forged.encode().expect("encode"));

    assert_eq!(server_config(&session).large_ship_max_speed, 100.0);
    pump_client(&world, 1, &mut session);
    assert!(ui.dialogs.borrow().is_empty());
    assert!(ui.texts.borrow().is_empty());
}

#[test]
fn garbage_bytes_do_not_poison_the_pump() {
    let (world, mut session, _ui) = hosted_world();

    session.on_network_message(b"\xff\xfe not a message");
    session.on_network_message(b"{\"half\":");

    // A valid message right after still processes normally.
    session.on_chat_message("/configspeed smallshipmaxspeed 250");
    pump_server(&world, &mut session);
    assert_eq!(server_config(&session).small_ship_max_speed, 250.0);
}

#[test]
fn save_skips_unmodified_and_persists_changes() {
    let (world, mut session, _ui) = hosted_world();

    session.save().expect("save");
    assert!(world.get_variable(CONFIG_VARIABLE).is_none());

    session.on_chat_message("/configspeed LargeShipMaxSpeed 850");
    pump_server(&world, &mut session);
    session.save().expect("save");

    let raw = world.get_variable(CONFIG_VARIABLE).expect("variable written");
    assert!(raw.contains("850"));
}

#[test]
fn saved_configuration_survives_a_restart() {
    let (world, mut session, _ui) = hosted_world();

    session.on_chat_message("/configspeed thrustratio 10");
    pump_server(&world, &mut session);
    session.shutdown();

    let mut restarted = Session::new(world.clone(), identity(1, "host", SessionMode::Hosted));
    restarted.init_server(world.clone(), world.clone(), LoopbackWorld::stock_defaults());
    assert_eq!(server_config(&restarted).thrust_ratio, 10.0);
}

#[test]
fn bare_command_shows_the_status_report() {
    let (world, mut session, ui) = hosted_world();

    session.on_chat_message("/configspeed");
    pump_server(&world, &mut session);
    pump_client(&world, 1, &mut session);

    let dialogs = ui.dialogs.borrow();
    assert_eq!(dialogs.len(), 1);
    assert_eq!(dialogs[0].1, "Speed settings");
    assert!(dialogs[0].2.contains("Examples:"));
}

#[test]
fn broadcast_reaches_every_connected_player() {
    let world = Arc::new(LoopbackWorld::new());
    world.add_player(player(1, "first", PromoteLevel::None, false));
    world.add_player(player(2, "second", PromoteLevel::None, false));

    let transport = Transport::new(world.clone(), identity(0, "server", SessionMode::Dedicated));
    transport.send_to_all_players(
        world.as_ref(),
        Payload::Text {
            prefix: "ConfigSpeed".to_string(),
            content: "settings were reset".to_string(),
        },
    );

    assert_eq!(world.drain_client_inbox(1).len(), 1);
    assert_eq!(world.drain_client_inbox(2).len(), 1);
}

#[test]
fn traffic_on_a_foreign_channel_is_discarded() {
    let world = Arc::new(LoopbackWorld::new());
    world.add_player(player(1, "first", PromoteLevel::None, false));

    world
        .send_to_server(CHANNEL_ID + 1, b"stray".to_vec())
        .expect("send");
    world
        .send_to_player(CHANNEL_ID + 1, 1, b"stray".to_vec())
        .expect("send");

    assert!(world.drain_server_inbox().is_empty());
    assert!(world.drain_client_inbox(1).is_empty());
}

#[test]
fn delivery_to_a_departed_player_is_swallowed() {
    let world = Arc::new(LoopbackWorld::new());
    let transport = Transport::new(world.clone(), identity(0, "server", SessionMode::Dedicated));

    // Player 3 never connected; the send fails inside the channel and
    // the transport logs instead of propagating.
    transport.send_to_player(
        3,
        Payload::Text {
            prefix: "ConfigSpeed".to_string(),
            content: "too late".to_string(),
        },
    );
}

#[test]
fn shutdown_is_idempotent() {
    let (world, mut session, _ui) = hosted_world();
    session.on_chat_message("/configspeed LargeShipMaxSpeed 850");
    pump_server(&world, &mut session);

    session.shutdown();
    session.shutdown();
    assert!(session.server().is_none());
    assert!(world.get_variable(CONFIG_VARIABLE).is_some());
}
