// Integration tests (native) for the `cube-landing` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use cube_landing::{MenuState, Playback};

#[test]
fn server_ip_is_the_published_address() {
    assert_eq!(cube_landing::SERVER_IP, "play.cubenetwork.fun");
}

#[test]
fn scroll_target_subtracts_header_height() {
    assert_eq!(cube_landing::scroll_target_top(200), 120.0);
    assert_eq!(cube_landing::scroll_target_top(cube_landing::HEADER_OFFSET_PX), 0.0);
    // Targets above the header still produce a (clamped-by-browser) offset.
    assert_eq!(cube_landing::scroll_target_top(0), -80.0);
}

#[test]
fn music_toggle_round_trips() {
    let start = Playback::Stopped;
    assert_eq!(start.toggled(), Playback::Playing);
    assert_eq!(start.toggled().toggled(), start);
    assert_eq!(start.icon(), start.toggled().toggled().icon());
    assert_eq!(
        start.button_background(),
        start.toggled().toggled().button_background()
    );
}

#[test]
fn music_states_have_distinct_chrome() {
    assert_ne!(Playback::Playing.icon(), Playback::Stopped.icon());
    assert_ne!(
        Playback::Playing.button_background(),
        Playback::Stopped.button_background()
    );
    assert_ne!(Playback::Playing.notice(), Playback::Stopped.notice());
}

#[test]
fn menu_collapses_on_navigation() {
    let opened = MenuState::Closed.toggled();
    assert!(opened.is_open());
    // Clicking any menu link forces Closed regardless of prior state.
    let after_link_click = MenuState::Closed;
    assert!(!after_link_click.is_open());
    assert_eq!(opened.toggled(), MenuState::Closed);
}

#[test]
fn reduced_motion_kicks_in_below_four_cores() {
    // 0 means the platform did not report a count.
    assert!(!cube_landing::should_reduce_motion(0.0));
    assert!(cube_landing::should_reduce_motion(1.0));
    assert!(cube_landing::should_reduce_motion(2.0));
    assert!(cube_landing::should_reduce_motion(3.0));
    assert!(!cube_landing::should_reduce_motion(4.0));
    assert!(!cube_landing::should_reduce_motion(16.0));
}
