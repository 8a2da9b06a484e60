use super::*;

// =============================================================
// Dimensions
// =============================================================

#[test]
fn dimensions_default_leaves_both_axes_unset() {
    let dims = Dimensions::default();
    assert!(dims.width.is_none());
    assert!(dims.height.is_none());
}

// =============================================================
// HandleAction
// =============================================================

#[test]
fn handle_action_default_is_select() {
    assert_eq!(HandleAction::default(), HandleAction::Select);
}

#[test]
fn handle_action_tokens() {
    assert_eq!(HandleAction::Select.as_token(), "select");
    assert_eq!(HandleAction::Move.as_token(), "move");
    assert_eq!(HandleAction::Scale.as_token(), "scale");
    assert_eq!(HandleAction::None.as_token(), "none");
}

#[test]
fn handle_action_resize_tokens_are_kebab_case() {
    assert_eq!(HandleAction::NResize.as_token(), "n-resize");
    assert_eq!(HandleAction::EResize.as_token(), "e-resize");
    assert_eq!(HandleAction::SResize.as_token(), "s-resize");
    assert_eq!(HandleAction::WResize.as_token(), "w-resize");
    assert_eq!(HandleAction::NeResize.as_token(), "ne-resize");
    assert_eq!(HandleAction::NwResize.as_token(), "nw-resize");
    assert_eq!(HandleAction::SeResize.as_token(), "se-resize");
    assert_eq!(HandleAction::SwResize.as_token(), "sw-resize");
}

#[test]
fn handle_action_tokens_are_unique() {
    let actions = [
        HandleAction::Select,
        HandleAction::Move,
        HandleAction::Scale,
        HandleAction::NResize,
        HandleAction::EResize,
        HandleAction::SResize,
        HandleAction::WResize,
        HandleAction::NeResize,
        HandleAction::NwResize,
        HandleAction::SeResize,
        HandleAction::SwResize,
        HandleAction::None,
    ];
    for (i, a) in actions.iter().enumerate() {
        for (j, b) in actions.iter().enumerate() {
            if i != j {
                assert_ne!(a.as_token(), b.as_token());
            }
        }
    }
}

// =============================================================
// DisabledHandles
// =============================================================

#[test]
fn disabled_handles_default_disables_nothing() {
    let handles = DisabledHandles::default();
    for action in [
        HandleAction::NResize,
        HandleAction::EResize,
        HandleAction::SResize,
        HandleAction::WResize,
        HandleAction::NeResize,
        HandleAction::NwResize,
        HandleAction::SeResize,
        HandleAction::SwResize,
        HandleAction::Move,
    ] {
        assert!(!handles.is_disabled(action));
    }
}

#[test]
fn disabled_handles_flags_map_to_their_action() {
    let handles = DisabledHandles { ne: true, s: true, ..Default::default() };
    assert!(handles.is_disabled(HandleAction::NeResize));
    assert!(handles.is_disabled(HandleAction::SResize));
    assert!(!handles.is_disabled(HandleAction::NResize));
    assert!(!handles.is_disabled(HandleAction::SwResize));
}

#[test]
fn disabled_move_handle_is_independent_of_resize_flags() {
    let handles = DisabledHandles { move_handle: true, ..Default::default() };
    assert!(handles.is_disabled(HandleAction::Move));
    assert!(!handles.is_disabled(HandleAction::NResize));
}

#[test]
fn non_handle_actions_are_never_disabled() {
    let handles = DisabledHandles {
        n: true,
        e: true,
        s: true,
        w: true,
        ne: true,
        nw: true,
        se: true,
        sw: true,
        move_handle: true,
    };
    assert!(!handles.is_disabled(HandleAction::Select));
    assert!(!handles.is_disabled(HandleAction::Scale));
    assert!(!handles.is_disabled(HandleAction::None));
}

// =============================================================
// ExportSettings
// =============================================================

#[test]
fn export_settings_default_smooths_without_fill() {
    let export = ExportSettings::default();
    assert!(export.size.is_none());
    assert!(export.fill_color.is_none());
    assert!(export.smoothing);
}
