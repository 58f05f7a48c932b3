use super::*;

#[test]
fn required_param_returns_trimmed_value() {
    assert_eq!(required_param(Some(" 42 ".to_owned()), "id"), Ok("42".to_owned()));
}

#[test]
fn required_param_missing() {
    assert_eq!(required_param(None, "id"), Err(ParamError::Missing("id")));
}

#[test]
fn required_param_blank() {
    assert_eq!(required_param(Some("   ".to_owned()), "token"), Err(ParamError::Blank("token")));
}

#[test]
fn param_error_messages_name_the_parameter() {
    assert_eq!(ParamError::Missing("id").to_string(), "missing parameter `id`");
    assert_eq!(ParamError::Blank("token").to_string(), "parameter `token` is blank");
}

#[test]
fn tracked_param_follows_route_changes() {
    Owner::new().with(|| {
        let raw = RwSignal::new(Some("red-wolves".to_owned()));
        let id = tracked_param("id", move || raw.get());
        assert_eq!(id.get_untracked(), Ok("red-wolves".to_owned()));

        raw.set(Some(" blue-sharks ".to_owned()));
        assert_eq!(id.get_untracked(), Ok("blue-sharks".to_owned()));

        raw.set(None);
        assert_eq!(id.get_untracked(), Err(ParamError::Missing("id")));
    });
}
