use monogram_core::{CssValue, ProfileError, ProfileRegistry};

const PROFILES_YAML: &str = r##"
profiles:
  default: {}
  compact:
    style:
      size: 32
      radius: 6
      bgColor: "#0f172a"
    initials:
      maxLength: 2
      fallback: "?"
  lowercase:
    initials:
      uppercase: false
"##;

#[test]
fn loads_yaml_profiles() {
    let registry = ProfileRegistry::from_yaml(PROFILES_YAML).expect("profiles");
    assert_eq!(registry.names(), vec!["compact", "default", "lowercase"]);

    let compact = registry.profile("compact").expect("compact profile");
    assert_eq!(compact.style.size, Some(32.0));
    assert_eq!(compact.style.radius, Some(CssValue::Number(6.0)));
    assert_eq!(compact.initials.max_length, Some(2));
    assert!(compact.initials.uppercase);
}

#[test]
fn renders_through_profile() {
    let registry = ProfileRegistry::from_yaml(PROFILES_YAML).expect("profiles");

    let avatar = registry
        .render("compact", "Anna Maria Lopez")
        .expect("render");
    assert_eq!(avatar.content, "AM");
    assert_eq!(avatar.width, 32.0);
    assert_eq!(avatar.bg_color, "#0f172a");

    let avatar = registry.render("compact", "").expect("render");
    assert_eq!(avatar.content, "?");

    let avatar = registry.render("lowercase", "ann lee").expect("render");
    assert_eq!(avatar.content, "al");
    assert_eq!(avatar.width, 50.0);
}

#[test]
fn loads_json_profiles() {
    let registry = ProfileRegistry::from_json(
        r#"{"profiles": {"large": {"style": {"size": 120, "fontSize": 36}}}}"#,
    )
    .expect("profiles");
    let avatar = registry.render("large", "Ann Lee").expect("render");
    assert_eq!(avatar.width, 120.0);
    assert_eq!(avatar.font_size, 36.0);
}

#[test]
fn unknown_profile_is_an_error() {
    let registry = ProfileRegistry::from_yaml(PROFILES_YAML).expect("profiles");
    let err = registry.render("missing", "Ann Lee").expect_err("unknown");
    assert!(matches!(err, ProfileError::UnknownProfile(ref name) if name == "missing"));
}

#[test]
fn rejects_invalid_profiles() {
    let cases = [
        "profiles:\n  bad:\n    style:\n      size: 0\n",
        "profiles:\n  bad:\n    style:\n      size: -4\n",
        "profiles:\n  bad:\n    style:\n      fontSize: -1\n",
        "profiles:\n  bad:\n    initials:\n      maxLength: 0\n",
    ];
    for yaml in cases {
        let err = ProfileRegistry::from_yaml(yaml).expect_err("invalid profile");
        assert!(
            matches!(err, ProfileError::InvalidProfile { ref profile, .. } if profile == "bad"),
            "yaml: {yaml}"
        );
    }
}

#[test]
fn malformed_documents_are_errors() {
    assert!(matches!(
        ProfileRegistry::from_yaml("profiles: [1, 2]"),
        Err(ProfileError::Yaml(_))
    ));
    assert!(matches!(
        ProfileRegistry::from_json("{"),
        Err(ProfileError::Json(_))
    ));
}
