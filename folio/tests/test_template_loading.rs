use std::path::PathBuf;

fn template_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("src/templates")
        .join(name)
}

/// Test that the embedded templates exist in src/templates
#[test]
fn test_templates_exist() {
    for name in ["starter", "minimal"] {
        let config_path = template_dir(name).join("folio.toml");
        assert!(
            config_path.exists(),
            "{} template should exist at {:?}",
            name,
            config_path
        );
    }
}

/// Test that the embedded templates can be loaded and parsed
#[test]
fn test_templates_load() {
    for name in ["starter", "minimal"] {
        let content = std::fs::read_to_string(template_dir(name).join("folio.toml"))
            .expect("Should be able to read template file");

        let config: toml::Value = toml::from_str(&content).expect("Template should be valid TOML");
        assert!(config.get("owner").is_some(), "{} template needs an owner", name);
    }
}

/// Test that the starter skills file has the expected header
#[test]
fn test_starter_skills_header() {
    let content = std::fs::read_to_string(template_dir("starter").join("skills.csv")).unwrap();
    assert_eq!(content.lines().next(), Some("category,name,level,glyph"));
}
