use std::fs;

use tempfile::TempDir;

use formbind::bindable_enum;
use formbind::config::{self, ConfigError, Settings, StaticContext};
use formbind::converters::{BindError, ConverterRegistry};
use formbind::messages::MessageCatalog;
use formbind::runtime::{self, Runtime, RuntimeError};

bindable_enum! {
    pub enum Department { Sales, Support, Billing }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Writes a context file and loads it the way a host would at startup.
fn load_context(toml_content: &str) -> StaticContext {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("formbind.toml");
    fs::write(&config_path, toml_content).expect("Failed to write context file");
    config::load_from_path(config_path).expect("Failed to load context")
}

#[test]
fn startup_initialization_wins_over_the_lazy_fallback() {
    init_tracing();

    let context = load_context(
        r#"
[formbind]
provider = "builtin"
packages = "app.controllers, app.admin"
        "#,
    );
    let settings = Settings::new(&context);
    assert_eq!(
        settings.base_packages().expect("packages present"),
        vec!["app.controllers", "app.admin"]
    );

    let runtime = Runtime::from_settings(&settings).expect("Failed to assemble runtime");
    let installed = runtime::init(runtime).expect("first init succeeds");

    // Everyone after startup sees the installed instance.
    assert!(std::ptr::eq(installed, runtime::global()));
    assert!(matches!(
        runtime::init(Runtime::builtin()),
        Err(RuntimeError::AlreadyInitialized)
    ));

    assert_eq!(
        runtime::global().convert::<i32>(Some("34")).expect("valid"),
        Some(34)
    );
}

#[test]
fn binds_builtin_scalars_end_to_end() {
    let runtime = Runtime::builtin();

    assert_eq!(runtime.convert::<i32>(Some("42")).expect("valid"), Some(42));
    assert_eq!(runtime.convert::<i32>(Some("")).expect("null"), None);
    assert_eq!(runtime.convert::<i32>(None).expect("null"), None);
    assert_eq!(
        runtime.convert::<bool>(Some("TRUE")).expect("valid"),
        Some(true)
    );
    assert_eq!(
        runtime.convert::<f64>(Some("2.5")).expect("valid"),
        Some(2.5)
    );

    let err = runtime.convert::<i32>(Some("abc")).expect_err("junk");
    assert!(matches!(err, BindError::Conversion(_)));
    assert_eq!(err.to_string(), "abc is not a valid integer.");
}

#[test]
fn binds_application_enums_by_ordinal_and_name() {
    let runtime = Runtime::builtin();

    assert_eq!(
        runtime.convert::<Department>(Some("2")).expect("ordinal"),
        Some(Department::Billing)
    );
    assert_eq!(
        runtime.convert::<Department>(Some("Support")).expect("name"),
        Some(Department::Support)
    );
    assert_eq!(runtime.convert::<Department>(Some("")).expect("null"), None);

    let err = runtime
        .convert::<Department>(Some("5"))
        .expect_err("out of range");
    assert_eq!(err.to_string(), "5 is not a valid enum value.");
}

#[test]
fn binds_temporal_values_with_optional_seconds() {
    let runtime = Runtime::builtin();

    let short = runtime
        .convert::<chrono::NaiveTime>(Some("23:52"))
        .expect("valid")
        .expect("non-empty");
    let long = runtime
        .convert::<chrono::NaiveTime>(Some("23:52:00"))
        .expect("valid")
        .expect("non-empty");
    assert_eq!(short, long);

    let err = runtime
        .convert::<chrono::NaiveTime>(Some("25:dd:88"))
        .expect_err("invalid time");
    assert_eq!(err.to_string(), "25:dd:88 is not a valid time.");
}

#[test]
fn localized_catalog_overrides_travel_verbatim() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog_path = temp_dir.path().join("pt-BR.toml");
    fs::write(
        &catalog_path,
        r#"
locale = "pt-BR"

[messages]
is_not_a_valid_integer = "{0} não é um número inteiro válido."
        "#,
    )
    .expect("Failed to write catalog file");

    let catalog = MessageCatalog::from_path(&catalog_path).expect("Failed to load catalog");
    let runtime = Runtime::new(ConverterRegistry::with_defaults(), catalog);
    assert_eq!(runtime.messages().locale(), "pt-BR");

    let err = runtime.convert::<i32>(Some("abc")).expect_err("junk");
    assert_eq!(err.to_string(), "abc não é um número inteiro válido.");

    // Keys the translation leaves out keep the builtin wording.
    let err = runtime.convert::<bool>(Some("sim")).expect_err("junk");
    assert_eq!(err.to_string(), "sim is not a valid boolean.");
}

#[test]
fn bare_profile_accepts_host_registrations() {
    let context = load_context(
        r#"
[formbind]
provider = "bare"
        "#,
    );
    let settings = Settings::new(&context);
    let mut runtime = Runtime::from_settings(&settings).expect("bare profile");

    let err = runtime
        .convert::<Department>(Some("Sales"))
        .expect_err("nothing registered yet");
    assert!(matches!(err, BindError::Missing(_)));

    runtime.registry_mut().register_family(
        formbind::converters::FamilyKind::Enumerated,
        std::sync::Arc::new(formbind::converters::EnumConverter),
    );
    assert_eq!(
        runtime.convert::<Department>(Some("Sales")).expect("valid"),
        Some(Department::Sales)
    );
}

#[test]
fn missing_required_setting_names_the_key() {
    let context = load_context("\n");
    let settings = Settings::new(&context);

    let err = settings.base_packages().expect_err("absent");
    assert!(matches!(&err, ConfigError::Missing { key, .. } if key == "formbind.packages"));
    assert!(err.to_string().contains("formbind.packages"));
}

#[test]
fn scanning_flag_reads_through_the_loaded_context() {
    let context = load_context(
        r#"
[formbind]
scanning = "  DISABLED  "
        "#,
    );
    assert!(!Settings::new(&context).scanning_enabled());

    let context = load_context("\n");
    assert!(Settings::new(&context).scanning_enabled());
}
