//! Runtime behaviour of the `git.compat` module.
//!
//! The `is_<platform>` aliases resolve, warn on every access, and are listed
//! by `dir()`; misspelled or unknown names stay errors.

use std::sync::Arc;

use compat_platform::{
    PLATFORM_OVERLAY, PlatformInfo, alias_table, build_module, build_module_with_config,
    git_compat,
};
use compat_shim::{
    AttributeError, ModuleShim, NullSink, RecordingSink, ShimConfig, Value, ValueType,
    capture_warnings,
};
use pretty_assertions::assert_eq;

const MESSAGE_LEADER: &str = "{} and other is_<platform> aliases are deprecated.";

fn leader(qualname: &str) -> String {
    MESSAGE_LEADER.replace("{}", qualname)
}

fn module_for(platform: PlatformInfo) -> (ModuleShim, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let module = build_module(platform, sink.clone()).unwrap();
    (module, sink)
}

#[test]
fn test_cannot_access_undefined() {
    let (module, sink) = module_for(PlatformInfo::current());

    let err = module.getattr("foo").unwrap_err();
    assert_eq!(err, AttributeError::missing("git.compat", "foo"));
    assert!(err.to_string().contains("'foo'"));
    assert!(sink.is_empty());
}

#[test]
fn test_undefined_stays_undefined() {
    let (module, sink) = module_for(PlatformInfo::current());

    for _ in 0..3 {
        let err = module.getattr("is_windows").unwrap_err();
        assert_eq!(err.name(), "is_windows");
    }
    assert!(sink.is_empty());
}

#[test]
fn test_is_platform() {
    let fully_qualified_names = [
        "git.compat.is_win",
        "git.compat.is_posix",
        "git.compat.is_darwin",
    ];
    let platform = PlatformInfo::current();
    let (module, sink) = module_for(platform.clone());

    let is_win = module.getattr("is_win").unwrap();
    let is_posix = module.getattr("is_posix").unwrap();
    let is_darwin = module.getattr("is_darwin").unwrap();

    let messages = sink.messages();
    assert_eq!(messages.len(), 3);
    for (fullname, message) in fully_qualified_names.iter().zip(&messages) {
        assert!(
            message.starts_with(&leader(fullname)),
            "{message:?} does not start with {:?}",
            leader(fullname)
        );
    }

    assert_eq!(is_win, Value::Bool(cfg!(windows)));
    assert_eq!(is_posix, Value::Bool(cfg!(unix)));
    assert_eq!(is_darwin, Value::Bool(cfg!(target_os = "macos")));
    assert_eq!(is_win.as_bool(), Some(platform.is_win()));
}

#[test]
fn test_is_win_on_nt() {
    let (module, sink) = module_for(PlatformInfo::new("nt", "win32"));

    assert_eq!(module.getattr("is_win").unwrap(), Value::Bool(true));
    assert_eq!(sink.len(), 1);
    assert!(sink.messages()[0].starts_with(&leader("git.compat.is_win")));
}

#[test]
fn test_is_win_on_posix() {
    let (module, sink) = module_for(PlatformInfo::new("posix", "linux"));

    assert_eq!(module.getattr("is_win").unwrap(), Value::Bool(false));
    assert_eq!(sink.len(), 1);
    assert!(sink.messages()[0].starts_with(&leader("git.compat.is_win")));
}

#[test]
fn test_is_darwin_follows_platform_identifier() {
    for (platform, expected) in [
        (PlatformInfo::macos(), true),
        (PlatformInfo::linux(), false),
        (PlatformInfo::windows(), false),
        (PlatformInfo::new("posix", "darwin-like"), false),
    ] {
        let (module, sink) = module_for(platform);
        assert_eq!(module.getattr("is_darwin").unwrap(), Value::Bool(expected));
        assert!(sink.messages()[0].starts_with(&leader("git.compat.is_darwin")));
    }
}

#[test]
fn test_every_access_warns() {
    let (module, sink) = module_for(PlatformInfo::linux());

    for _ in 0..4 {
        module.getattr("is_posix").unwrap();
    }
    assert_eq!(sink.len(), 4);
}

#[test]
fn test_warnings_follow_access_order() {
    let module = build_module(PlatformInfo::linux(), Arc::new(NullSink)).unwrap();

    let (_, warnings) = capture_warnings(&module, |m| {
        (
            m.getattr("is_darwin").unwrap(),
            m.getattr("is_win").unwrap(),
            m.getattr("is_posix").unwrap(),
        )
    });

    let names: Vec<_> = warnings.iter().map(|w| w.qualname.as_str()).collect();
    assert_eq!(
        names,
        vec!["git.compat.is_darwin", "git.compat.is_win", "git.compat.is_posix"]
    );
}

#[test]
fn test_live_attribute_does_not_warn() {
    let (module, sink) = module_for(PlatformInfo::current());

    assert_eq!(module.getattr("defenc").unwrap(), Value::from("utf-8"));
    assert!(sink.is_empty());
}

#[test]
fn test_dir_lists_aliases() {
    let (module, _) = module_for(PlatformInfo::current());
    let names = module.dir();

    for alias in ["is_win", "is_posix", "is_darwin"] {
        assert!(names.iter().any(|n| n == alias), "{alias} missing from {names:?}");
        assert!(!module.is_live(alias));
    }
    assert!(names.iter().any(|n| n == "defenc"));
}

#[test]
fn test_overlay_matches_runtime() {
    let table = alias_table(&PlatformInfo::current()).unwrap();
    PLATFORM_OVERLAY.check_types(&table).unwrap();

    for name in ["is_win", "is_posix", "is_darwin"] {
        assert_eq!(PLATFORM_OVERLAY.get(name), Some(ValueType::Bool));
    }
    assert_eq!(PLATFORM_OVERLAY.get("foo"), None);
}

#[test]
fn test_config_module_path() {
    let sink = Arc::new(RecordingSink::new());
    let config = ShimConfig::new().with_module_path("mypkg.compat");
    let module = build_module_with_config(PlatformInfo::windows(), &config)
        .unwrap()
        .with_sink(sink.clone());

    assert_eq!(module.getattr("is_win").unwrap(), Value::Bool(true));
    assert!(sink.messages()[0].starts_with(&leader("mypkg.compat.is_win")));
    assert_eq!(
        module.getattr("foo").unwrap_err(),
        AttributeError::missing("mypkg.compat", "foo")
    );
}

#[test]
fn test_builds_for_every_platform() {
    for platform in [
        PlatformInfo::current(),
        PlatformInfo::windows(),
        PlatformInfo::linux(),
        PlatformInfo::macos(),
        PlatformInfo::new("java", "wasi"),
    ] {
        let module = build_module(platform, Arc::new(NullSink)).unwrap();
        assert_eq!(module.aliases().len(), PLATFORM_OVERLAY.declarations().len());
    }
}

#[test]
fn test_global_module() {
    let module = git_compat();
    assert_eq!(module.path(), "git.compat");

    let (value, warnings) = capture_warnings(module, |m| m.getattr("is_posix"));
    assert_eq!(value.unwrap(), Value::Bool(PlatformInfo::current().is_posix()));
    assert_eq!(warnings.len(), 1);
}
