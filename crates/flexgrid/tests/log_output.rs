//! Logging Tests
//!
//! Diagnostics and missing class keys written through the file logger.
//! Everything lives in one test: a process can install only one logger.

use flexgrid::{
    BuildMode, ClassRegistry, Grid, GridConfig, LogSink, RenderContext,
    SpacingLevel, init_logger,
};

#[test]
fn test_file_logger_receives_diagnostics() {
    let path = std::env::temp_dir().join(format!("flexgrid-log-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let path_str = path.to_str().unwrap();

    init_logger(path_str).unwrap();
    assert!(init_logger(path_str).is_err(), "second logger must be rejected");

    let config = GridConfig::new(BuildMode::Development).with_name("demo");
    let mut registry = ClassRegistry::new();
    registry.insert("root", "r");
    let cx = RenderContext::new(&config, &registry);

    let grid = Grid::new()
        .with_item(true)
        .with_spacing(SpacingLevel::new(2).unwrap());
    let mut sink = LogSink::from_config(&config);
    grid.render(&cx, &mut sink);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains(
        "[WARN] flexgrid::validator: [demo] Grid component has spacing=2 and item=true \
         but does not have container=true. Is this expected?"
    ));
    assert!(contents.contains("No class registered for key item"), "{contents}");
    assert!(!contents.contains("[TRACE]"));

    let _ = std::fs::remove_file(&path);
}
