use async_trait::async_trait;
use card_orbit::card_orbit_core::OrbitError;
use card_orbit::{
    AppConfig, ArrangementKind, DatasetSource, JsonRowsSource, Pipeline, PipelineError, Record,
    SourceError, StaticSource,
};

struct FailingSource;

#[async_trait]
impl DatasetSource for FailingSource {
    fn describe(&self) -> String {
        "always failing".to_string()
    }

    async fn fetch(&self) -> Result<Vec<Record>, SourceError> {
        Err(SourceError::Unavailable("network down".to_string()))
    }
}

fn seeded_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.animation.seed = Some(3);
    config
}

#[tokio::test]
async fn test_bootstrap_then_initial_arrangement() {
    let config = seeded_config();
    let mut boot = Pipeline::run(&config, &StaticSource::placeholders(45), 1_000.0)
        .await
        .unwrap();

    assert_eq!(boot.initial, ArrangementKind::Table);
    assert_eq!(boot.initial_at_ms, 1_500.0);
    assert_eq!(boot.viewport.registry().len(), 45);

    assert!(!boot.start_initial_if_due(1_200.0).unwrap());
    assert!(boot.start_initial_if_due(1_500.0).unwrap());
    assert!(!boot.start_initial_if_due(1_600.0).unwrap());

    let mut now = 1_500.0;
    let mut renders = 0;
    while boot.viewport.engine().is_active() {
        now += 16.0;
        boot.viewport.frame(now, &mut || renders += 1);
    }
    assert!(renders >= 250);
    assert_eq!(
        boot.viewport.registry().poses(),
        boot.viewport.arrangements().get(ArrangementKind::Table)
    );
}

#[tokio::test]
async fn test_failing_source_builds_nothing() {
    let err = Pipeline::run(&seeded_config(), &FailingSource, 0.0)
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::Source(SourceError::Unavailable(_))));
}

#[tokio::test]
async fn test_empty_dataset_is_rejected() {
    let err = Pipeline::run(&seeded_config(), &StaticSource::default(), 0.0)
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::Dataset(OrbitError::EmptyDataset)));
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_fetch() {
    let mut config = seeded_config();
    config.layout.helix_radius = 0.0;
    let err = Pipeline::run(&config, &FailingSource, 0.0).await.unwrap_err();
    assert!(matches!(err, PipelineError::Config(_)));
}

#[tokio::test]
async fn test_oversized_scatter_is_a_config_error() {
    let mut config = seeded_config();
    config.animation.scatter_extent = 1.0e308;
    let err = Pipeline::run(&config, &StaticSource::placeholders(3), 0.0)
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::Config(_)));
}

#[tokio::test]
async fn test_reload_failure_keeps_scene() {
    let mut boot = Pipeline::run(&seeded_config(), &StaticSource::placeholders(8), 0.0)
        .await
        .unwrap();
    let before = boot.viewport.registry().poses();

    assert!(Pipeline::reload(&mut boot.viewport, &FailingSource).await.is_err());
    assert!(Pipeline::reload(&mut boot.viewport, &StaticSource::default())
        .await
        .is_err());
    assert_eq!(boot.viewport.registry().poses(), before);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.json");
    std::fs::write(&path, r#"{"values": [["a"], ["b"], ["c"]]}"#).unwrap();
    let count = Pipeline::reload(&mut boot.viewport, &JsonRowsSource::new(&path))
        .await
        .unwrap();
    assert_eq!(count, 3);
    assert_eq!(boot.viewport.arrangements().len(), 3);
}
