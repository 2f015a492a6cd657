//! Integration tests for the workbench presentation flow.
//!
//! These tests drive the full path a user takes:
//! 1. Page bootstrap wires tooltips and the keyboard shortcut
//! 2. The sample dataset loads into the form (dimensions, grid, values)
//! 3. The matrix is harvested back and validated
//! 4. A results table renders, exports as CSV and prints as a report
//!
//! Everything runs against the in-memory adapters; no page host needed.

use std::sync::Arc;
use std::time::Duration;

use decision_desk::adapters::memory::{
    CapturingDownloadSink, CapturingPrintSurface, InMemoryPage, RecordingAnalysisTrigger,
};
use decision_desk::application::{
    DatasetLoader, FeedbackService, MatrixFormBridge, PageBootstrap, ReportPrinter, TableExporter,
};
use decision_desk::config::UiConfig;
use decision_desk::domain::foundation::{
    format_number, AlertSeverity, FieldKey, GridShape, Key, KeyEvent, RegionId, TableId,
};
use decision_desk::domain::{sample_dataset, TableSnapshot};
use decision_desk::ports::{
    AnalysisTrigger, ContentRegions, DownloadSink, FeedbackSurface, FormFields, GridBuilder,
    PrintSurface, Viewport, CSV_CONTENT_TYPE,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// The full service stack wired over one in-memory page.
struct Workbench {
    page: Arc<InMemoryPage>,
    trigger: Arc<RecordingAnalysisTrigger>,
    sink: Arc<CapturingDownloadSink>,
    print_surface: Arc<CapturingPrintSurface>,
    bootstrap: PageBootstrap,
    loader: DatasetLoader,
    bridge: MatrixFormBridge,
    exporter: TableExporter,
    printer: ReportPrinter,
}

impl Workbench {
    fn new() -> Self {
        let ui = UiConfig::default();
        let page = Arc::new(InMemoryPage::new());
        let trigger = Arc::new(RecordingAnalysisTrigger::armed());
        let sink = Arc::new(CapturingDownloadSink::new());
        let print_surface = Arc::new(CapturingPrintSurface::new());

        let bootstrap = PageBootstrap::new(
            Arc::clone(&page) as Arc<dyn Viewport>,
            Arc::clone(&trigger) as Arc<dyn AnalysisTrigger>,
        );
        let feedback = FeedbackService::new(
            Arc::clone(&page) as Arc<dyn FeedbackSurface>,
            &ui,
        );
        let loader = DatasetLoader::new(
            Arc::clone(&page) as Arc<dyn FormFields>,
            Arc::clone(&page) as Arc<dyn GridBuilder>,
            feedback,
        );
        let bridge = MatrixFormBridge::new(Arc::clone(&page) as Arc<dyn FormFields>);
        let exporter = TableExporter::new(
            Arc::clone(&page) as Arc<dyn ContentRegions>,
            Arc::clone(&sink) as Arc<dyn DownloadSink>,
        );
        let printer = ReportPrinter::new(
            Arc::clone(&page) as Arc<dyn ContentRegions>,
            Arc::clone(&print_surface) as Arc<dyn PrintSurface>,
            &ui,
        );

        Self {
            page,
            trigger,
            sink,
            print_surface,
            bootstrap,
            loader,
            bridge,
            exporter,
            printer,
        }
    }

    /// Shape currently declared by the form's dimension fields.
    fn declared_shape(&self) -> GridShape {
        let count = |key| {
            self.page
                .field_value(key)
                .and_then(|value| value.parse().ok())
                .unwrap_or(0)
        };
        GridShape::new(
            count(FieldKey::AlternativeCount),
            count(FieldKey::CriterionCount),
        )
    }

    /// Renders the loaded sample the way the results page would.
    fn render_results_table(&self) -> TableSnapshot {
        let dataset = sample_dataset();
        let matrix = self.bridge.collect(self.declared_shape());

        let mut header = vec!["Alternative".to_string()];
        header.extend(dataset.criteria().iter().cloned());
        let mut rows = vec![header];
        for (row, name) in dataset.alternatives().iter().enumerate() {
            let mut cells = vec![name.clone()];
            for col in 0..dataset.criteria().len() {
                cells.push(format_number(matrix.get(row, col).unwrap_or(0.0), 4));
            }
            rows.push(cells);
        }
        TableSnapshot::from_rows(rows)
    }
}

// =============================================================================
// Flow Tests
// =============================================================================

#[tokio::test]
async fn sample_load_round_trips_through_the_form() {
    let workbench = Workbench::new();

    workbench.loader.load_sample().unwrap();

    // The form declares the sample's dimensions and the harvested matrix
    // equals the one that was loaded.
    let shape = workbench.declared_shape();
    assert_eq!(shape, GridShape::new(5, 4));
    let harvested = workbench.bridge.collect(shape);
    assert_eq!(&harvested, sample_dataset().matrix());
    assert!(harvested.is_well_formed());
    assert!(harvested.is_rectangular());
}

#[tokio::test]
async fn results_table_exports_as_quoted_csv() {
    let workbench = Workbench::new();
    workbench.loader.load_sample().unwrap();

    let table = TableId::new("decision-matrix");
    workbench
        .page
        .insert_table(table.clone(), workbench.render_results_table());

    let exported = workbench
        .exporter
        .export_csv(&table, "decision-matrix.csv")
        .await
        .unwrap();
    assert!(exported);

    let download = workbench.sink.last().unwrap();
    assert_eq!(download.filename, "decision-matrix.csv");
    assert_eq!(download.content_type, CSV_CONTENT_TYPE);

    let csv = download.as_text().unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("\"Alternative\",\"Price\",\"Quality\",\"Durability\",\"Warranty\"")
    );
    assert_eq!(
        lines.next(),
        Some("\"A1\",\"5000.0000\",\"8.0000\",\"7.0000\",\"2.0000\"")
    );
    assert_eq!(csv.lines().count(), 6);
}

#[tokio::test]
async fn captured_results_print_as_a_standalone_report() {
    let workbench = Workbench::new();
    workbench.loader.load_sample().unwrap();
    workbench.page.insert_region(
        RegionId::new("analysis-results"),
        "<table><tr><td>A1</td></tr></table>",
    );

    let printed = workbench
        .printer
        .print_region(&RegionId::new("analysis-results"))
        .await
        .unwrap();
    assert!(printed);

    let documents = workbench.print_surface.documents();
    assert_eq!(documents.len(), 1);
    let html = documents[0].to_html();
    assert!(html.contains("<h1>Decision Support System - Analysis Report</h1>"));
    assert!(html.contains("<table><tr><td>A1</td></tr></table>"));
}

#[tokio::test(start_paused = true)]
async fn load_confirmation_alert_dismisses_itself() {
    let workbench = Workbench::new();
    workbench.loader.load_sample().unwrap();

    let alerts = workbench.page.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::Success);

    tokio::time::sleep(Duration::from_millis(5001)).await;
    assert!(workbench.page.alerts().is_empty());
}

#[tokio::test]
async fn bootstrap_wires_tooltips_and_the_shortcut() {
    let workbench = Workbench::new();
    workbench.page.flag_tooltip(RegionId::new("direction-help"));

    assert_eq!(workbench.bootstrap.on_ready(), 1);

    assert!(workbench.bootstrap.handle_key(KeyEvent::ctrl(Key::Enter)));
    assert!(!workbench.bootstrap.handle_key(KeyEvent::plain(Key::Enter)));
    assert_eq!(workbench.trigger.fire_count(), 1);
}

#[tokio::test]
async fn importing_a_table_replaces_the_loaded_sample() {
    let workbench = Workbench::new();
    workbench.loader.load_sample().unwrap();

    let text = ",min,max\nAlternative,Weight,Power\nB1,12,90\nB2,9,70\nB3,15,95";
    workbench.loader.import_table(text).unwrap();

    let shape = workbench.declared_shape();
    assert_eq!(shape, GridShape::new(3, 2));
    assert_eq!(
        workbench.page.field(FieldKey::CriterionName(0)),
        Some("Weight".into())
    );
    assert_eq!(
        workbench.page.field(FieldKey::CriterionDirection(0)),
        Some("min".into())
    );

    // The old 5x4 grid is gone; its cells no longer exist.
    assert_eq!(
        workbench.page.field(FieldKey::MatrixCell { row: 4, col: 3 }),
        None
    );
    let harvested = workbench.bridge.collect(shape);
    assert_eq!(
        harvested.rows(),
        [vec![12.0, 90.0], vec![9.0, 70.0], vec![15.0, 95.0]]
    );

    // Import confirmation stacks above the earlier sample confirmation.
    let messages = workbench.page.alert_messages();
    assert_eq!(messages[0], "Imported 3 alternatives across 2 criteria");
    assert_eq!(messages[1], "Sample data loaded!");
}
