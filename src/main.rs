//! Demo driver: runs the full workbench flow against the in-memory page.
//!
//! Loads the sample problem into the form, collects and validates the
//! matrix, renders a results table, exports it as CSV into the configured
//! directory and writes the printable report next to it.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use decision_desk::adapters::fs::DirectoryDownloadSink;
use decision_desk::adapters::memory::{
    CapturingPrintSurface, InMemoryPage, RecordingAnalysisTrigger,
};
use decision_desk::application::{
    DatasetLoader, FeedbackService, MatrixFormBridge, PageBootstrap, ReportPrinter, TableExporter,
};
use decision_desk::config::AppConfig;
use decision_desk::domain::foundation::{
    format_number, FieldKey, GridShape, Key, KeyEvent, RegionId, TableId,
};
use decision_desk::domain::{correlation_color, sample_dataset, Dataset, TableSnapshot};
use decision_desk::ports::{
    AnalysisTrigger, ContentRegions, Download, DownloadSink, FeedbackSurface, FormFields,
    GridBuilder, PrintSurface, Viewport,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = AppConfig::load()?;
    config.validate()?;

    // A self-contained page with a results region and a tooltip target.
    let page = Arc::new(InMemoryPage::new());
    page.insert_region(RegionId::new("analysis-results"), "<p>No analysis yet.</p>");
    page.flag_tooltip(RegionId::new("direction-help"));

    let trigger = Arc::new(RecordingAnalysisTrigger::armed());
    let bootstrap = PageBootstrap::new(
        Arc::clone(&page) as Arc<dyn Viewport>,
        Arc::clone(&trigger) as Arc<dyn AnalysisTrigger>,
    );
    info!(tooltips = bootstrap.on_ready(), "page ready");

    let feedback = FeedbackService::new(
        Arc::clone(&page) as Arc<dyn FeedbackSurface>,
        &config.ui,
    );
    let loader = DatasetLoader::new(
        Arc::clone(&page) as Arc<dyn FormFields>,
        Arc::clone(&page) as Arc<dyn GridBuilder>,
        feedback,
    );
    loader.load_sample()?;
    info!(alerts = page.alerts().len(), "sample loaded");

    // Read the dimensions back from the form and harvest the matrix.
    let shape = GridShape::new(
        count_field(&page, FieldKey::AlternativeCount),
        count_field(&page, FieldKey::CriterionCount),
    );
    let bridge = MatrixFormBridge::new(Arc::clone(&page) as Arc<dyn FormFields>);
    let matrix = bridge.collect(shape);
    info!(%shape, well_formed = matrix.is_well_formed(), "matrix collected");

    // Render the results table the way the page would show it.
    let dataset = sample_dataset();
    let mut rows = vec![header_row(dataset)];
    for (row, name) in dataset.alternatives().iter().enumerate() {
        let mut cells = vec![name.clone()];
        for col in 0..shape.criteria {
            let value = matrix.get(row, col).unwrap_or(0.0);
            cells.push(format_number(value, config.ui.decimal_places));
        }
        rows.push(cells);
    }
    let snapshot = TableSnapshot::from_rows(rows);
    let table = TableId::new("decision-matrix");
    page.insert_table(table.clone(), snapshot.clone());
    page.insert_region(
        RegionId::new("analysis-results"),
        results_markup(&snapshot),
    );
    bootstrap.scroll_to(&RegionId::new("analysis-results"));

    // Export the table as CSV into the output directory.
    let sink = Arc::new(DirectoryDownloadSink::new(&config.export.output_dir));
    let exporter = TableExporter::new(
        Arc::clone(&page) as Arc<dyn ContentRegions>,
        Arc::clone(&sink) as Arc<dyn DownloadSink>,
    );
    let filename = TableExporter::timestamped_filename(&config.export.filename_stem);
    exporter.export_csv(&table, &filename).await?;
    info!(%filename, dir = %config.export.output_dir, "csv exported");

    // Build the printable report and keep a copy on disk.
    let print_surface = Arc::new(CapturingPrintSurface::new());
    let printer = ReportPrinter::new(
        Arc::clone(&page) as Arc<dyn ContentRegions>,
        Arc::clone(&print_surface) as Arc<dyn PrintSurface>,
        &config.ui,
    );
    printer.print_region(&RegionId::new("analysis-results")).await?;
    if let Some(document) = print_surface.documents().first() {
        let report_name = format!("{}-report.html", config.export.filename_stem);
        sink.deliver(Download::new(
            &report_name,
            "text/html; charset=utf-8",
            document.to_html().into_bytes(),
        ))
        .await?;
        info!(filename = %report_name, "report written");
    }

    // The keyboard shortcut drives the same control a click would.
    bootstrap.handle_key(KeyEvent::ctrl(Key::Enter));
    info!(runs = trigger.fire_count(), "analysis triggered");

    Ok(())
}

fn count_field(page: &Arc<InMemoryPage>, key: FieldKey) -> usize {
    page.field_value(key)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

fn header_row(dataset: &Dataset) -> Vec<String> {
    let mut header = vec!["Alternative".to_string()];
    header.extend(
        dataset
            .criteria()
            .iter()
            .zip(dataset.directions())
            .map(|(name, direction)| format!("{name} ({})", direction.label())),
    );
    header
}

fn results_markup(snapshot: &TableSnapshot) -> String {
    let mut html = String::from("<table class=\"table table-bordered\">");
    for row in snapshot.rows() {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table><p>Correlation legend:");
    for value in [0.9, 0.5, 0.0, -0.5, -0.9] {
        html.push_str(&format!(
            " <span style=\"background:{}\">{value}</span>",
            correlation_color(value)
        ));
    }
    html.push_str("</p>");
    html
}
