//! Exportación del reporte de emisiones en PDF
//!
//! Una región del dashboard se captura como líneas de texto, se reparte en
//! páginas A4 y se añade un pie con el mes y la fecha de generación. Los
//! fallos se registran y la exportación se aborta sin propagar el error.

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rgb};
use regex::Regex;
use thiserror::Error;
use tracing::{error, info};

use crate::models::report::ReportData;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const FOOTER_OFFSET_MM: f32 = 10.0;
const FOOTER_FONT_PT: f32 = 10.0;
const PT_TO_MM: f32 = 0.3528;

/// Alto útil de cada página entre el margen superior y la zona del pie
pub const PAGE_BODY_HEIGHT_MM: f32 = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM;

pub const DEFAULT_REGION: &str = "carbon-report";

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("static whitespace regex");
    static ref UNSAFE_FILENAME: Regex =
        Regex::new(r#"[^!-~]|["\\]"#).expect("static filename regex");
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Region with id \"{0}\" not found")]
    RegionNotFound(String),

    #[error("Capture failed: {0}")]
    Capture(String),

    #[error("PDF render failed: {0}")]
    Render(String),
}

/// Regiones del dashboard que se pueden exportar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRegion {
    /// Resumen completo por scope con su peso sobre el total
    CarbonReport,
    /// Tabla compacta con los tres scopes y el total
    EmissionsSummary,
}

impl ReportRegion {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "carbon-report" => Some(Self::CarbonReport),
            "emissions-summary" => Some(Self::EmissionsSummary),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::CarbonReport => "carbon-report",
            Self::EmissionsSummary => "emissions-summary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Heading,
    Body,
    Spacer,
}

impl LineStyle {
    fn font_size(&self) -> f32 {
        match self {
            Self::Title => 20.0,
            Self::Heading => 14.0,
            Self::Body => 11.0,
            Self::Spacer => 0.0,
        }
    }

    /// Alto que ocupa la línea en la página, en mm
    pub fn height_mm(&self) -> f32 {
        match self {
            Self::Title => 14.0,
            Self::Heading => 10.0,
            Self::Body => 7.0,
            Self::Spacer => 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub text: String,
    pub style: LineStyle,
}

impl ReportLine {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn spacer() -> Self {
        Self::new(LineStyle::Spacer, "")
    }
}

/// Documento listo para descargar
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub filename: String,
    pub pages: usize,
    pub bytes: Vec<u8>,
}

/// `Carbon_Report_<mes>.pdf`, cada tramo de espacios pasa a `_`.
///
/// Solo queda ASCII visible sin comillas ni `\`, el nombre va tal cual
/// dentro de `Content-Disposition`.
pub fn report_filename(month: &str) -> String {
    let month = WHITESPACE.replace_all(month, "_");
    format!("Carbon_Report_{}.pdf", UNSAFE_FILENAME.replace_all(&month, ""))
}

pub fn footer_text(month: &str, generated_on: NaiveDate) -> String {
    format!(
        "CarbonBNU Emission Report - {} | Generated on {}/{}/{}",
        month,
        generated_on.month(),
        generated_on.day(),
        generated_on.year()
    )
}

fn kg(value: f64) -> String {
    format!("{:.2} kg CO2e", value)
}

fn share(part: f64, total: f64) -> String {
    if total == 0.0 {
        "n/a".to_string()
    } else {
        format!("{:.1}%", part / total * 100.0)
    }
}

/// Capturar la región como líneas de texto
pub fn capture(region: ReportRegion, data: &ReportData) -> Result<Vec<ReportLine>, ExportError> {
    let fields = [
        ("totalEmissions", data.total_emissions),
        ("scope1", data.scope1),
        ("scope2", data.scope2),
        ("scope3", data.scope3),
    ];
    if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
        return Err(ExportError::Capture(format!(
            "field '{}' is not a finite number",
            name
        )));
    }

    let lines = match region {
        ReportRegion::CarbonReport => carbon_report_lines(data),
        ReportRegion::EmissionsSummary => summary_lines(data),
    };

    if lines.iter().all(|l| l.style == LineStyle::Spacer) {
        return Err(ExportError::Capture(format!(
            "region '{}' rendered no content",
            region.id()
        )));
    }
    Ok(lines)
}

fn carbon_report_lines(data: &ReportData) -> Vec<ReportLine> {
    let total = data.total_emissions;
    let mut lines = vec![
        ReportLine::new(LineStyle::Title, "Carbon Emissions Report"),
        ReportLine::new(LineStyle::Body, format!("Reporting month: {}", data.month)),
        ReportLine::spacer(),
        ReportLine::new(LineStyle::Heading, "Scope 1 - Direct emissions"),
        ReportLine::new(
            LineStyle::Body,
            format!("Fuel and vehicle combustion: {}", kg(data.scope1)),
        ),
        ReportLine::new(LineStyle::Body, format!("Share of total: {}", share(data.scope1, total))),
        ReportLine::spacer(),
        ReportLine::new(LineStyle::Heading, "Scope 2 - Purchased electricity"),
        ReportLine::new(
            LineStyle::Body,
            format!("Grid electricity net of solar offset: {}", kg(data.scope2)),
        ),
        ReportLine::new(LineStyle::Body, format!("Share of total: {}", share(data.scope2, total))),
    ];

    if data.scope2 < 0.0 {
        lines.push(ReportLine::new(
            LineStyle::Body,
            "Solar generation exceeds grid consumption (net negative).",
        ));
    }

    lines.extend([
        ReportLine::spacer(),
        ReportLine::new(LineStyle::Heading, "Scope 3 - Waste disposal"),
        ReportLine::new(LineStyle::Body, format!("Waste streams: {}", kg(data.scope3))),
        ReportLine::new(LineStyle::Body, format!("Share of total: {}", share(data.scope3, total))),
        ReportLine::spacer(),
        ReportLine::new(LineStyle::Heading, "Total emissions"),
        ReportLine::new(LineStyle::Body, kg(total)),
        ReportLine::new(
            LineStyle::Body,
            format!("{:.3} t CO2e", total / 1000.0),
        ),
    ]);
    lines
}

fn summary_lines(data: &ReportData) -> Vec<ReportLine> {
    vec![
        ReportLine::new(LineStyle::Heading, format!("Emissions summary - {}", data.month)),
        ReportLine::new(LineStyle::Body, format!("Scope 1: {}", kg(data.scope1))),
        ReportLine::new(LineStyle::Body, format!("Scope 2: {}", kg(data.scope2))),
        ReportLine::new(LineStyle::Body, format!("Scope 3: {}", kg(data.scope3))),
        ReportLine::new(LineStyle::Body, format!("Total: {}", kg(data.total_emissions))),
    ]
}

/// Repartir las líneas en páginas de `body_height_mm` de alto
pub fn paginate(lines: &[ReportLine], body_height_mm: f32) -> Vec<Vec<ReportLine>> {
    let mut pages = vec![Vec::new()];
    let mut used = 0.0_f32;

    for line in lines {
        let height = line.style.height_mm();
        let current_is_empty = pages.last().map_or(true, |p| p.is_empty());
        if used + height > body_height_mm && !current_is_empty {
            pages.push(Vec::new());
            used = 0.0;
        }
        if let Some(page) = pages.last_mut() {
            page.push(line.clone());
        }
        used += height;
    }
    pages
}

fn centered_x(text: &str, font_size_pt: f32) -> f32 {
    // Helvetica: ancho medio de glifo ~0.5 em
    let width = text.chars().count() as f32 * font_size_pt * 0.5 * PT_TO_MM;
    ((PAGE_WIDTH_MM - width) / 2.0).max(0.0)
}

fn draw_page(
    layer: &PdfLayerReference,
    lines: &[ReportLine],
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    let mut cursor = PAGE_HEIGHT_MM - MARGIN_MM;
    for line in lines {
        cursor -= line.style.height_mm();
        match line.style {
            LineStyle::Spacer => {}
            LineStyle::Title | LineStyle::Heading => {
                layer.use_text(
                    line.text.clone(),
                    line.style.font_size(),
                    Mm(MARGIN_MM),
                    Mm(cursor),
                    bold,
                );
            }
            LineStyle::Body => {
                layer.use_text(
                    line.text.clone(),
                    line.style.font_size(),
                    Mm(MARGIN_MM),
                    Mm(cursor),
                    regular,
                );
            }
        }
    }
}

fn render_error(e: impl std::fmt::Display) -> ExportError {
    ExportError::Render(e.to_string())
}

/// Generar el PDF; el pie va en la última página
pub fn render_pdf(pages: &[Vec<ReportLine>], footer: &str) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Carbon Emissions Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(render_error)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(render_error)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    for (index, lines) in pages.iter().enumerate() {
        if index > 0 {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
        }
        draw_page(&layer, lines, &regular, &bold);
    }

    layer.set_fill_color(Color::Rgb(Rgb::new(120.0 / 255.0, 120.0 / 255.0, 120.0 / 255.0, None)));
    layer.use_text(
        footer,
        FOOTER_FONT_PT,
        Mm(centered_x(footer, FOOTER_FONT_PT)),
        Mm(FOOTER_OFFSET_MM),
        &regular,
    );

    doc.save_to_bytes().map_err(render_error)
}

/// Exportar sin capturar el error
pub fn try_export(
    region_id: &str,
    data: &ReportData,
    generated_on: NaiveDate,
) -> Result<ReportDocument, ExportError> {
    let region = ReportRegion::from_id(region_id)
        .ok_or_else(|| ExportError::RegionNotFound(region_id.to_string()))?;

    let lines = capture(region, data)?;
    let pages = paginate(&lines, PAGE_BODY_HEIGHT_MM);
    let footer = footer_text(&data.month, generated_on);
    let bytes = render_pdf(&pages, &footer)?;

    Ok(ReportDocument {
        filename: report_filename(&data.month),
        pages: pages.len(),
        bytes,
    })
}

/// Exportar el reporte de una región. Los errores se registran y se
/// devuelve `None`.
pub fn export_carbon_report(
    region_id: &str,
    data: &ReportData,
    generated_on: NaiveDate,
) -> Option<ReportDocument> {
    match try_export(region_id, data, generated_on) {
        Ok(document) => {
            info!(
                "✅ Reporte guardado como {} ({} páginas, {} bytes)",
                document.filename,
                document.pages,
                document.bytes.len()
            );
            Some(document)
        }
        Err(ExportError::RegionNotFound(id)) => {
            error!("❌ Región con id \"{}\" no encontrada", id);
            None
        }
        Err(e) => {
            error!("⚠️ Error exportando el reporte: {}", e);
            None
        }
    }
}
