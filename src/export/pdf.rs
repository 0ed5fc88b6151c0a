//! PDF rendering of a weekly plan.
//!
//! The document is written to a temporary file, read back into memory and the
//! file is removed when the handle drops, whichever way rendering exits.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use printpdf::*;
use tracing::{debug, info, warn};

use crate::error::{PlannerError, Result};
use crate::models::{Labeled, Notice, NutritionTargets, UserProfile, WeeklyPlan};

pub const DOCUMENT_TITLE: &str = "Personalized 7-Day Indian Diet Planner";
pub const DOCUMENT_SUBTITLE: &str = "Your weekly meal plan";

// A4 portrait, millimetres.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 10.0;
const MARGIN_TOP: f32 = 10.0;
const MARGIN_BOTTOM: f32 = 15.0;

const LOGO_WIDTH: f32 = 50.0;
const LINE_HEIGHT: f32 = 10.0;
const ROW_HEIGHT: f32 = 10.0;

/// Day, Meal and Food column widths.
const COLUMN_WIDTHS: [f32; 3] = [35.0, 35.0, 120.0];
const COLUMN_HEADERS: [&str; 3] = ["Day", "Meal", "Food"];

/// Baseline offset inside a table cell.
const CELL_TEXT_INSET_X: f32 = 2.0;
const CELL_TEXT_INSET_Y: f32 = 6.5;

const TITLE_SIZE: f32 = 16.0;
const SUBTITLE_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 11.0;

/// Everything that goes into the exported document.
#[derive(Debug, Clone, Copy)]
pub struct PlanReport<'a> {
    pub profile: &'a UserProfile,
    pub targets: &'a NutritionTargets,
    pub plan: &'a WeeklyPlan,
}

impl PlanReport<'_> {
    /// Summary line with daily calories and macro grams.
    pub fn calories_line(&self) -> String {
        let m = &self.targets.macros;
        format!(
            "Calories: {} kcal | Protein: {} g | Fat: {} g | Carbs: {} g",
            self.targets.calories_kcal(),
            m.protein_g,
            m.fat_g,
            m.carbs_g
        )
    }

    pub fn bmi_line(&self) -> String {
        format!(
            "BMI: {:.2} ({})",
            self.targets.bmi,
            self.targets.bmi_category.label()
        )
    }

    pub fn identity_line(&self) -> String {
        format!("Name: {}    City: {}", self.profile.name, self.profile.city)
    }

    /// Table cells for every plan row; repeated days collapse to "-".
    pub fn table_rows(&self) -> Vec<[String; 3]> {
        self.plan
            .entries
            .iter()
            .map(|e| {
                let day = match e.day_label() {
                    "" => "-".to_string(),
                    label => label.to_string(),
                };
                [day, e.slot.label().to_string(), e.food()]
            })
            .collect()
    }
}

/// A rendered document held in memory.
#[derive(Debug, Clone)]
pub struct PdfArtifact {
    pub bytes: Vec<u8>,
    pub notices: Vec<Notice>,
}

fn pdf_err(e: impl std::fmt::Display) -> PlannerError {
    PlannerError::Pdf(e.to_string())
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

/// Tracks the current page layer and vertical cursor (distance from the bottom).
struct Cursor {
    layer: PdfLayerReference,
    y: f32,
    pages: usize,
}

impl Cursor {
    fn new_page(&mut self, doc: &PdfDocumentReference) {
        self.pages += 1;
        let (page, layer) = doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Layer {}", self.pages),
        );
        self.layer = doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN_TOP;
    }

    fn text(&self, text: &str, x: f32, size: f32, font: &IndirectFontRef) {
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }
}

fn cell_border(layer: &PdfLayerReference, x: f32, top: f32, width: f32, height: f32) {
    let corners = [
        (x, top),
        (x + width, top),
        (x + width, top - height),
        (x, top - height),
    ];
    let line = Line {
        points: corners
            .iter()
            .map(|&(px, py)| (Point::new(Mm(px), Mm(py)), false))
            .collect(),
        is_closed: true,
    };
    layer.add_line(line);
}

fn table_row(cursor: &Cursor, cells: &[String; 3], font: &IndirectFontRef) {
    let top = cursor.y;
    let mut x = MARGIN_LEFT;
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        cell_border(&cursor.layer, x, top, width, ROW_HEIGHT);
        cursor.layer.use_text(
            cell.as_str(),
            BODY_SIZE,
            Mm(x + CELL_TEXT_INSET_X),
            Mm(top - CELL_TEXT_INSET_Y),
            font,
        );
        x += width;
    }
}

fn header_row() -> [String; 3] {
    COLUMN_HEADERS.map(str::to_string)
}

/// Place the logo centred at the top of the first page.
///
/// Returns the height it occupies, or `None` if the file does not exist.
fn draw_logo(layer: &PdfLayerReference, path: &Path, top: f32) -> Result<Option<f32>> {
    if !path.exists() {
        return Ok(None);
    }

    let image = printpdf::image_crate::open(path).map_err(pdf_err)?;
    let (width_px, height_px) = (image.width() as f32, image.height() as f32);
    if width_px == 0.0 {
        return Ok(None);
    }

    // Scale so the logo is LOGO_WIDTH mm wide.
    let dpi = width_px * 25.4 / LOGO_WIDTH;
    let height_mm = height_px * 25.4 / dpi;

    Image::from_dynamic_image(&image).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm((PAGE_WIDTH - LOGO_WIDTH) / 2.0)),
            translate_y: Some(Mm(top - height_mm)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
    Ok(Some(height_mm))
}

fn build_document(
    report: &PlanReport<'_>,
    logo: Option<&Path>,
) -> Result<(PdfDocumentReference, Vec<Notice>)> {
    let mut notices = Vec::new();

    let (doc, page, layer) =
        PdfDocument::new(DOCUMENT_TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_err)?,
        italic: doc.add_builtin_font(BuiltinFont::HelveticaOblique).map_err(pdf_err)?,
    };

    let mut cursor = Cursor {
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT - MARGIN_TOP,
        pages: 1,
    };

    if let Some(path) = logo {
        match draw_logo(&cursor.layer, path, cursor.y)? {
            Some(height) => cursor.y -= height + LINE_HEIGHT / 2.0,
            None => {
                warn!(path = %path.display(), "logo not found, skipping");
                notices.push(Notice::MissingAsset(path.to_path_buf()));
            }
        }
    }

    // Title block
    cursor.y -= LINE_HEIGHT;
    cursor.text(DOCUMENT_TITLE, MARGIN_LEFT, TITLE_SIZE, &fonts.bold);
    cursor.y -= LINE_HEIGHT;
    cursor.text(DOCUMENT_SUBTITLE, MARGIN_LEFT, SUBTITLE_SIZE, &fonts.italic);
    cursor.y -= LINE_HEIGHT * 1.5;

    // Summary
    for line in [report.identity_line(), report.calories_line(), report.bmi_line()] {
        cursor.text(&line, MARGIN_LEFT, BODY_SIZE, &fonts.regular);
        cursor.y -= LINE_HEIGHT;
    }

    // Plan table; the header repeats on every page it spans.
    table_row(&cursor, &header_row(), &fonts.bold);
    cursor.y -= ROW_HEIGHT;
    for row in report.table_rows() {
        if cursor.y - ROW_HEIGHT < MARGIN_BOTTOM {
            cursor.new_page(&doc);
            table_row(&cursor, &header_row(), &fonts.bold);
            cursor.y -= ROW_HEIGHT;
        }
        table_row(&cursor, &row, &fonts.regular);
        cursor.y -= ROW_HEIGHT;
    }

    debug!(pages = cursor.pages, rows = report.plan.len(), "laid out plan document");
    Ok((doc, notices))
}

/// Render the plan document into memory.
pub fn render_pdf(report: &PlanReport<'_>, logo: Option<&Path>) -> Result<PdfArtifact> {
    render_pdf_in(report, logo, &std::env::temp_dir())
}

/// Like [`render_pdf`], with the temporary file created inside `dir`.
pub fn render_pdf_in(
    report: &PlanReport<'_>,
    logo: Option<&Path>,
    dir: &Path,
) -> Result<PdfArtifact> {
    // Created before layout so a failed render still goes through the drop.
    let mut tmp = tempfile::Builder::new()
        .prefix("diet_plan_")
        .suffix(".pdf")
        .tempfile_in(dir)?;
    debug!(path = %tmp.path().display(), "rendering into temp file");

    let (doc, notices) = build_document(report, logo)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        doc.save(&mut writer).map_err(pdf_err)?;
        writer.flush()?;
    }
    let bytes = fs::read(tmp.path())?;

    Ok(PdfArtifact { bytes, notices })
}

/// Write a rendered document to `path`, creating parent directories.
pub fn write_pdf<P: AsRef<Path>>(path: P, artifact: &PdfArtifact) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &artifact.bytes)?;
    info!(path = %path.display(), bytes = artifact.bytes.len(), "wrote PDF");
    Ok(())
}
