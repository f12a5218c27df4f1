//! PDF rendering backend. Streams the document model onto two A4 pages with
//! the fixed runbook layout: colored title, module table, numbered steps,
//! page break, sign-off checklist.

use crate::domain::model::DocumentModel;
use crate::domain::ports::DocumentRenderer;
use crate::utils::error::{DeployError, Result};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon,
    PolygonMode, Rgb, WindingOrder,
};
use std::io::BufWriter;

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 20.0;

/// Brand accent used for the title and the module table header.
const ACCENT_PRIMARY: &str = "#667eea";
/// Second accent used for the checklist table header.
const ACCENT_SECONDARY: &str = "#764ba2";
/// Body fill of the module table rows.
const BEIGE: &str = "#F5F5DC";
/// Body fill of the checklist rows.
const LIGHT_GREY: &str = "#D3D3D3";

const HEADER_ROW_H: f32 = 10.0;
const BODY_ROW_H: f32 = 9.0;

const MODULE_COLS: [f32; 3] = [85.0, 45.0, 40.0];
const MODULE_HEADER: [&str; 3] = ["Module", "Status", "Responsable"];
const CHECKLIST_COLS: [f32; 4] = [75.0, 25.0, 30.0, 40.0];
const CHECKLIST_HEADER: [&str; 4] = ["Tâche", "Complété", "Date", "Responsable"];

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, model: &DocumentModel) -> Result<Vec<u8>> {
        if model.modules.is_empty() {
            return Err(DeployError::RenderError {
                message: "document model has no module rows".to_string(),
            });
        }
        if model.checklist.is_empty() {
            return Err(DeployError::RenderError {
                message: "document model has no checklist rows".to_string(),
            });
        }

        let (doc, page1, layer1) =
            PdfDocument::new(model.title.as_str(), Mm(PAGE_W), Mm(PAGE_H), "Page 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| DeployError::RenderError { message: e.to_string() })?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| DeployError::RenderError { message: e.to_string() })?;

        let layer = doc.get_page(page1).get_layer(layer1);

        // Title, centered in the brand accent color.
        layer.set_fill_color(hex_color(ACCENT_PRIMARY));
        let title_size = 24.0;
        let title_w = text_width(&model.title, title_size);
        layer.use_text(
            model.title.as_str(),
            title_size,
            Mm((PAGE_W - title_w) / 2.0),
            Mm(268.0),
            &bold,
        );

        // Client info block.
        layer.set_fill_color(black());
        layer.use_text("Informations Client", 16.0, Mm(MARGIN), Mm(250.0), &bold);
        let info_lines = [
            format!("Nom : {}", model.client.name),
            format!("SIRET : {}", model.client.siret),
            format!("Date : {}", model.client.date),
        ];
        let mut y = 241.0;
        for line in &info_lines {
            layer.use_text(line.as_str(), 12.0, Mm(MARGIN), Mm(y), &font);
            y -= 7.0;
        }

        // Module status table.
        layer.use_text("Modules à Déployer", 16.0, Mm(MARGIN), Mm(212.0), &bold);
        let module_rows: Vec<Vec<String>> = model
            .modules
            .iter()
            .map(|row| vec![row.module.clone(), row.status.clone(), row.owner.clone()])
            .collect();
        let table_bottom = draw_table(
            &layer,
            &font,
            &bold,
            205.0,
            &MODULE_COLS,
            &MODULE_HEADER,
            &module_rows,
            hex_color(ACCENT_PRIMARY),
            hex_color(BEIGE),
        );

        // Numbered procedure, plain paragraphs.
        let mut y = table_bottom - 12.0;
        layer.set_fill_color(black());
        layer.use_text("Étapes de Déploiement", 16.0, Mm(MARGIN), Mm(y), &bold);
        y -= 9.0;
        for step in &model.steps {
            layer.use_text(step.as_str(), 11.0, Mm(MARGIN), Mm(y), &font);
            y -= 7.0;
        }

        // Explicit page break before the checklist.
        let (page2, layer2) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Page 2");
        let layer = doc.get_page(page2).get_layer(layer2);

        layer.set_fill_color(black());
        layer.use_text("Checklist de Déploiement", 16.0, Mm(MARGIN), Mm(268.0), &bold);
        let checklist_rows: Vec<Vec<String>> = model
            .checklist
            .iter()
            .map(|row| {
                vec![
                    row.task.clone(),
                    String::new(), // checkbox cell, drawn as an empty square below
                    row.date.clone(),
                    row.owner.clone(),
                ]
            })
            .collect();
        let checklist_top = 258.0;
        draw_table(
            &layer,
            &font,
            &bold,
            checklist_top,
            &CHECKLIST_COLS,
            &CHECKLIST_HEADER,
            &checklist_rows,
            hex_color(ACCENT_SECONDARY),
            hex_color(LIGHT_GREY),
        );
        draw_checkboxes(
            &layer,
            checklist_top - HEADER_ROW_H,
            MARGIN + CHECKLIST_COLS[0],
            CHECKLIST_COLS[1],
            model.checklist.len(),
        );

        let mut bytes = Vec::new();
        {
            let mut writer = BufWriter::new(&mut bytes);
            doc.save(&mut writer)
                .map_err(|e| DeployError::RenderError { message: e.to_string() })?;
        }
        Ok(bytes)
    }
}

/// Draws a bordered table with a filled header row and filled body rows.
/// Returns the y coordinate of the table's bottom edge.
#[allow(clippy::too_many_arguments)]
fn draw_table(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    bold: &IndirectFontRef,
    top: f32,
    cols: &[f32],
    header: &[&str],
    rows: &[Vec<String>],
    header_color: Color,
    body_color: Color,
) -> f32 {
    let table_w: f32 = cols.iter().sum();
    let bottom = top - HEADER_ROW_H - BODY_ROW_H * rows.len() as f32;

    // Fills first, then text, then the grid on top.
    fill_rect(layer, MARGIN, top, table_w, HEADER_ROW_H, header_color);
    fill_rect(
        layer,
        MARGIN,
        top - HEADER_ROW_H,
        table_w,
        BODY_ROW_H * rows.len() as f32,
        body_color,
    );

    layer.set_fill_color(white());
    let mut x = MARGIN;
    for (label, width) in header.iter().zip(cols) {
        layer.use_text(*label, 12.0, Mm(x + 3.0), Mm(top - HEADER_ROW_H + 3.0), bold);
        x += width;
    }

    layer.set_fill_color(black());
    let mut row_top = top - HEADER_ROW_H;
    for row in rows {
        let mut x = MARGIN;
        for (cell, width) in row.iter().zip(cols) {
            if !cell.is_empty() {
                layer.use_text(
                    cell.as_str(),
                    10.0,
                    Mm(x + 3.0),
                    Mm(row_top - BODY_ROW_H + 3.0),
                    font,
                );
            }
            x += width;
        }
        row_top -= BODY_ROW_H;
    }

    layer.set_outline_color(black());
    layer.set_outline_thickness(0.75);
    stroke_line(layer, MARGIN, top, MARGIN + table_w, top);
    stroke_line(
        layer,
        MARGIN,
        top - HEADER_ROW_H,
        MARGIN + table_w,
        top - HEADER_ROW_H,
    );
    let mut row_top = top - HEADER_ROW_H;
    for _ in rows {
        row_top -= BODY_ROW_H;
        stroke_line(layer, MARGIN, row_top, MARGIN + table_w, row_top);
    }
    let mut x = MARGIN;
    stroke_line(layer, x, top, x, bottom);
    for width in cols {
        x += width;
        stroke_line(layer, x, top, x, bottom);
    }

    bottom
}

/// Empty squares in the checklist's "Complété" column, one per row.
fn draw_checkboxes(layer: &PdfLayerReference, body_top: f32, col_x: f32, col_w: f32, rows: usize) {
    layer.set_outline_color(black());
    layer.set_outline_thickness(0.5);
    let side = 4.0;
    let mut row_top = body_top;
    for _ in 0..rows {
        let x = col_x + (col_w - side) / 2.0;
        let y = row_top - (BODY_ROW_H - side) / 2.0;
        stroke_line(layer, x, y, x + side, y);
        stroke_line(layer, x + side, y, x + side, y - side);
        stroke_line(layer, x + side, y - side, x, y - side);
        stroke_line(layer, x, y - side, x, y);
        row_top -= BODY_ROW_H;
    }
}

fn fill_rect(layer: &PdfLayerReference, x: f32, top: f32, w: f32, h: f32, color: Color) {
    layer.set_fill_color(color);
    let ring = vec![
        (Point::new(Mm(x), Mm(top)), false),
        (Point::new(Mm(x + w), Mm(top)), false),
        (Point::new(Mm(x + w), Mm(top - h)), false),
        (Point::new(Mm(x), Mm(top - h)), false),
    ];
    layer.add_polygon(Polygon {
        rings: vec![ring],
        mode: PolygonMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
}

fn stroke_line(layer: &PdfLayerReference, x1: f32, y1: f32, x2: f32, y2: f32) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y1)), false),
            (Point::new(Mm(x2), Mm(y2)), false),
        ],
        is_closed: false,
    });
}

/// Rough Helvetica width estimate, good enough to center a short title.
fn text_width(text: &str, font_size: f32) -> f32 {
    const PT_TO_MM: f32 = 0.352_778;
    text.chars().count() as f32 * font_size * 0.5 * PT_TO_MM
}

fn hex_color(hex: &str) -> Color {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return black();
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).unwrap_or(0) as f32 / 255.0
    };
    Color::Rgb(Rgb::new(channel(0..2), channel(2..4), channel(4..6), None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn white() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}
