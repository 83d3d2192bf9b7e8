use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Small PDF builder used by receipts and by the sales export.
///
/// Two drawing modes share the same document:
/// - flow mode (`text_line`, `cell_row`, `gap`) keeps a cursor that moves
///   down the page, opening a new page when the bottom margin is reached;
/// - `write_table` lays out a paginated, zebra-striped table.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,
    content: Option<Content>,
    cursor_y: f32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Type1 standard fonts only cover a Latin charset; anything else
/// becomes '?'.
fn pdf_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect()
}

/// Rough Helvetica advance width: good enough for centering and
/// right-aligning short labels.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.52
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"));

        let page_h = 842.0;
        let margin = 50.0;

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,
            content: None,
            cursor_y: page_h - margin,

            page_w: 595.0,
            page_h,
            margin,
            row_h: 20.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 14.0,
        }
    }

    /// Usable width between the side margins.
    pub fn content_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Creates a new page object and returns an empty content stream for it.
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources()
            .fonts()
            .pair(FONT_REGULAR, self.font_id)
            .pair(FONT_BOLD, self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(content: &mut Content, font: Name, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&pdf_text(text)));
        content.end_text();
    }

    fn aligned_x(x: f32, w: f32, size: f32, text: &str, align: Align) -> f32 {
        match align {
            Align::Left => x + 4.0,
            Align::Center => x + (w - text_width(text, size)) / 2.0,
            Align::Right => x + w - 4.0 - text_width(text, size),
        }
    }

    fn draw_cell_borders(content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    // ---------------------------
    // flow mode
    // ---------------------------

    /// Make sure `needed` points fit below the cursor, opening a page if not.
    fn ensure_space(&mut self, needed: f32) {
        if self.content.is_some() && self.cursor_y - needed >= self.margin {
            return;
        }

        if let Some(content) = self.content.take() {
            self.finalize_page(content);
        }
        let content = self.new_page();
        self.content = Some(content);
        self.cursor_y = self.page_h - self.margin;
    }

    /// Move the cursor down by `h` points.
    pub fn gap(&mut self, h: f32) {
        self.cursor_y -= h;
    }

    /// A single line of text spanning the content width.
    pub fn text_line(
        &mut self,
        text: &str,
        size: f32,
        bold: bool,
        align: Align,
        rgb: (f32, f32, f32),
    ) {
        let line_h = size + 6.0;
        self.ensure_space(line_h);
        self.cursor_y -= line_h;

        let x = Self::aligned_x(self.margin, self.content_width(), size, text, align);
        let y = self.cursor_y + 4.0;
        let font = if bold { FONT_BOLD } else { FONT_REGULAR };

        if let Some(content) = self.content.as_mut() {
            content.save_state();
            content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
            Self::draw_text(content, font, x, y, size, text);
            content.restore_state();
        }
    }

    /// One row of cells. `fill` paints the background, `border` strokes
    /// each cell.
    pub fn cell_row(
        &mut self,
        cells: &[(&str, f32, Align)],
        size: f32,
        bold: bool,
        border: bool,
        fill: Option<(f32, f32, f32)>,
    ) {
        let h = self.row_h;
        self.ensure_space(h);
        self.cursor_y -= h;

        let y = self.cursor_y;
        let total_w: f32 = cells.iter().map(|(_, w, _)| *w).sum();
        let font = if bold { FONT_BOLD } else { FONT_REGULAR };
        let margin = self.margin;

        if let Some(content) = self.content.as_mut() {
            if let Some((r, g, b)) = fill {
                content.save_state();
                content.set_fill_rgb(r, g, b);
                content.rect(margin, y, total_w, h);
                content.fill_nonzero();
                content.restore_state();
            }

            let mut x = margin;
            for (text, w, align) in cells {
                let tx = Self::aligned_x(x, *w, size, text, *align);
                Self::draw_text(content, font, tx, y + 6.0, size, text);
                if border {
                    Self::draw_cell_borders(content, x, y, *w, h);
                }
                x += w;
            }
        }
    }

    // ---------------------------
    // table mode
    // ---------------------------

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
    ) {
        let mut x = self.margin;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            Self::draw_text(content, FONT_REGULAR, x + 4.0, y + 5.0, font_size, text);
            Self::draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header and content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = (cell.len() as f32 * 6.2).max(widths[i]);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.content_width();

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        Self::draw_text(
            content,
            FONT_BOLD,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {}", page);
        Self::draw_text(
            content,
            FONT_REGULAR,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &pg,
        );
    }

    fn draw_header_band(&self, content: &mut Content, y: f32, col_widths: &[f32]) {
        content.save_state();
        content.set_fill_rgb(0.85, 0.87, 0.90);
        content.rect(self.margin, y, col_widths.iter().sum(), self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Multi-page table with a title; an empty `rows` still yields one
    /// page carrying the header. The cursor ends below the last row.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        if let Some(content) = self.content.take() {
            self.finalize_page(content);
        }

        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, title, page_idx);

            let mut y = self.page_h - self.margin - 30.0;

            self.draw_header_band(&mut content, y, &col_widths);
            self.draw_row(&mut content, y, &col_widths, &header_row, self.header_font_size);
            y -= self.row_h;

            let mut consumed = 0;

            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }

                // zebra stripe
                if i % 2 == 0 {
                    content.save_state();
                    content.set_fill_rgb(0.96, 0.96, 0.96);
                    content.rect(self.margin, y, col_widths.iter().sum(), self.row_h);
                    content.fill_nonzero();
                    content.restore_state();
                }

                self.draw_row(&mut content, y, &col_widths, row, self.font_size);

                y -= self.row_h;
                consumed += 1;
            }

            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() {
                // leave the last page open for flow-mode text below the table
                self.content = Some(content);
                self.cursor_y = y + self.row_h;
                break;
            }
            self.finalize_page(content);
        }
    }

    /// Serialize the document.
    pub fn finish(mut self) -> Vec<u8> {
        if let Some(content) = self.content.take() {
            self.finalize_page(content);
        }
        if self.page_refs.is_empty() {
            let content = self.new_page();
            self.finalize_page(content);
        }

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
