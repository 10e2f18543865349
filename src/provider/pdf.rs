//! PDF page text via lopdf content streams.
//!
//! Each BT/ET text object becomes one block; a new line starts whenever the
//! text position moves vertically. Positions are converted from PDF user
//! space (origin bottom-left) to top-down page coordinates so that `y0`
//! grows down the page, matching page-dump input.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId, Stream};

use super::{page_out_of_range, PageTextProvider};
use crate::error::{Error, Result};
use crate::model::{PageText, RawSpan, TextBlock, TextLine};

const DEFAULT_PAGE_SIZE: (f32, f32) = (612.0, 792.0);
const DEFAULT_LEADING: f32 = 12.0;
/// Approximate ascent and average glyph width as fractions of the font size.
const ASCENT: f32 = 0.8;
const GLYPH_WIDTH: f32 = 0.5;
/// TJ adjustments (thousandths of an em) wider than this become spaces.
const SPACE_THRESHOLD: f32 = 200.0;
/// Maximum Parent hops when resolving inherited page attributes.
const MAX_INHERIT_DEPTH: usize = 32;

/// Page-text provider over a PDF document.
pub struct PdfProvider {
    doc: LopdfDocument,
    page_ids: Vec<ObjectId>,
}

impl PdfProvider {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = LopdfDocument::load(path)?;
        Self::from_document(doc)
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Self::from_document(doc)
    }

    /// Encrypted documents are opened with the empty user password or rejected.
    fn from_document(mut doc: LopdfDocument) -> Result<Self> {
        if doc.is_encrypted() {
            if let Err(e) = doc.decrypt("") {
                log::warn!("Cannot decrypt document: {}", e);
                return Err(Error::Encrypted);
            }
            log::debug!("Decrypted document with empty user password");
        }
        let page_ids = doc.get_pages().into_values().collect();
        Ok(Self { doc, page_ids })
    }

    /// PDF version from the file header.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Page width and height from the (possibly inherited) MediaBox.
    fn page_size(&self, page_id: ObjectId) -> (f32, f32) {
        let mut current = self.doc.get_dictionary(page_id).ok();
        for _ in 0..MAX_INHERIT_DEPTH {
            let Some(dict) = current else { break };
            if let Some(size) = dict
                .get(b"MediaBox")
                .ok()
                .and_then(|obj| self.resolve(obj))
                .and_then(media_box_size)
            {
                return size;
            }
            current = dict
                .get(b"Parent")
                .and_then(Object::as_reference)
                .and_then(|id| self.doc.get_dictionary(id))
                .ok();
        }
        DEFAULT_PAGE_SIZE
    }

    fn resolve<'a>(&'a self, obj: &'a Object) -> Option<&'a Object> {
        match obj {
            Object::Reference(id) => self.doc.get_object(*id).ok(),
            other => Some(other),
        }
    }

    /// Concatenated, decompressed content streams of a page.
    fn page_content(&self, page_id: ObjectId) -> Result<Vec<u8>> {
        let page_dict = self.doc.get_dictionary(page_id)?;

        let contents = match page_dict.get(b"Contents") {
            Ok(contents) => contents,
            // A page without Contents is blank
            Err(_) => return Ok(Vec::new()),
        };

        match contents {
            Object::Reference(r) => match self.doc.get_object(*r)? {
                Object::Stream(s) => Ok(stream_bytes(s)),
                Object::Array(arr) => Ok(self.concat_streams(arr)),
                _ => Err(Error::PdfParse("Invalid content stream".to_string())),
            },
            Object::Array(arr) => Ok(self.concat_streams(arr)),
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    fn concat_streams(&self, refs: &[Object]) -> Vec<u8> {
        let mut content = Vec::new();
        for obj in refs {
            if let Object::Reference(r) = obj {
                match self.doc.get_object(*r) {
                    Ok(Object::Stream(s)) => {
                        content.extend_from_slice(&stream_bytes(s));
                        content.push(b' ');
                    }
                    _ => log::warn!("Skipping content entry {:?}: not a stream", r),
                }
            }
        }
        content
    }

    /// Walk a page's text operators and build its block tree.
    fn read_page(&self, number: u32, page_id: ObjectId) -> Result<PageText> {
        let (width, height) = self.page_size(page_id);
        let mut page = PageText::new(number, width, height);

        let fonts = self.doc.get_page_fonts(page_id)?;
        let names: HashMap<&[u8], String> = fonts
            .iter()
            .map(|(key, font)| {
                let base = font
                    .get(b"BaseFont")
                    .ok()
                    .and_then(|o| o.as_name().ok())
                    .map(|n| String::from_utf8_lossy(n).to_string())
                    .unwrap_or_else(|| String::from_utf8_lossy(key).to_string());
                (key.as_slice(), base)
            })
            .collect();

        let data = self.page_content(page_id)?;
        if data.is_empty() {
            return Ok(page);
        }
        let content = lopdf::content::Content::decode(&data)?;

        let mut state = TextState::default();
        let mut block = BlockBuilder::default();

        for op in &content.operations {
            let operands = &op.operands;
            match op.operator.as_str() {
                "BT" => {
                    state.begin_text();
                    block = BlockBuilder::default();
                }
                "ET" => {
                    if let Some(done) = std::mem::take(&mut block).finish() {
                        page.add_block(done);
                    }
                }
                "Tf" if operands.len() >= 2 => {
                    if let Object::Name(key) = &operands[0] {
                        state.font_key = key.clone();
                        state.font_name = names
                            .get(key.as_slice())
                            .cloned()
                            .unwrap_or_else(|| String::from_utf8_lossy(key).to_string());
                    }
                    state.font_size = get_number(&operands[1]).unwrap_or(12.0);
                }
                "TL" => {
                    if let Some(leading) = operands.first().and_then(get_number) {
                        state.leading = leading;
                    }
                }
                "Td" | "TD" if operands.len() >= 2 => {
                    let tx = get_number(&operands[0]).unwrap_or(0.0);
                    let ty = get_number(&operands[1]).unwrap_or(0.0);
                    if op.operator == "TD" {
                        state.leading = -ty;
                    }
                    state.move_line(tx, ty);
                }
                "Tm" if operands.len() >= 6 => {
                    state.set_matrix([
                        get_number(&operands[0]).unwrap_or(1.0),
                        get_number(&operands[1]).unwrap_or(0.0),
                        get_number(&operands[2]).unwrap_or(0.0),
                        get_number(&operands[3]).unwrap_or(1.0),
                        get_number(&operands[4]).unwrap_or(0.0),
                        get_number(&operands[5]).unwrap_or(0.0),
                    ]);
                }
                "T*" => state.next_line(),
                "Tj" => {
                    if let Some(Object::String(bytes, _)) = operands.first() {
                        let text = self.decode(&fonts, &state.font_key, bytes);
                        block.push(state.show(text, 0.0, height));
                    }
                }
                "TJ" => {
                    if let Some(Object::Array(items)) = operands.first() {
                        let (text, shift) = self.decode_array(&fonts, &state.font_key, items);
                        block.push(state.show(text, shift, height));
                    }
                }
                "'" | "\"" => {
                    state.next_line();
                    let idx = if op.operator == "\"" { 2 } else { 0 };
                    if let Some(Object::String(bytes, _)) = operands.get(idx) {
                        let text = self.decode(&fonts, &state.font_key, bytes);
                        block.push(state.show(text, 0.0, height));
                    }
                }
                _ => {}
            }
        }

        // Unterminated text object at end of stream
        if let Some(done) = block.finish() {
            page.add_block(done);
        }

        Ok(page)
    }

    fn decode(&self, fonts: &BTreeMap<Vec<u8>, &Dictionary>, key: &[u8], bytes: &[u8]) -> String {
        fonts
            .get(key)
            .and_then(|f| f.get_font_encoding(&self.doc).ok())
            .and_then(|enc| LopdfDocument::decode_text(&enc, bytes).ok())
            .unwrap_or_else(|| decode_text_simple(bytes))
    }

    /// Decode a TJ array, turning wide negative adjustments into spaces.
    ///
    /// Also returns the summed adjustment in thousandths of an em, positive
    /// to the right.
    fn decode_array(
        &self,
        fonts: &BTreeMap<Vec<u8>, &Dictionary>,
        key: &[u8],
        items: &[Object],
    ) -> (String, f32) {
        let mut combined = String::new();
        let mut shift = 0.0;
        for item in items {
            match item {
                Object::String(bytes, _) => combined.push_str(&self.decode(fonts, key, bytes)),
                other => {
                    let adjustment = get_number(other).map(|n| -n).unwrap_or(0.0);
                    shift += adjustment;
                    if adjustment > SPACE_THRESHOLD {
                        if let Some(last) = combined.chars().last() {
                            if !last.is_whitespace() && !is_spaceless_script_char(last) {
                                combined.push(' ');
                            }
                        }
                    }
                }
            }
        }
        (combined, shift)
    }
}

impl PageTextProvider for PdfProvider {
    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page(&self, index: usize) -> Result<PageText> {
        let page_id = *self
            .page_ids
            .get(index)
            .ok_or_else(|| page_out_of_range(index, self.page_ids.len()))?;
        self.read_page(index as u32, page_id)
    }
}

impl std::fmt::Debug for PdfProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfProvider")
            .field("version", &self.doc.version)
            .field("pages", &self.page_ids.len())
            .finish()
    }
}

/// Graphics-independent text state tracked across operators.
///
/// `line` is the start of the current line; `matrix` moves along it as
/// strings are shown.
struct TextState {
    line: TextMatrix,
    matrix: TextMatrix,
    font_key: Vec<u8>,
    font_name: String,
    font_size: f32,
    leading: f32,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            line: TextMatrix::default(),
            matrix: TextMatrix::default(),
            font_key: Vec::new(),
            font_name: String::new(),
            font_size: 12.0,
            leading: DEFAULT_LEADING,
        }
    }
}

impl TextState {
    fn begin_text(&mut self) {
        self.line = TextMatrix::default();
        self.matrix = self.line;
    }

    fn move_line(&mut self, tx: f32, ty: f32) {
        self.line.translate(tx, ty);
        self.matrix = self.line;
    }

    fn set_matrix(&mut self, values: [f32; 6]) {
        self.line.set(values);
        self.matrix = self.line;
    }

    fn next_line(&mut self) {
        self.line.next_line(self.leading);
        self.matrix = self.line;
    }

    /// Span for a shown string, then advance past it.
    ///
    /// `shift` is a TJ adjustment in thousandths of an em. Glyph widths are
    /// estimated the same way as span bboxes.
    fn show(&mut self, text: String, shift: f32, page_height: f32) -> Option<RawSpan> {
        let advance = self.font_size
            * (text.chars().count() as f32 * GLYPH_WIDTH + shift / 1000.0);
        let span = self.span(text, page_height);
        self.matrix.translate(advance, 0.0);
        span
    }

    /// Span at the current position, in top-down coordinates.
    fn span(&self, text: String, page_height: f32) -> Option<RawSpan> {
        if text.trim().is_empty() {
            return None;
        }
        let (x, baseline) = self.matrix.position();
        let size = (self.font_size * self.matrix.scale()).abs();
        if !size.is_finite() || size <= 0.0 {
            return None;
        }
        let width = text.chars().count() as f32 * size * GLYPH_WIDTH;
        let top = page_height - (baseline + size * ASCENT);
        let bottom = page_height - (baseline - size * (1.0 - ASCENT));
        Some(RawSpan::new(
            text,
            size,
            self.font_name.clone(),
            [x, top, x + width, bottom],
        ))
    }
}

/// Accumulates one BT/ET text object into lines.
#[derive(Default)]
struct BlockBuilder {
    lines: Vec<TextLine>,
    line_top: Option<f32>,
}

impl BlockBuilder {
    fn push(&mut self, span: Option<RawSpan>) {
        let Some(span) = span else { return };
        let top = span.y0();
        match (self.line_top, self.lines.last_mut()) {
            (Some(prev), Some(line)) if (prev - top).abs() < 0.5 => match line.spans.last_mut() {
                Some(last) if continues(last, &span) => {
                    last.text.push_str(&span.text);
                    last.bbox[2] = last.bbox[2].max(span.bbox[2]);
                }
                _ => line.spans.push(span),
            },
            _ => {
                self.lines.push(TextLine { spans: vec![span] });
                self.line_top = Some(top);
            }
        }
    }

    fn finish(self) -> Option<TextBlock> {
        (!self.lines.is_empty()).then_some(TextBlock { lines: self.lines })
    }
}

/// True if `next` starts where `prev` ends in the same font, so the two are
/// one run of text split across show operators.
fn continues(prev: &RawSpan, next: &RawSpan) -> bool {
    if prev.font != next.font || (prev.size - next.size).abs() > 0.01 {
        return false;
    }
    // Under a fifth of a glyph counts as touching
    let gap = next.bbox[0] - prev.bbox[2];
    gap.abs() <= next.size * GLYPH_WIDTH * 0.2
}

fn stream_bytes(stream: &Stream) -> Vec<u8> {
    stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone())
}

#[derive(Clone, Copy)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32, // X translation
    f: f32, // Y translation
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }
}

impl TextMatrix {
    fn set(&mut self, [a, b, c, d, e, f]: [f32; 6]) {
        *self = Self { a, b, c, d, e, f };
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self, leading: f32) {
        self.translate(0.0, -leading);
    }

    fn position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    fn scale(&self) -> f32 {
        (self.b * self.b + self.d * self.d).sqrt()
    }
}

fn media_box_size(obj: &Object) -> Option<(f32, f32)> {
    let arr = obj.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let nums: Vec<f32> = arr.iter().filter_map(get_number).collect();
    if nums.len() < 4 {
        return None;
    }
    let (w, h) = ((nums[2] - nums[0]).abs(), (nums[3] - nums[1]).abs());
    (w > 0.0 && h > 0.0).then_some((w, h))
}

fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Chinese and Japanese scripts that do not separate words with spaces.
fn is_spaceless_script_char(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF
        | 0x3400..=0x4DBF
        | 0x20000..=0x2EBEF
        | 0x3040..=0x309F
        | 0x30A0..=0x30FF
        | 0x3000..=0x303F)
}

/// Fallback decoding when the font has no usable encoding.
fn decode_text_simple(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let utf16: Vec<u16> = rest
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        // Latin-1
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream};

    fn build_document(ops: Vec<Operation>) -> LopdfDocument {
        let mut doc = LopdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content { operations: ops };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), 600.into(), 800.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    fn save(mut doc: LopdfDocument) -> Vec<u8> {
        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    fn build_pdf(ops: Vec<Operation>) -> Vec<u8> {
        save(build_document(ops))
    }

    fn texts(page: &PageText) -> Vec<&str> {
        page.spans().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_reads_spans_top_down() {
        let data = build_pdf(vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 20.into()]),
            Operation::new("Td", vec![72.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal("Overview")]),
            Operation::new("ET", vec![]),
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 10.into()]),
            Operation::new("Td", vec![72.into(), 650.into()]),
            Operation::new("Tj", vec![Object::string_literal("Body")]),
            Operation::new("ET", vec![]),
        ]);

        let provider = PdfProvider::from_bytes(&data).unwrap();
        assert_eq!(provider.page_count(), 1);

        let page = provider.page(0).unwrap();
        assert_eq!(page.number, 0);
        assert_eq!(page.width, 600.0);
        assert_eq!(page.height, 800.0);
        assert_eq!(page.blocks.len(), 2);

        let spans: Vec<&RawSpan> = page.spans().collect();
        assert_eq!(spans[0].text, "Overview");
        assert_eq!(spans[0].size, 20.0);
        assert_eq!(spans[0].font, "Helvetica-Bold");
        assert!(spans[0].is_bold());
        // Higher on the page means a smaller top-down y
        assert!(spans[0].y0() < spans[1].y0());
    }

    #[test]
    fn test_page_out_of_range() {
        let data = build_pdf(vec![]);
        let provider = PdfProvider::from_bytes(&data).unwrap();
        assert!(provider.page(0).unwrap().is_empty());
        assert!(matches!(provider.page(3), Err(Error::PageOutOfRange(3, 1))));
    }

    #[test]
    fn test_split_word_is_one_span() {
        let data = build_pdf(vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 20.into()]),
            Operation::new("Td", vec![72.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal("Intro")]),
            Operation::new("Tj", vec![Object::string_literal("duction")]),
            Operation::new("Td", vec![0.into(), (-30).into()]),
            Operation::new("Tj", vec![Object::string_literal("Scope")]),
            Operation::new("ET", vec![]),
        ]);

        let page = PdfProvider::from_bytes(&data).unwrap().page(0).unwrap();
        assert_eq!(texts(&page), vec!["Introduction", "Scope"]);

        let spans: Vec<&RawSpan> = page.spans().collect();
        assert_eq!(spans[0].x0(), 72.0);
        assert_eq!(spans[0].bbox[2], 72.0 + 12.0 * 20.0 * GLYPH_WIDTH);
        // Td is relative to the line start, not to the end of "duction"
        assert_eq!(spans[1].x0(), 72.0);
    }

    #[test]
    fn test_separate_words_stay_apart() {
        let data = build_pdf(vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 10.into()]),
            Operation::new("Td", vec![72.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal("Left")]),
            Operation::new("Td", vec![200.into(), 0.into()]),
            Operation::new("Tj", vec![Object::string_literal("Right")]),
            Operation::new("ET", vec![]),
        ]);

        let page = PdfProvider::from_bytes(&data).unwrap().page(0).unwrap();
        assert_eq!(page.blocks[0].lines.len(), 1);
        assert_eq!(texts(&page), vec!["Left", "Right"]);
    }

    #[test]
    fn test_tj_kerning_advances_position() {
        let data = build_pdf(vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 10.into()]),
            Operation::new("Td", vec![100.into(), 700.into()]),
            Operation::new(
                "TJ",
                vec![Object::Array(vec![
                    Object::string_literal("Key"),
                    (-400).into(),
                    Object::string_literal("Facts"),
                ])],
            ),
            Operation::new("Tj", vec![Object::string_literal("!")]),
            Operation::new("ET", vec![]),
        ]);

        let page = PdfProvider::from_bytes(&data).unwrap().page(0).unwrap();
        let spans: Vec<&RawSpan> = page.spans().collect();
        assert_eq!(spans[0].text, "Key Facts");
        // 9 chars at 5pt plus 400/1000 of a 10pt em
        assert!((spans[1].x0() - 149.0).abs() < 0.01, "{}", spans[1].x0());
    }

    #[test]
    fn test_reads_compressed_stream() {
        // Repeated operators so that deflate actually shrinks the stream
        let mut ops = vec![Operation::new("TL", vec![14.into()]); 40];
        ops.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 18.into()]),
            Operation::new("Td", vec![72.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal("Compressed Heading")]),
            Operation::new("ET", vec![]),
        ]);
        let mut doc = build_document(ops);
        doc.compress();
        assert!(doc
            .objects
            .values()
            .any(|o| matches!(o, Object::Stream(s) if s.dict.get(b"Filter").is_ok())));

        let page = PdfProvider::from_bytes(&save(doc)).unwrap().page(0).unwrap();
        assert_eq!(texts(&page), vec!["Compressed Heading"]);
    }

    #[test]
    fn test_undecryptable_document_is_rejected() {
        let mut doc = build_document(vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 20.into()]),
            Operation::new("Tj", vec![Object::string_literal("Secret Heading")]),
            Operation::new("ET", vec![]),
        ]);
        let encrypt_id = doc.add_object(dictionary! {
            "Filter" => "Standard",
            "V" => 5,
            "R" => 5,
        });
        doc.trailer.set("Encrypt", encrypt_id);

        let result = PdfProvider::from_bytes(&save(doc));
        assert!(matches!(result, Err(Error::Encrypted)));
    }

    #[test]
    fn test_not_a_pdf() {
        assert!(PdfProvider::from_bytes(b"definitely not a pdf").is_err());
    }

    #[test]
    fn test_text_matrix_scale() {
        let mut m = TextMatrix::default();
        m.set([2.0, 0.0, 0.0, 2.0, 10.0, 20.0]);
        assert_eq!(m.scale(), 2.0);
        m.translate(5.0, -10.0);
        assert_eq!(m.position(), (20.0, 0.0));
    }

    #[test]
    fn test_decode_text_simple() {
        assert_eq!(decode_text_simple(b"Hello"), "Hello");
        assert_eq!(decode_text_simple(&[0xFE, 0xFF, 0x00, 0x41]), "A");
        assert_eq!(decode_text_simple(&[0xE9]), "é");
    }

    #[test]
    fn test_spaceless_script() {
        assert!(is_spaceless_script_char('中'));
        assert!(is_spaceless_script_char('の'));
        assert!(!is_spaceless_script_char('한'));
        assert!(!is_spaceless_script_char('a'));
    }

    #[test]
    fn test_media_box_size() {
        let obj = Object::Array(vec![0.into(), 0.into(), 612.into(), 792.into()]);
        assert_eq!(media_box_size(&obj), Some((612.0, 792.0)));
        assert_eq!(media_box_size(&Object::Array(vec![0.into()])), None);
    }
}
