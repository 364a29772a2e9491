//! Content stream decoding into font-annotated spans.
//!
//! A span is a run of text shown inside one `BT`/`ET` block with one font
//! and one effective size, on one line. Consecutive `Tj`/`TJ` operators
//! extend the current span until the font or size changes or the text
//! position moves to a new line.

use std::collections::BTreeMap;

use lopdf::content::Content;
use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId, Stream};

use super::TextSpan;
use crate::error::{Error, Result};

/// TJ adjustments beyond this many thousandths of an em read as a word gap.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Font size assumed until the first `Tf`.
const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Affine matrix `[a b c d e f]` in PDF operand order.
type Matrix = [f32; 6];

const IDENTITY: Matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// Decode the spans drawn on one page, in content stream order.
pub(crate) fn page_spans(doc: &LopdfDocument, page_id: ObjectId) -> Result<Vec<TextSpan>> {
    let fonts = doc
        .get_page_fonts(page_id)
        .map_err(|e| Error::PdfParse(e.to_string()))?;
    let content = page_content(doc, page_id)?;
    if content.is_empty() {
        return Ok(Vec::new());
    }

    let content = Content::decode(&content).map_err(|e| Error::PdfParse(e.to_string()))?;
    let mut state = TextState::new(doc, &fonts);

    for op in &content.operations {
        match op.operator.as_str() {
            "q" => state.save(),
            "Q" => state.restore(),
            "cm" => {
                if let Some(m) = matrix_operands(&op.operands) {
                    state.ctm = multiply(&m, &state.ctm);
                    state.break_run();
                }
            }
            "BT" => {
                state.in_text = true;
                state.text_matrix = IDENTITY;
                state.break_run();
            }
            "ET" => {
                state.in_text = false;
                state.break_run();
            }
            "Tf" => {
                if let Some(Object::Name(name)) = op.operands.first() {
                    state.set_font(name);
                }
                if let Some(size) = op.operands.get(1).and_then(get_number) {
                    state.font_size = size;
                }
            }
            "Tm" => {
                if let Some(m) = matrix_operands(&op.operands) {
                    if m[5] != state.text_matrix[5] {
                        state.break_run();
                    }
                    state.text_matrix = m;
                }
            }
            "Td" | "TD" => {
                let tx = op.operands.first().and_then(get_number).unwrap_or(0.0);
                let ty = op.operands.get(1).and_then(get_number).unwrap_or(0.0);
                if ty != 0.0 {
                    state.break_run();
                }
                state.text_matrix = multiply(&[1.0, 0.0, 0.0, 1.0, tx, ty], &state.text_matrix);
            }
            "T*" => state.break_run(),
            "Tj" => {
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    let text = state.decode(bytes);
                    state.emit(&text);
                }
            }
            "'" => {
                state.break_run();
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    let text = state.decode(bytes);
                    state.emit(&text);
                }
            }
            "\"" => {
                state.break_run();
                if let Some(Object::String(bytes, _)) = op.operands.get(2) {
                    let text = state.decode(bytes);
                    state.emit(&text);
                }
            }
            "TJ" => {
                if let Some(Object::Array(items)) = op.operands.first() {
                    let text = state.decode_array(items);
                    state.emit(&text);
                }
            }
            _ => {}
        }
    }

    Ok(state.spans)
}

/// Raw content of a page. Pages without `Contents` are blank.
fn page_content(doc: &LopdfDocument, page_id: ObjectId) -> Result<Vec<u8>> {
    let page_dict = doc
        .get_dictionary(page_id)
        .map_err(|e| Error::PdfParse(e.to_string()))?;

    let contents = match page_dict.get(b"Contents") {
        Ok(contents) => contents,
        Err(_) => return Ok(Vec::new()),
    };

    match contents {
        Object::Reference(r) => match doc.get_object(*r) {
            Ok(Object::Stream(s)) => Ok(stream_data(s)),
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        },
        Object::Array(arr) => {
            let mut content = Vec::new();
            for obj in arr {
                if let Object::Reference(r) = obj {
                    if let Ok(Object::Stream(s)) = doc.get_object(*r) {
                        content.extend_from_slice(&stream_data(s));
                        content.push(b' ');
                    }
                }
            }
            Ok(content)
        }
        _ => Err(Error::PdfParse("Invalid content stream".to_string())),
    }
}

/// Stream bytes, decompressed when the stream declares a filter.
fn stream_data(stream: &Stream) -> Vec<u8> {
    stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone())
}

/// Graphics and text state needed to size spans.
///
/// The effective font size is the `Tf` size times the length of the
/// transformed unit y vector of `text_matrix × ctm`, so rotated and
/// non-uniformly scaled text reports the size it is rendered at. Text rise
/// and horizontal scaling do not change it.
struct TextState<'a> {
    doc: &'a LopdfDocument,
    fonts: &'a BTreeMap<Vec<u8>, &'a Dictionary>,
    font_key: Vec<u8>,
    font_name: String,
    font_size: f32,
    text_matrix: Matrix,
    ctm: Matrix,
    saved: Vec<Matrix>,
    in_text: bool,
    /// Font key and effective size of the span that may still be extended
    run: Option<(Vec<u8>, f32)>,
    spans: Vec<TextSpan>,
}

impl<'a> TextState<'a> {
    fn new(doc: &'a LopdfDocument, fonts: &'a BTreeMap<Vec<u8>, &'a Dictionary>) -> Self {
        Self {
            doc,
            fonts,
            font_key: Vec::new(),
            font_name: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            text_matrix: IDENTITY,
            ctm: IDENTITY,
            saved: Vec::new(),
            in_text: false,
            run: None,
            spans: Vec::new(),
        }
    }

    fn save(&mut self) {
        self.saved.push(self.ctm);
    }

    fn restore(&mut self) {
        if let Some(ctm) = self.saved.pop() {
            self.ctm = ctm;
        }
        self.break_run();
    }

    fn break_run(&mut self) {
        self.run = None;
    }

    fn set_font(&mut self, key: &[u8]) {
        if self.font_key == key {
            return;
        }
        self.font_key = key.to_vec();

        self.font_name = self
            .fonts
            .get(key)
            .and_then(|d| d.get(b"BaseFont").ok())
            .and_then(|o| o.as_name().ok())
            .map(|n| String::from_utf8_lossy(n).into_owned())
            .unwrap_or_else(|| String::from_utf8_lossy(key).into_owned());
    }

    fn effective_size(&self) -> f32 {
        let m = multiply(&self.text_matrix, &self.ctm);
        self.font_size * (m[2] * m[2] + m[3] * m[3]).sqrt()
    }

    fn decode(&self, bytes: &[u8]) -> String {
        let encoding = self
            .fonts
            .get(&self.font_key)
            .and_then(|f| f.get_font_encoding(self.doc).ok());

        match encoding {
            Some(ref enc) => LopdfDocument::decode_text(enc, bytes).unwrap_or_default(),
            None => decode_text_simple(bytes),
        }
    }

    /// Decode a TJ array, turning wide negative kerning into a space.
    fn decode_array(&self, items: &[Object]) -> String {
        let mut combined = String::new();
        for item in items {
            match item {
                Object::String(bytes, _) => combined.push_str(&self.decode(bytes)),
                other => {
                    let gap = get_number(other).map(|n| -n).unwrap_or(0.0);
                    if gap > TJ_SPACE_THRESHOLD
                        && !combined.is_empty()
                        && !combined.ends_with(char::is_whitespace)
                    {
                        combined.push(' ');
                    }
                }
            }
        }
        combined
    }

    /// Append shown text to the open span, or start a new one.
    fn emit(&mut self, text: &str) {
        if !self.in_text || text.is_empty() {
            return;
        }
        let font_size = self.effective_size();

        let extends = matches!(
            &self.run,
            Some((key, size)) if *key == self.font_key && *size == font_size
        );
        if extends {
            if let Some(last) = self.spans.last_mut() {
                last.text.push_str(text);
                return;
            }
        }

        if text.trim().is_empty() {
            return;
        }
        self.spans
            .push(TextSpan::new(text, font_size, self.font_name.clone()));
        self.run = Some((self.font_key.clone(), font_size));
    }
}

/// `m × n` for row-vector affine matrices, i.e. `m` applied first.
fn multiply(m: &Matrix, n: &Matrix) -> Matrix {
    [
        m[0] * n[0] + m[1] * n[2],
        m[0] * n[1] + m[1] * n[3],
        m[2] * n[0] + m[3] * n[2],
        m[2] * n[1] + m[3] * n[3],
        m[4] * n[0] + m[5] * n[2] + n[4],
        m[4] * n[1] + m[5] * n[3] + n[5],
    ]
}

fn matrix_operands(operands: &[Object]) -> Option<Matrix> {
    if operands.len() < 6 {
        return None;
    }
    let mut m = IDENTITY;
    for (slot, obj) in m.iter_mut().zip(operands) {
        *slot = get_number(obj)?;
    }
    Some(m)
}

fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Fallback decoding for fonts without a usable encoding.
fn decode_text_simple(bytes: &[u8]) -> String {
    if let [0xFE, 0xFF, rest @ ..] = bytes {
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
