//! Serialization of catalogs back to Qt Linguist `.ts` and to JSON.
//!
//! The `.ts` layout follows what `lupdate` emits: 4-space indentation, no
//! `type` attribute on finished translations, and control characters written
//! as `<byte value="xHH"/>`. Length variants, `<extra-*>` elements and the
//! other pass-through fields are written back where lupdate puts them.

use std::{borrow::Cow, fs, path::Path};

use anyhow::{Context as _, Result};
use quick_xml::escape::escape;

use crate::catalog::{Catalog, CatalogError, Context, Extra, Message};

const INDENT: &str = "    ";

impl Catalog {
    /// Render the catalog as a `.ts` document.
    pub fn to_ts_string(&self) -> String {
        let mut writer = TsWriter::default();
        writer.document(self);
        writer.out
    }

    /// Write the catalog to `path` as a `.ts` document.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        fs::write(path, self.to_ts_string()).map_err(|error| CatalogError::Io {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Render the catalog as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")
    }
}

#[derive(Default)]
struct TsWriter {
    out: String,
}

impl TsWriter {
    fn document(&mut self, catalog: &Catalog) {
        self.out
            .push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS");
        let header = catalog.header();
        self.attribute("version", header.version.as_deref());
        self.attribute("language", header.language.as_deref());
        self.attribute("sourcelanguage", header.source_language.as_deref());
        self.out.push_str(">\n");

        if let Some(codec) = &header.default_codec {
            self.element(0, "defaultcodec", codec);
        }
        if !header.dependencies.is_empty() {
            self.out.push_str("<dependencies>\n");
            for dependency in &header.dependencies {
                self.out.push_str("<dependency");
                self.attribute("catalog", Some(dependency));
                self.out.push_str("/>\n");
            }
            self.out.push_str("</dependencies>\n");
        }
        self.extras(1, &header.extras);

        for context in catalog.groups() {
            self.context(context);
        }

        self.out.push_str("</TS>\n");
    }

    fn context(&mut self, context: &Context) {
        self.out.push_str("<context>\n");
        self.element(1, "name", &context.name);
        if let Some(comment) = &context.comment {
            self.element(1, "comment", comment);
        }
        self.extras(1, &context.extras);
        for message in &context.messages {
            self.message(message);
        }
        self.out.push_str("</context>\n");
    }

    fn message(&mut self, message: &Message) {
        self.indent(1);
        self.out.push_str("<message");
        self.attribute("id", message.id.as_deref());
        if message.numerus {
            self.attribute("numerus", Some("yes"));
        }
        self.out.push_str(">\n");

        for location in &message.locations {
            self.indent(2);
            self.out.push_str("<location");
            self.attribute("filename", location.filename.as_deref());
            self.attribute("line", location.line.as_deref());
            self.out.push_str("/>\n");
        }

        self.element(2, "source", &message.source);
        let optional = [
            ("oldsource", &message.old_source),
            ("comment", &message.comment),
            ("oldcomment", &message.old_comment),
            ("extracomment", &message.extra_comment),
            ("translatorcomment", &message.translator_comment),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                self.element(2, name, value);
            }
        }

        self.indent(2);
        self.out.push_str("<translation");
        self.attribute("type", message.status.as_attribute());
        if message.numerus {
            self.out.push('>');
            if !message.numerus_forms.is_empty() {
                self.out.push('\n');
                for (i, form) in message.numerus_forms.iter().enumerate() {
                    let variants = message
                        .numerus_variants
                        .get(i)
                        .map(Vec::as_slice)
                        .unwrap_or_default();
                    self.indent(3);
                    self.out.push_str("<numerusform");
                    self.variant_content(3, form, variants);
                    self.out.push_str("</numerusform>\n");
                }
                self.indent(2);
            }
        } else {
            self.variant_content(2, &message.translation, &message.variants);
        }
        self.out.push_str("</translation>\n");

        if let Some(userdata) = &message.userdata {
            self.element(2, "userdata", userdata);
        }
        self.extras(2, &message.extras);

        self.indent(1);
        self.out.push_str("</message>\n");
    }

    /// Close a start tag and write its content. With length variants the
    /// element gets `variants="yes"` and one `<lengthvariant>` per line.
    fn variant_content(&mut self, depth: usize, text: &str, variants: &[String]) {
        if variants.is_empty() {
            self.out.push('>');
            self.text(text);
            return;
        }
        self.out.push_str(" variants=\"yes\">\n");
        for variant in variants {
            self.element(depth + 1, "lengthvariant", variant);
        }
        self.indent(depth);
    }

    fn extras(&mut self, depth: usize, extras: &[Extra]) {
        for extra in extras {
            self.element(depth, &extra.name, &extra.value);
        }
    }

    /// `<name>text</name>` on its own line.
    fn element(&mut self, depth: usize, name: &str, text: &str) {
        self.indent(depth);
        self.out.push('<');
        self.out.push_str(name);
        self.out.push('>');
        self.text(text);
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push_str(">\n");
    }

    fn attribute(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape(value));
            self.out.push('"');
        }
    }

    fn text(&mut self, text: &str) {
        let escaped: Cow<str> = escape(text);
        for c in escaped.chars() {
            if is_control(c) {
                self.out
                    .push_str(&format!("<byte value=\"x{:x}\"/>", u32::from(c)));
            } else {
                self.out.push(c);
            }
        }
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }
}

/// Characters XML 1.0 cannot carry as text.
fn is_control(c: char) -> bool {
    c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r')
}
