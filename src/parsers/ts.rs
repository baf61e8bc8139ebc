//! Qt Linguist `.ts` document parser.
//!
//! Walks the quick-xml event stream once, building contexts and messages.
//! Structural problems (bad XML, wrong root, missing `<name>`, `<source>` or
//! `<translation>`, unexpected elements) abort the load with a [`ParseError`]
//! carrying the line. Unknown `type` values do not: the entry is loaded as
//! unfinished and a [`LoadWarning`] is recorded for the caller to report.
//!
//! Elements tscat does not interpret (`<extra-*>`, `<userdata>`,
//! `<oldcomment>`, length variants, `<dependencies>`) are kept so the
//! writer can emit them again.

use std::collections::HashMap;

use quick_xml::{
    events::{BytesStart, Event},
    reader::Reader,
};

use crate::catalog::{
    Catalog, Context, Extra, Header, LoadWarning, Location, Message, ParseError, ParseErrorKind,
    TranslationStatus,
};
use crate::utils::{build_line_index, offset_to_line};

pub fn parse(input: &str) -> Result<Catalog, ParseError> {
    TsParser::new(input).parse()
}

/// Contents of a `<translation>` element.
struct Translation {
    status: TranslationStatus,
    unknown_type: Option<String>,
    text: String,
    variants: Vec<String>,
    forms: Vec<String>,
    form_variants: Vec<Vec<String>>,
}

impl Translation {
    fn new((status, unknown_type): (TranslationStatus, Option<String>)) -> Self {
        Self {
            status,
            unknown_type,
            text: String::new(),
            variants: Vec::new(),
            forms: Vec::new(),
            form_variants: Vec::new(),
        }
    }
}

struct TsParser<'i> {
    reader: Reader<&'i [u8]>,
    line_index: Vec<usize>,
    warnings: Vec<LoadWarning>,
}

impl<'i> TsParser<'i> {
    fn new(input: &'i str) -> Self {
        Self {
            reader: Reader::from_str(input),
            line_index: build_line_index(input),
            warnings: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Catalog, ParseError> {
        loop {
            match self.next()? {
                Event::Start(e) => {
                    self.expect_root(&e)?;
                    let mut header = self.header(&e)?;
                    let contexts = self.parse_root(&mut header)?;
                    self.expect_end_of_document()?;
                    return Ok(Catalog::from_parts(header, contexts, self.warnings));
                }
                Event::Empty(e) => {
                    self.expect_root(&e)?;
                    let header = self.header(&e)?;
                    self.expect_end_of_document()?;
                    return Ok(Catalog::from_parts(header, Vec::new(), self.warnings));
                }
                Event::Text(t) if !is_blank(&t) => {
                    return Err(self.error(ParseErrorKind::Xml(
                        "text outside of the root element".to_string(),
                    )));
                }
                Event::Eof => return Err(self.error(ParseErrorKind::MissingRoot)),
                _ => {}
            }
        }
    }

    fn expect_root(&self, e: &BytesStart) -> Result<(), ParseError> {
        if e.name().as_ref() == b"TS" {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::UnexpectedRoot(element_name(e))))
        }
    }

    fn expect_end_of_document(&mut self) -> Result<(), ParseError> {
        loop {
            match self.next()? {
                Event::Eof => return Ok(()),
                Event::Start(e) | Event::Empty(e) => {
                    return Err(self.error(ParseErrorKind::Xml(format!(
                        "unexpected <{}> after the root element",
                        element_name(&e)
                    ))));
                }
                _ => {}
            }
        }
    }

    fn header(&self, e: &BytesStart) -> Result<Header, ParseError> {
        Ok(Header {
            version: self.attribute(e, b"version")?,
            language: self.attribute(e, b"language")?,
            source_language: self.attribute(e, b"sourcelanguage")?,
            ..Header::default()
        })
    }

    fn parse_root(&mut self, header: &mut Header) -> Result<Vec<Context>, ParseError> {
        let mut contexts: Vec<Context> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"context" => {
                        let line = self.line();
                        let context = self.parse_context(line)?;
                        match by_name.get(&context.name) {
                            Some(&idx) => {
                                self.warnings.push(LoadWarning::DuplicateContext {
                                    name: context.name.clone(),
                                    line,
                                });
                                let merged = &mut contexts[idx];
                                merged.extras.extend(context.extras);
                                merged.messages.extend(context.messages);
                            }
                            None => {
                                by_name.insert(context.name.clone(), contexts.len());
                                contexts.push(context);
                            }
                        }
                    }
                    b"defaultcodec" => {
                        header.default_codec = Some(self.read_text("defaultcodec")?);
                    }
                    b"dependencies" => header.dependencies = self.read_dependencies()?,
                    name if name.starts_with(b"extra-") => header.extras.push(self.extra(&e)?),
                    _ => return Err(self.unexpected(&e, "TS")),
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"context" => {
                        return Err(self.error(ParseErrorKind::MissingElement {
                            element: "context",
                            child: "name",
                        }));
                    }
                    b"defaultcodec" => header.default_codec = Some(String::new()),
                    b"dependencies" => {}
                    name if name.starts_with(b"extra-") => {
                        header.extras.push(Extra::new(element_name(&e), ""));
                    }
                    _ => return Err(self.unexpected(&e, "TS")),
                },
                Event::End(_) => return Ok(contexts),
                Event::Eof => return Err(self.error(ParseErrorKind::UnexpectedEof("TS"))),
                _ => {}
            }
        }
    }

    /// `catalog` attributes of the `<dependency>` children.
    fn read_dependencies(&mut self) -> Result<Vec<String>, ParseError> {
        let mut catalogs = Vec::new();
        loop {
            match self.next()? {
                Event::Empty(e) if e.name().as_ref() == b"dependency" => {
                    catalogs.extend(self.attribute(&e, b"catalog")?);
                }
                Event::Start(e) if e.name().as_ref() == b"dependency" => {
                    catalogs.extend(self.attribute(&e, b"catalog")?);
                    self.skip(&e)?;
                }
                Event::Start(e) | Event::Empty(e) => {
                    return Err(self.unexpected(&e, "dependencies"));
                }
                Event::End(_) => return Ok(catalogs),
                Event::Eof => {
                    return Err(self.error(ParseErrorKind::UnexpectedEof("dependencies")));
                }
                _ => {}
            }
        }
    }

    fn parse_context(&mut self, start_line: usize) -> Result<Context, ParseError> {
        let mut name: Option<String> = None;
        let mut comment: Option<String> = None;
        let mut extras = Vec::new();
        let mut messages: Vec<Message> = Vec::new();

        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"name" => {
                        if name.is_some() {
                            return Err(self.repeated("name", "context"));
                        }
                        name = Some(self.read_text("name")?);
                    }
                    b"comment" => comment = Some(self.read_text("comment")?),
                    b"message" => {
                        let line = self.line();
                        messages.push(self.parse_message(&e, line)?);
                    }
                    n if n.starts_with(b"extra-") => extras.push(self.extra(&e)?),
                    _ => return Err(self.unexpected(&e, "context")),
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"name" => {
                        if name.is_some() {
                            return Err(self.repeated("name", "context"));
                        }
                        name = Some(String::new());
                    }
                    b"comment" => comment = Some(String::new()),
                    b"message" => {
                        return Err(self.error(ParseErrorKind::MissingElement {
                            element: "message",
                            child: "source",
                        }));
                    }
                    n if n.starts_with(b"extra-") => extras.push(Extra::new(element_name(&e), "")),
                    _ => return Err(self.unexpected(&e, "context")),
                },
                Event::End(_) => break,
                Event::Eof => return Err(self.error(ParseErrorKind::UnexpectedEof("context"))),
                _ => {}
            }
        }

        let Some(name) = name else {
            return Err(ParseError::new(
                start_line,
                ParseErrorKind::MissingElement {
                    element: "context",
                    child: "name",
                },
            ));
        };

        for message in &messages {
            if let Some(value) = &message.unknown_type {
                self.warnings.push(LoadWarning::UnknownStatus {
                    context: name.clone(),
                    source: message.source.clone(),
                    value: value.clone(),
                    line: message.line,
                });
            }
        }

        let mut context = Context::new(name);
        context.comment = comment;
        context.extras = extras;
        context.messages = messages;
        Ok(context)
    }

    fn parse_message(&mut self, start: &BytesStart, line: usize) -> Result<Message, ParseError> {
        let id = self.attribute(start, b"id")?;
        let numerus = self.attribute(start, b"numerus")?.as_deref() == Some("yes");

        let mut source: Option<String> = None;
        let mut old_source = None;
        let mut comment = None;
        let mut old_comment = None;
        let mut extra_comment = None;
        let mut translator_comment = None;
        let mut userdata = None;
        let mut locations = Vec::new();
        let mut extras = Vec::new();
        let mut translation: Option<Translation> = None;

        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"source" => {
                        if source.is_some() {
                            return Err(self.repeated("source", "message"));
                        }
                        source = Some(self.read_text("source")?);
                    }
                    b"oldsource" => old_source = Some(self.read_text("oldsource")?),
                    b"comment" => comment = Some(self.read_text("comment")?),
                    b"oldcomment" => old_comment = Some(self.read_text("oldcomment")?),
                    b"extracomment" => extra_comment = Some(self.read_text("extracomment")?),
                    b"translatorcomment" => {
                        translator_comment = Some(self.read_text("translatorcomment")?)
                    }
                    b"userdata" => userdata = Some(self.read_text("userdata")?),
                    b"location" => {
                        locations.push(self.location(&e)?);
                        self.skip(&e)?;
                    }
                    b"translation" => {
                        if translation.is_some() {
                            return Err(self.repeated("translation", "message"));
                        }
                        let mut parsed = Translation::new(self.status(&e)?);
                        if numerus {
                            (parsed.forms, parsed.form_variants) = self.read_numerus_forms()?;
                        } else {
                            (parsed.text, parsed.variants) = self.read_variants("translation")?;
                        }
                        translation = Some(parsed);
                    }
                    n if n.starts_with(b"extra-") => extras.push(self.extra(&e)?),
                    _ => return Err(self.unexpected(&e, "message")),
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"location" => locations.push(self.location(&e)?),
                    b"source" => {
                        if source.is_some() {
                            return Err(self.repeated("source", "message"));
                        }
                        source = Some(String::new());
                    }
                    b"translation" => {
                        if translation.is_some() {
                            return Err(self.repeated("translation", "message"));
                        }
                        translation = Some(Translation::new(self.status(&e)?));
                    }
                    b"oldsource" => old_source = Some(String::new()),
                    b"comment" => comment = Some(String::new()),
                    b"oldcomment" => old_comment = Some(String::new()),
                    b"extracomment" => extra_comment = Some(String::new()),
                    b"translatorcomment" => translator_comment = Some(String::new()),
                    b"userdata" => userdata = Some(String::new()),
                    n if n.starts_with(b"extra-") => extras.push(Extra::new(element_name(&e), "")),
                    _ => return Err(self.unexpected(&e, "message")),
                },
                Event::End(_) => break,
                Event::Eof => return Err(self.error(ParseErrorKind::UnexpectedEof("message"))),
                _ => {}
            }
        }

        let source = source.ok_or_else(|| {
            ParseError::new(
                line,
                ParseErrorKind::MissingElement {
                    element: "message",
                    child: "source",
                },
            )
        })?;
        let translation = translation.ok_or_else(|| {
            ParseError::new(
                line,
                ParseErrorKind::MissingElement {
                    element: "message",
                    child: "translation",
                },
            )
        })?;

        Ok(Message {
            id,
            source,
            old_source,
            comment,
            old_comment,
            extra_comment,
            translator_comment,
            locations,
            status: translation.status,
            unknown_type: translation.unknown_type,
            translation: translation.text,
            variants: translation.variants,
            numerus,
            numerus_forms: translation.forms,
            numerus_variants: translation.form_variants,
            userdata,
            extras,
            line,
        })
    }

    /// Status from a `<translation>` tag. Unknown values map to unfinished
    /// and are returned so the caller can report them.
    fn status(&self, e: &BytesStart) -> Result<(TranslationStatus, Option<String>), ParseError> {
        let raw = self.attribute(e, b"type")?;
        Ok(match TranslationStatus::from_attribute(raw.as_deref()) {
            Some(status) => (status, None),
            None => (TranslationStatus::Unfinished, raw),
        })
    }

    fn location(&self, e: &BytesStart) -> Result<Location, ParseError> {
        Ok(Location {
            filename: self.attribute(e, b"filename")?,
            line: self.attribute(e, b"line")?,
        })
    }

    fn extra(&mut self, e: &BytesStart) -> Result<Extra, ParseError> {
        let name = element_name(e);
        let value = self.read_text("extra")?;
        Ok(Extra { name, value })
    }

    /// Collect the text of the current element up to its end tag.
    ///
    /// `<byte value="..."/>` escapes become the character they encode.
    fn read_text(&mut self, element: &'static str) -> Result<String, ParseError> {
        let mut text = String::new();
        loop {
            let event = self.next()?;
            if !self.push_text(event, &mut text, element)? {
                return Ok(text);
            }
        }
    }

    /// Like [`Self::read_text`], but also accepts `<lengthvariant>`
    /// children. Returns the text (the first variant when there are any)
    /// and every variant in order.
    fn read_variants(
        &mut self,
        element: &'static str,
    ) -> Result<(String, Vec<String>), ParseError> {
        let mut text = String::new();
        let mut variants = Vec::new();
        loop {
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"lengthvariant" => {
                    variants.push(self.read_text("lengthvariant")?);
                }
                Event::Empty(e) if e.name().as_ref() == b"lengthvariant" => {
                    variants.push(String::new());
                }
                event => {
                    if !self.push_text(event, &mut text, element)? {
                        break;
                    }
                }
            }
        }
        match variants.first() {
            Some(first) => Ok((first.clone(), variants)),
            None => Ok((text, variants)),
        }
    }

    /// Append one content event to `text`. Returns `false` at the end tag.
    fn push_text(
        &mut self,
        event: Event<'i>,
        text: &mut String,
        element: &'static str,
    ) -> Result<bool, ParseError> {
        match event {
            Event::Text(t) => {
                let unescaped = t
                    .unescape()
                    .map_err(|err| self.xml_error(quick_xml::Error::from(err)))?;
                text.push_str(&unescaped);
            }
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
            Event::Empty(e) if e.name().as_ref() == b"byte" => text.push(self.byte(&e)?),
            Event::Start(e) if e.name().as_ref() == b"byte" => {
                text.push(self.byte(&e)?);
                self.skip(&e)?;
            }
            Event::Start(e) | Event::Empty(e) => return Err(self.unexpected(&e, element)),
            Event::End(_) => return Ok(false),
            Event::Eof => return Err(self.error(ParseErrorKind::UnexpectedEof(element))),
            _ => {}
        }
        Ok(true)
    }

    /// Numerus forms and their length variants. The variant list is empty
    /// unless at least one form has variants.
    fn read_numerus_forms(&mut self) -> Result<(Vec<String>, Vec<Vec<String>>), ParseError> {
        let mut forms = Vec::new();
        let mut variants = Vec::new();
        loop {
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"numerusform" => {
                    let (text, form_variants) = self.read_variants("numerusform")?;
                    forms.push(text);
                    variants.push(form_variants);
                }
                Event::Empty(e) if e.name().as_ref() == b"numerusform" => {
                    forms.push(String::new());
                    variants.push(Vec::new());
                }
                Event::Start(e) | Event::Empty(e) => {
                    return Err(self.unexpected(&e, "translation"));
                }
                Event::End(_) => break,
                Event::Eof => return Err(self.error(ParseErrorKind::UnexpectedEof("translation"))),
                _ => {}
            }
        }
        if variants.iter().all(Vec::is_empty) {
            variants.clear();
        }
        Ok((forms, variants))
    }

    /// Decode `<byte value="x1b"/>` (hex with an `x` prefix) or decimal.
    fn byte(&self, e: &BytesStart) -> Result<char, ParseError> {
        let value = self.attribute(e, b"value")?.unwrap_or_default();
        let code = match value.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => value.parse::<u32>().ok(),
        };
        code.and_then(char::from_u32).ok_or_else(|| {
            self.error(ParseErrorKind::InvalidAttribute {
                attribute: "value",
                value,
            })
        })
    }

    fn attribute(&self, e: &BytesStart, key: &[u8]) -> Result<Option<String>, ParseError> {
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.xml_error(quick_xml::Error::from(err)))?;
            if attr.key.as_ref() == key {
                let value = attr
                    .unescape_value()
                    .map_err(|err| self.xml_error(quick_xml::Error::from(err)))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    fn skip(&mut self, e: &BytesStart) -> Result<(), ParseError> {
        match self.reader.read_to_end(e.name()) {
            Ok(_) => Ok(()),
            Err(err) => Err(self.xml_error(err)),
        }
    }

    fn next(&mut self) -> Result<Event<'i>, ParseError> {
        match self.reader.read_event() {
            Ok(event) => Ok(event),
            Err(err) => Err(self.xml_error(err)),
        }
    }

    fn line(&self) -> usize {
        offset_to_line(&self.line_index, self.reader.buffer_position() as usize)
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.line(), kind)
    }

    fn xml_error(&self, err: quick_xml::Error) -> ParseError {
        self.error(ParseErrorKind::Xml(err.to_string()))
    }

    fn unexpected(&self, e: &BytesStart, parent: &'static str) -> ParseError {
        self.error(ParseErrorKind::UnexpectedElement {
            found: element_name(e),
            parent,
        })
    }

    fn repeated(&self, element: &'static str, parent: &'static str) -> ParseError {
        self.error(ParseErrorKind::RepeatedElement { element, parent })
    }
}

fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}
