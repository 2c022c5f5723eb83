//! Stack-based HTML emitter driving the [`Scanner`].

mod include;
mod tag_stack;

pub use self::include::resolve_include_path;
pub use self::tag_stack::{StackItem, TagStack};

use self::include::normalize_path;
use crate::errors::{CompileError, OpenMode};
use crate::html::{is_void_element, Dialect};
use crate::io::{FileSystem, Hardware};
use crate::scanner::Scanner;
use crate::settings::Settings;
use crate::token::{
    AttributeValue, CommentData, DoctypeData, IncludeData, TagData, TextData, TextKind, Token,
};
use std::io::{self, Write};

/// Collaborators and configuration shared by every compile unit of one
/// top-level compile.
#[derive(Clone, Copy)]
pub struct CompileContext<'c> {
    pub fs: &'c dyn FileSystem,
    pub hardware: &'c dyn Hardware,
    pub settings: &'c Settings,
}

struct Output<'w> {
    writer: Box<dyn Write + 'w>,
    path: String,
}

impl Output<'_> {
    fn write(&mut self, fragment: impl AsRef<[u8]>) -> Result<(), CompileError> {
        self.writer
            .write_all(fragment.as_ref())
            .map_err(|source| self.write_error(source))
    }

    fn flush(&mut self) -> Result<(), CompileError> {
        self.writer.flush().map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: io::Error) -> CompileError {
        CompileError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// Compiles one template into one output file.
///
/// Included templates are compiled by nested parsers of their own, which
/// receive the dialect by value and never report changes back.
pub struct Parser<'c> {
    ctx: CompileContext<'c>,
    input: String,
    output: String,
    dialect: Dialect,
    doctype_seen: bool,
    /// Templates including this one, outermost first.
    include_chain: Vec<String>,
    stack: TagStack,
    // NOTE: indents are only turned into nesting once content arrives, so an
    // indented line without content (e.g. a skipped conditional) does not
    // shift the tags that follow.
    pending_indents: usize,
    pending_newline: Option<TextKind>,
}

impl<'c> Parser<'c> {
    pub fn new(
        ctx: CompileContext<'c>,
        input: impl Into<String>,
        output: impl Into<String>,
        dialect: Dialect,
    ) -> Self {
        Parser {
            ctx,
            input: input.into(),
            output: output.into(),
            dialect,
            doctype_seen: false,
            include_chain: Vec::new(),
            stack: TagStack::default(),
            pending_indents: 0,
            pending_newline: None,
        }
    }

    pub fn with_include_chain(mut self, include_chain: Vec<String>) -> Self {
        self.include_chain = include_chain;
        self
    }

    /// Runs the unit to completion and returns the dialect it ended with.
    ///
    /// The output may be left partially written on failure.
    pub fn parse(mut self) -> Result<Dialect, CompileError> {
        log::debug!(
            "Compiling `{}` into `{}` ({:?} dialect).",
            self.input,
            self.output,
            self.dialect
        );

        let source = self.read_source()?;

        let writer = self
            .ctx
            .fs
            .create(&self.output)
            .map_err(|source| CompileError::FileOpen {
                path: self.output.clone(),
                mode: OpenMode::Write,
                source,
            })?;

        let mut out = Output {
            writer,
            path: self.output.clone(),
        };

        let mut scanner = Scanner::new(source, self.ctx.hardware);
        let mut part = Vec::new();

        loop {
            part.clear();

            scanner
                .scan_part(&mut part)
                .map_err(|source| CompileError::Syntax {
                    path: self.input.clone(),
                    source,
                })?;

            let finished = part.last() == Some(&Token::EndOfSource);

            for token in part.drain(..) {
                self.handle_token(token, &mut out)?;
            }

            if finished {
                break;
            }
        }

        out.flush()?;

        log::debug!("Finished `{}`.", self.input);

        Ok(self.dialect)
    }

    fn read_source(&self) -> Result<String, CompileError> {
        let bytes = self
            .ctx
            .fs
            .read(&self.input)
            .map_err(|source| CompileError::FileOpen {
                path: self.input.clone(),
                mode: OpenMode::Read,
                source,
            })?;

        String::from_utf8(bytes).map_err(|_| CompileError::InvalidUtf8 {
            path: self.input.clone(),
        })
    }

    fn handle_token(&mut self, token: Token, out: &mut Output<'_>) -> Result<(), CompileError> {
        match token {
            Token::Indent => self.pending_indents += 1,
            Token::Dedent => {
                if self.pending_indents > 0 {
                    self.pending_indents -= 1;
                } else {
                    self.close_top(out)?;
                }
            }
            Token::EndOfPart => (),
            Token::EndOfSource => {
                while !self.stack.is_empty() {
                    self.close_top(out)?;
                }
            }
            Token::Doctype(doctype) => {
                self.enter_content(out)?;
                self.emit_doctype(doctype, out)?;
            }
            Token::Tag(tag) => {
                self.enter_content(out)?;
                self.emit_tag(tag, out)?;
            }
            Token::Text(text) => {
                self.enter_content(out)?;
                self.emit_text(text, out)?;
            }
            Token::Comment(comment) => {
                self.enter_content(out)?;
                self.emit_comment(comment, out)?;
            }
            Token::Include(include) => {
                self.enter_content(out)?;
                self.emit_include(include, out)?;
            }
        }

        Ok(())
    }

    /// Positions the stack for the next content item: a sibling closes its
    /// predecessor, nested content keeps it open.
    fn enter_content(&mut self, out: &mut Output<'_>) -> Result<(), CompileError> {
        if self.pending_indents == 0 {
            self.close_top(out)?;
        } else {
            for _ in 1..self.pending_indents {
                self.stack.push_placeholder();
            }
        }

        self.pending_indents = 0;

        Ok(())
    }

    fn close_top(&mut self, out: &mut Output<'_>) -> Result<(), CompileError> {
        if let Some(StackItem::Element(name)) = self.stack.pop() {
            log::trace!(target: "flash_pug::parser", "close </{name}>");

            self.pending_newline = None;
            out.write(format!("</{name}>"))?;
        }

        Ok(())
    }

    fn emit_doctype(
        &mut self,
        doctype: DoctypeData,
        out: &mut Output<'_>,
    ) -> Result<(), CompileError> {
        self.pending_newline = None;

        if self.doctype_seen || self.dialect.is_determined() {
            log::warn!(
                "`{}`: duplicate doctype `{}` ignored, keeping the {:?} dialect.",
                self.input,
                doctype.value,
                self.dialect
            );
        } else {
            self.doctype_seen = true;
            self.dialect = doctype.shorthand.dialect();
        }

        out.write(doctype.preamble().as_bytes())?;
        self.stack.push_placeholder();

        Ok(())
    }

    fn emit_tag(&mut self, tag: TagData, out: &mut Output<'_>) -> Result<(), CompileError> {
        self.pending_newline = None;

        let mut html = format!("<{}", tag.name);

        for attribute in &tag.attributes {
            match &attribute.value {
                AttributeValue::Empty | AttributeValue::Boolean { checked: false } => (),
                AttributeValue::Boolean { checked: true } if self.dialect == Dialect::Html => {
                    html.push(' ');
                    html.push_str(&attribute.key);
                }
                AttributeValue::Boolean { checked: true } => {
                    push_attribute(&mut html, &attribute.key, &attribute.key);
                }
                AttributeValue::Text(value) => push_attribute(&mut html, &attribute.key, value),
            }
        }

        if tag.forced_void || is_void_element(&tag.name) {
            match self.dialect {
                Dialect::Html => html.push('>'),
                Dialect::Xml => {
                    html.push_str("></");
                    html.push_str(&tag.name);
                    html.push('>');
                }
                Dialect::Unspecified => html.push_str("/>"),
            }

            self.stack.push_placeholder();
        } else {
            log::trace!(target: "flash_pug::parser", "open <{}>", tag.name);

            html.push('>');
            html.push_str(&tag.text);
            self.stack.push_element(tag.name);
        }

        out.write(html)
    }

    fn emit_text(&mut self, text: TextData, out: &mut Output<'_>) -> Result<(), CompileError> {
        if self.pending_newline == Some(text.kind) {
            out.write("\n")?;
        }

        self.pending_newline = Some(text.kind);

        out.write(text.value)?;
        self.stack.push_placeholder();

        Ok(())
    }

    fn emit_comment(
        &mut self,
        comment: CommentData,
        out: &mut Output<'_>,
    ) -> Result<(), CompileError> {
        self.pending_newline = None;

        out.write(format!("<!--{}-->", comment.value))?;
        self.stack.push_placeholder();

        Ok(())
    }

    fn emit_include(
        &mut self,
        include: IncludeData,
        out: &mut Output<'_>,
    ) -> Result<(), CompileError> {
        self.pending_newline = None;

        let path = resolve_include_path(&self.input, &include.path);
        let input = normalize_path(&self.input);
        let settings = self.ctx.settings;

        if path == input || (settings.detect_include_cycles && self.include_chain.contains(&path))
        {
            return Err(CompileError::Recursion { path });
        }

        if !self.ctx.fs.is_file(&path) {
            return Err(CompileError::FileOpen {
                path,
                mode: OpenMode::Read,
                source: io::Error::new(io::ErrorKind::NotFound, "include target does not exist"),
            });
        }

        let content = if settings.is_template(&path) {
            let output = settings.output_path_for(&path);
            let mut include_chain = self.include_chain.clone();

            include_chain.push(input);

            log::debug!("`{}` includes template `{path}`.", self.input);

            Parser::new(self.ctx, path, output.as_str(), self.dialect)
                .with_include_chain(include_chain)
                .parse()?;

            self.ctx
                .fs
                .read(&output)
                .map_err(|source| CompileError::Write {
                    path: output,
                    source,
                })?
        } else {
            log::debug!("`{}` includes `{path}` verbatim.", self.input);

            self.ctx
                .fs
                .read(&path)
                .map_err(|source| CompileError::FileOpen {
                    path,
                    mode: OpenMode::Read,
                    source,
                })?
        };

        out.write(content)?;
        self.stack.push_placeholder();

        Ok(())
    }
}

fn push_attribute(html: &mut String, key: &str, value: &str) {
    html.push(' ');
    html.push_str(key);
    html.push_str("=\"");
    html.push_str(value);
    html.push('"');
}
