//! XML Tokenizer - State machine for XML token extraction
//!
//! Implements a lenient pull-parser style tokenizer that extracts XML tokens:
//! - Element start/end/empty tags
//! - Text content (entities decoded)
//! - CDATA sections
//! - Comments
//! - Processing instructions and the XML declaration
//! - DOCTYPE declarations (internal subset skipped as a unit)
//!
//! The tokenizer never checks that tags balance; it only fails when the
//! input cannot be split into tokens at all.

use super::entities::decode_text;
use super::scanner::Scanner;
use std::borrow::Cow;
use std::fmt;

/// Current parsing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Initial state before parsing starts
    Init,
    /// Between markup constructs
    Content,
    /// End of input reached
    Done,
}

/// Type of XML token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Element start tag: <element>
    StartTag,
    /// Element end tag: </element>
    EndTag,
    /// Empty element: <element/>
    EmptyTag,
    /// Text content
    Text,
    /// CDATA section: <![CDATA[...]]>
    CData,
    /// Comment: <!--...-->
    Comment,
    /// Processing instruction: <?target ...?>
    ProcessingInstruction,
    /// XML declaration: <?xml ...?>
    XmlDeclaration,
    /// DOCTYPE declaration
    DocType,
    /// End of file
    Eof,
}

/// A parsed XML token
#[derive(Debug, Clone)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Raw span in input (start, end)
    pub span: (usize, usize),
    /// For tags: the element name. For PIs: the target
    pub name: Option<&'a str>,
    /// For start/empty tags: the raw attribute chunk after the name
    pub attributes: Option<&'a str>,
    /// For text/cdata/comments/PIs: the content (owned if entities were decoded)
    pub content: Option<Cow<'a, str>>,
}

impl<'a> Token<'a> {
    fn new(kind: TokenKind, span: (usize, usize)) -> Self {
        Token {
            kind,
            span,
            name: None,
            attributes: None,
            content: None,
        }
    }

    fn with_name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    fn with_attributes(mut self, attributes: &'a str) -> Self {
        self.attributes = Some(attributes);
        self
    }

    fn with_content(mut self, content: Cow<'a, str>) -> Self {
        self.content = Some(content);
        self
    }
}

/// Lexical failure: the input cannot be split into XML tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// Byte offset of the construct that failed
    pub position: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        ParseError {
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.message, self.position)
    }
}

impl std::error::Error for ParseError {}

/// XML tokenizer implementing a pull-parser pattern
pub struct Tokenizer<'a> {
    scanner: Scanner<'a>,
    state: ParseState,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer for the given input
    pub fn new(input: &'a str) -> Self {
        let mut scanner = Scanner::new(input);
        if input.starts_with('\u{feff}') {
            scanner.advance('\u{feff}'.len_utf8());
        }
        Tokenizer {
            scanner,
            state: ParseState::Init,
        }
    }

    /// Get the current parse state
    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Get the current position in the input
    pub fn position(&self) -> usize {
        self.scanner.position()
    }

    /// Get the next token. Returns `Eof` tokens forever once input is exhausted.
    pub fn next_token(&mut self) -> Result<Token<'a>, ParseError> {
        if self.state == ParseState::Init {
            // Leading whitespace before the first construct is insignificant
            self.scanner.skip_whitespace();
            self.state = ParseState::Content;
        }

        if self.state == ParseState::Done || self.scanner.is_eof() {
            self.state = ParseState::Done;
            let pos = self.scanner.position();
            return Ok(Token::new(TokenKind::Eof, (pos, pos)));
        }

        match self.scanner.peek() {
            Some(b'<') => self.parse_markup(),
            _ => Ok(self.parse_text()),
        }
    }

    /// Parse markup starting with '<'
    fn parse_markup(&mut self) -> Result<Token<'a>, ParseError> {
        let start = self.scanner.position();
        self.scanner.advance(1); // Skip '<'

        match self.scanner.peek() {
            Some(b'/') => self.parse_end_tag(start),
            Some(b'!') => self.parse_bang_markup(start),
            Some(b'?') => self.parse_pi(start),
            Some(_) => self.parse_start_tag(start),
            None => Err(ParseError::new("Unexpected end of input after '<'", start)),
        }
    }

    /// Parse a start tag or empty element tag
    fn parse_start_tag(&mut self, start: usize) -> Result<Token<'a>, ParseError> {
        let name = self
            .scanner
            .read_name()
            .ok_or_else(|| ParseError::new("Invalid element name: must start with letter, underscore, or colon", start))?;
        let name_end = self.scanner.position();

        // Find the end of the tag, handling quoted attributes
        let end = self
            .scanner
            .find_tag_end_quoted()
            .ok_or_else(|| ParseError::new("Unterminated start tag", start))?;

        let is_empty = self.scanner.slice(name_end, end).ends_with('/');
        let attr_end = if is_empty { end - 1 } else { end };
        let attributes = self.scanner.slice(name_end, attr_end);

        self.scanner.set_position(end + 1);

        let kind = if is_empty { TokenKind::EmptyTag } else { TokenKind::StartTag };
        Ok(Token::new(kind, (start, end + 1))
            .with_name(name)
            .with_attributes(attributes))
    }

    /// Parse an end tag
    fn parse_end_tag(&mut self, start: usize) -> Result<Token<'a>, ParseError> {
        self.scanner.advance(1); // Skip '/'

        let name = self
            .scanner
            .read_name()
            .ok_or_else(|| ParseError::new("Invalid element name in end tag", start))?;

        let end = self
            .scanner
            .find_tag_end()
            .ok_or_else(|| ParseError::new("Unterminated end tag", start))?;

        self.scanner.set_position(end + 1);
        Ok(Token::new(TokenKind::EndTag, (start, end + 1)).with_name(name))
    }

    /// Parse markup starting with '!' (comment, CDATA, DOCTYPE)
    fn parse_bang_markup(&mut self, start: usize) -> Result<Token<'a>, ParseError> {
        self.scanner.advance(1); // Skip '!'

        if self.scanner.starts_with(b"--") {
            self.parse_comment(start)
        } else if self.scanner.starts_with(b"[CDATA[") {
            self.parse_cdata(start)
        } else if self.scanner.starts_with(b"DOCTYPE") {
            self.parse_doctype(start)
        } else {
            Err(ParseError::new("Invalid declaration - expected comment, CDATA, or DOCTYPE", start))
        }
    }

    /// Parse a comment <!--...-->
    fn parse_comment(&mut self, start: usize) -> Result<Token<'a>, ParseError> {
        self.scanner.advance(2); // Skip '--'
        let content_start = self.scanner.position();

        let pos = self
            .scanner
            .find_sequence(b"-->")
            .ok_or_else(|| ParseError::new("Unterminated comment", start))?;

        let content = self.scanner.slice(content_start, pos);
        self.scanner.set_position(pos + 3);
        Ok(Token::new(TokenKind::Comment, (start, pos + 3)).with_content(Cow::Borrowed(content)))
    }

    /// Parse a CDATA section <![CDATA[...]]>
    fn parse_cdata(&mut self, start: usize) -> Result<Token<'a>, ParseError> {
        self.scanner.advance(7); // Skip '[CDATA['
        let content_start = self.scanner.position();

        let pos = self
            .scanner
            .find_sequence(b"]]>")
            .ok_or_else(|| ParseError::new("Unterminated CDATA section", start))?;

        let content = self.scanner.slice(content_start, pos);
        self.scanner.set_position(pos + 3);
        Ok(Token::new(TokenKind::CData, (start, pos + 3)).with_content(Cow::Borrowed(content)))
    }

    /// Parse a DOCTYPE declaration, including any internal subset
    ///
    /// Format: <!DOCTYPE name [internal subset]> or <!DOCTYPE name SYSTEM "uri">
    fn parse_doctype(&mut self, start: usize) -> Result<Token<'a>, ParseError> {
        self.scanner.advance(7); // Skip 'DOCTYPE'
        let content_start = self.scanner.position();

        let mut bracket_depth = 0usize;
        let mut quote: Option<u8> = None;
        while let Some(b) = self.scanner.peek() {
            match (quote, b) {
                (Some(q), b) if b == q => quote = None,
                (Some(_), _) => {}
                (None, b'"') | (None, b'\'') => quote = Some(b),
                (None, b'[') => bracket_depth += 1,
                (None, b']') => bracket_depth = bracket_depth.saturating_sub(1),
                (None, b'>') if bracket_depth == 0 => {
                    let pos = self.scanner.position();
                    let content = self.scanner.slice(content_start, pos).trim();
                    self.scanner.set_position(pos + 1);
                    return Ok(Token::new(TokenKind::DocType, (start, pos + 1))
                        .with_content(Cow::Borrowed(content)));
                }
                _ => {}
            }
            self.scanner.advance(1);
        }

        Err(ParseError::new("Unterminated DOCTYPE declaration", start))
    }

    /// Parse a processing instruction <?...?>
    fn parse_pi(&mut self, start: usize) -> Result<Token<'a>, ParseError> {
        self.scanner.advance(1); // Skip '?'

        let name = self
            .scanner
            .read_name()
            .ok_or_else(|| ParseError::new("Invalid processing instruction target", start))?;
        let content_start = self.scanner.position();

        let pos = self
            .scanner
            .find_sequence(b"?>")
            .ok_or_else(|| ParseError::new("Unterminated processing instruction", start))?;

        let content = self.scanner.slice(content_start, pos).trim_start();
        self.scanner.set_position(pos + 2);

        let kind = if name.eq_ignore_ascii_case("xml") {
            TokenKind::XmlDeclaration
        } else {
            TokenKind::ProcessingInstruction
        };
        Ok(Token::new(kind, (start, pos + 2))
            .with_name(name)
            .with_content(Cow::Borrowed(content)))
    }

    /// Parse text content up to the next '<' or end of input
    fn parse_text(&mut self) -> Token<'a> {
        let start = self.scanner.position();
        let end = self.scanner.find_tag_start().unwrap_or_else(|| self.scanner.len());

        let content = self.scanner.slice(start, end);
        self.scanner.set_position(end);
        Token::new(TokenKind::Text, (start, end)).with_content(decode_text(content))
    }
}
