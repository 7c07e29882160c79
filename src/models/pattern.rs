//! Typed octet patterns.
//!
//! A [`Pattern`] is a sequence of [`Token`]s denoting a set of decimal strings. It is
//! only turned into the textual mask grammar (`?d`, `?1`..`?4`, leading class
//! declarations) when displayed or assembled into a [`crate::processing::Mask`].

use std::fmt;

/// Characters matched by the `?d` wildcard.
pub const DIGITS: &str = "0123456789";

/// Ordered, duplicate-free set of characters a positional wildcard can take.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharClass(String);

impl CharClass {
    /// Decimal digits `lo..=hi`.
    pub fn digits(lo: u8, hi: u8) -> CharClass {
        assert!(lo <= hi && hi <= 9, "digit class {lo}..={hi} out of range");
        CharClass((lo..=hi).map(|d| char::from(b'0' + d)).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classes declared at the head of every assembled mask, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinClass {
    /// `01234`, slot 1.
    ZeroToFour,
    /// `012345`, slot 2.
    ZeroToFive,
    /// `123456789`, slot 3.
    OneToNine,
}

impl BuiltinClass {
    pub const ALL: [BuiltinClass; 3] = [
        BuiltinClass::ZeroToFour,
        BuiltinClass::ZeroToFive,
        BuiltinClass::OneToNine,
    ];

    pub fn slot(self) -> u8 {
        match self {
            BuiltinClass::ZeroToFour => 1,
            BuiltinClass::ZeroToFive => 2,
            BuiltinClass::OneToNine => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuiltinClass::ZeroToFour => "01234",
            BuiltinClass::ZeroToFive => "012345",
            BuiltinClass::OneToNine => "123456789",
        }
    }

    /// The builtin class holding exactly the digits `lo..=hi`, if any.
    pub fn for_digits(lo: u8, hi: u8) -> Option<BuiltinClass> {
        match (lo, hi) {
            (0, 4) => Some(BuiltinClass::ZeroToFour),
            (0, 5) => Some(BuiltinClass::ZeroToFive),
            (1, 9) => Some(BuiltinClass::OneToNine),
            _ => None,
        }
    }
}

/// One position of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A literal character.
    Literal(char),
    /// `?d`, any decimal digit.
    AnyDigit,
    /// One of the three builtin classes.
    Builtin(BuiltinClass),
    /// Index into the owning pattern's custom classes.
    Custom(u8),
}

impl Token {
    /// Serialize with custom classes numbered from `custom_base + 1`.
    fn write_to(self, out: &mut String, custom_base: usize) {
        match self {
            Token::Literal(c) => out.push(c),
            Token::AnyDigit => out.push_str("?d"),
            Token::Builtin(class) => {
                out.push('?');
                out.push(char::from(b'0' + class.slot()));
            }
            Token::Custom(i) => {
                out.push('?');
                out.push_str(&(custom_base + i as usize + 1).to_string());
            }
        }
    }
}

/// A list of tokens plus the custom classes they reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    classes: Vec<CharClass>,
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn new(classes: Vec<CharClass>, tokens: Vec<Token>) -> Pattern {
        debug_assert!(tokens.iter().all(|t| match t {
            Token::Custom(i) => (*i as usize) < classes.len(),
            _ => true,
        }));
        Pattern { classes, tokens }
    }

    /// Plain decimal digits of `n`.
    pub fn literal(n: u8) -> Pattern {
        Pattern {
            classes: Vec::new(),
            tokens: decimal_literals(n as u32),
        }
    }

    pub fn classes(&self) -> &[CharClass] {
        &self.classes
    }

    /// Number of concrete strings the pattern denotes.
    pub fn cardinality(&self) -> usize {
        self.tokens
            .iter()
            .map(|t| match t {
                Token::Literal(_) => 1,
                Token::AnyDigit => DIGITS.len(),
                Token::Builtin(class) => class.as_str().len(),
                Token::Custom(i) => self.classes[*i as usize].len(),
            })
            .product()
    }

    /// Every concrete string the pattern denotes, first token varying slowest.
    pub fn expand(&self) -> Vec<String> {
        let mut out = vec![String::new()];
        for token in &self.tokens {
            let choices: &str = match token {
                Token::Literal(c) => {
                    out.iter_mut().for_each(|s| s.push(*c));
                    continue;
                }
                Token::AnyDigit => DIGITS,
                Token::Builtin(class) => class.as_str(),
                Token::Custom(i) => self.classes[*i as usize].as_str(),
            };
            out = out
                .iter()
                .flat_map(|prefix| {
                    choices.chars().map(move |c| {
                        let mut s = prefix.clone();
                        s.push(c);
                        s
                    })
                })
                .collect();
        }
        out
    }

    /// Body text with custom classes numbered from `custom_base + 1`.
    pub fn body(&self, custom_base: usize) -> String {
        let mut out = String::with_capacity(self.tokens.len() * 2);
        for token in &self.tokens {
            token.write_to(&mut out, custom_base);
        }
        out
    }
}

/// Literal tokens for the decimal digits of `n`.
pub fn decimal_literals(n: u32) -> Vec<Token> {
    n.to_string().chars().map(Token::Literal).collect()
}

/// Standalone form: `class,...,body`, custom classes numbered after the builtins.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.classes {
            write!(f, "{class},")?;
        }
        f.write_str(&self.body(BuiltinClass::ALL.len()))
    }
}
