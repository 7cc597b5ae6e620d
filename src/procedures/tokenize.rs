/*!
Tokenizing a sentence under the active glyph set.

The input is scanned once, left to right.
At each point the longest matching glyph of the active set is taken, so a two-character glyph such as `->` is never misread as two unknown characters.
Whitespace may appear anywhere between tokens and is skipped.
Any character which begins no glyph, is not a letter, and is not a parenthesis or comma, fails the scan.

Tokenizing is independent of grammar.
In particular, no atom count or balance check is made here --- those are matters for [the parser](crate::procedures::parse) and [the context](crate::context).
*/

use crate::{
    config::GlyphSet,
    misc::log::targets::{self},
    structures::atom::{self, Atom},
    types::err::{self},
};

/// One token of a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// An atom.
    Atom(Atom),

    /// The negation glyph.
    Not,

    /// The conjunction glyph.
    And,

    /// The disjunction glyph.
    Or,

    /// The conditional glyph.
    Implies,

    /// The biconditional glyph.
    Iff,

    /// An opening parenthesis.
    LParen,

    /// A closing parenthesis.
    RParen,

    /// The equivalence sign.
    Equivalence,

    /// The turnstile.
    Turnstile,

    /// The comma between premises of an argument.
    Comma,
}

/// Tokenizes `input` under `glyphs`.
pub fn tokenize(input: &str, glyphs: &GlyphSet) -> Result<Vec<Token>, err::ParseError> {
    let glyph_tokens = [
        (glyphs.not, Token::Not),
        (glyphs.and, Token::And),
        (glyphs.or, Token::Or),
        (glyphs.implies, Token::Implies),
        (glyphs.iff, Token::Iff),
        (glyphs.equivalence, Token::Equivalence),
        (glyphs.turnstile, Token::Turnstile),
    ];

    let mut tokens = Vec::default();
    let mut rest = input;

    'scan: while let Some(character) = rest.chars().next() {
        if character.is_whitespace() {
            rest = &rest[character.len_utf8()..];
            continue 'scan;
        }

        // Longest glyph first, e.g. prefer `->` over any single-character glyph.
        let mut glyph_match: Option<(&str, Token)> = None;
        for &(glyph, token) in &glyph_tokens {
            if rest.starts_with(glyph) {
                match glyph_match {
                    Some((matched, _)) if matched.len() >= glyph.len() => {}
                    _ => glyph_match = Some((glyph, token)),
                }
            }
        }

        if let Some((glyph, token)) = glyph_match {
            tokens.push(token);
            rest = &rest[glyph.len()..];
            continue 'scan;
        }

        let token = match character {
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,

            letter if atom::is_atom(letter) => Token::Atom(letter),

            unknown => return Err(err::ParseError::UnknownCharacter(unknown)),
        };

        tokens.push(token);
        rest = &rest[character.len_utf8()..];
    }

    log::trace!(target: targets::TOKENIZER, "Read {} tokens", tokens.len());

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_glyphs() {
        let glyphs = GlyphSet::unicode();

        assert_eq!(
            Ok(vec![
                Token::Atom('p'),
                Token::Implies,
                Token::Atom('q'),
                Token::Comma,
                Token::Atom('p'),
                Token::Turnstile,
                Token::Atom('q'),
            ]),
            tokenize("p→q, p ⊢ q", &glyphs)
        );
    }

    #[test]
    fn ascii_glyphs_prefer_the_longest_match() {
        let glyphs = GlyphSet::ascii();

        assert_eq!(
            Ok(vec![Token::Atom('p'), Token::Implies, Token::Atom('q')]),
            tokenize("p -> q", &glyphs)
        );

        assert_eq!(
            Ok(vec![Token::Atom('p'), Token::Iff, Token::Not, Token::Atom('q')]),
            tokenize("p<>!q", &glyphs)
        );
    }

    #[test]
    fn unknown_characters_fail() {
        let glyphs = GlyphSet::unicode();

        assert_eq!(
            Err(err::ParseError::UnknownCharacter('&')),
            tokenize("p&q", &glyphs)
        );
    }
}
