/*!
Parsing a token stream to a [Sentence].

The parser is recursive descent over the grammar:

```none
sentence    = argument | equivalence | formula
argument    = formula ("," formula)* "⊢" formula
equivalence = formula "≡" formula
formula     = iff
iff         = implies ("↔" implies)*
implies     = or ("→" or)*
or          = and ("∨" and)*
and         = unary ("∧" unary)*
unary       = "¬" unary | atom | "(" formula ")"
```

One level per connective encodes the precedence order ¬ > ∧ > ∨ > → > ↔, so `a∧b∨c` is read as `(a∧b)∨c` without parentheses.
Every binary connective associates to the left.

Tokens are consumed left to right and every token advances the parse, so the parser terminates on any input.
Structural tokens (`≡`, `⊢`, `,`) are only meaningful at the top level of the sentence --- anywhere else they fail the parse with a dedicated error, as the likely cause is a misplaced or repeated claim rather than a typo inside a formula.
*/

use crate::{
    misc::log::targets::{self},
    procedures::tokenize::Token,
    structures::{expression::Expression, sentence::Sentence},
    types::err::{self},
};

/// Parses `tokens` to a sentence.
pub fn parse(tokens: &[Token]) -> Result<Sentence, err::ParseError> {
    let mut parser = Parser { tokens, index: 0 };
    let sentence = parser.sentence()?;

    log::debug!(target: targets::PARSER, "Parsed a sentence: {sentence:?}");

    Ok(sentence)
}

struct Parser<'t> {
    tokens: &'t [Token],
    index: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.index).copied()
    }

    fn take(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn sentence(&mut self) -> Result<Sentence, err::ParseError> {
        let first = self.formula()?;

        match self.peek() {
            None => Ok(Sentence::Formula(first)),

            Some(Token::Equivalence) => {
                self.index += 1;
                let rhs = self.formula()?;
                self.close()?;

                Ok(Sentence::Equivalence(first, rhs))
            }

            Some(Token::Comma | Token::Turnstile) => {
                let mut premises = vec![first];

                while let Some(Token::Comma) = self.peek() {
                    self.index += 1;
                    premises.push(self.formula()?);
                }

                match self.take() {
                    Some(Token::Turnstile) => {}
                    // A comma with no turnstile to follow.
                    _ => return Err(err::ParseError::MisplacedStructure),
                }

                let conclusion = self.formula()?;
                self.close()?;

                Ok(Sentence::Argument {
                    premises,
                    conclusion,
                })
            }

            Some(Token::RParen) => Err(err::ParseError::UnbalancedParentheses),

            Some(_) => Err(err::ParseError::UnexpectedToken(self.index)),
        }
    }

    // The sentence is complete, so any remaining token fails the parse.
    fn close(&mut self) -> Result<(), err::ParseError> {
        match self.peek() {
            None => Ok(()),

            Some(Token::RParen) => Err(err::ParseError::UnbalancedParentheses),

            Some(Token::Equivalence | Token::Turnstile | Token::Comma) => {
                Err(err::ParseError::MisplacedStructure)
            }

            Some(_) => Err(err::ParseError::UnexpectedToken(self.index)),
        }
    }

    fn formula(&mut self) -> Result<Expression, err::ParseError> {
        let mut expression = self.implies_level()?;

        while let Some(Token::Iff) = self.peek() {
            self.index += 1;
            let rhs = self.implies_level()?;
            expression = Expression::Iff(Box::new(expression), Box::new(rhs));
        }

        Ok(expression)
    }

    fn implies_level(&mut self) -> Result<Expression, err::ParseError> {
        let mut expression = self.or_level()?;

        while let Some(Token::Implies) = self.peek() {
            self.index += 1;
            let rhs = self.or_level()?;
            expression = Expression::Implies(Box::new(expression), Box::new(rhs));
        }

        Ok(expression)
    }

    fn or_level(&mut self) -> Result<Expression, err::ParseError> {
        let mut expression = self.and_level()?;

        while let Some(Token::Or) = self.peek() {
            self.index += 1;
            let rhs = self.and_level()?;
            expression = Expression::Or(Box::new(expression), Box::new(rhs));
        }

        Ok(expression)
    }

    fn and_level(&mut self) -> Result<Expression, err::ParseError> {
        let mut expression = self.unary()?;

        while let Some(Token::And) = self.peek() {
            self.index += 1;
            let rhs = self.unary()?;
            expression = Expression::And(Box::new(expression), Box::new(rhs));
        }

        Ok(expression)
    }

    fn unary(&mut self) -> Result<Expression, err::ParseError> {
        match self.take() {
            None => Err(err::ParseError::UnexpectedEnd),

            Some(Token::Not) => Ok(Expression::Not(Box::new(self.unary()?))),

            Some(Token::Atom(atom)) => Ok(Expression::Atom(atom)),

            Some(Token::LParen) => {
                if let Some(Token::RParen) = self.peek() {
                    return Err(err::ParseError::EmptyParentheses);
                }

                let inner = self.formula()?;

                match self.take() {
                    Some(Token::RParen) => Ok(inner),

                    None => Err(err::ParseError::UnbalancedParentheses),

                    Some(Token::Equivalence | Token::Turnstile | Token::Comma) => {
                        Err(err::ParseError::MisplacedStructure)
                    }

                    Some(_) => Err(err::ParseError::UnexpectedToken(self.index - 1)),
                }
            }

            Some(Token::RParen) => Err(err::ParseError::UnbalancedParentheses),

            Some(Token::Equivalence | Token::Turnstile | Token::Comma) => {
                Err(err::ParseError::MisplacedStructure)
            }

            Some(_) => Err(err::ParseError::UnexpectedToken(self.index - 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::GlyphSet, procedures::tokenize::tokenize};

    fn parse_str(input: &str) -> Result<Sentence, err::ParseError> {
        parse(&tokenize(input, &GlyphSet::unicode())?)
    }

    #[test]
    fn precedence_binds_and_before_or() {
        let direct = parse_str("a∧b∨c");
        let parenthesized = parse_str("(a∧b)∨c");

        assert!(direct.is_ok());
        assert_eq!(direct, parenthesized);
        assert_ne!(direct, parse_str("a∧(b∨c)"));
    }

    #[test]
    fn negation_binds_tightest() {
        assert_eq!(parse_str("¬p∨q"), parse_str("(¬p)∨q"));
    }

    #[test]
    fn binary_connectives_associate_left() {
        assert_eq!(parse_str("p→q→r"), parse_str("(p→q)→r"));
    }

    #[test]
    fn parentheses_are_transparent() {
        assert_eq!(parse_str("p∧q"), parse_str("(p∧q)"));
        assert_eq!(parse_str("p∧q"), parse_str("((p)∧((q)))"));
    }

    #[test]
    fn structural_tokens_parse_at_the_top_level_only() {
        assert!(matches!(parse_str("p,q⊢r"), Ok(Sentence::Argument { .. })));
        assert!(matches!(parse_str("p≡q"), Ok(Sentence::Equivalence(_, _))));

        assert_eq!(Err(err::ParseError::MisplacedStructure), parse_str("(p≡q)"));
        assert_eq!(Err(err::ParseError::MisplacedStructure), parse_str("p≡q≡r"));
        assert_eq!(Err(err::ParseError::MisplacedStructure), parse_str("p,q"));
        assert_eq!(Err(err::ParseError::MisplacedStructure), parse_str("p⊢q⊢r"));
    }

    #[test]
    fn malformed_formulas_fail() {
        assert_eq!(Err(err::ParseError::UnbalancedParentheses), parse_str("(p∧q"));
        assert_eq!(Err(err::ParseError::UnbalancedParentheses), parse_str("p∧q)"));
        assert_eq!(Err(err::ParseError::EmptyParentheses), parse_str("p∧()"));
        assert_eq!(Err(err::ParseError::UnexpectedEnd), parse_str("p∧"));
        assert_eq!(Err(err::ParseError::UnexpectedToken(1)), parse_str("p q"));
    }
}
