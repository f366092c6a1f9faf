//! Arithmetic expression evaluation.
//!
//! Expressions are first reduced to the characters `[0-9+\-*/().^]` and then
//! evaluated by a small recursive-descent parser. Nothing is ever executed as
//! code.
//!
//! Grammar:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('+' | '-') unary | power
//! power  := atom ('^' unary)?
//! atom   := number | '(' expr ')'
//! ```
//!
//! `^` binds tighter than unary minus and is right-associative, so
//! `-2^2 == -4` and `2^3^2 == 512`.

use crate::error::EvalError;

/// Maximum parenthesis / unary nesting accepted by the parser
pub const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
enum TokenKind {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy)]
struct Token {
    kind: TokenKind,
    /// Byte offset in the sanitized expression
    pos: usize,
    ch: char,
}

/// Drop every character that cannot be part of an arithmetic expression.
pub fn sanitize(expr: &str) -> String {
    expr.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '^'))
        .collect()
}

/// Evaluate an arithmetic expression after sanitizing it.
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let clean = sanitize(expr);
    if clean.is_empty() {
        return Err(EvalError::Empty);
    }

    let tokens = tokenize(&clean)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        depth: 0,
    };

    let value = parser.expr()?;
    if let Some(tok) = parser.peek() {
        return Err(match tok.kind {
            TokenKind::RParen => EvalError::UnbalancedParens,
            _ => EvalError::UnexpectedToken {
                pos: tok.pos,
                found: tok.ch,
            },
        });
    }

    finite(value)
}

/// Render a result the way a person would write it: `42`, `2.5`, `-3`.
///
/// Uses the shortest representation that round-trips, and never prints `-0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '0'..='9' | '.' => {
                let mut end = pos + ch.len_utf8();
                while let Some(&(next_pos, next)) = chars.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        end = next_pos + next.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &input[pos..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(literal.to_string()))?;
                // Over-long literals parse as inf
                TokenKind::Number(finite(value)?)
            }
            other => return Err(EvalError::UnexpectedToken { pos, found: other }),
        };
        tokens.push(Token { kind, pos, ch });
    }

    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        match self.peek() {
            Some(tok) if tok.kind == kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn enter(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::TooDeep);
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.term()?;
        loop {
            if self.eat(TokenKind::Plus) {
                acc += self.term()?;
            } else if self.eat(TokenKind::Minus) {
                acc -= self.term()?;
            } else {
                return Ok(acc);
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.unary()?;
        loop {
            if self.eat(TokenKind::Star) {
                acc *= self.unary()?;
            } else if self.eat(TokenKind::Slash) {
                let divisor = self.unary()?;
                if divisor == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                acc /= divisor;
            } else {
                return Ok(acc);
            }
        }
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        if self.eat(TokenKind::Minus) {
            self.enter()?;
            let value = self.unary();
            self.leave();
            return value.map(|v| -v);
        }
        if self.eat(TokenKind::Plus) {
            self.enter()?;
            let value = self.unary();
            self.leave();
            return value;
        }
        self.power()
    }

    fn power(&mut self) -> Result<f64, EvalError> {
        let base = self.atom()?;
        if self.eat(TokenKind::Caret) {
            self.enter()?;
            let exponent = self.unary();
            self.leave();
            return finite(base.powf(exponent?));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<f64, EvalError> {
        let tok = self.advance().ok_or(EvalError::UnexpectedEnd)?;
        match tok.kind {
            TokenKind::Number(value) => Ok(value),
            TokenKind::LParen => {
                self.enter()?;
                let value = self.expr();
                self.leave();
                let value = value?;
                if !self.eat(TokenKind::RParen) {
                    return Err(EvalError::UnbalancedParens);
                }
                Ok(value)
            }
            TokenKind::RParen => Err(EvalError::UnbalancedParens),
            _ => Err(EvalError::UnexpectedToken {
                pos: tok.pos,
                found: tok.ch,
            }),
        }
    }
}

fn finite(value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate("15+27").unwrap(), 42.0);
        assert_eq!(evaluate("6*8").unwrap(), 48.0);
        assert_eq!(evaluate("10-15").unwrap(), -5.0);
        assert_eq!(evaluate("7/2").unwrap(), 3.5);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("10+5*2").unwrap(), 20.0);
        assert_eq!(evaluate("(10+5)*2").unwrap(), 30.0);
        assert_eq!(evaluate("8/4/2").unwrap(), 1.0);
        assert_eq!(evaluate("2*3+4*5").unwrap(), 26.0);
    }

    #[test]
    fn test_power_binds_tightest_and_is_right_associative() {
        assert_eq!(evaluate("2^10").unwrap(), 1024.0);
        assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
        assert_eq!(evaluate("-2^2").unwrap(), -4.0);
        assert_eq!(evaluate("2^-1").unwrap(), 0.5);
        assert_eq!(evaluate("3*2^2").unwrap(), 12.0);
    }

    #[test]
    fn test_unary_and_decimals() {
        assert_eq!(evaluate("-3+5").unwrap(), 2.0);
        assert_eq!(evaluate("--3").unwrap(), 3.0);
        assert_eq!(evaluate("1.5*2").unwrap(), 3.0);
        assert_eq!(evaluate(".5+.5").unwrap(), 1.0);
    }

    #[test]
    fn test_sanitize_strips_everything_else() {
        assert_eq!(sanitize("15 + 27"), "15+27");
        assert_eq!(sanitize("abc; 2*x(3)"), "2*(3)");
        assert_eq!(evaluate("  4 + 4  ").unwrap(), 8.0);
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("0/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1/(2-2)"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_overflow_is_non_finite() {
        assert_eq!(evaluate("10^400"), Err(EvalError::NonFinite));
    }

    #[test]
    fn test_oversized_literal_is_non_finite() {
        let huge = "9".repeat(400);
        assert_eq!(evaluate(&huge), Err(EvalError::NonFinite));
        assert_eq!(evaluate(&format!("1/{}", huge)), Err(EvalError::NonFinite));
        assert_eq!(evaluate(&format!("{}-{}", huge, huge)), Err(EvalError::NonFinite));
        // large but representable
        assert!(evaluate(&"9".repeat(300)).is_ok());
    }

    #[test]
    fn test_malformed_expressions() {
        assert_eq!(evaluate(""), Err(EvalError::Empty));
        assert_eq!(evaluate("abc"), Err(EvalError::Empty));
        assert_eq!(evaluate("2+"), Err(EvalError::UnexpectedEnd));
        assert_eq!(evaluate("(2+3"), Err(EvalError::UnbalancedParens));
        assert_eq!(evaluate("2+3)"), Err(EvalError::UnbalancedParens));
        assert_eq!(
            evaluate("1.2.3"),
            Err(EvalError::InvalidNumber("1.2.3".to_string()))
        );
        assert!(matches!(
            evaluate("2*/3"),
            Err(EvalError::UnexpectedToken { found: '/', .. })
        ));
    }

    #[test]
    fn test_nesting_limit() {
        let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_eq!(evaluate(&deep), Err(EvalError::TooDeep));

        let ok = format!("{}1{}", "(".repeat(10), ")".repeat(10));
        assert_eq!(evaluate(&ok).unwrap(), 1.0);

        let minus = format!("{}1", "-".repeat(MAX_DEPTH + 1));
        assert_eq!(evaluate(&minus), Err(EvalError::TooDeep));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(10.0 / 3.0), "3.3333333333333335");
    }
}
