//! Symbol parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::term::ast::*;
use crate::term::lexer::Token;

/// Parse a single symbol, e.g. `circle(cx(5),cy(5),r(2))`
pub fn parse_symbol(input: &str) -> Result<Symbol, Vec<crate::ParseError>> {
    let len = input.len();
    let token_iter = crate::term::lexer::lex(input).map(|(tok, span)| (tok, span.into()));
    let token_stream = Stream::from_iter(token_iter)
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    symbol_parser()
        .then_ignore(end())
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Parse a whitespace separated list of symbols, one line of a model
pub fn parse_symbols(input: &str) -> Result<Vec<Symbol>, Vec<crate::ParseError>> {
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::term::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    symbol_parser()
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

fn symbol_parser<'a, I>() -> impl Parser<'a, I, Symbol, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    recursive(|symbol| {
        // `(a,b)`, also `(a,)` for unary tuples
        let arguments = symbol
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .collect::<Vec<_>>()
            .delimited_by(just(Token::ParenOpen), just(Token::ParenClose));

        // The solver's integers are 32 bit
        let number = just(Token::Minus)
            .or_not()
            .then(select! { Token::Number(n) => n })
            .try_map(|(neg, n), span| {
                let value = if neg.is_some() { -n } else { n };
                i32::try_from(value)
                    .map(Symbol::Number)
                    .map_err(|_| Rich::custom(span, format!("Number {} out of range", value)))
            });

        let string = select! { Token::String(s) => Symbol::String(s) };

        let function = just(Token::Minus)
            .or_not()
            .then(select! { Token::Ident(name) => name })
            .then(arguments.clone().or_not())
            .map(|((neg, name), arguments)| {
                Symbol::Function(Function {
                    name,
                    arguments: arguments.unwrap_or_default(),
                    negative: neg.is_some(),
                })
            });

        let tuple = arguments.map(Symbol::Tuple);

        choice((
            number,
            string,
            function,
            tuple,
            just(Token::Infimum).to(Symbol::Infimum),
            just(Token::Supremum).to(Symbol::Supremum),
        ))
        .boxed()
    })
}
