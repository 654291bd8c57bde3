use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// The syntactic construct the parser was working on when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Program,
    FunctionDefinition,
    ParameterList,
    Block,
    Assignment,
    IfStatement,
    ReturnStatement,
    Value,
    ParenthesizedValue,
    ListAccess,
    CallArguments,
}

impl Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Construct::Program => "program",
            Construct::FunctionDefinition => "function definition",
            Construct::ParameterList => "function parameter list",
            Construct::Block => "block",
            Construct::Assignment => "assignment",
            Construct::IfStatement => "if statement",
            Construct::ReturnStatement => "return statement",
            Construct::Value => "value expression",
            Construct::ParenthesizedValue => "parenthesized value",
            Construct::ListAccess => "head/tail access",
            Construct::CallArguments => "call argument list",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ChainedComparison { .. } => "ChainedComparison",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::EmptyProgram => "EmptyProgram",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    /// The construct being parsed, when the failure happened inside one.
    pub fn get_construct(&self) -> Option<Construct> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { construct, .. } => Some(*construct),
            ErrorImpl::ChainedComparison { .. } | ErrorImpl::NumberParseError { .. } => {
                Some(Construct::Value)
            }
            ErrorImpl::EmptyProgram => Some(Construct::Program),
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::NestingTooDeep { .. } => None,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken {
                token,
                construct,
                expected,
            } => match expected.as_slice() {
                [] => ErrorTip::Suggestion(format!(
                    "Unexpected token `{}` in {}",
                    token, construct
                )),
                [kind] => ErrorTip::Suggestion(format!(
                    "Unexpected token `{}` in {}, expected `{}`",
                    token, construct, kind
                )),
                kinds => ErrorTip::Suggestion(format!(
                    "Unexpected token `{}` in {}, expected one of {}",
                    token,
                    construct,
                    kinds
                        .iter()
                        .map(|kind| format!("`{}`", kind))
                        .collect::<Vec<String>>()
                        .join(", ")
                )),
            },
            ErrorImpl::ChainedComparison { token } => ErrorTip::Suggestion(format!(
                "Comparisons do not chain, `{}` needs its own condition joined with `and`",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::EmptyProgram => {
                ErrorTip::Suggestion(String::from("A program needs at least one `def`"))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Nesting is limited to {} levels",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token {token:?} in {construct}")]
    UnexpectedToken {
        token: String,
        construct: Construct,
        expected: Vec<TokenKind>,
    },
    #[error("chained comparison at {token:?}")]
    ChainedComparison { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("a program must define at least one function")]
    EmptyProgram,
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
