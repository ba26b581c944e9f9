//! Domain-level error type for the engine's parsing boundary.
//!
//! The rule functions themselves are total over well-typed input and never
//! fail; `DomainError` only surfaces where untyped data enters (card
//! tokens). Consumers embedding this crate convert it into their own error
//! type at the seam.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    ParseCard(String),
    Other(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::ParseCard(s) => write!(f, "parse card: {s}"),
            DomainError::Other(s) => write!(f, "domain error: {s}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn parse_card(token: impl Into<String>) -> Self {
        Self::ParseCard(token.into())
    }
    pub fn other(detail: impl Into<String>) -> Self {
        Self::Other(detail.into())
    }
}
