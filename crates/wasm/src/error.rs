//! Error handling for WASM bindings.
//!
//! Converts pagenav's error types into JavaScript-friendly errors.

use pagenav_core::{NavError, ViewError};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration object
    Config,
    /// Missing page element (menu container, section)
    View,
    /// A DOM call threw
    Dom,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::View => "VIEW_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because it converts into a
/// JavaScript `Error` object carrying a `code` property.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct NavJsError {
    code: ErrorCode,
    message: String,
}

impl NavJsError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ViewError> for NavJsError {
    fn from(err: ViewError) -> Self {
        let code = match &err {
            ViewError::Dom { .. } => ErrorCode::Dom,
            ViewError::ElementMissing(_) | ViewError::Unsupported(_) => ErrorCode::View,
        };
        Self::new(code, err.to_string())
    }
}

impl From<NavError> for NavJsError {
    fn from(err: NavError) -> Self {
        match err {
            NavError::Config(msg) => Self::config(msg),
            NavError::View(e) => e.into(),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for NavJsError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::config(format!("Invalid configuration object: {err}"))
    }
}

impl From<NavJsError> for JsValue {
    fn from(err: NavJsError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();
        js_error.into()
    }
}

/// Describes a thrown JavaScript value for logs and error messages.
pub(crate) fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Maps a thrown DOM exception into a [`ViewError`].
pub(crate) fn dom_err(operation: &str) -> impl Fn(JsValue) -> ViewError + '_ {
    move |value| ViewError::dom(operation, describe(&value))
}
