//! WebAssembly bindings for hmsubst.

use wasm_bindgen::prelude::*;

use crate::diagnostics::render_error;
use crate::error::ParseError;
use crate::parser::{parse_application, parse_substitution, parse_type};

/// Result of a single operation, for display in a page.
#[wasm_bindgen]
pub struct EvalResult {
    success: bool,
    output: String,
    error: String,
}

#[wasm_bindgen]
impl EvalResult {
    #[wasm_bindgen(getter)]
    pub fn success(&self) -> bool {
        self.success
    }

    #[wasm_bindgen(getter)]
    pub fn output(&self) -> String {
        self.output.clone()
    }

    /// Rendered diagnostic, empty on success.
    #[wasm_bindgen(getter)]
    pub fn error(&self) -> String {
        self.error.clone()
    }
}

fn eval_result(source: &str, result: Result<String, ParseError>) -> EvalResult {
    match result {
        Ok(output) => EvalResult {
            success: true,
            output,
            error: String::new(),
        },
        Err(e) => EvalResult {
            success: false,
            output: String::new(),
            error: render_error("input", source, &e),
        },
    }
}

/// Initialize the WASM module (call once at startup).
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Apply a substitution to a type, from one `{subst} type` line.
#[wasm_bindgen]
pub fn apply_line(input: &str) -> EvalResult {
    let result = parse_application(input).map(|(subst, ty)| subst.apply(&ty).to_string());
    eval_result(input, result)
}

/// Parse a type and render it back.
#[wasm_bindgen]
pub fn normalize_type(input: &str) -> EvalResult {
    eval_result(input, parse_type(input).map(|ty| ty.to_string()))
}

/// Compose two substitutions; `first` is applied first.
#[wasm_bindgen]
pub fn compose(second: &str, first: &str) -> EvalResult {
    let second_subst = match parse_substitution(second) {
        Ok(s) => s,
        Err(e) => return eval_result(second, Err(e)),
    };
    let result = parse_substitution(first).map(|first| second_subst.compose(&first).to_string());
    eval_result(first, result)
}
