//! Prompt templates for the two in-desktop AI features.

/// Prompt asking the model to act as a Python interpreter for the terminal
/// app. `history` is the accumulated transcript of the session so state
/// carries across lines.
pub fn python_repl(code: &str, history: &str) -> String {
    format!(
        "ACT AS A PYTHON INTERPRETER.\n\
         I will give you Python code. You will execute it (simulate) and \
         return ONLY the output (stdout/stderr) or the return value.\n\
         Do not wrap in markdown blocks (no ```).\n\
         Do not explain.\n\
         If there is an error, output the Python error message.\n\n\
         PREVIOUS HISTORY:\n{history}\n\n\
         CURRENT CODE:\n{code}\n"
    )
}

/// Prompt asking for a short continuation or fix of the code editor's
/// current buffer.
pub fn code_suggestion(context: &str) -> String {
    format!("Provide a short, concise continuation or fix for this code:\n{context}")
}
