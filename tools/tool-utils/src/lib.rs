use eyre::Result;
use std::io::{self, BufRead, Write};

/// The answers that decline a confirmation prompt; anything else proceeds
const DECLINE_ANSWERS: [&str; 2] = ["n", "no"];

/// General function to prompt for input with a specific message
pub fn prompt_for_input(prompt: &str) -> io::Result<String> {
    let stdin = io::stdin();
    read_input(&mut stdin.lock(), &mut io::stdout(), prompt)
}

/// Write the prompt to `out` and read a single trimmed line from `input`
pub fn read_input(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<String> {
    write!(out, "{} ", prompt)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Ask the operator whether to continue, returning `false` only if they
/// explicitly decline
pub fn prompt_for_confirmation(prompt: &str) -> Result<bool> {
    let answer = prompt_for_input(prompt)?;
    Ok(!is_declined(&answer))
}

/// Whether an answer to a confirmation prompt declines it
pub fn is_declined(answer: &str) -> bool {
    let answer = answer.trim();
    DECLINE_ANSWERS
        .iter()
        .any(|decline| answer.eq_ignore_ascii_case(decline))
}
