use std::io::{self, Write};

use colored::Colorize;

/// Prints `label` and reads one line from stdin, without the trailing newline.
///
/// Returns `None` once stdin is closed.
pub fn ask(label: &str) -> io::Result<Option<String>> {
    print!("{}", format!("{label}: ").cyan());
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim_end_matches(['\n', '\r']).to_string()))
}

/// Asks for a value, keeping `value` when the answer is blank.
///
/// Returns `false` once stdin is closed.
pub fn edit(label: &str, value: &mut String) -> io::Result<bool> {
    let question = if value.is_empty() {
        label.to_string()
    } else {
        format!("{label} [{value}]")
    };

    let Some(answer) = ask(&question)? else {
        return Ok(false);
    };
    if !answer.trim().is_empty() {
        *value = answer.trim().to_string();
    }
    Ok(true)
}

pub fn confirm(label: &str) -> io::Result<bool> {
    loop {
        let Some(answer) = ask(&format!("{label} (s/n)"))? else {
            return Ok(false);
        };

        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" | "s" | "si" | "sí" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("{}", "Responde 's' o 'n'.".red()),
        }
    }
}
