use std::fmt;

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Default,
    Destructive,
}

/// A user-facing notification. Flows collect them; pages print them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            kind: ToastKind::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Destructive
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ToastKind::Default => write!(
                f,
                "{} {}: {}",
                "✓".green(),
                self.title.green().bold(),
                self.description
            ),
            ToastKind::Destructive => write!(
                f,
                "{} {}: {}",
                "✗".red(),
                self.title.red().bold(),
                self.description.red()
            ),
        }
    }
}

/// Prints each toast; errors go to stderr.
pub fn show(toasts: impl IntoIterator<Item = Toast>) {
    for toast in toasts {
        if toast.is_error() {
            eprintln!("{toast}");
        } else {
            println!("{toast}");
        }
    }
}
