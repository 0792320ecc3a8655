use crate::domain::ports::BrowsingContext;
use std::process::{Command, Stdio};
use std::sync::Mutex;

/// Opens URLs with the desktop's default handler.
#[derive(Debug, Clone)]
pub struct SystemBrowser {
    program: String,
    args: Vec<String>,
}

impl Default for SystemBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemBrowser {
    pub fn new() -> Self {
        if cfg!(target_os = "macos") {
            Self::with_command("open", Vec::new())
        } else if cfg!(target_os = "windows") {
            // not `cmd /C start`: cmd would expand `%NAME%` runs inside the encoded link
            Self::with_command("rundll32", vec!["url.dll,FileProtocolHandler".into()])
        } else {
            Self::with_command("xdg-open", Vec::new())
        }
    }

    pub fn with_command(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl BrowsingContext for SystemBrowser {
    fn open_in_new_context(&self, url: &str) {
        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                tracing::debug!("Launched {} (pid {})", self.program, child.id());
                // reap the opener so it does not linger as a zombie
                std::thread::spawn(move || {
                    if let Err(e) = child.wait() {
                        tracing::debug!("Opener exited abnormally: {}", e);
                    }
                });
            }
            Err(e) => tracing::warn!("⚠️ Could not launch {}: {}", self.program, e),
        }
    }
}

/// Keeps every requested URL instead of opening anything.
#[derive(Debug, Default)]
pub struct RecordingBrowser {
    opened: Mutex<Vec<String>>,
}

impl RecordingBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl BrowsingContext for RecordingBrowser {
    fn open_in_new_context(&self, url: &str) {
        self.opened
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(url.to_string());
    }
}
