//! In-memory [`Host`] used by the unit tests.

use crate::host::{Host, HostError, ScriptTag};

#[derive(Debug, Default)]
pub struct FakeHost {
    pub script: Option<ScriptTag>,
    pub mounted: bool,
    pub style: Option<String>,
    pub bubble: bool,
    pub frame_src: Option<String>,
    pub frame_loads: usize,
    pub container_open: Option<bool>,
    pub diagnostics: Vec<String>,
    /// Name of the injection step that should fail, if any.
    pub fail_on: Option<&'static str>,
}

impl FakeHost {
    pub fn with_script(src: &str, chatbot_id: Option<&str>) -> Self {
        Self {
            script: Some(ScriptTag { src: src.to_owned(), chatbot_id: chatbot_id.map(str::to_owned) }),
            ..Self::default()
        }
    }

    /// Whether any node is currently injected.
    pub fn has_injected_nodes(&self) -> bool {
        self.style.is_some() || self.bubble || self.frame_src.is_some()
    }

    fn step(&self, name: &'static str) -> Result<(), HostError> {
        if self.fail_on == Some(name) { Err(HostError::Dom(format!("{name} failed"))) } else { Ok(()) }
    }
}

impl Host for FakeHost {
    fn invoking_script(&self) -> Option<ScriptTag> {
        self.script.clone()
    }

    fn widget_mounted(&self) -> bool {
        self.mounted
    }

    fn inject_style(&mut self, css: &str) -> Result<(), HostError> {
        self.step("style")?;
        self.style = Some(css.to_owned());
        Ok(())
    }

    fn inject_bubble(&mut self) -> Result<(), HostError> {
        self.step("bubble")?;
        self.bubble = true;
        self.mounted = true;
        Ok(())
    }

    fn inject_container(&mut self, surface_url: &str) -> Result<(), HostError> {
        self.step("container")?;
        self.frame_src = Some(surface_url.to_owned());
        self.frame_loads += 1;
        Ok(())
    }

    fn set_container_open(&mut self, open: bool) {
        self.container_open = Some(open);
    }

    fn remove_injected(&mut self) {
        self.style = None;
        self.bubble = false;
        self.frame_src = None;
        self.container_open = None;
        self.mounted = false;
    }

    fn diagnostic(&mut self, message: &str) {
        self.diagnostics.push(message.to_owned());
    }
}
