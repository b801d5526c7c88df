use crate::BlendMode;
use crate::device::RenderDevice;

/// Switches the device blend mode. Holds exactly one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendModeBatch {
    mode: BlendMode,
}

impl BlendModeBatch {
    pub fn new(mode: BlendMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> BlendMode {
        self.mode
    }

    pub(super) fn render(&self, device: &dyn RenderDevice) {
        device.change_blend_mode(self.mode);
    }
}

/// Activates a custom shader for the draws that follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomShaderBatch {
    shader_id: String,
}

impl CustomShaderBatch {
    pub fn new(shader_id: impl Into<String>) -> Self {
        Self {
            shader_id: shader_id.into(),
        }
    }

    pub fn shader_id(&self) -> &str {
        &self.shader_id
    }

    pub(super) fn render(&self, device: &dyn RenderDevice) {
        device.activate_custom_shader(&self.shader_id);
    }
}
