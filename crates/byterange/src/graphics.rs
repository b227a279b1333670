//! Render-path switches gated by what the device reports it supports.
//!
//! The capability query and shader setup live elsewhere; this module only
//! decides which buffer paths may be switched on.

/// Device capabilities consulted when enabling a render path.
pub trait Capabilities {
    /// Whether vertex array objects are available.
    fn supports_vao(&self) -> bool;
    /// The reported graphics API version, e.g. `3.0`.
    fn version(&self) -> f32;
}

/// Version a device must exceed before buffer mapping is used.
pub const MAP_BUFFER_MIN_VERSION: f32 = 2.0;

/// Which buffer paths the renderer uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct GraphicsFlags {
    /// Vertex buffer objects. Always follows `use_vao`.
    pub use_vbo: bool,
    /// Vertex array objects.
    pub use_vao: bool,
    /// Mapped buffer uploads.
    pub use_map_buffer: bool,
}

impl GraphicsFlags {
    /// All paths off.
    #[must_use]
    pub fn init() -> Self {
        Self::default()
    }

    /// Turns VAOs (and with them VBOs) on if requested and supported, off
    /// otherwise.
    pub fn set_use_vao(&mut self, caps: &impl Capabilities, use_vao: bool) {
        let on = use_vao && caps.supports_vao();
        self.use_vao = on;
        self.use_vbo = on;
        log::debug!("graphics use_vao = {on}");
    }

    /// Turns buffer mapping on if requested and the version is above
    /// [`MAP_BUFFER_MIN_VERSION`], off otherwise.
    pub fn set_use_map_buffer(&mut self, caps: &impl Capabilities, use_map_buffer: bool) {
        let on = use_map_buffer && caps.version() > MAP_BUFFER_MIN_VERSION;
        self.use_map_buffer = on;
        log::debug!("graphics use_map_buffer = {on}");
    }
}
