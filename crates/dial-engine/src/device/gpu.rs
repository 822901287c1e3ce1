use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Render through an sRGB-encoding view, so the hardware applies the sRGB
    /// transfer on write.
    ///
    /// `Color` components are already sRGB-encoded (CSS semantics), so the
    /// default is `false`: colors and blending land on screen unchanged, even
    /// when the surface itself only offers sRGB formats.
    pub prefer_srgb: bool,

    /// Adapter preference. A once-per-second redraw has no use for a discrete GPU.
    pub power_preference: wgpu::PowerPreference,

    /// Present mode (swap behavior). FIFO is supported everywhere.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode; falls back to the first supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Desired maximum frame latency hint for the surface.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            power_preference: wgpu::PowerPreference::LowPower,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            desired_maximum_frame_latency: 2,
        }
    }
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Unrecoverable (out of memory); the runtime shuts down.
    Fatal,
}

/// A single acquired frame. Dropping the surface texture after submission presents it.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// wgpu device, queue and the window surface they present to.
///
/// The surface borrows the window for `'w`; the runtime keeps both in one
/// self-referencing entry so the window outlives the surface.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,
}

impl<'w> Gpu<'w> {
    /// Creates a GPU context bound to `window`.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("dial device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let formats = choose_formats(&caps.formats, init.prefer_srgb)
            .context("surface reports no supported formats")?;
        log::debug!("surface format {:?}, view format {:?}", formats.surface, formats.view);
        let alpha_mode = init
            .alpha_mode
            .filter(|m| caps.alpha_modes.contains(m))
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: formats.surface,
            width: size.width,
            height: size.height,
            present_mode: init.present_mode,
            alpha_mode,
            view_formats: if formats.view == formats.surface { vec![] } else { vec![formats.view] },
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        surface.configure(&device, &config);

        Ok(Self { surface, device, queue, config, view_format: formats.view, size })
    }

    /// Format of the per-frame render view; pipelines target this.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.view_format
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Reconfigures the surface for a new drawable size.
    ///
    /// A 0x0 size (minimized window) cannot be configured; it is recorded and
    /// configuration waits for the next non-zero size.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Acquires the next surface texture and opens an encoder for it.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.view_format),
                ..Default::default()
            });
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("dial frame encoder"),
            });

        Ok(GpuFrame { surface_texture, view, encoder })
    }

    /// Submits the recorded commands and presents the frame.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame { surface_texture, view, encoder } = frame;
        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }

    /// Converts a `SurfaceError` into a higher-level action.
    pub fn handle_surface_error(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        match err {
            SurfaceError::Lost | SurfaceError::Outdated => {
                if self.size.width > 0 && self.size.height > 0 {
                    self.surface.configure(&self.device, &self.config);
                }
                log::warn!("surface {err}; reconfigured");
                SurfaceErrorAction::Reconfigured
            }
            SurfaceError::OutOfMemory => {
                log::error!("surface out of memory");
                SurfaceErrorAction::Fatal
            }
            SurfaceError::Timeout | SurfaceError::Other => {
                log::warn!("surface {err}; frame skipped");
                SurfaceErrorAction::SkipFrame
            }
        }
    }
}

/// Swapchain format plus the format frames are rendered through.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct SurfaceFormats {
    surface: wgpu::TextureFormat,
    view: wgpu::TextureFormat,
}

/// Picks the swapchain format and its render view.
///
/// Without `prefer_srgb`, a non-sRGB format is preferred; if the surface only
/// offers sRGB ones, the view drops the suffix so no transfer is applied.
fn choose_formats(formats: &[wgpu::TextureFormat], prefer_srgb: bool) -> Option<SurfaceFormats> {
    let first = formats.first().copied()?;
    let surface = formats
        .iter()
        .copied()
        .find(|f| f.is_srgb() == prefer_srgb)
        .unwrap_or(first);

    let view = if prefer_srgb { surface } else { surface.remove_srgb_suffix() };
    Some(SurfaceFormats { surface, view })
}

#[cfg(test)]
mod tests {
    use wgpu::TextureFormat as F;

    use super::*;

    #[test]
    fn default_renders_without_srgb_transfer() {
        assert!(!GpuInit::default().prefer_srgb);
        let f = choose_formats(&[F::Bgra8UnormSrgb, F::Bgra8Unorm], false).unwrap();
        assert_eq!(f, SurfaceFormats { surface: F::Bgra8Unorm, view: F::Bgra8Unorm });
    }

    #[test]
    fn srgb_only_surface_gets_an_unencoded_view() {
        let f = choose_formats(&[F::Bgra8UnormSrgb], false).unwrap();
        assert_eq!(f.surface, F::Bgra8UnormSrgb);
        assert_eq!(f.view, F::Bgra8Unorm);
        assert!(!f.view.is_srgb());
    }

    #[test]
    fn prefer_srgb_keeps_the_encoding_view() {
        let f = choose_formats(&[F::Rgba8Unorm, F::Rgba8UnormSrgb], true).unwrap();
        assert_eq!(f, SurfaceFormats { surface: F::Rgba8UnormSrgb, view: F::Rgba8UnormSrgb });
    }

    #[test]
    fn no_formats_is_none() {
        assert_eq!(choose_formats(&[], false), None);
    }
}
