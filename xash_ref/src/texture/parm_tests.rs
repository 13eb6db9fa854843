/// Unit tests for the texture parameter facade

use crate::graphics_device::mock_graphics_context::MockGraphicsContext;
use crate::graphics_device::{GraphicsContext, ContextCapabilities};
use crate::ref_api::mock_host::MockHost;
use crate::texture::parm::*;
use crate::texture::renderer_state::{RendererState, MAX_LIGHTMAPS, MAX_LIGHTSTYLES};
use crate::texture::texture_descriptor::{TextureDescriptor, TextureFlags, TEXTURE_TARGET_2D};
use crate::texture::texture_table::{TextureLookup, TextureTable};

const NEAREST_CVAR: &str = "gl_texture_nearest";

struct Fixture {
    textures: TextureTable,
    state: RendererState,
    gl: MockGraphicsContext,
    host: MockHost,
    detail: i32,
}

impl Fixture {
    fn new() -> Self {
        let mut textures = TextureTable::new();
        let mut detail = TextureDescriptor::new("gfx/detail/grass", 128, 64)
            .with_flags(TextureFlags::NOMIPMAP)
            .with_texnum(17);
        detail.src_width = 200;
        detail.src_height = 100;
        detail.num_mips = 3;
        detail.depth = 1;
        detail.encode = 2;
        detail.x_scale = 4.0;
        detail.y_scale = 8.0;
        detail.fog_params = [10, 20, 30, 40];
        let detail = textures.insert(detail);

        Self {
            textures,
            state: RendererState::new(),
            gl: MockGraphicsContext::new(),
            host: MockHost::new(800, 600),
            detail,
        }
    }

    fn facade(&self) -> TextureParmFacade<'_> {
        TextureParmFacade {
            textures: &self.textures,
            state: &self.state,
            gl: &self.gl,
            host: &self.host,
            nearest_cvar: NEAREST_CVAR,
        }
    }
}

// ============================================================================
// RefParm
// ============================================================================

#[test]
fn test_ref_parm_codes_round_trip() {
    for code in [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 26, 27, 28, 30, 33, 34, 35, 37, -0x10000] {
        let parm = RefParm::from_raw(code).unwrap();
        assert_eq!(parm.code(), code);
    }
}

#[test]
fn test_ref_parm_unknown_codes() {
    for code in [0, 15, 25, 29, 31, 36, 38, -1, i32::MAX] {
        assert!(RefParm::from_raw(code).is_none(), "code {}", code);
    }
}

// ============================================================================
// Texture fields
// ============================================================================

#[test]
fn test_texture_fields() {
    let f = Fixture::new();
    let facade = f.facade();
    let t = f.detail;

    assert_eq!(facade.get_parm(RefParm::TexWidth.code(), t), 128);
    assert_eq!(facade.get_parm(RefParm::TexHeight.code(), t), 64);
    assert_eq!(facade.get_parm(RefParm::TexSrcWidth.code(), t), 200);
    assert_eq!(facade.get_parm(RefParm::TexSrcHeight.code(), t), 100);
    assert_eq!(facade.get_parm(RefParm::TexTarget.code(), t), TEXTURE_TARGET_2D as i32);
    assert_eq!(facade.get_parm(RefParm::TexTexnum.code(), t), 17);
    assert_eq!(facade.get_parm(RefParm::TexFlags.code(), t), TextureFlags::NOMIPMAP.bits() as i32);
    assert_eq!(facade.get_parm(RefParm::TexDepth.code(), t), 1);
    assert_eq!(facade.get_parm(RefParm::TexGlFormat.code(), t), 0x8058);
    assert_eq!(facade.get_parm(RefParm::TexEncode.code(), t), 2);
    assert_eq!(facade.get_parm(RefParm::TexMipCount.code(), t), 3);
}

#[test]
fn test_unknown_texture_answers_zero() {
    let f = Fixture::new();
    let facade = f.facade();
    for parm in [RefParm::TexWidth, RefParm::TexFlags, RefParm::TexTexnum, RefParm::TexFiltering] {
        assert_eq!(facade.get_parm(parm.code(), 9999), 0);
    }
    assert!(f.host.forwarded.borrow().is_empty());
}

// ============================================================================
// Renderer state
// ============================================================================

#[test]
fn test_skybox_slots() {
    let mut f = Fixture::new();
    f.state.setup_sky([11, 12, 13, 14, 15, 16]);
    let facade = f.facade();

    assert_eq!(facade.get_parm(RefParm::TexSkybox.code(), 0), 11);
    assert_eq!(facade.get_parm(RefParm::TexSkybox.code(), 5), 16);
    assert_eq!(facade.get_parm(RefParm::TexSkybox.code(), 6), 0);
    assert_eq!(facade.get_parm(RefParm::TexSkybox.code(), -1), 0);
}

#[test]
fn test_lightmap_and_lightstyle_clamp_index() {
    let mut f = Fixture::new();
    f.state.lightmap_textures[0] = 100;
    f.state.lightmap_textures[MAX_LIGHTMAPS - 1] = 355;
    f.state.lightstyle_values[0] = 264;
    f.state.lightstyle_values[MAX_LIGHTSTYLES - 1] = 7;
    let facade = f.facade();

    assert_eq!(facade.get_parm(RefParm::TexLightmap.code(), -10), 100);
    assert_eq!(facade.get_parm(RefParm::TexLightmap.code(), 10_000), 355);
    assert_eq!(facade.get_parm(RefParm::LightStyleValue.code(), i32::MIN), 264);
    assert_eq!(facade.get_parm(RefParm::LightStyleValue.code(), 256), 7);
}

#[test]
fn test_sky_texnum() {
    let mut f = Fixture::new();
    f.state.sky_texnum = 42;
    assert_eq!(f.facade().get_parm(RefParm::TexSkyTexnum.code(), 0), 42);
}

// ============================================================================
// Context capabilities
// ============================================================================

#[test]
fn test_context_parms() {
    let mut f = Fixture::new();
    f.gl = MockGraphicsContext::with_capabilities(ContextCapabilities {
        max_texture_units: 8,
        software_gamma_update: true,
        context_type: 2,
        wrapper: 1,
        stencil: true,
        ..Default::default()
    });
    f.gl.active_texture(3);
    let facade = f.facade();

    assert_eq!(facade.get_parm(RefParm::ActiveTmu.code(), 0), 3);
    assert_eq!(facade.get_parm(RefParm::MaxImageUnits.code(), 0), 8);
    assert_eq!(facade.get_parm(RefParm::RebuildGamma.code(), 0), 1);
    assert_eq!(facade.get_parm(RefParm::GlContextType.code(), 0), 2);
    assert_eq!(facade.get_parm(RefParm::GlesWrapper.code(), 0), 1);
    assert_eq!(facade.get_parm(RefParm::StencilActive.code(), 0), 1);
}

#[test]
fn test_texture_memory() {
    let f = Fixture::new();
    let expected = f.textures.memory_usage() as i32;
    assert_eq!(f.facade().get_parm(RefParm::TexMemory.code(), 0), expected);
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_filtering_global_query() {
    let mut f = Fixture::new();
    assert_eq!(f.facade().get_parm(RefParm::TexFiltering.code(), -1), 1);

    f.host = MockHost::new(800, 600).with_cvar(NEAREST_CVAR, 1.0);
    assert_eq!(f.facade().get_parm(RefParm::TexFiltering.code(), -1), 0);
}

#[test]
fn test_filtering_per_texture() {
    let mut f = Fixture::new();
    let nearest = f.textures.insert(
        TextureDescriptor::new("conchars", 256, 256).with_flags(TextureFlags::NEAREST),
    );

    assert_eq!(f.facade().get_parm(RefParm::TexFiltering.code(), f.detail), 1);
    assert_eq!(f.facade().get_parm(RefParm::TexFiltering.code(), nearest), 0);

    f.host = MockHost::new(800, 600).with_cvar(NEAREST_CVAR, 1.0);
    assert_eq!(f.facade().get_parm(RefParm::TexFiltering.code(), f.detail), 0);
}

// ============================================================================
// Forwarding
// ============================================================================

#[test]
fn test_unknown_codes_forward_to_engine() {
    let f = Fixture::new();
    assert_eq!(f.facade().get_parm(15, 3), 15_003);
    assert_eq!(f.facade().get_parm(-2, 0), -2000);
    assert_eq!(*f.host.forwarded.borrow(), vec![(15, 3), (-2, 0)]);
}

// ============================================================================
// Companion accessors
// ============================================================================

#[test]
fn test_detail_scale_writes_only_provided_slots() {
    let f = Fixture::new();
    let facade = f.facade();

    let (mut x, mut y) = (0.0, 0.0);
    facade.detail_scale_for_texture(f.detail, Some(&mut x), Some(&mut y));
    assert_eq!((x, y), (4.0, 8.0));

    let mut y_only = -1.0;
    facade.detail_scale_for_texture(f.detail, None, Some(&mut y_only));
    assert_eq!(y_only, 8.0);

    let mut untouched = -1.0;
    facade.detail_scale_for_texture(9999, Some(&mut untouched), None);
    assert_eq!(untouched, -1.0);
}

#[test]
fn test_extra_parms_writes_only_provided_slots() {
    let f = Fixture::new();
    let facade = f.facade();

    let (mut r, mut g, mut b, mut d) = (0u8, 0u8, 0u8, 0u8);
    facade.extra_parms_for_texture(f.detail, Some(&mut r), Some(&mut g), Some(&mut b), Some(&mut d));
    assert_eq!([r, g, b, d], [10, 20, 30, 40]);

    let mut density = 0u8;
    facade.extra_parms_for_texture(f.detail, None, None, None, Some(&mut density));
    assert_eq!(density, 40);

    facade.extra_parms_for_texture(f.detail, None, None, None, None);
}

#[test]
fn test_texture_parms_and_override() {
    let mut f = Fixture::new();
    let (mut w, mut h) = (0, 0);
    f.facade().texture_parms(f.detail, Some(&mut w), Some(&mut h));
    assert_eq!((w, h), (200, 100));

    override_texture_source_size(&mut f.textures, f.detail, 320, 240);
    f.facade().texture_parms(f.detail, Some(&mut w), None);
    assert_eq!(w, 320);
    assert_eq!(f.facade().get_parm(RefParm::TexSrcHeight.code(), f.detail), 240);
    // Uploaded size unaffected
    assert_eq!(f.facade().get_parm(RefParm::TexWidth.code(), f.detail), 128);

    // Unknown index ignored
    override_texture_source_size(&mut f.textures, 9999, 1, 1);
}
